use ndarray::{Array1, Array2, Axis};

use crate::dataset::DatasetItem;
use crate::model::batch::Batch;

/// Merges a list of per-composition items into one flat batch.
///
/// Items are consumed in input order with a running atom-count offset:
/// weights and features are appended unmodified, every self/neighbor
/// index is shifted by the offset so it resolves into the batch-global
/// atom arrays, and `crystal_atom_idx` receives M_k copies of the
/// batch-local index k. An empty input produces an empty batch.
pub fn collate_batch(items: &[DatasetItem]) -> Batch {
    let total_atoms: usize = items.iter().map(|item| item.graph.atom_count()).sum();
    let total_edges: usize = items.iter().map(|item| item.graph.edge_count()).sum();
    let dim = items
        .first()
        .map(|item| item.graph.feature_dim())
        .unwrap_or(0);

    let mut weights = Vec::with_capacity(total_atoms);
    let mut features = Vec::with_capacity(total_atoms * dim);
    let mut self_idx = Vec::with_capacity(total_edges);
    let mut nbr_idx = Vec::with_capacity(total_edges);
    let mut crystal_atom_idx = Vec::with_capacity(total_atoms);
    let mut targets = Vec::with_capacity(items.len());
    let mut compositions = Vec::with_capacity(items.len());
    let mut ids = Vec::with_capacity(items.len());

    let mut base_idx = 0;
    for (k, item) in items.iter().enumerate() {
        let graph = &item.graph;
        let n_i = graph.atom_count();

        weights.extend(graph.weights.iter().copied());
        features.extend(graph.atom_features.iter().copied());

        self_idx.extend(graph.self_idx.iter().map(|i| i + base_idx));
        nbr_idx.extend(graph.nbr_idx.iter().map(|j| j + base_idx));

        crystal_atom_idx.extend(std::iter::repeat(k).take(n_i));

        targets.push(item.target);
        compositions.push(item.composition.clone());
        ids.push(item.id.clone());

        base_idx += n_i;
    }

    let atom_features = Array2::from_shape_vec((total_atoms, dim), features)
        .expect("concatenated feature rows match (ΣM, D). This is a library bug.");

    Batch {
        weights: Array1::from_vec(weights).insert_axis(Axis(1)),
        atom_features,
        self_idx: Array1::from_vec(self_idx),
        nbr_idx: Array1::from_vec(nbr_idx),
        crystal_atom_idx: Array1::from_vec(crystal_atom_idx),
        targets: Array1::from_vec(targets).insert_axis(Axis(1)),
        compositions,
        ids,
    }
}
