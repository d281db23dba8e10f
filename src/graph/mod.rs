mod collate;
mod error;
mod parser;

pub use collate::collate_batch;
pub use error::Error;
pub use parser::{parse_composition, ParseError};

use ndarray::{Array1, Array2, Axis};

use crate::io::features::Featuriser;
use crate::model::graph::AtomGraph;

/// Builds the fully-connected atom graph for one composition.
///
/// Parses the formula, normalizes the stoichiometric weights to sum to
/// 1 (element order preserved), looks up every element's feature
/// vector, and enumerates all M·(M−1) directed edges: for each atom i,
/// `self_idx` holds M−1 copies of i and `nbr_idx` holds every j ≠ i in
/// increasing order. Connectivity is over composition only; no spatial
/// structure is modeled.
pub fn build_graph(composition: &str, featuriser: &Featuriser) -> Result<AtomGraph, Error> {
    let parsed = parser::parse_composition(composition)?;

    let total: f64 = parsed.iter().map(|(_, amount)| amount).sum();
    let weights: Vec<f64> = parsed.iter().map(|(_, amount)| amount / total).collect();

    if parsed.len() == 1 {
        return Err(Error::pure_system(composition));
    }

    let dim = featuriser.embedding_size();
    let mut features = Vec::with_capacity(parsed.len() * dim);
    for (symbol, _) in &parsed {
        features.extend_from_slice(featuriser.get_fea(symbol)?);
    }

    let m = parsed.len();
    let mut self_idx = Vec::with_capacity(m * (m - 1));
    let mut nbr_idx = Vec::with_capacity(m * (m - 1));
    for i in 0..m {
        for j in 0..m {
            if j != i {
                self_idx.push(i);
                nbr_idx.push(j);
            }
        }
    }

    let atom_features = Array2::from_shape_vec((m, dim), features)
        .expect("stacked feature rows match (M, D). This is a library bug.");

    Ok(AtomGraph {
        weights: Array1::from_vec(weights).insert_axis(Axis(1)),
        atom_features,
        self_idx: Array1::from_vec(self_idx),
        nbr_idx: Array1::from_vec(nbr_idx),
    })
}
