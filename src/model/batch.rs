use ndarray::{Array1, Array2};

/// A list of atom graphs concatenated into flat arrays.
///
/// All index entries are offset so they resolve into the batch-global
/// atom arrays, and `crystal_atom_idx` maps every atom row back to the
/// batch-local index of its source composition.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    /// Concatenated atom weights, shape (Σ M_k, 1).
    pub weights: Array2<f64>,
    /// Concatenated atom features, shape (Σ M_k, D).
    pub atom_features: Array2<f64>,
    /// Concatenated, offset self indices.
    pub self_idx: Array1<usize>,
    /// Concatenated, offset neighbor indices.
    pub nbr_idx: Array1<usize>,
    /// For each atom row, the batch-local composition index it came from.
    pub crystal_atom_idx: Array1<usize>,
    /// Stacked targets, shape (N, 1).
    pub targets: Array2<f64>,
    /// Composition strings, input order.
    pub compositions: Vec<String>,
    /// Record ids, input order.
    pub ids: Vec<String>,
}

impl Batch {
    /// Number of compositions in the batch.
    #[inline]
    pub fn len(&self) -> usize {
        self.compositions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.compositions.is_empty()
    }

    /// Total atom rows across all compositions.
    #[inline]
    pub fn atom_count(&self) -> usize {
        self.crystal_atom_idx.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.self_idx.len()
    }
}
