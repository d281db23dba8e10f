use ndarray::{Array1, Array2};

/// Fully-connected atom graph derived from a single composition.
///
/// One row per distinct element, in formula order. `self_idx` and
/// `nbr_idx` jointly enumerate every ordered pair (i, j) with i ≠ j, so
/// both have length M·(M−1) for M atoms. Weights are normalized to sum
/// to 1. Never mutated once built.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomGraph {
    /// Normalized stoichiometric weights, shape (M, 1).
    pub weights: Array2<f64>,
    /// Stacked element feature vectors, shape (M, D).
    pub atom_features: Array2<f64>,
    /// Source atom of each directed edge, length M·(M−1).
    pub self_idx: Array1<usize>,
    /// Neighbor atom of each directed edge, length M·(M−1).
    pub nbr_idx: Array1<usize>,
}

impl AtomGraph {
    #[inline]
    pub fn atom_count(&self) -> usize {
        self.weights.nrows()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.self_idx.len()
    }

    #[inline]
    pub fn feature_dim(&self) -> usize {
        self.atom_features.ncols()
    }
}
