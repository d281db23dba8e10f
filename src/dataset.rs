use std::path::Path;
use std::sync::{Arc, OnceLock};

use crate::graph::{self, build_graph};
use crate::io;
use crate::io::features::Featuriser;
use crate::io::table;
use crate::model::graph::AtomGraph;
use crate::model::record::CompositionRecord;

/// One dataset row, ready for batching.
#[derive(Debug, Clone)]
pub struct DatasetItem {
    /// Shared handle to the memoized atom graph.
    pub graph: Arc<AtomGraph>,
    pub target: f64,
    pub composition: String,
    pub id: String,
}

/// Indexable dataset over a composition table, memoizing graph
/// construction per row index.
///
/// The cache is an arena of per-row once-cells sized to the table:
/// unbounded, never evicted, and safe to share across threads, with
/// at-most-once construction per index guaranteed even when several
/// threads race on the same row. Memory grows linearly with the number
/// of distinct rows accessed; for one training run over a fixed table
/// this is the intended trade-off.
#[derive(Debug)]
pub struct CompositionData {
    records: Vec<CompositionRecord>,
    featuriser: Featuriser,
    cache: Vec<OnceLock<Result<Arc<AtomGraph>, graph::Error>>>,
}

impl CompositionData {
    /// Loads the composition table and the element feature table.
    ///
    /// Both paths are checked eagerly; a missing file fails here,
    /// before any row is touched.
    pub fn from_paths(
        data_path: impl AsRef<Path>,
        fea_path: impl AsRef<Path>,
    ) -> Result<Self, io::Error> {
        let records = table::load_records(data_path)?;
        let featuriser = Featuriser::from_path(fea_path)?;
        Ok(Self::new(records, featuriser))
    }

    /// Builds a dataset over in-memory records.
    pub fn new(records: Vec<CompositionRecord>, featuriser: Featuriser) -> Self {
        let cache = (0..records.len()).map(|_| OnceLock::new()).collect();
        Self {
            records,
            featuriser,
            cache,
        }
    }

    /// Number of rows in the backing table.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Feature vector length of the underlying featuriser.
    #[inline]
    pub fn embedding_size(&self) -> usize {
        self.featuriser.embedding_size()
    }

    /// Returns the graph, target, composition, and id for row `idx`.
    ///
    /// The graph is built on first access and memoized; later calls
    /// return a handle to the same allocation. Failures are memoized
    /// too, so a failing row reports the same error on every access
    /// without re-running construction.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len()`, matching slice indexing.
    pub fn get(&self, idx: usize) -> Result<DatasetItem, graph::Error> {
        let record = &self.records[idx];
        let cached = self.cache[idx]
            .get_or_init(|| build_graph(&record.composition, &self.featuriser).map(Arc::new));
        let graph = cached.clone()?;
        Ok(DatasetItem {
            graph,
            target: record.target,
            composition: record.composition.clone(),
            id: record.id.clone(),
        })
    }
}
