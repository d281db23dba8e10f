use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::debug;
use thiserror::Error;

use super::error::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no feature vector for element '{0}'")]
pub struct UnknownElementError(String);

/// Lookup table mapping element symbols to fixed-length feature vectors.
///
/// Every vector in the table has the same length, established at load
/// time and exposed as [`embedding_size`](Featuriser::embedding_size).
#[derive(Debug, Clone)]
pub struct Featuriser {
    table: HashMap<String, Vec<f64>>,
    dim: usize,
}

impl Featuriser {
    /// Loads a feature table from a JSON file of the form
    /// `{"Fe": [0.0, 1.0, ...], "O": [...], ...}`.
    ///
    /// The path is checked eagerly: a missing file fails here, before
    /// any element lookup is attempted.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::missing_file(path));
        }
        let text = fs::read_to_string(path)?;
        let table: HashMap<String, Vec<f64>> =
            serde_json::from_str(&text).map_err(|e| Error::features(e.to_string()))?;
        let featuriser = Self::from_table(table)?;
        debug!(
            "loaded feature table from {}: {} elements, embedding size {}",
            path.display(),
            featuriser.table.len(),
            featuriser.dim
        );
        Ok(featuriser)
    }

    /// Builds a featuriser from an in-memory table.
    ///
    /// Fails if the table is empty or the vectors do not all share one
    /// positive length.
    pub fn from_table(table: HashMap<String, Vec<f64>>) -> Result<Self, Error> {
        let dim = match table.values().next() {
            Some(vector) => vector.len(),
            None => return Err(Error::features("feature table is empty")),
        };
        if dim == 0 {
            return Err(Error::features("feature vectors are empty"));
        }
        for (symbol, vector) in &table {
            if vector.len() != dim {
                return Err(Error::features(format!(
                    "feature vector for '{}' has length {}, expected {}",
                    symbol,
                    vector.len(),
                    dim
                )));
            }
        }
        Ok(Self { table, dim })
    }

    /// Length of every feature vector in the table.
    #[inline]
    pub fn embedding_size(&self) -> usize {
        self.dim
    }

    /// Feature vector for `symbol`.
    ///
    /// An unknown symbol is an error the caller must treat as fatal for
    /// the current run; no default vector is ever substituted.
    pub fn get_fea(&self, symbol: &str) -> Result<&[f64], UnknownElementError> {
        self.table
            .get(symbol)
            .map(Vec::as_slice)
            .ok_or_else(|| UnknownElementError(symbol.to_string()))
    }
}
