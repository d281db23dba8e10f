//! Error types for composition graph construction.
//!
//! This module defines the error type used by the [`build_graph`](super::build_graph)
//! pipeline. Errors are categorized by source: formula parsing, element
//! featurisation, and degenerate single-element compositions.

use thiserror::Error;

use super::parser::ParseError;
use crate::io::features::UnknownElementError;

/// Errors that can occur while building a composition's atom graph.
///
/// All variants are `Clone` so that a memoized failure can be handed
/// back to every caller that hits the same dataset row.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The composition string is malformed.
    #[error("composition parsing failed: {0}")]
    Parse(#[from] ParseError),

    /// An element in the composition is absent from the feature table.
    ///
    /// The reference policy is fail-fast: the caller must abort the
    /// current run rather than drop the element or the row.
    #[error("element featurisation failed: {0}")]
    UnknownElement(#[from] UnknownElementError),

    /// The composition has exactly one distinct element.
    ///
    /// A pure system has no neighbor pair to form an edge from, so it
    /// cannot be represented as a fully-connected graph.
    #[error("composition '{composition}' is a pure system: no neighbor edges can be formed")]
    PureSystem {
        /// The offending composition string.
        composition: String,
    },
}

impl Error {
    /// Creates a [`PureSystem`](Error::PureSystem) error.
    pub fn pure_system(composition: impl Into<String>) -> Self {
        Self::PureSystem {
            composition: composition.into(),
        }
    }
}
