//! A pure Rust library for turning chemical composition strings into
//! fully-connected atom graphs and collating them into batches for
//! structure-agnostic message-passing neural networks.
//!
//! # Features
//!
//! - **Composition parsing** — Formula strings with nested
//!   parenthesised groups and fractional stoichiometries resolve to
//!   ordered element/weight pairs
//! - **Graph construction** — Each composition expands into a directed,
//!   fully-connected graph over its distinct elements, with normalized
//!   stoichiometric weights and featurised atoms
//! - **Dataset memoization** — An indexable dataset over a CSV table
//!   builds each row's graph once and caches it for the lifetime of the
//!   dataset, safe to share across data-loading threads
//! - **Batch collation** — Variable-sized graphs concatenate into flat
//!   batch arrays with offset index bookkeeping and a crystal-to-atom
//!   scatter map
//!
//! # Quick Start
//!
//! ```
//! use std::collections::HashMap;
//! use stoichgraph::{build_graph, collate_batch, CompositionData, CompositionRecord, Featuriser};
//!
//! // Element feature table (normally loaded from a JSON embedding file)
//! let mut table = HashMap::new();
//! table.insert("Fe".to_string(), vec![1.0, 0.0, 0.0]);
//! table.insert("O".to_string(), vec![0.0, 1.0, 0.0]);
//! table.insert("Li".to_string(), vec![0.0, 0.0, 1.0]);
//! let featuriser = Featuriser::from_table(table)?;
//!
//! // One composition: Fe2O3 has two distinct elements, so two edges
//! let graph = build_graph("Fe2O3", &featuriser)?;
//! assert_eq!(graph.atom_count(), 2);
//! assert_eq!(graph.weights[[0, 0]], 0.4);
//! assert_eq!(graph.weights[[1, 0]], 0.6);
//! assert_eq!(graph.self_idx.to_vec(), vec![0, 1]);
//! assert_eq!(graph.nbr_idx.to_vec(), vec![1, 0]);
//!
//! // A dataset memoizes graph construction per row
//! let records = vec![
//!     CompositionRecord::new("mp-1", "Fe2O3", 1.5),
//!     CompositionRecord::new("mp-2", "LiFeO2", -0.2),
//! ];
//! let dataset = CompositionData::new(records, featuriser);
//!
//! // Collation offsets indices into the batch-global atom arrays
//! let batch = collate_batch(&[dataset.get(0)?, dataset.get(1)?]);
//! assert_eq!(batch.len(), 2);
//! assert_eq!(batch.atom_count(), 5);
//! assert_eq!(batch.crystal_atom_idx.to_vec(), vec![0, 0, 1, 1, 1]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Module Organization
//!
//! - [`io`] — Loading composition tables (CSV) and element feature
//!   tables (JSON)
//! - [`build_graph`] — Composition to atom graph
//! - [`collate_batch`] — List of items to one flat batch
//! - [`CompositionData`] — Indexable, memoizing dataset
//!
//! # Data Types
//!
//! - [`CompositionRecord`] — One row of the backing table
//! - [`AtomGraph`] — Weights, features, and edge indices for one
//!   composition
//! - [`Batch`] — Concatenated arrays plus the crystal-to-atom map
//! - [`Normalizer`] / [`NormalizerState`] — Target standardization with
//!   a serializable two-scalar state
//! - [`AverageMeter`] — Online mean for monitoring scalar metrics
//!
//! # Errors
//!
//! - [`GraphError`] — Parse failures, unknown elements, and
//!   single-element (pure system) compositions
//! - [`io::Error`] — Missing files and malformed tables
//!
//! Graph connectivity is deliberately over composition only: no
//! spatial or bond structure is modeled, and downstream network
//! weights depend on this exact convention.

mod dataset;
mod graph;
mod model;
mod stats;

pub mod io;

pub use dataset::{CompositionData, DatasetItem};
pub use graph::{build_graph, collate_batch, parse_composition, ParseError};
pub use io::features::{Featuriser, UnknownElementError};
pub use model::batch::Batch;
pub use model::graph::AtomGraph;
pub use model::record::CompositionRecord;
pub use stats::{AverageMeter, Normalizer, NormalizerState};

pub use graph::Error as GraphError;
