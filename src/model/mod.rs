//! Core data structures representing compositions and their graph forms.
//!
//! This module provides the types that flow through `stoichgraph`:
//!
//! - [`record`] – Raw rows of the composition table (id, formula, target).
//! - [`graph`] – The fully-connected atom graph derived from one composition.
//! - [`batch`] – Many atom graphs concatenated into flat batch arrays.
//!
//! The data model intentionally separates the raw tabular input
//! ([`CompositionRecord`]) from the derived graph representation
//! ([`AtomGraph`]), allowing the [`crate::build_graph`] pipeline to
//! transform one into the other while the dataset layer memoizes the
//! results.
//!
//! [`CompositionRecord`]: record::CompositionRecord
//! [`AtomGraph`]: graph::AtomGraph

pub mod batch;
pub mod graph;
pub mod record;
