//! # QLink Runtime
//!
//! The graph store and everything derived from it.
//!
//! [`GraphStore`](store::GraphStore) owns the concepts and relationships of
//! one mental model and reports every structural change to its observers.
//! [`GraphQueryEngine`](query::GraphQueryEngine) answers read-only
//! questions about any [`ConceptGraph`](qlink_core::topology::ConceptGraph):
//! connectivity, paths, orphans, importance, validation and statistics.

pub mod store;
pub mod query;
pub mod snapshot;
pub mod prelude;
