//! # QLink Core
//!
//! Core types for QLink concept graphs.
//!
//! A QLink graph is a mental model: labeled **concepts** joined by typed,
//! weighted, optionally directed **relationships**. This crate defines the
//! value types shared by every other crate in the workspace:
//!
//! - **Concept** / **Relationship**: the node and edge data, identified by
//!   stable string ids that never change after creation
//! - **LinkSuggestion**: a predicted relationship with a confidence in `[0, 1]`
//! - **ModelStatistics**: aggregate counts derived from a graph
//! - **ModelChangeEvent**: what changed, delivered to a [`ChangeObserver`]
//! - **ConceptGraph**: the read-only view the query engine and the link
//!   predictors work against
//!
//! ## Quick Start
//!
//! ```rust
//! use qlink_core::prelude::*;
//!
//! let cell = Concept::new("Cell", "Basic unit of life");
//! let membrane = Concept::new("Membrane", "");
//!
//! let rel = Relationship::new(cell.id().clone(), membrane.id().clone())
//!     .with_type(relationship_types::PART_OF);
//! assert!(rel.touches(cell.id()));
//! ```
//!
//! [`ChangeObserver`]: event::ChangeObserver

pub mod types;
pub mod event;
pub mod topology;
pub mod error;
pub mod prelude;
