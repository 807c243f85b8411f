//! # QLink Predict
//!
//! Link prediction over a concept graph. Three structural algorithms
//! score concept pairs that are not yet connected:
//!
//! - **Common Neighbors**: how many neighbors the pair shares
//! - **Jaccard Coefficient**: shared neighbors over all neighbors
//! - **Preferential Attachment**: product of (degree + 1)
//!
//! The [`SuggestionAggregator`](aggregate::SuggestionAggregator) merges
//! their output, and [`PredictionRequest`](request::PredictionRequest)
//! bundles selector, threshold and cap into a single call.
//!
//! ```rust
//! use qlink_predict::prelude::*;
//!
//! let mut store = GraphStore::new();
//! for id in ["a", "b", "c"] {
//!     store.add_concept(Concept::with_id(id, id, ""));
//! }
//! store.add_relationship(Relationship::new("a", "b"));
//! store.add_relationship(Relationship::new("b", "c"));
//!
//! let suggestions = Algorithm::CommonNeighbors.predict_links(&store, 5);
//! assert_eq!(suggestions.len(), 1);
//! assert!(suggestions[0].is_between(&"a".into(), &"c".into()));
//! ```

pub mod aggregate;
pub mod algorithm;
pub mod common_neighbors;
pub mod jaccard;
pub mod pipeline;
pub mod preferential;
pub mod request;
pub mod prelude;
