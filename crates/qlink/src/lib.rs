//! # QLink
//!
//! Concept graphs with link prediction.
//!
//! QLink keeps a model of concepts and the relationships between them, answers
//! structural questions about it, and suggests relationships the author has
//! not drawn yet by looking at the shape of the graph.
//!
//! ## Quick Start
//!
//! ```rust
//! use qlink::prelude::*;
//!
//! let mut store = GraphStore::named("Biology");
//! let cell = Concept::new("Cell", "Basic unit of life");
//! let dna = Concept::new("DNA", "Genetic material");
//! let protein = Concept::new("Protein", "Built from DNA instructions");
//! let (cell_id, dna_id, protein_id) = (cell.id().clone(), dna.id().clone(), protein.id().clone());
//!
//! store.add_concept(cell);
//! store.add_concept(dna);
//! store.add_concept(protein);
//! store.add_relationship(Relationship::new(cell_id.clone(), dna_id.clone()));
//! store.add_relationship(Relationship::new(dna_id.clone(), protein_id.clone()));
//!
//! // Cell and Protein share DNA as a neighbor
//! let suggestions = Algorithm::CommonNeighbors.predict_links(&store, 5);
//! assert!(suggestions[0].is_between(&cell_id, &protein_id));
//!
//! // Accepting a suggestion draws the relationship
//! store.accept_suggestion(&suggestions[0]);
//! assert!(store.query().are_adjacent(&cell_id, &protein_id));
//! ```
//!
//! ## Architecture
//!
//! - [`qlink_core`] - Concept, relationship and suggestion types, the
//!   `ConceptGraph` trait, change events, errors
//! - [`qlink_runtime`] - `GraphStore`, `GraphQueryEngine`, JSON snapshots
//! - [`qlink_predict`] - Common Neighbors, Jaccard, Preferential Attachment
//!   and the combined aggregator
//!
//! ## Prediction Algorithms
//!
//! | Algorithm | Raw score | Confidence |
//! |-----------|-----------|------------|
//! | Common Neighbors | shared neighbors | `min(1, n / 5)` |
//! | Jaccard Coefficient | shared / union of neighbors | the score itself |
//! | Preferential Attachment | `(deg(u) + 1)(deg(v) + 1)` | `min(1, score / 100)` |
//!
//! Combined prediction averages the confidences each algorithm gives the
//! same pair and keeps those at or above the threshold.
//!
//! ## Snapshots
//!
//! ```rust,ignore
//! use qlink::prelude::*;
//! use std::path::Path;
//!
//! let store = GraphStore::named("Notes");
//! save_snapshot(&store, Path::new("notes.json")).unwrap();
//! let restored = load_store(Path::new("notes.json")).unwrap();
//! ```

// Re-export all subcrates
pub use qlink_core as core;
pub use qlink_runtime as runtime;
pub use qlink_predict as predict;

/// Prelude module for convenient imports.
///
/// ```rust
/// use qlink::prelude::*;
/// ```
pub mod prelude {
    // Core types, events, errors, and the ConceptGraph trait
    pub use qlink_core::prelude::*;

    // Runtime
    pub use qlink_runtime::store::{GraphStore, DEFAULT_MODEL_NAME};
    pub use qlink_runtime::query::{AdjacencyIndex, GraphQueryEngine};
    pub use qlink_runtime::snapshot::{
        load_snapshot, load_store, save_snapshot,
        GraphSnapshot, SnapshotError, SnapshotMetadata,
    };

    // Prediction
    pub use qlink_predict::aggregate::{SuggestionAggregator, COMBINED_ALGORITHM_NAME};
    pub use qlink_predict::algorithm::{Algorithm, UnknownAlgorithm};
    pub use qlink_predict::pipeline::ScoredPair;
    pub use qlink_predict::request::{
        predict, PredictionRequest, Selector,
        DEFAULT_MAX_SUGGESTIONS, DEFAULT_MIN_CONFIDENCE,
    };
}
