//! Topology — the read-only view of a concept graph.
//!
//! The query engine and every link predictor are written against this
//! trait rather than a concrete store, so they only ever see a graph
//! through shared references and never mutate it.

use crate::types::*;

/// Read access to the concepts and relationships of a graph.
///
/// Implementations must enumerate both collections in insertion order;
/// ranking tie-breaks depend on it.
pub trait ConceptGraph {
    /// All concepts, in insertion order.
    fn concepts(&self) -> &[Concept];

    /// All relationships, in insertion order.
    fn relationships(&self) -> &[Relationship];

    /// Look up a concept by id.
    fn concept(&self, id: &ConceptId) -> Option<&Concept>;

    /// Look up a relationship by id.
    fn relationship(&self, id: &RelationshipId) -> Option<&Relationship>;

    fn concept_count(&self) -> usize {
        self.concepts().len()
    }

    fn relationship_count(&self) -> usize {
        self.relationships().len()
    }

    fn contains_concept(&self, id: &ConceptId) -> bool {
        self.concept(id).is_some()
    }

    /// Case-insensitive substring match on concept names.
    fn find_concepts_by_name(&self, query: &str) -> Vec<&Concept> {
        let query = query.to_lowercase();
        self.concepts()
            .iter()
            .filter(|c| c.name().to_lowercase().contains(&query))
            .collect()
    }
}
