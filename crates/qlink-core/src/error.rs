//! Error types for QLink graph operations.
//!
//! The store's boolean/optional API swallows these; the `try_*` variants
//! and the validation pass hand them to the caller.

use crate::types::{ConceptId, RelationshipId};
use std::fmt;
use thiserror::Error;

/// Result type for QLink graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Which end of a relationship an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Source,
    Target,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Source => f.write_str("source"),
            Endpoint::Target => f.write_str("target"),
        }
    }
}

/// Graph integrity errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("Concept not found: {0}")]
    ConceptNotFound(ConceptId),

    #[error("Relationship not found: {0}")]
    RelationshipNotFound(RelationshipId),

    #[error("Duplicate concept id: {0}")]
    DuplicateConcept(ConceptId),

    #[error("Duplicate relationship id: {0}")]
    DuplicateRelationship(RelationshipId),

    /// A relationship points at a concept the graph does not contain.
    #[error("Relationship {relationship} references non-existent {endpoint} concept {concept}")]
    MissingEndpoint {
        relationship: RelationshipId,
        endpoint: Endpoint,
        concept: ConceptId,
    },
}

impl GraphError {
    pub fn missing_source(relationship: &RelationshipId, concept: &ConceptId) -> Self {
        GraphError::MissingEndpoint {
            relationship: relationship.clone(),
            endpoint: Endpoint::Source,
            concept: concept.clone(),
        }
    }

    pub fn missing_target(relationship: &RelationshipId, concept: &ConceptId) -> Self {
        GraphError::MissingEndpoint {
            relationship: relationship.clone(),
            endpoint: Endpoint::Target,
            concept: concept.clone(),
        }
    }
}
