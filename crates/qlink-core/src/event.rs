//! Change notification for graph mutations.
//!
//! The store fires a [`ModelChangeEvent`] synchronously after every
//! successful structural mutation. Nothing in the core depends on anyone
//! listening; observers exist so a UI can refresh or track a modified flag.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of structural change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangeKind {
    ConceptAdded,
    ConceptRemoved,
    ConceptModified,
    RelationshipAdded,
    RelationshipRemoved,
    RelationshipModified,
    /// Every concept and relationship was dropped at once.
    ModelCleared,
}

impl ChangeKind {
    /// Whether the change concerns a concept (as opposed to a relationship or the whole model).
    pub fn is_concept_change(&self) -> bool {
        matches!(
            self,
            ChangeKind::ConceptAdded | ChangeKind::ConceptRemoved | ChangeKind::ConceptModified
        )
    }

    pub fn is_relationship_change(&self) -> bool {
        matches!(
            self,
            ChangeKind::RelationshipAdded
                | ChangeKind::RelationshipRemoved
                | ChangeKind::RelationshipModified
        )
    }
}

/// A change to a graph, carrying the id of the affected entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelChangeEvent {
    pub kind: ChangeKind,
    /// Concept or relationship id; `"all"` for [`ChangeKind::ModelCleared`].
    pub entity_id: String,
}

impl ModelChangeEvent {
    pub fn new(kind: ChangeKind, entity_id: impl fmt::Display) -> Self {
        Self {
            kind,
            entity_id: entity_id.to_string(),
        }
    }
}

/// Receives change events from a graph store.
///
/// Any `FnMut(&ModelChangeEvent)` closure is an observer.
pub trait ChangeObserver {
    fn on_change(&mut self, event: &ModelChangeEvent);
}

impl<F> ChangeObserver for F
where
    F: FnMut(&ModelChangeEvent),
{
    fn on_change(&mut self, event: &ModelChangeEvent) {
        self(event)
    }
}
