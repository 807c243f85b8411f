//! GraphStore — the owning container for a concept graph.
//!
//! Concepts and relationships live in insertion-ordered vectors with
//! HashMap indices for O(1) lookup by id. The store enforces exactly two
//! rules eagerly:
//!
//! - a relationship is only inserted if both endpoint concepts exist
//! - ids are unique: inserting a concept or relationship whose id is
//!   already present is rejected
//!
//! Removing a concept first removes every relationship touching it.
//! Every successful mutation is reported to the registered observers.

use crate::query::GraphQueryEngine;
use qlink_core::error::{GraphError, Result};
use qlink_core::event::{ChangeKind, ChangeObserver, ModelChangeEvent};
use qlink_core::topology::ConceptGraph;
use qlink_core::types::*;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, warn};

pub const DEFAULT_MODEL_NAME: &str = "Untitled Model";

/// Owns every concept and relationship of one mental model.
pub struct GraphStore {
    name: String,
    concepts: Vec<Concept>,
    relationships: Vec<Relationship>,
    /// Map from concept id to its position in `concepts`.
    concept_index: HashMap<ConceptId, usize>,
    /// Map from relationship id to its position in `relationships`.
    relationship_index: HashMap<RelationshipId, usize>,
    observers: Vec<Box<dyn ChangeObserver>>,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::named(DEFAULT_MODEL_NAME)
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            concepts: Vec::new(),
            relationships: Vec::new(),
            concept_index: HashMap::new(),
            relationship_index: HashMap::new(),
            observers: Vec::new(),
        }
    }

    /// Bulk-load a store without integrity checks.
    ///
    /// This is the path for graphs coming from outside (files, imports):
    /// dangling references and duplicate ids are kept as-is so that
    /// [`GraphQueryEngine::validation_errors`] can report them. Lookups by a
    /// duplicated id resolve to its first occurrence. No events are fired.
    pub fn from_parts(
        name: impl Into<String>,
        concepts: Vec<Concept>,
        relationships: Vec<Relationship>,
    ) -> Self {
        let mut store = Self::named(name);
        store.concepts = concepts;
        store.relationships = relationships;
        store.reindex_concepts();
        store.reindex_relationships();
        debug!(
            concepts = store.concepts.len(),
            relationships = store.relationships.len(),
            "bulk-loaded graph store"
        );
        store
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Register an observer. It receives every later change event, in order.
    pub fn subscribe(&mut self, observer: impl ChangeObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Derived read-only queries over this store.
    pub fn query(&self) -> GraphQueryEngine<'_, Self> {
        GraphQueryEngine::new(self)
    }

    // --- Concepts ---

    /// Insert a concept. Returns false if its id is already taken.
    pub fn add_concept(&mut self, concept: Concept) -> bool {
        self.try_add_concept(concept).is_ok()
    }

    /// Insert a concept, reporting why it was rejected.
    pub fn try_add_concept(&mut self, concept: Concept) -> Result<ConceptId> {
        let id = concept.id().clone();
        if self.concept_index.contains_key(&id) {
            warn!(concept = %id, "rejected concept with duplicate id");
            return Err(GraphError::DuplicateConcept(id));
        }
        self.concept_index.insert(id.clone(), self.concepts.len());
        self.concepts.push(concept);
        debug!(concept = %id, "concept added");
        self.notify(ModelChangeEvent::new(ChangeKind::ConceptAdded, &id));
        Ok(id)
    }

    /// Remove a concept and every relationship touching it.
    ///
    /// Returns the removed concept, or `None` if no concept had this id.
    pub fn remove_concept(&mut self, id: &ConceptId) -> Option<Concept> {
        self.try_remove_concept(id).ok()
    }

    /// Remove a concept and every relationship touching it.
    ///
    /// Relationships go first, each with its own `RelationshipRemoved`
    /// event; the `ConceptRemoved` event comes last.
    pub fn try_remove_concept(&mut self, id: &ConceptId) -> Result<Concept> {
        let pos = self.concept_position(id)?;
        let (detached, kept): (Vec<Relationship>, Vec<Relationship>) = self
            .relationships
            .drain(..)
            .partition(|rel| rel.touches(id));
        self.relationships = kept;
        if !detached.is_empty() {
            self.reindex_relationships();
            debug!(concept = %id, count = detached.len(), "cascaded relationship removal");
        }
        for rel in &detached {
            self.notify(ModelChangeEvent::new(ChangeKind::RelationshipRemoved, rel.id()));
        }

        let concept = self.concepts.remove(pos);
        self.reindex_concepts();
        debug!(concept = %id, "concept removed");
        self.notify(ModelChangeEvent::new(ChangeKind::ConceptRemoved, id));
        Ok(concept)
    }

    /// Edit a concept in place. The id cannot change.
    ///
    /// Returns false if no concept had this id.
    pub fn update_concept(&mut self, id: &ConceptId, edit: impl FnOnce(&mut Concept)) -> bool {
        self.try_update_concept(id, edit).is_ok()
    }

    pub fn try_update_concept(
        &mut self,
        id: &ConceptId,
        edit: impl FnOnce(&mut Concept),
    ) -> Result<()> {
        let pos = self.concept_position(id)?;
        edit(&mut self.concepts[pos]);
        debug!(concept = %id, "concept modified");
        self.notify(ModelChangeEvent::new(ChangeKind::ConceptModified, id));
        Ok(())
    }

    // --- Relationships ---

    /// Insert a relationship. Returns false if an endpoint is missing or its id is taken.
    pub fn add_relationship(&mut self, relationship: Relationship) -> bool {
        self.try_add_relationship(relationship).is_ok()
    }

    /// Insert a relationship, reporting why it was rejected.
    pub fn try_add_relationship(&mut self, relationship: Relationship) -> Result<RelationshipId> {
        let id = relationship.id().clone();
        if !self.concept_index.contains_key(relationship.source()) {
            warn!(relationship = %id, source = %relationship.source(), "rejected relationship with missing source");
            return Err(GraphError::missing_source(&id, relationship.source()));
        }
        if !self.concept_index.contains_key(relationship.target()) {
            warn!(relationship = %id, target = %relationship.target(), "rejected relationship with missing target");
            return Err(GraphError::missing_target(&id, relationship.target()));
        }
        if self.relationship_index.contains_key(&id) {
            warn!(relationship = %id, "rejected relationship with duplicate id");
            return Err(GraphError::DuplicateRelationship(id));
        }
        self.relationship_index.insert(id.clone(), self.relationships.len());
        self.relationships.push(relationship);
        debug!(relationship = %id, "relationship added");
        self.notify(ModelChangeEvent::new(ChangeKind::RelationshipAdded, &id));
        Ok(id)
    }

    /// Remove a relationship. Returns it, or `None` if no relationship had this id.
    pub fn remove_relationship(&mut self, id: &RelationshipId) -> Option<Relationship> {
        self.try_remove_relationship(id).ok()
    }

    pub fn try_remove_relationship(&mut self, id: &RelationshipId) -> Result<Relationship> {
        let pos = self.relationship_position(id)?;
        let relationship = self.relationships.remove(pos);
        self.reindex_relationships();
        debug!(relationship = %id, "relationship removed");
        self.notify(ModelChangeEvent::new(ChangeKind::RelationshipRemoved, id));
        Ok(relationship)
    }

    /// Edit a relationship in place. The id and endpoints cannot change.
    pub fn update_relationship(
        &mut self,
        id: &RelationshipId,
        edit: impl FnOnce(&mut Relationship),
    ) -> bool {
        self.try_update_relationship(id, edit).is_ok()
    }

    pub fn try_update_relationship(
        &mut self,
        id: &RelationshipId,
        edit: impl FnOnce(&mut Relationship),
    ) -> Result<()> {
        let pos = self.relationship_position(id)?;
        edit(&mut self.relationships[pos]);
        debug!(relationship = %id, "relationship modified");
        self.notify(ModelChangeEvent::new(ChangeKind::RelationshipModified, id));
        Ok(())
    }

    /// Turn a suggestion into a relationship (see [`LinkSuggestion::to_relationship`]).
    pub fn accept_suggestion(&mut self, suggestion: &LinkSuggestion) -> Option<RelationshipId> {
        self.try_add_relationship(suggestion.to_relationship()).ok()
    }

    // --- Adjacency ---

    /// Concepts one relationship away from `id`, one entry per relationship.
    pub fn connected_concepts(&self, id: &ConceptId) -> Vec<&Concept> {
        self.relationships
            .iter()
            .filter_map(|rel| rel.other_endpoint(id))
            .filter_map(|other| self.concept(other))
            .collect()
    }

    /// Relationships with `id` as source or target.
    pub fn concept_relationships(&self, id: &ConceptId) -> Vec<&Relationship> {
        self.relationships.iter().filter(|rel| rel.touches(id)).collect()
    }

    // --- Housekeeping ---

    /// Drop every concept and relationship. Fires a single `ModelCleared` event.
    pub fn clear(&mut self) {
        self.concepts.clear();
        self.relationships.clear();
        self.concept_index.clear();
        self.relationship_index.clear();
        debug!(model = %self.name, "graph cleared");
        self.notify(ModelChangeEvent::new(ChangeKind::ModelCleared, "all"));
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty() && self.relationships.is_empty()
    }

    fn notify(&mut self, event: ModelChangeEvent) {
        for observer in &mut self.observers {
            observer.on_change(&event);
        }
    }

    fn concept_position(&self, id: &ConceptId) -> Result<usize> {
        self.concept_index
            .get(id)
            .copied()
            .ok_or_else(|| GraphError::ConceptNotFound(id.clone()))
    }

    fn relationship_position(&self, id: &RelationshipId) -> Result<usize> {
        self.relationship_index
            .get(id)
            .copied()
            .ok_or_else(|| GraphError::RelationshipNotFound(id.clone()))
    }

    fn reindex_concepts(&mut self) {
        self.concept_index.clear();
        for (pos, concept) in self.concepts.iter().enumerate() {
            self.concept_index.entry(concept.id().clone()).or_insert(pos);
        }
    }

    fn reindex_relationships(&mut self) {
        self.relationship_index.clear();
        for (pos, rel) in self.relationships.iter().enumerate() {
            self.relationship_index.entry(rel.id().clone()).or_insert(pos);
        }
    }
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GraphStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphStore")
            .field("name", &self.name)
            .field("concepts", &self.concepts.len())
            .field("relationships", &self.relationships.len())
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl ConceptGraph for GraphStore {
    fn concepts(&self) -> &[Concept] {
        &self.concepts
    }

    fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    fn concept(&self, id: &ConceptId) -> Option<&Concept> {
        self.concept_index.get(id).map(|&pos| &self.concepts[pos])
    }

    fn relationship(&self, id: &RelationshipId) -> Option<&Relationship> {
        self.relationship_index.get(id).map(|&pos| &self.relationships[pos])
    }
}
