//! Shared types used across all QLink crates.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a concept in a graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConceptId(pub String);

impl ConceptId {
    pub fn new() -> Self {
        Self(format!("concept_{}", Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ConceptId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ConceptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ConceptId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ConceptId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Unique identifier for a relationship in a graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RelationshipId(pub String);

impl RelationshipId {
    pub fn new() -> Self {
        Self(format!("rel_{}", Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RelationshipId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RelationshipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RelationshipId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for RelationshipId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A position on the drawing canvas. Presentation only; no algorithm reads it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Well-known relationship type labels.
///
/// The type of a relationship is free text; these are the labels the
/// editor offers by default.
pub mod relationship_types {
    pub const CAUSES: &str = "causes";
    pub const REQUIRES: &str = "requires";
    pub const CONTRADICTS: &str = "contradicts";
    pub const SIMILAR_TO: &str = "similar_to";
    pub const PART_OF: &str = "part_of";
    pub const DEPENDS_ON: &str = "depends_on";
    pub const TRANSFORMS_TO: &str = "transforms_to";

    /// Type given to suggestions produced by a single predictor.
    pub const RELATES_TO: &str = "relates_to";
    /// Type given to suggestions merged from several predictors.
    pub const PREDICTED_RELATIONSHIP: &str = "predicted_relationship";
    /// Type given to relationships created by accepting a suggestion.
    pub const RELATED_TO: &str = "related_to";
}

/// A labeled node in the graph.
///
/// The id is fixed at construction. Everything else can be edited.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Concept {
    id: ConceptId,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    position: Position,
}

impl Concept {
    /// Create a concept with a freshly generated id.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_id(ConceptId::new(), name, description)
    }

    /// Create a concept with a caller-chosen id.
    pub fn with_id(
        id: impl Into<ConceptId>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            tags: Vec::new(),
            position: Position::default(),
        }
    }

    pub fn at(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn tagged(mut self, tag: impl Into<String>) -> Self {
        self.add_tag(tag);
        self
    }

    pub fn id(&self) -> &ConceptId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Add a tag. Returns false if the concept already carries it.
    pub fn add_tag(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        if self.has_tag(&tag) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    /// Remove a tag. Returns false if the concept did not carry it.
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

impl PartialEq for Concept {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Concept {}

impl fmt::Display for Concept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Concept[{}]: {}", self.id, self.name)?;
        if !self.description.is_empty() {
            write!(f, " - {}", self.description)?;
        }
        Ok(())
    }
}

/// A typed, weighted edge between two concepts.
///
/// A directed relationship connects only `source -> target`; an undirected
/// one connects both orders. The weight is a strength signal and is never
/// validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Relationship {
    id: RelationshipId,
    source: ConceptId,
    target: ConceptId,
    #[serde(rename = "type", default)]
    relationship_type: String,
    #[serde(default)]
    directed: bool,
    #[serde(default = "default_weight")]
    weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

impl Relationship {
    /// Create an untyped, undirected relationship of weight 1.0.
    pub fn new(source: impl Into<ConceptId>, target: impl Into<ConceptId>) -> Self {
        Self {
            id: RelationshipId::new(),
            source: source.into(),
            target: target.into(),
            relationship_type: String::new(),
            directed: false,
            weight: default_weight(),
        }
    }

    pub fn with_id(mut self, id: impl Into<RelationshipId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_type(mut self, relationship_type: impl Into<String>) -> Self {
        self.relationship_type = relationship_type.into();
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    pub fn id(&self) -> &RelationshipId {
        &self.id
    }

    pub fn source(&self) -> &ConceptId {
        &self.source
    }

    pub fn target(&self) -> &ConceptId {
        &self.target
    }

    pub fn relationship_type(&self) -> &str {
        &self.relationship_type
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn set_type(&mut self, relationship_type: impl Into<String>) {
        self.relationship_type = relationship_type.into();
    }

    pub fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }

    pub fn set_directed(&mut self, directed: bool) {
        self.directed = directed;
    }

    /// Whether this relationship connects `from` to `to`, honoring direction.
    pub fn connects(&self, from: &ConceptId, to: &ConceptId) -> bool {
        if self.directed {
            self.source == *from && self.target == *to
        } else {
            (self.source == *from && self.target == *to)
                || (self.source == *to && self.target == *from)
        }
    }

    /// Whether either endpoint is `concept`.
    pub fn touches(&self, concept: &ConceptId) -> bool {
        self.source == *concept || self.target == *concept
    }

    /// The endpoint opposite `concept`, or `None` if the relationship does not touch it.
    pub fn other_endpoint(&self, concept: &ConceptId) -> Option<&ConceptId> {
        if self.source == *concept {
            Some(&self.target)
        } else if self.target == *concept {
            Some(&self.source)
        } else {
            None
        }
    }
}

impl PartialEq for Relationship {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Relationship {}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = if self.directed { "->" } else { "<->" };
        write!(f, "Relationship[{}]: {} {} {}", self.id, self.source, arrow, self.target)?;
        if !self.relationship_type.is_empty() {
            write!(f, " ({})", self.relationship_type)?;
        }
        Ok(())
    }
}

/// A predicted relationship the user has not drawn yet.
///
/// Suggestions are produced fresh by every prediction call and carry no
/// reference back into the graph they were computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkSuggestion {
    pub source: ConceptId,
    pub target: ConceptId,
    pub suggested_type: String,
    /// Always within `0.0..=1.0`.
    pub confidence: f64,
    pub explanation: String,
    pub algorithm: String,
}

impl LinkSuggestion {
    /// Build a suggestion. The confidence is clamped into `[0, 1]`.
    pub fn new(
        source: ConceptId,
        target: ConceptId,
        suggested_type: impl Into<String>,
        confidence: f64,
        explanation: impl Into<String>,
        algorithm: impl Into<String>,
    ) -> Self {
        Self {
            source,
            target,
            suggested_type: suggested_type.into(),
            confidence: confidence.clamp(0.0, 1.0),
            explanation: explanation.into(),
            algorithm: algorithm.into(),
        }
    }

    /// The endpoint pair in lexicographic order, so `(a, b)` and `(b, a)` share a key.
    pub fn pair_key(&self) -> (ConceptId, ConceptId) {
        if self.source <= self.target {
            (self.source.clone(), self.target.clone())
        } else {
            (self.target.clone(), self.source.clone())
        }
    }

    /// Whether this suggestion is about the unordered pair `{a, b}`.
    pub fn is_between(&self, a: &ConceptId, b: &ConceptId) -> bool {
        (self.source == *a && self.target == *b) || (self.source == *b && self.target == *a)
    }

    /// The relationship created when the user accepts this suggestion:
    /// directed, typed `related_to`, weighted by the confidence.
    pub fn to_relationship(&self) -> Relationship {
        Relationship::new(self.source.clone(), self.target.clone())
            .with_type(relationship_types::RELATED_TO)
            .directed(true)
            .with_weight(self.confidence)
    }
}

/// Aggregate counts over a graph, recomputed on demand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelStatistics {
    pub concept_count: usize,
    pub relationship_count: usize,
    pub orphaned_concept_count: usize,
    pub average_connections: f64,
    pub max_connections: usize,
    /// Zero for an empty graph.
    pub min_connections: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_prefixed_and_unique() {
        let a = ConceptId::new();
        let b = ConceptId::new();
        assert!(a.as_str().starts_with("concept_"));
        assert_ne!(a, b);
        assert!(RelationshipId::new().as_str().starts_with("rel_"));
    }

    #[test]
    fn tags_suppress_duplicates_and_keep_order() {
        let mut concept = Concept::new("Cell", "");
        assert!(concept.add_tag("biology"));
        assert!(concept.add_tag("structure"));
        assert!(!concept.add_tag("biology"));
        assert_eq!(concept.tags(), ["biology", "structure"]);

        assert!(concept.remove_tag("biology"));
        assert!(!concept.remove_tag("biology"));
        assert!(!concept.has_tag("biology"));
        assert!(concept.has_tag("structure"));
    }

    #[test]
    fn concept_defaults_to_origin() {
        let concept = Concept::new("Cell", "");
        assert_eq!(concept.position(), Position::new(0.0, 0.0));
    }

    #[test]
    fn concept_equality_is_by_id() {
        let a = Concept::with_id("c1", "Cell", "");
        let mut b = Concept::with_id("c1", "Renamed", "other");
        b.set_position(Position::new(3.0, 4.0));
        assert_eq!(a, b);
        assert_ne!(a, Concept::with_id("c2", "Cell", ""));
    }

    #[test]
    fn concept_display() {
        let concept = Concept::with_id("c1", "Cell", "Basic unit");
        assert_eq!(concept.to_string(), "Concept[c1]: Cell - Basic unit");
        let bare = Concept::with_id("c2", "Atom", "");
        assert_eq!(bare.to_string(), "Concept[c2]: Atom");
    }

    #[test]
    fn undirected_relationship_connects_both_orders() {
        let rel = Relationship::new("a", "b");
        let (a, b) = (ConceptId::from("a"), ConceptId::from("b"));
        assert!(rel.connects(&a, &b));
        assert!(rel.connects(&b, &a));
    }

    #[test]
    fn directed_relationship_connects_one_order() {
        let rel = Relationship::new("a", "b").directed(true);
        let (a, b) = (ConceptId::from("a"), ConceptId::from("b"));
        assert!(rel.connects(&a, &b));
        assert!(!rel.connects(&b, &a));
    }

    #[test]
    fn other_endpoint() {
        let rel = Relationship::new("a", "b");
        assert_eq!(rel.other_endpoint(&"a".into()), Some(&ConceptId::from("b")));
        assert_eq!(rel.other_endpoint(&"b".into()), Some(&ConceptId::from("a")));
        assert_eq!(rel.other_endpoint(&"c".into()), None);
        assert!(!rel.touches(&"c".into()));
    }

    #[test]
    fn relationship_display() {
        let rel = Relationship::new("a", "b")
            .with_id("r1")
            .with_type(relationship_types::CAUSES)
            .directed(true);
        assert_eq!(rel.to_string(), "Relationship[r1]: a -> b (causes)");
        let plain = Relationship::new("a", "b").with_id("r2");
        assert_eq!(plain.to_string(), "Relationship[r2]: a <-> b");
    }

    #[test]
    fn relationship_serializes_type_field() {
        let rel = Relationship::new("a", "b").with_id("r1").with_type("causes");
        let json = serde_json::to_value(&rel).unwrap();
        assert_eq!(json["type"], "causes");
        assert_eq!(json["weight"], 1.0);

        let parsed: Relationship =
            serde_json::from_str(r#"{"id":"r9","source":"x","target":"y"}"#).unwrap();
        assert_eq!(parsed.weight(), 1.0);
        assert!(!parsed.is_directed());
        assert_eq!(parsed.relationship_type(), "");
    }

    #[test]
    fn suggestion_confidence_is_clamped() {
        let s = LinkSuggestion::new("a".into(), "b".into(), "relates_to", 1.7, "", "test");
        assert_eq!(s.confidence, 1.0);
        let s = LinkSuggestion::new("a".into(), "b".into(), "relates_to", -0.2, "", "test");
        assert_eq!(s.confidence, 0.0);
    }

    #[test]
    fn suggestion_pair_key_ignores_order() {
        let ab = LinkSuggestion::new("a".into(), "b".into(), "relates_to", 0.5, "", "x");
        let ba = LinkSuggestion::new("b".into(), "a".into(), "relates_to", 0.5, "", "y");
        assert_eq!(ab.pair_key(), ba.pair_key());
        assert!(ba.is_between(&"a".into(), &"b".into()));
    }

    #[test]
    fn accepted_suggestion_becomes_directed_relationship() {
        let s = LinkSuggestion::new("a".into(), "b".into(), "relates_to", 0.8, "", "x");
        let rel = s.to_relationship();
        assert!(rel.is_directed());
        assert_eq!(rel.relationship_type(), relationship_types::RELATED_TO);
        assert_eq!(rel.weight(), 0.8);
        assert_eq!(rel.source().as_str(), "a");
    }
}
