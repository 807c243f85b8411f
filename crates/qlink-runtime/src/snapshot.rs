//! Snapshot persistence — save/load a graph store as JSON.
//!
//! A snapshot is the store's name, its concepts and relationships in
//! insertion order, and a little metadata. Loading goes through
//! [`GraphStore::from_parts`], so a hand-edited file with dangling
//! references still loads and shows up in validation instead of failing.

use crate::store::GraphStore;
use qlink_core::topology::ConceptGraph;
use qlink_core::types::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors raised while reading or writing a snapshot file.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Serializable snapshot of a graph store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub name: String,
    #[serde(default)]
    pub concepts: Vec<Concept>,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
    #[serde(default)]
    pub metadata: SnapshotMetadata,
}

/// Snapshot metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotMetadata {
    #[serde(default)]
    pub snapshot_id: String,
    #[serde(default)]
    pub concept_count: usize,
    #[serde(default)]
    pub relationship_count: usize,
}

impl GraphSnapshot {
    /// Copy the current contents of a store.
    pub fn capture(store: &GraphStore) -> Self {
        Self {
            name: store.name().to_string(),
            concepts: store.concepts().to_vec(),
            relationships: store.relationships().to_vec(),
            metadata: SnapshotMetadata {
                snapshot_id: uuid::Uuid::new_v4().to_string(),
                concept_count: store.concept_count(),
                relationship_count: store.relationship_count(),
            },
        }
    }

    /// Build a store from this snapshot without integrity checks.
    pub fn into_store(self) -> GraphStore {
        GraphStore::from_parts(self.name, self.concepts, self.relationships)
    }
}

/// Write a store to a JSON file.
pub fn save_snapshot(store: &GraphStore, path: &Path) -> Result<(), SnapshotError> {
    let snapshot = GraphSnapshot::capture(store);
    let json = serde_json::to_string_pretty(&snapshot)?;
    std::fs::write(path, json)?;
    debug!(
        path = %path.display(),
        concepts = snapshot.metadata.concept_count,
        relationships = snapshot.metadata.relationship_count,
        "snapshot saved"
    );
    Ok(())
}

/// Read a snapshot from a JSON file.
pub fn load_snapshot(path: &Path) -> Result<GraphSnapshot, SnapshotError> {
    let json = std::fs::read_to_string(path)?;
    let snapshot: GraphSnapshot = serde_json::from_str(&json)?;
    debug!(
        path = %path.display(),
        concepts = snapshot.concepts.len(),
        relationships = snapshot.relationships.len(),
        "snapshot loaded"
    );
    Ok(snapshot)
}

/// Read a snapshot file straight into a store.
pub fn load_store(path: &Path) -> Result<GraphStore, SnapshotError> {
    Ok(load_snapshot(path)?.into_store())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_and_load_preserves_graph() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");

        let mut store = GraphStore::named("Biology");
        store.add_concept(
            Concept::with_id("cell", "Cell", "Basic unit")
                .tagged("core")
                .at(Position::new(10.0, -5.0)),
        );
        store.add_concept(Concept::with_id("dna", "DNA", ""));
        store.add_relationship(
            Relationship::new("cell", "dna")
                .with_id("r1")
                .with_type(relationship_types::REQUIRES)
                .directed(true)
                .with_weight(0.7),
        );
        save_snapshot(&store, &path).unwrap();

        let loaded = load_store(&path).unwrap();
        assert_eq!(loaded.name(), "Biology");
        assert_eq!(loaded.concept_count(), 2);
        let cell = loaded.concept(&"cell".into()).unwrap();
        assert!(cell.has_tag("core"));
        assert_eq!(cell.position(), Position::new(10.0, -5.0));
        let rel = loaded.relationship(&"r1".into()).unwrap();
        assert!(rel.is_directed());
        assert_eq!(rel.relationship_type(), "requires");
        assert_eq!(rel.weight(), 0.7);
    }

    #[test]
    fn hand_written_file_with_dangling_reference_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(
            &path,
            r#"{
                "name": "broken",
                "concepts": [{"id": "a", "name": "A"}],
                "relationships": [{"id": "r1", "source": "a", "target": "b"}]
            }"#,
        )
        .unwrap();

        let store = load_store(&path).unwrap();
        assert_eq!(store.relationship_count(), 1);
        assert_eq!(store.query().validation_errors().len(), 1);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_snapshot(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, SnapshotError::Io(_)));
    }

    #[test]
    fn malformed_file_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("junk.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(load_snapshot(&path), Err(SnapshotError::Serialization(_))));
    }
}
