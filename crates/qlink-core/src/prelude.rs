//! QLink Core Prelude — convenient imports for common usage.
//!
//! ```rust
//! use qlink_core::prelude::*;
//! ```

// Re-export commonly used types
pub use crate::types::{
    ConceptId, RelationshipId,
    Position,
    Concept, Relationship,
    LinkSuggestion, ModelStatistics,
    relationship_types,
};

// Re-export change notification
pub use crate::event::{ChangeKind, ChangeObserver, ModelChangeEvent};

// Re-export the ConceptGraph trait
pub use crate::topology::ConceptGraph;

// Re-export error types
pub use crate::error::{Endpoint, GraphError, Result};
