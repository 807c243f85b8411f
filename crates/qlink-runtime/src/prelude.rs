//! QLink Runtime Prelude — convenient imports for common usage.
//!
//! ```rust
//! use qlink_runtime::prelude::*;
//! ```

// Re-export the store
pub use crate::store::{GraphStore, DEFAULT_MODEL_NAME};

// Re-export queries
pub use crate::query::{AdjacencyIndex, GraphQueryEngine};

// Re-export snapshots
pub use crate::snapshot::{
    GraphSnapshot, SnapshotMetadata, SnapshotError,
    save_snapshot, load_snapshot, load_store,
};

// Re-export from core
pub use qlink_core::prelude::*;
