//! CLI command implementations.

pub mod init;
pub mod predict;
pub mod stats;
pub mod validate;
pub mod explore;

use anyhow::{bail, Context, Result};
use qlink::prelude::*;
use std::path::Path;

/// Load a graph snapshot from disk.
pub fn load_graph(path: &str) -> Result<GraphStore> {
    load_store(Path::new(path)).with_context(|| format!("Failed to load graph: {path}"))
}

/// Resolve a concept given either its id or its name.
///
/// An exact id wins, then a case-insensitive exact name. Ambiguous or
/// unknown names are errors listing what partially matched.
pub fn resolve_concept(store: &GraphStore, key: &str) -> Result<ConceptId> {
    let id = ConceptId::from(key);
    if store.contains_concept(&id) {
        return Ok(id);
    }

    let exact: Vec<&Concept> = store
        .concepts()
        .iter()
        .filter(|c| c.name().eq_ignore_ascii_case(key))
        .collect();
    match exact.as_slice() {
        [only] => Ok(only.id().clone()),
        [] => {
            let partial = store.find_concepts_by_name(key);
            if partial.is_empty() {
                bail!("No concept matches '{key}'");
            }
            let names: Vec<&str> = partial.iter().map(|c| c.name()).collect();
            bail!("No concept named '{key}'. Did you mean: {}?", names.join(", "))
        }
        many => {
            let ids: Vec<&str> = many.iter().map(|c| c.id().as_str()).collect();
            bail!("'{key}' names {} concepts; use an id: {}", many.len(), ids.join(", "))
        }
    }
}

/// Display name for a concept id, falling back to the id itself.
pub fn label<'a>(store: &'a GraphStore, id: &'a ConceptId) -> &'a str {
    store.concept(id).map_or(id.as_str(), Concept::name)
}
