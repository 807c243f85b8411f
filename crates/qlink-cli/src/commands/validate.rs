//! Check referential integrity and id uniqueness.

use anyhow::{bail, Result};
use colored::Colorize;
use qlink::prelude::*;

use super::load_graph;

pub fn run(graph_path: &str) -> Result<()> {
    let store = load_graph(graph_path)?;
    let errors = store.query().validation_errors();

    if errors.is_empty() {
        println!(
            "{} {} is valid ({} concepts, {} relationships)",
            "✓".green().bold(),
            store.name(),
            store.concept_count(),
            store.relationship_count()
        );
        return Ok(());
    }

    for error in &errors {
        println!("  {} {}", "✗".red(), error);
    }
    bail!("{} has {} integrity error(s)", graph_path, errors.len())
}
