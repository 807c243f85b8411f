//! Explore graph structure: paths, orphans, single concepts.

use anyhow::Result;
use colored::Colorize;
use qlink::prelude::*;

use super::{label, load_graph, resolve_concept};

pub fn path(graph_path: &str, from: &str, to: &str) -> Result<()> {
    let store = load_graph(graph_path)?;
    let from_id = resolve_concept(&store, from)?;
    let to_id = resolve_concept(&store, to)?;

    let path = store.query().shortest_path(&from_id, &to_id);
    if path.is_empty() {
        println!(
            "{} No path between {} and {}",
            "•".yellow(),
            label(&store, &from_id).cyan(),
            label(&store, &to_id).cyan()
        );
        return Ok(());
    }

    let names: Vec<String> = path.iter().map(|id| label(&store, id).cyan().to_string()).collect();
    let arrow = format!(" {} ", "→".dimmed());
    println!("{}", names.join(arrow.as_str()));
    println!("  {} hop(s)", path.len() - 1);
    Ok(())
}

pub fn orphans(graph_path: &str) -> Result<()> {
    let store = load_graph(graph_path)?;
    let orphans = store.query().orphaned_concepts();

    if orphans.is_empty() {
        println!("{} Every concept has at least one relationship", "✓".green());
        return Ok(());
    }

    println!("{}", "Orphaned Concepts".white().bold());
    println!("{}", "═".repeat(40).dimmed());
    for concept in &orphans {
        println!("  {} {}", concept.name().cyan(), concept.id().as_str().dimmed());
    }
    println!();
    println!("  {} of {} concepts", orphans.len(), store.concept_count());
    Ok(())
}

pub fn inspect(graph_path: &str, key: &str) -> Result<()> {
    let store = load_graph(graph_path)?;
    let id = resolve_concept(&store, key)?;
    let query = store.query();
    let Some(concept) = store.concept(&id) else {
        return Ok(());
    };

    println!("{}", concept.name().white().bold());
    println!("{}", "═".repeat(40).dimmed());
    println!("  Id:            {}", concept.id().as_str().dimmed());
    if !concept.description().is_empty() {
        println!("  Description:   {}", concept.description());
    }
    if !concept.tags().is_empty() {
        println!("  Tags:          {}", concept.tags().join(", "));
    }
    println!("  Degree:        {}", query.degree(&id).to_string().cyan());
    println!("  Importance:    {:.3}", query.importance(&id));
    println!();

    let relationships = store.concept_relationships(&id);
    if !relationships.is_empty() {
        println!("{}", "Relationships".blue().bold());
        for rel in relationships {
            let arrow = if !rel.is_directed() {
                "↔"
            } else if rel.source() == &id {
                "→"
            } else {
                "←"
            };
            let other = rel.other_endpoint(&id).unwrap_or(&id);
            println!(
                "  {} {} {} (weight {:.2})",
                arrow.dimmed(),
                label(&store, other).cyan(),
                rel.relationship_type().dimmed(),
                rel.weight()
            );
        }
        println!();
    }

    let neighbors = store.connected_concepts(&id);
    if !neighbors.is_empty() {
        let names: Vec<&str> = neighbors.iter().map(|c| c.name()).collect();
        println!("{} {}", "Neighbors:".blue().bold(), names.join(", "));
    }
    Ok(())
}
