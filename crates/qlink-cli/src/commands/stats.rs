//! Show graph statistics.

use anyhow::Result;
use colored::Colorize;
use qlink::prelude::*;

use super::load_graph;

pub fn run(graph_path: &str) -> Result<()> {
    let store = load_graph(graph_path)?;
    let query = store.query();
    let stats = query.statistics();
    let components = query.connected_components();

    println!("{} {}", "QLink Statistics:".white().bold(), store.name().white().bold());
    println!("{}", "═".repeat(40).dimmed());
    println!();

    println!("{}", "Graph Structure".blue().bold());
    println!("  Concepts:          {}", stats.concept_count.to_string().cyan());
    println!("  Relationships:     {}", stats.relationship_count.to_string().cyan());
    println!("  Components:        {}", components.to_string().cyan());
    println!(
        "  Orphaned:          {}",
        if stats.orphaned_concept_count > 0 {
            stats.orphaned_concept_count.to_string().yellow()
        } else {
            stats.orphaned_concept_count.to_string().green()
        }
    );
    println!();

    println!("{}", "Connections".blue().bold());
    println!("  Average:           {:.2}", stats.average_connections);
    println!("  Max:               {}", stats.max_connections);
    println!("  Min:               {}", stats.min_connections);
    println!();

    // Density over the undirected simple graph
    if stats.concept_count > 1 {
        let max_edges = (stats.concept_count * (stats.concept_count - 1)) / 2;
        let density = stats.relationship_count as f64 / max_edges as f64;
        println!("{}", "Density".blue().bold());
        println!("  Graph density:     {:.6}", density);
        println!();
    }

    let mut types: Vec<(&str, usize)> = Vec::new();
    for rel in store.relationships() {
        match types.iter_mut().find(|(t, _)| *t == rel.relationship_type()) {
            Some((_, n)) => *n += 1,
            None => types.push((rel.relationship_type(), 1)),
        }
    }
    if !types.is_empty() {
        types.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        println!("{}", "Relationship Types".blue().bold());
        for (t, n) in types {
            println!("  {:<18} {}", t, n);
        }
        println!();
    }

    println!("{}", "═".repeat(40).dimmed());
    Ok(())
}
