//! Suggest relationships that are not drawn yet.

use anyhow::{Context, Result};
use colored::Colorize;
use qlink::prelude::*;
use std::path::Path;

use super::{label, load_graph};
use crate::config::Config;

/// Command-line overrides for the `[prediction]` config section.
#[derive(Debug, Default)]
pub struct PredictOptions {
    pub algorithm: Option<String>,
    pub min_confidence: Option<f64>,
    pub max: Option<usize>,
    pub accept: bool,
    pub output: Option<String>,
}

impl PredictOptions {
    fn request(&self, config: &Config) -> Result<PredictionRequest> {
        let mut request = config.prediction.request()?;
        if let Some(algorithm) = &self.algorithm {
            request.selector = algorithm.parse()?;
        }
        if let Some(min_confidence) = self.min_confidence {
            request.min_confidence = min_confidence;
        }
        if let Some(max) = self.max {
            request.max_suggestions = max;
        }
        Ok(request)
    }
}

pub fn run(graph_path: &str, options: PredictOptions, config: &Config) -> Result<()> {
    let mut store = load_graph(graph_path)?;
    let request = options.request(config)?;
    let suggestions = predict(&store, &request);

    println!(
        "{} {} ({}, confidence >= {:.2})",
        "Suggestions for".white().bold(),
        store.name().white().bold(),
        request.selector.to_string().cyan(),
        request.min_confidence
    );
    println!("{}", "═".repeat(50).dimmed());

    if suggestions.is_empty() {
        println!("  {}", "No suggestions.".yellow());
        return Ok(());
    }

    for (i, s) in suggestions.iter().enumerate() {
        let confidence = format!("{:.2}", s.confidence);
        let confidence = if s.confidence >= 0.75 {
            confidence.green()
        } else {
            confidence.yellow()
        };
        println!(
            "{:>3}. {} {} {}  {}",
            i + 1,
            label(&store, &s.source).cyan(),
            "↔".dimmed(),
            label(&store, &s.target).cyan(),
            confidence
        );
        for line in s.explanation.lines() {
            println!("       {}", line.dimmed());
        }
    }

    if options.accept {
        let accepted = suggestions
            .iter()
            .filter(|s| store.accept_suggestion(s).is_some())
            .count();
        let output = options.output.as_deref().unwrap_or(graph_path);
        save_snapshot(&store, Path::new(output))
            .with_context(|| format!("Failed to save graph: {output}"))?;
        println!();
        println!(
            "{} Accepted {} suggestion(s) into {}",
            "✓".green().bold(),
            accepted,
            output
        );
    }

    Ok(())
}

pub fn list_algorithms() -> Result<()> {
    println!("{}", "Prediction Algorithms".white().bold());
    println!("{}", "═".repeat(50).dimmed());
    for algorithm in Algorithm::all() {
        println!("  {:<18} {}", algorithm.selector().cyan(), algorithm.name());
        println!("  {:<18} {}", "", algorithm.description().dimmed());
    }
    println!(
        "  {:<18} {}",
        Selector::Combined.to_string().cyan(),
        "Average of all three, per concept pair"
    );
    Ok(())
}
