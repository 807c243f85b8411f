//! QLink CLI - Command-line interface for concept graphs and link prediction.

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;

use crate::commands::predict::PredictOptions;
use crate::config::Config;

#[derive(Parser)]
#[command(name = "qlink")]
#[command(author, version, about = "QLink - Concept graphs with link prediction", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default qlink.toml
    Init {
        /// Project directory (default: current directory)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Suggest relationships that are not drawn yet
    Predict {
        /// Graph snapshot (JSON)
        graph: String,

        /// Algorithm: common_neighbors, jaccard, preferential or combined
        #[arg(short, long)]
        algorithm: Option<String>,

        /// Minimum confidence (inclusive)
        #[arg(short, long)]
        min_confidence: Option<f64>,

        /// Maximum suggestions to return
        #[arg(short = 'n', long)]
        max: Option<usize>,

        /// Add every suggestion to the graph and save it
        #[arg(long)]
        accept: bool,

        /// Where to save the graph after --accept (default: overwrite input)
        #[arg(short, long, requires = "accept")]
        output: Option<String>,
    },

    /// Show graph statistics
    Stats {
        /// Graph snapshot (JSON)
        graph: String,
    },

    /// Check referential integrity and id uniqueness
    Validate {
        /// Graph snapshot (JSON)
        graph: String,
    },

    /// Find the shortest path between two concepts
    Path {
        /// Graph snapshot (JSON)
        graph: String,
        /// Source concept (id or name)
        from: String,
        /// Target concept (id or name)
        to: String,
    },

    /// List concepts without any relationship
    Orphans {
        /// Graph snapshot (JSON)
        graph: String,
    },

    /// Show a concept with its relationships and neighbors
    Inspect {
        /// Graph snapshot (JSON)
        graph: String,
        /// Concept id or name
        concept: String,
    },

    /// List the available prediction algorithms
    Algorithms,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load()?;
    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Init { path } => commands::init::run(path),
        Commands::Predict { graph, algorithm, min_confidence, max, accept, output } => {
            let options = PredictOptions { algorithm, min_confidence, max, accept, output };
            commands::predict::run(&graph, options, &config)
        }
        Commands::Stats { graph } => commands::stats::run(&graph),
        Commands::Validate { graph } => commands::validate::run(&graph),
        Commands::Path { graph, from, to } => commands::explore::path(&graph, &from, &to),
        Commands::Orphans { graph } => commands::explore::orphans(&graph),
        Commands::Inspect { graph, concept } => commands::explore::inspect(&graph, &concept),
        Commands::Algorithms => commands::predict::list_algorithms(),
    }
}
