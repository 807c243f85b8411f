//! Write a default qlink.toml.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::{Config, CONFIG_FILE_NAME};

pub fn run(path: Option<String>) -> Result<()> {
    let base_path = match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir().context("Failed to read current directory")?,
    };

    println!("{} Initializing QLink project...", "→".blue());

    std::fs::create_dir_all(&base_path)
        .with_context(|| format!("Failed to create {}", base_path.display()))?;

    let config_path = base_path.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        Config::default().save(&config_path)?;
        println!("  {} Created {}", "✓".green(), config_path.display());
    } else {
        println!("  {} {} already exists", "•".yellow(), config_path.display());
    }

    println!();
    println!("{} QLink project initialized!", "✓".green().bold());
    println!();
    println!("Next steps:");
    println!("  {} qlink stats <graph.json>", "1.".blue());
    println!("  {} qlink predict <graph.json>", "2.".blue());
    println!("  {} qlink predict <graph.json> --accept", "3.".blue());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_config_once() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("project");
        run(Some(target.display().to_string())).unwrap();

        let path = target.join(CONFIG_FILE_NAME);
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.prediction.max_suggestions, 10);

        std::fs::write(&path, "[output]\ncolor = false\n").unwrap();
        run(Some(target.display().to_string())).unwrap();
        assert!(!Config::load_from(&path).unwrap().output.color);
    }
}
