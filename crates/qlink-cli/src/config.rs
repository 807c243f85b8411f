//! Configuration management for QLink CLI.

use anyhow::{Context, Result};
use qlink::prelude::{PredictionRequest, Selector};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "qlink.toml";

/// QLink configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub prediction: PredictionConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionConfig {
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
    #[serde(default = "default_min_confidence")]
    pub min_confidence: f64,
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_color")]
    pub color: bool,
}

// Default value functions
fn default_algorithm() -> String { "common_neighbors".to_string() }
fn default_min_confidence() -> f64 { qlink::prelude::DEFAULT_MIN_CONFIDENCE }
fn default_max_suggestions() -> usize { qlink::prelude::DEFAULT_MAX_SUGGESTIONS }
fn default_color() -> bool { true }

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            algorithm: default_algorithm(),
            min_confidence: default_min_confidence(),
            max_suggestions: default_max_suggestions(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: default_color() }
    }
}

impl PredictionConfig {
    /// The request these settings describe.
    pub fn request(&self) -> Result<PredictionRequest> {
        let selector: Selector = self
            .algorithm
            .parse()
            .with_context(|| format!("Invalid [prediction] algorithm in {CONFIG_FILE_NAME}"))?;
        Ok(PredictionRequest::new(selector)
            .with_min_confidence(self.min_confidence)
            .with_max_suggestions(self.max_suggestions))
    }
}

impl Config {
    /// Load qlink.toml from the current directory or its parents, then the
    /// user config directory, else defaults.
    pub fn load() -> Result<Self> {
        let local = std::env::current_dir()
            .ok()
            .and_then(|dir| find_config_file(&dir));
        match local.or_else(user_config_file) {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Save config to the specified path.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = Self::to_toml(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Generate default config as TOML string.
    pub fn default_toml() -> Result<String> {
        Config::default().to_toml()
    }
}

/// Find qlink.toml in `start` or its parent directories.
fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    loop {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

/// `<user config dir>/qlink/qlink.toml`, if it exists.
fn user_config_file() -> Option<PathBuf> {
    let path = dirs::config_dir()?.join("qlink").join(CONFIG_FILE_NAME);
    path.exists().then_some(path)
}
