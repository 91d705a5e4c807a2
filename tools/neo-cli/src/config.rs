//! neocart.toml config parsing

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "neocart.toml";

/// neocart.toml structure
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NeocartConfig {
    #[serde(default)]
    pub convert: ConvertSection,
}

/// Conversion defaults. Command-line flags take precedence.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConvertSection {
    /// Directory that receives the .neo images.
    pub output_dir: Option<PathBuf>,

    /// Year written into every header.
    /// Default: current year
    pub year: Option<u32>,

    /// File name substrings skipped when loading an archive.
    /// Default: [".html"]
    pub exclude: Option<Vec<String>>,

    /// Replace existing .neo images.
    /// Default: true
    pub overwrite: Option<bool>,
}

impl NeocartConfig {
    /// Load config from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config: {}", path.display()))
    }

    /// Parse config from string
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse neocart.toml")
    }

    /// Explicit `--config` path if given, else `./neocart.toml` if it
    /// exists, else defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.is_file() {
                    tracing::debug!("Using config {}", path.display());
                    Self::load(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}
