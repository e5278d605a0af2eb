//! Optional YAML configuration.

use crate::table::TableSignatures;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_CANDIDATES: [&str; 2] = ["declension.yaml", "config/declension.yaml"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default_language: String,
    pub default_word_class: String,
    /// Directory holding saved dictionary pages
    pub page_dir: PathBuf,
    pub tables: TableSignatures,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_language: "Finnish".to_string(),
            default_word_class: "Noun".to_string(),
            page_dir: PathBuf::from("pages"),
            tables: TableSignatures::default(),
        }
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    parse_config(&contents).with_context(|| format!("Failed to parse config file {}", path.display()))
}

pub fn parse_config(contents: &str) -> Result<Config> {
    if contents.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(serde_yaml::from_str(contents)?)
}

/// Explicit path if given (must exist), else the first default candidate
/// that exists, else built-in defaults.
pub fn resolve_config(explicit: Option<&PathBuf>) -> Result<(Config, Option<PathBuf>)> {
    if let Some(path) = explicit {
        if !path.exists() {
            bail!("Config file {} does not exist", path.display());
        }
        return Ok((load_config(path)?, Some(path.clone())));
    }

    match CONFIG_CANDIDATES
        .iter()
        .map(PathBuf::from)
        .find(|p| p.exists())
    {
        Some(path) => Ok((load_config(&path)?, Some(path))),
        None => Ok((Config::default(), None)),
    }
}
