//! Configuration management for the career matcher

use crate::error::{CareerMatcherError, Result};
use crate::matching::profile::ScoringConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that overrides the catalog location.
pub const DATA_PATH_ENV: &str = "DATA_PATH";

/// Prefixed alias, consulted when `DATA_PATH` is unset or blank.
pub const DATA_PATH_ENV_ALIAS: &str = "CAREER_DATA_PATH";

/// Catalog location used when neither the config file nor the environment names one.
pub const DEFAULT_DATA_PATH: &str = "data/careers.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub scoring: ScoringConfig,
    pub normalizer: NormalizerConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub data_path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Drop common English stop words before matching.
    pub filter_stop_words: bool,
    /// Tokens shorter than this (in characters) are ignored.
    pub min_token_len: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
    pub pretty_json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
        }
    }
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            filter_stop_words: false,
            min_token_len: 1,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            color_output: true,
            pretty_json: true,
        }
    }
}

impl Config {
    /// Load configuration from `path`, or from the default location when it exists.
    ///
    /// Falls back to defaults when no file is found. The catalog path is then
    /// overridden by `DATA_PATH`, or `CAREER_DATA_PATH` when that is unset (a
    /// `.env` file in the working directory is honoured).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = match path {
            Some(explicit) => Self::from_file(explicit)?,
            None => {
                let default_path = Self::config_path();
                if default_path.exists() {
                    Self::from_file(&default_path)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_env_overrides();
        config.scoring.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CareerMatcherError::Configuration(format!(
                "Failed to read config '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            CareerMatcherError::Configuration(format!("Failed to parse config: {}", e))
        })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            CareerMatcherError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("career-matcher")
            .join("config.toml")
    }

    fn apply_env_overrides(&mut self) {
        let from_env = [DATA_PATH_ENV, DATA_PATH_ENV_ALIAS]
            .into_iter()
            .filter_map(|key| std::env::var(key).ok())
            .find(|value| !value.trim().is_empty());

        if let Some(data_path) = from_env {
            self.catalog.data_path = PathBuf::from(data_path);
        }
    }

    pub fn data_path(&self) -> &Path {
        &self.catalog.data_path
    }
}
