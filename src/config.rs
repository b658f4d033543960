//! Zorki configuration.
//!
//! Loaded from `~/.zorki/config.toml`. Every key is optional and a missing
//! file means defaults. A file named with `--config` must exist.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::prompt::PromptCatalog;

const DEFAULT_LOG_FILTER: &str = "info";

/// Zorki configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Config {
    /// Where the journal is stored. Defaults to `~/.zorki/data/`.
    pub data_dir: Option<PathBuf>,

    /// `tracing` filter directive for the log file, e.g. `"zorki=debug"`.
    pub log: Option<String>,

    /// Replaces the built-in daily prompts when non-empty.
    pub prompts: Vec<String>,
}

impl Config {
    /// Load config from `~/.zorki/config.toml`, or defaults if it doesn't exist.
    pub fn load() -> Result<Self, String> {
        match Self::path() {
            Some(path) => Self::load_optional(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from an explicit path. A missing file is an error.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let contents = fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?;

        toml::from_str(&contents)
            .map_err(|e| format!("invalid config at {}: {e}", path.display()))
    }

    /// The config file path: `~/.zorki/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".zorki").join("config.toml"))
    }

    pub fn log_filter(&self) -> &str {
        self.log.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    /// Configured prompts, or the built-in catalog if none are usable.
    pub fn prompt_catalog(&self) -> PromptCatalog {
        PromptCatalog::new(&self.prompts).unwrap_or_else(PromptCatalog::builtin)
    }

    /// Like [`Config::load_from`], but a missing file yields defaults.
    fn load_optional(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(path)
    }
}
