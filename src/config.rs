//! Storage locations and defaults
//!
//! Looked up in `./pairforge.toml`, then `<config dir>/pairforge/config.toml`.
//! Every field is optional; missing ones fall back to the defaults below,
//! which are relative to the working directory.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_SAVED_DIR: &str = "saved_datasets";
pub const DEFAULT_VERSIONED_DIR: &str = "versioned_datasets";
pub const DEFAULT_LABELS_FILE: &str = "version_labels.json";
pub const DEFAULT_TAG: &str = "mental_health";

/// Name of the per-project config file.
pub const CONFIG_FILE: &str = "pairforge.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Primary dataset directory
    pub saved_dir: PathBuf,
    /// Versioned copies; the source of truth for listing and comparing
    pub versioned_dir: PathBuf,
    /// JSON object mapping filename to label
    pub labels_file: PathBuf,
    /// Tag applied when an upload does not name one
    pub default_tag: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            saved_dir: PathBuf::from(DEFAULT_SAVED_DIR),
            versioned_dir: PathBuf::from(DEFAULT_VERSIONED_DIR),
            labels_file: PathBuf::from(DEFAULT_LABELS_FILE),
            default_tag: DEFAULT_TAG.to_string(),
        }
    }
}

impl Config {
    /// Default layout rooted at `root` instead of the working directory.
    pub fn rooted_at(root: impl AsRef<Path>) -> Self {
        Self::default().rebase(root)
    }

    /// Resolve relative locations against `root`. Absolute paths are kept.
    pub fn rebase(mut self, root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        self.saved_dir = root.join(&self.saved_dir);
        self.versioned_dir = root.join(&self.versioned_dir);
        self.labels_file = root.join(&self.labels_file);
        self
    }

    /// Parse a TOML document.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load from an explicit file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the first config file found, or defaults if there is none.
    pub fn discover() -> Result<Self, ConfigError> {
        for candidate in candidate_paths() {
            if candidate.is_file() {
                tracing::debug!(path = %candidate.display(), "loading config");
                return Self::from_file(candidate);
            }
        }
        Ok(Self::default())
    }
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("pairforge").join("config.toml"));
    }
    paths
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
