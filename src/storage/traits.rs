//! Storage trait definitions

use crate::config::Config;
use crate::record::Record;
use chrono::NaiveDateTime;
use std::path::Path;
use thiserror::Error;

/// Label shown for versions nobody has labeled.
pub const UNLABELED: &str = "Unlabeled";

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Parse error in {file} line {line}: {source}")]
    Parse {
        file: String,
        line: usize,
        source: serde_json::Error,
    },

    #[error("Tag cannot be used in a filename: {0:?}")]
    InvalidTag(String),

    #[error("Version not found: {0}")]
    VersionNotFound(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for dataset storage backends
///
/// A store keeps a primary copy and a versioned copy of every saved dataset
/// plus a label per version. The versioned copies are what `list_versions`
/// and `load` read.
pub trait DatasetStore {
    // === Datasets ===

    /// Save records under a filename built from `tag` and `timestamp`
    fn save_at(
        &self,
        records: &[Record],
        tag: &str,
        timestamp: NaiveDateTime,
    ) -> StorageResult<String>;

    /// Save records stamped with the current local time
    fn save(&self, records: &[Record], tag: &str) -> StorageResult<String> {
        self.save_at(records, tag, chrono::Local::now().naive_local())
    }

    /// Load a versioned dataset
    fn load(&self, filename: &str) -> StorageResult<Vec<Record>>;

    /// Versioned filenames, newest first
    fn list_versions(&self) -> StorageResult<Vec<String>>;

    // === Labels ===

    /// Set or replace the label for a filename and persist the whole map
    fn label(&mut self, filename: &str, label: &str) -> StorageResult<()>;

    /// Label for a filename, if any
    fn get_label(&self, filename: &str) -> Option<&str>;

    /// Label for a filename, or [`UNLABELED`]
    fn label_for(&self, filename: &str) -> &str {
        self.get_label(filename).unwrap_or(UNLABELED)
    }
}

/// Extension trait for opening stores from configuration
pub trait OpenStore: DatasetStore + Sized {
    /// Open the store, creating directories as needed
    fn open(config: &Config) -> StorageResult<Self>;

    /// Open with the default layout under `root`
    fn open_at(root: impl AsRef<Path>) -> StorageResult<Self> {
        Self::open(&Config::rooted_at(root))
    }
}
