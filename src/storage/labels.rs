//! Version label map persisted as a single JSON object

use super::traits::StorageResult;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Filename → free-text label, backed by a pretty-printed JSON file.
///
/// The file is read once on open and rewritten in full after every change.
/// There is no locking: two processes labeling at once can lose an update.
#[derive(Debug)]
pub struct VersionLabels {
    path: PathBuf,
    labels: BTreeMap<String, String>,
}

impl VersionLabels {
    /// Read the label file, or start empty if it does not exist.
    pub fn load(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let path = path.into();
        let labels = if path.exists() {
            let text = std::fs::read_to_string(&path)?;
            serde_json::from_str(&text)?
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, labels })
    }

    pub fn get(&self, filename: &str) -> Option<&str> {
        self.labels.get(filename).map(String::as_str)
    }

    /// Set or overwrite a label, then rewrite the file.
    pub fn set(&mut self, filename: &str, label: &str) -> StorageResult<()> {
        self.labels.insert(filename.to_string(), label.to_string());
        self.persist()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    fn persist(&self) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let text = serde_json::to_string_pretty(&self.labels)?;
        std::fs::write(&self.path, text)?;
        Ok(())
    }
}
