//! Filesystem storage backend
//!
//! Layout (relative to the working directory unless configured otherwise):
//!
//! ```text
//! saved_datasets/<tag>_<YYYYMMDD_HHMMSS>.jsonl       primary copy
//! versioned_datasets/<tag>_<YYYYMMDD_HHMMSS>.jsonl   byte-identical copy
//! version_labels.json                                filename -> label
//! ```

use super::labels::VersionLabels;
use super::traits::{DatasetStore, OpenStore, StorageError, StorageResult};
use crate::config::Config;
use crate::record::{self, Record};
use chrono::NaiveDateTime;
use std::path::{Component, Path, PathBuf};

/// Timestamp format embedded in dataset filenames.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Build the filename for a save of `tag` at `timestamp`.
///
/// Two saves with the same tag in the same second produce the same name.
pub fn dataset_filename(tag: &str, timestamp: NaiveDateTime) -> String {
    format!(
        "{}_{}.jsonl",
        tag.replace(' ', "_"),
        timestamp.format(TIMESTAMP_FORMAT)
    )
}

/// True if `name` is a single normal path component (no separators, no `..`).
fn is_bare_filename(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Write records as line-delimited JSON to an arbitrary path.
pub fn write_jsonl(path: impl AsRef<Path>, records: &[Record]) -> StorageResult<()> {
    let data = record::to_jsonl(records)?;
    std::fs::write(path, data)?;
    Ok(())
}

/// Dataset store on the local filesystem.
#[derive(Debug)]
pub struct FsStore {
    saved_dir: PathBuf,
    versioned_dir: PathBuf,
    labels: VersionLabels,
}

impl FsStore {
    pub fn saved_dir(&self) -> &Path {
        &self.saved_dir
    }

    pub fn versioned_dir(&self) -> &Path {
        &self.versioned_dir
    }

    pub fn labels(&self) -> &VersionLabels {
        &self.labels
    }

    /// Path of a versioned file. Rejects anything that is not a bare filename.
    fn versioned_path(&self, filename: &str) -> StorageResult<PathBuf> {
        if !is_bare_filename(filename) {
            return Err(StorageError::VersionNotFound(filename.to_string()));
        }
        Ok(self.versioned_dir.join(filename))
    }
}

impl OpenStore for FsStore {
    fn open(config: &Config) -> StorageResult<Self> {
        std::fs::create_dir_all(&config.saved_dir)?;
        std::fs::create_dir_all(&config.versioned_dir)?;
        let labels = VersionLabels::load(&config.labels_file)?;
        tracing::debug!(
            saved = %config.saved_dir.display(),
            versioned = %config.versioned_dir.display(),
            labels = labels.len(),
            "opened dataset store"
        );
        Ok(Self {
            saved_dir: config.saved_dir.clone(),
            versioned_dir: config.versioned_dir.clone(),
            labels,
        })
    }
}

impl DatasetStore for FsStore {
    fn save_at(
        &self,
        records: &[Record],
        tag: &str,
        timestamp: NaiveDateTime,
    ) -> StorageResult<String> {
        let filename = dataset_filename(tag, timestamp);
        if !is_bare_filename(&filename) {
            return Err(StorageError::InvalidTag(tag.to_string()));
        }
        let primary = self.saved_dir.join(&filename);
        let versioned = self.versioned_dir.join(&filename);

        if primary.exists() {
            tracing::warn!(%filename, "dataset already exists, overwriting");
        }
        write_jsonl(&primary, records)?;
        std::fs::copy(&primary, &versioned)?;

        tracing::info!(%filename, records = records.len(), "saved dataset");
        Ok(filename)
    }

    fn load(&self, filename: &str) -> StorageResult<Vec<Record>> {
        let path = self.versioned_path(filename)?;
        if !path.is_file() {
            return Err(StorageError::VersionNotFound(filename.to_string()));
        }
        let text = std::fs::read_to_string(&path)?;
        record::from_jsonl(&text).map_err(|(line, source)| StorageError::Parse {
            file: filename.to_string(),
            line,
            source,
        })
    }

    fn list_versions(&self) -> StorageResult<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.versioned_dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => tracing::debug!(?raw, "skipping non UTF-8 filename"),
            }
        }
        names.sort_unstable_by(|a, b| b.cmp(a));
        Ok(names)
    }

    fn label(&mut self, filename: &str, label: &str) -> StorageResult<()> {
        self.labels.set(filename, label)?;
        tracing::info!(%filename, %label, "labeled version");
        Ok(())
    }

    fn get_label(&self, filename: &str) -> Option<&str> {
        self.labels.get(filename)
    }
}
