//! Storage backends for pairforge
//!
//! Datasets are persisted through the `DatasetStore` trait. The only
//! implementation is `FsStore`, which keeps line-delimited JSON files on disk.

mod fs;
mod labels;
mod traits;

pub use fs::{dataset_filename, write_jsonl, FsStore, TIMESTAMP_FORMAT};
pub use labels::VersionLabels;
pub use traits::{DatasetStore, OpenStore, StorageError, StorageResult, UNLABELED};
