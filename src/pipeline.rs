//! Upload pipeline: extract → scrub → segment → save → label
//!
//! One call per uploaded document. Nothing is kept between calls apart from
//! what the store persists.

use crate::extract::{self, DocumentKind, ExtractError};
use crate::record::Record;
use crate::scrub::Scrubber;
use crate::segment::segment_into_pairs;
use crate::storage::{DatasetStore, StorageError};
use chrono::NaiveDateTime;
use thiserror::Error;

/// Number of records shown back to the uploader.
pub const PREVIEW_LEN: usize = 3;

/// Errors that abort an upload
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("extraction failed: {0}")]
    Extract(#[from] ExtractError),

    #[error("storage failed: {0}")]
    Storage(#[from] StorageError),
}

/// Result type for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;

/// One uploaded document and what to do with it
#[derive(Debug, Clone)]
pub struct Upload {
    pub kind: DocumentKind,
    pub bytes: Vec<u8>,
    pub tag: String,
    /// Version label; empty or absent leaves the version unlabeled
    pub label: Option<String>,
}

impl Upload {
    pub fn new(kind: DocumentKind, bytes: impl Into<Vec<u8>>, tag: impl Into<String>) -> Self {
        Self {
            kind,
            bytes: bytes.into(),
            tag: tag.into(),
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// What an upload produced
#[derive(Debug, Clone)]
pub struct IngestReport {
    /// Filename under which the dataset was saved
    pub filename: String,
    pub records: Vec<Record>,
    /// Label applied to the new version, if any
    pub label: Option<String>,
}

impl IngestReport {
    /// The first few records, for a quick look
    pub fn preview(&self) -> &[Record] {
        &self.records[..self.records.len().min(PREVIEW_LEN)]
    }
}

/// Runs uploads through extraction, scrubbing and segmentation into a store
#[derive(Default)]
pub struct Pipeline {
    scrubber: Scrubber,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn raw text into tagged, scrubbed records without saving.
    pub fn build_records(&self, text: &str, tag: &str) -> Vec<Record> {
        let (scrubbed, hits) = self.scrubber.scrub_with_report(text);
        for hit in hits.iter().filter(|h| h.count > 0) {
            tracing::debug!(rule = hit.rule, count = hit.count, "redacted");
        }
        segment_into_pairs(&scrubbed, tag)
    }

    /// Process an upload, stamping the saved file with the current time.
    pub fn ingest<S: DatasetStore + ?Sized>(
        &self,
        store: &mut S,
        upload: &Upload,
    ) -> PipelineResult<IngestReport> {
        self.ingest_at(store, upload, chrono::Local::now().naive_local())
    }

    /// Process an upload with an explicit timestamp.
    pub fn ingest_at<S: DatasetStore + ?Sized>(
        &self,
        store: &mut S,
        upload: &Upload,
        timestamp: NaiveDateTime,
    ) -> PipelineResult<IngestReport> {
        let text = extract::extract_text(upload.kind, &upload.bytes)?;
        tracing::debug!(kind = ?upload.kind, chars = text.len(), "extracted text");

        let records = self.build_records(&text, &upload.tag);
        let filename = store.save_at(&records, &upload.tag, timestamp)?;

        let label = match upload.label.as_deref() {
            Some(label) if !label.is_empty() => {
                store.label(&filename, label)?;
                Some(label.to_string())
            }
            _ => None,
        };

        Ok(IngestReport {
            filename,
            records,
            label,
        })
    }
}
