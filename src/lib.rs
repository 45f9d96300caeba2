//! pairforge: anonymized prompt/response datasets from raw documents
//!
//! Turns uploaded documents into line-delimited JSON training data and keeps
//! a lightweight version history of the results.
//!
//! # Core Concepts
//!
//! - **Records**: prompt/response/tag triples, one JSON object per line
//! - **Scrubbing**: fixed regex rules replace names, dates, phones and emails
//!   with placeholders before anything is written
//! - **Versions**: every save is copied into a versioned directory and can
//!   carry a free-text label
//! - **Comparison**: keyword/tag search across two versions with a combined
//!   export
//!
//! # Example
//!
//! ```
//! use pairforge::{segment_into_pairs, scrub_text};
//!
//! let text = scrub_text("How is Jane Doe?\nShe is fine.");
//! let records = segment_into_pairs(&text, "check-in");
//! assert_eq!(records[0].prompt, "How is [REDACTED_NAME]?");
//! ```

pub mod compare;
pub mod config;
pub mod extract;
pub mod pipeline;
mod record;
pub mod scrub;
mod segment;
pub mod storage;

pub use compare::{compare, export_filename, highlight, CompareError, CompareQuery, Comparison};
pub use config::Config;
pub use extract::{extract_file, extract_text, DocumentKind, ExtractError};
pub use pipeline::{IngestReport, Pipeline, PipelineError, Upload};
pub use record::{from_jsonl, to_jsonl, Record};
pub use scrub::{scrub_text, Scrubber};
pub use segment::segment_into_pairs;
pub use storage::{DatasetStore, FsStore, OpenStore, StorageError, StorageResult, UNLABELED};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
