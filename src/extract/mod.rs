//! Text extraction from uploaded documents
//!
//! Supported kinds: plain text, PDF and Word (.docx). Anything else extracts
//! to an empty string rather than an error, so an unsupported upload simply
//! produces an empty dataset.

mod docx;
mod pdf;

use std::path::Path;
use thiserror::Error;

pub const MIME_PLAIN_TEXT: &str = "text/plain";
pub const MIME_PDF: &str = "application/pdf";
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Errors that can occur while extracting text
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Text is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("XML error: {0}")]
    Xml(String),
}

/// Result type for extraction
pub type ExtractResult<T> = Result<T, ExtractError>;

/// The kinds of document an upload can declare
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    PlainText,
    Pdf,
    WordProcessor,
    Unknown,
}

impl DocumentKind {
    /// Detect the kind from a declared MIME type.
    pub fn from_mime(mime: &str) -> Self {
        match mime.trim().to_ascii_lowercase().as_str() {
            MIME_PLAIN_TEXT => Self::PlainText,
            MIME_PDF => Self::Pdf,
            MIME_DOCX => Self::WordProcessor,
            _ => Self::Unknown,
        }
    }

    /// Detect the kind from a file extension.
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("txt") => Self::PlainText,
            Some("pdf") => Self::Pdf,
            Some("docx") => Self::WordProcessor,
            _ => Self::Unknown,
        }
    }

    pub fn mime(&self) -> Option<&'static str> {
        match self {
            Self::PlainText => Some(MIME_PLAIN_TEXT),
            Self::Pdf => Some(MIME_PDF),
            Self::WordProcessor => Some(MIME_DOCX),
            Self::Unknown => None,
        }
    }
}

/// Extract the text content of a document.
pub fn extract_text(kind: DocumentKind, bytes: &[u8]) -> ExtractResult<String> {
    match kind {
        DocumentKind::PlainText => Ok(String::from_utf8(bytes.to_vec())?),
        DocumentKind::Pdf => pdf::extract(bytes),
        DocumentKind::WordProcessor => docx::extract(bytes),
        DocumentKind::Unknown => {
            tracing::debug!("unrecognized document kind, extracting nothing");
            Ok(String::new())
        }
    }
}

/// Read a file and extract its text, detecting the kind from the extension.
pub fn extract_file(path: impl AsRef<Path>) -> ExtractResult<String> {
    let path = path.as_ref();
    let kind = DocumentKind::from_path(path);
    let bytes = std::fs::read(path)?;
    extract_text(kind, &bytes)
}
