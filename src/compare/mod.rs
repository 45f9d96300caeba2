//! Two-version keyword comparison
//!
//! Loads two versioned datasets, keeps the records that mention a keyword
//! (and optionally carry a tag), and reports both sides plus their
//! concatenation for export.

mod query;
mod types;

pub use query::CompareQuery;
pub use types::{Comparison, VersionMatches};

use crate::storage::{DatasetStore, StorageError, TIMESTAMP_FORMAT};
use chrono::NaiveDateTime;
use thiserror::Error;

/// Errors that stop a comparison from running
#[derive(Debug, Error)]
pub enum CompareError {
    #[error("comparison needs at least two versions, found {found}")]
    NotEnoughVersions { found: usize },

    #[error("cannot compare {0} with itself")]
    SameVersion(String),

    #[error("a keyword is required")]
    EmptyKeyword,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Result type for comparisons
pub type CompareResult<T> = Result<T, CompareError>;

/// Compare two versions held by `store`.
pub fn compare<S: DatasetStore + ?Sized>(store: &S, query: &CompareQuery) -> CompareResult<Comparison> {
    let found = store.list_versions()?.len();
    if found < 2 {
        return Err(CompareError::NotEnoughVersions { found });
    }
    if query.first == query.second {
        return Err(CompareError::SameVersion(query.first.clone()));
    }
    if query.keyword.is_empty() {
        return Err(CompareError::EmptyKeyword);
    }

    let first = query.filter(store.load(&query.first)?);
    let second = query.filter(store.load(&query.second)?);

    let comparison = Comparison {
        first: VersionMatches {
            filename: query.first.clone(),
            label: store.label_for(&query.first).to_string(),
            matches: first,
        },
        second: VersionMatches {
            filename: query.second.clone(),
            label: store.label_for(&query.second).to_string(),
            matches: second,
        },
    };

    tracing::info!(
        first = %query.first,
        second = %query.second,
        keyword = %query.keyword,
        first_matches = comparison.first.count(),
        second_matches = comparison.second.count(),
        "compared versions"
    );
    Ok(comparison)
}

/// Filename for exporting a comparison's combined matches.
///
/// `comparison_<first 10 chars>_vs_<first 10 chars>_<YYYYMMDD_HHMMSS>.jsonl`
pub fn export_filename(first: &str, second: &str, timestamp: NaiveDateTime) -> String {
    let head = |name: &str| name.chars().take(10).collect::<String>();
    format!(
        "comparison_{}_vs_{}_{}.jsonl",
        head(first),
        head(second),
        timestamp.format(TIMESTAMP_FORMAT)
    )
}

/// Emphasize every exact occurrence of `keyword` in `text` for display.
pub fn highlight(text: &str, keyword: &str) -> String {
    if keyword.is_empty() {
        return text.to_string();
    }
    text.replace(keyword, &format!("**{keyword}**"))
}
