//! Comparison results

use crate::record::Record;

/// Matches from one side of a comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionMatches {
    pub filename: String,
    /// The version's label, or "Unlabeled"
    pub label: String,
    pub matches: Vec<Record>,
}

impl VersionMatches {
    pub fn count(&self) -> usize {
        self.matches.len()
    }
}

/// Result of comparing two versions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub first: VersionMatches,
    pub second: VersionMatches,
}

impl Comparison {
    /// Combined match count
    pub fn total(&self) -> usize {
        self.first.count() + self.second.count()
    }

    /// First version's matches followed by the second's
    pub fn combined(&self) -> Vec<Record> {
        self.first
            .matches
            .iter()
            .chain(self.second.matches.iter())
            .cloned()
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
