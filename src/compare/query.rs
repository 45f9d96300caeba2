//! Comparison query

use crate::record::Record;

/// Which two versions to compare and how to filter them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompareQuery {
    /// First versioned filename
    pub first: String,
    /// Second versioned filename
    pub second: String,
    /// Required, matched case-insensitively against prompt and response
    pub keyword: String,
    /// Optional, matched case-insensitively against the tag
    pub tag_filter: Option<String>,
}

impl CompareQuery {
    pub fn new(
        first: impl Into<String>,
        second: impl Into<String>,
        keyword: impl Into<String>,
    ) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
            keyword: keyword.into(),
            tag_filter: None,
        }
    }

    /// Filter by tag substring. An empty filter means no filter.
    pub fn with_tag_filter(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        self.tag_filter = if tag.is_empty() { None } else { Some(tag) };
        self
    }

    /// Keep the records that match this query, in order.
    pub fn filter(&self, records: Vec<Record>) -> Vec<Record> {
        let keyword = self.keyword.to_lowercase();
        let tag = self.tag_filter.as_ref().map(|t| t.to_lowercase());
        records
            .into_iter()
            .filter(|r| {
                r.mentions(&keyword)
                    && tag
                        .as_deref()
                        .map_or(true, |t| r.tag.to_lowercase().contains(t))
            })
            .collect()
    }
}
