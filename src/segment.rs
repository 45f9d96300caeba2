//! Naive paragraph pairing

use crate::record::Record;

/// Split `text` into prompt/response pairs.
///
/// Lines are trimmed and blank ones dropped; the survivors are paired in
/// order. An odd final line has no response and is discarded.
pub fn segment_into_pairs(text: &str, tag: &str) -> Vec<Record> {
    let paragraphs: Vec<&str> = text
        .split('\n')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    paragraphs
        .chunks_exact(2)
        .map(|pair| Record::new(pair[0], pair[1], tag))
        .collect()
}
