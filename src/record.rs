//! Record: one prompt/response/tag triple and its line-delimited JSON form

use serde::{Deserialize, Serialize};

/// A single training example.
///
/// Identity is positional within a dataset file; there is no id field.
/// Unknown keys on a loaded line are ignored so older readers can open
/// files written with extra fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub prompt: String,
    pub response: String,
    pub tag: String,
}

impl Record {
    pub fn new(
        prompt: impl Into<String>,
        response: impl Into<String>,
        tag: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            response: response.into(),
            tag: tag.into(),
        }
    }

    /// True if `needle` (already lowercased) occurs in the prompt or response,
    /// ignoring case.
    pub fn mentions(&self, needle: &str) -> bool {
        self.prompt.to_lowercase().contains(needle)
            || self.response.to_lowercase().contains(needle)
    }
}

/// Serialize records as line-delimited JSON.
///
/// One compact object per line, joined with `\n`, no trailing newline.
pub fn to_jsonl(records: &[Record]) -> serde_json::Result<String> {
    let lines = records
        .iter()
        .map(serde_json::to_string)
        .collect::<serde_json::Result<Vec<_>>>()?;
    Ok(lines.join("\n"))
}

/// Parse line-delimited JSON, skipping blank lines.
///
/// On failure returns the 1-based line number alongside the serde error.
pub fn from_jsonl(text: &str) -> Result<Vec<Record>, (usize, serde_json::Error)> {
    let mut records = Vec::new();
    for (i, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(line).map_err(|e| (i + 1, e))?;
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jsonl_is_compact_without_trailing_newline() {
        let records = vec![
            Record::new("a", "b", "grief"),
            Record::new("c", "d", "grief"),
        ];
        let text = to_jsonl(&records).unwrap();
        assert_eq!(
            text,
            "{\"prompt\":\"a\",\"response\":\"b\",\"tag\":\"grief\"}\n\
             {\"prompt\":\"c\",\"response\":\"d\",\"tag\":\"grief\"}"
        );
    }

    #[test]
    fn empty_set_serializes_to_empty_string() {
        assert_eq!(to_jsonl(&[]).unwrap(), "");
        assert!(from_jsonl("").unwrap().is_empty());
    }

    #[test]
    fn blank_lines_are_skipped() {
        let text = "{\"prompt\":\"a\",\"response\":\"b\",\"tag\":\"t\"}\n\n  \n";
        let records = from_jsonl(text).unwrap();
        assert_eq!(records, vec![Record::new("a", "b", "t")]);
    }

    #[test]
    fn extra_fields_are_ignored() {
        let text = r#"{"prompt":"a","response":"b","tag":"t","source":"intake.pdf"}"#;
        let records = from_jsonl(text).unwrap();
        assert_eq!(records[0], Record::new("a", "b", "t"));
    }

    #[test]
    fn missing_field_reports_line_number() {
        let text = "{\"prompt\":\"a\",\"response\":\"b\",\"tag\":\"t\"}\n{\"prompt\":\"a\"}";
        let (line, _) = from_jsonl(text).unwrap_err();
        assert_eq!(line, 2);
    }

    #[test]
    fn mentions_ignores_case() {
        let record = Record::new("Hello World", "fine", "t");
        assert!(record.mentions("hello"));
        assert!(record.mentions("fine"));
        assert!(!record.mentions("goodbye"));
    }
}
