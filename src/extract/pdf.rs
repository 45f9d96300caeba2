//! PDF text extraction via lopdf

use super::ExtractResult;
use lopdf::Document;

/// Extract text page by page, skipping pages with no text.
///
/// Pages are joined with a single `\n`; a page that fails to decode or yields
/// no text contributes nothing, not even a blank line.
pub(super) fn extract(bytes: &[u8]) -> ExtractResult<String> {
    let doc = Document::load_mem(bytes)?;
    let mut pages = Vec::new();

    for page_number in doc.get_pages().keys() {
        match doc.extract_text(&[*page_number]) {
            Ok(text) => {
                let text = text.trim_end_matches(['\r', '\n']);
                if text.is_empty() {
                    tracing::debug!(page = page_number, "pdf page has no text, skipping");
                    continue;
                }
                pages.push(text.to_string());
            }
            Err(e) => {
                tracing::warn!(page = page_number, error = %e, "pdf page text unreadable, skipping");
            }
        }
    }

    Ok(pages.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::super::{extract_text, DocumentKind, ExtractError};
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    /// Build a PDF whose pages show the given strings; `None` is a blank page.
    fn build_pdf(pages: &[Option<&str>]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for text in pages {
            let operations = match text {
                Some(text) => vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![100.into(), 600.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
                None => vec![],
            };
            let content = Content { operations };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buf = Vec::new();
        doc.save_to(&mut buf).unwrap();
        buf
    }

    #[test]
    fn blank_pages_are_skipped() {
        let bytes = build_pdf(&[Some("How are you"), None, Some("Not great")]);
        let text = extract_text(DocumentKind::Pdf, &bytes).unwrap();

        let lines: Vec<&str> = text.lines().map(str::trim).collect();
        assert_eq!(lines, vec!["How are you", "Not great"]);
    }

    #[test]
    fn whitespace_page_keeps_its_line() {
        let bytes = build_pdf(&[Some("How are you"), Some("   "), Some("Not great")]);
        let text = extract_text(DocumentKind::Pdf, &bytes).unwrap();

        let lines: Vec<&str> = text.lines().map(str::trim).collect();
        assert_eq!(lines, vec!["How are you", "", "Not great"]);
    }

    #[test]
    fn garbage_is_a_pdf_error() {
        let err = extract_text(DocumentKind::Pdf, b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, ExtractError::Pdf(_)));
    }
}
