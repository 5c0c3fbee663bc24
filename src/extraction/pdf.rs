use lopdf::Document;

use super::ParseError;

/// Extract text page by page, in page order.
///
/// Pages that produce no text (blank pages, scanned images) are skipped
/// rather than contributing an empty line.
pub fn extract(bytes: &[u8]) -> Result<String, ParseError> {
    let document = Document::load_mem(bytes)?;

    let mut pages_text = Vec::new();
    for page_number in document.get_pages().keys() {
        let page_text = document.extract_text(&[*page_number])?;
        let page_text = page_text.trim_end_matches(|c| c == '\n' || c == '\r');
        if !page_text.is_empty() {
            pages_text.push(page_text.to_string());
        }
    }

    Ok(pages_text.join("\n"))
}
