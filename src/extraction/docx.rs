use std::io::Cursor;

use docx_rust::document::{BodyContent, BreakType, Paragraph, ParagraphContent, Run, RunContent};
use docx_rust::DocxFile;

use super::ParseError;

/// Text of every top-level body paragraph, one line per paragraph.
///
/// Empty paragraphs are kept as empty lines so the document's vertical
/// spacing survives. Tables and other block content are not paragraphs
/// and are skipped.
pub fn extract(bytes: &[u8]) -> Result<String, ParseError> {
    let file = DocxFile::from_reader(Cursor::new(bytes))
        .map_err(|e| ParseError::Docx(format!("Failed to open DOCX archive: {}", e)))?;
    let docx = file
        .parse()
        .map_err(|e| ParseError::Docx(format!("Failed to parse DOCX document: {}", e)))?;

    let paragraphs: Vec<String> = docx
        .document
        .body
        .content
        .iter()
        .filter_map(|content| match content {
            BodyContent::Paragraph(paragraph) => Some(paragraph_text(paragraph)),
            _ => None,
        })
        .collect();

    Ok(paragraphs.join("\n"))
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut line = String::new();
    for content in &paragraph.content {
        match content {
            ParagraphContent::Run(run) => push_run_text(&mut line, run),
            ParagraphContent::Link(link) => {
                if let Some(run) = &link.content {
                    push_run_text(&mut line, run);
                }
            }
            ParagraphContent::SDT(sdt) => {
                for inner in sdt.content.iter().flat_map(|c| c.content.iter()) {
                    match inner {
                        BodyContent::Run(run) => push_run_text(&mut line, run),
                        BodyContent::Paragraph(nested) => line.push_str(&paragraph_text(nested)),
                        _ => {}
                    }
                }
            }
            _ => {}
        }
    }
    line
}

/// Visible characters of a run. Field instructions and deleted text are
/// not part of what the reader sees.
fn push_run_text(line: &mut String, run: &Run) {
    for content in &run.content {
        match content {
            RunContent::Text(text) => line.push_str(&text.text),
            RunContent::Tab(_) | RunContent::PTab(_) => line.push('\t'),
            RunContent::CarriageReturn(_) => line.push('\n'),
            // Only text-wrapping breaks start a new line
            RunContent::Break(br) => {
                if matches!(br.ty, None | Some(BreakType::TextWrapping)) {
                    line.push('\n');
                }
            }
            RunContent::NoBreakHyphen(_) => line.push('-'),
            _ => {}
        }
    }
}
