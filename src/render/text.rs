//! Plain text rendering for report documents.

use crate::error::Result;
use crate::model::{Block, Document};

use super::RenderOptions;

/// Convert a document to plain text.
///
/// Paragraphs are separated by blank lines, table rows become tab-separated
/// lines and list items keep the configured marker.
pub fn to_text(doc: &Document, options: &RenderOptions) -> Result<String> {
    let mut parts: Vec<String> = Vec::new();

    for block in &doc.blocks {
        match block {
            Block::Paragraph(p) if p.is_empty() => {}
            Block::Paragraph(p) if p.is_list_item() => {
                parts.push(format!("{} {}", options.list_marker, p.plain_text()));
            }
            Block::Paragraph(p) => parts.push(p.plain_text()),
            Block::Table(t) => parts.push(t.plain_text()),
            Block::PageBreak => {}
        }
    }

    Ok(parts.join("\n\n").trim().to_string())
}
