//! Read a .docx package back into a structural summary.

use super::{parts, W_NS};
use crate::error::{Error, Result};
use roxmltree::Node;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;
use zip::result::ZipError;
use zip::ZipArchive;

const CORE_DC_NS: &str = "http://purl.org/dc/elements/1.1/";
const TYPES_NS: &str = "http://schemas.openxmlformats.org/package/2006/content-types";

/// Shape of one top-level table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableShape {
    /// Table style id, if set
    pub style: Option<String>,
    /// Row count, header rows included
    pub rows: usize,
    /// Grid column count
    pub columns: usize,
}

/// What a package contains.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DocxSummary {
    /// `dc:title` from the core properties
    pub title: Option<String>,
    /// Content type declared for the main document part
    pub main_content_type: Option<String>,
    /// Top-level paragraphs, page-break carriers excluded
    pub paragraphs: usize,
    /// Top-level paragraphs styled Title or HeadingN
    pub headings: usize,
    /// Hard page breaks
    pub page_breaks: usize,
    /// Top-level tables in document order
    pub tables: Vec<TableShape>,
    /// Paragraph text, one paragraph per line
    pub text: String,
    /// Archive entry names
    pub parts: Vec<String>,
}

impl DocxSummary {
    /// Check if the document text contains `needle`.
    pub fn contains_text(&self, needle: &str) -> bool {
        self.text.contains(needle)
    }

    /// Row counts of all tables.
    pub fn table_rows(&self) -> Vec<usize> {
        self.tables.iter().map(|t| t.rows).collect()
    }

    /// Pretty JSON form of the summary.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Summarize the .docx file at `path`.
pub fn inspect_file<P: AsRef<Path>>(path: P) -> Result<DocxSummary> {
    let file = File::open(path)?;
    inspect_reader(BufReader::new(file))
}

/// Summarize an in-memory .docx package.
pub fn inspect_bytes(data: &[u8]) -> Result<DocxSummary> {
    inspect_reader(Cursor::new(data))
}

/// Summarize a .docx package from any seekable reader.
pub fn inspect_reader<R: Read + Seek>(reader: R) -> Result<DocxSummary> {
    let mut archive = ZipArchive::new(reader)?;
    let part_names = archive.file_names().map(String::from).collect();

    let content_types = read_part(&mut archive, parts::CONTENT_TYPES)?;
    let body = read_part(&mut archive, parts::DOCUMENT)?;
    let core = match read_part(&mut archive, parts::CORE) {
        Ok(xml) => Some(xml),
        Err(Error::MissingPart(_)) => None,
        Err(e) => return Err(e),
    };

    let mut summary = summarize_body(&body)?;
    summary.parts = part_names;
    summary.main_content_type = main_content_type(&content_types)?;
    if let Some(core) = core {
        summary.title = core_title(&core)?;
    }

    log::debug!(
        "Inspected package: {} paragraphs, {} tables",
        summary.paragraphs,
        summary.tables.len()
    );
    Ok(summary)
}

fn read_part<R: Read + Seek>(archive: &mut ZipArchive<R>, name: &str) -> Result<String> {
    let mut file = archive.by_name(name).map_err(|e| match e {
        ZipError::FileNotFound => Error::MissingPart(name.to_string()),
        other => Error::Zip(other),
    })?;
    let mut xml = String::new();
    file.read_to_string(&mut xml)?;
    Ok(xml)
}

fn main_content_type(xml: &str) -> Result<Option<String>> {
    let doc = roxmltree::Document::parse(xml)?;
    let target = format!("/{}", parts::DOCUMENT);
    Ok(doc
        .descendants()
        .filter(|n| n.has_tag_name((TYPES_NS, "Override")))
        .find(|n| n.attribute("PartName") == Some(target.as_str()))
        .and_then(|n| n.attribute("ContentType"))
        .map(String::from))
}

fn core_title(xml: &str) -> Result<Option<String>> {
    let doc = roxmltree::Document::parse(xml)?;
    Ok(doc
        .descendants()
        .find(|n| n.has_tag_name((CORE_DC_NS, "title")))
        .and_then(|n| n.text())
        .map(String::from))
}

fn summarize_body(xml: &str) -> Result<DocxSummary> {
    let doc = roxmltree::Document::parse(xml)?;
    let mut summary = DocxSummary::default();

    let Some(body) = doc.descendants().find(|n| n.has_tag_name((W_NS, "body"))) else {
        return Err(Error::MissingPart("w:body".to_string()));
    };

    let mut lines = Vec::new();
    for child in body.children().filter(Node::is_element) {
        match child.tag_name().name() {
            "p" => {
                let breaks = count_page_breaks(child);
                summary.page_breaks += breaks;
                let text = paragraph_text(child);
                if breaks > 0 && text.is_empty() {
                    continue;
                }
                summary.paragraphs += 1;
                if is_heading(child) {
                    summary.headings += 1;
                }
                lines.push(text);
            }
            "tbl" => {
                summary.tables.push(table_shape(child));
                for row in child.children().filter(|n| n.has_tag_name((W_NS, "tr"))) {
                    let cells: Vec<String> = row
                        .children()
                        .filter(|n| n.has_tag_name((W_NS, "tc")))
                        .map(|tc| {
                            tc.children()
                                .filter(|n| n.has_tag_name((W_NS, "p")))
                                .map(paragraph_text)
                                .collect::<Vec<_>>()
                                .join("\n")
                        })
                        .collect();
                    lines.push(cells.join("\t"));
                }
            }
            _ => {}
        }
    }

    summary.text = lines.join("\n");
    Ok(summary)
}

fn w_val<'a>(node: Node<'a, '_>) -> Option<&'a str> {
    node.attribute((W_NS, "val"))
}

fn count_page_breaks(p: Node<'_, '_>) -> usize {
    p.descendants()
        .filter(|n| n.has_tag_name((W_NS, "br")))
        .filter(|n| n.attribute((W_NS, "type")) == Some("page"))
        .count()
}

fn is_heading(p: Node<'_, '_>) -> bool {
    p.children()
        .filter(|n| n.has_tag_name((W_NS, "pPr")))
        .flat_map(|ppr| ppr.children())
        .filter(|n| n.has_tag_name((W_NS, "pStyle")))
        .filter_map(w_val)
        .any(|id| id == "Title" || id.starts_with("Heading"))
}

fn paragraph_text(p: Node<'_, '_>) -> String {
    let mut text = String::new();
    for node in p.descendants().filter(Node::is_element) {
        match node.tag_name().name() {
            "t" => text.push_str(node.text().unwrap_or("")),
            "tab" => text.push('\t'),
            "br" if node.attribute((W_NS, "type")).is_none() => text.push('\n'),
            _ => {}
        }
    }
    text
}

fn table_shape(tbl: Node<'_, '_>) -> TableShape {
    let style = tbl
        .children()
        .filter(|n| n.has_tag_name((W_NS, "tblPr")))
        .flat_map(|pr| pr.children())
        .find(|n| n.has_tag_name((W_NS, "tblStyle")))
        .and_then(w_val)
        .map(String::from);
    let rows = tbl
        .children()
        .filter(|n| n.has_tag_name((W_NS, "tr")))
        .count();
    let columns = tbl
        .children()
        .filter(|n| n.has_tag_name((W_NS, "tblGrid")))
        .flat_map(|grid| grid.children())
        .filter(|n| n.has_tag_name((W_NS, "gridCol")))
        .count();

    TableShape {
        style,
        rows,
        columns,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docx::{to_docx_bytes, CONTENT_TYPE_MAIN};
    use crate::model::{Block, Document, Metadata, Paragraph, Table, TableRow, TableStyle};
    use std::io::Write;
    use zip::write::{FileOptions, ZipWriter};

    fn sample() -> Document {
        let mut doc = Document::new();
        doc.metadata = Metadata::with_title("Sprint Documentation");
        doc.add_block(Paragraph::title("Adbeam"));
        doc.add_block(Paragraph::with_text("Line one\nLine two"));
        doc.add_block(Block::PageBreak);
        doc.add_block(Paragraph::heading("1. Executive Summary", 1));
        let mut table = Table::with_header(1).styled(TableStyle::LightGridAccent1);
        table.add_row(TableRow::from_strings(["Feature", "Status"]));
        table.add_row(TableRow::from_strings(["Leaderboard", "✓ Complete"]));
        doc.add_block(table);
        doc
    }

    #[test]
    fn test_roundtrip_summary() {
        let summary = inspect_bytes(&to_docx_bytes(&sample()).unwrap()).unwrap();

        assert_eq!(summary.title.as_deref(), Some("Sprint Documentation"));
        assert_eq!(summary.main_content_type.as_deref(), Some(CONTENT_TYPE_MAIN));
        assert_eq!(summary.paragraphs, 3);
        assert_eq!(summary.headings, 2);
        assert_eq!(summary.page_breaks, 1);
        assert_eq!(
            summary.tables,
            vec![TableShape {
                style: Some("LightGrid-Accent1".into()),
                rows: 2,
                columns: 2,
            }]
        );
        assert!(summary.contains_text("Line one\nLine two"));
        assert!(summary.contains_text("Leaderboard\t✓ Complete"));
        assert!(summary.parts.iter().any(|p| p == "word/styles.xml"));

        let json = summary.to_json().unwrap();
        assert!(json.contains("\"page_breaks\": 1"));
    }

    #[test]
    fn test_missing_document_part() {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options: FileOptions<'_, ()> = FileOptions::default();
        zip.start_file(parts::CONTENT_TYPES, options).unwrap();
        zip.write_all(b"<Types/>").unwrap();
        let bytes = zip.finish().unwrap().into_inner();

        match inspect_bytes(&bytes) {
            Err(Error::MissingPart(name)) => assert_eq!(name, parts::DOCUMENT),
            other => panic!("expected MissingPart, got {:?}", other),
        }
    }

    #[test]
    fn test_not_a_zip() {
        assert!(matches!(
            inspect_bytes(b"plain text"),
            Err(Error::Zip(_))
        ));
    }
}
