//! Incremental document construction.
//!
//! [`ReportBuilder`] appends headings, paragraphs, tables and page breaks
//! in call order. [`TableBuilder`] assembles a table from plain string
//! records and applies per-column coloring rules.
//!
//! ```
//! use sprintdoc::builder::{ReportBuilder, TableBuilder};
//! use sprintdoc::model::{Rgb, TableStyle};
//!
//! # fn main() -> sprintdoc::Result<()> {
//! let table = TableBuilder::new(TableStyle::LightGridAccent1)
//!     .header(["Feature", "Priority"])
//!     .row(["Barcode Scanning", "CRITICAL"])
//!     .color_column(1, |p| (p == "CRITICAL").then(|| Rgb::new(220, 38, 38)))
//!     .build()?;
//!
//! let mut builder = ReportBuilder::new();
//! builder.heading("2.1 Core Scanning Functionality", 2).table(table).page_break();
//! let doc = builder.finish();
//! assert_eq!(doc.block_count(), 3);
//! # Ok(())
//! # }
//! ```

use crate::docx;
use crate::error::{Error, Result};
use crate::model::{
    Alignment, Block, Document, DocumentStyle, Metadata, Paragraph, ParagraphKind, Rgb, Table,
    TableCell, TableRow, TableStyle, TextRun,
};
use std::path::Path;

/// Rule deciding the color of a cell from its text.
pub type ColorRule = fn(&str) -> Option<Rgb>;

/// Appends blocks to an in-memory document.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    doc: Document,
}

impl ReportBuilder {
    /// Create a builder for an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set document metadata.
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.doc.metadata = metadata;
        self
    }

    /// Set the default font.
    pub fn with_style(mut self, style: DocumentStyle) -> Self {
        self.doc.style = style;
        self
    }

    /// Append a centered, colored title (heading level 0).
    pub fn title(&mut self, text: &str, color: Rgb) -> &mut Self {
        let mut title =
            Paragraph::with_runs([TextRun::colored(text, color)]).align(Alignment::Center);
        title.style.kind = ParagraphKind::Title;
        self.paragraph(title)
    }

    /// Append a heading. Level 0 is a title.
    pub fn heading(&mut self, text: &str, level: u8) -> &mut Self {
        self.paragraph(Paragraph::heading(text, level))
    }

    /// Append a paragraph.
    pub fn paragraph(&mut self, paragraph: Paragraph) -> &mut Self {
        self.doc.add_block(paragraph);
        self
    }

    /// Append a paragraph of plain text.
    pub fn text(&mut self, text: &str) -> &mut Self {
        self.paragraph(Paragraph::with_text(text))
    }

    /// Append a paragraph of the form "**label** value".
    pub fn labeled(&mut self, label: &str, value: &str) -> &mut Self {
        self.paragraph(Paragraph::with_runs([
            TextRun::bold(label),
            TextRun::new(value),
        ]))
    }

    /// Append an empty paragraph.
    pub fn blank(&mut self) -> &mut Self {
        self.paragraph(Paragraph::new())
    }

    /// Append a bulleted list item.
    pub fn bullet(&mut self, text: &str) -> &mut Self {
        self.paragraph(Paragraph::bullet(text))
    }

    /// Append a table.
    pub fn table(&mut self, table: Table) -> &mut Self {
        self.doc.add_block(table);
        self
    }

    /// Append a hard page break.
    pub fn page_break(&mut self) -> &mut Self {
        self.doc.add_block(Block::PageBreak);
        self
    }

    /// Number of blocks appended so far.
    pub fn block_count(&self) -> usize {
        self.doc.block_count()
    }

    /// Borrow the document built so far.
    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Finish building and return the document.
    pub fn finish(self) -> Document {
        self.doc
    }

    /// Finish building and write the document as .docx to `path`.
    pub fn save<P: AsRef<Path>>(self, path: P) -> Result<Document> {
        let doc = self.finish();
        docx::write_docx(&doc, path)?;
        Ok(doc)
    }
}

/// Builds a [`Table`] from string records.
#[derive(Debug, Clone)]
pub struct TableBuilder {
    style: TableStyle,
    header: Option<Vec<String>>,
    header_color: Option<Rgb>,
    rows: Vec<Vec<String>>,
    rules: Vec<(usize, ColorRule)>,
    bold_first_column: bool,
}

impl TableBuilder {
    /// Create a builder for a table in the given style.
    pub fn new(style: TableStyle) -> Self {
        Self {
            style,
            header: None,
            header_color: None,
            rows: Vec::new(),
            rules: Vec::new(),
            bold_first_column: false,
        }
    }

    /// Set the header row. Header cells are bold.
    pub fn header<S: Into<String>>(mut self, cells: impl IntoIterator<Item = S>) -> Self {
        self.header = Some(cells.into_iter().map(Into::into).collect());
        self
    }

    /// Color the header text.
    pub fn header_color(mut self, color: Rgb) -> Self {
        self.header_color = Some(color);
        self
    }

    /// Append one data row.
    pub fn row<S: Into<String>>(mut self, cells: impl IntoIterator<Item = S>) -> Self {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    /// Append several data rows.
    pub fn rows<R, S>(mut self, rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for row in rows {
            self = self.row(row);
        }
        self
    }

    /// Color the cells of a data column according to `rule`.
    ///
    /// Cells the rule returns None for keep the default color.
    pub fn color_column(mut self, column: usize, rule: ColorRule) -> Self {
        self.rules.push((column, rule));
        self
    }

    /// Make non-empty cells in the first column bold.
    pub fn bold_first_column(mut self) -> Self {
        self.bold_first_column = true;
        self
    }

    /// Build the table.
    ///
    /// Every data row must have as many cells as the header, or as the first
    /// row when there is no header.
    pub fn build(self) -> Result<Table> {
        let expected = self
            .header
            .as_ref()
            .map(Vec::len)
            .or_else(|| self.rows.first().map(Vec::len))
            .unwrap_or(0);

        if let Some((row, cells)) = self
            .rows
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != expected)
        {
            return Err(Error::ColumnMismatch {
                row,
                expected,
                found: cells.len(),
            });
        }

        let mut table = Table::new().styled(self.style);

        if let Some(header) = self.header {
            table.header_rows = 1;
            let cells = header
                .into_iter()
                .map(|text| {
                    let mut run = TextRun::bold(text);
                    run.style.color = self.header_color;
                    TableCell::run(run)
                })
                .collect();
            table.add_row(TableRow::header(cells));
        }

        for record in self.rows {
            let cells = record
                .into_iter()
                .enumerate()
                .map(|(column, text)| {
                    let mut run = TextRun::new(text);
                    if column == 0 && self.bold_first_column && !run.text.is_empty() {
                        run.style.bold = true;
                    }
                    for (_, rule) in self.rules.iter().filter(|(c, _)| *c == column) {
                        if let Some(color) = rule(&run.text) {
                            run.style.color = Some(color);
                        }
                    }
                    TableCell::run(run)
                })
                .collect();
            table.add_row(TableRow::new(cells));
        }

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::new(220, 38, 38);

    fn critical(text: &str) -> Option<Rgb> {
        (text == "CRITICAL").then_some(RED)
    }

    #[test]
    fn test_builder_appends_in_order() {
        let mut builder = ReportBuilder::new();
        builder
            .title("Report", Rgb::new(16, 185, 129))
            .text("Intro")
            .page_break()
            .heading("Section", 1)
            .bullet("item");

        let doc = builder.finish();
        assert_eq!(doc.block_count(), 5);
        assert!(doc.blocks[2].is_page_break());

        let headings: Vec<_> = doc.headings().map(|h| h.heading_level()).collect();
        assert_eq!(headings, vec![Some(0), Some(1)]);
    }

    #[test]
    fn test_title_is_centered_and_colored() {
        let mut builder = ReportBuilder::new();
        builder.title("Report", Rgb::new(16, 185, 129));
        let doc = builder.finish();

        let title = doc.paragraphs().next().unwrap();
        assert_eq!(title.style.alignment, Alignment::Center);
        let run = title.runs().next().unwrap();
        assert_eq!(run.style.color, Some(Rgb::new(16, 185, 129)));
    }

    #[test]
    fn test_labeled_runs() {
        let mut builder = ReportBuilder::new();
        builder.labeled("Platform: ", "React Native with Expo");
        let doc = builder.finish();

        let para = doc.paragraphs().next().unwrap();
        let runs: Vec<_> = para.runs().collect();
        assert_eq!(runs.len(), 2);
        assert!(runs[0].style.bold);
        assert!(!runs[1].style.bold);
    }

    #[test]
    fn test_table_builder_header_and_colors() {
        let table = TableBuilder::new(TableStyle::LightGridAccent1)
            .header(["Feature", "Priority", "Description"])
            .row(["Barcode Scanning", "CRITICAL", "Camera-based scanning"])
            .row(["Camera Optimization", "HIGH", "Auto-focus"])
            .color_column(1, critical)
            .build()
            .unwrap();

        assert_eq!(table.row_count(), 3);
        assert_eq!(table.header_rows, 1);
        assert!(table.rows[0].is_header);

        let header_run = table.rows[0].cells[0].content[0].runs().next().unwrap();
        assert!(header_run.style.bold);

        let color_of = |row: usize| {
            table.rows[row].cells[1].content[0]
                .runs()
                .next()
                .unwrap()
                .style
                .color
        };
        assert_eq!(color_of(1), Some(RED));
        assert_eq!(color_of(2), None);
    }

    #[test]
    fn test_table_builder_column_mismatch() {
        let result = TableBuilder::new(TableStyle::Grid)
            .header(["Feature", "Status", "Description"])
            .row(["A", "B", "C"])
            .row(["only", "two"])
            .build();

        match result {
            Err(Error::ColumnMismatch {
                row,
                expected,
                found,
            }) => {
                assert_eq!(row, 1);
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("expected ColumnMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_table_builder_without_header() {
        let table = TableBuilder::new(TableStyle::LightGridAccent1)
            .rows([["Project Name:", "App"], ["", "continued"]])
            .bold_first_column()
            .build()
            .unwrap();

        assert_eq!(table.header_rows, 0);
        assert_eq!(table.row_count(), 2);
        let first = table.rows[0].cells[0].content[0].runs().next().unwrap();
        let blank = table.rows[1].cells[0].content[0].runs().next().unwrap();
        assert!(first.style.bold);
        assert!(!blank.style.bold);
    }

    #[test]
    fn test_header_color() {
        let white = Rgb::new(255, 255, 255);
        let table = TableBuilder::new(TableStyle::MediumGrid1Accent1)
            .header(["Category", "Completion Status"])
            .header_color(white)
            .build()
            .unwrap();

        let run = table.rows[0].cells[1].content[0].runs().next().unwrap();
        assert_eq!(run.style.color, Some(white));
        assert!(run.style.bold);
    }
}
