//! Table types.

use super::{Alignment, Paragraph, TextRun};
use serde::{Deserialize, Serialize};

/// A table structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    /// Rows in the table
    pub rows: Vec<TableRow>,

    /// Number of header rows (0 = no header)
    pub header_rows: u8,

    /// Named visual preset (borders, shading)
    pub style: TableStyle,

    /// Column widths in points (optional)
    pub column_widths: Option<Vec<f32>>,
}

impl Table {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            header_rows: 0,
            style: TableStyle::default(),
            column_widths: None,
        }
    }

    /// Create a table with header.
    pub fn with_header(header_rows: u8) -> Self {
        Self {
            header_rows,
            ..Self::new()
        }
    }

    /// Set the table style and return self.
    pub fn styled(mut self, style: TableStyle) -> Self {
        self.style = style;
        self
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns (based on first row).
    pub fn column_count(&self) -> usize {
        self.rows.first().map(|r| r.cells.len()).unwrap_or(0)
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get header rows.
    pub fn header(&self) -> &[TableRow] {
        &self.rows[..(self.header_rows as usize).min(self.rows.len())]
    }

    /// Get plain text representation of the table.
    pub fn plain_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

/// Named table presets understood by the .docx writer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableStyle {
    /// Plain single-line grid
    #[default]
    Grid,
    /// "Light Grid Accent 1"
    LightGridAccent1,
    /// "Medium Grid 1 Accent 1"
    MediumGrid1Accent1,
}

impl TableStyle {
    /// All presets, in the order the styles part declares them.
    pub const ALL: [TableStyle; 3] = [
        TableStyle::Grid,
        TableStyle::LightGridAccent1,
        TableStyle::MediumGrid1Accent1,
    ];

    /// OOXML style id.
    pub fn style_id(&self) -> &'static str {
        match self {
            TableStyle::Grid => "TableGrid",
            TableStyle::LightGridAccent1 => "LightGrid-Accent1",
            TableStyle::MediumGrid1Accent1 => "MediumGrid1-Accent1",
        }
    }

    /// Display name as shown in word processors.
    pub fn display_name(&self) -> &'static str {
        match self {
            TableStyle::Grid => "Table Grid",
            TableStyle::LightGridAccent1 => "Light Grid Accent 1",
            TableStyle::MediumGrid1Accent1 => "Medium Grid 1 Accent 1",
        }
    }
}

/// A table row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells in the row
    pub cells: Vec<TableCell>,

    /// Whether this is a header row
    pub is_header: bool,
}

impl TableRow {
    /// Create a new row with cells.
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self {
            cells,
            is_header: false,
        }
    }

    /// Create a header row.
    pub fn header(cells: Vec<TableCell>) -> Self {
        Self {
            cells,
            is_header: true,
        }
    }

    /// Create a row from text values.
    pub fn from_strings<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self::new(values.into_iter().map(TableCell::text).collect())
    }

    /// Get plain text representation.
    pub fn plain_text(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.plain_text())
            .collect::<Vec<_>>()
            .join("\t")
    }
}

/// A table cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableCell {
    /// Cell content (paragraphs)
    pub content: Vec<Paragraph>,

    /// Cell alignment
    pub alignment: Alignment,
}

impl TableCell {
    /// Create a new cell with text content.
    ///
    /// The cell always holds one paragraph with one run, even for empty
    /// text, so run styling can be applied afterwards.
    pub fn text(text: impl Into<String>) -> Self {
        Self::with_content(vec![Paragraph::with_text(text)])
    }

    /// Create a cell holding a single styled run.
    pub fn run(run: TextRun) -> Self {
        Self::with_content(vec![Paragraph::with_runs([run])])
    }

    /// Create an empty cell.
    pub fn empty() -> Self {
        Self::with_content(Vec::new())
    }

    /// Create a cell with multiple paragraphs.
    pub fn with_content(content: Vec<Paragraph>) -> Self {
        Self {
            content,
            alignment: Alignment::Left,
        }
    }

    /// Set alignment and return self.
    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Get plain text content.
    pub fn plain_text(&self) -> String {
        self.content
            .iter()
            .map(|p| p.plain_text())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Check if the cell is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty() || self.plain_text().trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_new() {
        let table = Table::new();
        assert!(table.is_empty());
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 0);
        assert!(table.header().is_empty());
    }

    #[test]
    fn test_table_with_data() {
        let mut table = Table::with_header(1).styled(TableStyle::LightGridAccent1);
        table.add_row(TableRow::header(vec![
            TableCell::text("Category"),
            TableCell::text("Completion Status"),
        ]));
        table.add_row(TableRow::from_strings(["Authentication System", "100% Complete"]));
        table.add_row(TableRow::from_strings(["Location Services", "0% Complete"]));

        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.header().len(), 1);
        assert_eq!(table.style.style_id(), "LightGrid-Accent1");
    }

    #[test]
    fn test_cell_emptiness() {
        assert!(TableCell::text("").is_empty());
        assert!(TableCell::text("  ").is_empty());
        assert!(TableCell::empty().is_empty());
        assert!(!TableCell::text("Platform:").is_empty());
    }

    #[test]
    fn test_style_names() {
        assert_eq!(
            TableStyle::MediumGrid1Accent1.display_name(),
            "Medium Grid 1 Accent 1"
        );
        assert_eq!(TableStyle::Grid.style_id(), "TableGrid");
    }
}
