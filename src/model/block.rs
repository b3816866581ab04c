//! Block-level types.

use super::{Paragraph, Table};
use serde::{Deserialize, Serialize};

/// A content block in the document body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A paragraph of text (headings and list items included)
    Paragraph(Paragraph),

    /// A table
    Table(Table),

    /// A hard page break
    PageBreak,
}

impl Block {
    /// Check if this block is a paragraph.
    pub fn is_paragraph(&self) -> bool {
        matches!(self, Block::Paragraph(_))
    }

    /// Check if this block is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, Block::Table(_))
    }

    /// Check if this block is a page break.
    pub fn is_page_break(&self) -> bool {
        matches!(self, Block::PageBreak)
    }

    /// Plain text of the block, or None for a page break.
    pub fn plain_text(&self) -> Option<String> {
        match self {
            Block::Paragraph(p) => Some(p.plain_text()),
            Block::Table(t) => Some(t.plain_text()),
            Block::PageBreak => None,
        }
    }
}

impl From<Paragraph> for Block {
    fn from(paragraph: Paragraph) -> Self {
        Block::Paragraph(paragraph)
    }
}

impl From<Table> for Block {
    fn from(table: Table) -> Self {
        Block::Table(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_variants() {
        let block: Block = Paragraph::with_text("Hello").into();
        assert!(block.is_paragraph());
        assert_eq!(block.plain_text().as_deref(), Some("Hello"));

        let block: Block = Table::new().into();
        assert!(block.is_table());

        assert!(Block::PageBreak.is_page_break());
        assert!(Block::PageBreak.plain_text().is_none());
    }
}
