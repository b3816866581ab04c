//! Document model types for report content.
//!
//! This module defines the in-memory representation that the report
//! builder fills and the writers serialize. The model is format-agnostic:
//! the same document is written as .docx or rendered as Markdown, text,
//! or JSON.

mod block;
mod color;
mod document;
mod paragraph;
mod table;

pub use block::Block;
pub use color::Rgb;
pub use document::{Document, DocumentStyle, Metadata};
pub use paragraph::{
    Alignment, InlineContent, Paragraph, ParagraphKind, ParagraphStyle, TextRun, TextStyle,
};
pub use table::{Table, TableCell, TableRow, TableStyle};
