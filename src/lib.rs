//! # sprintdoc
//!
//! Sprint status report generator for Rust.
//!
//! This library assembles the sprint documentation of the Adbeam recycling
//! app as an in-memory document and writes it as a Word (.docx) file, with
//! Markdown, plain text and JSON previews of the same content.
//!
//! ## Quick Start
//!
//! ```no_run
//! use sprintdoc::{generate, ReportOptions};
//!
//! fn main() -> sprintdoc::Result<()> {
//!     let doc = generate("/tmp/Adbeam_Sprint_Documentation.docx", &ReportOptions::new())?;
//!     println!("{} blocks written", doc.block_count());
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Report assembly**: title page, status tables, roadmap and sign-off
//! - **Status coloring**: priorities and completion levels drive cell colors
//! - **OOXML output**: a self-contained .docx package with its own style sheet
//! - **Previews**: Markdown, plain text and JSON renderings
//! - **Inspection**: read a generated .docx back into a structural summary

pub mod builder;
pub mod docx;
pub mod error;
pub mod export;
pub mod model;
pub mod render;
pub mod report;

// Re-export commonly used types
pub use builder::{ReportBuilder, TableBuilder};
pub use docx::{inspect_file, to_docx_bytes, write_docx, DocxSummary, DocxWriter};
pub use error::{Error, Result};
pub use export::{export, OutputFormat};
pub use model::{
    Alignment, Block, Document, DocumentStyle, InlineContent, Metadata, Paragraph, ParagraphKind,
    Rgb, Table, TableCell, TableRow, TableStyle, TextRun, TextStyle,
};
pub use render::{JsonFormat, RenderOptions};
pub use report::{build_report, ReportOptions, SprintReport, DEFAULT_OUTPUT};

use std::path::Path;

/// Build the Adbeam sprint report in memory.
///
/// # Example
///
/// ```
/// use sprintdoc::{build_default_report, ReportOptions};
///
/// let doc = build_default_report(&ReportOptions::new()).unwrap();
/// assert_eq!(doc.page_break_count(), 7);
/// ```
pub fn build_default_report(options: &ReportOptions) -> Result<Document> {
    build_report(&SprintReport::adbeam(), options)
}

/// Build the Adbeam sprint report and write it as .docx to `path`.
///
/// An existing file at `path` is replaced.
pub fn generate<P: AsRef<Path>>(path: P, options: &ReportOptions) -> Result<Document> {
    let doc = build_default_report(options)?;
    write_docx(&doc, path)?;
    Ok(doc)
}

/// Build the Adbeam sprint report and write it to `path` in `format`.
pub fn generate_as<P: AsRef<Path>>(
    path: P,
    format: OutputFormat,
    options: &ReportOptions,
) -> Result<Document> {
    let doc = build_default_report(options)?;
    export(&doc, format, path)?;
    Ok(doc)
}

/// Render the Adbeam sprint report as Markdown.
pub fn to_markdown(options: &ReportOptions, render_options: &RenderOptions) -> Result<String> {
    let doc = build_default_report(options)?;
    render::to_markdown(&doc, render_options)
}
