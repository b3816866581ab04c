//! Office Open XML (.docx) serialization.
//!
//! A document is written as a zip package of XML parts. [`DocxWriter`] builds
//! every part in memory and streams them into any `Write + Seek` sink;
//! [`inspect`] reads a package back for verification.

mod body;
pub mod inspect;
mod package;
mod styles;
mod xml;

pub use inspect::{inspect_bytes, inspect_file, inspect_reader, DocxSummary, TableShape};

use crate::error::Result;
use crate::model::Document;
use chrono::Utc;
use std::fs::File;
use std::io::{Cursor, Seek, Write};
use std::path::Path;
use zip::write::{FileOptions, ZipWriter};
use zip::CompressionMethod;

/// WordprocessingML main namespace.
pub const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
/// Office document relationships namespace.
pub const R_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
/// Content type of the main document part.
pub const CONTENT_TYPE_MAIN: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";

/// Part names inside the package.
pub mod parts {
    pub const CONTENT_TYPES: &str = "[Content_Types].xml";
    pub const ROOT_RELS: &str = "_rels/.rels";
    pub const CORE: &str = "docProps/core.xml";
    pub const APP: &str = "docProps/app.xml";
    pub const DOCUMENT: &str = "word/document.xml";
    pub const DOCUMENT_RELS: &str = "word/_rels/document.xml.rels";
    pub const STYLES: &str = "word/styles.xml";
    pub const NUMBERING: &str = "word/numbering.xml";
}

/// Writes documents as .docx packages.
#[derive(Debug, Clone, Copy)]
pub struct DocxWriter {
    compression: CompressionMethod,
}

impl Default for DocxWriter {
    fn default() -> Self {
        Self {
            compression: CompressionMethod::Deflated,
        }
    }
}

impl DocxWriter {
    /// Create a writer with deflate compression.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store parts uncompressed.
    pub fn stored(mut self) -> Self {
        self.compression = CompressionMethod::Stored;
        self
    }

    /// Serialize every package part, in archive order.
    pub fn parts(&self, doc: &Document) -> Result<Vec<(&'static str, Vec<u8>)>> {
        let parts = vec![
            (parts::CONTENT_TYPES, package::content_types_xml()?),
            (parts::ROOT_RELS, package::root_rels_xml()?),
            (parts::CORE, package::core_xml(&doc.metadata, Utc::now())?),
            (parts::APP, package::app_xml()?),
            (parts::DOCUMENT, body::document_xml(doc)?),
            (parts::DOCUMENT_RELS, package::document_rels_xml()?),
            (parts::STYLES, styles::styles_xml(&doc.style)?),
            (parts::NUMBERING, styles::numbering_xml()?),
        ];
        for (name, data) in &parts {
            log::debug!("Serialized {} ({} bytes)", name, data.len());
        }
        Ok(parts)
    }

    /// Write the package into `sink` and return it.
    pub fn write<W: Write + Seek>(&self, doc: &Document, sink: W) -> Result<W> {
        let mut zip = ZipWriter::new(sink);
        let options: FileOptions<'_, ()> = FileOptions::default()
            .compression_method(self.compression)
            .unix_permissions(0o644);

        for (name, data) in self.parts(doc)? {
            zip.start_file(name, options)?;
            zip.write_all(&data)?;
        }

        Ok(zip.finish()?)
    }

    /// Serialize the package into memory.
    pub fn to_bytes(&self, doc: &Document) -> Result<Vec<u8>> {
        Ok(self.write(doc, Cursor::new(Vec::new()))?.into_inner())
    }

    /// Write the package to `path`, replacing any existing file.
    pub fn write_file<P: AsRef<Path>>(&self, doc: &Document, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        let mut file = self.write(doc, file)?;
        file.flush()?;
        log::info!("Wrote {} ({} blocks)", path.display(), doc.block_count());
        Ok(())
    }
}

/// Write `doc` as a .docx file at `path`.
pub fn write_docx<P: AsRef<Path>>(doc: &Document, path: P) -> Result<()> {
    DocxWriter::new().write_file(doc, path)
}

/// Serialize `doc` as .docx bytes.
pub fn to_docx_bytes(doc: &Document) -> Result<Vec<u8>> {
    DocxWriter::new().to_bytes(doc)
}
