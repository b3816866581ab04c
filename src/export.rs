//! Output format selection and single-file export.

use crate::docx;
use crate::error::{Error, Result};
use crate::model::Document;
use crate::render::{self, JsonFormat, RenderOptions};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Output format for a generated report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Word document (OOXML)
    #[default]
    Docx,

    /// Markdown preview
    Markdown,

    /// Plain text preview
    Text,

    /// JSON document model
    Json,
}

impl OutputFormat {
    /// All formats, in CLI help order.
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Docx,
        OutputFormat::Markdown,
        OutputFormat::Text,
        OutputFormat::Json,
    ];

    /// Look a format up by name ("docx", "md", "markdown", "txt", "text", "json").
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "docx" | "word" => Some(OutputFormat::Docx),
            "md" | "markdown" => Some(OutputFormat::Markdown),
            "txt" | "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }

    /// Infer the format from a file extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_name)
    }

    /// Canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Docx => "docx",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }

    /// Preferred file extension.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Docx => "docx",
            OutputFormat::Markdown => "md",
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
        }
    }

    /// MIME type of the output.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            OutputFormat::Markdown => "text/markdown",
            OutputFormat::Text => "text/plain",
            OutputFormat::Json => "application/json",
        }
    }

    /// Whether the format is a text preview rather than a binary package.
    pub fn is_preview(&self) -> bool {
        !matches!(self, OutputFormat::Docx)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| Error::UnsupportedFormat(s.to_string()))
    }
}

/// Render a preview format to a string.
///
/// Fails with [`Error::UnsupportedFormat`] for [`OutputFormat::Docx`], which is
/// binary.
pub fn render_preview(
    doc: &Document,
    format: OutputFormat,
    options: &RenderOptions,
) -> Result<String> {
    match format {
        OutputFormat::Markdown => render::to_markdown(doc, options),
        OutputFormat::Text => render::to_text(doc, options),
        OutputFormat::Json => render::to_json(doc, JsonFormat::Pretty),
        OutputFormat::Docx => Err(Error::UnsupportedFormat(
            "docx is not a text format".to_string(),
        )),
    }
}

/// Write `doc` to `path` in `format`. Exactly one file is written.
pub fn export<P: AsRef<Path>>(doc: &Document, format: OutputFormat, path: P) -> Result<()> {
    export_with_options(doc, format, path, &RenderOptions::default())
}

/// [`export`] with explicit preview options.
pub fn export_with_options<P: AsRef<Path>>(
    doc: &Document,
    format: OutputFormat,
    path: P,
    options: &RenderOptions,
) -> Result<()> {
    let path = path.as_ref();
    match format {
        OutputFormat::Docx => docx::write_docx(doc, path),
        preview => {
            let mut content = render_preview(doc, preview, options)?;
            content.push('\n');
            fs::write(path, content)?;
            log::info!("Wrote {} preview to {}", preview, path.display());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Paragraph;
    use tempfile::tempdir;

    fn sample() -> Document {
        let mut doc = Document::new();
        doc.add_block(Paragraph::heading("1. Executive Summary", 1));
        doc
    }

    #[test]
    fn test_from_name() {
        assert_eq!(OutputFormat::from_name("MD"), Some(OutputFormat::Markdown));
        assert_eq!(OutputFormat::from_name("text"), Some(OutputFormat::Text));
        assert_eq!(OutputFormat::from_name("pdf"), None);
        assert!(matches!(
            "pdf".parse::<OutputFormat>(),
            Err(Error::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_from_path() {
        assert_eq!(
            OutputFormat::from_path("/tmp/Adbeam_Sprint_Documentation.docx"),
            Some(OutputFormat::Docx)
        );
        assert_eq!(OutputFormat::from_path("notes.md"), Some(OutputFormat::Markdown));
        assert_eq!(OutputFormat::from_path("report.JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_path("README"), None);
    }

    #[test]
    fn test_extension_roundtrip() {
        for format in OutputFormat::ALL {
            assert_eq!(OutputFormat::from_name(format.extension()), Some(format));
            assert_eq!(format.name().parse::<OutputFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_export_writes_one_file() {
        let dir = tempdir().unwrap();
        for format in OutputFormat::ALL {
            let path = dir.path().join(format!("report.{}", format.extension()));
            export(&sample(), format, &path).unwrap();
            assert!(path.exists());
        }
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 4);

        let md = std::fs::read_to_string(dir.path().join("report.md")).unwrap();
        assert_eq!(md, "# 1. Executive Summary\n");
    }

    #[test]
    fn test_docx_is_not_a_preview() {
        assert!(!OutputFormat::Docx.is_preview());
        assert!(render_preview(&sample(), OutputFormat::Docx, &RenderOptions::default()).is_err());
    }
}
