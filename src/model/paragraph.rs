//! Paragraph and text-level types.

use super::Rgb;
use serde::{Deserialize, Serialize};

/// A paragraph of text content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paragraph {
    /// Text runs in the paragraph
    pub content: Vec<InlineContent>,

    /// Paragraph style
    pub style: ParagraphStyle,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self {
            content: Vec::new(),
            style: ParagraphStyle::default(),
        }
    }

    /// Create a paragraph with plain text.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut p = Self::new();
        p.add_text(text);
        p
    }

    /// Create a paragraph from a sequence of runs.
    pub fn with_runs(runs: impl IntoIterator<Item = TextRun>) -> Self {
        let mut p = Self::new();
        for run in runs {
            p.add_run(run);
        }
        p
    }

    /// Create a document title (heading level 0).
    pub fn title(text: impl Into<String>) -> Self {
        let mut p = Self::with_text(text);
        p.style.kind = ParagraphKind::Title;
        p
    }

    /// Create a heading paragraph.
    ///
    /// Level 0 yields a title; other levels are clamped to 1-9.
    pub fn heading(text: impl Into<String>, level: u8) -> Self {
        let mut p = Self::with_text(text);
        p.style.kind = ParagraphKind::heading(level);
        p
    }

    /// Create a bulleted list item.
    pub fn bullet(text: impl Into<String>) -> Self {
        let mut p = Self::with_text(text);
        p.style.kind = ParagraphKind::ListBullet;
        p
    }

    /// Set alignment and return self.
    pub fn align(mut self, alignment: Alignment) -> Self {
        self.style.alignment = alignment;
        self
    }

    /// Add plain text to the paragraph.
    pub fn add_text(&mut self, text: impl Into<String>) {
        self.content.push(InlineContent::Text(TextRun::new(text)));
    }

    /// Add a styled text run.
    pub fn add_run(&mut self, run: TextRun) {
        self.content.push(InlineContent::Text(run));
    }

    /// Add a line break.
    pub fn add_line_break(&mut self) {
        self.content.push(InlineContent::LineBreak);
    }

    /// Iterate over the text runs, skipping breaks.
    pub fn runs(&self) -> impl Iterator<Item = &TextRun> {
        self.content.iter().filter_map(|c| match c {
            InlineContent::Text(run) => Some(run),
            InlineContent::LineBreak => None,
        })
    }

    /// Get plain text content of the paragraph.
    pub fn plain_text(&self) -> String {
        self.content
            .iter()
            .map(|c| match c {
                InlineContent::Text(run) => run.text.as_str(),
                InlineContent::LineBreak => "\n",
            })
            .collect()
    }

    /// Check if the paragraph is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty() || self.plain_text().trim().is_empty()
    }

    /// Check if this is a heading or title.
    pub fn is_heading(&self) -> bool {
        self.heading_level().is_some()
    }

    /// Get the heading level (0 for a title, 1-9 for headings) or None.
    pub fn heading_level(&self) -> Option<u8> {
        match self.style.kind {
            ParagraphKind::Title => Some(0),
            ParagraphKind::Heading(level) => Some(level),
            _ => None,
        }
    }

    /// Check if this is a list item.
    pub fn is_list_item(&self) -> bool {
        matches!(self.style.kind, ParagraphKind::ListBullet)
    }
}

impl Default for Paragraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Inline content within a paragraph.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InlineContent {
    /// A text run with styling
    Text(TextRun),

    /// A line break
    LineBreak,
}

/// A run of text with consistent styling.
///
/// A `'\n'` inside `text` is written as a line break and a `'\t'` as a tab.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content
    pub text: String,

    /// Text styling
    pub style: TextStyle,
}

impl TextRun {
    /// Create a new text run with default style.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle::default(),
        }
    }

    /// Create a bold text run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self::new(text).with_bold()
    }

    /// Create a run in the given color.
    pub fn colored(text: impl Into<String>, color: Rgb) -> Self {
        Self::new(text).with_color(color)
    }

    /// Make the run bold.
    pub fn with_bold(mut self) -> Self {
        self.style.bold = true;
        self
    }

    /// Set the run color.
    pub fn with_color(mut self, color: Rgb) -> Self {
        self.style.color = Some(color);
        self
    }

    /// Set the font size in points.
    pub fn with_size(mut self, points: f32) -> Self {
        self.style.font_size = Some(points);
        self
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Text styling properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Bold text
    pub bold: bool,

    /// Italic text
    pub italic: bool,

    /// Underlined text
    pub underline: bool,

    /// Font name (falls back to the document default)
    pub font_name: Option<String>,

    /// Font size in points
    pub font_size: Option<f32>,

    /// Text color
    pub color: Option<Rgb>,
}

impl TextStyle {
    /// Check if any run-level formatting is applied.
    pub fn has_styling(&self) -> bool {
        self.bold
            || self.italic
            || self.underline
            || self.font_name.is_some()
            || self.font_size.is_some()
            || self.color.is_some()
    }
}

/// Paragraph styling properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParagraphStyle {
    /// Named paragraph style
    pub kind: ParagraphKind,

    /// Text alignment
    pub alignment: Alignment,
}

/// The named style a paragraph is written with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "style", content = "level", rename_all = "snake_case")]
pub enum ParagraphKind {
    /// Body text
    #[default]
    Normal,
    /// Document title
    Title,
    /// Heading, level 1-9
    Heading(u8),
    /// Bulleted list item
    ListBullet,
}

impl ParagraphKind {
    /// Kind for a heading level, mapping 0 to [`ParagraphKind::Title`].
    pub fn heading(level: u8) -> Self {
        match level {
            0 => ParagraphKind::Title,
            n => ParagraphKind::Heading(n.min(9)),
        }
    }

    /// OOXML style id, or None for body text.
    pub fn style_id(&self) -> Option<String> {
        match self {
            ParagraphKind::Normal => None,
            ParagraphKind::Title => Some("Title".to_string()),
            ParagraphKind::Heading(level) => Some(format!("Heading{}", level)),
            ParagraphKind::ListBullet => Some("ListBullet".to_string()),
        }
    }
}

/// Text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
    /// Justified alignment
    Justify,
}

impl Alignment {
    /// Value of the OOXML `w:jc` element.
    pub fn ooxml_value(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Justify => "both",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_plain_text() {
        let mut p = Paragraph::new();
        p.add_run(TextRun::bold("Platform: "));
        p.add_text("React Native with Expo");
        p.add_line_break();
        p.add_text("done");

        assert_eq!(p.plain_text(), "Platform: React Native with Expo\ndone");
        assert_eq!(p.runs().count(), 3);
    }

    #[test]
    fn test_heading_levels() {
        let title = Paragraph::heading("Report", 0);
        assert_eq!(title.heading_level(), Some(0));
        assert_eq!(title.style.kind, ParagraphKind::Title);

        let h2 = Paragraph::heading("1.1 Technical Foundation", 2);
        assert!(h2.is_heading());
        assert_eq!(h2.style.kind.style_id().as_deref(), Some("Heading2"));

        let deep = Paragraph::heading("Deep", 12);
        assert_eq!(deep.heading_level(), Some(9));
    }

    #[test]
    fn test_bullet_and_empty() {
        let item = Paragraph::bullet("Build streak tracking system");
        assert!(item.is_list_item());
        assert!(!item.is_heading());

        assert!(Paragraph::new().is_empty());
        assert!(Paragraph::with_text("  ").is_empty());
    }

    #[test]
    fn test_text_style() {
        assert!(!TextStyle::default().has_styling());

        let run = TextRun::colored("~35%", Rgb::new(245, 158, 11));
        assert!(run.style.has_styling());
        assert!(!run.style.bold);

        let run = TextRun::bold("Priority: ").with_size(14.0);
        assert!(run.style.bold);
        assert_eq!(run.style.font_size, Some(14.0));
    }

    #[test]
    fn test_alignment_ooxml() {
        assert_eq!(Alignment::Center.ooxml_value(), "center");
        assert_eq!(Alignment::Justify.ooxml_value(), "both");
    }
}
