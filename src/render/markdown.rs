//! Markdown rendering for report documents.

use crate::error::Result;
use crate::model::{Alignment, Block, Document, InlineContent, Paragraph, Table, TextRun, TextStyle};

use super::RenderOptions;

/// Convert a document to Markdown.
pub fn to_markdown(doc: &Document, options: &RenderOptions) -> Result<String> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render(doc)
}

/// Markdown renderer.
pub struct MarkdownRenderer {
    options: RenderOptions,
    in_list: bool,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            in_list: false,
        }
    }

    /// Render a document to Markdown.
    pub fn render(mut self, doc: &Document) -> Result<String> {
        let mut output = String::new();

        if self.options.include_frontmatter {
            output.push_str(&doc.metadata.to_yaml_frontmatter());
        }

        for block in &doc.blocks {
            self.render_block(&mut output, block);
        }

        Ok(output.trim().to_string())
    }

    fn render_block(&mut self, output: &mut String, block: &Block) {
        let is_list_item = matches!(block, Block::Paragraph(p) if p.is_list_item());
        if self.in_list && !is_list_item {
            output.push('\n');
        }
        self.in_list = is_list_item;

        match block {
            Block::Paragraph(p) => self.render_paragraph(output, p),
            Block::Table(t) => self.render_table(output, t),
            Block::PageBreak => {
                if self.options.page_break_rule {
                    output.push_str("---\n\n");
                } else if !output.is_empty() && !output.ends_with("\n\n") {
                    output.push_str("\n\n");
                }
            }
        }
    }

    fn render_paragraph(&self, output: &mut String, para: &Paragraph) {
        if para.is_empty() {
            return;
        }

        let mut line = String::new();
        self.render_inline_content(&mut line, &para.content);
        let line = line.trim_end();

        // Title is level 0 and shares the top level with Heading1.
        if let Some(level) = para.heading_level() {
            let level = level.max(1).min(self.options.max_heading_level.max(1));
            output.push_str(&"#".repeat(level as usize));
            output.push(' ');
            output.push_str(line);
            output.push_str("\n\n");
            return;
        }

        if para.is_list_item() {
            output.push(self.options.list_marker);
            output.push(' ');
            output.push_str(line);
            output.push('\n');
            return;
        }

        output.push_str(line);
        output.push_str("\n\n");
    }

    fn render_inline_content(&self, output: &mut String, content: &[InlineContent]) {
        for item in content {
            match item {
                InlineContent::Text(run) => self.render_text_run(output, run),
                InlineContent::LineBreak => self.render_line_break(output),
            }
        }
    }

    fn render_line_break(&self, output: &mut String) {
        if self.options.preserve_line_breaks {
            output.push_str("  \n");
        } else {
            output.push(' ');
        }
    }

    fn render_text_run(&self, output: &mut String, run: &TextRun) {
        for (i, segment) in run.text.split('\n').enumerate() {
            if i > 0 {
                self.render_line_break(output);
            }
            let text = if self.options.escape_special_chars {
                escape_markdown(segment)
            } else {
                segment.to_string()
            };
            output.push_str(&apply_text_style(&text, &run.style));
        }
    }

    fn render_table(&self, output: &mut String, table: &Table) {
        let col_count = table.column_count();
        if table.is_empty() || col_count == 0 {
            return;
        }

        // Pipe tables need a header; without one the first row takes its place.
        let header_end = (table.header_rows as usize).max(1);

        for (i, row) in table.rows.iter().enumerate() {
            output.push('|');
            for cell in &row.cells {
                let text = cell.plain_text().replace('\n', " ");
                let text = if self.options.escape_special_chars {
                    text.replace('|', "\\|")
                } else {
                    text
                };
                output.push(' ');
                output.push_str(text.trim());
                output.push_str(" |");
            }
            output.push('\n');

            if i + 1 == header_end {
                output.push('|');
                for cell in &row.cells {
                    let align_marker = match cell.alignment {
                        Alignment::Center => " :---: |",
                        Alignment::Right => " ---: |",
                        Alignment::Left | Alignment::Justify => " --- |",
                    };
                    output.push_str(align_marker);
                }
                output.push('\n');
            }
        }

        output.push('\n');
    }
}

/// Wrap text in emphasis markers, keeping surrounding whitespace outside.
fn apply_text_style(text: &str, style: &TextStyle) -> String {
    let core = text.trim();
    if core.is_empty() || !(style.bold || style.italic || style.underline) {
        return text.to_string();
    }

    let start = text.len() - text.trim_start().len();
    let end = start + core.len();

    let mut styled = core.to_string();
    if style.italic {
        styled = format!("*{}*", styled);
    }
    if style.bold {
        styled = format!("**{}**", styled);
    }
    if style.underline {
        styled = format!("<u>{}</u>", styled);
    }

    format!("{}{}{}", &text[..start], styled, &text[end..])
}

/// Escape characters that would otherwise read as Markdown syntax.
fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '`' | '*' | '_' | '[' | ']' | '|' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Metadata, TableCell, TableRow};

    fn render(doc: &Document) -> String {
        to_markdown(doc, &RenderOptions::new()).unwrap()
    }

    #[test]
    fn test_escape_markdown() {
        assert_eq!(escape_markdown("Hello *world*"), "Hello \\*world\\*");
        assert_eq!(escape_markdown("snake_case [x]"), "snake\\_case \\[x\\]");
        assert_eq!(escape_markdown("~35%"), "~35%");
    }

    #[test]
    fn test_bold_keeps_trailing_space_outside() {
        let bold = TextStyle {
            bold: true,
            ..Default::default()
        };
        assert_eq!(apply_text_style("Platform: ", &bold), "**Platform:** ");
        assert_eq!(apply_text_style("  ", &bold), "  ");
    }

    #[test]
    fn test_headings() {
        let mut doc = Document::new();
        doc.add_block(Paragraph::title("Adbeam Recycling Mobile App"));
        doc.add_block(Paragraph::heading("1. Executive Summary", 1));
        doc.add_block(Paragraph::heading("2.1 Core Scanning Functionality", 2));

        let md = render(&doc);
        assert!(md.starts_with("# Adbeam Recycling Mobile App\n\n"));
        assert!(md.contains("\n# 1. Executive Summary\n"));
        assert!(md.contains("\n## 2.1 Core Scanning Functionality"));
    }

    #[test]
    fn test_max_heading_level() {
        let mut doc = Document::new();
        doc.add_block(Paragraph::heading("Deep", 5));
        let md = to_markdown(&doc, &RenderOptions::new().with_max_heading(2)).unwrap();
        assert_eq!(md, "## Deep");
    }

    #[test]
    fn test_zero_max_heading_level() {
        let mut doc = Document::new();
        doc.add_block(Paragraph::heading("1. Executive Summary", 1));
        let options = RenderOptions {
            max_heading_level: 0,
            ..Default::default()
        };
        assert_eq!(to_markdown(&doc, &options).unwrap(), "# 1. Executive Summary");
    }

    #[test]
    fn test_newlines_in_runs_become_breaks() {
        let mut doc = Document::new();
        doc.add_block(Paragraph::with_runs([
            TextRun::bold("Platform: "),
            TextRun::new("React Native with Expo\n"),
            TextRun::bold("Status: "),
            TextRun::new("Implemented\n"),
        ]));

        assert_eq!(
            render(&doc),
            "**Platform:** React Native with Expo  \n**Status:** Implemented"
        );

        let joined = to_markdown(&doc, &RenderOptions::new().with_line_breaks(false)).unwrap();
        assert_eq!(joined, "**Platform:** React Native with Expo **Status:** Implemented");
    }

    #[test]
    fn test_bullets_end_with_blank_line() {
        let mut doc = Document::new();
        doc.add_block(Paragraph::bullet("Real-time leaderboard"));
        doc.add_block(Paragraph::bullet("Competition system"));
        doc.add_block(Paragraph::with_text("After"));

        let md = render(&doc);
        assert_eq!(md, "- Real-time leaderboard\n- Competition system\n\nAfter");
    }

    #[test]
    fn test_table_without_header_uses_first_row() {
        let mut table = Table::new();
        table.add_row(TableRow::from_strings(["Project Name:", "Adbeam"]));
        table.add_row(TableRow::from_strings(["Version:", "1.0"]));
        let mut doc = Document::new();
        doc.add_block(table);

        let md = render(&doc);
        assert_eq!(
            md,
            "| Project Name: | Adbeam |\n| --- | --- |\n| Version: | 1.0 |"
        );
    }

    #[test]
    fn test_table_escapes_pipes() {
        let mut table = Table::with_header(1);
        table.add_row(TableRow::header(vec![TableCell::text("A|B")]));
        let mut doc = Document::new();
        doc.add_block(table);
        assert!(render(&doc).contains("A\\|B"));
    }

    #[test]
    fn test_page_break_rule() {
        let mut doc = Document::new();
        doc.add_block(Paragraph::with_text("one"));
        doc.add_block(Block::PageBreak);
        doc.add_block(Paragraph::with_text("two"));

        assert_eq!(render(&doc), "one\n\ntwo");
        let ruled = to_markdown(&doc, &RenderOptions::new().with_page_break_rule(true)).unwrap();
        assert_eq!(ruled, "one\n\n---\n\ntwo");
    }

    #[test]
    fn test_render_with_frontmatter() {
        let mut doc = Document::new();
        doc.metadata = Metadata::with_title("Sprint Documentation");
        doc.add_block(Paragraph::with_text("Body"));

        let md = to_markdown(&doc, &RenderOptions::new().with_frontmatter(true)).unwrap();
        assert!(md.starts_with("---\ntitle: \"Sprint Documentation\"\n---"));
        assert!(md.ends_with("Body"));
    }
}
