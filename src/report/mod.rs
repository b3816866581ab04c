//! Assembly of the sprint report.
//!
//! [`build_report`] walks the literal [`SprintReport`] content and appends
//! each section to a [`ReportBuilder`] in a fixed order: title page,
//! executive summary, implementation status, planned features, phases,
//! technical improvements, progress summary, recommendations, conclusion
//! and sign-off.

mod content;
pub mod status;

pub use content::{
    Feature, FeatureGroup, Improvement, InfoRow, InfoValue, Phase, Progress, SprintReport,
};
pub use status::{palette, Priority};

use crate::builder::{ReportBuilder, TableBuilder};
use crate::error::{Error, Result};
use crate::model::{Alignment, Document, DocumentStyle, Metadata, Paragraph, TableStyle, TextRun};
use chrono::{Local, NaiveDate, NaiveTime, TimeZone, Utc};

/// Format of the date printed on the title page and sign-off.
pub const DATE_FORMAT: &str = "%B %d, %Y";

/// Default output location of the generated document.
pub const DEFAULT_OUTPUT: &str = "/tmp/Adbeam_Sprint_Documentation.docx";

/// Options for building the report.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Date printed in the document (today when None)
    pub date: Option<NaiveDate>,

    /// Default font
    pub style: DocumentStyle,

    /// Style of the title-page grid and feature tables
    pub table_style: TableStyle,

    /// Style of the progress summary table
    pub summary_style: TableStyle,

    /// Subtitle size in points
    pub subtitle_size: f32,

    /// Length of the underscore rule above the sign-off
    pub rule_width: usize,
}

impl ReportOptions {
    /// Create new report options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin the document date.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Pin the document date from a `YYYY-MM-DD` string.
    pub fn with_date_str(self, date: &str) -> Result<Self> {
        let parsed = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
            .map_err(|_| Error::InvalidDate(date.to_string()))?;
        Ok(self.with_date(parsed))
    }

    /// Set the default font family and size.
    pub fn with_font(mut self, name: impl Into<String>, size: f32) -> Self {
        self.style = DocumentStyle {
            font_name: name.into(),
            font_size: size,
        };
        self
    }

    /// Set the style for the info grid and feature tables.
    pub fn with_table_style(mut self, style: TableStyle) -> Self {
        self.table_style = style;
        self
    }

    /// The date the document will carry.
    pub fn effective_date(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| Local::now().date_naive())
    }

    /// The document date formatted for display ("October 14, 2026").
    pub fn formatted_date(&self) -> String {
        self.effective_date().format(DATE_FORMAT).to_string()
    }
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            date: None,
            style: DocumentStyle::default(),
            table_style: TableStyle::LightGridAccent1,
            summary_style: TableStyle::MediumGrid1Accent1,
            subtitle_size: 14.0,
            rule_width: 50,
        }
    }
}

/// Build the report document from its literal content.
pub fn build_report(report: &SprintReport, options: &ReportOptions) -> Result<Document> {
    let date = options.formatted_date();
    let midnight = options.effective_date().and_time(NaiveTime::default());
    let created = Utc.from_utc_datetime(&midnight);

    let metadata = Metadata {
        title: Some(report.title.to_string()),
        author: Some(report.prepared_by.to_string()),
        subject: Some(report.subtitle.to_string()),
        keywords: Some("sprint, status, roadmap".to_string()),
        created: Some(created),
    };

    let mut builder = ReportBuilder::new()
        .with_metadata(metadata)
        .with_style(options.style.clone());

    title_page(&mut builder, report, options, &date)?;
    builder.page_break();

    log::debug!("Building executive summary and implementation status");
    builder
        .heading("Executive Summary", 1)
        .text(report.executive_summary)
        .blank();
    implementation_status(&mut builder, report, options)?;
    builder.page_break();

    log::debug!("Building {} planned feature groups", report.planned.len());
    planned_features(&mut builder, report, options)?;
    builder.page_break();

    log::debug!("Building {} roadmap phases", report.phases.len());
    phases(&mut builder, report);
    builder.page_break();

    builder.heading("4. Technical Improvements Needed", 1);
    for item in report.improvements {
        builder.labeled(&format!("{}: ", item.title), item.description);
    }
    builder.page_break();

    progress_summary(&mut builder, report, options)?;
    builder.page_break();

    builder
        .heading("6. Recommendations for Next Sprint", 1)
        .text(report.recommendations_intro);
    for (i, rec) in report.recommendations.iter().enumerate() {
        builder.text(&format!("{}. {}", i + 1, rec));
    }
    builder.page_break();

    conclusion(&mut builder, report, options, &date);

    let doc = builder.finish();
    log::debug!(
        "Report assembled: {} blocks, {} tables",
        doc.block_count(),
        doc.tables().count()
    );
    Ok(doc)
}

fn title_page(
    builder: &mut ReportBuilder,
    report: &SprintReport,
    options: &ReportOptions,
    date: &str,
) -> Result<()> {
    let subtitle =
        Paragraph::with_runs([TextRun::bold(report.subtitle).with_size(options.subtitle_size)])
            .align(Alignment::Center);

    builder
        .title(report.title, palette::GREEN)
        .paragraph(subtitle)
        .blank();

    let rows = report.project_info.iter().map(|row| {
        let value = match row.value {
            InfoValue::Text(text) => text.to_string(),
            InfoValue::DocumentDate => date.to_string(),
        };
        [row.label.to_string(), value]
    });

    let table = TableBuilder::new(options.table_style)
        .rows(rows)
        .bold_first_column()
        .build()?;
    builder.table(table);
    Ok(())
}

fn implementation_status(
    builder: &mut ReportBuilder,
    report: &SprintReport,
    options: &ReportOptions,
) -> Result<()> {
    builder
        .heading("1. Current Implementation Status", 1)
        .heading("1.1 Technical Foundation", 2);

    builder.paragraph(Paragraph::with_runs([
        TextRun::bold("Platform: "),
        TextRun::new(format!("{}\n", report.platform)),
        TextRun::bold("Status: "),
        TextRun::colored(format!("{}\n", report.platform_status), palette::GREEN),
        TextRun::bold("Details: "),
        TextRun::new(report.platform_details),
    ]));

    builder.heading("1.2 Implemented Features", 2);
    let table = TableBuilder::new(options.table_style)
        .header(["Feature", "Status", "Description"])
        .rows(
            report
                .implemented
                .iter()
                .map(|f| [f.name, f.marker, f.description]),
        )
        .color_column(1, status::implementation_color)
        .build()?;
    builder.table(table);
    Ok(())
}

fn planned_features(
    builder: &mut ReportBuilder,
    report: &SprintReport,
    options: &ReportOptions,
) -> Result<()> {
    builder.heading("2. Planned Features Not Yet Implemented", 1);

    for group in report.planned {
        builder.heading(group.heading, 2);
        let table = TableBuilder::new(options.table_style)
            .header(["Feature", "Priority", "Description"])
            .rows(
                group
                    .features
                    .iter()
                    .map(|f| [f.name, f.marker, f.description]),
            )
            .color_column(1, status::priority_color)
            .build()?;
        builder.table(table);
    }
    Ok(())
}

fn phases(builder: &mut ReportBuilder, report: &SprintReport) {
    builder.heading("3. Recommended Implementation Phases", 1);

    for phase in report.phases {
        builder.heading(phase.title, 2);
        builder.paragraph(Paragraph::with_runs([
            TextRun::bold("Priority: "),
            TextRun::new(format!("{}\n", phase.priority)),
            TextRun::bold("Timeline: "),
            TextRun::new(format!("{}\n\n", phase.timeline)),
            TextRun::bold("Features to Implement:\n"),
        ]));
        for task in phase.tasks {
            builder.bullet(task);
        }
    }
}

fn progress_summary(
    builder: &mut ReportBuilder,
    report: &SprintReport,
    options: &ReportOptions,
) -> Result<()> {
    builder.heading("5. Progress Summary", 1);

    let table = TableBuilder::new(options.summary_style)
        .header(["Category", "Completion Status"])
        .header_color(palette::WHITE)
        .rows(report.progress.iter().map(|p| [p.category, p.status]))
        .color_column(1, status::completion_rule)
        .build()?;

    builder
        .table(table)
        .blank()
        .paragraph(Paragraph::with_runs([
            TextRun::bold("Overall Project Completion: "),
            TextRun::colored(report.overall_completion, palette::AMBER),
        ]));
    Ok(())
}

fn conclusion(
    builder: &mut ReportBuilder,
    report: &SprintReport,
    options: &ReportOptions,
    date: &str,
) {
    builder
        .heading("7. Conclusion", 1)
        .text(report.conclusion)
        .blank()
        .text(&"_".repeat(options.rule_width))
        .blank();

    builder.paragraph(Paragraph::with_runs([
        TextRun::bold("Prepared by: "),
        TextRun::new(format!("{}\n", report.prepared_by)),
        TextRun::bold("Date: "),
        TextRun::new(format!("{}\n", date)),
        TextRun::bold("Version: "),
        TextRun::new(report.version),
    ]));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Block;

    fn fixed_options() -> ReportOptions {
        ReportOptions::new().with_date(NaiveDate::from_ymd_opt(2026, 10, 14).unwrap())
    }

    fn build() -> Document {
        build_report(&SprintReport::adbeam(), &fixed_options()).unwrap()
    }

    #[test]
    fn test_formatted_date() {
        assert_eq!(fixed_options().formatted_date(), "October 14, 2026");
    }

    #[test]
    fn test_with_date_str() {
        let options = ReportOptions::new().with_date_str("2025-03-07").unwrap();
        assert_eq!(options.formatted_date(), "March 07, 2025");

        let err = ReportOptions::new().with_date_str("07/03/2025").unwrap_err();
        assert!(matches!(err, Error::InvalidDate(_)));
    }

    #[test]
    fn test_table_shapes() {
        let doc = build();
        let rows: Vec<_> = doc.tables().map(|t| t.row_count()).collect();
        assert_eq!(rows, SprintReport::adbeam().expected_table_rows());

        let headers: Vec<_> = doc.tables().map(|t| t.header_rows).collect();
        assert_eq!(headers, vec![0, 1, 1, 1, 1, 1]);

        let columns: Vec<_> = doc.tables().map(|t| t.column_count()).collect();
        assert_eq!(columns, vec![2, 3, 3, 3, 3, 2]);
    }

    #[test]
    fn test_table_styles() {
        let doc = build();
        let styles: Vec<_> = doc.tables().map(|t| t.style).collect();
        assert_eq!(styles[0], TableStyle::LightGridAccent1);
        assert_eq!(styles[5], TableStyle::MediumGrid1Accent1);
    }

    #[test]
    fn test_page_breaks_and_headings() {
        let doc = build();
        assert_eq!(doc.page_break_count(), 7);
        assert!(!doc.blocks.last().unwrap().is_page_break());

        let first = doc.headings().next().unwrap();
        assert_eq!(first.heading_level(), Some(0));
        assert_eq!(first.plain_text(), "Adbeam Recycling Mobile App");

        let level1: Vec<_> = doc
            .headings()
            .filter(|h| h.heading_level() == Some(1))
            .map(|h| h.plain_text())
            .collect();
        assert_eq!(level1.len(), 8);
        assert_eq!(level1[0], "Executive Summary");
        assert_eq!(level1[7], "7. Conclusion");
    }

    #[test]
    fn test_literal_strings_present() {
        let doc = build();
        assert!(doc.contains_text("Adbeam Recycling Mobile App"));
        assert!(doc.contains_text("~35%"));
        assert!(doc.contains_text("October 14, 2026"));
        assert!(doc.contains_text("1. Prioritize implementing the barcode scanning"));
        assert!(doc.contains_text(&"_".repeat(50)));
    }

    #[test]
    fn test_date_in_info_grid() {
        let doc = build();
        let grid = doc.tables().next().unwrap();
        let row = &grid.rows[6];
        assert_eq!(row.cells[0].plain_text(), "Document Date:");
        assert_eq!(row.cells[1].plain_text(), "October 14, 2026");
    }

    #[test]
    fn test_priority_cells_colored() {
        let doc = build();
        let core = doc.tables().nth(2).unwrap();
        let color = |row: usize| {
            core.rows[row].cells[1].content[0]
                .runs()
                .next()
                .unwrap()
                .style
                .color
        };
        assert_eq!(color(1), Some(palette::RED));
        assert_eq!(color(3), Some(palette::AMBER));
    }

    #[test]
    fn test_progress_rows_colored() {
        let doc = build();
        let summary = doc.tables().nth(5).unwrap();
        let colors: Vec<_> = summary.rows[1..]
            .iter()
            .map(|row| row.cells[1].content[0].runs().next().unwrap().style.color)
            .collect();

        let expected = [
            palette::GREEN, // 100% App Structure
            palette::GREEN, // 100% Authentication
            palette::RED,   // 90% UI Screens
            palette::RED,   // 80% Firebase
            palette::RED,   // 0% CRITICAL Scanning
            palette::RED,   // 0% Location
            palette::RED,   // 0% Notifications
            palette::RED,   // 10% Gamification
            palette::RED,   // 0% Social
            palette::RED,   // 0% Advanced
        ];
        assert_eq!(colors, expected.map(Some).to_vec());
    }

    #[test]
    fn test_overall_completion_run() {
        let doc = build();
        let para = doc
            .paragraphs()
            .find(|p| p.plain_text().starts_with("Overall Project Completion"))
            .unwrap();
        let runs: Vec<_> = para.runs().collect();
        assert!(runs[0].style.bold);
        assert_eq!(runs[1].text, "~35%");
        assert_eq!(runs[1].style.color, Some(palette::AMBER));
    }

    #[test]
    fn test_bullets_per_phase() {
        let doc = build();
        let bullets = doc.paragraphs().filter(|p| p.is_list_item()).count();
        let tasks: usize = SprintReport::adbeam().phases.iter().map(|p| p.tasks.len()).sum();
        assert_eq!(bullets, tasks);
    }

    #[test]
    fn test_metadata() {
        let doc = build();
        assert_eq!(
            doc.metadata.title.as_deref(),
            Some("Adbeam Recycling Mobile App")
        );
        let created = doc.metadata.created.unwrap();
        assert_eq!(created.format("%Y-%m-%d").to_string(), "2026-10-14");
        assert!(matches!(doc.blocks[0], Block::Paragraph(_)));
    }
}
