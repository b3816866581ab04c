//! Integration tests for report generation and the written .docx package.

use std::io::Read;

use chrono::NaiveDate;
use sprintdoc::docx::{inspect_file, parts, CONTENT_TYPE_MAIN};
use sprintdoc::model::TableStyle;
use sprintdoc::{build_default_report, generate, ReportOptions, SprintReport};
use tempfile::tempdir;

fn pinned() -> ReportOptions {
    ReportOptions::new().with_date(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap())
}

fn read_part(path: &std::path::Path, name: &str) -> String {
    let file = std::fs::File::open(path).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    let mut xml = String::new();
    archive
        .by_name(name)
        .unwrap()
        .read_to_string(&mut xml)
        .unwrap();
    xml
}

#[test]
fn test_generate_creates_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Adbeam_Sprint_Documentation.docx");

    generate(&path, &pinned()).unwrap();

    assert!(path.exists());
    assert!(std::fs::metadata(&path).unwrap().len() > 0);
}

#[test]
fn test_package_is_wellformed() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sprint.docx");
    generate(&path, &pinned()).unwrap();

    let body = read_part(&path, parts::DOCUMENT);
    assert!(roxmltree::Document::parse(&body).is_ok());

    let types = read_part(&path, parts::CONTENT_TYPES);
    assert!(types.contains(CONTENT_TYPE_MAIN));

    for name in [parts::STYLES, parts::NUMBERING, parts::CORE, parts::APP] {
        let xml = read_part(&path, name);
        assert!(roxmltree::Document::parse(&xml).is_ok(), "{} is malformed", name);
    }

    let summary = inspect_file(&path).unwrap();
    assert_eq!(summary.main_content_type.as_deref(), Some(CONTENT_TYPE_MAIN));
    assert_eq!(summary.title.as_deref(), Some("Adbeam Recycling Mobile App"));
}

#[test]
fn test_table_row_counts() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sprint.docx");
    generate(&path, &pinned()).unwrap();

    let summary = inspect_file(&path).unwrap();
    assert_eq!(summary.table_rows(), vec![8, 13, 6, 4, 7, 11]);
    assert_eq!(
        summary.table_rows(),
        SprintReport::adbeam().expected_table_rows()
    );

    let columns: Vec<usize> = summary.tables.iter().map(|t| t.columns).collect();
    assert_eq!(columns, vec![2, 3, 3, 3, 3, 2]);

    let styles: Vec<Option<&str>> = summary.tables.iter().map(|t| t.style.as_deref()).collect();
    let light = Some(TableStyle::LightGridAccent1.style_id());
    let medium = Some(TableStyle::MediumGrid1Accent1.style_id());
    assert_eq!(styles, vec![light, light, light, light, light, medium]);
}

#[test]
fn test_literal_strings_survive() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sprint.docx");
    generate(&path, &pinned()).unwrap();

    let summary = inspect_file(&path).unwrap();
    for needle in [
        "Adbeam Recycling Mobile App",
        "Sprint Documentation: Current Progress vs. Planned Features",
        "~35%",
        "React Native with Expo",
        "✓ Complete",
        "Document Date:\tJanuary 15, 2025",
        "Date: January 15, 2025",
    ] {
        assert!(summary.contains_text(needle), "missing {:?}", needle);
    }
}

#[test]
fn test_structure_matches_model() {
    let doc = build_default_report(&pinned()).unwrap();
    let bytes = sprintdoc::to_docx_bytes(&doc).unwrap();
    let summary = sprintdoc::docx::inspect_bytes(&bytes).unwrap();

    assert_eq!(summary.page_breaks, doc.page_break_count());
    assert_eq!(summary.page_breaks, 7);
    assert_eq!(summary.headings, doc.headings().count());
    assert_eq!(summary.tables.len(), doc.tables().count());
}

#[test]
fn test_rerun_overwrites() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sprint.docx");

    generate(&path, &pinned()).unwrap();
    let first = inspect_file(&path).unwrap();

    let later = ReportOptions::new().with_date(NaiveDate::from_ymd_opt(2026, 10, 14).unwrap());
    generate(&path, &later).unwrap();
    let second = inspect_file(&path).unwrap();

    assert!(first.contains_text("January 15, 2025"));
    assert!(!second.contains_text("January 15, 2025"));
    assert!(second.contains_text("October 14, 2026"));
    assert_eq!(first.table_rows(), second.table_rows());
}

#[test]
fn test_unwritable_path_is_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("sprint.docx");

    let err = generate(&path, &pinned()).unwrap_err();
    assert!(matches!(err, sprintdoc::Error::Io(_)));
}
