//! Package plumbing: content types, relationships and document properties.

use super::xml::XmlPart;
use super::{parts, CONTENT_TYPE_MAIN};
use crate::error::Result;
use crate::model::Metadata;
use chrono::{DateTime, Utc};

const PACKAGE_TYPES_NS: &str = "http://schemas.openxmlformats.org/package/2006/content-types";
const PACKAGE_RELS_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
const REL_BASE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const CORE_NS: &str = "http://schemas.openxmlformats.org/package/2006/metadata/core-properties";
const EXTENDED_NS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/extended-properties";

/// Timestamp format of `dcterms:W3CDTF`.
const W3CDTF: &str = "%Y-%m-%dT%H:%M:%SZ";

pub(crate) fn content_types_xml() -> Result<Vec<u8>> {
    let mut xml = XmlPart::new()?;
    xml.open("Types", &[("xmlns", PACKAGE_TYPES_NS)])?;
    xml.empty(
        "Default",
        &[
            ("Extension", "rels"),
            (
                "ContentType",
                "application/vnd.openxmlformats-package.relationships+xml",
            ),
        ],
    )?;
    xml.empty(
        "Default",
        &[("Extension", "xml"), ("ContentType", "application/xml")],
    )?;

    let overrides = [
        (parts::DOCUMENT, CONTENT_TYPE_MAIN),
        (
            parts::STYLES,
            "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml",
        ),
        (
            parts::NUMBERING,
            "application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml",
        ),
        (
            parts::CORE,
            "application/vnd.openxmlformats-package.core-properties+xml",
        ),
        (
            parts::APP,
            "application/vnd.openxmlformats-officedocument.extended-properties+xml",
        ),
    ];
    for (part, content_type) in overrides {
        let name = format!("/{}", part);
        xml.empty(
            "Override",
            &[("PartName", name.as_str()), ("ContentType", content_type)],
        )?;
    }

    xml.close("Types")?;
    Ok(xml.finish())
}

/// Relationships of the package root.
pub(crate) fn root_rels_xml() -> Result<Vec<u8>> {
    relationships(&[
        ("rId1", format!("{}/officeDocument", REL_BASE), parts::DOCUMENT),
        (
            "rId2",
            "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties"
                .to_string(),
            parts::CORE,
        ),
        ("rId3", format!("{}/extended-properties", REL_BASE), parts::APP),
    ])
}

/// Relationships of the main document part.
pub(crate) fn document_rels_xml() -> Result<Vec<u8>> {
    relationships(&[
        ("rId1", format!("{}/styles", REL_BASE), "styles.xml"),
        ("rId2", format!("{}/numbering", REL_BASE), "numbering.xml"),
    ])
}

fn relationships(rels: &[(&str, String, &str)]) -> Result<Vec<u8>> {
    let mut xml = XmlPart::new()?;
    xml.open("Relationships", &[("xmlns", PACKAGE_RELS_NS)])?;
    for &(id, ref rel_type, target) in rels {
        xml.empty(
            "Relationship",
            &[("Id", id), ("Type", rel_type.as_str()), ("Target", target)],
        )?;
    }
    xml.close("Relationships")?;
    Ok(xml.finish())
}

/// Core properties. Missing creation time falls back to `now`.
pub(crate) fn core_xml(metadata: &Metadata, now: DateTime<Utc>) -> Result<Vec<u8>> {
    let created = metadata.created.unwrap_or(now).format(W3CDTF).to_string();

    let mut xml = XmlPart::new()?;
    xml.open(
        "cp:coreProperties",
        &[
            ("xmlns:cp", CORE_NS),
            ("xmlns:dc", "http://purl.org/dc/elements/1.1/"),
            ("xmlns:dcterms", "http://purl.org/dc/terms/"),
            ("xmlns:dcmitype", "http://purl.org/dc/dcmitype/"),
            ("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance"),
        ],
    )?;
    let fields = [
        ("dc:title", &metadata.title),
        ("dc:subject", &metadata.subject),
        ("dc:creator", &metadata.author),
        ("cp:keywords", &metadata.keywords),
    ];
    for (name, value) in fields {
        if let Some(value) = value {
            xml.leaf(name, &[], value)?;
        }
    }
    for name in ["dcterms:created", "dcterms:modified"] {
        xml.leaf(name, &[("xsi:type", "dcterms:W3CDTF")], &created)?;
    }
    xml.close("cp:coreProperties")?;
    Ok(xml.finish())
}

/// Extended (application) properties.
pub(crate) fn app_xml() -> Result<Vec<u8>> {
    let application = format!("sprintdoc/{}", env!("CARGO_PKG_VERSION"));

    let mut xml = XmlPart::new()?;
    xml.open(
        "Properties",
        &[
            ("xmlns", EXTENDED_NS),
            (
                "xmlns:vt",
                "http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes",
            ),
        ],
    )?;
    xml.leaf("Application", &[], &application)?;
    xml.leaf("DocSecurity", &[], "0")?;
    xml.close("Properties")?;
    Ok(xml.finish())
}
