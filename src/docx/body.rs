//! `word/document.xml`: the document body.

use super::xml::XmlPart;
use super::{R_NS, W_NS};
use crate::error::Result;
use crate::model::{Alignment, Block, Document, InlineContent, Paragraph, Table, TextRun};

/// US Letter, in twentieths of a point.
const PAGE_WIDTH: u32 = 12240;
const PAGE_HEIGHT: u32 = 15840;
/// One inch.
const MARGIN: u32 = 1440;
/// Width available to tables between the margins.
const TEXT_WIDTH: u32 = PAGE_WIDTH - 2 * MARGIN;

/// Serialize the document body.
pub(crate) fn document_xml(doc: &Document) -> Result<Vec<u8>> {
    let mut xml = XmlPart::new()?;
    xml.open("w:document", &[("xmlns:w", W_NS), ("xmlns:r", R_NS)])?;
    xml.open("w:body", &[])?;

    for block in &doc.blocks {
        match block {
            Block::Paragraph(p) => write_paragraph(&mut xml, p, Alignment::Left)?,
            Block::Table(t) => write_table(&mut xml, t)?,
            Block::PageBreak => write_page_break(&mut xml)?,
        }
    }

    write_section(&mut xml)?;
    xml.close("w:body")?;
    xml.close("w:document")?;
    Ok(xml.finish())
}

fn write_paragraph(xml: &mut XmlPart, para: &Paragraph, fallback: Alignment) -> Result<()> {
    xml.open("w:p", &[])?;

    let style_id = para.style.kind.style_id();
    let alignment = match para.style.alignment {
        Alignment::Left => fallback,
        other => other,
    };
    if style_id.is_some() || alignment != Alignment::Left {
        xml.open("w:pPr", &[])?;
        if let Some(ref id) = style_id {
            xml.empty("w:pStyle", &[("w:val", id.as_str())])?;
        }
        if alignment != Alignment::Left {
            xml.empty("w:jc", &[("w:val", alignment.ooxml_value())])?;
        }
        xml.close("w:pPr")?;
    }

    for item in &para.content {
        match item {
            InlineContent::Text(run) => write_run(xml, run)?,
            InlineContent::LineBreak => {
                xml.open("w:r", &[])?;
                xml.empty("w:br", &[])?;
                xml.close("w:r")?;
            }
        }
    }

    xml.close("w:p")
}

fn write_run(xml: &mut XmlPart, run: &TextRun) -> Result<()> {
    xml.open("w:r", &[])?;

    let style = &run.style;
    if style.has_styling() {
        xml.open("w:rPr", &[])?;
        if let Some(font) = style.font_name.as_deref() {
            xml.empty(
                "w:rFonts",
                &[("w:ascii", font), ("w:hAnsi", font), ("w:cs", font)],
            )?;
        }
        if style.bold {
            xml.empty("w:b", &[])?;
        }
        if style.italic {
            xml.empty("w:i", &[])?;
        }
        if let Some(color) = style.color {
            xml.empty("w:color", &[("w:val", color.hex().as_str())])?;
        }
        if let Some(points) = style.font_size {
            let half_points = half_points(points).to_string();
            xml.empty("w:sz", &[("w:val", half_points.as_str())])?;
            xml.empty("w:szCs", &[("w:val", half_points.as_str())])?;
        }
        if style.underline {
            xml.empty("w:u", &[("w:val", "single")])?;
        }
        xml.close("w:rPr")?;
    }

    // Newlines become breaks and tabs become tab stops.
    for (i, line) in run.text.split('\n').enumerate() {
        if i > 0 {
            xml.empty("w:br", &[])?;
        }
        for (j, segment) in line.split('\t').enumerate() {
            if j > 0 {
                xml.empty("w:tab", &[])?;
            }
            if !segment.is_empty() {
                xml.leaf("w:t", &[("xml:space", "preserve")], segment)?;
            }
        }
    }

    xml.close("w:r")
}

fn write_table(xml: &mut XmlPart, table: &Table) -> Result<()> {
    let columns = table.column_count().max(1);
    let widths: Vec<u32> = match table.column_widths {
        Some(ref widths) if widths.len() == columns => {
            widths.iter().map(|w| (w * 20.0).round() as u32).collect()
        }
        _ => vec![TEXT_WIDTH / columns as u32; columns],
    };

    xml.open("w:tbl", &[])?;
    xml.open("w:tblPr", &[])?;
    xml.empty("w:tblStyle", &[("w:val", table.style.style_id())])?;
    xml.empty("w:tblW", &[("w:w", "0"), ("w:type", "auto")])?;
    // Word's default look: first row and first column emphasized.
    xml.empty(
        "w:tblLook",
        &[
            ("w:val", "04A0"),
            ("w:firstRow", "1"),
            ("w:lastRow", "0"),
            ("w:firstColumn", "1"),
            ("w:lastColumn", "0"),
            ("w:noHBand", "0"),
            ("w:noVBand", "1"),
        ],
    )?;
    xml.close("w:tblPr")?;

    xml.open("w:tblGrid", &[])?;
    for width in &widths {
        xml.empty("w:gridCol", &[("w:w", width.to_string().as_str())])?;
    }
    xml.close("w:tblGrid")?;

    for row in &table.rows {
        xml.open("w:tr", &[])?;
        if row.is_header {
            xml.open("w:trPr", &[])?;
            xml.empty("w:tblHeader", &[])?;
            xml.close("w:trPr")?;
        }
        for (i, cell) in row.cells.iter().enumerate() {
            let width = widths.get(i).copied().unwrap_or(TEXT_WIDTH / columns as u32);
            xml.open("w:tc", &[])?;
            xml.open("w:tcPr", &[])?;
            let width = width.to_string();
            xml.empty("w:tcW", &[("w:w", width.as_str()), ("w:type", "dxa")])?;
            xml.close("w:tcPr")?;
            // A cell must end with a paragraph.
            if cell.content.is_empty() {
                write_paragraph(xml, &Paragraph::new(), cell.alignment)?;
            }
            for para in &cell.content {
                write_paragraph(xml, para, cell.alignment)?;
            }
            xml.close("w:tc")?;
        }
        xml.close("w:tr")?;
    }

    xml.close("w:tbl")
}

fn write_page_break(xml: &mut XmlPart) -> Result<()> {
    xml.open("w:p", &[])?;
    xml.open("w:r", &[])?;
    xml.empty("w:br", &[("w:type", "page")])?;
    xml.close("w:r")?;
    xml.close("w:p")
}

fn write_section(xml: &mut XmlPart) -> Result<()> {
    let margin = MARGIN.to_string();
    xml.open("w:sectPr", &[])?;
    xml.empty(
        "w:pgSz",
        &[
            ("w:w", PAGE_WIDTH.to_string().as_str()),
            ("w:h", PAGE_HEIGHT.to_string().as_str()),
        ],
    )?;
    xml.empty(
        "w:pgMar",
        &[
            ("w:top", margin.as_str()),
            ("w:right", margin.as_str()),
            ("w:bottom", margin.as_str()),
            ("w:left", margin.as_str()),
            ("w:header", "720"),
            ("w:footer", "720"),
            ("w:gutter", "0"),
        ],
    )?;
    xml.close("w:sectPr")
}

/// Points to the half-point unit of `w:sz`.
pub(crate) fn half_points(points: f32) -> u32 {
    (points * 2.0).round().max(1.0) as u32
}
