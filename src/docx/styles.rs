//! `word/styles.xml` and `word/numbering.xml`.

use super::body::half_points;
use super::xml::XmlPart;
use super::W_NS;
use crate::error::Result;
use crate::model::{DocumentStyle, TableStyle};

/// Deepest heading style emitted.
const MAX_HEADING: u8 = 9;

/// Numbering instance referenced by the bullet style.
pub(crate) const BULLET_NUM_ID: &str = "1";

/// Look of a built-in table style.
struct TableStyleDef {
    border: &'static str,
    /// Band fill for the body, if any.
    fill: Option<&'static str>,
    /// Header row fill, if any.
    header_fill: Option<&'static str>,
    /// Thick rule under the header row.
    header_rule: bool,
}

fn table_style_def(style: TableStyle) -> TableStyleDef {
    match style {
        TableStyle::Grid => TableStyleDef {
            border: "000000",
            fill: None,
            header_fill: None,
            header_rule: false,
        },
        TableStyle::LightGridAccent1 => TableStyleDef {
            border: "4F81BD",
            fill: None,
            header_fill: None,
            header_rule: true,
        },
        TableStyle::MediumGrid1Accent1 => TableStyleDef {
            border: "7BA0CD",
            fill: Some("D3DFEE"),
            header_fill: Some("4F81BD"),
            header_rule: false,
        },
    }
}

/// Serialize the style sheet.
pub(crate) fn styles_xml(style: &DocumentStyle) -> Result<Vec<u8>> {
    let mut xml = XmlPart::new()?;
    xml.open("w:styles", &[("xmlns:w", W_NS)])?;

    write_defaults(&mut xml, style)?;

    paragraph_style(&mut xml, "Normal", "Normal", true, |_| Ok(()), |_| Ok(()))?;
    paragraph_style(
        &mut xml,
        "Title",
        "Title",
        false,
        |x| x.empty("w:spacing", &[("w:after", "300")]),
        |x| {
            x.empty("w:color", &[("w:val", "17365D")])?;
            x.empty("w:sz", &[("w:val", "52")])
        },
    )?;
    for level in 1..=MAX_HEADING {
        let id = format!("Heading{}", level);
        let name = format!("heading {}", level);
        let (size, color) = match level {
            1 => ("28", "365F91"),
            2 => ("26", "4F81BD"),
            _ => ("22", "4F81BD"),
        };
        let outline = (level - 1).to_string();
        let before = if level == 1 { "480" } else { "200" };
        paragraph_style(
            &mut xml,
            &id,
            &name,
            false,
            |x| {
                x.empty("w:keepNext", &[])?;
                x.empty("w:spacing", &[("w:before", before), ("w:after", "0")])?;
                x.empty("w:outlineLvl", &[("w:val", outline.as_str())])
            },
            |x| {
                x.empty("w:b", &[])?;
                x.empty("w:color", &[("w:val", color)])?;
                x.empty("w:sz", &[("w:val", size)])
            },
        )?;
    }
    paragraph_style(
        &mut xml,
        "ListBullet",
        "List Bullet",
        false,
        |x| {
            x.open("w:numPr", &[])?;
            x.empty("w:ilvl", &[("w:val", "0")])?;
            x.empty("w:numId", &[("w:val", BULLET_NUM_ID)])?;
            x.close("w:numPr")?;
            x.empty("w:ind", &[("w:left", "720"), ("w:hanging", "360")])
        },
        |_| Ok(()),
    )?;

    write_table_normal(&mut xml)?;
    for table_style in TableStyle::ALL {
        write_table_style(&mut xml, table_style)?;
    }

    xml.close("w:styles")?;
    Ok(xml.finish())
}

fn write_defaults(xml: &mut XmlPart, style: &DocumentStyle) -> Result<()> {
    let font = style.font_name.as_str();
    let size = half_points(style.font_size).to_string();

    xml.open("w:docDefaults", &[])?;
    xml.open("w:rPrDefault", &[])?;
    xml.open("w:rPr", &[])?;
    xml.empty(
        "w:rFonts",
        &[
            ("w:ascii", font),
            ("w:hAnsi", font),
            ("w:eastAsia", font),
            ("w:cs", font),
        ],
    )?;
    xml.empty("w:sz", &[("w:val", size.as_str())])?;
    xml.empty("w:szCs", &[("w:val", size.as_str())])?;
    xml.empty("w:lang", &[("w:val", "en-US")])?;
    xml.close("w:rPr")?;
    xml.close("w:rPrDefault")?;
    xml.open("w:pPrDefault", &[])?;
    xml.open("w:pPr", &[])?;
    xml.empty(
        "w:spacing",
        &[("w:after", "200"), ("w:line", "276"), ("w:lineRule", "auto")],
    )?;
    xml.close("w:pPr")?;
    xml.close("w:pPrDefault")?;
    xml.close("w:docDefaults")
}

fn paragraph_style<P, R>(
    xml: &mut XmlPart,
    id: &str,
    name: &str,
    default: bool,
    ppr: P,
    rpr: R,
) -> Result<()>
where
    P: FnOnce(&mut XmlPart) -> Result<()>,
    R: FnOnce(&mut XmlPart) -> Result<()>,
{
    let mut attrs = vec![("w:type", "paragraph")];
    if default {
        attrs.push(("w:default", "1"));
    }
    attrs.push(("w:styleId", id));

    xml.open("w:style", &attrs)?;
    xml.empty("w:name", &[("w:val", name)])?;
    if !default {
        xml.empty("w:basedOn", &[("w:val", "Normal")])?;
        xml.empty("w:next", &[("w:val", "Normal")])?;
    }
    xml.empty("w:qFormat", &[])?;
    xml.open("w:pPr", &[])?;
    ppr(xml)?;
    xml.close("w:pPr")?;
    xml.open("w:rPr", &[])?;
    rpr(xml)?;
    xml.close("w:rPr")?;
    xml.close("w:style")
}

fn write_table_normal(xml: &mut XmlPart) -> Result<()> {
    xml.open(
        "w:style",
        &[
            ("w:type", "table"),
            ("w:default", "1"),
            ("w:styleId", "TableNormal"),
        ],
    )?;
    xml.empty("w:name", &[("w:val", "Normal Table")])?;
    xml.empty("w:uiPriority", &[("w:val", "99")])?;
    xml.empty("w:semiHidden", &[])?;
    xml.open("w:tblPr", &[])?;
    xml.empty("w:tblInd", &[("w:w", "0"), ("w:type", "dxa")])?;
    xml.open("w:tblCellMar", &[])?;
    for (side, width) in [("w:top", "0"), ("w:left", "108"), ("w:bottom", "0"), ("w:right", "108")]
    {
        xml.empty(side, &[("w:w", width), ("w:type", "dxa")])?;
    }
    xml.close("w:tblCellMar")?;
    xml.close("w:tblPr")?;
    xml.close("w:style")
}

fn write_table_style(xml: &mut XmlPart, style: TableStyle) -> Result<()> {
    let def = table_style_def(style);

    xml.open(
        "w:style",
        &[("w:type", "table"), ("w:styleId", style.style_id())],
    )?;
    xml.empty("w:name", &[("w:val", style.display_name())])?;
    xml.empty("w:basedOn", &[("w:val", "TableNormal")])?;
    xml.open("w:pPr", &[])?;
    xml.empty(
        "w:spacing",
        &[("w:after", "0"), ("w:line", "240"), ("w:lineRule", "auto")],
    )?;
    xml.close("w:pPr")?;

    xml.open("w:tblPr", &[])?;
    xml.open("w:tblBorders", &[])?;
    for side in ["w:top", "w:left", "w:bottom", "w:right", "w:insideH", "w:insideV"] {
        xml.empty(
            side,
            &[
                ("w:val", "single"),
                ("w:sz", "8"),
                ("w:space", "0"),
                ("w:color", def.border),
            ],
        )?;
    }
    xml.close("w:tblBorders")?;
    xml.close("w:tblPr")?;

    if let Some(fill) = def.fill {
        xml.open("w:tcPr", &[])?;
        xml.empty(
            "w:shd",
            &[("w:val", "clear"), ("w:color", "auto"), ("w:fill", fill)],
        )?;
        xml.close("w:tcPr")?;
    }

    if def.header_fill.is_some() || def.header_rule {
        xml.open("w:tblStylePr", &[("w:type", "firstRow")])?;
        xml.open("w:rPr", &[])?;
        xml.empty("w:b", &[])?;
        xml.close("w:rPr")?;
        xml.open("w:tcPr", &[])?;
        if def.header_rule {
            xml.open("w:tcBorders", &[])?;
            xml.empty(
                "w:bottom",
                &[
                    ("w:val", "single"),
                    ("w:sz", "18"),
                    ("w:space", "0"),
                    ("w:color", def.border),
                ],
            )?;
            xml.close("w:tcBorders")?;
        }
        if let Some(fill) = def.header_fill {
            xml.empty(
                "w:shd",
                &[("w:val", "clear"), ("w:color", "auto"), ("w:fill", fill)],
            )?;
        }
        xml.close("w:tcPr")?;
        xml.close("w:tblStylePr")?;
    }

    xml.close("w:style")
}

/// Serialize the numbering definitions backing the bullet style.
pub(crate) fn numbering_xml() -> Result<Vec<u8>> {
    let mut xml = XmlPart::new()?;
    xml.open("w:numbering", &[("xmlns:w", W_NS)])?;

    xml.open("w:abstractNum", &[("w:abstractNumId", "0")])?;
    xml.empty("w:multiLevelType", &[("w:val", "hybridMultilevel")])?;
    xml.open("w:lvl", &[("w:ilvl", "0")])?;
    xml.empty("w:start", &[("w:val", "1")])?;
    xml.empty("w:numFmt", &[("w:val", "bullet")])?;
    xml.empty("w:pStyle", &[("w:val", "ListBullet")])?;
    // Private-use bullet glyph of the Symbol font.
    xml.empty("w:lvlText", &[("w:val", "\u{F0B7}")])?;
    xml.empty("w:lvlJc", &[("w:val", "left")])?;
    xml.open("w:pPr", &[])?;
    xml.empty("w:ind", &[("w:left", "720"), ("w:hanging", "360")])?;
    xml.close("w:pPr")?;
    xml.open("w:rPr", &[])?;
    xml.empty(
        "w:rFonts",
        &[("w:ascii", "Symbol"), ("w:hAnsi", "Symbol"), ("w:hint", "default")],
    )?;
    xml.close("w:rPr")?;
    xml.close("w:lvl")?;
    xml.close("w:abstractNum")?;

    xml.open("w:num", &[("w:numId", BULLET_NUM_ID)])?;
    xml.empty("w:abstractNumId", &[("w:val", "0")])?;
    xml.close("w:num")?;

    xml.close("w:numbering")?;
    Ok(xml.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn styles() -> String {
        String::from_utf8(styles_xml(&DocumentStyle::default()).unwrap()).unwrap()
    }

    #[test]
    fn test_paragraph_styles_present() {
        let xml = styles();
        for id in ["Normal", "Title", "Heading1", "Heading2", "Heading9", "ListBullet"] {
            assert!(
                xml.contains(&format!("w:styleId=\"{}\"", id)),
                "missing style {}",
                id
            );
        }
        assert!(xml.contains("<w:outlineLvl w:val=\"1\"/>"));
    }

    #[test]
    fn test_table_styles_present() {
        let xml = styles();
        for style in TableStyle::ALL {
            assert!(xml.contains(&format!("w:styleId=\"{}\"", style.style_id())));
        }
        assert!(xml.contains("w:fill=\"4F81BD\""));
    }

    #[test]
    fn test_document_font_defaults() {
        let style = DocumentStyle {
            font_name: "Arial".into(),
            font_size: 12.0,
        };
        let xml = String::from_utf8(styles_xml(&style).unwrap()).unwrap();
        assert!(xml.contains("w:ascii=\"Arial\""));
        assert!(xml.contains("<w:sz w:val=\"24\"/>"));
    }

    #[test]
    fn test_numbering_bullet() {
        let xml = String::from_utf8(numbering_xml().unwrap()).unwrap();
        assert!(xml.contains("<w:numFmt w:val=\"bullet\"/>"));
        assert!(xml.contains("<w:num w:numId=\"1\">"));
        assert!(xml.contains("<w:lvlText w:val=\"\u{F0B7}\"/>"));
        assert!(xml.contains("w:ascii=\"Symbol\""));
    }
}
