//! Thin event writer shared by all package parts.

use crate::error::Result;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

/// Attribute list of an element.
pub(crate) type Attrs<'a> = &'a [(&'a str, &'a str)];

/// An XML part being written into memory.
pub(crate) struct XmlPart {
    writer: Writer<Vec<u8>>,
}

impl XmlPart {
    /// Start a part with the standalone UTF-8 declaration.
    pub(crate) fn new() -> Result<Self> {
        let mut writer = Writer::new(Vec::new());
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
        Ok(Self { writer })
    }

    /// Write a start tag.
    pub(crate) fn open(&mut self, name: &str, attrs: Attrs<'_>) -> Result<()> {
        self.writer.write_event(Event::Start(element(name, attrs)))?;
        Ok(())
    }

    /// Write an end tag.
    pub(crate) fn close(&mut self, name: &str) -> Result<()> {
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    /// Write a self-closing element.
    pub(crate) fn empty(&mut self, name: &str, attrs: Attrs<'_>) -> Result<()> {
        self.writer.write_event(Event::Empty(element(name, attrs)))?;
        Ok(())
    }

    /// Write escaped character data.
    pub(crate) fn text(&mut self, text: &str) -> Result<()> {
        self.writer.write_event(Event::Text(BytesText::new(text)))?;
        Ok(())
    }

    /// Write `<name attrs>text</name>`.
    pub(crate) fn leaf(&mut self, name: &str, attrs: Attrs<'_>, text: &str) -> Result<()> {
        self.open(name, attrs)?;
        self.text(text)?;
        self.close(name)
    }

    /// Take the serialized bytes.
    pub(crate) fn finish(self) -> Vec<u8> {
        self.writer.into_inner()
    }
}

fn element<'a>(name: &'a str, attrs: Attrs<'a>) -> BytesStart<'a> {
    let mut start = BytesStart::new(name);
    for &attr in attrs {
        start.push_attribute(attr);
    }
    start
}
