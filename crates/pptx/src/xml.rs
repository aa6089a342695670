//! Thin wrapper over `quick_xml::Writer` that maps errors into ours.

use deck_core::{Error, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

/// Incremental XML document builder.
pub(crate) struct XmlBuilder {
    writer: Writer<Vec<u8>>,
}

impl XmlBuilder {
    /// Start a document with the standalone UTF-8 declaration every OOXML part carries.
    pub fn new() -> Result<Self> {
        let mut builder = Self {
            writer: Writer::new(Vec::with_capacity(4096)),
        };
        builder.event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
        Ok(builder)
    }

    /// Open an element.
    pub fn start(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<&mut Self> {
        let mut elem = BytesStart::new(name);
        for attr in attrs {
            elem.push_attribute(*attr);
        }
        self.event(Event::Start(elem))?;
        Ok(self)
    }

    /// Close an element.
    pub fn end(&mut self, name: &str) -> Result<&mut Self> {
        self.event(Event::End(BytesEnd::new(name)))?;
        Ok(self)
    }

    /// Write a self-closing element.
    pub fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<&mut Self> {
        let mut elem = BytesStart::new(name);
        for attr in attrs {
            elem.push_attribute(*attr);
        }
        self.event(Event::Empty(elem))?;
        Ok(self)
    }

    /// Write escaped character data.
    pub fn text(&mut self, content: &str) -> Result<&mut Self> {
        self.event(Event::Text(BytesText::new(content)))?;
        Ok(self)
    }

    /// `<name>content</name>`
    pub fn element(&mut self, name: &str, content: &str) -> Result<&mut Self> {
        self.start(name, &[])?;
        self.text(content)?;
        self.end(name)
    }

    /// Finish and return the document as a string.
    pub fn finish(self) -> Result<String> {
        String::from_utf8(self.writer.into_inner())
            .map_err(|e| Error::Xml(format!("Generated XML is not UTF-8: {}", e)))
    }

    fn event(&mut self, event: Event<'_>) -> Result<()> {
        self.writer
            .write_event(event)
            .map_err(|e| Error::Xml(format!("Failed to write XML event: {}", e)))
    }
}
