/// The main document part (`word/document.xml`).
use super::block::BlockContent;
use super::children::ChildList;
use super::paragraph::Paragraph;
use super::part;
use super::table::Table;
use crate::common::xml::{FromXml, ToXml, XmlAttribute, XmlElement, writer};
use crate::error::{Result, WmlError};
use crate::options::{ParseOptions, WriteOptions};
use serde::{Deserialize, Serialize};

/// A Word document body and its root element.
///
/// # Example
///
/// ```rust
/// use litchi_wml::wml::{Document, Paragraph};
///
/// # fn main() -> Result<(), litchi_wml::WmlError> {
/// let xml = br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
/// <w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
///   <w:body><w:p><w:r><w:t>Hello</w:t></w:r></w:p></w:body>
/// </w:document>"#;
///
/// let mut doc = Document::from_xml_bytes(xml)?;
/// doc.add_paragraph(Paragraph::with_text("World"));
/// assert_eq!(doc.text(), "Hello\nWorld");
///
/// let written = doc.to_xml_string()?;
/// assert_eq!(Document::from_xml_bytes(written.as_bytes())?.body, doc.body);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    /// Root attributes as read, namespace declarations included
    pub attributes: Vec<XmlAttribute>,
    /// `w:background`, kept as parsed
    pub background: Option<XmlElement>,
    pub body: Body,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `word/document.xml` with default options.
    pub fn from_xml_bytes(xml: &[u8]) -> Result<Self> {
        Self::from_xml_bytes_with(xml, &ParseOptions::default())
    }

    pub fn from_xml_bytes_with(xml: &[u8], options: &ParseOptions) -> Result<Self> {
        let root = part::parse_root(xml, "document", options)?;
        Self::from_xml(&root, options)
    }

    /// Serialize as a complete part with default options.
    pub fn to_xml_string(&self) -> Result<String> {
        self.to_xml_string_with(&WriteOptions::default())
    }

    pub fn to_xml_string_with(&self, options: &WriteOptions) -> Result<String> {
        let mut xml = String::with_capacity(4096);
        part::write_declaration(&mut xml, options);
        self.write_xml("w:document", &mut xml)?;
        Ok(xml)
    }

    /// Direct body paragraphs.
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> + '_ {
        self.body.content.paragraphs()
    }

    /// Direct body tables.
    pub fn tables(&self) -> impl Iterator<Item = &Table> + '_ {
        self.body.content.tables()
    }

    pub fn add_paragraph(&mut self, paragraph: Paragraph) -> &mut Paragraph {
        self.body.content.push(BlockContent::Paragraph(paragraph));
        match self.body.content.last_mut() {
            Some(BlockContent::Paragraph(p)) => p,
            _ => unreachable!("a paragraph was just pushed"),
        }
    }

    pub fn add_table(&mut self, table: Table) -> &mut Table {
        self.body.content.push(BlockContent::Table(table));
        match self.body.content.last_mut() {
            Some(BlockContent::Table(t)) => t,
            _ => unreachable!("a table was just pushed"),
        }
    }

    /// Visible text: one line per paragraph, table rows with `\t`
    /// between cells.
    pub fn text(&self) -> String {
        self.body.content.text()
    }
}

impl FromXml for Document {
    fn from_xml(element: &XmlElement, options: &ParseOptions) -> Result<Self> {
        part::check_root(element, "document")?;
        let body = element.child("body").ok_or_else(|| WmlError::UnexpectedElement {
            expected: "w:body".to_string(),
            got: element
                .elements()
                .next()
                .map(|e| e.name().to_string())
                .unwrap_or_default(),
        })?;
        Ok(Self {
            attributes: element.attributes().to_vec(),
            background: element.child("background").cloned(),
            body: Body::from_xml(body, options)?,
        })
    }
}

impl ToXml for Document {
    fn write_xml(&self, tag: &str, xml: &mut String) -> Result<()> {
        part::open_root(xml, tag, &self.attributes);
        xml.push('>');
        if let Some(background) = &self.background {
            background.write_to(xml);
        }
        self.body.write_xml("w:body", xml)?;
        writer::close(xml, tag);
        Ok(())
    }
}

/// `w:body`: block content followed by the final section properties.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Body {
    pub content: ChildList<BlockContent>,
    /// Last section's `w:sectPr`, kept as parsed
    pub section: Option<XmlElement>,
}

impl FromXml for Body {
    fn from_xml(element: &XmlElement, options: &ParseOptions) -> Result<Self> {
        let content = ChildList::from_elements(
            element.elements().filter(|e| e.local_name() != "sectPr"),
            options,
        )?;
        Ok(Self {
            content,
            section: element.child("sectPr").cloned(),
        })
    }
}

impl ToXml for Body {
    fn write_xml(&self, tag: &str, xml: &mut String) -> Result<()> {
        writer::open(xml, tag);
        if self.content.is_empty() && self.section.is_none() {
            xml.push_str("/>");
            return Ok(());
        }
        xml.push('>');
        self.content.write_children(xml)?;
        if let Some(section) = &self.section {
            section.write_to(xml);
        }
        writer::close(xml, tag);
        Ok(())
    }
}
