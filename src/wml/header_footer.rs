/// Header and footer parts (`word/header*.xml`, `word/footer*.xml`).
///
/// Headers and footers hold block content just like the document body.
/// Which pages a part applies to is decided by the section that references
/// it; [`section_references`] reads those references from a `w:sectPr`.
use super::block::BlockContent;
use super::children::ChildList;
use super::enums::HeaderFooterType;
use super::paragraph::Paragraph;
use super::part;
use crate::common::xml::{FromXml, ToXml, XmlAttribute, XmlElement, writer};
use crate::error::{Result, WmlError};
use crate::options::{ParseOptions, WriteOptions};
use serde::{Deserialize, Serialize};

/// Whether a part is a header or a footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeaderFooterKind {
    Header,
    Footer,
}

impl HeaderFooterKind {
    /// Qualified root element name.
    pub fn root_tag(self) -> &'static str {
        match self {
            Self::Header => "w:hdr",
            Self::Footer => "w:ftr",
        }
    }

    fn from_local_name(name: &str) -> Option<Self> {
        match name {
            "hdr" => Some(Self::Header),
            "ftr" => Some(Self::Footer),
            _ => None,
        }
    }
}

/// A header or footer part.
///
/// # Example
///
/// ```rust
/// use litchi_wml::wml::{HeaderFooter, HeaderFooterKind, Paragraph};
///
/// # fn main() -> Result<(), litchi_wml::WmlError> {
/// let mut footer = HeaderFooter::new(HeaderFooterKind::Footer);
/// footer.content.push(Paragraph::with_text("Confidential").into());
///
/// let xml = footer.to_xml_string()?;
/// let parsed = HeaderFooter::from_xml_bytes(xml.as_bytes())?;
/// assert_eq!(parsed.kind, HeaderFooterKind::Footer);
/// assert_eq!(parsed.text(), "Confidential");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderFooter {
    pub kind: HeaderFooterKind,
    /// Root attributes as read, namespace declarations included
    pub attributes: Vec<XmlAttribute>,
    pub content: ChildList<BlockContent>,
}

impl HeaderFooter {
    pub fn new(kind: HeaderFooterKind) -> Self {
        Self {
            kind,
            attributes: Vec::new(),
            content: ChildList::new(),
        }
    }

    /// Parse a `w:hdr` or `w:ftr` part with default options.
    pub fn from_xml_bytes(xml: &[u8]) -> Result<Self> {
        Self::from_xml_bytes_with(xml, &ParseOptions::default())
    }

    pub fn from_xml_bytes_with(xml: &[u8], options: &ParseOptions) -> Result<Self> {
        tracing::trace!(bytes = xml.len(), "parsing header/footer part");
        let root = XmlElement::parse(xml, options)?;
        Self::from_xml(&root, options)
    }

    pub fn to_xml_string(&self) -> Result<String> {
        self.to_xml_string_with(&WriteOptions::default())
    }

    pub fn to_xml_string_with(&self, options: &WriteOptions) -> Result<String> {
        let mut xml = String::with_capacity(1024);
        part::write_declaration(&mut xml, options);
        self.write_xml(self.kind.root_tag(), &mut xml)?;
        Ok(xml)
    }

    /// Direct paragraphs, in order.
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> + '_ {
        self.content.paragraphs()
    }

    /// Visible text, one line per paragraph.
    pub fn text(&self) -> String {
        self.content.text()
    }
}

impl FromXml for HeaderFooter {
    fn from_xml(element: &XmlElement, options: &ParseOptions) -> Result<Self> {
        let kind = HeaderFooterKind::from_local_name(element.local_name()).ok_or_else(|| {
            WmlError::UnexpectedElement {
                expected: "w:hdr or w:ftr".to_string(),
                got: element.name().to_string(),
            }
        })?;
        Ok(Self {
            kind,
            attributes: element.attributes().to_vec(),
            content: ChildList::from_children(element, options)?,
        })
    }
}

impl ToXml for HeaderFooter {
    fn write_xml(&self, tag: &str, xml: &mut String) -> Result<()> {
        part::open_root(xml, tag, &self.attributes);
        xml.push('>');
        self.content.write_children(xml)?;
        writer::close(xml, tag);
        Ok(())
    }
}

/// A `w:headerReference` / `w:footerReference` of a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionReference {
    pub kind: HeaderFooterKind,
    pub page_type: HeaderFooterType,
    /// Relationship id of the referenced part (`r:id`)
    pub relationship_id: String,
}

/// Header and footer references of a `w:sectPr`, in document order.
///
/// A reference without `w:type` applies to the default pages.
pub fn section_references(
    section: &XmlElement,
    options: &ParseOptions,
) -> Result<Vec<SectionReference>> {
    let mut references = Vec::new();
    for element in section.elements() {
        let kind = match element.local_name() {
            "headerReference" => HeaderFooterKind::Header,
            "footerReference" => HeaderFooterKind::Footer,
            _ => continue,
        };
        let relationship_id = element
            .attr_string("id")
            .ok_or_else(|| WmlError::missing_attribute(element.name(), "r:id"))?;
        references.push(SectionReference {
            kind,
            page_type: element
                .attr_enum("type", options)?
                .unwrap_or(HeaderFooterType::Default),
            relationship_id,
        });
    }
    Ok(references)
}
