//! Lightweight XML element tree.
//!
//! The typed WordprocessingML models are built from this tree rather than
//! straight from the event stream: a content model needs to look at one
//! child element at a time, and elements it does not know are kept in this
//! form so they can be written back untouched.

use super::XmlEnum;
use super::escape::escape_xml_into;
use crate::error::{Result, WmlError};
use crate::options::ParseOptions;
use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesStart, Event};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// An attribute as written in the source, qualified name included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XmlAttribute {
    pub name: String,
    pub value: String,
}

/// A child node of an [`XmlElement`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
}

/// An XML element with its attributes and mixed content.
///
/// Names are stored qualified (`w:p`, `w14:paraId`); lookups by local name
/// ignore the prefix.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct XmlElement {
    name: String,
    attributes: SmallVec<[XmlAttribute; 4]>,
    children: Vec<XmlNode>,
}

/// Strip the namespace prefix from a qualified name.
#[inline]
pub(crate) fn local_part(name: &str) -> &str {
    match memchr::memchr(b':', name.as_bytes()) {
        Some(idx) => &name[idx + 1..],
        None => name,
    }
}

#[inline]
fn is_namespace_declaration(name: &str) -> bool {
    name == "xmlns" || name.starts_with("xmlns:")
}

impl XmlElement {
    /// Create an empty element with a qualified name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: SmallVec::new(),
            children: Vec::new(),
        }
    }

    /// Builder form of [`set_attribute`](Self::set_attribute).
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Builder form of [`push_element`](Self::push_element).
    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.push_element(child);
        self
    }

    /// Builder form of [`push_text`](Self::push_text).
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.push_text(text);
        self
    }

    /// Qualified element name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Element name without its prefix.
    #[inline]
    pub fn local_name(&self) -> &str {
        local_part(&self.name)
    }

    #[inline]
    pub fn attributes(&self) -> &[XmlAttribute] {
        &self.attributes
    }

    /// Look up an attribute by local name.
    ///
    /// Namespace declarations are never matched.
    pub fn attribute(&self, local: &str) -> Option<&str> {
        self.attributes
            .iter()
            .filter(|a| !is_namespace_declaration(&a.name))
            .find(|a| local_part(&a.name) == local)
            .map(|a| a.value.as_str())
    }

    /// Attributes whose local name is not in `known`, in source order.
    ///
    /// Namespace declarations are always included. Typed models keep these
    /// so that attributes they do not model are written back.
    pub fn other_attributes(&self, known: &[&str]) -> Vec<XmlAttribute> {
        self.attributes
            .iter()
            .filter(|a| is_namespace_declaration(&a.name) || !known.contains(&local_part(&a.name)))
            .cloned()
            .collect()
    }

    /// The `w:val` attribute, the payload of most property elements.
    #[inline]
    pub fn val(&self) -> Option<&str> {
        self.attribute("val")
    }

    /// Set an attribute by qualified name, replacing an existing one.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|a| a.name == name) {
            Some(existing) => existing.value = value,
            None => self.attributes.push(XmlAttribute { name, value }),
        }
    }

    #[inline]
    pub fn children(&self) -> &[XmlNode] {
        &self.children
    }

    #[inline]
    pub fn children_mut(&mut self) -> &mut Vec<XmlNode> {
        &mut self.children
    }

    /// Child elements in document order, text nodes skipped.
    pub fn elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(e) => Some(e),
            XmlNode::Text(_) => None,
        })
    }

    /// First child element with the given local name.
    pub fn child(&self, local: &str) -> Option<&XmlElement> {
        self.elements().find(|e| e.local_name() == local)
    }

    /// All child elements with the given local name.
    pub fn children_named<'a>(&'a self, local: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.elements().filter(move |e| e.local_name() == local)
    }

    pub fn push_element(&mut self, child: XmlElement) {
        self.children.push(XmlNode::Element(child));
    }

    /// Append text, merging with a trailing text node.
    pub fn push_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        match self.children.last_mut() {
            Some(XmlNode::Text(existing)) => existing.push_str(&text),
            _ => self.children.push(XmlNode::Text(text)),
        }
    }

    /// Concatenated direct text content.
    pub fn text(&self) -> String {
        let mut result = String::new();
        for node in &self.children {
            if let XmlNode::Text(t) = node {
                result.push_str(t);
            }
        }
        result
    }

    /// Parse an XML document and return its root element.
    ///
    /// Comments, processing instructions and the declaration are dropped.
    /// Text is kept verbatim, whitespace included, with entity and character
    /// references resolved.
    pub fn parse(xml: &[u8], options: &ParseOptions) -> Result<Self> {
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(false);

        let mut stack: Vec<XmlElement> = Vec::with_capacity(16);
        let mut root: Option<XmlElement> = None;
        let mut buf = Vec::with_capacity(1024);

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => {
                    if stack.len() >= options.max_depth {
                        return Err(WmlError::DepthLimit(options.max_depth));
                    }
                    stack.push(Self::from_start(&e)?);
                },
                Event::Empty(e) => {
                    if stack.len() >= options.max_depth {
                        return Err(WmlError::DepthLimit(options.max_depth));
                    }
                    let element = Self::from_start(&e)?;
                    Self::attach(&mut stack, &mut root, element)?;
                },
                Event::End(_) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| WmlError::Xml("unbalanced end tag".to_string()))?;
                    Self::attach(&mut stack, &mut root, element)?;
                },
                Event::Text(e) => {
                    if let Some(parent) = stack.last_mut() {
                        let text = e.decode().map_err(|err| WmlError::Xml(err.to_string()))?;
                        parent.push_text(text);
                    }
                },
                Event::CData(e) => {
                    if let Some(parent) = stack.last_mut() {
                        parent.push_text(String::from_utf8_lossy(&e).into_owned());
                    }
                },
                Event::GeneralRef(e) => {
                    if let Some(parent) = stack.last_mut() {
                        if let Some(ch) = e.resolve_char_ref()? {
                            parent.push_text(ch.to_string());
                        } else {
                            let name = e.decode().map_err(|err| WmlError::Xml(err.to_string()))?;
                            let resolved = resolve_predefined_entity(&name).ok_or_else(|| {
                                WmlError::Xml(format!("unknown entity &{};", name))
                            })?;
                            parent.push_text(resolved);
                        }
                    }
                },
                Event::Eof => break,
                _ => {},
            }
            buf.clear();
        }

        if !stack.is_empty() {
            return Err(WmlError::Xml("unexpected end of document".to_string()));
        }
        root.ok_or_else(|| WmlError::Xml("document has no root element".to_string()))
    }

    fn from_start(start: &BytesStart<'_>) -> Result<Self> {
        let qname = start.name();
        let name = std::str::from_utf8(qname.as_ref())
            .map_err(|_| WmlError::Xml("Invalid UTF-8 in element name".to_string()))?;
        let mut element = Self::new(name);

        for attr in start.attributes() {
            let attr = attr?;
            let key = std::str::from_utf8(attr.key.as_ref())
                .map_err(|_| WmlError::Xml("Invalid UTF-8 in attribute name".to_string()))?;
            let value = attr.unescape_value()?;
            element.attributes.push(XmlAttribute {
                name: key.to_string(),
                value: value.into_owned(),
            });
        }

        Ok(element)
    }

    fn attach(
        stack: &mut [XmlElement],
        root: &mut Option<XmlElement>,
        element: XmlElement,
    ) -> Result<()> {
        match stack.last_mut() {
            Some(parent) => parent.push_element(element),
            None if root.is_none() => *root = Some(element),
            None => return Err(WmlError::Xml("multiple root elements".to_string())),
        }
        Ok(())
    }

    /// Serialize this element, its attributes and its content.
    pub fn write_to(&self, xml: &mut String) {
        xml.push('<');
        xml.push_str(&self.name);
        super::writer::push_attributes(xml, &self.attributes);
        if self.children.is_empty() {
            xml.push_str("/>");
            return;
        }
        xml.push('>');
        for node in &self.children {
            match node {
                XmlNode::Element(e) => e.write_to(xml),
                XmlNode::Text(t) => escape_xml_into(xml, t),
            }
        }
        xml.push_str("</");
        xml.push_str(&self.name);
        xml.push('>');
    }

    /// Serialize to a new string.
    pub fn to_xml_string(&self) -> String {
        let mut xml = String::with_capacity(256);
        self.write_to(&mut xml);
        xml
    }
}

/// Typed attribute access.
///
/// Every getter returns `Ok(None)` for an absent attribute. A value outside
/// the attribute's simple type is an error under
/// [`ParseOptions::strict_attributes`], otherwise it is logged and treated
/// as absent.
impl XmlElement {
    fn reject<T>(&self, local: &str, raw: &str, options: &ParseOptions) -> Result<Option<T>> {
        if options.strict_attributes {
            return Err(WmlError::invalid_attribute(&self.name, local, raw));
        }
        tracing::debug!(
            element = %self.name,
            attribute = local,
            value = raw,
            "ignoring attribute value outside its simple type"
        );
        Ok(None)
    }

    /// Attribute as an owned string.
    #[inline]
    pub fn attr_string(&self, local: &str) -> Option<String> {
        self.attribute(local).map(str::to_string)
    }

    /// Attribute converted by `parse`; `None` from `parse` counts as a value
    /// outside the attribute's type.
    pub fn attr_with<T>(
        &self,
        local: &str,
        options: &ParseOptions,
        parse: impl FnOnce(&str) -> Option<T>,
    ) -> Result<Option<T>> {
        let Some(raw) = self.attribute(local) else {
            return Ok(None);
        };
        match parse(raw) {
            Some(v) => Ok(Some(v)),
            None => self.reject(local, raw, options),
        }
    }

    pub fn attr_u32(&self, local: &str, options: &ParseOptions) -> Result<Option<u32>> {
        let Some(raw) = self.attribute(local) else {
            return Ok(None);
        };
        match atoi_simd::parse::<u32, false, false>(raw.trim().as_bytes()) {
            Ok(v) => Ok(Some(v)),
            Err(_) => self.reject(local, raw, options),
        }
    }

    pub fn attr_i32(&self, local: &str, options: &ParseOptions) -> Result<Option<i32>> {
        let Some(raw) = self.attribute(local) else {
            return Ok(None);
        };
        match atoi_simd::parse::<i32, false, false>(raw.trim().as_bytes()) {
            Ok(v) => Ok(Some(v)),
            Err(_) => self.reject(local, raw, options),
        }
    }

    /// `ST_OnOff` attribute.
    pub fn attr_on_off(&self, local: &str, options: &ParseOptions) -> Result<Option<bool>> {
        let Some(raw) = self.attribute(local) else {
            return Ok(None);
        };
        match parse_on_off(raw) {
            Some(v) => Ok(Some(v)),
            None => self.reject(local, raw, options),
        }
    }

    pub fn attr_enum<E: XmlEnum>(&self, local: &str, options: &ParseOptions) -> Result<Option<E>> {
        let Some(raw) = self.attribute(local) else {
            return Ok(None);
        };
        match E::from_xml(raw) {
            Some(v) => Ok(Some(v)),
            None => self.reject(local, raw, options),
        }
    }

    /// An attribute that the schema requires.
    pub fn required_u32(&self, local: &str, options: &ParseOptions) -> Result<u32> {
        self.attr_u32(local, options)?
            .ok_or_else(|| WmlError::missing_attribute(&self.name, local))
    }

    pub fn required_i32(&self, local: &str, options: &ParseOptions) -> Result<i32> {
        self.attr_i32(local, options)?
            .ok_or_else(|| WmlError::missing_attribute(&self.name, local))
    }

    /// `w:val` of the child element `local`.
    pub fn child_val(&self, local: &str) -> Option<String> {
        self.child(local).and_then(|c| c.attr_string("val"))
    }

    pub fn child_val_u32(&self, local: &str, options: &ParseOptions) -> Result<Option<u32>> {
        match self.child(local) {
            Some(c) => c.attr_u32("val", options),
            None => Ok(None),
        }
    }

    pub fn child_val_i32(&self, local: &str, options: &ParseOptions) -> Result<Option<i32>> {
        match self.child(local) {
            Some(c) => c.attr_i32("val", options),
            None => Ok(None),
        }
    }

    pub fn child_val_enum<E: XmlEnum>(
        &self,
        local: &str,
        options: &ParseOptions,
    ) -> Result<Option<E>> {
        match self.child(local) {
            Some(c) => c.attr_enum("val", options),
            None => Ok(None),
        }
    }

    /// `CT_OnOff` child: present without `w:val` means on.
    pub fn child_on_off(&self, local: &str, options: &ParseOptions) -> Result<Option<bool>> {
        match self.child(local) {
            Some(c) => Ok(Some(c.attr_on_off("val", options)?.unwrap_or(true))),
            None => Ok(None),
        }
    }
}

/// Parse an `ST_OnOff` value.
pub(crate) fn parse_on_off(raw: &str) -> Option<bool> {
    match raw {
        "true" | "1" | "on" => Some(true),
        "false" | "0" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(xml: &str) -> XmlElement {
        XmlElement::parse(xml.as_bytes(), &ParseOptions::default()).unwrap()
    }

    #[test]
    fn test_parse_tree() {
        let root = parse(
            r#"<?xml version="1.0"?><w:p w:rsidR="00A1"><w:r><w:t>Hi</w:t></w:r><w:bookmarkEnd w:id="3"/></w:p>"#,
        );

        assert_eq!(root.name(), "w:p");
        assert_eq!(root.local_name(), "p");
        assert_eq!(root.attribute("rsidR"), Some("00A1"));
        assert_eq!(root.elements().count(), 2);

        let t = root.child("r").and_then(|r| r.child("t")).unwrap();
        assert_eq!(t.text(), "Hi");
        assert_eq!(root.child("bookmarkEnd").unwrap().attribute("id"), Some("3"));
    }

    #[test]
    fn test_references_are_resolved_into_one_text_node() {
        let root = parse("<w:t>Fish &amp; Chips &#x41;&#66;</w:t>");
        assert_eq!(root.children().len(), 1);
        assert_eq!(root.text(), "Fish & Chips AB");
    }

    #[test]
    fn test_unknown_entity_is_an_error() {
        let err = XmlElement::parse(b"<a>&nbsp;</a>", &ParseOptions::default());
        assert!(matches!(err, Err(WmlError::Xml(_))));
    }

    #[test]
    fn test_invalid_character_reference_is_an_error() {
        let err = XmlElement::parse(b"<a>&#xD800;</a>", &ParseOptions::default());
        assert!(matches!(err, Err(WmlError::Xml(_))));
    }

    #[test]
    fn test_other_attributes() {
        let root = parse(r#"<w:p xmlns:w14="urn:w14" w:rsidR="1" w14:paraId="AB" w:rsidP="2"/>"#);
        let other = root.other_attributes(&["rsidR", "paraId"]);
        let names: Vec<&str> = other.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["xmlns:w14", "w:rsidP"]);
    }

    #[test]
    fn test_whitespace_is_kept() {
        let root = parse(r#"<w:t xml:space="preserve">  two  </w:t>"#);
        assert_eq!(root.text(), "  two  ");
        assert_eq!(root.attribute("space"), Some("preserve"));
    }

    #[test]
    fn test_namespace_declarations_are_not_attributes() {
        let root = parse(r#"<w:document xmlns:w="urn:w" w:w="1"/>"#);
        assert_eq!(root.attribute("w"), Some("1"));
    }

    #[test]
    fn test_depth_limit() {
        let options = ParseOptions::new().with_max_depth(2);
        assert!(XmlElement::parse(b"<a><b/></a>", &options).is_ok());
        let err = XmlElement::parse(b"<a><b><c/></b></a>", &options);
        assert!(matches!(err, Err(WmlError::DepthLimit(2))));
    }

    #[test]
    fn test_malformed_input() {
        let options = ParseOptions::default();
        assert!(XmlElement::parse(b"<a><b></a>", &options).is_err());
        assert!(XmlElement::parse(b"<a>", &options).is_err());
        assert!(XmlElement::parse(b"", &options).is_err());
    }

    #[test]
    fn test_write_round_trip() {
        let source = r#"<w:sectPr w:rsidR="1"><w:pgSz w:w="12240" w:h="15840"/><w:x>a &lt; b</w:x></w:sectPr>"#;
        let root = parse(source);
        let written = root.to_xml_string();
        assert_eq!(written, source);
        assert_eq!(parse(&written), root);
    }

    #[test]
    fn test_typed_attributes() {
        let options = ParseOptions::default();
        let e = XmlElement::new("w:ind")
            .with_attribute("w:left", "720")
            .with_attribute("w:hanging", "-360")
            .with_attribute("w:bad", "x1");

        assert_eq!(e.attr_u32("left", &options).unwrap(), Some(720));
        assert_eq!(e.attr_i32("hanging", &options).unwrap(), Some(-360));
        assert_eq!(e.attr_u32("missing", &options).unwrap(), None);
        assert!(matches!(
            e.attr_u32("bad", &options),
            Err(WmlError::InvalidAttribute { .. })
        ));

        let lenient = ParseOptions::new().with_strict_attributes(false);
        assert_eq!(e.attr_u32("bad", &lenient).unwrap(), None);
    }

    #[test]
    fn test_on_off_child() {
        let options = ParseOptions::default();
        let rpr = parse(r#"<w:rPr><w:b/><w:i w:val="0"/><w:caps w:val="true"/></w:rPr>"#);

        assert_eq!(rpr.child_on_off("b", &options).unwrap(), Some(true));
        assert_eq!(rpr.child_on_off("i", &options).unwrap(), Some(false));
        assert_eq!(rpr.child_on_off("caps", &options).unwrap(), Some(true));
        assert_eq!(rpr.child_on_off("strike", &options).unwrap(), None);
    }
}
