/// Custom XML and smart tag wrappers (`w:customXml`, `w:smartTag`).
///
/// [`CustomXml`] is generic over the content model it wraps, so one type
/// serves block, table, row and paragraph contexts.
use super::children::{ChildElement, ChildList};
use crate::common::xml::{FromXml, ToXml, XmlElement, writer};
use crate::error::Result;
use crate::options::ParseOptions;
use serde::{Deserialize, Serialize};

/// Custom XML markup wrapping content (`w:customXml`, `w:smartTag`).
///
/// Generic over the content model it wraps, like [`Sdt`](super::Sdt).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomXml<C> {
    /// Namespace of the custom element
    pub uri: Option<String>,
    /// Name of the custom element
    pub element: String,
    /// `w:customXmlPr` / `w:smartTagPr`, kept as parsed
    pub properties: Option<XmlElement>,
    pub content: ChildList<C>,
}

impl<C> CustomXml<C> {
    pub fn new(element: impl Into<String>) -> Self {
        Self {
            uri: None,
            element: element.into(),
            properties: None,
            content: ChildList::new(),
        }
    }
}

impl<C: ChildElement> FromXml for CustomXml<C> {
    fn from_xml(element: &XmlElement, options: &ParseOptions) -> Result<Self> {
        let properties = element
            .elements()
            .find(|e| matches!(e.local_name(), "customXmlPr" | "smartTagPr"));
        let content = ChildList::from_elements(
            element
                .elements()
                .filter(|e| !matches!(e.local_name(), "customXmlPr" | "smartTagPr")),
            options,
        )?;
        Ok(Self {
            uri: element.attr_string("uri"),
            element: element.attr_string("element").unwrap_or_default(),
            properties: properties.cloned(),
            content,
        })
    }
}

impl<C: ChildElement> ToXml for CustomXml<C> {
    fn write_xml(&self, tag: &str, xml: &mut String) -> Result<()> {
        writer::open(xml, tag);
        writer::push_opt_attr(xml, "w:uri", self.uri.as_deref());
        writer::push_attr(xml, "w:element", &self.element);
        if self.properties.is_none() && self.content.is_empty() {
            xml.push_str("/>");
            return Ok(());
        }
        xml.push('>');
        if let Some(pr) = &self.properties {
            pr.write_to(xml);
        }
        self.content.write_children(xml)?;
        writer::close(xml, tag);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wml::paragraph::{Paragraph, ParagraphContent, ParagraphContentKind};

    #[test]
    fn test_smart_tag_in_paragraph() {
        let options = ParseOptions::default();
        let source = r#"<w:p><w:smartTag w:uri="urn:schemas-microsoft-com:office:smarttags" w:element="City"><w:smartTagPr><w:attr w:name="x" w:val="1"/></w:smartTagPr><w:r><w:t>Oslo</w:t></w:r></w:smartTag></w:p>"#;
        let element = XmlElement::parse(source.as_bytes(), &options).unwrap();
        let para = Paragraph::from_xml(&element, &options).unwrap();

        assert_eq!(para.text(), "Oslo");
        match para.content.get(ParagraphContentKind::SmartTag, 0) {
            Some(ParagraphContent::SmartTag(tag)) => {
                assert_eq!(tag.element, "City");
                assert!(tag.properties.is_some());
                assert_eq!(tag.content.len(), 1);
            },
            other => panic!("unexpected child: {:?}", other),
        }

        let mut xml = String::new();
        para.write_xml("w:p", &mut xml).unwrap();
        assert_eq!(xml, source);
    }

    #[test]
    fn test_empty_custom_xml() {
        let custom: CustomXml<ParagraphContent> = CustomXml::new("invoice");
        let mut xml = String::new();
        custom.write_xml("w:customXml", &mut xml).unwrap();
        assert_eq!(xml, r#"<w:customXml w:element="invoice"/>"#);
    }
}
