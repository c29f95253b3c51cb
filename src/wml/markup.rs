/// Range markup: bookmarks, comment ranges, editing permissions, proofing
/// marks and revision information.
///
/// These elements mark positions rather than carry content, and appear in
/// nearly every content model (block, paragraph, table, row).
use super::enums::ProofErrType;
use crate::common::xml::{FromXml, ToXml, XmlElement, writer};
use crate::error::{Result, WmlError};
use crate::options::ParseOptions;
use serde::{Deserialize, Serialize};

/// Start of a bookmark (`w:bookmarkStart`, `CT_Bookmark`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    /// Pairs this start with its `w:bookmarkEnd`
    pub id: i32,
    pub name: String,
    /// First table column covered, for column bookmarks
    pub col_first: Option<i32>,
    pub col_last: Option<i32>,
    pub displaced_by_custom_xml: Option<String>,
}

impl Bookmark {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            col_first: None,
            col_last: None,
            displaced_by_custom_xml: None,
        }
    }
}

impl FromXml for Bookmark {
    fn from_xml(element: &XmlElement, options: &ParseOptions) -> Result<Self> {
        Ok(Self {
            id: element.required_i32("id", options)?,
            name: element
                .attr_string("name")
                .ok_or_else(|| WmlError::missing_attribute(element.name(), "name"))?,
            col_first: element.attr_i32("colFirst", options)?,
            col_last: element.attr_i32("colLast", options)?,
            displaced_by_custom_xml: element.attr_string("displacedByCustomXml"),
        })
    }
}

impl ToXml for Bookmark {
    fn write_xml(&self, tag: &str, xml: &mut String) -> Result<()> {
        writer::open(xml, tag);
        writer::push_int_attr(xml, "w:id", self.id);
        writer::push_attr(xml, "w:name", &self.name);
        writer::push_opt_int_attr(xml, "w:colFirst", self.col_first);
        writer::push_opt_int_attr(xml, "w:colLast", self.col_last);
        writer::push_opt_attr(
            xml,
            "w:displacedByCustomXml",
            self.displaced_by_custom_xml.as_deref(),
        );
        xml.push_str("/>");
        Ok(())
    }
}

/// A range boundary identified only by id (`CT_MarkupRange`).
///
/// Written as `w:bookmarkEnd`, `w:commentRangeStart` or
/// `w:commentRangeEnd` depending on where it sits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkupRange {
    pub id: i32,
    pub displaced_by_custom_xml: Option<String>,
}

impl MarkupRange {
    pub fn new(id: i32) -> Self {
        Self {
            id,
            displaced_by_custom_xml: None,
        }
    }
}

impl FromXml for MarkupRange {
    fn from_xml(element: &XmlElement, options: &ParseOptions) -> Result<Self> {
        Ok(Self {
            id: element.required_i32("id", options)?,
            displaced_by_custom_xml: element.attr_string("displacedByCustomXml"),
        })
    }
}

impl ToXml for MarkupRange {
    fn write_xml(&self, tag: &str, xml: &mut String) -> Result<()> {
        writer::open(xml, tag);
        writer::push_int_attr(xml, "w:id", self.id);
        writer::push_opt_attr(
            xml,
            "w:displacedByCustomXml",
            self.displaced_by_custom_xml.as_deref(),
        );
        xml.push_str("/>");
        Ok(())
    }
}

/// Start of an editable range in a protected document (`w:permStart`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermStart {
    pub id: String,
    /// Editor group allowed to edit (`everyone`, `editors`, ...)
    pub editor_group: Option<String>,
    /// Single user allowed to edit
    pub editor: Option<String>,
    pub col_first: Option<i32>,
    pub col_last: Option<i32>,
}

impl FromXml for PermStart {
    fn from_xml(element: &XmlElement, options: &ParseOptions) -> Result<Self> {
        Ok(Self {
            id: element
                .attr_string("id")
                .ok_or_else(|| WmlError::missing_attribute(element.name(), "id"))?,
            editor_group: element.attr_string("edGrp"),
            editor: element.attr_string("ed"),
            col_first: element.attr_i32("colFirst", options)?,
            col_last: element.attr_i32("colLast", options)?,
        })
    }
}

impl ToXml for PermStart {
    fn write_xml(&self, tag: &str, xml: &mut String) -> Result<()> {
        writer::open(xml, tag);
        writer::push_attr(xml, "w:id", &self.id);
        writer::push_opt_attr(xml, "w:edGrp", self.editor_group.as_deref());
        writer::push_opt_attr(xml, "w:ed", self.editor.as_deref());
        writer::push_opt_int_attr(xml, "w:colFirst", self.col_first);
        writer::push_opt_int_attr(xml, "w:colLast", self.col_last);
        xml.push_str("/>");
        Ok(())
    }
}

/// End of an editable range (`w:permEnd`, `CT_Perm`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermEnd {
    pub id: String,
}

impl FromXml for PermEnd {
    fn from_xml(element: &XmlElement, _options: &ParseOptions) -> Result<Self> {
        Ok(Self {
            id: element
                .attr_string("id")
                .ok_or_else(|| WmlError::missing_attribute(element.name(), "id"))?,
        })
    }
}

impl ToXml for PermEnd {
    fn write_xml(&self, tag: &str, xml: &mut String) -> Result<()> {
        writer::open(xml, tag);
        writer::push_attr(xml, "w:id", &self.id);
        xml.push_str("/>");
        Ok(())
    }
}

/// Boundary of a spelling or grammar error (`w:proofErr`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofErr {
    pub kind: ProofErrType,
}

impl FromXml for ProofErr {
    fn from_xml(element: &XmlElement, options: &ParseOptions) -> Result<Self> {
        let kind = element
            .attr_enum("type", options)?
            .ok_or_else(|| WmlError::missing_attribute(element.name(), "type"))?;
        Ok(Self { kind })
    }
}

impl ToXml for ProofErr {
    fn write_xml(&self, tag: &str, xml: &mut String) -> Result<()> {
        writer::open(xml, tag);
        writer::push_attr(xml, "w:type", self.kind.to_xml());
        xml.push_str("/>");
        Ok(())
    }
}

/// Revision attributes shared by insertions and deletions (`CT_TrackChange`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackChange {
    pub id: i32,
    pub author: String,
    /// ISO 8601 timestamp as written
    pub date: Option<String>,
}

impl TrackChange {
    pub fn new(id: i32, author: impl Into<String>) -> Self {
        Self {
            id,
            author: author.into(),
            date: None,
        }
    }

    pub(crate) fn read(element: &XmlElement, options: &ParseOptions) -> Result<Self> {
        Ok(Self {
            id: element.required_i32("id", options)?,
            author: element
                .attr_string("author")
                .ok_or_else(|| WmlError::missing_attribute(element.name(), "author"))?,
            date: element.attr_string("date"),
        })
    }

    /// Write the attributes into an open start tag.
    pub(crate) fn push_attrs(&self, xml: &mut String) {
        writer::push_int_attr(xml, "w:id", self.id);
        writer::push_attr(xml, "w:author", &self.author);
        writer::push_opt_attr(xml, "w:date", self.date.as_deref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(xml: &str) -> XmlElement {
        XmlElement::parse(xml.as_bytes(), &ParseOptions::default()).unwrap()
    }

    #[test]
    fn test_bookmark_round_trip() {
        let source = r#"<w:bookmarkStart w:id="0" w:name="_Toc1" w:colFirst="1" w:colLast="2"/>"#;
        let bookmark = Bookmark::from_xml(&element(source), &ParseOptions::default()).unwrap();
        assert_eq!(bookmark.id, 0);
        assert_eq!(bookmark.name, "_Toc1");
        assert_eq!(bookmark.col_last, Some(2));

        let mut xml = String::new();
        bookmark.write_xml("w:bookmarkStart", &mut xml).unwrap();
        assert_eq!(xml, source);
    }

    #[test]
    fn test_bookmark_requires_name() {
        let err = Bookmark::from_xml(&element(r#"<w:bookmarkStart w:id="1"/>"#), &ParseOptions::default());
        assert!(matches!(err, Err(WmlError::MissingAttribute { .. })));
    }

    #[test]
    fn test_markup_range_tag_is_supplied_by_caller() {
        let range = MarkupRange::new(4);
        let mut xml = String::new();
        range.write_xml("w:commentRangeStart", &mut xml).unwrap();
        range.write_xml("w:bookmarkEnd", &mut xml).unwrap();
        assert_eq!(
            xml,
            r#"<w:commentRangeStart w:id="4"/><w:bookmarkEnd w:id="4"/>"#
        );
    }

    #[test]
    fn test_proof_err() {
        let options = ParseOptions::default();
        let proof = ProofErr::from_xml(&element(r#"<w:proofErr w:type="gramEnd"/>"#), &options).unwrap();
        assert_eq!(proof.kind, ProofErrType::GramEnd);

        let bad = ProofErr::from_xml(&element(r#"<w:proofErr w:type="typo"/>"#), &options);
        assert!(matches!(bad, Err(WmlError::InvalidAttribute { .. })));
    }

    #[test]
    fn test_perm_start() {
        let options = ParseOptions::default();
        let perm = PermStart::from_xml(
            &element(r#"<w:permStart w:id="12" w:edGrp="everyone"/>"#),
            &options,
        )
        .unwrap();
        assert_eq!(perm.id, "12");
        assert_eq!(perm.editor_group.as_deref(), Some("everyone"));
        assert!(perm.editor.is_none());
    }
}
