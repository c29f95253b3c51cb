/// Structured document tags (content controls, `w:sdt`).
///
/// The same element wraps block content, run content, rows or cells
/// depending on where it sits, so [`Sdt`] is generic over the content
/// model of its `w:sdtContent`.
use super::children::{ChildElement, ChildList};
use super::enums::SdtLock;
use super::run::RunProperties;
use crate::common::xml::{FromXml, ToXml, XmlElement, writer};
use crate::error::Result;
use crate::options::ParseOptions;
use serde::{Deserialize, Serialize};

/// A content control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sdt<C> {
    pub properties: Option<SdtProperties>,
    /// `w:sdtEndPr`, kept as parsed
    pub end_properties: Option<XmlElement>,
    pub content: ChildList<C>,
}

impl<C> Default for Sdt<C> {
    fn default() -> Self {
        Self {
            properties: None,
            end_properties: None,
            content: ChildList::new(),
        }
    }
}

impl<C> Sdt<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A control with the given tag and type.
    pub fn with_tag(tag: impl Into<String>, kind: SdtType) -> Self {
        Self {
            properties: Some(SdtProperties {
                tag: Some(tag.into()),
                kind: Some(kind),
                ..SdtProperties::default()
            }),
            ..Self::default()
        }
    }

    pub fn tag(&self) -> Option<&str> {
        self.properties.as_ref().and_then(|p| p.tag.as_deref())
    }

    /// Friendly name shown in the editor.
    pub fn alias(&self) -> Option<&str> {
        self.properties.as_ref().and_then(|p| p.alias.as_deref())
    }

    pub fn id(&self) -> Option<i32> {
        self.properties.as_ref().and_then(|p| p.id)
    }

    pub fn lock(&self) -> Option<SdtLock> {
        self.properties.as_ref().and_then(|p| p.lock)
    }

    pub fn kind(&self) -> Option<&SdtType> {
        self.properties.as_ref().and_then(|p| p.kind.as_ref())
    }

    /// Whether the content is the placeholder text rather than user input.
    pub fn is_showing_placeholder(&self) -> bool {
        self.properties
            .as_ref()
            .and_then(|p| p.showing_placeholder)
            .unwrap_or(false)
    }
}

impl<C: ChildElement> FromXml for Sdt<C> {
    fn from_xml(element: &XmlElement, options: &ParseOptions) -> Result<Self> {
        let properties = match element.child("sdtPr") {
            Some(pr) => Some(SdtProperties::from_xml(pr, options)?),
            None => None,
        };
        let content = match element.child("sdtContent") {
            Some(c) => ChildList::from_children(c, options)?,
            None => ChildList::new(),
        };
        Ok(Self {
            properties,
            end_properties: element.child("sdtEndPr").cloned(),
            content,
        })
    }
}

impl<C: ChildElement> ToXml for Sdt<C> {
    fn write_xml(&self, tag: &str, xml: &mut String) -> Result<()> {
        writer::open(xml, tag);
        xml.push('>');
        if let Some(pr) = &self.properties {
            pr.write_xml("w:sdtPr", xml)?;
        }
        if let Some(end) = &self.end_properties {
            end.write_to(xml);
        }
        if self.content.is_empty() {
            writer::write_empty(xml, "w:sdtContent");
        } else {
            xml.push_str("<w:sdtContent>");
            self.content.write_children(xml)?;
            xml.push_str("</w:sdtContent>");
        }
        writer::close(xml, tag);
        Ok(())
    }
}

/// An entry of a combo box or drop-down list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListItem {
    pub display_text: Option<String>,
    pub value: Option<String>,
}

/// Entries of `w:comboBox` / `w:dropDownList`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListControl {
    pub last_value: Option<String>,
    pub items: Vec<ListItem>,
}

impl ListControl {
    fn read(element: &XmlElement) -> Self {
        Self {
            last_value: element.attr_string("lastValue"),
            items: element
                .children_named("listItem")
                .map(|item| ListItem {
                    display_text: item.attr_string("displayText"),
                    value: item.attr_string("value"),
                })
                .collect(),
        }
    }

    fn write(&self, tag: &str, xml: &mut String) {
        writer::open(xml, tag);
        writer::push_opt_attr(xml, "w:lastValue", self.last_value.as_deref());
        if self.items.is_empty() {
            xml.push_str("/>");
            return;
        }
        xml.push('>');
        for item in &self.items {
            writer::open(xml, "w:listItem");
            writer::push_opt_attr(xml, "w:displayText", item.display_text.as_deref());
            writer::push_opt_attr(xml, "w:value", item.value.as_deref());
            xml.push_str("/>");
        }
        writer::close(xml, tag);
    }
}

/// Building-block gallery reference of `w:docPartObj` / `w:docPartList`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DocPartReference {
    pub gallery: Option<String>,
    pub category: Option<String>,
    pub unique: Option<bool>,
}

impl DocPartReference {
    fn read(element: &XmlElement, options: &ParseOptions) -> Result<Self> {
        Ok(Self {
            gallery: element.child_val("docPartGallery"),
            category: element.child_val("docPartCategory"),
            unique: element.child_on_off("docPartUnique", options)?,
        })
    }

    fn write(&self, tag: &str, xml: &mut String) {
        writer::open(xml, tag);
        xml.push('>');
        writer::write_opt_val(xml, "w:docPartGallery", self.gallery.as_deref());
        writer::write_opt_val(xml, "w:docPartCategory", self.category.as_deref());
        writer::write_opt_on_off(xml, "w:docPartUnique", self.unique);
        writer::close(xml, tag);
    }
}

/// What kind of control an SDT is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SdtType {
    RichText,
    PlainText {
        multi_line: Option<bool>,
    },
    Date {
        /// Current value as an ISO 8601 date-time
        full_date: Option<String>,
        format: Option<String>,
        /// Other date settings (`w:lid`, `w:calendar`, ...), kept as parsed
        extra: Vec<XmlElement>,
    },
    ComboBox(ListControl),
    DropDownList(ListControl),
    Picture,
    DocPartObject(DocPartReference),
    DocPartList(DocPartReference),
    Group,
    Citation,
    Bibliography,
    Equation,
}

const SDT_TYPE_NAMES: &[&str] = &[
    "richText",
    "text",
    "date",
    "comboBox",
    "dropDownList",
    "picture",
    "docPartObj",
    "docPartList",
    "group",
    "citation",
    "bibliography",
    "equation",
];

impl SdtType {
    /// Local name of the type element.
    pub fn element_name(&self) -> &'static str {
        match self {
            Self::RichText => "richText",
            Self::PlainText { .. } => "text",
            Self::Date { .. } => "date",
            Self::ComboBox(_) => "comboBox",
            Self::DropDownList(_) => "dropDownList",
            Self::Picture => "picture",
            Self::DocPartObject(_) => "docPartObj",
            Self::DocPartList(_) => "docPartList",
            Self::Group => "group",
            Self::Citation => "citation",
            Self::Bibliography => "bibliography",
            Self::Equation => "equation",
        }
    }

    fn read(element: &XmlElement, options: &ParseOptions) -> Result<Option<Self>> {
        let kind = match element.local_name() {
            "richText" => Self::RichText,
            "text" => Self::PlainText {
                multi_line: element.attr_on_off("multiLine", options)?,
            },
            "date" => Self::Date {
                full_date: element.attr_string("fullDate"),
                format: element.child_val("dateFormat"),
                extra: element
                    .elements()
                    .filter(|e| e.local_name() != "dateFormat")
                    .cloned()
                    .collect(),
            },
            "comboBox" => Self::ComboBox(ListControl::read(element)),
            "dropDownList" => Self::DropDownList(ListControl::read(element)),
            "picture" => Self::Picture,
            "docPartObj" => Self::DocPartObject(DocPartReference::read(element, options)?),
            "docPartList" => Self::DocPartList(DocPartReference::read(element, options)?),
            "group" => Self::Group,
            "citation" => Self::Citation,
            "bibliography" => Self::Bibliography,
            "equation" => Self::Equation,
            _ => return Ok(None),
        };
        Ok(Some(kind))
    }

    fn write(&self, xml: &mut String) {
        match self {
            Self::PlainText { multi_line } => {
                writer::open(xml, "w:text");
                writer::push_opt_on_off_attr(xml, "w:multiLine", *multi_line);
                xml.push_str("/>");
            },
            Self::Date {
                full_date,
                format,
                extra,
            } => {
                writer::open(xml, "w:date");
                writer::push_opt_attr(xml, "w:fullDate", full_date.as_deref());
                if format.is_none() && extra.is_empty() {
                    xml.push_str("/>");
                    return;
                }
                xml.push('>');
                writer::write_opt_val(xml, "w:dateFormat", format.as_deref());
                for element in extra {
                    element.write_to(xml);
                }
                writer::close(xml, "w:date");
            },
            Self::ComboBox(list) => list.write("w:comboBox", xml),
            Self::DropDownList(list) => list.write("w:dropDownList", xml),
            Self::DocPartObject(part) => part.write("w:docPartObj", xml),
            Self::DocPartList(part) => part.write("w:docPartList", xml),
            other => {
                xml.push_str("<w:");
                xml.push_str(other.element_name());
                xml.push_str("/>");
            },
        }
    }
}

/// Control settings (`w:sdtPr`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SdtProperties {
    /// Formatting applied to the content when the user types into it
    pub run_properties: Option<RunProperties>,
    pub alias: Option<String>,
    pub tag: Option<String>,
    pub id: Option<i32>,
    pub lock: Option<SdtLock>,
    /// Glossary document part holding the placeholder text
    pub placeholder: Option<String>,
    /// Remove the control once the user edits its content
    pub temporary: Option<bool>,
    pub showing_placeholder: Option<bool>,
    pub kind: Option<SdtType>,
    /// Settings without a typed field (`w:dataBinding`, `w14:checkbox`, ...)
    pub extra: Vec<XmlElement>,
}

const SDT_PROPERTY_NAMES: &[&str] = &[
    "rPr",
    "alias",
    "tag",
    "id",
    "lock",
    "placeholder",
    "temporary",
    "showingPlcHdr",
];

impl FromXml for SdtProperties {
    fn from_xml(element: &XmlElement, options: &ParseOptions) -> Result<Self> {
        let run_properties = match element.child("rPr") {
            Some(r) => Some(RunProperties::from_xml(r, options)?),
            None => None,
        };
        let type_element = element
            .elements()
            .find(|e| SDT_TYPE_NAMES.contains(&e.local_name()));
        let kind = match type_element {
            Some(e) => SdtType::read(e, options)?,
            None => None,
        };

        Ok(Self {
            run_properties,
            alias: element.child_val("alias"),
            tag: element.child_val("tag"),
            id: element.child_val_i32("id", options)?,
            lock: element.child_val_enum("lock", options)?,
            placeholder: element
                .child("placeholder")
                .and_then(|p| p.child_val("docPart")),
            temporary: element.child_on_off("temporary", options)?,
            showing_placeholder: element.child_on_off("showingPlcHdr", options)?,
            kind,
            extra: element
                .elements()
                .filter(|e| {
                    !SDT_PROPERTY_NAMES.contains(&e.local_name())
                        && !type_element.is_some_and(|t| std::ptr::eq(t, *e))
                })
                .cloned()
                .collect(),
        })
    }
}

impl ToXml for SdtProperties {
    fn write_xml(&self, tag: &str, xml: &mut String) -> Result<()> {
        writer::open(xml, tag);
        xml.push('>');
        if let Some(rpr) = &self.run_properties {
            rpr.write_xml("w:rPr", xml)?;
        }
        writer::write_opt_val(xml, "w:alias", self.alias.as_deref());
        writer::write_opt_val(xml, "w:tag", self.tag.as_deref());
        writer::write_opt_int_val(xml, "w:id", self.id);
        writer::write_opt_enum_val(xml, "w:lock", self.lock);
        if let Some(doc_part) = &self.placeholder {
            xml.push_str("<w:placeholder>");
            writer::write_val(xml, "w:docPart", doc_part);
            xml.push_str("</w:placeholder>");
        }
        writer::write_opt_on_off(xml, "w:temporary", self.temporary);
        writer::write_opt_on_off(xml, "w:showingPlcHdr", self.showing_placeholder);
        for element in &self.extra {
            element.write_to(xml);
        }
        if let Some(kind) = &self.kind {
            kind.write(xml);
        }
        writer::close(xml, tag);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wml::paragraph::{ParagraphContent, ParagraphContentKind};
    use crate::wml::run::Run;

    fn parse_sdt(xml: &str) -> Sdt<ParagraphContent> {
        let options = ParseOptions::default();
        let element = XmlElement::parse(xml.as_bytes(), &options).unwrap();
        Sdt::from_xml(&element, &options).unwrap()
    }

    fn write_sdt(sdt: &Sdt<ParagraphContent>) -> String {
        let mut xml = String::new();
        sdt.write_xml("w:sdt", &mut xml).unwrap();
        xml
    }

    #[test]
    fn test_drop_down_round_trip() {
        let source = r#"<w:sdt><w:sdtPr><w:alias w:val="Status"/><w:tag w:val="status"/><w:id w:val="-1207"/><w:lock w:val="sdtLocked"/><w:placeholder><w:docPart w:val="DefaultPlaceholder"/></w:placeholder><w:showingPlcHdr/><w:dropDownList w:lastValue="2"><w:listItem w:displayText="Open" w:value="1"/><w:listItem w:displayText="Closed" w:value="2"/></w:dropDownList></w:sdtPr><w:sdtEndPr><w:rPr><w:b/></w:rPr></w:sdtEndPr><w:sdtContent><w:r><w:t>Choose</w:t></w:r></w:sdtContent></w:sdt>"#;
        let sdt = parse_sdt(source);

        assert_eq!(sdt.alias(), Some("Status"));
        assert_eq!(sdt.tag(), Some("status"));
        assert_eq!(sdt.id(), Some(-1207));
        assert!(sdt.lock().is_some_and(SdtLock::locks_control));
        assert!(sdt.is_showing_placeholder());
        match sdt.kind() {
            Some(SdtType::DropDownList(list)) => {
                assert_eq!(list.items.len(), 2);
                assert_eq!(list.items[1].display_text.as_deref(), Some("Closed"));
            },
            other => panic!("unexpected type: {:?}", other),
        }
        assert!(sdt.end_properties.is_some());
        assert_eq!(sdt.content.count_of(ParagraphContentKind::Run), 1);

        let written = write_sdt(&sdt);
        assert_eq!(written, source);
    }

    #[test]
    fn test_date_control() {
        let sdt = parse_sdt(
            r#"<w:sdt><w:sdtPr><w:date w:fullDate="2024-03-01T00:00:00Z"><w:dateFormat w:val="M/d/yyyy"/><w:lid w:val="en-US"/></w:date></w:sdtPr><w:sdtContent/></w:sdt>"#,
        );
        match sdt.kind() {
            Some(SdtType::Date {
                full_date,
                format,
                extra,
            }) => {
                assert_eq!(full_date.as_deref(), Some("2024-03-01T00:00:00Z"));
                assert_eq!(format.as_deref(), Some("M/d/yyyy"));
                assert_eq!(extra.len(), 1);
            },
            other => panic!("unexpected type: {:?}", other),
        }
        assert!(sdt.content.is_empty());
    }

    #[test]
    fn test_w14_checkbox_is_extra() {
        let sdt = parse_sdt(
            r#"<w:sdt><w:sdtPr><w14:checkbox><w14:checked w14:val="1"/></w14:checkbox></w:sdtPr><w:sdtContent/></w:sdt>"#,
        );
        let pr = sdt.properties.as_ref().unwrap();
        assert!(pr.kind.is_none());
        assert_eq!(pr.extra.len(), 1);
        assert!(write_sdt(&sdt).contains("<w14:checkbox>"));
    }

    #[test]
    fn test_build_plain_text_control() {
        let mut sdt: Sdt<ParagraphContent> =
            Sdt::with_tag("customer", SdtType::PlainText { multi_line: None });
        sdt.content.push(ParagraphContent::Run(Run::with_text("ACME")));

        assert_eq!(
            write_sdt(&sdt),
            r#"<w:sdt><w:sdtPr><w:tag w:val="customer"/><w:text/></w:sdtPr><w:sdtContent><w:r><w:t>ACME</w:t></w:r></w:sdtContent></w:sdt>"#
        );
    }
}
