/// Numbering definitions (`word/numbering.xml`).
///
/// Lists are defined in two layers: abstract numbering definitions
/// (`w:abstractNum`) describe the levels, and numbering instances
/// (`w:num`) point paragraphs at an abstract definition, optionally
/// overriding individual levels.
use super::children::{ChildList, choice_content};
use super::enums::{Justification, LevelSuffix, MultiLevelType, NumberFormat};
use super::paragraph::ParagraphProperties;
use super::part;
use super::run::RunProperties;
use crate::common::xml::{FromXml, ToXml, XmlAttribute, XmlElement, writer};
use crate::error::{Result, WmlError};
use crate::options::{ParseOptions, WriteOptions};
use serde::{Deserialize, Serialize};

choice_content! {
    /// Children of `w:numbering`.
    pub enum NumberingContent, kind NumberingContentKind {
        PictureBullet(PictureBullet) = "numPicBullet",
        AbstractNum(AbstractNum) = "abstractNum",
        Num(Num) = "num",
        NumIdMacAtCleanup(DecimalNumber) = "numIdMacAtCleanup",
    }
}

/// The numbering part.
///
/// # Example
///
/// ```rust
/// use litchi_wml::wml::Numbering;
/// use litchi_wml::wml::enums::NumberFormat;
///
/// # fn main() -> Result<(), litchi_wml::WmlError> {
/// let xml = br#"<w:numbering xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
///   <w:abstractNum w:abstractNumId="0">
///     <w:lvl w:ilvl="0"><w:start w:val="1"/><w:numFmt w:val="decimal"/><w:lvlText w:val="%1."/></w:lvl>
///   </w:abstractNum>
///   <w:num w:numId="1"><w:abstractNumId w:val="0"/></w:num>
///   <w:num w:numId="2">
///     <w:abstractNumId w:val="0"/>
///     <w:lvlOverride w:ilvl="0"><w:startOverride w:val="5"/></w:lvlOverride>
///   </w:num>
/// </w:numbering>"#;
///
/// let numbering = Numbering::from_xml_bytes(xml)?;
/// assert_eq!(numbering.num_count(), 2);
/// assert_eq!(numbering.level(1, 0).and_then(|l| l.format), Some(NumberFormat::Decimal));
/// assert_eq!(numbering.start_at(1, 0), Some(1));
/// assert_eq!(numbering.start_at(2, 0), Some(5));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Numbering {
    /// Root attributes as read, namespace declarations included
    pub attributes: Vec<XmlAttribute>,
    pub content: ChildList<NumberingContent>,
}

impl Numbering {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_xml_bytes(xml: &[u8]) -> Result<Self> {
        Self::from_xml_bytes_with(xml, &ParseOptions::default())
    }

    pub fn from_xml_bytes_with(xml: &[u8], options: &ParseOptions) -> Result<Self> {
        let root = part::parse_root(xml, "numbering", options)?;
        Self::from_xml(&root, options)
    }

    pub fn to_xml_string(&self) -> Result<String> {
        self.to_xml_string_with(&WriteOptions::default())
    }

    pub fn to_xml_string_with(&self, options: &WriteOptions) -> Result<String> {
        let mut xml = String::with_capacity(2048);
        part::write_declaration(&mut xml, options);
        self.write_xml("w:numbering", &mut xml)?;
        Ok(xml)
    }

    /// Abstract definitions in document order.
    pub fn abstract_nums(&self) -> impl Iterator<Item = &AbstractNum> + '_ {
        self.content.iter().filter_map(|c| match c {
            NumberingContent::AbstractNum(a) => Some(a),
            _ => None,
        })
    }

    /// Numbering instances in document order.
    pub fn nums(&self) -> impl Iterator<Item = &Num> + '_ {
        self.content.iter().filter_map(|c| match c {
            NumberingContent::Num(n) => Some(n),
            _ => None,
        })
    }

    #[inline]
    pub fn abstract_num_count(&self) -> usize {
        self.content.count_of(NumberingContentKind::AbstractNum)
    }

    #[inline]
    pub fn num_count(&self) -> usize {
        self.content.count_of(NumberingContentKind::Num)
    }

    pub fn abstract_num(&self, id: u32) -> Option<&AbstractNum> {
        self.abstract_nums().find(|a| a.id == id)
    }

    pub fn num(&self, id: u32) -> Option<&Num> {
        self.nums().find(|n| n.id == id)
    }

    /// Abstract definition behind a numbering instance.
    ///
    /// A definition that only links to a numbering style (`w:numStyleLink`)
    /// is followed once to the definition carrying that `w:styleLink`.
    pub fn abstract_for(&self, num_id: u32) -> Option<&AbstractNum> {
        let abstract_num = self.abstract_num(self.num(num_id)?.abstract_num_id)?;
        match &abstract_num.num_style_link {
            Some(style) if abstract_num.levels.is_empty() => self
                .abstract_nums()
                .find(|a| a.style_link.as_deref() == Some(style.as_str()))
                .or(Some(abstract_num)),
            _ => Some(abstract_num),
        }
    }

    /// Effective level definition for a paragraph's `(numId, ilvl)`.
    ///
    /// A level given in the instance's `w:lvlOverride` replaces the one
    /// from the abstract definition.
    pub fn level(&self, num_id: u32, ilvl: u32) -> Option<&Level> {
        let num = self.num(num_id)?;
        if let Some(level) = num.override_for(ilvl).and_then(|o| o.level.as_ref()) {
            return Some(level);
        }
        self.abstract_for(num_id)?.level(ilvl)
    }

    /// First number of a level, honouring `w:startOverride`.
    pub fn start_at(&self, num_id: u32, ilvl: u32) -> Option<u32> {
        let num = self.num(num_id)?;
        if let Some(start) = num.override_for(ilvl).and_then(|o| o.start_override) {
            return Some(start);
        }
        self.level(num_id, ilvl).and_then(|l| l.start)
    }
}

impl FromXml for Numbering {
    fn from_xml(element: &XmlElement, options: &ParseOptions) -> Result<Self> {
        part::check_root(element, "numbering")?;
        Ok(Self {
            attributes: element.attributes().to_vec(),
            content: ChildList::from_children(element, options)?,
        })
    }
}

impl ToXml for Numbering {
    fn write_xml(&self, tag: &str, xml: &mut String) -> Result<()> {
        part::open_root(xml, tag, &self.attributes);
        xml.push('>');
        self.content.write_children(xml)?;
        writer::close(xml, tag);
        Ok(())
    }
}

/// `CT_DecimalNumber`: an element whose payload is one `w:val` integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecimalNumber {
    pub value: i32,
}

impl FromXml for DecimalNumber {
    fn from_xml(element: &XmlElement, options: &ParseOptions) -> Result<Self> {
        Ok(Self {
            value: element.required_i32("val", options)?,
        })
    }
}

impl ToXml for DecimalNumber {
    fn write_xml(&self, tag: &str, xml: &mut String) -> Result<()> {
        writer::write_opt_int_val(xml, tag, Some(self.value));
        Ok(())
    }
}

/// Picture bullet definition (`w:numPicBullet`); the picture is kept as parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PictureBullet {
    pub id: i32,
    pub content: Vec<XmlElement>,
}

impl FromXml for PictureBullet {
    fn from_xml(element: &XmlElement, options: &ParseOptions) -> Result<Self> {
        Ok(Self {
            id: element.required_i32("numPicBulletId", options)?,
            content: element.elements().cloned().collect(),
        })
    }
}

impl ToXml for PictureBullet {
    fn write_xml(&self, tag: &str, xml: &mut String) -> Result<()> {
        writer::open(xml, tag);
        writer::push_int_attr(xml, "w:numPicBulletId", self.id);
        xml.push('>');
        for element in &self.content {
            element.write_to(xml);
        }
        writer::close(xml, tag);
        Ok(())
    }
}

/// An abstract numbering definition.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AbstractNum {
    /// `w:abstractNumId`
    pub id: u32,
    pub nsid: Option<String>,
    pub multi_level_type: Option<MultiLevelType>,
    /// `w:tmpl` template code
    pub template: Option<String>,
    pub name: Option<String>,
    /// Numbering style this definition provides
    pub style_link: Option<String>,
    /// Numbering style this definition defers to
    pub num_style_link: Option<String>,
    pub levels: Vec<Level>,
    /// Attributes without a typed field (`w15:restartNumberingAfterBreak`, ...)
    pub extra_attributes: Vec<XmlAttribute>,
    /// Children without a typed field, written before the levels
    pub extra: Vec<XmlElement>,
}

const ABSTRACT_NUM_CHILD_NAMES: &[&str] =
    &["nsid", "multiLevelType", "tmpl", "name", "styleLink", "numStyleLink", "lvl"];

impl AbstractNum {
    pub fn level(&self, ilvl: u32) -> Option<&Level> {
        self.levels.iter().find(|l| l.ilvl == ilvl)
    }
}

impl FromXml for AbstractNum {
    fn from_xml(element: &XmlElement, options: &ParseOptions) -> Result<Self> {
        let mut levels = Vec::new();
        for lvl in element.children_named("lvl") {
            levels.push(Level::from_xml(lvl, options)?);
        }
        Ok(Self {
            id: element.required_u32("abstractNumId", options)?,
            nsid: element.child_val("nsid"),
            multi_level_type: element.child_val_enum("multiLevelType", options)?,
            template: element.child_val("tmpl"),
            name: element.child_val("name"),
            style_link: element.child_val("styleLink"),
            num_style_link: element.child_val("numStyleLink"),
            levels,
            extra_attributes: element.other_attributes(&["abstractNumId"]),
            extra: other_children(element, ABSTRACT_NUM_CHILD_NAMES),
        })
    }
}

impl ToXml for AbstractNum {
    fn write_xml(&self, tag: &str, xml: &mut String) -> Result<()> {
        writer::open(xml, tag);
        writer::push_int_attr(xml, "w:abstractNumId", self.id);
        writer::push_attributes(xml, &self.extra_attributes);
        xml.push('>');
        writer::write_opt_val(xml, "w:nsid", self.nsid.as_deref());
        writer::write_opt_enum_val(xml, "w:multiLevelType", self.multi_level_type);
        writer::write_opt_val(xml, "w:tmpl", self.template.as_deref());
        writer::write_opt_val(xml, "w:name", self.name.as_deref());
        writer::write_opt_val(xml, "w:styleLink", self.style_link.as_deref());
        writer::write_opt_val(xml, "w:numStyleLink", self.num_style_link.as_deref());
        for element in &self.extra {
            element.write_to(xml);
        }
        for level in &self.levels {
            level.write_xml("w:lvl", xml)?;
        }
        writer::close(xml, tag);
        Ok(())
    }
}

/// One level of a list (`w:lvl`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Level {
    /// 0-based level index
    pub ilvl: u32,
    pub template_code: Option<String>,
    pub tentative: Option<bool>,
    pub start: Option<u32>,
    pub format: Option<NumberFormat>,
    /// Level after which this one restarts
    pub restart: Option<u32>,
    /// Paragraph style bound to this level
    pub paragraph_style: Option<String>,
    /// Show all levels as decimal (`w:isLgl`)
    pub legal: Option<bool>,
    pub suffix: Option<LevelSuffix>,
    /// Label template such as `%1.%2.`
    pub text: Option<String>,
    pub justification: Option<Justification>,
    pub paragraph_properties: Option<ParagraphProperties>,
    pub run_properties: Option<RunProperties>,
    /// Attributes without a typed field
    pub extra_attributes: Vec<XmlAttribute>,
    pub extra: Vec<XmlElement>,
}

const LEVEL_CHILD_NAMES: &[&str] = &[
    "start", "numFmt", "lvlRestart", "pStyle", "isLgl", "suff", "lvlText", "lvlJc", "pPr", "rPr",
];

impl FromXml for Level {
    fn from_xml(element: &XmlElement, options: &ParseOptions) -> Result<Self> {
        let paragraph_properties = match element.child("pPr") {
            Some(p) => Some(ParagraphProperties::from_xml(p, options)?),
            None => None,
        };
        let run_properties = match element.child("rPr") {
            Some(r) => Some(RunProperties::from_xml(r, options)?),
            None => None,
        };
        Ok(Self {
            ilvl: element.required_u32("ilvl", options)?,
            template_code: element.attr_string("tplc"),
            tentative: element.attr_on_off("tentative", options)?,
            start: element.child_val_u32("start", options)?,
            format: element.child_val_enum("numFmt", options)?,
            restart: element.child_val_u32("lvlRestart", options)?,
            paragraph_style: element.child_val("pStyle"),
            legal: element.child_on_off("isLgl", options)?,
            suffix: element.child_val_enum("suff", options)?,
            text: element.child_val("lvlText"),
            justification: element.child_val_enum("lvlJc", options)?,
            paragraph_properties,
            run_properties,
            extra_attributes: element.other_attributes(&["ilvl", "tplc", "tentative"]),
            extra: other_children(element, LEVEL_CHILD_NAMES),
        })
    }
}

impl ToXml for Level {
    /// Untyped children go between `w:lvlText` and `w:lvlJc`.
    fn write_xml(&self, tag: &str, xml: &mut String) -> Result<()> {
        writer::open(xml, tag);
        writer::push_int_attr(xml, "w:ilvl", self.ilvl);
        writer::push_opt_attr(xml, "w:tplc", self.template_code.as_deref());
        writer::push_opt_on_off_attr(xml, "w:tentative", self.tentative);
        writer::push_attributes(xml, &self.extra_attributes);
        xml.push('>');
        writer::write_opt_int_val(xml, "w:start", self.start);
        writer::write_opt_enum_val(xml, "w:numFmt", self.format);
        writer::write_opt_int_val(xml, "w:lvlRestart", self.restart);
        writer::write_opt_val(xml, "w:pStyle", self.paragraph_style.as_deref());
        writer::write_opt_on_off(xml, "w:isLgl", self.legal);
        writer::write_opt_enum_val(xml, "w:suff", self.suffix);
        writer::write_opt_val(xml, "w:lvlText", self.text.as_deref());
        for element in &self.extra {
            element.write_to(xml);
        }
        writer::write_opt_enum_val(xml, "w:lvlJc", self.justification);
        if let Some(ppr) = &self.paragraph_properties {
            ppr.write_xml("w:pPr", xml)?;
        }
        if let Some(rpr) = &self.run_properties {
            rpr.write_xml("w:rPr", xml)?;
        }
        writer::close(xml, tag);
        Ok(())
    }
}

/// A numbering instance (`w:num`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Num {
    /// `w:numId`, referenced by `w:numPr` in paragraphs
    pub id: u32,
    pub abstract_num_id: u32,
    pub overrides: Vec<LevelOverride>,
    /// Attributes without a typed field (`w16cid:durableId`, ...)
    pub extra_attributes: Vec<XmlAttribute>,
    /// Children without a typed field, written after the overrides
    pub extra: Vec<XmlElement>,
}

impl Num {
    pub fn new(id: u32, abstract_num_id: u32) -> Self {
        Self {
            id,
            abstract_num_id,
            ..Self::default()
        }
    }

    pub fn override_for(&self, ilvl: u32) -> Option<&LevelOverride> {
        self.overrides.iter().find(|o| o.ilvl == ilvl)
    }
}

impl FromXml for Num {
    fn from_xml(element: &XmlElement, options: &ParseOptions) -> Result<Self> {
        let abstract_num_id = element
            .child("abstractNumId")
            .ok_or_else(|| WmlError::UnexpectedElement {
                expected: "w:abstractNumId".to_string(),
                got: element
                    .elements()
                    .next()
                    .map(|e| e.name().to_string())
                    .unwrap_or_default(),
            })?
            .required_u32("val", options)?;
        let mut overrides = Vec::new();
        for o in element.children_named("lvlOverride") {
            overrides.push(LevelOverride::from_xml(o, options)?);
        }
        Ok(Self {
            id: element.required_u32("numId", options)?,
            abstract_num_id,
            overrides,
            extra_attributes: element.other_attributes(&["numId"]),
            extra: other_children(element, &["abstractNumId", "lvlOverride"]),
        })
    }
}

impl ToXml for Num {
    fn write_xml(&self, tag: &str, xml: &mut String) -> Result<()> {
        writer::open(xml, tag);
        writer::push_int_attr(xml, "w:numId", self.id);
        writer::push_attributes(xml, &self.extra_attributes);
        xml.push('>');
        writer::write_opt_int_val(xml, "w:abstractNumId", Some(self.abstract_num_id));
        for o in &self.overrides {
            o.write_xml("w:lvlOverride", xml)?;
        }
        for element in &self.extra {
            element.write_to(xml);
        }
        writer::close(xml, tag);
        Ok(())
    }
}

/// Per-instance change to one level (`w:lvlOverride`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LevelOverride {
    pub ilvl: u32,
    pub start_override: Option<u32>,
    /// Replacement level definition
    pub level: Option<Level>,
    pub extra_attributes: Vec<XmlAttribute>,
    /// Children without a typed field, written last
    pub extra: Vec<XmlElement>,
}

impl FromXml for LevelOverride {
    fn from_xml(element: &XmlElement, options: &ParseOptions) -> Result<Self> {
        let level = match element.child("lvl") {
            Some(l) => Some(Level::from_xml(l, options)?),
            None => None,
        };
        Ok(Self {
            ilvl: element.required_u32("ilvl", options)?,
            start_override: element.child_val_u32("startOverride", options)?,
            level,
            extra_attributes: element.other_attributes(&["ilvl"]),
            extra: other_children(element, &["startOverride", "lvl"]),
        })
    }
}

impl ToXml for LevelOverride {
    fn write_xml(&self, tag: &str, xml: &mut String) -> Result<()> {
        writer::open(xml, tag);
        writer::push_int_attr(xml, "w:ilvl", self.ilvl);
        writer::push_attributes(xml, &self.extra_attributes);
        if self.start_override.is_none() && self.level.is_none() && self.extra.is_empty() {
            xml.push_str("/>");
            return Ok(());
        }
        xml.push('>');
        writer::write_opt_int_val(xml, "w:startOverride", self.start_override);
        if let Some(level) = &self.level {
            level.write_xml("w:lvl", xml)?;
        }
        for element in &self.extra {
            element.write_to(xml);
        }
        writer::close(xml, tag);
        Ok(())
    }
}

fn other_children(element: &XmlElement, known: &[&str]) -> Vec<XmlElement> {
    element
        .elements()
        .filter(|e| !known.contains(&e.local_name()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NUMBERING: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:numbering xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><w:abstractNum w:abstractNumId="0"><w:nsid w:val="1F2E3D4C"/><w:multiLevelType w:val="hybridMultilevel"/><w:lvl w:ilvl="0" w:tplc="0409000F"><w:start w:val="1"/><w:numFmt w:val="decimal"/><w:lvlText w:val="%1."/><w:lvlJc w:val="left"/><w:pPr><w:ind w:left="720" w:hanging="360"/></w:pPr></w:lvl><w:lvl w:ilvl="1" w:tentative="1"><w:start w:val="1"/><w:numFmt w:val="lowerLetter"/><w:lvlText w:val="%2."/><w:lvlJc w:val="left"/></w:lvl></w:abstractNum><w:abstractNum w:abstractNumId="1"><w:multiLevelType w:val="multilevel"/><w:styleLink w:val="Outline"/><w:lvl w:ilvl="0"><w:start w:val="1"/><w:numFmt w:val="upperRoman"/><w:lvlText w:val="%1"/></w:lvl></w:abstractNum><w:abstractNum w:abstractNumId="2"><w:numStyleLink w:val="Outline"/></w:abstractNum><w:num w:numId="1"><w:abstractNumId w:val="0"/></w:num><w:num w:numId="2"><w:abstractNumId w:val="0"/><w:lvlOverride w:ilvl="0"><w:startOverride w:val="3"/></w:lvlOverride><w:lvlOverride w:ilvl="1"><w:lvl w:ilvl="1"><w:start w:val="2"/><w:numFmt w:val="bullet"/><w:lvlText w:val="o"/></w:lvl></w:lvlOverride></w:num><w:num w:numId="3"><w:abstractNumId w:val="2"/></w:num><w:numIdMacAtCleanup w:val="3"/></w:numbering>"#;

    #[test]
    fn test_lookups() {
        let numbering = Numbering::from_xml_bytes(NUMBERING.as_bytes()).unwrap();

        assert_eq!(numbering.abstract_num_count(), 3);
        assert_eq!(numbering.num_count(), 3);
        assert_eq!(
            numbering.content.count_of(NumberingContentKind::NumIdMacAtCleanup),
            1
        );

        let abs = numbering.abstract_num(0).unwrap();
        assert_eq!(abs.multi_level_type, Some(MultiLevelType::HybridMultilevel));
        assert_eq!(abs.levels.len(), 2);
        assert_eq!(abs.level(1).unwrap().tentative, Some(true));

        let first = numbering.level(1, 0).unwrap();
        assert_eq!(first.format, Some(NumberFormat::Decimal));
        assert_eq!(first.text.as_deref(), Some("%1."));
        let ind = first.paragraph_properties.as_ref().unwrap().indentation.unwrap();
        assert_eq!(ind.left, Some(720));

        assert_eq!(numbering.start_at(1, 0), Some(1));
        assert_eq!(numbering.start_at(2, 0), Some(3));
        assert_eq!(numbering.level(2, 1).unwrap().format, Some(NumberFormat::Bullet));
        assert_eq!(numbering.start_at(2, 1), Some(2));
        assert_eq!(numbering.level(1, 1).unwrap().format, Some(NumberFormat::LowerLetter));

        // numId 3 defers to the definition providing the "Outline" style.
        assert_eq!(numbering.level(3, 0).unwrap().format, Some(NumberFormat::UpperRoman));

        assert!(numbering.level(9, 0).is_none());
        assert!(numbering.level(1, 5).is_none());
    }

    #[test]
    fn test_numbering_round_trip() {
        let numbering = Numbering::from_xml_bytes(NUMBERING.as_bytes()).unwrap();
        let written = numbering.to_xml_string().unwrap();
        assert_eq!(written, NUMBERING);
        assert_eq!(Numbering::from_xml_bytes(written.as_bytes()).unwrap(), numbering);
    }

    #[test]
    fn test_unmodelled_numbering_content_is_kept() {
        let xml = r#"<w:numbering xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" xmlns:w15="http://schemas.microsoft.com/office/word/2012/wordml" xmlns:w16cid="http://schemas.microsoft.com/office/word/2016/wordml/cid"><w:abstractNum w:abstractNumId="0" w15:restartNumberingAfterBreak="0"><w:nsid w:val="0A1B2C3D"/><w:multiLevelType w:val="hybridMultilevel"/><w:tmpl w:val="5E6F7A8B"/><w:foo w:val="x"/><w:lvl w:ilvl="0" w:tplc="04090001"><w:start w:val="1"/><w:numFmt w:val="bullet"/><w:lvlText w:val="-"/></w:lvl></w:abstractNum><w:num w:numId="1" w16cid:durableId="42"><w:abstractNumId w:val="0"/><w:lvlOverride w:ilvl="0" w15:custom="1"><w:startOverride w:val="2"/><w:bar/></w:lvlOverride></w:num></w:numbering>"#;
        let numbering = Numbering::from_xml_bytes(xml.as_bytes()).unwrap();

        let abstract_num = numbering.abstract_num(0).unwrap();
        assert_eq!(abstract_num.extra_attributes.len(), 1);
        assert_eq!(abstract_num.extra_attributes[0].name, "w15:restartNumberingAfterBreak");
        assert_eq!(abstract_num.extra.len(), 1);
        assert_eq!(abstract_num.extra[0].attr_string("val").as_deref(), Some("x"));

        let num = numbering.num(1).unwrap();
        assert_eq!(num.extra_attributes[0].value, "42");
        assert_eq!(num.overrides[0].start_override, Some(2));
        assert_eq!(num.overrides[0].extra[0].local_name(), "bar");

        let written = numbering
            .to_xml_string_with(&WriteOptions::new().with_xml_declaration(false))
            .unwrap();
        assert_eq!(written, xml);
    }

    #[test]
    fn test_num_requires_abstract_reference() {
        let err = Numbering::from_xml_bytes(br#"<w:numbering><w:num w:numId="1"/></w:numbering>"#);
        assert!(matches!(err, Err(WmlError::UnexpectedElement { .. })));
    }

    #[test]
    fn test_build_numbering() {
        let mut numbering = Numbering::new();
        numbering.content.push(NumberingContent::AbstractNum(AbstractNum {
            id: 4,
            levels: vec![Level {
                ilvl: 0,
                start: Some(1),
                format: Some(NumberFormat::Bullet),
                text: Some("\u{2022}".to_string()),
                ..Level::default()
            }],
            ..AbstractNum::default()
        }));
        numbering.content.push(NumberingContent::Num(Num::new(7, 4)));

        assert_eq!(numbering.level(7, 0).and_then(|l| l.text.as_deref()), Some("\u{2022}"));
        let written = numbering
            .to_xml_string_with(&WriteOptions::new().with_xml_declaration(false))
            .unwrap();
        assert!(written.ends_with(
            r#"<w:abstractNum w:abstractNumId="4"><w:lvl w:ilvl="0"><w:start w:val="1"/><w:numFmt w:val="bullet"/><w:lvlText w:val="•"/></w:lvl></w:abstractNum><w:num w:numId="7"><w:abstractNumId w:val="4"/></w:num></w:numbering>"#
        ));
    }
}
