/// Runs (`w:r`) and their content.
///
/// A run is a region of text with one set of character formatting. Its
/// children are a choice content model: text, tabs, breaks, field
/// characters and note references may appear in any order.
use super::children::{ChildList, choice_content};
use super::enums::{BreakClear, BreakType, FieldCharType, UnderlineStyle, VerticalAlignRun};
use super::markup::MarkupRange;
use crate::common::xml::{FromXml, ToXml, XmlAttribute, XmlElement, writer};
use crate::error::{Result, WmlError};
use crate::options::ParseOptions;
use serde::{Deserialize, Serialize};

choice_content! {
    /// Children of a run (`EG_RunInnerContent`).
    pub enum RunContent, kind RunContentKind {
        Text(Text) = "t",
        DeletedText(Text) = "delText",
        InstrText(Text) = "instrText",
        DeletedInstrText(Text) = "delInstrText",
        Tab(Empty) = "tab",
        Break(Break) = "br",
        CarriageReturn(Empty) = "cr",
        Symbol(Symbol) = "sym",
        FieldChar(FieldChar) = "fldChar",
        FootnoteReference(NoteReference) = "footnoteReference",
        EndnoteReference(NoteReference) = "endnoteReference",
        CommentReference(MarkupRange) = "commentReference",
        NoBreakHyphen(Empty) = "noBreakHyphen",
        SoftHyphen(Empty) = "softHyphen",
        LastRenderedPageBreak(Empty) = "lastRenderedPageBreak",
        PageNumber(Empty) = "pgNum",
        Separator(Empty) = "separator",
        ContinuationSeparator(Empty) = "continuationSeparator",
        AnnotationRef(Empty) = "annotationRef",
        FootnoteRef(Empty) = "footnoteRef",
        EndnoteRef(Empty) = "endnoteRef",
        DayShort(Empty) = "dayShort",
        MonthShort(Empty) = "monthShort",
        YearShort(Empty) = "yearShort",
        DayLong(Empty) = "dayLong",
        MonthLong(Empty) = "monthLong",
        YearLong(Empty) = "yearLong",
    }
}

/// A run in a paragraph.
///
/// # Example
///
/// ```rust
/// use litchi_wml::wml::{Run, RunContentKind};
///
/// let mut run = Run::with_text("Hello");
/// run.add_tab();
/// run.add_text("world");
/// run.properties_mut().bold = Some(true);
///
/// assert_eq!(run.text(), "Hello\tworld");
/// assert_eq!(run.content.count_of(RunContentKind::Text), 2);
/// assert_eq!(run.bold(), Some(true));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Run {
    /// `w:rsidR` revision id
    pub rsid_r: Option<String>,
    /// `w:rsidRPr` revision id of the run properties
    pub rsid_r_pr: Option<String>,
    /// `w:rsidDel` revision id of a deletion
    pub rsid_del: Option<String>,
    /// Attributes without a typed field, in source order
    pub extra_attributes: Vec<XmlAttribute>,
    pub properties: Option<RunProperties>,
    pub content: ChildList<RunContent>,
}

const RUN_ATTRIBUTE_NAMES: &[&str] = &["rsidR", "rsidRPr", "rsidDel"];

impl Run {
    pub fn new() -> Self {
        Self::default()
    }

    /// A run holding a single `w:t`.
    pub fn with_text(text: &str) -> Self {
        let mut run = Self::new();
        run.add_text(text);
        run
    }

    /// Append a `w:t`.
    pub fn add_text(&mut self, text: &str) -> &mut Self {
        self.content.push(RunContent::Text(Text::new(text)));
        self
    }

    pub fn add_tab(&mut self) -> &mut Self {
        self.content.push(RunContent::Tab(Empty));
        self
    }

    pub fn add_break(&mut self, kind: Option<BreakType>) -> &mut Self {
        self.content.push(RunContent::Break(Break { kind, clear: None }));
        self
    }

    /// Replace every `w:t` with one holding `text`, keeping other content.
    pub fn set_text(&mut self, text: &str) {
        while self.content.remove(RunContentKind::Text, 0).is_some() {}
        self.add_text(text);
    }

    /// Properties, created empty if absent.
    pub fn properties_mut(&mut self) -> &mut RunProperties {
        self.properties.get_or_insert_with(RunProperties::default)
    }

    /// Direct bold formatting, `None` when inherited.
    #[inline]
    pub fn bold(&self) -> Option<bool> {
        self.properties.as_ref().and_then(|p| p.bold)
    }

    /// Direct italic formatting, `None` when inherited.
    #[inline]
    pub fn italic(&self) -> Option<bool> {
        self.properties.as_ref().and_then(|p| p.italic)
    }

    /// Character style id.
    #[inline]
    pub fn style(&self) -> Option<&str> {
        self.properties.as_ref().and_then(|p| p.style.as_deref())
    }

    /// Visible text of this run.
    ///
    /// Tabs become `\t`; line breaks, page breaks and carriage returns
    /// become `\n`. Deleted text and field instructions are skipped.
    pub fn text(&self) -> String {
        let mut result = String::new();
        self.append_text(&mut result);
        result
    }

    pub(crate) fn append_text(&self, out: &mut String) {
        for child in &self.content {
            match child {
                RunContent::Text(t) => out.push_str(&t.value),
                RunContent::Tab(_) => out.push('\t'),
                RunContent::Break(b) if b.kind != Some(BreakType::Column) => out.push('\n'),
                RunContent::CarriageReturn(_) => out.push('\n'),
                RunContent::NoBreakHyphen(_) => out.push('-'),
                _ => {},
            }
        }
    }
}

impl FromXml for Run {
    fn from_xml(element: &XmlElement, options: &ParseOptions) -> Result<Self> {
        let properties = match element.child("rPr") {
            Some(rpr) => Some(RunProperties::from_xml(rpr, options)?),
            None => None,
        };
        let content = ChildList::from_elements(
            element.elements().filter(|e| e.local_name() != "rPr"),
            options,
        )?;
        Ok(Self {
            rsid_r: element.attr_string("rsidR"),
            rsid_r_pr: element.attr_string("rsidRPr"),
            rsid_del: element.attr_string("rsidDel"),
            extra_attributes: element.other_attributes(RUN_ATTRIBUTE_NAMES),
            properties,
            content,
        })
    }
}

impl ToXml for Run {
    fn write_xml(&self, tag: &str, xml: &mut String) -> Result<()> {
        writer::open(xml, tag);
        writer::push_opt_attr(xml, "w:rsidR", self.rsid_r.as_deref());
        writer::push_opt_attr(xml, "w:rsidRPr", self.rsid_r_pr.as_deref());
        writer::push_opt_attr(xml, "w:rsidDel", self.rsid_del.as_deref());
        writer::push_attributes(xml, &self.extra_attributes);

        let properties = self.properties.as_ref();
        if properties.is_none() && self.content.is_empty() {
            xml.push_str("/>");
            return Ok(());
        }
        xml.push('>');
        if let Some(rpr) = properties {
            rpr.write_xml("w:rPr", xml)?;
        }
        self.content.write_children(xml)?;
        writer::close(xml, tag);
        Ok(())
    }
}

/// Text-carrying run child (`w:t`, `w:delText`, `w:instrText`, `w:delInstrText`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Text {
    pub value: String,
    /// `xml:space="preserve"`
    pub preserve_space: bool,
}

impl Text {
    /// Text that keeps leading/trailing whitespace when written.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let preserve_space = value.starts_with(char::is_whitespace)
            || value.ends_with(char::is_whitespace);
        Self {
            value,
            preserve_space,
        }
    }
}

impl FromXml for Text {
    fn from_xml(element: &XmlElement, _options: &ParseOptions) -> Result<Self> {
        Ok(Self {
            value: element.text(),
            preserve_space: element.attribute("space") == Some("preserve"),
        })
    }
}

impl ToXml for Text {
    fn write_xml(&self, tag: &str, xml: &mut String) -> Result<()> {
        writer::open(xml, tag);
        if self.preserve_space {
            writer::push_attr(xml, "xml:space", "preserve");
        }
        if self.value.is_empty() {
            xml.push_str("/>");
            return Ok(());
        }
        xml.push('>');
        crate::common::xml::escape_xml_into(xml, &self.value);
        writer::close(xml, tag);
        Ok(())
    }
}

/// Child without attributes or content (`CT_Empty`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Empty;

impl FromXml for Empty {
    fn from_xml(_element: &XmlElement, _options: &ParseOptions) -> Result<Self> {
        Ok(Empty)
    }
}

impl ToXml for Empty {
    fn write_xml(&self, tag: &str, xml: &mut String) -> Result<()> {
        writer::write_empty(xml, tag);
        Ok(())
    }
}

/// `w:br`. A missing type means a text-wrapping (line) break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Break {
    pub kind: Option<BreakType>,
    pub clear: Option<BreakClear>,
}

impl FromXml for Break {
    fn from_xml(element: &XmlElement, options: &ParseOptions) -> Result<Self> {
        Ok(Self {
            kind: element.attr_enum("type", options)?,
            clear: element.attr_enum("clear", options)?,
        })
    }
}

impl ToXml for Break {
    fn write_xml(&self, tag: &str, xml: &mut String) -> Result<()> {
        writer::open(xml, tag);
        writer::push_opt_enum_attr(xml, "w:type", self.kind);
        writer::push_opt_enum_attr(xml, "w:clear", self.clear);
        xml.push_str("/>");
        Ok(())
    }
}

/// `w:sym`: a character from a symbol font.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Symbol {
    pub font: Option<String>,
    /// Character code as hex digits
    pub char_code: Option<String>,
}

impl FromXml for Symbol {
    fn from_xml(element: &XmlElement, _options: &ParseOptions) -> Result<Self> {
        Ok(Self {
            font: element.attr_string("font"),
            char_code: element.attr_string("char"),
        })
    }
}

impl ToXml for Symbol {
    fn write_xml(&self, tag: &str, xml: &mut String) -> Result<()> {
        writer::open(xml, tag);
        writer::push_opt_attr(xml, "w:font", self.font.as_deref());
        writer::push_opt_attr(xml, "w:char", self.char_code.as_deref());
        xml.push_str("/>");
        Ok(())
    }
}

/// `w:fldChar`: boundary of a complex field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldChar {
    pub kind: FieldCharType,
    pub locked: Option<bool>,
    pub dirty: Option<bool>,
    /// Form field data and similar children, kept as parsed
    pub data: Vec<XmlElement>,
}

impl FieldChar {
    pub fn new(kind: FieldCharType) -> Self {
        Self {
            kind,
            locked: None,
            dirty: None,
            data: Vec::new(),
        }
    }
}

impl FromXml for FieldChar {
    fn from_xml(element: &XmlElement, options: &ParseOptions) -> Result<Self> {
        let kind = element
            .attr_enum("fldCharType", options)?
            .ok_or_else(|| WmlError::missing_attribute(element.name(), "fldCharType"))?;
        Ok(Self {
            kind,
            locked: element.attr_on_off("fldLock", options)?,
            dirty: element.attr_on_off("dirty", options)?,
            data: element.elements().cloned().collect(),
        })
    }
}

impl ToXml for FieldChar {
    fn write_xml(&self, tag: &str, xml: &mut String) -> Result<()> {
        writer::open(xml, tag);
        writer::push_attr(xml, "w:fldCharType", self.kind.to_xml());
        writer::push_opt_on_off_attr(xml, "w:fldLock", self.locked);
        writer::push_opt_on_off_attr(xml, "w:dirty", self.dirty);
        if self.data.is_empty() {
            xml.push_str("/>");
            return Ok(());
        }
        xml.push('>');
        for child in &self.data {
            child.write_to(xml);
        }
        writer::close(xml, tag);
        Ok(())
    }
}

/// `w:footnoteReference` / `w:endnoteReference`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteReference {
    pub id: i32,
    pub custom_mark_follows: Option<bool>,
}

impl FromXml for NoteReference {
    fn from_xml(element: &XmlElement, options: &ParseOptions) -> Result<Self> {
        Ok(Self {
            id: element.required_i32("id", options)?,
            custom_mark_follows: element.attr_on_off("customMarkFollows", options)?,
        })
    }
}

impl ToXml for NoteReference {
    fn write_xml(&self, tag: &str, xml: &mut String) -> Result<()> {
        writer::open(xml, tag);
        writer::push_opt_on_off_attr(xml, "w:customMarkFollows", self.custom_mark_follows);
        writer::push_int_attr(xml, "w:id", self.id);
        xml.push_str("/>");
        Ok(())
    }
}

/// Font selection per script (`w:rFonts`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RunFonts {
    pub ascii: Option<String>,
    pub h_ansi: Option<String>,
    pub east_asia: Option<String>,
    pub cs: Option<String>,
    pub hint: Option<String>,
}

/// `w:u` underline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Underline {
    pub style: Option<UnderlineStyle>,
    pub color: Option<String>,
}

/// Character formatting (`w:rPr`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RunProperties {
    /// Character style id (`w:rStyle`)
    pub style: Option<String>,
    pub fonts: Option<RunFonts>,
    pub bold: Option<bool>,
    pub bold_cs: Option<bool>,
    pub italic: Option<bool>,
    pub italic_cs: Option<bool>,
    pub caps: Option<bool>,
    pub small_caps: Option<bool>,
    pub strike: Option<bool>,
    pub double_strike: Option<bool>,
    pub no_proof: Option<bool>,
    pub vanish: Option<bool>,
    /// Hex RGB or `auto`
    pub color: Option<String>,
    /// Character spacing adjustment in twips
    pub spacing: Option<i32>,
    /// Kerning threshold in half-points
    pub kern: Option<u32>,
    /// Baseline shift in half-points
    pub position: Option<i32>,
    /// Font size in half-points
    pub size: Option<u32>,
    pub size_cs: Option<u32>,
    pub highlight: Option<String>,
    pub underline: Option<Underline>,
    pub vertical_align: Option<VerticalAlignRun>,
    pub rtl: Option<bool>,
    /// Primary language tag (`w:lang/@w:val`)
    pub lang: Option<String>,
    /// Property elements without a typed field, in source order
    pub extra: Vec<XmlElement>,
}

const RUN_PROPERTY_NAMES: &[&str] = &[
    "rStyle", "rFonts", "b", "bCs", "i", "iCs", "caps", "smallCaps", "strike", "dstrike",
    "noProof", "vanish", "color", "spacing", "kern", "position", "sz", "szCs", "highlight", "u",
    "vertAlign", "rtl", "lang",
];

impl FromXml for RunProperties {
    fn from_xml(element: &XmlElement, options: &ParseOptions) -> Result<Self> {
        let fonts = element.child("rFonts").map(|f| RunFonts {
            ascii: f.attr_string("ascii"),
            h_ansi: f.attr_string("hAnsi"),
            east_asia: f.attr_string("eastAsia"),
            cs: f.attr_string("cs"),
            hint: f.attr_string("hint"),
        });
        let underline = match element.child("u") {
            Some(u) => Some(Underline {
                style: u.attr_enum("val", options)?,
                color: u.attr_string("color"),
            }),
            None => None,
        };

        Ok(Self {
            style: element.child_val("rStyle"),
            fonts,
            bold: element.child_on_off("b", options)?,
            bold_cs: element.child_on_off("bCs", options)?,
            italic: element.child_on_off("i", options)?,
            italic_cs: element.child_on_off("iCs", options)?,
            caps: element.child_on_off("caps", options)?,
            small_caps: element.child_on_off("smallCaps", options)?,
            strike: element.child_on_off("strike", options)?,
            double_strike: element.child_on_off("dstrike", options)?,
            no_proof: element.child_on_off("noProof", options)?,
            vanish: element.child_on_off("vanish", options)?,
            color: element.child_val("color"),
            spacing: element.child_val_i32("spacing", options)?,
            kern: element.child_val_u32("kern", options)?,
            position: element.child_val_i32("position", options)?,
            size: element.child_val_u32("sz", options)?,
            size_cs: element.child_val_u32("szCs", options)?,
            highlight: element.child_val("highlight"),
            underline,
            vertical_align: element.child_val_enum("vertAlign", options)?,
            rtl: element.child_on_off("rtl", options)?,
            lang: element.child_val("lang"),
            extra: element
                .elements()
                .filter(|e| !RUN_PROPERTY_NAMES.contains(&e.local_name()))
                .cloned()
                .collect(),
        })
    }
}

impl ToXml for RunProperties {
    /// Children are written in schema order; untyped ones go after `w:u`.
    fn write_xml(&self, tag: &str, xml: &mut String) -> Result<()> {
        writer::open(xml, tag);
        xml.push('>');
        writer::write_opt_val(xml, "w:rStyle", self.style.as_deref());
        if let Some(fonts) = &self.fonts {
            writer::open(xml, "w:rFonts");
            writer::push_opt_attr(xml, "w:ascii", fonts.ascii.as_deref());
            writer::push_opt_attr(xml, "w:hAnsi", fonts.h_ansi.as_deref());
            writer::push_opt_attr(xml, "w:eastAsia", fonts.east_asia.as_deref());
            writer::push_opt_attr(xml, "w:cs", fonts.cs.as_deref());
            writer::push_opt_attr(xml, "w:hint", fonts.hint.as_deref());
            xml.push_str("/>");
        }
        writer::write_opt_on_off(xml, "w:b", self.bold);
        writer::write_opt_on_off(xml, "w:bCs", self.bold_cs);
        writer::write_opt_on_off(xml, "w:i", self.italic);
        writer::write_opt_on_off(xml, "w:iCs", self.italic_cs);
        writer::write_opt_on_off(xml, "w:caps", self.caps);
        writer::write_opt_on_off(xml, "w:smallCaps", self.small_caps);
        writer::write_opt_on_off(xml, "w:strike", self.strike);
        writer::write_opt_on_off(xml, "w:dstrike", self.double_strike);
        writer::write_opt_on_off(xml, "w:noProof", self.no_proof);
        writer::write_opt_on_off(xml, "w:vanish", self.vanish);
        writer::write_opt_val(xml, "w:color", self.color.as_deref());
        writer::write_opt_int_val(xml, "w:spacing", self.spacing);
        writer::write_opt_int_val(xml, "w:kern", self.kern);
        writer::write_opt_int_val(xml, "w:position", self.position);
        writer::write_opt_int_val(xml, "w:sz", self.size);
        writer::write_opt_int_val(xml, "w:szCs", self.size_cs);
        writer::write_opt_val(xml, "w:highlight", self.highlight.as_deref());
        if let Some(u) = &self.underline {
            writer::open(xml, "w:u");
            writer::push_opt_enum_attr(xml, "w:val", u.style);
            writer::push_opt_attr(xml, "w:color", u.color.as_deref());
            xml.push_str("/>");
        }
        for element in &self.extra {
            element.write_to(xml);
        }
        writer::write_opt_enum_val(xml, "w:vertAlign", self.vertical_align);
        writer::write_opt_on_off(xml, "w:rtl", self.rtl);
        writer::write_opt_val(xml, "w:lang", self.lang.as_deref());
        writer::close(xml, tag);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_run(xml: &str) -> Run {
        let options = ParseOptions::default();
        let element = XmlElement::parse(xml.as_bytes(), &options).unwrap();
        Run::from_xml(&element, &options).unwrap()
    }

    fn write_run(run: &Run) -> String {
        let mut xml = String::new();
        run.write_xml("w:r", &mut xml).unwrap();
        xml
    }

    #[test]
    fn test_run_text_and_kinds() {
        let run = parse_run(
            r#"<w:r><w:rPr><w:b/><w:sz w:val="24"/></w:rPr><w:t>Hello</w:t><w:tab/><w:t xml:space="preserve"> world</w:t><w:br/><w:delText>gone</w:delText></w:r>"#,
        );

        assert_eq!(run.text(), "Hello\t world\n");
        assert_eq!(run.bold(), Some(true));
        assert_eq!(run.properties.as_ref().unwrap().size, Some(24));
        assert_eq!(run.content.count_of(RunContentKind::Text), 2);
        assert_eq!(run.content.count_of(RunContentKind::DeletedText), 1);

        match run.content.get(RunContentKind::Text, 1) {
            Some(RunContent::Text(t)) => {
                assert_eq!(t.value, " world");
                assert!(t.preserve_space);
            },
            other => panic!("unexpected child: {:?}", other),
        }
    }

    #[test]
    fn test_run_round_trip() {
        let source = r#"<w:r w:rsidR="00B2"><w:rPr><w:rStyle w:val="Strong"/><w:i w:val="0"/><w:u w:val="double" w:color="FF0000"/><w:vertAlign w:val="superscript"/></w:rPr><w:fldChar w:fldCharType="begin"/><w:instrText xml:space="preserve"> PAGE </w:instrText><w:fldChar w:fldCharType="end"/><w:footnoteReference w:id="2"/></w:r>"#;
        let run = parse_run(source);
        let written = write_run(&run);
        assert_eq!(written, source);
        assert_eq!(parse_run(&written), run);
    }

    #[test]
    fn test_unmodelled_attributes_are_kept() {
        let source = r#"<w:r w:rsidR="00B2" w:rsidDel="00C1" w14:textId="77"><w:t>x</w:t></w:r>"#;
        let run = parse_run(source);
        assert_eq!(run.rsid_del.as_deref(), Some("00C1"));
        assert_eq!(run.extra_attributes.len(), 1);
        assert_eq!(run.extra_attributes[0].name, "w14:textId");
        assert_eq!(write_run(&run), source);
    }

    #[test]
    fn test_unknown_property_is_preserved() {
        let run = parse_run(r#"<w:r><w:rPr><w:b/><w:shd w:val="clear" w:fill="FFFF00"/></w:rPr></w:r>"#);
        let rpr = run.properties.as_ref().unwrap();
        assert_eq!(rpr.extra.len(), 1);
        assert_eq!(rpr.extra[0].local_name(), "shd");
        assert!(write_run(&run).contains(r#"<w:shd w:val="clear" w:fill="FFFF00"/>"#));
    }

    #[test]
    fn test_drawing_is_kept_as_other() {
        let run = parse_run(r#"<w:r><w:drawing><wp:inline/></w:drawing><w:t>x</w:t></w:r>"#);
        assert_eq!(run.content.count_of(RunContentKind::Other), 1);
        assert_eq!(run.content.get(RunContentKind::Text, 0).map(|_| ()), Some(()));
        assert!(write_run(&run).starts_with("<w:r><w:drawing><wp:inline/></w:drawing>"));
    }

    #[test]
    fn test_set_text_keeps_other_children() {
        let mut run = Run::with_text("a");
        run.add_tab();
        run.add_text("b");
        run.set_text("c");
        assert_eq!(run.content.len(), 2);
        assert_eq!(run.text(), "\tc");
    }

    #[test]
    fn test_text_preserve_flag() {
        assert!(Text::new(" lead").preserve_space);
        assert!(!Text::new("inner space").preserve_space);
        let mut xml = String::new();
        Text::new("a<b").write_xml("w:t", &mut xml).unwrap();
        assert_eq!(xml, "<w:t>a&lt;b</w:t>");
    }

    #[test]
    fn test_field_char_requires_type() {
        let options = ParseOptions::default();
        let element = XmlElement::parse(br#"<w:fldChar/>"#, &options).unwrap();
        assert!(FieldChar::from_xml(&element, &options).is_err());
    }

    #[test]
    fn test_empty_run() {
        assert_eq!(write_run(&Run::new()), "<w:r/>");
    }
}
