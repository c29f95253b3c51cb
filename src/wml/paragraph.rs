/// Paragraphs (`w:p`) and the paragraph-level content model.
use super::children::{ChildList, choice_content};
use super::custom_xml::CustomXml;
use super::enums::{Justification, LineSpacingRule};
use super::frame::FrameProperties;
use super::markup::{Bookmark, MarkupRange, PermEnd, PermStart, ProofErr, TrackChange};
use super::run::{Run, RunProperties};
use super::sdt::Sdt;
use crate::common::xml::{FromXml, ToXml, XmlAttribute, XmlElement, writer};
use crate::error::Result;
use crate::options::ParseOptions;
use serde::{Deserialize, Serialize};

choice_content! {
    /// Children of a paragraph and of the run containers nested in it
    /// (`w:hyperlink`, `w:fldSimple`, `w:ins`, `w:del`, run-level `w:sdt`).
    pub enum ParagraphContent, kind ParagraphContentKind {
        Run(Run) = "r",
        Hyperlink(Hyperlink) = "hyperlink",
        SimpleField(SimpleField) = "fldSimple",
        Insertion(RunTrackChange) = "ins",
        Deletion(RunTrackChange) = "del",
        Sdt(Sdt<ParagraphContent>) = "sdt",
        CustomXml(CustomXml<ParagraphContent>) = "customXml",
        SmartTag(CustomXml<ParagraphContent>) = "smartTag",
        BookmarkStart(Bookmark) = "bookmarkStart",
        BookmarkEnd(MarkupRange) = "bookmarkEnd",
        CommentRangeStart(MarkupRange) = "commentRangeStart",
        CommentRangeEnd(MarkupRange) = "commentRangeEnd",
        PermStart(PermStart) = "permStart",
        PermEnd(PermEnd) = "permEnd",
        ProofErr(ProofErr) = "proofErr",
    }
}

/// Append the visible text of paragraph-level content.
///
/// Deleted runs are skipped; every other run container is entered.
pub(crate) fn append_content_text(content: &ChildList<ParagraphContent>, out: &mut String) {
    for child in content {
        match child {
            ParagraphContent::Run(run) => run.append_text(out),
            ParagraphContent::Hyperlink(h) => append_content_text(&h.content, out),
            ParagraphContent::SimpleField(f) => append_content_text(&f.content, out),
            ParagraphContent::Insertion(ins) => append_content_text(&ins.content, out),
            ParagraphContent::Sdt(sdt) => append_content_text(&sdt.content, out),
            ParagraphContent::CustomXml(c) | ParagraphContent::SmartTag(c) => {
                append_content_text(&c.content, out)
            },
            _ => {},
        }
    }
}

/// A paragraph.
///
/// # Example
///
/// ```rust
/// use litchi_wml::wml::{Paragraph, ParagraphContentKind, Run};
/// use litchi_wml::wml::enums::Justification;
///
/// let mut para = Paragraph::with_text("Hello, ");
/// para.add_run(Run::with_text("World")).properties_mut().bold = Some(true);
/// para.properties_mut().justification = Some(Justification::Center);
///
/// assert_eq!(para.text(), "Hello, World");
/// assert_eq!(para.content.count_of(ParagraphContentKind::Run), 2);
/// assert_eq!(para.runs().nth(1).and_then(|r| r.bold()), Some(true));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Paragraph {
    /// `w14:paraId`
    pub para_id: Option<String>,
    /// `w14:textId`
    pub text_id: Option<String>,
    pub rsid_r: Option<String>,
    pub rsid_r_default: Option<String>,
    pub rsid_r_pr: Option<String>,
    /// Attributes without a typed field (`w:rsidP`, `w:rsidDel`, ...), in source order
    pub extra_attributes: Vec<XmlAttribute>,
    pub properties: Option<ParagraphProperties>,
    pub content: ChildList<ParagraphContent>,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// A paragraph with one run of plain text.
    pub fn with_text(text: &str) -> Self {
        let mut para = Self::new();
        para.add_run(Run::with_text(text));
        para
    }

    /// Append a run and return it for further editing.
    pub fn add_run(&mut self, run: Run) -> &mut Run {
        self.content.push(ParagraphContent::Run(run));
        match self.content.last_mut() {
            Some(ParagraphContent::Run(run)) => run,
            _ => unreachable!("a run was just pushed"),
        }
    }

    /// Direct runs of this paragraph, in order.
    ///
    /// Runs nested in hyperlinks, fields or revisions are not included;
    /// use [`text`](Self::text) for the full visible text.
    pub fn runs(&self) -> impl Iterator<Item = &Run> + '_ {
        self.content.iter().filter_map(|c| match c {
            ParagraphContent::Run(run) => Some(run),
            _ => None,
        })
    }

    pub fn properties_mut(&mut self) -> &mut ParagraphProperties {
        self.properties.get_or_insert_with(ParagraphProperties::default)
    }

    /// Paragraph style id.
    pub fn style(&self) -> Option<&str> {
        self.properties.as_ref().and_then(|p| p.style.as_deref())
    }

    pub fn justification(&self) -> Option<Justification> {
        self.properties.as_ref().and_then(|p| p.justification)
    }

    /// `(numId, ilvl)` when this paragraph is a list item.
    pub fn numbering(&self) -> Option<(u32, u32)> {
        let num_pr = self.properties.as_ref()?.numbering.as_ref()?;
        Some((num_pr.num_id?, num_pr.level.unwrap_or(0)))
    }

    /// Visible text of the paragraph.
    pub fn text(&self) -> String {
        let mut result = String::new();
        append_content_text(&self.content, &mut result);
        result
    }
}

const PARAGRAPH_ATTRIBUTE_NAMES: &[&str] =
    &["paraId", "textId", "rsidR", "rsidRDefault", "rsidRPr"];

impl FromXml for Paragraph {
    fn from_xml(element: &XmlElement, options: &ParseOptions) -> Result<Self> {
        let properties = match element.child("pPr") {
            Some(ppr) => Some(ParagraphProperties::from_xml(ppr, options)?),
            None => None,
        };
        let content = ChildList::from_elements(
            element.elements().filter(|e| e.local_name() != "pPr"),
            options,
        )?;
        Ok(Self {
            para_id: element.attr_string("paraId"),
            text_id: element.attr_string("textId"),
            rsid_r: element.attr_string("rsidR"),
            rsid_r_default: element.attr_string("rsidRDefault"),
            rsid_r_pr: element.attr_string("rsidRPr"),
            extra_attributes: element.other_attributes(PARAGRAPH_ATTRIBUTE_NAMES),
            properties,
            content,
        })
    }
}

impl ToXml for Paragraph {
    fn write_xml(&self, tag: &str, xml: &mut String) -> Result<()> {
        writer::open(xml, tag);
        writer::push_opt_attr(xml, "w14:paraId", self.para_id.as_deref());
        writer::push_opt_attr(xml, "w14:textId", self.text_id.as_deref());
        writer::push_opt_attr(xml, "w:rsidR", self.rsid_r.as_deref());
        writer::push_opt_attr(xml, "w:rsidRPr", self.rsid_r_pr.as_deref());
        writer::push_opt_attr(xml, "w:rsidRDefault", self.rsid_r_default.as_deref());
        writer::push_attributes(xml, &self.extra_attributes);
        if self.properties.is_none() && self.content.is_empty() {
            xml.push_str("/>");
            return Ok(());
        }
        xml.push('>');
        if let Some(ppr) = &self.properties {
            ppr.write_xml("w:pPr", xml)?;
        }
        self.content.write_children(xml)?;
        writer::close(xml, tag);
        Ok(())
    }
}

/// `w:numPr`: list membership of a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NumberingReference {
    /// `w:ilvl`
    pub level: Option<u32>,
    /// `w:numId`; 0 removes numbering inherited from the style
    pub num_id: Option<u32>,
}

/// `w:spacing` between lines and paragraphs, in twips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Spacing {
    pub before: Option<u32>,
    pub before_lines: Option<i32>,
    pub before_autospacing: Option<bool>,
    pub after: Option<u32>,
    pub after_lines: Option<i32>,
    pub after_autospacing: Option<bool>,
    /// Line pitch; 240ths of a line when `line_rule` is auto
    pub line: Option<i32>,
    pub line_rule: Option<LineSpacingRule>,
}

/// `w:ind` indentation, in twips.
///
/// `w:start`/`w:end` are read into `left`/`right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Indentation {
    pub left: Option<i32>,
    pub right: Option<i32>,
    pub hanging: Option<u32>,
    pub first_line: Option<u32>,
}

/// Paragraph formatting (`w:pPr`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParagraphProperties {
    /// Paragraph style id (`w:pStyle`)
    pub style: Option<String>,
    pub keep_next: Option<bool>,
    pub keep_lines: Option<bool>,
    pub page_break_before: Option<bool>,
    pub frame: Option<FrameProperties>,
    pub widow_control: Option<bool>,
    pub numbering: Option<NumberingReference>,
    pub spacing: Option<Spacing>,
    pub indentation: Option<Indentation>,
    pub contextual_spacing: Option<bool>,
    pub justification: Option<Justification>,
    /// 0-based; 9 means body text
    pub outline_level: Option<u32>,
    /// Formatting of the paragraph mark
    pub run_properties: Option<RunProperties>,
    /// Section break carried by this paragraph (`w:sectPr`), kept as parsed
    pub section: Option<XmlElement>,
    /// Property elements without a typed field, in source order
    pub extra: Vec<XmlElement>,
}

const PARAGRAPH_PROPERTY_NAMES: &[&str] = &[
    "pStyle",
    "keepNext",
    "keepLines",
    "pageBreakBefore",
    "framePr",
    "widowControl",
    "numPr",
    "spacing",
    "ind",
    "contextualSpacing",
    "jc",
    "outlineLvl",
    "rPr",
    "sectPr",
];

impl FromXml for ParagraphProperties {
    fn from_xml(element: &XmlElement, options: &ParseOptions) -> Result<Self> {
        let frame = match element.child("framePr") {
            Some(f) => Some(FrameProperties::from_xml(f, options)?),
            None => None,
        };
        let numbering = match element.child("numPr") {
            Some(n) => Some(NumberingReference {
                level: n.child_val_u32("ilvl", options)?,
                num_id: n.child_val_u32("numId", options)?,
            }),
            None => None,
        };
        let spacing = match element.child("spacing") {
            Some(s) => Some(Spacing {
                before: s.attr_u32("before", options)?,
                before_lines: s.attr_i32("beforeLines", options)?,
                before_autospacing: s.attr_on_off("beforeAutospacing", options)?,
                after: s.attr_u32("after", options)?,
                after_lines: s.attr_i32("afterLines", options)?,
                after_autospacing: s.attr_on_off("afterAutospacing", options)?,
                line: s.attr_i32("line", options)?,
                line_rule: s.attr_enum("lineRule", options)?,
            }),
            None => None,
        };
        let indentation = match element.child("ind") {
            Some(i) => Some(Indentation {
                left: match i.attr_i32("start", options)? {
                    Some(v) => Some(v),
                    None => i.attr_i32("left", options)?,
                },
                right: match i.attr_i32("end", options)? {
                    Some(v) => Some(v),
                    None => i.attr_i32("right", options)?,
                },
                hanging: i.attr_u32("hanging", options)?,
                first_line: i.attr_u32("firstLine", options)?,
            }),
            None => None,
        };
        let run_properties = match element.child("rPr") {
            Some(r) => Some(RunProperties::from_xml(r, options)?),
            None => None,
        };

        Ok(Self {
            style: element.child_val("pStyle"),
            keep_next: element.child_on_off("keepNext", options)?,
            keep_lines: element.child_on_off("keepLines", options)?,
            page_break_before: element.child_on_off("pageBreakBefore", options)?,
            frame,
            widow_control: element.child_on_off("widowControl", options)?,
            numbering,
            spacing,
            indentation,
            contextual_spacing: element.child_on_off("contextualSpacing", options)?,
            justification: element.child_val_enum("jc", options)?,
            outline_level: element.child_val_u32("outlineLvl", options)?,
            run_properties,
            section: element.child("sectPr").cloned(),
            extra: element
                .elements()
                .filter(|e| !PARAGRAPH_PROPERTY_NAMES.contains(&e.local_name()))
                .cloned()
                .collect(),
        })
    }
}

impl ToXml for ParagraphProperties {
    /// Children are written in schema order; untyped ones go after `w:numPr`.
    fn write_xml(&self, tag: &str, xml: &mut String) -> Result<()> {
        writer::open(xml, tag);
        xml.push('>');
        writer::write_opt_val(xml, "w:pStyle", self.style.as_deref());
        writer::write_opt_on_off(xml, "w:keepNext", self.keep_next);
        writer::write_opt_on_off(xml, "w:keepLines", self.keep_lines);
        writer::write_opt_on_off(xml, "w:pageBreakBefore", self.page_break_before);
        if let Some(frame) = &self.frame {
            frame.write_xml("w:framePr", xml)?;
        }
        writer::write_opt_on_off(xml, "w:widowControl", self.widow_control);
        if let Some(num_pr) = &self.numbering {
            xml.push_str("<w:numPr>");
            writer::write_opt_int_val(xml, "w:ilvl", num_pr.level);
            writer::write_opt_int_val(xml, "w:numId", num_pr.num_id);
            xml.push_str("</w:numPr>");
        }
        for element in &self.extra {
            element.write_to(xml);
        }
        if let Some(s) = &self.spacing {
            writer::open(xml, "w:spacing");
            writer::push_opt_int_attr(xml, "w:before", s.before);
            writer::push_opt_int_attr(xml, "w:beforeLines", s.before_lines);
            writer::push_opt_on_off_attr(xml, "w:beforeAutospacing", s.before_autospacing);
            writer::push_opt_int_attr(xml, "w:after", s.after);
            writer::push_opt_int_attr(xml, "w:afterLines", s.after_lines);
            writer::push_opt_on_off_attr(xml, "w:afterAutospacing", s.after_autospacing);
            writer::push_opt_int_attr(xml, "w:line", s.line);
            writer::push_opt_enum_attr(xml, "w:lineRule", s.line_rule);
            xml.push_str("/>");
        }
        if let Some(ind) = &self.indentation {
            writer::open(xml, "w:ind");
            writer::push_opt_int_attr(xml, "w:left", ind.left);
            writer::push_opt_int_attr(xml, "w:right", ind.right);
            writer::push_opt_int_attr(xml, "w:hanging", ind.hanging);
            writer::push_opt_int_attr(xml, "w:firstLine", ind.first_line);
            xml.push_str("/>");
        }
        writer::write_opt_on_off(xml, "w:contextualSpacing", self.contextual_spacing);
        writer::write_opt_enum_val(xml, "w:jc", self.justification);
        writer::write_opt_int_val(xml, "w:outlineLvl", self.outline_level);
        if let Some(rpr) = &self.run_properties {
            rpr.write_xml("w:rPr", xml)?;
        }
        if let Some(sect) = &self.section {
            sect.write_to(xml);
        }
        writer::close(xml, tag);
        Ok(())
    }
}

/// `w:hyperlink`: runs linked to a relationship target or a bookmark.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Hyperlink {
    /// Relationship id of an external target (`r:id`)
    pub relationship_id: Option<String>,
    /// Bookmark name inside this document
    pub anchor: Option<String>,
    pub tooltip: Option<String>,
    pub target_frame: Option<String>,
    pub doc_location: Option<String>,
    pub history: Option<bool>,
    pub content: ChildList<ParagraphContent>,
}

impl Hyperlink {
    /// Link to a bookmark in the same document.
    pub fn to_anchor(anchor: impl Into<String>, text: &str) -> Self {
        let mut link = Self {
            anchor: Some(anchor.into()),
            ..Self::default()
        };
        link.content.push(ParagraphContent::Run(Run::with_text(text)));
        link
    }

    pub fn text(&self) -> String {
        let mut result = String::new();
        append_content_text(&self.content, &mut result);
        result
    }
}

impl FromXml for Hyperlink {
    fn from_xml(element: &XmlElement, options: &ParseOptions) -> Result<Self> {
        Ok(Self {
            relationship_id: element.attr_string("id"),
            anchor: element.attr_string("anchor"),
            tooltip: element.attr_string("tooltip"),
            target_frame: element.attr_string("tgtFrame"),
            doc_location: element.attr_string("docLocation"),
            history: element.attr_on_off("history", options)?,
            content: ChildList::from_children(element, options)?,
        })
    }
}

impl ToXml for Hyperlink {
    fn write_xml(&self, tag: &str, xml: &mut String) -> Result<()> {
        writer::open(xml, tag);
        writer::push_opt_attr(xml, "w:tgtFrame", self.target_frame.as_deref());
        writer::push_opt_attr(xml, "w:tooltip", self.tooltip.as_deref());
        writer::push_opt_attr(xml, "w:docLocation", self.doc_location.as_deref());
        writer::push_opt_on_off_attr(xml, "w:history", self.history);
        writer::push_opt_attr(xml, "w:anchor", self.anchor.as_deref());
        writer::push_opt_attr(xml, "r:id", self.relationship_id.as_deref());
        xml.push('>');
        self.content.write_children(xml)?;
        writer::close(xml, tag);
        Ok(())
    }
}

/// `w:fldSimple`: a field with its instruction in an attribute and its
/// current result as content.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SimpleField {
    pub instruction: String,
    pub locked: Option<bool>,
    pub dirty: Option<bool>,
    pub content: ChildList<ParagraphContent>,
}

impl SimpleField {
    /// Field type, the first word of the instruction (`PAGE`, `REF`, ...).
    pub fn field_type(&self) -> Option<&str> {
        self.instruction.split_whitespace().next()
    }
}

impl FromXml for SimpleField {
    fn from_xml(element: &XmlElement, options: &ParseOptions) -> Result<Self> {
        Ok(Self {
            instruction: element.attr_string("instr").unwrap_or_default(),
            locked: element.attr_on_off("fldLock", options)?,
            dirty: element.attr_on_off("dirty", options)?,
            content: ChildList::from_children(element, options)?,
        })
    }
}

impl ToXml for SimpleField {
    fn write_xml(&self, tag: &str, xml: &mut String) -> Result<()> {
        writer::open(xml, tag);
        writer::push_attr(xml, "w:instr", &self.instruction);
        writer::push_opt_on_off_attr(xml, "w:fldLock", self.locked);
        writer::push_opt_on_off_attr(xml, "w:dirty", self.dirty);
        xml.push('>');
        self.content.write_children(xml)?;
        writer::close(xml, tag);
        Ok(())
    }
}

/// Tracked insertion or deletion of runs (`w:ins` / `w:del` in a paragraph).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunTrackChange {
    pub info: TrackChange,
    pub content: ChildList<ParagraphContent>,
}

impl FromXml for RunTrackChange {
    fn from_xml(element: &XmlElement, options: &ParseOptions) -> Result<Self> {
        Ok(Self {
            info: TrackChange::read(element, options)?,
            content: ChildList::from_children(element, options)?,
        })
    }
}

impl ToXml for RunTrackChange {
    fn write_xml(&self, tag: &str, xml: &mut String) -> Result<()> {
        writer::open(xml, tag);
        self.info.push_attrs(xml);
        xml.push('>');
        self.content.write_children(xml)?;
        writer::close(xml, tag);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wml::children::ChildElement;

    fn parse_para(xml: &str) -> Paragraph {
        let options = ParseOptions::default();
        let element = XmlElement::parse(xml.as_bytes(), &options).unwrap();
        Paragraph::from_xml(&element, &options).unwrap()
    }

    fn write_para(para: &Paragraph) -> String {
        let mut xml = String::new();
        para.write_xml("w:p", &mut xml).unwrap();
        xml
    }

    #[test]
    fn test_paragraph_text_through_containers() {
        let para = parse_para(
            r#"<w:p><w:r><w:t xml:space="preserve">See </w:t></w:r><w:hyperlink w:anchor="intro"><w:r><w:t>Intro</w:t></w:r></w:hyperlink><w:del w:id="1" w:author="A"><w:r><w:delText>old</w:delText></w:r></w:del><w:ins w:id="2" w:author="A"><w:r><w:t>, page </w:t></w:r></w:ins><w:fldSimple w:instr=" PAGE "><w:r><w:t>3</w:t></w:r></w:fldSimple></w:p>"#,
        );

        assert_eq!(para.text(), "See Intro, page 3");
        assert_eq!(para.runs().count(), 1);
        assert_eq!(para.content.count_of(ParagraphContentKind::Hyperlink), 1);

        match para.content.get(ParagraphContentKind::SimpleField, 0) {
            Some(ParagraphContent::SimpleField(f)) => assert_eq!(f.field_type(), Some("PAGE")),
            other => panic!("unexpected child: {:?}", other),
        }
        match para.content.get(ParagraphContentKind::Deletion, 0) {
            Some(ParagraphContent::Deletion(d)) => assert_eq!(d.info.author, "A"),
            other => panic!("unexpected child: {:?}", other),
        }
    }

    #[test]
    fn test_interleaved_markup_order() {
        let para = parse_para(
            r#"<w:p><w:bookmarkStart w:id="0" w:name="b"/><w:r><w:t>A</w:t></w:r><w:proofErr w:type="spellStart"/><w:r><w:t>B</w:t></w:r><w:proofErr w:type="spellEnd"/><w:bookmarkEnd w:id="0"/></w:p>"#,
        );
        let names: Vec<&str> = para.content.entries().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            ["bookmarkStart", "r", "proofErr", "r", "proofErr", "bookmarkEnd"]
        );
        assert_eq!(para.content.count_of(ParagraphContentKind::ProofErr), 2);
        assert_eq!(para.text(), "AB");
    }

    #[test]
    fn test_paragraph_round_trip() {
        let source = r#"<w:p w:rsidR="00A1" w:rsidRDefault="00A1"><w:pPr><w:pStyle w:val="ListParagraph"/><w:keepNext/><w:numPr><w:ilvl w:val="1"/><w:numId w:val="4"/></w:numPr><w:tabs><w:tab w:val="left" w:pos="720"/></w:tabs><w:spacing w:after="120" w:line="276" w:lineRule="auto"/><w:ind w:left="1440" w:hanging="360"/><w:jc w:val="both"/><w:rPr><w:b/></w:rPr></w:pPr><w:r><w:t>Item</w:t></w:r><w:hyperlink w:history="1" r:id="rId5"><w:r><w:t>link</w:t></w:r></w:hyperlink></w:p>"#;
        let para = parse_para(source);

        let ppr = para.properties.as_ref().unwrap();
        assert_eq!(para.style(), Some("ListParagraph"));
        assert_eq!(para.numbering(), Some((4, 1)));
        assert_eq!(para.justification(), Some(Justification::Both));
        assert_eq!(ppr.indentation.unwrap().hanging, Some(360));
        assert_eq!(ppr.spacing.unwrap().line_rule, Some(LineSpacingRule::Auto));
        assert_eq!(ppr.extra.len(), 1);

        match para.content.get(ParagraphContentKind::Hyperlink, 0) {
            Some(ParagraphContent::Hyperlink(h)) => {
                assert_eq!(h.relationship_id.as_deref(), Some("rId5"));
                assert_eq!(h.text(), "link");
            },
            other => panic!("unexpected child: {:?}", other),
        }

        let written = write_para(&para);
        assert_eq!(written, source);
        assert_eq!(parse_para(&written), para);
    }

    #[test]
    fn test_start_end_indentation() {
        let para = parse_para(r#"<w:p><w:pPr><w:ind w:start="720" w:end="360"/></w:pPr></w:p>"#);
        let ind = para.properties.unwrap().indentation.unwrap();
        assert_eq!(ind.left, Some(720));
        assert_eq!(ind.right, Some(360));
    }

    #[test]
    fn test_run_level_sdt_content() {
        let para = parse_para(
            r#"<w:p><w:sdt><w:sdtPr><w:alias w:val="Name"/><w:text/></w:sdtPr><w:sdtContent><w:r><w:t>Jane</w:t></w:r></w:sdtContent></w:sdt></w:p>"#,
        );
        assert_eq!(para.text(), "Jane");
        let sdt = para.content.get(ParagraphContentKind::Sdt, 0).unwrap();
        assert_eq!(sdt.element_name(), "sdt");
    }

    #[test]
    fn test_edit_by_kind_index() {
        let mut para = Paragraph::with_text("one");
        para.content.push(ParagraphContent::BookmarkStart(Bookmark::new(1, "mark")));
        para.add_run(Run::with_text("two"));

        let old = para
            .content
            .set(1, ParagraphContent::Run(Run::with_text("2")))
            .unwrap();
        assert!(matches!(old, ParagraphContent::Run(r) if r.text() == "two"));
        assert_eq!(para.text(), "one2");

        para.content.remove(ParagraphContentKind::Run, 0);
        assert_eq!(para.text(), "2");
        assert_eq!(para.content.position(ParagraphContentKind::Run, 0), Some(1));
    }

    #[test]
    fn test_revision_attributes_round_trip() {
        let source = r#"<w:p w:rsidR="1" w:rsidP="00AB12" w:rsidDel="2"/>"#;
        let para = parse_para(source);
        assert_eq!(para.rsid_r.as_deref(), Some("1"));
        let names: Vec<&str> = para.extra_attributes.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["w:rsidP", "w:rsidDel"]);
        assert_eq!(write_para(&para), source);
    }

    #[test]
    fn test_empty_paragraph() {
        assert_eq!(write_para(&Paragraph::new()), "<w:p/>");
        assert_eq!(parse_para("<w:p/>").text(), "");
    }
}
