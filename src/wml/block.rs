/// Block-level content: the children of a body, header, footer, table cell
/// or block-level content control.
use super::children::{ChildList, choice_content};
use super::custom_xml::CustomXml;
use super::markup::{Bookmark, MarkupRange, PermEnd, PermStart, ProofErr};
use super::paragraph::Paragraph;
use super::sdt::Sdt;
use super::table::Table;

choice_content! {
    /// A block-level child (`EG_BlockLevelElts`).
    pub enum BlockContent, kind BlockContentKind {
        Paragraph(Paragraph) = "p",
        Table(Table) = "tbl",
        Sdt(Sdt<BlockContent>) = "sdt",
        CustomXml(CustomXml<BlockContent>) = "customXml",
        BookmarkStart(Bookmark) = "bookmarkStart",
        BookmarkEnd(MarkupRange) = "bookmarkEnd",
        CommentRangeStart(MarkupRange) = "commentRangeStart",
        CommentRangeEnd(MarkupRange) = "commentRangeEnd",
        PermStart(PermStart) = "permStart",
        PermEnd(PermEnd) = "permEnd",
        ProofErr(ProofErr) = "proofErr",
    }
}

impl From<Paragraph> for BlockContent {
    fn from(paragraph: Paragraph) -> Self {
        BlockContent::Paragraph(paragraph)
    }
}

impl From<Table> for BlockContent {
    fn from(table: Table) -> Self {
        BlockContent::Table(table)
    }
}

impl ChildList<BlockContent> {
    /// Direct paragraphs, in order.
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> + '_ {
        self.iter().filter_map(|c| match c {
            BlockContent::Paragraph(p) => Some(p),
            _ => None,
        })
    }

    /// Direct tables, in order.
    pub fn tables(&self) -> impl Iterator<Item = &Table> + '_ {
        self.iter().filter_map(|c| match c {
            BlockContent::Table(t) => Some(t),
            _ => None,
        })
    }

    /// Paragraphs at any depth outside tables, in order, entering content
    /// controls and custom XML.
    pub fn all_paragraphs(&self) -> Vec<&Paragraph> {
        let mut out = Vec::new();
        collect_paragraphs(self, &mut out);
        out
    }

    /// Visible text, one line per paragraph and per table row.
    pub fn text(&self) -> String {
        let mut lines = Vec::new();
        collect_lines(self, &mut lines);
        lines.join("\n")
    }
}

fn collect_paragraphs<'a>(content: &'a ChildList<BlockContent>, out: &mut Vec<&'a Paragraph>) {
    for child in content {
        match child {
            BlockContent::Paragraph(p) => out.push(p),
            BlockContent::Sdt(sdt) => collect_paragraphs(&sdt.content, out),
            BlockContent::CustomXml(c) => collect_paragraphs(&c.content, out),
            _ => {},
        }
    }
}

fn collect_lines(content: &ChildList<BlockContent>, lines: &mut Vec<String>) {
    for child in content {
        match child {
            BlockContent::Paragraph(p) => lines.push(p.text()),
            BlockContent::Table(t) => lines.push(t.text()),
            BlockContent::Sdt(sdt) => collect_lines(&sdt.content, lines),
            BlockContent::CustomXml(c) => collect_lines(&c.content, lines),
            _ => {},
        }
    }
}
