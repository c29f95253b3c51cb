/// Tables (`w:tbl`), rows (`w:tr`) and cells (`w:tc`).
///
/// Each level has its own content model: a table holds rows, a row holds
/// cells, and both may interleave content controls, custom XML and range
/// markup. A cell holds block content, which is how tables nest.
use super::block::BlockContent;
use super::children::{ChildList, choice_content};
use super::custom_xml::CustomXml;
use super::enums::{HeightRule, Justification, TableLayout, TableWidthType, VerticalJc, VerticalMerge};
use super::markup::{Bookmark, MarkupRange, PermEnd, PermStart, ProofErr};
use super::paragraph::Paragraph;
use super::sdt::Sdt;
use crate::common::xml::{FromXml, ToXml, XmlAttribute, XmlElement, writer};
use crate::error::Result;
use crate::options::ParseOptions;
use serde::{Deserialize, Serialize};

choice_content! {
    /// Children of a table after its properties and grid.
    pub enum TableContent, kind TableContentKind {
        Row(Row) = "tr",
        Sdt(Sdt<TableContent>) = "sdt",
        CustomXml(CustomXml<TableContent>) = "customXml",
        BookmarkStart(Bookmark) = "bookmarkStart",
        BookmarkEnd(MarkupRange) = "bookmarkEnd",
        CommentRangeStart(MarkupRange) = "commentRangeStart",
        CommentRangeEnd(MarkupRange) = "commentRangeEnd",
        PermStart(PermStart) = "permStart",
        PermEnd(PermEnd) = "permEnd",
        ProofErr(ProofErr) = "proofErr",
    }
}

choice_content! {
    /// Children of a table row after its properties.
    pub enum RowContent, kind RowContentKind {
        Cell(Cell) = "tc",
        Sdt(Sdt<RowContent>) = "sdt",
        CustomXml(CustomXml<RowContent>) = "customXml",
        BookmarkStart(Bookmark) = "bookmarkStart",
        BookmarkEnd(MarkupRange) = "bookmarkEnd",
        CommentRangeStart(MarkupRange) = "commentRangeStart",
        CommentRangeEnd(MarkupRange) = "commentRangeEnd",
        PermStart(PermStart) = "permStart",
        PermEnd(PermEnd) = "permEnd",
        ProofErr(ProofErr) = "proofErr",
    }
}

fn collect_rows<'a>(content: &'a ChildList<TableContent>, out: &mut Vec<&'a Row>) {
    for child in content {
        match child {
            TableContent::Row(row) => out.push(row),
            TableContent::Sdt(sdt) => collect_rows(&sdt.content, out),
            TableContent::CustomXml(c) => collect_rows(&c.content, out),
            _ => {},
        }
    }
}

fn collect_cells<'a>(content: &'a ChildList<RowContent>, out: &mut Vec<&'a Cell>) {
    for child in content {
        match child {
            RowContent::Cell(cell) => out.push(cell),
            RowContent::Sdt(sdt) => collect_cells(&sdt.content, out),
            RowContent::CustomXml(c) => collect_cells(&c.content, out),
            _ => {},
        }
    }
}

/// A table.
///
/// # Example
///
/// ```rust
/// use litchi_wml::wml::{Cell, Row, Table};
///
/// let mut table = Table::new();
/// let row = table.add_row(Row::new());
/// row.add_cell(Cell::with_text("Name"));
/// row.add_cell(Cell::with_text("Qty"));
/// table.add_row(Row::new()).add_cell(Cell::with_text("Apples"));
///
/// assert_eq!(table.row_count(), 2);
/// assert_eq!(table.cell(0, 1).map(|c| c.text()), Some("Qty".to_string()));
/// assert_eq!(table.text(), "Name\tQty\nApples");
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Table {
    pub properties: Option<TableProperties>,
    pub grid: Option<TableGrid>,
    pub content: ChildList<TableContent>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_row(&mut self, row: Row) -> &mut Row {
        self.content.push(TableContent::Row(row));
        match self.content.last_mut() {
            Some(TableContent::Row(row)) => row,
            _ => unreachable!("a row was just pushed"),
        }
    }

    /// Rows in order, including rows wrapped in content controls.
    pub fn rows(&self) -> Vec<&Row> {
        let mut rows = Vec::new();
        collect_rows(&self.content, &mut rows);
        rows
    }

    pub fn row_count(&self) -> usize {
        self.rows().len()
    }

    /// Cell at `(row, column)`, counting `w:tc` elements (not grid columns).
    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        let row = *self.rows().get(row)?;
        row.cells().get(column).copied()
    }

    /// Cells separated by `\t`, rows by `\n`.
    pub fn text(&self) -> String {
        self.rows()
            .iter()
            .map(|row| row.text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl FromXml for Table {
    fn from_xml(element: &XmlElement, options: &ParseOptions) -> Result<Self> {
        let properties = match element.child("tblPr") {
            Some(pr) => Some(TableProperties::from_xml(pr, options)?),
            None => None,
        };
        let grid = match element.child("tblGrid") {
            Some(g) => Some(TableGrid::from_xml(g, options)?),
            None => None,
        };
        let content = ChildList::from_elements(
            element
                .elements()
                .filter(|e| !matches!(e.local_name(), "tblPr" | "tblGrid")),
            options,
        )?;
        Ok(Self {
            properties,
            grid,
            content,
        })
    }
}

impl ToXml for Table {
    fn write_xml(&self, tag: &str, xml: &mut String) -> Result<()> {
        writer::open(xml, tag);
        xml.push('>');
        if let Some(pr) = &self.properties {
            pr.write_xml("w:tblPr", xml)?;
        }
        if let Some(grid) = &self.grid {
            grid.write_xml("w:tblGrid", xml)?;
        }
        self.content.write_children(xml)?;
        writer::close(xml, tag);
        Ok(())
    }
}

/// A table row.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Row {
    pub rsid_r: Option<String>,
    pub rsid_tr: Option<String>,
    /// Attributes without a typed field (`w14:paraId`, `w:rsidTrPr`, ...), in source order
    pub extra_attributes: Vec<XmlAttribute>,
    /// `w:tblPrEx` table property exceptions, kept as parsed
    pub exceptions: Option<XmlElement>,
    pub properties: Option<RowProperties>,
    pub content: ChildList<RowContent>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_cell(&mut self, cell: Cell) -> &mut Cell {
        self.content.push(RowContent::Cell(cell));
        match self.content.last_mut() {
            Some(RowContent::Cell(cell)) => cell,
            _ => unreachable!("a cell was just pushed"),
        }
    }

    /// Cells in order, including cells wrapped in content controls.
    pub fn cells(&self) -> Vec<&Cell> {
        let mut cells = Vec::new();
        collect_cells(&self.content, &mut cells);
        cells
    }

    /// Whether this row repeats as a header on each page.
    pub fn is_header(&self) -> bool {
        self.properties
            .as_ref()
            .and_then(|p| p.header)
            .unwrap_or(false)
    }

    pub fn text(&self) -> String {
        self.cells()
            .iter()
            .map(|cell| cell.text())
            .collect::<Vec<_>>()
            .join("\t")
    }
}

impl FromXml for Row {
    fn from_xml(element: &XmlElement, options: &ParseOptions) -> Result<Self> {
        let properties = match element.child("trPr") {
            Some(pr) => Some(RowProperties::from_xml(pr, options)?),
            None => None,
        };
        let content = ChildList::from_elements(
            element
                .elements()
                .filter(|e| !matches!(e.local_name(), "tblPrEx" | "trPr")),
            options,
        )?;
        Ok(Self {
            rsid_r: element.attr_string("rsidR"),
            rsid_tr: element.attr_string("rsidTr"),
            extra_attributes: element.other_attributes(&["rsidR", "rsidTr"]),
            exceptions: element.child("tblPrEx").cloned(),
            properties,
            content,
        })
    }
}

impl ToXml for Row {
    fn write_xml(&self, tag: &str, xml: &mut String) -> Result<()> {
        writer::open(xml, tag);
        writer::push_opt_attr(xml, "w:rsidR", self.rsid_r.as_deref());
        writer::push_opt_attr(xml, "w:rsidTr", self.rsid_tr.as_deref());
        writer::push_attributes(xml, &self.extra_attributes);
        xml.push('>');
        if let Some(ex) = &self.exceptions {
            ex.write_to(xml);
        }
        if let Some(pr) = &self.properties {
            pr.write_xml("w:trPr", xml)?;
        }
        self.content.write_children(xml)?;
        writer::close(xml, tag);
        Ok(())
    }
}

/// A table cell.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Cell {
    pub properties: Option<CellProperties>,
    pub content: ChildList<BlockContent>,
}

impl Cell {
    pub fn new() -> Self {
        Self::default()
    }

    /// A cell holding one paragraph.
    pub fn with_text(text: &str) -> Self {
        let mut cell = Self::new();
        cell.content
            .push(BlockContent::Paragraph(Paragraph::with_text(text)));
        cell
    }

    /// Number of grid columns this cell spans.
    pub fn grid_span(&self) -> u32 {
        self.properties
            .as_ref()
            .and_then(|p| p.grid_span)
            .unwrap_or(1)
    }

    /// Paragraphs (and nested tables) of the cell, one per line.
    pub fn text(&self) -> String {
        self.content.text()
    }
}

impl FromXml for Cell {
    fn from_xml(element: &XmlElement, options: &ParseOptions) -> Result<Self> {
        let properties = match element.child("tcPr") {
            Some(pr) => Some(CellProperties::from_xml(pr, options)?),
            None => None,
        };
        let content = ChildList::from_elements(
            element.elements().filter(|e| e.local_name() != "tcPr"),
            options,
        )?;
        Ok(Self {
            properties,
            content,
        })
    }
}

impl ToXml for Cell {
    fn write_xml(&self, tag: &str, xml: &mut String) -> Result<()> {
        writer::open(xml, tag);
        if self.properties.is_none() && self.content.is_empty() {
            xml.push_str("/>");
            return Ok(());
        }
        xml.push('>');
        if let Some(pr) = &self.properties {
            pr.write_xml("w:tcPr", xml)?;
        }
        self.content.write_children(xml)?;
        writer::close(xml, tag);
        Ok(())
    }
}

/// `ST_MeasurementOrPercent`: the `w:w` of a table or cell width.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeasurementOrPercent {
    /// Twips, or fiftieths of a percent when the width type is `pct`
    Number(i32),
    /// Percentage as written, such as `50%`
    Percent(String),
    /// Universal measure as written, such as `2.5in`
    Measure(String),
}

const MEASURE_UNITS: &[&str] = &["mm", "cm", "in", "pt", "pc", "pi"];

/// `-?[0-9]+(\.[0-9]+)?`
fn is_decimal(s: &str) -> bool {
    let s = s.strip_prefix('-').unwrap_or(s);
    let (int, frac) = match s.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (s, None),
    };
    let digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    digits(int) && frac.is_none_or(digits)
}

impl MeasurementOrPercent {
    fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if let Ok(v) = atoi_simd::parse::<i32, false, false>(raw.as_bytes()) {
            return Some(Self::Number(v));
        }
        if raw.strip_suffix('%').is_some_and(is_decimal) {
            return Some(Self::Percent(raw.to_string()));
        }
        MEASURE_UNITS
            .iter()
            .any(|unit| raw.strip_suffix(*unit).is_some_and(is_decimal))
            .then(|| Self::Measure(raw.to_string()))
    }

    fn push_attr(&self, xml: &mut String, name: &str) {
        match self {
            Self::Number(v) => writer::push_int_attr(xml, name, *v),
            Self::Percent(s) | Self::Measure(s) => writer::push_attr(xml, name, s),
        }
    }
}

/// A width measurement (`CT_TblWidth`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TableWidth {
    pub value: Option<MeasurementOrPercent>,
    pub kind: Option<TableWidthType>,
}

impl TableWidth {
    /// Width in twentieths of a point.
    pub fn dxa(value: i32) -> Self {
        Self {
            value: Some(MeasurementOrPercent::Number(value)),
            kind: Some(TableWidthType::Dxa),
        }
    }

    /// Width as a percentage of the available space, such as `"50%"`.
    pub fn percent(value: impl Into<String>) -> Self {
        Self {
            value: Some(MeasurementOrPercent::Percent(value.into())),
            kind: Some(TableWidthType::Pct),
        }
    }

    fn read(element: &XmlElement, options: &ParseOptions) -> Result<Self> {
        Ok(Self {
            value: element.attr_with("w", options, MeasurementOrPercent::parse)?,
            kind: element.attr_enum("type", options)?,
        })
    }

    fn write(&self, tag: &str, xml: &mut String) {
        writer::open(xml, tag);
        if let Some(value) = &self.value {
            value.push_attr(xml, "w:w");
        }
        writer::push_opt_enum_attr(xml, "w:type", self.kind);
        xml.push_str("/>");
    }
}

/// Table-wide formatting (`w:tblPr`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableProperties {
    /// Table style id (`w:tblStyle`)
    pub style: Option<String>,
    pub width: Option<TableWidth>,
    pub justification: Option<Justification>,
    pub layout: Option<TableLayout>,
    /// `w:tblLook` conditional formatting flags, kept as parsed
    pub look: Option<XmlElement>,
    /// Property elements without a typed field, in source order
    pub extra: Vec<XmlElement>,
}

impl FromXml for TableProperties {
    fn from_xml(element: &XmlElement, options: &ParseOptions) -> Result<Self> {
        let width = match element.child("tblW") {
            Some(w) => Some(TableWidth::read(w, options)?),
            None => None,
        };
        let layout = match element.child("tblLayout") {
            Some(l) => l.attr_enum("type", options)?,
            None => None,
        };
        Ok(Self {
            style: element.child_val("tblStyle"),
            width,
            justification: element.child_val_enum("jc", options)?,
            layout,
            look: element.child("tblLook").cloned(),
            extra: element
                .elements()
                .filter(|e| {
                    !matches!(
                        e.local_name(),
                        "tblStyle" | "tblW" | "jc" | "tblLayout" | "tblLook"
                    )
                })
                .cloned()
                .collect(),
        })
    }
}

impl ToXml for TableProperties {
    /// Untyped children go between `w:jc` and `w:tblLayout`.
    fn write_xml(&self, tag: &str, xml: &mut String) -> Result<()> {
        writer::open(xml, tag);
        xml.push('>');
        writer::write_opt_val(xml, "w:tblStyle", self.style.as_deref());
        if let Some(width) = &self.width {
            width.write("w:tblW", xml);
        }
        writer::write_opt_enum_val(xml, "w:jc", self.justification);
        for element in &self.extra {
            element.write_to(xml);
        }
        if let Some(layout) = self.layout {
            writer::open(xml, "w:tblLayout");
            writer::push_attr(xml, "w:type", layout.to_xml());
            xml.push_str("/>");
        }
        if let Some(look) = &self.look {
            look.write_to(xml);
        }
        writer::close(xml, tag);
        Ok(())
    }
}

/// Column widths of the table grid (`w:tblGrid`), in twips.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TableGrid {
    pub columns: Vec<u32>,
}

impl FromXml for TableGrid {
    fn from_xml(element: &XmlElement, options: &ParseOptions) -> Result<Self> {
        let mut columns = Vec::new();
        for col in element.children_named("gridCol") {
            columns.push(col.attr_u32("w", options)?.unwrap_or(0));
        }
        Ok(Self { columns })
    }
}

impl ToXml for TableGrid {
    fn write_xml(&self, tag: &str, xml: &mut String) -> Result<()> {
        writer::open(xml, tag);
        if self.columns.is_empty() {
            xml.push_str("/>");
            return Ok(());
        }
        xml.push('>');
        for width in &self.columns {
            writer::open(xml, "w:gridCol");
            writer::push_int_attr(xml, "w:w", *width);
            xml.push_str("/>");
        }
        writer::close(xml, tag);
        Ok(())
    }
}

/// `w:trHeight`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RowHeight {
    pub value: Option<u32>,
    pub rule: Option<HeightRule>,
}

/// Row formatting (`w:trPr`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RowProperties {
    pub cant_split: Option<bool>,
    pub height: Option<RowHeight>,
    /// Repeat as header row (`w:tblHeader`)
    pub header: Option<bool>,
    pub extra: Vec<XmlElement>,
}

impl FromXml for RowProperties {
    fn from_xml(element: &XmlElement, options: &ParseOptions) -> Result<Self> {
        let height = match element.child("trHeight") {
            Some(h) => Some(RowHeight {
                value: h.attr_u32("val", options)?,
                rule: h.attr_enum("hRule", options)?,
            }),
            None => None,
        };
        Ok(Self {
            cant_split: element.child_on_off("cantSplit", options)?,
            height,
            header: element.child_on_off("tblHeader", options)?,
            extra: element
                .elements()
                .filter(|e| !matches!(e.local_name(), "cantSplit" | "trHeight" | "tblHeader"))
                .cloned()
                .collect(),
        })
    }
}

impl ToXml for RowProperties {
    fn write_xml(&self, tag: &str, xml: &mut String) -> Result<()> {
        writer::open(xml, tag);
        xml.push('>');
        for element in &self.extra {
            element.write_to(xml);
        }
        writer::write_opt_on_off(xml, "w:cantSplit", self.cant_split);
        if let Some(h) = &self.height {
            writer::open(xml, "w:trHeight");
            writer::push_opt_int_attr(xml, "w:val", h.value);
            writer::push_opt_enum_attr(xml, "w:hRule", h.rule);
            xml.push_str("/>");
        }
        writer::write_opt_on_off(xml, "w:tblHeader", self.header);
        writer::close(xml, tag);
        Ok(())
    }
}

/// `w:shd` cell shading.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Shading {
    /// Pattern (`clear`, `solid`, `pct10`, ...)
    pub pattern: Option<String>,
    pub color: Option<String>,
    pub fill: Option<String>,
}

/// Cell formatting (`w:tcPr`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CellProperties {
    pub width: Option<TableWidth>,
    pub grid_span: Option<u32>,
    /// `w:vMerge`; present without a value means continue
    pub vertical_merge: Option<VerticalMerge>,
    pub shading: Option<Shading>,
    pub vertical_align: Option<VerticalJc>,
    pub extra: Vec<XmlElement>,
}

impl FromXml for CellProperties {
    fn from_xml(element: &XmlElement, options: &ParseOptions) -> Result<Self> {
        let width = match element.child("tcW") {
            Some(w) => Some(TableWidth::read(w, options)?),
            None => None,
        };
        let vertical_merge = match element.child("vMerge") {
            Some(m) => Some(
                m.attr_enum("val", options)?
                    .unwrap_or(VerticalMerge::Continue),
            ),
            None => None,
        };
        let shading = element.child("shd").map(|s| Shading {
            pattern: s.attr_string("val"),
            color: s.attr_string("color"),
            fill: s.attr_string("fill"),
        });
        Ok(Self {
            width,
            grid_span: element.child_val_u32("gridSpan", options)?,
            vertical_merge,
            shading,
            vertical_align: element.child_val_enum("vAlign", options)?,
            extra: element
                .elements()
                .filter(|e| {
                    !matches!(
                        e.local_name(),
                        "tcW" | "gridSpan" | "vMerge" | "shd" | "vAlign"
                    )
                })
                .cloned()
                .collect(),
        })
    }
}

impl ToXml for CellProperties {
    /// Untyped children go between `w:vMerge` and `w:shd`.
    fn write_xml(&self, tag: &str, xml: &mut String) -> Result<()> {
        writer::open(xml, tag);
        xml.push('>');
        if let Some(width) = &self.width {
            width.write("w:tcW", xml);
        }
        writer::write_opt_int_val(xml, "w:gridSpan", self.grid_span);
        match self.vertical_merge {
            Some(VerticalMerge::Restart) => writer::write_val(xml, "w:vMerge", "restart"),
            Some(VerticalMerge::Continue) => writer::write_empty(xml, "w:vMerge"),
            None => {},
        }
        for element in &self.extra {
            element.write_to(xml);
        }
        if let Some(shd) = &self.shading {
            writer::open(xml, "w:shd");
            writer::push_opt_attr(xml, "w:val", shd.pattern.as_deref());
            writer::push_opt_attr(xml, "w:color", shd.color.as_deref());
            writer::push_opt_attr(xml, "w:fill", shd.fill.as_deref());
            xml.push_str("/>");
        }
        writer::write_opt_enum_val(xml, "w:vAlign", self.vertical_align);
        writer::close(xml, tag);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wml::block::BlockContentKind;

    fn parse_table(xml: &str) -> Table {
        let options = ParseOptions::default();
        let element = XmlElement::parse(xml.as_bytes(), &options).unwrap();
        Table::from_xml(&element, &options).unwrap()
    }

    const SOURCE: &str = r#"<w:tbl><w:tblPr><w:tblStyle w:val="TableGrid"/><w:tblW w:w="5000" w:type="pct"/><w:tblBorders><w:top w:val="single"/></w:tblBorders><w:tblLayout w:type="fixed"/><w:tblLook w:val="04A0"/></w:tblPr><w:tblGrid><w:gridCol w:w="4675"/><w:gridCol w:w="4675"/></w:tblGrid><w:tr w:rsidR="001"><w:trPr><w:trHeight w:val="400" w:hRule="atLeast"/><w:tblHeader/></w:trPr><w:tc><w:tcPr><w:tcW w:w="4675" w:type="dxa"/><w:vMerge w:val="restart"/><w:shd w:val="clear" w:color="auto" w:fill="D9D9D9"/><w:vAlign w:val="center"/></w:tcPr><w:p><w:r><w:t>A1</w:t></w:r></w:p></w:tc><w:tc><w:p><w:r><w:t>B1</w:t></w:r></w:p></w:tc></w:tr><w:bookmarkStart w:id="7" w:name="row2"/><w:tr><w:tc><w:tcPr><w:vMerge/></w:tcPr><w:p/></w:tc><w:tc><w:p><w:r><w:t>B2</w:t></w:r></w:p><w:p><w:r><w:t>more</w:t></w:r></w:p></w:tc></w:tr><w:bookmarkEnd w:id="7"/></w:tbl>"#;

    #[test]
    fn test_table_structure() {
        let table = parse_table(SOURCE);

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.content.count_of(TableContentKind::BookmarkStart), 1);
        assert_eq!(table.grid.as_ref().unwrap().columns, vec![4675, 4675]);

        let pr = table.properties.as_ref().unwrap();
        assert_eq!(pr.style.as_deref(), Some("TableGrid"));
        assert_eq!(pr.width.as_ref().unwrap().kind, Some(TableWidthType::Pct));
        assert_eq!(pr.layout, Some(TableLayout::Fixed));
        assert_eq!(pr.extra.len(), 1);

        let header = table.rows()[0];
        assert!(header.is_header());
        assert_eq!(header.properties.as_ref().unwrap().height.unwrap().rule, Some(HeightRule::AtLeast));

        let a1 = table.cell(0, 0).unwrap();
        let tc_pr = a1.properties.as_ref().unwrap();
        assert_eq!(tc_pr.vertical_merge, Some(VerticalMerge::Restart));
        assert_eq!(tc_pr.shading.as_ref().unwrap().fill.as_deref(), Some("D9D9D9"));
        assert_eq!(tc_pr.vertical_align, Some(VerticalJc::Center));

        let a2 = table.cell(1, 0).unwrap();
        assert_eq!(
            a2.properties.as_ref().unwrap().vertical_merge,
            Some(VerticalMerge::Continue)
        );
        assert_eq!(table.cell(1, 1).unwrap().content.count_of(BlockContentKind::Paragraph), 2);
        assert!(table.cell(2, 0).is_none());

        assert_eq!(table.text(), "A1\tB1\n\tB2\nmore");
    }

    #[test]
    fn test_table_round_trip() {
        let table = parse_table(SOURCE);
        let mut xml = String::new();
        table.write_xml("w:tbl", &mut xml).unwrap();
        assert_eq!(xml, SOURCE);
        assert_eq!(parse_table(&xml), table);
    }

    #[test]
    fn test_rows_inside_content_control() {
        let table = parse_table(
            r#"<w:tbl><w:sdt><w:sdtContent><w:tr><w:tc><w:p><w:r><w:t>x</w:t></w:r></w:p></w:tc></w:tr></w:sdtContent></w:sdt></w:tbl>"#,
        );
        assert_eq!(table.content.count_of(TableContentKind::Row), 0);
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.text(), "x");
    }

    #[test]
    fn test_nested_table() {
        let table = parse_table(
            r#"<w:tbl><w:tr><w:tc><w:tbl><w:tr><w:tc><w:p><w:r><w:t>inner</w:t></w:r></w:p></w:tc></w:tr></w:tbl><w:p/></w:tc></w:tr></w:tbl>"#,
        );
        let outer = table.cell(0, 0).unwrap();
        assert_eq!(outer.content.count_of(BlockContentKind::Table), 1);
        assert_eq!(outer.text(), "inner\n");
    }

    #[test]
    fn test_percent_and_measure_widths() {
        let source = r#"<w:tbl><w:tblPr><w:tblW w:w="50%" w:type="pct"/></w:tblPr><w:tr w:rsidR="00A1" w14:paraId="ABCD" w14:textId="EF01" w:rsidTrPr="00C3"><w:tc><w:tcPr><w:tcW w:w="1.5in" w:type="dxa"/></w:tcPr><w:p/></w:tc><w:tc><w:tcPr><w:tcW w:w="2500" w:type="pct"/></w:tcPr><w:p/></w:tc></w:tr></w:tbl>"#;
        let table = parse_table(source);

        let width = table.properties.as_ref().unwrap().width.as_ref().unwrap();
        assert_eq!(width, &TableWidth::percent("50%"));
        let cell_width = |c: usize| table.cell(0, c).unwrap().properties.as_ref().unwrap().width.clone();
        assert_eq!(
            cell_width(0).and_then(|w| w.value),
            Some(MeasurementOrPercent::Measure("1.5in".to_string()))
        );
        assert_eq!(
            cell_width(1).and_then(|w| w.value),
            Some(MeasurementOrPercent::Number(2500))
        );

        let row = table.rows()[0];
        assert_eq!(row.rsid_r.as_deref(), Some("00A1"));
        assert_eq!(row.extra_attributes.len(), 3);

        let mut xml = String::new();
        table.write_xml("w:tbl", &mut xml).unwrap();
        assert_eq!(xml, source);
    }

    #[test]
    fn test_invalid_width_value() {
        let source = r#"<w:tbl><w:tblPr><w:tblW w:w="wide" w:type="pct"/></w:tblPr></w:tbl>"#;
        let options = ParseOptions::default();
        let element = XmlElement::parse(source.as_bytes(), &options).unwrap();
        assert!(matches!(
            Table::from_xml(&element, &options),
            Err(crate::error::WmlError::InvalidAttribute { .. })
        ));

        let lenient = ParseOptions::new().with_strict_attributes(false);
        let table = Table::from_xml(&element, &lenient).unwrap();
        let width = table.properties.unwrap().width.unwrap();
        assert_eq!(width.value, None);
        assert_eq!(width.kind, Some(TableWidthType::Pct));
    }

    #[test]
    fn test_build_table() {
        let mut table = Table::new();
        table.grid = Some(TableGrid {
            columns: vec![2000],
        });
        let cell = table.add_row(Row::new()).add_cell(Cell::with_text("v"));
        cell.properties = Some(CellProperties {
            width: Some(TableWidth::dxa(2000)),
            grid_span: Some(2),
            ..CellProperties::default()
        });
        assert_eq!(table.cell(0, 0).unwrap().grid_span(), 2);

        let mut xml = String::new();
        table.write_xml("w:tbl", &mut xml).unwrap();
        assert_eq!(
            xml,
            r#"<w:tbl><w:tblGrid><w:gridCol w:w="2000"/></w:tblGrid><w:tr><w:tc><w:tcPr><w:tcW w:w="2000" w:type="dxa"/><w:gridSpan w:val="2"/></w:tcPr><w:p><w:r><w:t>v</w:t></w:r></w:p></w:tc></w:tr></w:tbl>"#
        );
    }
}
