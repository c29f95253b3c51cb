/// WordprocessingML content models.
///
/// Every element whose schema allows an interleaving of several child
/// kinds keeps its children in a [`ChildList`], so document order survives
/// a read/write cycle while callers still address "the n-th paragraph" or
/// "the first table" directly.
///
/// # Architecture
///
/// - [`Document`], [`HeaderFooter`], [`Numbering`]: part roots
/// - [`BlockContent`]: paragraphs, tables and block-level wrappers
/// - [`Paragraph`] / [`ParagraphContent`]: runs and inline wrappers
/// - [`Run`] / [`RunContent`]: text, tabs, breaks and field characters
/// - [`Table`] / [`Row`] / [`Cell`]: tables, whose cells hold block content
/// - [`Sdt`] and [`CustomXml`]: wrappers generic over the content they hold
///
/// Elements without a typed model are kept as [`XmlElement`] values when
/// [`ParseOptions::preserve_unknown`] is set.
///
/// # Example
///
/// ```rust
/// use litchi_wml::wml::{Cell, Document, Paragraph, Row, Table};
///
/// # fn main() -> Result<(), litchi_wml::WmlError> {
/// let mut doc = Document::new();
/// doc.add_paragraph(Paragraph::with_text("Totals"));
///
/// let mut table = Table::new();
/// let row = table.add_row(Row::new());
/// row.add_cell(Cell::with_text("a"));
/// row.add_cell(Cell::with_text("b"));
/// doc.add_table(table);
///
/// assert_eq!(doc.text(), "Totals\na\tb");
/// # Ok(())
/// # }
/// ```
///
/// [`XmlElement`]: crate::common::xml::XmlElement
/// [`ParseOptions::preserve_unknown`]: crate::options::ParseOptions::preserve_unknown
pub mod block;
pub mod children;
pub mod custom_xml;
pub mod document;
pub mod enums;
pub mod frame;
pub mod header_footer;
pub mod markup;
pub mod numbering;
pub mod paragraph;
pub mod part;
pub mod run;
pub mod sdt;
pub mod table;

pub use block::{BlockContent, BlockContentKind};
pub use children::{ChildElement, ChildKind, ChildList};
pub use custom_xml::CustomXml;
pub use document::{Body, Document};
pub use frame::FrameProperties;
pub use header_footer::{HeaderFooter, HeaderFooterKind, SectionReference, section_references};
pub use markup::{Bookmark, MarkupRange, PermEnd, PermStart, ProofErr, TrackChange};
pub use numbering::{
    AbstractNum, DecimalNumber, Level, LevelOverride, Num, Numbering, NumberingContent,
    NumberingContentKind, PictureBullet,
};
pub use paragraph::{
    Hyperlink, Indentation, NumberingReference, Paragraph, ParagraphContent, ParagraphContentKind,
    ParagraphProperties, RunTrackChange, SimpleField, Spacing,
};
pub use run::{
    Break, Empty, FieldChar, NoteReference, Run, RunContent, RunContentKind, RunFonts,
    RunProperties, Symbol, Text, Underline,
};
pub use sdt::{DocPartReference, ListControl, ListItem, Sdt, SdtProperties, SdtType};
pub use table::{
    Cell, CellProperties, MeasurementOrPercent, Row, RowContent, RowContentKind, RowHeight,
    RowProperties, Shading, Table, TableContent, TableContentKind, TableGrid, TableProperties,
    TableWidth,
};
