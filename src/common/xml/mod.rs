//! XML plumbing shared by the WordprocessingML models.
//!
//! - [`XmlElement`]: element tree produced by the reader, also used to keep
//!   elements that no typed model covers
//! - [`FromXml`] / [`ToXml`]: conversion between the tree and typed models
//! - [`writer`]: string emitters in the style of `write!`-based part writers
mod element;
mod escape;
pub mod writer;

pub use element::{XmlAttribute, XmlElement, XmlNode};
pub use escape::{escape_xml, escape_xml_into};

pub(crate) use element::local_part;

use crate::error::Result;
use crate::options::ParseOptions;

/// Build a typed model from a parsed element.
pub trait FromXml: Sized {
    fn from_xml(element: &XmlElement, options: &ParseOptions) -> Result<Self>;
}

/// Write a typed model as an element.
///
/// The qualified tag is supplied by the caller because several element
/// names share one schema type (`w:bookmarkEnd` and `w:commentRangeStart`
/// are both `CT_MarkupRange`, `w:ins` and `w:del` share a track-change type).
pub trait ToXml {
    fn write_xml(&self, tag: &str, xml: &mut String) -> Result<()>;
}

/// An XML simple type (`ST_*`) backed by a Rust enum.
pub trait XmlEnum: Sized + Copy {
    /// Attribute value for this variant.
    fn to_xml(self) -> &'static str;

    /// Parse an attribute value; `None` if unrecognized.
    fn from_xml(s: &str) -> Option<Self>;
}
