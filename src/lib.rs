//! Litchi WML - typed WordprocessingML content models
//!
//! This library reads and writes the XML parts of Word (.docx) documents
//! as typed Rust values while keeping every child element in document
//! order.
//!
//! # Features
//!
//! - **Ordered choice content**: paragraphs, tables and other interleaved
//!   children live in one [`ChildList`](wml::ChildList) addressable by kind
//! - **Lossless round-trip**: unknown elements, property children and
//!   unmodelled attributes are kept and written back
//! - **Typed properties**: run, paragraph, table and numbering properties
//!   with `ST_*` enumerations
//! - **Text extraction**: visible text of runs, paragraphs, tables and
//!   whole parts
//!
//! # Example - Reading a document part
//!
//! ```rust
//! use litchi_wml::wml::{BlockContentKind, Document};
//!
//! # fn main() -> Result<(), litchi_wml::WmlError> {
//! let xml = br#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
//!   <w:body>
//!     <w:p><w:r><w:t>Intro</w:t></w:r></w:p>
//!     <w:tbl><w:tr><w:tc><w:p><w:r><w:t>cell</w:t></w:r></w:p></w:tc></w:tr></w:tbl>
//!   </w:body>
//! </w:document>"#;
//!
//! let doc = Document::from_xml_bytes(xml)?;
//! assert_eq!(doc.body.content.count_of(BlockContentKind::Paragraph), 1);
//! assert_eq!(doc.body.content.count_of(BlockContentKind::Table), 1);
//! assert_eq!(doc.text(), "Intro\ncell");
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Options
//!
//! ```rust
//! use litchi_wml::{ParseOptions, WriteOptions};
//! use litchi_wml::wml::Document;
//!
//! # fn main() -> Result<(), litchi_wml::WmlError> {
//! let options = ParseOptions::new().with_preserve_unknown(false);
//! let doc = Document::from_xml_bytes_with(b"<w:document><w:body><w:altChunk/></w:body></w:document>", &options)?;
//! assert!(doc.body.content.is_empty());
//!
//! let xml = doc.to_xml_string_with(&WriteOptions::new().with_xml_declaration(false))?;
//! assert!(xml.starts_with("<w:document"));
//! # Ok(())
//! # }
//! ```

/// XML tree, escaping and writer helpers
pub mod common;

/// Error types
pub mod error;

/// Parse and write options
pub mod options;

/// WordprocessingML content models
pub mod wml;

pub use error::{Result, WmlError};
pub use options::{ParseOptions, WriteOptions};
