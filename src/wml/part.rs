//! Root-element handling shared by the part models (document, header,
//! footer, numbering).
use crate::common::xml::{XmlAttribute, XmlElement, writer};
use crate::error::{Result, WmlError};
use crate::options::{ParseOptions, WriteOptions};

pub const WORDPROCESSINGML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
pub const RELATIONSHIPS_NS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// Parse part bytes and check the root's local name.
pub(crate) fn parse_root(xml: &[u8], expected: &str, options: &ParseOptions) -> Result<XmlElement> {
    tracing::trace!(part = expected, bytes = xml.len(), "parsing part");
    let root = XmlElement::parse(xml, options)?;
    check_root(&root, expected)?;
    Ok(root)
}

pub(crate) fn check_root(element: &XmlElement, expected: &str) -> Result<()> {
    if element.local_name() == expected {
        Ok(())
    } else {
        Err(WmlError::UnexpectedElement {
            expected: format!("w:{}", expected),
            got: element.name().to_string(),
        })
    }
}

/// `<?xml ...?>` according to `options`.
pub(crate) fn write_declaration(xml: &mut String, options: &WriteOptions) {
    if !options.xml_declaration {
        return;
    }
    if options.standalone {
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    } else {
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    }
}

/// Open a part root with its source attributes.
///
/// `xmlns:w` and `xmlns:r` are declared first unless the source attributes
/// already declare them. The caller writes the closing `>`.
pub(crate) fn open_root(xml: &mut String, tag: &str, attributes: &[XmlAttribute]) {
    writer::open(xml, tag);
    let declares = |name: &str| attributes.iter().any(|a| a.name == name);
    if !declares("xmlns:w") {
        writer::push_attr(xml, "xmlns:w", WORDPROCESSINGML_NS);
    }
    if !declares("xmlns:r") {
        writer::push_attr(xml, "xmlns:r", RELATIONSHIPS_NS);
    }
    for attr in attributes {
        writer::push_attr(xml, &attr.name, &attr.value);
    }
}
