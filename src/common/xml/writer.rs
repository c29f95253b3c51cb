//! String emitters shared by the WordprocessingML writers.
//!
//! Each function appends to the output buffer. Optional values write
//! nothing when absent, so property writers can be a flat list of calls.
use super::{XmlAttribute, XmlEnum};
use super::escape::escape_xml_into;

/// ` name="value"` with the value escaped.
#[inline]
pub fn push_attr(xml: &mut String, name: &str, value: &str) {
    xml.push(' ');
    xml.push_str(name);
    xml.push_str("=\"");
    escape_xml_into(xml, value);
    xml.push('"');
}

/// Attributes kept verbatim from the source, in order.
#[inline]
pub fn push_attributes(xml: &mut String, attributes: &[XmlAttribute]) {
    for attr in attributes {
        push_attr(xml, &attr.name, &attr.value);
    }
}

#[inline]
pub fn push_int_attr<I: itoa::Integer>(xml: &mut String, name: &str, value: I) {
    let mut buf = itoa::Buffer::new();
    xml.push(' ');
    xml.push_str(name);
    xml.push_str("=\"");
    xml.push_str(buf.format(value));
    xml.push('"');
}

#[inline]
pub fn push_opt_attr(xml: &mut String, name: &str, value: Option<&str>) {
    if let Some(v) = value {
        push_attr(xml, name, v);
    }
}

#[inline]
pub fn push_opt_int_attr<I: itoa::Integer>(xml: &mut String, name: &str, value: Option<I>) {
    if let Some(v) = value {
        push_int_attr(xml, name, v);
    }
}

#[inline]
pub fn push_opt_enum_attr<E: XmlEnum>(xml: &mut String, name: &str, value: Option<E>) {
    if let Some(v) = value {
        push_attr(xml, name, v.to_xml());
    }
}

/// `ST_OnOff` attribute, written as `1`/`0`.
#[inline]
pub fn push_opt_on_off_attr(xml: &mut String, name: &str, value: Option<bool>) {
    if let Some(v) = value {
        push_attr(xml, name, if v { "1" } else { "0" });
    }
}

/// `<tag/>`
#[inline]
pub fn write_empty(xml: &mut String, tag: &str) {
    xml.push('<');
    xml.push_str(tag);
    xml.push_str("/>");
}

/// `<tag w:val="value"/>`
#[inline]
pub fn write_val(xml: &mut String, tag: &str, value: &str) {
    xml.push('<');
    xml.push_str(tag);
    push_attr(xml, "w:val", value);
    xml.push_str("/>");
}

#[inline]
pub fn write_opt_val(xml: &mut String, tag: &str, value: Option<&str>) {
    if let Some(v) = value {
        write_val(xml, tag, v);
    }
}

#[inline]
pub fn write_opt_int_val<I: itoa::Integer>(xml: &mut String, tag: &str, value: Option<I>) {
    if let Some(v) = value {
        xml.push('<');
        xml.push_str(tag);
        push_int_attr(xml, "w:val", v);
        xml.push_str("/>");
    }
}

#[inline]
pub fn write_opt_enum_val<E: XmlEnum>(xml: &mut String, tag: &str, value: Option<E>) {
    if let Some(v) = value {
        write_val(xml, tag, v.to_xml());
    }
}

/// `CT_OnOff` element: `<tag/>` when on, `<tag w:val="0"/>` when off.
#[inline]
pub fn write_opt_on_off(xml: &mut String, tag: &str, value: Option<bool>) {
    match value {
        Some(true) => write_empty(xml, tag),
        Some(false) => write_val(xml, tag, "0"),
        None => {},
    }
}

/// `<tag` (the caller writes attributes and the closing `>`)
#[inline]
pub fn open(xml: &mut String, tag: &str) {
    xml.push('<');
    xml.push_str(tag);
}

/// `</tag>`
#[inline]
pub fn close(xml: &mut String, tag: &str) {
    xml.push_str("</");
    xml.push_str(tag);
    xml.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_val_elements() {
        let mut xml = String::new();
        write_val(&mut xml, "w:pStyle", "Heading1");
        write_opt_val(&mut xml, "w:rStyle", None);
        write_opt_int_val(&mut xml, "w:sz", Some(24u32));
        assert_eq!(xml, r#"<w:pStyle w:val="Heading1"/><w:sz w:val="24"/>"#);
    }

    #[test]
    fn test_on_off() {
        let mut xml = String::new();
        write_opt_on_off(&mut xml, "w:b", Some(true));
        write_opt_on_off(&mut xml, "w:i", Some(false));
        write_opt_on_off(&mut xml, "w:caps", None);
        assert_eq!(xml, r#"<w:b/><w:i w:val="0"/>"#);
    }

    #[test]
    fn test_attribute_escaping() {
        let mut xml = String::from("<w:bookmarkStart");
        push_attr(&mut xml, "w:name", "a\"b");
        push_int_attr(&mut xml, "w:id", -1i32);
        assert_eq!(xml, r#"<w:bookmarkStart w:name="a&quot;b" w:id="-1""#);
    }
}
