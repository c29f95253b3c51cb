use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

const REPLACEMENTS: [&str; 5] = ["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"];

// Static initialization: automaton is built only once, thread-safe
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("Failed to build XML escaper")
});

/// Escape XML special characters.
///
/// # Examples
///
/// ```
/// use litchi_wml::common::xml::escape_xml;
/// assert_eq!(escape_xml("a & b"), "a &amp; b");
/// assert_eq!(escape_xml("<tag>\"hello\"</tag>"), "&lt;tag&gt;&quot;hello&quot;&lt;/tag&gt;");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    XML_ESCAPER.replace_all(s, &REPLACEMENTS)
}

/// Escape `s` directly into an output buffer.
///
/// Used by the writers so that attribute values and text do not need an
/// intermediate allocation.
#[inline]
pub fn escape_xml_into(xml: &mut String, s: &str) {
    XML_ESCAPER.replace_all_with(s, xml, |mat, _, dst| {
        dst.push_str(REPLACEMENTS[mat.pattern().as_usize()]);
        true
    });
}
