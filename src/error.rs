/// Error types for WordprocessingML parsing and serialization.
use thiserror::Error;

/// Result type for WordprocessingML operations.
pub type Result<T> = std::result::Result<T, WmlError>;

/// Error types for WordprocessingML operations.
#[derive(Error, Debug)]
pub enum WmlError {
    /// Malformed XML or an entity the reader cannot resolve
    #[error("XML error: {0}")]
    Xml(String),

    /// The part root (or a required child) is not the expected element
    #[error("Unexpected element: expected <{expected}>, got <{got}>")]
    UnexpectedElement { expected: String, got: String },

    /// A typed attribute carries a value outside its simple type
    #[error("Invalid value {value:?} for attribute {attribute} on <{element}>")]
    InvalidAttribute {
        element: String,
        attribute: String,
        value: String,
    },

    /// A required attribute is absent
    #[error("Missing attribute {attribute} on <{element}>")]
    MissingAttribute { element: String, attribute: String },

    /// Element nesting went past `ParseOptions::max_depth`
    #[error("Element nesting exceeds the depth limit of {0}")]
    DepthLimit(usize),

    /// An `(element name, value)` pair whose name does not belong to the value's kind
    #[error("Element name mismatch: value is <{expected}>, entry names <{found}>")]
    KindMismatch { expected: String, found: String },

    /// Formatting into the output buffer failed
    #[error("Write error: {0}")]
    Fmt(#[from] std::fmt::Error),
}

impl From<quick_xml::Error> for WmlError {
    fn from(err: quick_xml::Error) -> Self {
        WmlError::Xml(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for WmlError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        WmlError::Xml(err.to_string())
    }
}

impl WmlError {
    pub(crate) fn invalid_attribute(element: &str, attribute: &str, value: &str) -> Self {
        WmlError::InvalidAttribute {
            element: element.to_string(),
            attribute: attribute.to_string(),
            value: value.to_string(),
        }
    }

    pub(crate) fn missing_attribute(element: &str, attribute: &str) -> Self {
        WmlError::MissingAttribute {
            element: element.to_string(),
            attribute: attribute.to_string(),
        }
    }
}
