/// Options controlling how WordprocessingML parts are read and written.
///
/// # Examples
///
/// ```rust
/// use litchi_wml::ParseOptions;
///
/// // Create with defaults
/// let options = ParseOptions::default();
/// assert!(options.preserve_unknown);
///
/// // Or customize
/// let options = ParseOptions::new()
///     .with_preserve_unknown(false)
///     .with_max_depth(64);
/// assert_eq!(options.max_depth, 64);
/// ```
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Keep elements that are not part of a content model as raw `Other` children
    pub preserve_unknown: bool,
    /// Maximum element nesting accepted by the reader
    pub max_depth: usize,
    /// Fail on attribute values outside their simple type instead of dropping them
    pub strict_attributes: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            preserve_unknown: true,
            max_depth: 256,
            strict_attributes: true,
        }
    }
}

impl ParseOptions {
    /// Create a new `ParseOptions` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether unknown child elements are kept.
    ///
    /// When disabled, elements outside a content model are dropped and a
    /// `debug` event is logged for each.
    #[inline]
    pub fn with_preserve_unknown(mut self, preserve: bool) -> Self {
        self.preserve_unknown = preserve;
        self
    }

    /// Set the maximum element nesting depth.
    #[inline]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set whether attribute values outside their simple type are errors.
    #[inline]
    pub fn with_strict_attributes(mut self, strict: bool) -> Self {
        self.strict_attributes = strict;
        self
    }
}

/// Options for serializing a part back to XML.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Emit the `<?xml ...?>` declaration
    pub xml_declaration: bool,
    /// Mark the declaration `standalone="yes"`
    pub standalone: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            xml_declaration: true,
            standalone: true,
        }
    }
}

impl WriteOptions {
    /// Create a new `WriteOptions` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether the XML declaration is written.
    #[inline]
    pub fn with_xml_declaration(mut self, declaration: bool) -> Self {
        self.xml_declaration = declaration;
        self
    }

    /// Set the `standalone` flag of the declaration.
    #[inline]
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }
}
