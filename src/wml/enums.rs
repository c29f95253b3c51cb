/// Simple types (`ST_*`) used by the WordprocessingML models.
///
/// Each enum converts to and from its attribute value with `to_xml` /
/// `from_xml`; `from_xml` returns `None` for values outside the type.
use crate::common::xml::XmlEnum;
use std::fmt;

/// Declare an `ST_*` enumeration with its attribute spellings.
macro_rules! st_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $xml:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Convert to the XML attribute value.
            #[inline]
            pub const fn to_xml(self) -> &'static str {
                match self {
                    $( Self::$variant => $xml, )+
                }
            }

            /// Parse from an XML attribute value.
            #[inline]
            pub fn from_xml(s: &str) -> Option<Self> {
                match s {
                    $( $xml => Some(Self::$variant), )+
                    _ => None,
                }
            }
        }

        impl XmlEnum for $name {
            #[inline]
            fn to_xml(self) -> &'static str {
                $name::to_xml(self)
            }

            #[inline]
            fn from_xml(s: &str) -> Option<Self> {
                $name::from_xml(s)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.to_xml())
            }
        }
    };
}

st_enum! {
    /// Paragraph or table alignment (`ST_Jc`).
    pub enum Justification {
        Start = "start",
        Center = "center",
        End = "end",
        Both = "both",
        MediumKashida = "mediumKashida",
        Distribute = "distribute",
        NumTab = "numTab",
        HighKashida = "highKashida",
        LowKashida = "lowKashida",
        ThaiDistribute = "thaiDistribute",
        /// Transitional spelling of `start`.
        Left = "left",
        /// Transitional spelling of `end`.
        Right = "right",
    }
}

st_enum! {
    /// Underline pattern (`ST_Underline`).
    pub enum UnderlineStyle {
        Single = "single",
        Words = "words",
        Double = "double",
        Thick = "thick",
        Dotted = "dotted",
        DottedHeavy = "dottedHeavy",
        Dash = "dash",
        DashedHeavy = "dashedHeavy",
        DashLong = "dashLong",
        DashLongHeavy = "dashLongHeavy",
        DotDash = "dotDash",
        DashDotHeavy = "dashDotHeavy",
        DotDotDash = "dotDotDash",
        DashDotDotHeavy = "dashDotDotHeavy",
        Wave = "wave",
        WavyHeavy = "wavyHeavy",
        WavyDouble = "wavyDouble",
        None = "none",
    }
}

st_enum! {
    /// Kind of `w:br` (`ST_BrType`).
    pub enum BreakType {
        Page = "page",
        Column = "column",
        TextWrapping = "textWrapping",
    }
}

st_enum! {
    /// Where a text-wrapping break restarts (`ST_BrClear`).
    pub enum BreakClear {
        None = "none",
        Left = "left",
        Right = "right",
        All = "all",
    }
}

st_enum! {
    /// Complex field character (`ST_FldCharType`).
    pub enum FieldCharType {
        Begin = "begin",
        Separate = "separate",
        End = "end",
    }
}

st_enum! {
    /// Superscript / subscript (`ST_VerticalAlignRun`).
    pub enum VerticalAlignRun {
        Baseline = "baseline",
        Superscript = "superscript",
        Subscript = "subscript",
    }
}

st_enum! {
    /// How a height value is applied (`ST_HeightRule`).
    pub enum HeightRule {
        Auto = "auto",
        Exact = "exact",
        AtLeast = "atLeast",
    }
}

st_enum! {
    /// Text wrapping around a frame (`ST_Wrap`).
    pub enum FrameWrap {
        Auto = "auto",
        NotBeside = "notBeside",
        Around = "around",
        Tight = "tight",
        Through = "through",
        None = "none",
    }
}

st_enum! {
    /// Drop cap placement (`ST_DropCap`).
    pub enum DropCap {
        None = "none",
        Drop = "drop",
        Margin = "margin",
    }
}

st_enum! {
    /// Horizontal frame anchor (`ST_HAnchor`).
    pub enum HorizontalAnchor {
        Text = "text",
        Margin = "margin",
        Page = "page",
    }
}

st_enum! {
    /// Vertical frame anchor (`ST_VAnchor`).
    pub enum VerticalAnchor {
        Text = "text",
        Margin = "margin",
        Page = "page",
    }
}

st_enum! {
    /// Relative horizontal position (`ST_XAlign`).
    pub enum XAlign {
        Left = "left",
        Center = "center",
        Right = "right",
        Inside = "inside",
        Outside = "outside",
    }
}

st_enum! {
    /// Relative vertical position (`ST_YAlign`).
    pub enum YAlign {
        Inline = "inline",
        Top = "top",
        Center = "center",
        Bottom = "bottom",
        Inside = "inside",
        Outside = "outside",
    }
}

st_enum! {
    /// Interpretation of `w:spacing/@w:line` (`ST_LineSpacingRule`).
    pub enum LineSpacingRule {
        Auto = "auto",
        Exact = "exact",
        AtLeast = "atLeast",
    }
}

st_enum! {
    /// Proofing error boundary (`ST_ProofErr`).
    pub enum ProofErrType {
        SpellStart = "spellStart",
        SpellEnd = "spellEnd",
        GramStart = "gramStart",
        GramEnd = "gramEnd",
    }
}

st_enum! {
    /// Content control locking (`ST_Lock`).
    pub enum SdtLock {
        /// The control cannot be deleted.
        SdtLocked = "sdtLocked",
        /// The contents cannot be edited.
        ContentLocked = "contentLocked",
        Unlocked = "unlocked",
        /// Neither the control nor its contents can change.
        SdtContentLocked = "sdtContentLocked",
    }
}

impl SdtLock {
    /// Whether the control itself is protected from deletion.
    #[inline]
    pub fn locks_control(self) -> bool {
        matches!(self, Self::SdtLocked | Self::SdtContentLocked)
    }

    /// Whether the control's contents are protected from editing.
    #[inline]
    pub fn locks_content(self) -> bool {
        matches!(self, Self::ContentLocked | Self::SdtContentLocked)
    }
}

st_enum! {
    /// Numbering format of a list level (`ST_NumberFormat`).
    pub enum NumberFormat {
        Decimal = "decimal",
        UpperRoman = "upperRoman",
        LowerRoman = "lowerRoman",
        UpperLetter = "upperLetter",
        LowerLetter = "lowerLetter",
        Ordinal = "ordinal",
        CardinalText = "cardinalText",
        OrdinalText = "ordinalText",
        Hex = "hex",
        Chicago = "chicago",
        IdeographDigital = "ideographDigital",
        JapaneseCounting = "japaneseCounting",
        Aiueo = "aiueo",
        Iroha = "iroha",
        DecimalFullWidth = "decimalFullWidth",
        DecimalHalfWidth = "decimalHalfWidth",
        JapaneseLegal = "japaneseLegal",
        JapaneseDigitalTenThousand = "japaneseDigitalTenThousand",
        DecimalEnclosedCircle = "decimalEnclosedCircle",
        DecimalFullWidth2 = "decimalFullWidth2",
        AiueoFullWidth = "aiueoFullWidth",
        IrohaFullWidth = "irohaFullWidth",
        DecimalZero = "decimalZero",
        Bullet = "bullet",
        Ganada = "ganada",
        Chosung = "chosung",
        DecimalEnclosedFullstop = "decimalEnclosedFullstop",
        DecimalEnclosedParen = "decimalEnclosedParen",
        DecimalEnclosedCircleChinese = "decimalEnclosedCircleChinese",
        IdeographEnclosedCircle = "ideographEnclosedCircle",
        IdeographTraditional = "ideographTraditional",
        IdeographZodiac = "ideographZodiac",
        IdeographZodiacTraditional = "ideographZodiacTraditional",
        TaiwaneseCounting = "taiwaneseCounting",
        IdeographLegalTraditional = "ideographLegalTraditional",
        TaiwaneseCountingThousand = "taiwaneseCountingThousand",
        TaiwaneseDigital = "taiwaneseDigital",
        ChineseCounting = "chineseCounting",
        ChineseLegalSimplified = "chineseLegalSimplified",
        ChineseCountingThousand = "chineseCountingThousand",
        KoreanDigital = "koreanDigital",
        KoreanCounting = "koreanCounting",
        KoreanLegal = "koreanLegal",
        KoreanDigital2 = "koreanDigital2",
        VietnameseCounting = "vietnameseCounting",
        RussianLower = "russianLower",
        RussianUpper = "russianUpper",
        None = "none",
        NumberInDash = "numberInDash",
        Hebrew1 = "hebrew1",
        Hebrew2 = "hebrew2",
        ArabicAlpha = "arabicAlpha",
        ArabicAbjad = "arabicAbjad",
        HindiVowels = "hindiVowels",
        HindiConsonants = "hindiConsonants",
        HindiNumbers = "hindiNumbers",
        HindiCounting = "hindiCounting",
        ThaiLetters = "thaiLetters",
        ThaiNumbers = "thaiNumbers",
        ThaiCounting = "thaiCounting",
        BahtText = "bahtText",
        DollarText = "dollarText",
        Custom = "custom",
    }
}

st_enum! {
    /// Character following a list number (`ST_LevelSuffix`).
    pub enum LevelSuffix {
        Tab = "tab",
        Space = "space",
        Nothing = "nothing",
    }
}

st_enum! {
    /// Abstract numbering kind (`ST_MultiLevelType`).
    pub enum MultiLevelType {
        SingleLevel = "singleLevel",
        Multilevel = "multilevel",
        HybridMultilevel = "hybridMultilevel",
    }
}

st_enum! {
    /// Table layout algorithm (`ST_TblLayoutType`).
    pub enum TableLayout {
        Fixed = "fixed",
        Autofit = "autofit",
    }
}

st_enum! {
    /// Unit of a table or cell width (`ST_TblWidth`).
    pub enum TableWidthType {
        Nil = "nil",
        /// Fiftieths of a percent.
        Pct = "pct",
        /// Twentieths of a point.
        Dxa = "dxa",
        Auto = "auto",
    }
}

st_enum! {
    /// Vertical cell merge (`ST_Merge`).
    pub enum VerticalMerge {
        Continue = "continue",
        Restart = "restart",
    }
}

st_enum! {
    /// Vertical alignment of cell content (`ST_VerticalJc`).
    pub enum VerticalJc {
        Top = "top",
        Center = "center",
        Both = "both",
        Bottom = "bottom",
    }
}

/// Specifies one of the three header/footer definitions of a section.
///
/// # Examples
///
/// ```rust
/// use litchi_wml::wml::enums::HeaderFooterType;
///
/// let index = HeaderFooterType::Default;
/// assert_eq!(index.to_xml(), "default");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[repr(u8)]
pub enum HeaderFooterType {
    /// Odd pages, or all pages if no even header/footer exists.
    Default = 1,
    /// First page of the section.
    First = 2,
    /// Even pages of a recto/verso section.
    Even = 3,
}

impl HeaderFooterType {
    /// Convert the header/footer type to its XML attribute value.
    #[inline]
    pub const fn to_xml(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::First => "first",
            Self::Even => "even",
        }
    }

    /// Parse header/footer type from XML attribute value.
    ///
    /// Returns `None` if the value is not recognized.
    #[inline]
    pub fn from_xml(s: &str) -> Option<Self> {
        match s {
            "default" => Some(Self::Default),
            "first" => Some(Self::First),
            "even" => Some(Self::Even),
            _ => None,
        }
    }
}

impl Default for HeaderFooterType {
    #[inline]
    fn default() -> Self {
        Self::Default
    }
}

impl XmlEnum for HeaderFooterType {
    #[inline]
    fn to_xml(self) -> &'static str {
        HeaderFooterType::to_xml(self)
    }

    #[inline]
    fn from_xml(s: &str) -> Option<Self> {
        HeaderFooterType::from_xml(s)
    }
}

impl fmt::Display for HeaderFooterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "Default"),
            Self::First => write!(f, "First Page"),
            Self::Even => write!(f, "Even Page"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_justification_conversion() {
        assert_eq!(Justification::Both.to_xml(), "both");
        assert_eq!(Justification::from_xml("left"), Some(Justification::Left));
        assert_eq!(Justification::from_xml("justify"), None);
    }

    #[test]
    fn test_number_format_conversion() {
        assert_eq!(NumberFormat::from_xml("bullet"), Some(NumberFormat::Bullet));
        assert_eq!(NumberFormat::LowerRoman.to_xml(), "lowerRoman");
        assert_eq!(NumberFormat::DecimalZero.to_string(), "decimalZero");
    }

    #[test]
    fn test_sdt_lock_flags() {
        assert!(SdtLock::SdtContentLocked.locks_control());
        assert!(SdtLock::SdtContentLocked.locks_content());
        assert!(SdtLock::SdtLocked.locks_control());
        assert!(!SdtLock::SdtLocked.locks_content());
        assert!(!SdtLock::Unlocked.locks_content());
    }

    #[test]
    fn test_header_footer_conversion() {
        assert_eq!(HeaderFooterType::Default.to_xml(), "default");
        assert_eq!(
            HeaderFooterType::from_xml("first"),
            Some(HeaderFooterType::First)
        );
        assert_eq!(HeaderFooterType::from_xml("odd"), None);
    }

    #[test]
    fn test_xml_enum_trait_dispatch() {
        fn round<E: XmlEnum + PartialEq + fmt::Debug>(v: E) {
            assert_eq!(E::from_xml(v.to_xml()), Some(v));
        }
        round(FieldCharType::Separate);
        round(HeightRule::AtLeast);
        round(HeaderFooterType::Even);
    }
}
