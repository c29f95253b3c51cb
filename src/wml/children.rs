//! Ordered child lists for XML choice content models.
//!
//! Many WordprocessingML elements accept any interleaving of several child
//! element kinds (`w:p` holds runs, hyperlinks, bookmarks and more in any
//! order). Each such content model is one sum type whose variants are the
//! permitted elements; [`ChildList`] stores those values in document order
//! and lets callers address "the j-th child of kind K" as if every kind had
//! its own array.
//!
//! The kind tag is the variant discriminant, so there is no separate tag
//! array to keep aligned, and a value can never be stored under the wrong
//! kind.
//!
//! # Example
//!
//! ```rust
//! use litchi_wml::wml::{BlockContent, BlockContentKind, ChildList, Paragraph, Table};
//!
//! let mut body: ChildList<BlockContent> = ChildList::new();
//! body.push(BlockContent::Paragraph(Paragraph::with_text("P1")));
//! body.push(BlockContent::Table(Table::new()));
//! body.push(BlockContent::Paragraph(Paragraph::with_text("P2")));
//!
//! assert_eq!(body.count_of(BlockContentKind::Paragraph), 2);
//! assert_eq!(body.count_of(BlockContentKind::Table), 1);
//!
//! body.remove(BlockContentKind::Paragraph, 0);
//! let first = body.get(BlockContentKind::Paragraph, 0);
//! assert!(matches!(first, Some(BlockContent::Paragraph(p)) if p.text() == "P2"));
//! ```
use crate::common::xml::{XmlElement, local_part};
use crate::error::{Result, WmlError};
use crate::options::ParseOptions;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind tag of a content model: one value per permitted element, plus `Other`.
pub trait ChildKind: Copy + Eq + fmt::Debug {
    /// Local element name for this kind; `None` for `Other`.
    fn local_name(self) -> Option<&'static str>;

    /// Map a local element name onto a kind of this content model.
    fn from_local_name(name: &str) -> Option<Self>;
}

/// A value that can sit in a [`ChildList`].
pub trait ChildElement: Sized {
    type Kind: ChildKind;

    /// Kind tag of this value.
    fn kind(&self) -> Self::Kind;

    /// Local element name this value is written as.
    fn element_name(&self) -> &str;

    /// Convert one parsed child element.
    ///
    /// Returns `Ok(None)` when the element is outside the content model and
    /// unknown elements are not being preserved.
    fn from_element(element: &XmlElement, options: &ParseOptions) -> Result<Option<Self>>;

    /// Append this value as XML.
    fn write_element(&self, xml: &mut String) -> Result<()>;
}

/// Document-ordered children of one content model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChildList<T> {
    items: Vec<T>,
}

impl<T> Default for ChildList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> ChildList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Total number of children, all kinds.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a child; returns its absolute index.
    pub fn push(&mut self, value: T) -> usize {
        self.items.push(value);
        self.items.len() - 1
    }

    /// Mutable access to the last child, typically right after `push`.
    #[inline]
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: ChildElement> ChildList<T> {
    /// Number of children of `kind`.
    pub fn count_of(&self, kind: T::Kind) -> usize {
        self.items.iter().filter(|v| v.kind() == kind).count()
    }

    /// Absolute index of the `index`-th child of `kind`.
    pub fn position(&self, kind: T::Kind, index: usize) -> Option<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, v)| v.kind() == kind)
            .nth(index)
            .map(|(pos, _)| pos)
    }

    /// The `index`-th child of `kind`, `None` past the last one.
    pub fn get(&self, kind: T::Kind, index: usize) -> Option<&T> {
        self.position(kind, index).map(|pos| &self.items[pos])
    }

    pub fn get_mut(&mut self, kind: T::Kind, index: usize) -> Option<&mut T> {
        let pos = self.position(kind, index)?;
        Some(&mut self.items[pos])
    }

    /// Replace the `index`-th child of `value`'s kind.
    ///
    /// Returns the replaced child. When no such child exists the list is
    /// left as it was and `value` is handed back in `Err`.
    pub fn set(&mut self, index: usize, value: T) -> std::result::Result<T, T> {
        match self.position(value.kind(), index) {
            Some(pos) => Ok(std::mem::replace(&mut self.items[pos], value)),
            None => Err(value),
        }
    }

    /// Remove the `index`-th child of `kind`; later children shift down.
    pub fn remove(&mut self, kind: T::Kind, index: usize) -> Option<T> {
        let pos = self.position(kind, index)?;
        Some(self.items.remove(pos))
    }

    /// Children of `kind` in document order.
    pub fn of_kind(&self, kind: T::Kind) -> impl Iterator<Item = &T> + '_ {
        self.items.iter().filter(move |v| v.kind() == kind)
    }

    /// Snapshot of the children of `kind` in document order.
    pub fn list_of_kind(&self, kind: T::Kind) -> Vec<&T> {
        self.of_kind(kind).collect()
    }

    /// `(element name, child)` pairs in document order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &T)> + '_ {
        self.items.iter().map(|v| (v.element_name(), v))
    }

    /// Build from `(element name, child)` pairs.
    ///
    /// Names may carry a prefix. A name that is not the one the child is
    /// written as fails with [`WmlError::KindMismatch`].
    pub fn from_entries<'a, I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, T)>,
    {
        let entries = entries.into_iter();
        let mut list = Self::with_capacity(entries.size_hint().0);
        for (name, value) in entries {
            if local_part(name) != value.element_name() {
                return Err(WmlError::KindMismatch {
                    expected: value.element_name().to_string(),
                    found: name.to_string(),
                });
            }
            list.items.push(value);
        }
        Ok(list)
    }

    /// Build from a sequence of parsed elements in document order.
    pub fn from_elements<'a, I>(elements: I, options: &ParseOptions) -> Result<Self>
    where
        I: IntoIterator<Item = &'a XmlElement>,
    {
        let mut list = Self::new();
        for element in elements {
            if let Some(value) = T::from_element(element, options)? {
                list.items.push(value);
            }
        }
        Ok(list)
    }

    /// Build from every child element of `parent`.
    pub fn from_children(parent: &XmlElement, options: &ParseOptions) -> Result<Self> {
        Self::from_elements(parent.elements(), options)
    }

    /// Write all children in stored order.
    pub fn write_children(&self, xml: &mut String) -> Result<()> {
        for child in &self.items {
            child.write_element(xml)?;
        }
        Ok(())
    }
}

impl<T> FromIterator<T> for ChildList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for ChildList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for ChildList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ChildList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> From<Vec<T>> for ChildList<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

/// Declare a choice content model.
///
/// Generates the sum type (with a trailing `Other(XmlElement)` variant),
/// its kind enum, the element-name table and the [`ChildElement`] impl.
/// Every variant type must implement `FromXml` and `ToXml`; it is written
/// under the `w:` prefix.
macro_rules! choice_content {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident, kind $kind:ident {
            $( $(#[$vmeta:meta])* $variant:ident($ty:ty) = $tag:tt, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant($ty), )+
            /// An element outside this content model, kept verbatim.
            Other($crate::common::xml::XmlElement),
        }

        #[doc = concat!("Kind tag of a [`", stringify!($name), "`] child.")]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $kind {
            $( $variant, )+
            Other,
        }

        impl $crate::wml::children::ChildKind for $kind {
            fn local_name(self) -> Option<&'static str> {
                match self {
                    $( Self::$variant => Some($tag), )+
                    Self::Other => None,
                }
            }

            fn from_local_name(name: &str) -> Option<Self> {
                static NAMES: phf::Map<&'static str, $kind> = phf::phf_map! {
                    $( $tag => $kind::$variant, )+
                };
                NAMES.get(name).copied()
            }
        }

        impl $crate::wml::children::ChildElement for $name {
            type Kind = $kind;

            fn kind(&self) -> $kind {
                match self {
                    $( Self::$variant(_) => $kind::$variant, )+
                    Self::Other(_) => $kind::Other,
                }
            }

            fn element_name(&self) -> &str {
                match self {
                    $( Self::$variant(_) => $tag, )+
                    Self::Other(e) => e.local_name(),
                }
            }

            fn from_element(
                element: &$crate::common::xml::XmlElement,
                options: &$crate::options::ParseOptions,
            ) -> $crate::error::Result<Option<Self>> {
                use $crate::wml::children::ChildKind as _;
                match $kind::from_local_name(element.local_name()) {
                    $(
                        Some($kind::$variant) => Ok(Some(Self::$variant(
                            <$ty as $crate::common::xml::FromXml>::from_xml(element, options)?,
                        ))),
                    )+
                    _ if options.preserve_unknown => Ok(Some(Self::Other(element.clone()))),
                    _ => {
                        tracing::debug!(
                            element = element.name(),
                            context = stringify!($name),
                            "dropping element outside the content model"
                        );
                        Ok(None)
                    },
                }
            }

            fn write_element(&self, xml: &mut String) -> $crate::error::Result<()> {
                match self {
                    $(
                        Self::$variant(v) => {
                            $crate::common::xml::ToXml::write_xml(v, concat!("w:", $tag), xml)
                        },
                    )+
                    Self::Other(e) => {
                        e.write_to(xml);
                        Ok(())
                    },
                }
            }
        }
    };
}

pub(crate) use choice_content;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::xml::{FromXml, ToXml, writer};
    use proptest::prelude::*;

    /// Leaf carrying an id so entries can be told apart.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Marker(u32);

    impl FromXml for Marker {
        fn from_xml(element: &XmlElement, options: &ParseOptions) -> Result<Self> {
            Ok(Marker(element.required_u32("id", options)?))
        }
    }

    impl ToXml for Marker {
        fn write_xml(&self, tag: &str, xml: &mut String) -> Result<()> {
            writer::open(xml, tag);
            writer::push_int_attr(xml, "w:id", self.0);
            xml.push_str("/>");
            Ok(())
        }
    }

    choice_content! {
        enum Sample, kind SampleKind {
            A(Marker) = "a",
            B(Marker) = "b",
            C(Marker) = "c",
        }
    }

    fn value(kind: u8, id: u32) -> Sample {
        match kind {
            0 => Sample::A(Marker(id)),
            1 => Sample::B(Marker(id)),
            _ => Sample::C(Marker(id)),
        }
    }

    fn kind_of(kind: u8) -> SampleKind {
        match kind {
            0 => SampleKind::A,
            1 => SampleKind::B,
            _ => SampleKind::C,
        }
    }

    fn parse_root(xml: &str) -> XmlElement {
        XmlElement::parse(xml.as_bytes(), &ParseOptions::default()).unwrap()
    }

    #[test]
    fn test_kind_indexed_access() {
        let mut list = ChildList::new();
        assert_eq!(list.push(Sample::A(Marker(1))), 0);
        assert_eq!(list.push(Sample::B(Marker(2))), 1);
        assert_eq!(list.push(Sample::A(Marker(3))), 2);

        assert_eq!(list.count_of(SampleKind::A), 2);
        assert_eq!(list.count_of(SampleKind::C), 0);
        assert_eq!(list.get(SampleKind::A, 0), Some(&Sample::A(Marker(1))));
        assert_eq!(list.get(SampleKind::A, 1), Some(&Sample::A(Marker(3))));
        assert_eq!(list.get(SampleKind::A, 2), None);
        assert_eq!(list.position(SampleKind::A, 1), Some(2));
        assert_eq!(list.list_of_kind(SampleKind::B), vec![&Sample::B(Marker(2))]);

        assert_eq!(list.remove(SampleKind::A, 0), Some(Sample::A(Marker(1))));
        assert_eq!(list.get(SampleKind::A, 0), Some(&Sample::A(Marker(3))));
        assert_eq!(list.remove(SampleKind::A, 5), None);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_set_replaces_within_kind() {
        let mut list: ChildList<Sample> =
            vec![Sample::A(Marker(1)), Sample::B(Marker(2)), Sample::A(Marker(3))].into();

        assert_eq!(list.set(1, Sample::A(Marker(9))), Ok(Sample::A(Marker(3))));
        assert_eq!(
            list.as_slice(),
            &[Sample::A(Marker(1)), Sample::B(Marker(2)), Sample::A(Marker(9))]
        );

        // Out of range for kind B: the value comes back and nothing changes.
        assert_eq!(list.set(1, Sample::B(Marker(7))), Err(Sample::B(Marker(7))));
        assert_eq!(list.count_of(SampleKind::B), 1);
    }

    #[test]
    fn test_get_mut_edits_in_place() {
        let mut list: ChildList<Sample> = vec![Sample::C(Marker(1))].into();
        if let Some(Sample::C(m)) = list.get_mut(SampleKind::C, 0) {
            m.0 = 5;
        }
        assert_eq!(list.get(SampleKind::C, 0), Some(&Sample::C(Marker(5))));
    }

    #[test]
    fn test_entries_and_from_entries() {
        let list: ChildList<Sample> = vec![Sample::B(Marker(1)), Sample::C(Marker(2))].into();
        let names: Vec<&str> = list.entries().map(|(name, _)| name).collect();
        assert_eq!(names, ["b", "c"]);

        let rebuilt = ChildList::from_entries(
            list.entries().map(|(name, v)| (name, v.clone())).collect::<Vec<_>>(),
        )
        .unwrap();
        assert_eq!(rebuilt, list);

        let prefixed = ChildList::from_entries([("w:a", Sample::A(Marker(1)))]).unwrap();
        assert_eq!(prefixed.len(), 1);

        let err = ChildList::from_entries([("b", Sample::A(Marker(1)))]);
        assert!(matches!(err, Err(WmlError::KindMismatch { .. })));
    }

    #[test]
    fn test_unknown_children() {
        let root = parse_root(r#"<root><a w:id="1"/><x:zz k="v"/><b w:id="2"/></root>"#);

        let kept: ChildList<Sample> = ChildList::from_children(&root, &ParseOptions::default()).unwrap();
        assert_eq!(kept.len(), 3);
        assert_eq!(kept.count_of(SampleKind::Other), 1);
        assert_eq!(kept.entries().nth(1).map(|(n, _)| n), Some("zz"));

        let mut xml = String::new();
        kept.write_children(&mut xml).unwrap();
        assert_eq!(xml, r#"<w:a w:id="1"/><x:zz k="v"/><w:b w:id="2"/>"#);

        let options = ParseOptions::new().with_preserve_unknown(false);
        let dropped: ChildList<Sample> = ChildList::from_children(&root, &options).unwrap();
        assert_eq!(dropped.len(), 2);
        assert_eq!(dropped.count_of(SampleKind::Other), 0);
    }

    #[test]
    fn test_kind_name_table() {
        assert_eq!(SampleKind::from_local_name("b"), Some(SampleKind::B));
        assert_eq!(SampleKind::from_local_name("d"), None);
        assert_eq!(SampleKind::C.local_name(), Some("c"));
        assert_eq!(SampleKind::Other.local_name(), None);
    }

    fn entries_strategy() -> impl Strategy<Value = Vec<(u8, u32)>> {
        prop::collection::vec((0u8..3, any::<u32>()), 0..40)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_order_and_lookup(entries in entries_strategy()) {
            let list: ChildList<Sample> = entries.iter().map(|&(k, id)| value(k, id)).collect();
            prop_assert_eq!(list.len(), entries.len());

            for k in 0u8..3 {
                let kind = kind_of(k);
                let expected: Vec<Sample> = entries
                    .iter()
                    .filter(|(ek, _)| *ek == k)
                    .map(|&(ek, id)| value(ek, id))
                    .collect();
                let actual: Vec<Sample> = list.of_kind(kind).cloned().collect();
                prop_assert_eq!(&actual, &expected);
                prop_assert_eq!(list.count_of(kind), expected.len());

                for (j, v) in expected.iter().enumerate() {
                    prop_assert_eq!(list.get(kind, j), Some(v));
                }
                prop_assert!(list.get(kind, expected.len()).is_none());
            }

            let zipped: Vec<Sample> = list.iter().cloned().collect();
            let appended: Vec<Sample> = entries.iter().map(|&(k, id)| value(k, id)).collect();
            prop_assert_eq!(zipped, appended);
        }

        #[test]
        fn prop_remove_shifts_one_kind(
            entries in entries_strategy(),
            k in 0u8..3,
            j in 0usize..20,
        ) {
            let mut list: ChildList<Sample> = entries.iter().map(|&(k, id)| value(k, id)).collect();
            let kind = kind_of(k);
            let before_count = list.count_of(kind);
            let others_before: Vec<Sample> =
                list.iter().filter(|v| v.kind() != kind).cloned().collect();
            let mut same_before: Vec<Sample> = list.of_kind(kind).cloned().collect();

            let removed = list.remove(kind, j);
            if j < before_count {
                prop_assert_eq!(removed, Some(same_before.remove(j)));
                prop_assert_eq!(list.count_of(kind), before_count - 1);
            } else {
                prop_assert!(removed.is_none());
                prop_assert_eq!(list.count_of(kind), before_count);
            }

            let others_after: Vec<Sample> =
                list.iter().filter(|v| v.kind() != kind).cloned().collect();
            prop_assert_eq!(others_after, others_before);
            let same_after: Vec<Sample> = list.of_kind(kind).cloned().collect();
            prop_assert_eq!(same_after, same_before);
        }

        #[test]
        fn prop_xml_round_trip(entries in entries_strategy()) {
            let list: ChildList<Sample> = entries.iter().map(|&(k, id)| value(k, id)).collect();

            let mut xml = String::from("<root>");
            list.write_children(&mut xml).unwrap();
            xml.push_str("</root>");

            let root = parse_root(&xml);
            let parsed: ChildList<Sample> =
                ChildList::from_children(&root, &ParseOptions::default()).unwrap();
            prop_assert_eq!(&parsed, &list);

            let mut again = String::from("<root>");
            parsed.write_children(&mut again).unwrap();
            again.push_str("</root>");
            prop_assert_eq!(again, xml);
        }
    }
}
