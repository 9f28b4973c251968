//! The DICOM data element and data set types.

use crate::dictionary::DataDictionary;
use crate::header::{vr_kind, Tag, VrKind, ITEM, VR};
use crate::value::{CastValueError, DicomValue};
use snafu::{OptionExt, Snafu};
use std::fmt;

/// An error raised by the validating element constructor.
#[derive(Debug, Clone, PartialEq, Snafu)]
#[non_exhaustive]
pub enum CreateElementError {
    /// The tag has no dictionary entry, so its VR cannot be determined.
    #[snafu(display("No dictionary entry for tag {}", tag))]
    UnknownTag {
        /// the unrecognised tag
        tag: Tag,
    },
    /// A supplied atom does not match the value kind of the tag's VR.
    #[snafu(display(
        "Value #{} of element {} should be of kind {}, but a {} was supplied",
        index,
        tag,
        kind,
        found
    ))]
    ValueType {
        /// the element tag
        tag: Tag,
        /// the expected value kind
        kind: VrKind,
        /// position of the offending atom
        index: usize,
        /// type name of the offending atom
        found: &'static str,
    },
}

/// A single DICOM data element.
///
/// An element owns its value atoms; sequence elements own their items and
/// items own their nested elements, so a data set forms a tree with no
/// back-references.
///
/// Elements are created by the parser while reading, or by callers through
/// the validating [`Element::new`] constructor.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: Tag,
    vr: VR,
    undefined_length: bool,
    values: Vec<DicomValue>,
}

impl Element {
    /// Create an element, validating each value atom against the value kind
    /// of the tag's canonical VR from the given dictionary.
    pub fn new<D>(
        dictionary: D,
        tag: Tag,
        values: Vec<DicomValue>,
    ) -> Result<Self, CreateElementError>
    where
        D: DataDictionary,
    {
        let entry = dictionary.by_tag(tag).context(UnknownTagSnafu { tag })?;
        let vr = entry.vr;
        let kind = vr_kind(tag, vr);
        for (index, value) in values.iter().enumerate() {
            if !value.matches_kind(kind) {
                return ValueTypeSnafu {
                    tag,
                    kind,
                    index,
                    found: value.type_name(),
                }
                .fail();
            }
        }
        Ok(Element {
            tag,
            vr,
            undefined_length: false,
            values,
        })
    }

    /// Create an element from its raw parts, without validating the values
    /// against the VR. Intended for codecs; caution is advised elsewhere.
    pub fn from_parts(tag: Tag, vr: VR, undefined_length: bool, values: Vec<DicomValue>) -> Self {
        Element {
            tag,
            vr,
            undefined_length,
            values,
        }
    }

    /// The element's attribute tag.
    #[inline]
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// The value representation the element was read or built with.
    ///
    /// In a conformant file this matches the dictionary VR of the tag, but a
    /// nonconformant explicit-VR stream may carry a different one; the value
    /// actually used for decoding is kept here.
    #[inline]
    pub fn vr(&self) -> VR {
        self.vr
    }

    /// Whether the element was encoded with the undefined-length sentinel
    /// and delimiter-terminated content. Only meaningful for sequences,
    /// items and encapsulated pixel data.
    #[inline]
    pub fn undefined_length(&self) -> bool {
        self.undefined_length
    }

    /// Request the element to be encoded with undefined length
    /// (or with a pre-measured defined length when `false`).
    pub fn set_undefined_length(&mut self, undefined: bool) {
        self.undefined_length = undefined;
    }

    /// The element's value atoms.
    #[inline]
    pub fn values(&self) -> &[DicomValue] {
        &self.values
    }

    /// Mutable access to the element's value atoms.
    ///
    /// The invariants of the value kind are not re-checked; a mismatching
    /// atom will surface as a type error at write time.
    #[inline]
    pub fn values_mut(&mut self) -> &mut Vec<DicomValue> {
        &mut self.values
    }

    /// The in-memory kind of this element's values.
    pub fn kind(&self) -> VrKind {
        vr_kind(self.tag, self.vr)
    }

    /// Get the single string value.
    /// Returns an error if the element does not hold exactly one string.
    pub fn to_str(&self) -> Result<&str, CastValueError> {
        match self.values.as_slice() {
            [DicomValue::Str(v)] => Ok(v),
            [other] => Err(CastValueError {
                requested: "string",
                got: other.type_name(),
            }),
            _ => Err(CastValueError {
                requested: "string",
                got: "multiple values",
            }),
        }
    }

    /// Get the single `u32` value.
    /// Returns an error if the element does not hold exactly one `u32`.
    pub fn to_u32(&self) -> Result<u32, CastValueError> {
        match self.values.as_slice() {
            [DicomValue::U32(v)] => Ok(*v),
            [other] => Err(CastValueError {
                requested: "u32",
                got: other.type_name(),
            }),
            _ => Err(CastValueError {
                requested: "u32",
                got: "multiple values",
            }),
        }
    }

    /// Get the single `u16` value.
    /// Returns an error if the element does not hold exactly one `u16`.
    pub fn to_u16(&self) -> Result<u16, CastValueError> {
        match self.values.as_slice() {
            [DicomValue::U16(v)] => Ok(*v),
            [other] => Err(CastValueError {
                requested: "u16",
                got: other.type_name(),
            }),
            _ => Err(CastValueError {
                requested: "u16",
                got: "multiple values",
            }),
        }
    }

    /// Collect all string values.
    /// Returns an error on the first non-string atom.
    pub fn strings(&self) -> Result<Vec<&str>, CastValueError> {
        self.values
            .iter()
            .map(|v| match v {
                DicomValue::Str(s) => Ok(s.as_str()),
                other => Err(CastValueError {
                    requested: "string",
                    got: other.type_name(),
                }),
            })
            .collect()
    }

    /// Collect all `u16` values.
    /// Returns an error on the first atom of another type.
    pub fn uint16s(&self) -> Result<Vec<u16>, CastValueError> {
        self.values
            .iter()
            .map(|v| match v {
                DicomValue::U16(n) => Ok(*n),
                other => Err(CastValueError {
                    requested: "u16",
                    got: other.type_name(),
                }),
            })
            .collect()
    }

    /// Collect all `u32` values.
    /// Returns an error on the first atom of another type.
    pub fn uint32s(&self) -> Result<Vec<u32>, CastValueError> {
        self.values
            .iter()
            .map(|v| match v {
                DicomValue::U32(n) => Ok(*n),
                other => Err(CastValueError {
                    requested: "u32",
                    got: other.type_name(),
                }),
            })
            .collect()
    }

    /// Parse the single string value as a `DA` date.
    pub fn to_date(&self) -> Result<chrono::NaiveDate, CastValueError> {
        let text = self.to_str()?;
        crate::value::parse_date(text).map_err(|_| CastValueError {
            requested: "date",
            got: "string",
        })
    }
}

fn fmt_element(f: &mut fmt::Formatter, element: &Element, level: usize) -> fmt::Result {
    let indent = " ".repeat(level * 2);
    let undefined = if element.undefined_length { " u" } else { "" };
    write!(f, "{}{} {}{}", indent, element.tag, element.vr, undefined)?;
    if element.vr == VR::SQ || element.tag == ITEM {
        writeln!(f, " (#{})[", element.values.len())?;
        for value in &element.values {
            if let DicomValue::Item(item) = value {
                fmt_element(f, item, level + 1)?;
                writeln!(f)?;
            }
        }
        write!(f, "{}]", indent)
    } else {
        match element.values.as_slice() {
            [single] => write!(f, " {}", single),
            many => {
                write!(f, " ({})", many.len())?;
                for value in many {
                    write!(f, " {}", value)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_element(f, self, 0)
    }
}

/// An ordered collection of DICOM data elements, including the file meta
/// group (group 0002) and the data set body.
///
/// Duplicate tags are tolerated; element order is the order of first
/// occurrence in the file or of insertion.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataSet {
    elements: Vec<Element>,
}

impl DataSet {
    /// Create an empty data set.
    pub fn new() -> Self {
        DataSet::default()
    }

    /// Create a data set from a list of elements, preserving their order.
    pub fn from_elements(elements: Vec<Element>) -> Self {
        DataSet { elements }
    }

    /// Append an element at the end of the data set.
    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// All elements, in order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// The number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the data set holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Find the first element with the given tag.
    pub fn element<T>(&self, tag: T) -> Option<&Element>
    where
        T: Into<Tag>,
    {
        let tag = tag.into();
        self.elements.iter().find(|e| e.tag() == tag)
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.elements.iter()
    }
}

impl IntoIterator for DataSet {
    type Item = Element;
    type IntoIter = std::vec::IntoIter<Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a> IntoIterator for &'a DataSet {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl Extend<Element> for DataSet {
    fn extend<T: IntoIterator<Item = Element>>(&mut self, iter: T) {
        self.elements.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::DictionaryEntry;

    /// A small fixed dictionary for constructor tests.
    struct TestDictionary;

    static TEST_ENTRIES: &[DictionaryEntry] = &[
        DictionaryEntry {
            tag: Tag(0x0010, 0x0010),
            alias: "PatientName",
            vr: VR::PN,
            vm: "1",
        },
        DictionaryEntry {
            tag: Tag(0x0028, 0x0010),
            alias: "Rows",
            vr: VR::US,
            vm: "1",
        },
        DictionaryEntry {
            tag: Tag(0x0008, 0x1140),
            alias: "ReferencedImageSequence",
            vr: VR::SQ,
            vm: "1",
        },
    ];

    impl DataDictionary for TestDictionary {
        fn by_tag(&self, tag: Tag) -> Option<&DictionaryEntry> {
            TEST_ENTRIES.iter().find(|e| e.tag == tag)
        }

        fn by_name(&self, name: &str) -> Option<&DictionaryEntry> {
            TEST_ENTRIES.iter().find(|e| e.alias == name)
        }
    }

    #[test]
    fn validating_constructor_accepts_matching_atoms() {
        let element = Element::new(
            TestDictionary,
            Tag(0x0010, 0x0010),
            vec![DicomValue::from("DOE^JOHN")],
        )
        .unwrap();
        assert_eq!(element.vr(), VR::PN);
        assert_eq!(element.to_str().unwrap(), "DOE^JOHN");

        let element = Element::new(
            TestDictionary,
            Tag(0x0028, 0x0010),
            vec![DicomValue::from(512u16)],
        )
        .unwrap();
        assert_eq!(element.uint16s().unwrap(), vec![512]);
    }

    #[test]
    fn validating_constructor_rejects_wrong_atom_type() {
        let err = Element::new(
            TestDictionary,
            Tag(0x0028, 0x0010),
            vec![DicomValue::from("512")],
        )
        .unwrap_err();
        assert!(matches!(err, CreateElementError::ValueType { index: 0, .. }));
    }

    #[test]
    fn validating_constructor_rejects_unknown_tag() {
        let err = Element::new(TestDictionary, Tag(0x0009, 0x0001), vec![]).unwrap_err();
        assert!(matches!(err, CreateElementError::UnknownTag { .. }));
    }

    #[test]
    fn sequence_items_must_be_item_tagged() {
        let stray = Element::from_parts(Tag(0x0010, 0x0010), VR::PN, false, vec![]);
        let err = Element::new(
            TestDictionary,
            Tag(0x0008, 0x1140),
            vec![DicomValue::from(stray)],
        )
        .unwrap_err();
        assert!(matches!(err, CreateElementError::ValueType { .. }));

        let item = Element::from_parts(ITEM, VR::NA, false, vec![]);
        assert!(Element::new(
            TestDictionary,
            Tag(0x0008, 0x1140),
            vec![DicomValue::from(item)],
        )
        .is_ok());
    }

    #[test]
    fn single_value_getters_require_multiplicity_one() {
        let element = Element::from_parts(
            Tag(0x0008, 0x0008),
            VR::CS,
            false,
            vec![DicomValue::from("ORIGINAL"), DicomValue::from("PRIMARY")],
        );
        assert!(element.to_str().is_err());
        assert_eq!(element.strings().unwrap(), vec!["ORIGINAL", "PRIMARY"]);
    }

    #[test]
    fn data_set_lookup_returns_first_occurrence() {
        let mut ds = DataSet::new();
        ds.push(Element::from_parts(
            Tag(0x0010, 0x0010),
            VR::PN,
            false,
            vec![DicomValue::from("ONE")],
        ));
        ds.push(Element::from_parts(
            Tag(0x0010, 0x0010),
            VR::PN,
            false,
            vec![DicomValue::from("TWO")],
        ));
        let found = ds.element(Tag(0x0010, 0x0010)).unwrap();
        assert_eq!(found.to_str().unwrap(), "ONE");
        assert!(ds.element(Tag(0x0020, 0x000D)).is_none());
        assert_eq!(ds.len(), 2);
    }
}
