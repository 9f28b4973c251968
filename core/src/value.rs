//! The value atoms a DICOM element may hold.
//!
//! An element's value is an ordered sequence of atoms. The admissible atom
//! type is fixed by the element's value kind (see
//! [`vr_kind`](crate::header::vr_kind)): for instance, a `US` element holds
//! only [`DicomValue::U16`] atoms, and a sequence holds only
//! [`DicomValue::Item`] atoms whose tag is the item tag.

use crate::element::Element;
use crate::header::{Tag, VrKind};
use chrono::NaiveDate;
use snafu::Snafu;
use std::fmt;

/// The content of an encapsulated (or native) pixel data element.
///
/// `offsets` is the basic offset table: the starting byte offset of each
/// frame, counted from the first byte after the offset table item.
/// `frames` holds one byte blob per frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PixelFrames {
    /// Basic offset table entries.
    pub offsets: Vec<u32>,
    /// One raw data blob per frame.
    pub frames: Vec<Vec<u8>>,
}

impl PixelFrames {
    /// The total byte size of all frames, excluding item headers.
    pub fn frame_data_len(&self) -> usize {
        self.frames.iter().map(Vec::len).sum()
    }
}

/// A single value atom of a DICOM element.
#[derive(Debug, Clone, PartialEq)]
pub enum DicomValue {
    /// A string value, one of possibly many.
    Str(String),
    /// An unsigned 16-bit integer.
    U16(u16),
    /// An unsigned 32-bit integer.
    U32(u32),
    /// A signed 16-bit integer.
    I16(i16),
    /// A signed 32-bit integer.
    I32(i32),
    /// A single-precision float.
    F32(f32),
    /// A double-precision float.
    F64(f64),
    /// An attribute tag (AT).
    Tag(Tag),
    /// A byte blob (OB, OW, OL).
    Bytes(Vec<u8>),
    /// A nested element: a sequence item, or an item's child.
    Item(Element),
    /// Pixel data frames with their basic offset table.
    PixelFrames(PixelFrames),
}

impl DicomValue {
    /// A short name of the atom's type, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            DicomValue::Str(_) => "string",
            DicomValue::U16(_) => "u16",
            DicomValue::U32(_) => "u32",
            DicomValue::I16(_) => "i16",
            DicomValue::I32(_) => "i32",
            DicomValue::F32(_) => "f32",
            DicomValue::F64(_) => "f64",
            DicomValue::Tag(_) => "tag",
            DicomValue::Bytes(_) => "bytes",
            DicomValue::Item(_) => "element",
            DicomValue::PixelFrames(_) => "pixel frames",
        }
    }

    /// Whether this atom is admissible under the given value kind.
    pub fn matches_kind(&self, kind: VrKind) -> bool {
        match kind {
            VrKind::StringList | VrKind::SingleString | VrKind::Date => {
                matches!(self, DicomValue::Str(_))
            }
            VrKind::Bytes => matches!(self, DicomValue::Bytes(_)),
            VrKind::Uint16List => matches!(self, DicomValue::U16(_)),
            VrKind::Uint32List => matches!(self, DicomValue::U32(_)),
            VrKind::Int16List => matches!(self, DicomValue::I16(_)),
            VrKind::Int32List => matches!(self, DicomValue::I32(_)),
            VrKind::Float32List => matches!(self, DicomValue::F32(_)),
            VrKind::Float64List => matches!(self, DicomValue::F64(_)),
            VrKind::TagList => matches!(self, DicomValue::Tag(_)),
            VrKind::Sequence => match self {
                DicomValue::Item(item) => item.tag() == crate::header::ITEM,
                _ => false,
            },
            VrKind::Item => matches!(self, DicomValue::Item(_)),
            VrKind::PixelData => matches!(self, DicomValue::PixelFrames(_)),
        }
    }
}

impl From<String> for DicomValue {
    fn from(v: String) -> Self {
        DicomValue::Str(v)
    }
}

impl From<&str> for DicomValue {
    fn from(v: &str) -> Self {
        DicomValue::Str(v.to_owned())
    }
}

impl From<u16> for DicomValue {
    fn from(v: u16) -> Self {
        DicomValue::U16(v)
    }
}

impl From<u32> for DicomValue {
    fn from(v: u32) -> Self {
        DicomValue::U32(v)
    }
}

impl From<i16> for DicomValue {
    fn from(v: i16) -> Self {
        DicomValue::I16(v)
    }
}

impl From<i32> for DicomValue {
    fn from(v: i32) -> Self {
        DicomValue::I32(v)
    }
}

impl From<f32> for DicomValue {
    fn from(v: f32) -> Self {
        DicomValue::F32(v)
    }
}

impl From<f64> for DicomValue {
    fn from(v: f64) -> Self {
        DicomValue::F64(v)
    }
}

impl From<Tag> for DicomValue {
    fn from(v: Tag) -> Self {
        DicomValue::Tag(v)
    }
}

impl From<Vec<u8>> for DicomValue {
    fn from(v: Vec<u8>) -> Self {
        DicomValue::Bytes(v)
    }
}

impl From<Element> for DicomValue {
    fn from(v: Element) -> Self {
        DicomValue::Item(v)
    }
}

impl From<PixelFrames> for DicomValue {
    fn from(v: PixelFrames) -> Self {
        DicomValue::PixelFrames(v)
    }
}

impl fmt::Display for DicomValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DicomValue::Str(v) => f.write_str(v),
            DicomValue::U16(v) => write!(f, "{}", v),
            DicomValue::U32(v) => write!(f, "{}", v),
            DicomValue::I16(v) => write!(f, "{}", v),
            DicomValue::I32(v) => write!(f, "{}", v),
            DicomValue::F32(v) => write!(f, "{}", v),
            DicomValue::F64(v) => write!(f, "{}", v),
            DicomValue::Tag(v) => write!(f, "{}", v),
            DicomValue::Bytes(v) => write!(f, "<{} bytes>", v.len()),
            DicomValue::Item(v) => write!(f, "{}", v.tag()),
            DicomValue::PixelFrames(v) => write!(f, "<{} frames>", v.frames.len()),
        }
    }
}

/// An error raised when a value atom of one type was requested,
/// but the element holds another.
#[derive(Debug, Clone, PartialEq, Snafu)]
#[snafu(display("Requested a {} value, but the element holds {}", requested, got))]
pub struct CastValueError {
    /// The type requested by the caller.
    pub requested: &'static str,
    /// The type actually held.
    pub got: &'static str,
}

/// Parse a `DA` (date) string of the form `YYYYMMDD` into a calendar date.
pub fn parse_date(text: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(text.trim(), "%Y%m%d")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::{ITEM, SEQUENCE_DELIMITATION_ITEM, VR};

    #[test]
    fn atoms_match_their_kind() {
        assert!(DicomValue::from("DOE^JOHN").matches_kind(VrKind::StringList));
        assert!(DicomValue::from(16u16).matches_kind(VrKind::Uint16List));
        assert!(!DicomValue::from(16u16).matches_kind(VrKind::Uint32List));
        assert!(DicomValue::from(vec![0u8; 4]).matches_kind(VrKind::Bytes));
        assert!(DicomValue::from(Tag(0x0010, 0x0010)).matches_kind(VrKind::TagList));
    }

    #[test]
    fn sequence_kind_requires_item_tag() {
        let item = Element::from_parts(ITEM, VR::NA, false, vec![]);
        assert!(DicomValue::from(item).matches_kind(VrKind::Sequence));

        let stray = Element::from_parts(SEQUENCE_DELIMITATION_ITEM, VR::NA, false, vec![]);
        assert!(!DicomValue::from(stray).matches_kind(VrKind::Sequence));
    }

    #[test]
    fn date_parsing() {
        assert_eq!(
            parse_date("19530828").unwrap(),
            NaiveDate::from_ymd_opt(1953, 8, 28).unwrap()
        );
        assert!(parse_date("1953").is_err());
    }
}
