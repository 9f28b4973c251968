//! Basic data types for addressing and describing DICOM data elements:
//! the attribute tag, the value representation and its in-memory kind.

use snafu::{OptionExt, ResultExt, Snafu};
use std::fmt;
use std::str::{from_utf8, FromStr};

/// Idiomatic alias for a tag's group number.
pub type GroupNumber = u16;
/// Idiomatic alias for a tag's element number.
pub type ElementNumber = u16;

/// The sentinel value length signalling delimiter-terminated content.
pub const UNDEFINED_LENGTH: u32 = 0xFFFF_FFFF;

/// The group number shared by item and delimiter tags.
pub const ITEM_GROUP: GroupNumber = 0xFFFE;

/// The tag of a sequence item: (FFFE,E000).
pub const ITEM: Tag = Tag(0xFFFE, 0xE000);
/// The tag closing an undefined-length item: (FFFE,E00D).
pub const ITEM_DELIMITATION_ITEM: Tag = Tag(0xFFFE, 0xE00D);
/// The tag closing an undefined-length sequence: (FFFE,E0DD).
pub const SEQUENCE_DELIMITATION_ITEM: Tag = Tag(0xFFFE, 0xE0DD);
/// The tag of the pixel data attribute: (7FE0,0010).
pub const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);

/// The data type for a DICOM attribute tag.
///
/// Tags are ordered by group number first and element number second.
/// Both `(u16, u16)` and `[u16; 2]` can be efficiently converted
/// to this type.
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy)]
pub struct Tag(pub GroupNumber, pub ElementNumber);

impl Tag {
    /// Getter for the tag's group value.
    #[inline]
    pub fn group(self) -> GroupNumber {
        self.0
    }

    /// Getter for the tag's element value.
    #[inline]
    pub fn element(self) -> ElementNumber {
        self.1
    }

    /// Whether this tag belongs to a private (odd) group.
    #[inline]
    pub fn is_private(self) -> bool {
        self.0 % 2 == 1
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Tag({:#06X?}, {:#06X?})", self.0, self.1)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:04X},{:04X})", self.0, self.1)
    }
}

impl PartialEq<(u16, u16)> for Tag {
    fn eq(&self, other: &(u16, u16)) -> bool {
        self.0 == other.0 && self.1 == other.1
    }
}

impl PartialEq<[u16; 2]> for Tag {
    fn eq(&self, other: &[u16; 2]) -> bool {
        self.0 == other[0] && self.1 == other[1]
    }
}

impl From<(u16, u16)> for Tag {
    #[inline]
    fn from(value: (u16, u16)) -> Tag {
        Tag(value.0, value.1)
    }
}

impl From<[u16; 2]> for Tag {
    #[inline]
    fn from(value: [u16; 2]) -> Tag {
        Tag(value[0], value[1])
    }
}

/// An error returned when parsing an invalid tag from text.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum ParseTagError {
    /// The text does not contain both tag components.
    #[snafu(display("Not enough tag components, expected (group, element)"))]
    MissingComponent,
    /// A component is not a valid 16-bit hexadecimal number.
    #[snafu(display("Invalid hexadecimal tag component `{}`", component))]
    InvalidComponent {
        /// the component text
        component: String,
        /// the underlying parse error
        source: std::num::ParseIntError,
    },
}

impl FromStr for Tag {
    type Err = ParseTagError;

    /// Parses a tag from its textual form, with or without the surrounding
    /// parentheses: `"(0010,0010)"` or `"0010,0010"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().trim_start_matches('(').trim_end_matches(')');
        let mut parts = s.splitn(2, ',');
        let group = parts.next().context(MissingComponentSnafu)?.trim();
        let element = parts.next().context(MissingComponentSnafu)?.trim();
        let group = u16::from_str_radix(group, 16).context(InvalidComponentSnafu {
            component: group.to_string(),
        })?;
        let element = u16::from_str_radix(element, 16).context(InvalidComponentSnafu {
            component: element.to_string(),
        })?;
        Ok(Tag(group, element))
    }
}

/// An enum type for a DICOM value representation.
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone, Ord, PartialOrd)]
pub enum VR {
    /// Application Entity
    AE,
    /// Age String
    AS,
    /// Attribute Tag
    AT,
    /// Code String
    CS,
    /// Date
    DA,
    /// Decimal String
    DS,
    /// Date Time
    DT,
    /// Floating Point Single
    FL,
    /// Floating Point Double
    FD,
    /// Integer String
    IS,
    /// Long String
    LO,
    /// Long Text
    LT,
    /// Not Applicable: the pseudo-VR of sequence items and delimiters
    NA,
    /// Other Byte
    OB,
    /// Other Double
    OD,
    /// Other Float
    OF,
    /// Other Long
    OL,
    /// Other Word
    OW,
    /// Person Name
    PN,
    /// Short String
    SH,
    /// Signed Long
    SL,
    /// Sequence of Items
    SQ,
    /// Signed Short
    SS,
    /// Short Text
    ST,
    /// Time
    TM,
    /// Unlimited Characters
    UC,
    /// Unique Identifier (UID)
    UI,
    /// Unsigned Long
    UL,
    /// Unknown
    UN,
    /// Universal Resource Identifier or Locator (URI/URL)
    UR,
    /// Unsigned Short
    US,
    /// Unlimited Text
    UT,
}

impl VR {
    /// Obtain the value representation corresponding to the given two bytes.
    /// Each byte should represent an alphabetic character in upper case.
    pub fn from_binary(chars: [u8; 2]) -> Option<Self> {
        from_utf8(chars.as_ref())
            .ok()
            .and_then(|s| VR::from_str(s).ok())
    }

    /// Retrieve a string representation of this VR.
    pub fn to_str(self) -> &'static str {
        use VR::*;
        match self {
            AE => "AE",
            AS => "AS",
            AT => "AT",
            CS => "CS",
            DA => "DA",
            DS => "DS",
            DT => "DT",
            FL => "FL",
            FD => "FD",
            IS => "IS",
            LO => "LO",
            LT => "LT",
            NA => "NA",
            OB => "OB",
            OD => "OD",
            OF => "OF",
            OL => "OL",
            OW => "OW",
            PN => "PN",
            SH => "SH",
            SL => "SL",
            SQ => "SQ",
            SS => "SS",
            ST => "ST",
            TM => "TM",
            UC => "UC",
            UI => "UI",
            UL => "UL",
            UN => "UN",
            UR => "UR",
            US => "US",
            UT => "UT",
        }
    }

    /// Retrieve a copy of this VR's byte representation.
    /// The function returns two alphabetic characters in upper case.
    pub fn to_bytes(self) -> [u8; 2] {
        let bytes = self.to_str().as_bytes();
        [bytes[0], bytes[1]]
    }

    /// Whether an element header with this VR is encoded in the explicit
    /// long form (two reserved bytes followed by a 32-bit length).
    pub fn has_long_form(self) -> bool {
        use VR::*;
        matches!(self, NA | OB | OD | OF | OL | OW | SQ | UN | UC | UR | UT)
    }
}

/// Obtain the value representation corresponding to the given string.
/// The string should hold exactly two UTF-8 encoded alphabetic characters
/// in upper case, otherwise no match is made.
impl FromStr for VR {
    type Err = &'static str;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        use VR::*;
        match string {
            "AE" => Ok(AE),
            "AS" => Ok(AS),
            "AT" => Ok(AT),
            "CS" => Ok(CS),
            "DA" => Ok(DA),
            "DS" => Ok(DS),
            "DT" => Ok(DT),
            "FL" => Ok(FL),
            "FD" => Ok(FD),
            "IS" => Ok(IS),
            "LO" => Ok(LO),
            "LT" => Ok(LT),
            "NA" => Ok(NA),
            "OB" => Ok(OB),
            "OD" => Ok(OD),
            "OF" => Ok(OF),
            "OL" => Ok(OL),
            "OW" => Ok(OW),
            "PN" => Ok(PN),
            "SH" => Ok(SH),
            "SL" => Ok(SL),
            "SQ" => Ok(SQ),
            "SS" => Ok(SS),
            "ST" => Ok(ST),
            "TM" => Ok(TM),
            "UC" => Ok(UC),
            "UI" => Ok(UI),
            "UL" => Ok(UL),
            "UN" => Ok(UN),
            "UR" => Ok(UR),
            "US" => Ok(US),
            "UT" => Ok(UT),
            _ => Err("no such value representation"),
        }
    }
}

impl fmt::Display for VR {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(VR::to_str(*self))
    }
}

/// The in-memory kind of an element's value, as determined by its tag and
/// value representation. Each kind admits exactly one atom type
/// (see [`DicomValue`](crate::value::DicomValue)).
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone)]
pub enum VrKind {
    /// A list of strings, one per value.
    StringList,
    /// A single unsplit string (LT, UT).
    SingleString,
    /// A single byte blob (OB, OW, OL).
    Bytes,
    /// A list of unsigned 16-bit integers.
    Uint16List,
    /// A list of unsigned 32-bit integers.
    Uint32List,
    /// A list of signed 16-bit integers.
    Int16List,
    /// A list of signed 32-bit integers.
    Int32List,
    /// A list of single-precision floats.
    Float32List,
    /// A list of double-precision floats.
    Float64List,
    /// A list of attribute tags (AT).
    TagList,
    /// A single date string (DA).
    Date,
    /// A sequence of items, each an element tagged (FFFE,E000).
    Sequence,
    /// A sequence item holding arbitrary nested elements.
    Item,
    /// Encapsulated or native pixel data frames.
    PixelData,
}

impl fmt::Display for VrKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Determine the in-memory value kind of an element with the given tag and
/// value representation. The item and pixel data tags take precedence over
/// the VR.
pub fn vr_kind(tag: Tag, vr: VR) -> VrKind {
    if tag == ITEM {
        return VrKind::Item;
    }
    if tag == PIXEL_DATA {
        return VrKind::PixelData;
    }
    match vr {
        VR::DA => VrKind::Date,
        VR::AT => VrKind::TagList,
        VR::OB | VR::OW | VR::OL => VrKind::Bytes,
        VR::LT | VR::UT => VrKind::SingleString,
        VR::UL => VrKind::Uint32List,
        VR::SL => VrKind::Int32List,
        VR::US => VrKind::Uint16List,
        VR::SS => VrKind::Int16List,
        VR::FL | VR::OF => VrKind::Float32List,
        VR::FD | VR::OD => VrKind::Float64List,
        VR::SQ => VrKind::Sequence,
        _ => VrKind::StringList,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_ordering_and_accessors() {
        let a = Tag(0x0010, 0x0010);
        let b = Tag(0x0020, 0x000D);
        assert!(a < b);
        assert!(Tag(0x0010, 0x0020) > a);
        assert_eq!(a.group(), 0x0010);
        assert_eq!(a.element(), 0x0010);
        assert_eq!(a, (0x0010u16, 0x0010u16));
        assert_eq!(b, [0x0020u16, 0x000Du16]);
        assert!(!a.is_private());
        assert!(Tag(0x0009, 0x0010).is_private());
    }

    #[test]
    fn tag_display_and_parse() {
        let tag = Tag(0x0008, 0x103E);
        assert_eq!(tag.to_string(), "(0008,103E)");
        assert_eq!("(0008,103E)".parse::<Tag>().unwrap(), tag);
        assert_eq!("0008,103e".parse::<Tag>().unwrap(), tag);
        assert!("(0008)".parse::<Tag>().is_err());
        assert!("(zzzz,0000)".parse::<Tag>().is_err());
    }

    #[test]
    fn vr_binary_round_trip() {
        assert_eq!(VR::from_binary([b'S', b'Q']), Some(VR::SQ));
        assert_eq!(VR::from_binary([b'?', b'?']), None);
        assert_eq!(VR::UI.to_bytes(), [b'U', b'I']);
        assert_eq!(VR::OW.to_str(), "OW");
    }

    #[test]
    fn kinds_follow_tag_overrides() {
        assert_eq!(vr_kind(ITEM, VR::NA), VrKind::Item);
        assert_eq!(vr_kind(PIXEL_DATA, VR::OW), VrKind::PixelData);
        assert_eq!(vr_kind(Tag(0x0010, 0x0010), VR::PN), VrKind::StringList);
        assert_eq!(vr_kind(Tag(0x0010, 0x0030), VR::DA), VrKind::Date);
        assert_eq!(vr_kind(Tag(0x0028, 0x0010), VR::US), VrKind::Uint16List);
        assert_eq!(vr_kind(Tag(0x7FE0, 0x0008), VR::OF), VrKind::Float32List);
        assert_eq!(vr_kind(Tag(0x7FE0, 0x0009), VR::OD), VrKind::Float64List);
        assert_eq!(vr_kind(Tag(0x0008, 0x1140), VR::SQ), VrKind::Sequence);
    }
}
