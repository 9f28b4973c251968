//! The concept of a DICOM data dictionary and UID registry.
//!
//! The standard tables live in the `dcmio-dictionary-std` crate; this module
//! only defines the lookup seams, so that element validation does not commit
//! to one concrete dictionary.

use crate::header::{Tag, VR};
use snafu::Snafu;

/// A dictionary entry for a standard DICOM attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DictionaryEntry {
    /// The attribute tag.
    pub tag: Tag,
    /// The attribute keyword, e.g. `"PatientName"`.
    pub alias: &'static str,
    /// The canonical value representation.
    pub vr: VR,
    /// The value multiplicity, e.g. `"1"`, `"1-n"`, `"3"`.
    pub vm: &'static str,
}

/// Type trait for a dictionary of DICOM attributes.
///
/// The methods have no generic parameters, so implementations can be used
/// as trait objects.
pub trait DataDictionary {
    /// Fetch the entry for the given tag, if registered.
    fn by_tag(&self, tag: Tag) -> Option<&DictionaryEntry>;

    /// Fetch the entry with the given keyword, if registered.
    fn by_name(&self, name: &str) -> Option<&DictionaryEntry>;
}

impl<T: ?Sized> DataDictionary for &T
where
    T: DataDictionary,
{
    fn by_tag(&self, tag: Tag) -> Option<&DictionaryEntry> {
        (**self).by_tag(tag)
    }

    fn by_name(&self, name: &str) -> Option<&DictionaryEntry> {
        (**self).by_name(name)
    }
}

/// The category of a registered DICOM unique identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum UidType {
    /// A transfer syntax.
    TransferSyntax,
    /// A storage or service SOP class.
    SopClass,
    /// A meta SOP class.
    MetaSopClass,
    /// A well-known SOP instance.
    WellKnownSopInstance,
    /// A coding scheme designator.
    CodingScheme,
    /// An application context name.
    ApplicationContextName,
}

impl std::fmt::Display for UidType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            UidType::TransferSyntax => "Transfer Syntax",
            UidType::SopClass => "SOP Class",
            UidType::MetaSopClass => "Meta SOP Class",
            UidType::WellKnownSopInstance => "Well-known SOP Instance",
            UidType::CodingScheme => "Coding Scheme",
            UidType::ApplicationContextName => "Application Context Name",
        };
        f.write_str(name)
    }
}

/// A registry entry for a standard DICOM unique identifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UidEntry {
    /// The UID value.
    pub uid: &'static str,
    /// The UID's descriptive name.
    pub name: &'static str,
    /// The UID's category.
    pub kind: UidType,
}

/// Type trait for a registry of DICOM unique identifiers.
pub trait UidDictionary {
    /// Fetch the entry for the given UID, if registered.
    /// Implementations should tolerate a trailing NUL padding byte.
    fn by_uid(&self, uid: &str) -> Option<&UidEntry>;
}

/// An error raised when a dictionary or registry lookup finds no entry.
#[derive(Debug, Clone, PartialEq, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub))]
pub enum LookupError {
    /// No entry for the given tag.
    #[snafu(display("No dictionary entry for tag {}", tag))]
    NoSuchTag {
        /// the tag looked up
        tag: Tag,
    },
    /// No entry with the given keyword.
    #[snafu(display("No dictionary entry named `{}`", name))]
    NoSuchName {
        /// the keyword looked up
        name: String,
    },
    /// No entry for the given UID.
    #[snafu(display("No registry entry for UID `{}`", uid))]
    NoSuchUid {
        /// the UID looked up
        uid: String,
    },
}
