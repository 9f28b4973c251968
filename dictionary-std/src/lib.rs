#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(missing_docs, unused_qualifications, unused_import_braces)]
//! This crate hosts the standard DICOM lookup tables for `dcmio`:
//! the data-element dictionary (tag ↔ keyword ↔ VR/VM) and the UID
//! registry with its category classification.
//!
//! Both tables are pure, process-wide, lazily indexed on first use and
//! read-only thereafter.

pub mod tags;
pub mod uids;

mod entries;

pub use entries::ENTRIES;

use dcmio_core::dictionary::{
    DataDictionary, DictionaryEntry, LookupError, NoSuchNameSnafu, NoSuchTagSnafu,
};
use dcmio_core::{Tag, VR};
use once_cell::sync::Lazy;
use snafu::OptionExt;
use std::collections::HashMap;

/// Generic group length entry, returned for any even-group tag with
/// element number 0x0000 that has no dedicated entry of its own.
static GROUP_LENGTH_ENTRY: DictionaryEntry = DictionaryEntry {
    tag: Tag(0x0000, 0x0000),
    alias: "GenericGroupLength",
    vr: VR::UL,
    vm: "1",
};

struct Registry {
    by_tag: HashMap<Tag, &'static DictionaryEntry>,
    by_name: HashMap<&'static str, &'static DictionaryEntry>,
}

static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let mut by_tag = HashMap::with_capacity(ENTRIES.len());
    let mut by_name = HashMap::with_capacity(ENTRIES.len());
    for entry in ENTRIES {
        by_tag.insert(entry.tag, entry);
        by_name.insert(entry.alias, entry);
    }
    Registry { by_tag, by_name }
});

/// A data element dictionary backed by the library's standard attribute
/// registry.
///
/// The index is initialised upon first use.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StandardDataDictionary;

impl DataDictionary for StandardDataDictionary {
    fn by_tag(&self, tag: Tag) -> Option<&DictionaryEntry> {
        REGISTRY.by_tag.get(&tag).copied().or({
            // even-group length elements share one generic entry
            if tag.group() % 2 == 0 && tag.element() == 0x0000 {
                Some(&GROUP_LENGTH_ENTRY)
            } else {
                None
            }
        })
    }

    fn by_name(&self, name: &str) -> Option<&DictionaryEntry> {
        REGISTRY.by_name.get(name).copied()
    }
}

/// Look up the standard dictionary entry for the given tag.
pub fn find(tag: Tag) -> Result<&'static DictionaryEntry, LookupError> {
    StandardDataDictionary
        .by_tag(tag)
        .context(NoSuchTagSnafu { tag })
}

/// Look up the standard dictionary entry with the given keyword,
/// e.g. `"PatientName"`.
pub fn find_by_name(name: &str) -> Result<&'static DictionaryEntry, LookupError> {
    StandardDataDictionary
        .by_name(name)
        .context(NoSuchNameSnafu { name })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_tag_and_name_agree() {
        let by_tag = find(tags::PATIENT_NAME).unwrap();
        assert_eq!(by_tag.alias, "PatientName");
        assert_eq!(by_tag.vr, VR::PN);

        let by_name = find_by_name("PatientName").unwrap();
        assert_eq!(by_name.tag, tags::PATIENT_NAME);

        let ts = find_by_name("TransferSyntaxUID").unwrap();
        assert_eq!(ts.tag, Tag(0x0002, 0x0010));
        assert_eq!(ts.vr, VR::UI);
    }

    #[test]
    fn group_length_elements_fall_back_to_generic_entry() {
        let entry = find(Tag(0x0008, 0x0000)).unwrap();
        assert_eq!(entry.alias, "GenericGroupLength");
        assert_eq!(entry.vr, VR::UL);

        // the meta group length has a dedicated entry
        let meta = find(Tag(0x0002, 0x0000)).unwrap();
        assert_eq!(meta.alias, "FileMetaInformationGroupLength");

        // odd groups are private and get no fallback
        assert!(find(Tag(0x0009, 0x0000)).is_err());
    }

    #[test]
    fn unknown_tags_are_not_found() {
        assert!(find(Tag(0x0009, 0x0010)).is_err());
        assert!(find_by_name("NoSuchAttribute").is_err());
    }

    #[test]
    fn items_and_delimiters_are_registered() {
        use dcmio_core::header::{ITEM, SEQUENCE_DELIMITATION_ITEM};
        assert_eq!(find(ITEM).unwrap().vr, VR::NA);
        assert_eq!(find(SEQUENCE_DELIMITATION_ITEM).unwrap().alias, "SequenceDelimitationItem");
    }
}
