//! The standard UID registry: unique identifiers with their category,
//! and transfer-syntax canonicalisation.

use dcmio_core::dictionary::{LookupError, NoSuchUidSnafu, UidDictionary, UidEntry, UidType};
use once_cell::sync::Lazy;
use snafu::OptionExt;
use std::collections::HashMap;

/// Implicit VR Little Endian: Default Transfer Syntax for DICOM
pub const IMPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2";
/// Explicit VR Little Endian
pub const EXPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1";
/// Deflated Explicit VR Little Endian
pub const DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1.99";
/// Explicit VR Big Endian (retired)
pub const EXPLICIT_VR_BIG_ENDIAN: &str = "1.2.840.10008.1.2.2";

/// The transfer syntaxes with a fully supported uncompressed encoding.
pub static STANDARD_TRANSFER_SYNTAXES: &[&str] = &[
    IMPLICIT_VR_LITTLE_ENDIAN,
    EXPLICIT_VR_LITTLE_ENDIAN,
    EXPLICIT_VR_BIG_ENDIAN,
    DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN,
];

const fn entry(uid: &'static str, name: &'static str, kind: UidType) -> UidEntry {
    UidEntry { uid, name, kind }
}

/// The registered standard UIDs.
#[rustfmt::skip]
pub static ENTRIES: &[UidEntry] = &[
    // transfer syntaxes
    entry(IMPLICIT_VR_LITTLE_ENDIAN, "Implicit VR Little Endian", UidType::TransferSyntax),
    entry(EXPLICIT_VR_LITTLE_ENDIAN, "Explicit VR Little Endian", UidType::TransferSyntax),
    entry(DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN, "Deflated Explicit VR Little Endian", UidType::TransferSyntax),
    entry(EXPLICIT_VR_BIG_ENDIAN, "Explicit VR Big Endian", UidType::TransferSyntax),
    entry("1.2.840.10008.1.2.4.50", "JPEG Baseline (Process 1)", UidType::TransferSyntax),
    entry("1.2.840.10008.1.2.4.51", "JPEG Extended (Process 2 & 4)", UidType::TransferSyntax),
    entry("1.2.840.10008.1.2.4.57", "JPEG Lossless, Non-Hierarchical (Process 14)", UidType::TransferSyntax),
    entry("1.2.840.10008.1.2.4.70", "JPEG Lossless, Non-Hierarchical, First-Order Prediction", UidType::TransferSyntax),
    entry("1.2.840.10008.1.2.4.80", "JPEG-LS Lossless Image Compression", UidType::TransferSyntax),
    entry("1.2.840.10008.1.2.4.81", "JPEG-LS Lossy (Near-Lossless) Image Compression", UidType::TransferSyntax),
    entry("1.2.840.10008.1.2.4.90", "JPEG 2000 Image Compression (Lossless Only)", UidType::TransferSyntax),
    entry("1.2.840.10008.1.2.4.91", "JPEG 2000 Image Compression", UidType::TransferSyntax),
    entry("1.2.840.10008.1.2.4.100", "MPEG2 Main Profile / Main Level", UidType::TransferSyntax),
    entry("1.2.840.10008.1.2.4.102", "MPEG-4 AVC/H.264 High Profile / Level 4.1", UidType::TransferSyntax),
    entry("1.2.840.10008.1.2.5", "RLE Lossless", UidType::TransferSyntax),
    // SOP classes
    entry("1.2.840.10008.1.1", "Verification SOP Class", UidType::SopClass),
    entry("1.2.840.10008.5.1.4.1.1.1", "Computed Radiography Image Storage", UidType::SopClass),
    entry("1.2.840.10008.5.1.4.1.1.2", "CT Image Storage", UidType::SopClass),
    entry("1.2.840.10008.5.1.4.1.1.3.1", "Ultrasound Multi-frame Image Storage", UidType::SopClass),
    entry("1.2.840.10008.5.1.4.1.1.4", "MR Image Storage", UidType::SopClass),
    entry("1.2.840.10008.5.1.4.1.1.6.1", "Ultrasound Image Storage", UidType::SopClass),
    entry("1.2.840.10008.5.1.4.1.1.7", "Secondary Capture Image Storage", UidType::SopClass),
    entry("1.2.840.10008.5.1.4.1.1.12.1", "X-Ray Angiographic Image Storage", UidType::SopClass),
    entry("1.2.840.10008.5.1.4.1.1.20", "Nuclear Medicine Image Storage", UidType::SopClass),
    entry("1.2.840.10008.5.1.4.1.1.128", "Positron Emission Tomography Image Storage", UidType::SopClass),
    entry("1.2.840.10008.5.1.4.1.2.1.1", "Patient Root Query/Retrieve Information Model - FIND", UidType::SopClass),
    entry("1.2.840.10008.5.1.4.1.2.1.2", "Patient Root Query/Retrieve Information Model - MOVE", UidType::SopClass),
    entry("1.2.840.10008.5.1.4.1.2.2.1", "Study Root Query/Retrieve Information Model - FIND", UidType::SopClass),
    entry("1.2.840.10008.5.1.4.1.2.2.2", "Study Root Query/Retrieve Information Model - MOVE", UidType::SopClass),
    // miscellaneous
    entry("1.2.840.10008.3.1.1.1", "DICOM Application Context Name", UidType::ApplicationContextName),
    entry("1.2.840.10008.1.20.1.1", "Storage Commitment Push Model SOP Instance", UidType::WellKnownSopInstance),
];

static REGISTRY: Lazy<HashMap<&'static str, &'static UidEntry>> = Lazy::new(|| {
    ENTRIES.iter().map(|e| (e.uid, e)).collect()
});

/// A UID registry backed by the library's standard UID table.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StandardUidRegistry;

impl UidDictionary for StandardUidRegistry {
    fn by_uid(&self, uid: &str) -> Option<&UidEntry> {
        // UI values are NUL padded to even length on the wire
        let uid = uid.trim_end_matches('\0').trim();
        REGISTRY.get(uid).copied()
    }
}

/// Look up the registry entry for the given UID.
pub fn find(uid: &str) -> Result<&'static UidEntry, LookupError> {
    StandardUidRegistry
        .by_uid(uid)
        .context(NoSuchUidSnafu { uid })
}

/// Canonicalise a transfer syntax UID.
///
/// The four base syntaxes map to themselves. Any other UID registered as a
/// transfer syntax maps to Explicit VR Little Endian, the default encoding
/// of its data set. An unregistered UID, or a UID of another category, is
/// an error.
pub fn canonical_transfer_syntax(uid: &str) -> Result<&'static str, CanonicalError> {
    match uid.trim_end_matches('\0').trim() {
        IMPLICIT_VR_LITTLE_ENDIAN => Ok(IMPLICIT_VR_LITTLE_ENDIAN),
        EXPLICIT_VR_LITTLE_ENDIAN => Ok(EXPLICIT_VR_LITTLE_ENDIAN),
        EXPLICIT_VR_BIG_ENDIAN => Ok(EXPLICIT_VR_BIG_ENDIAN),
        DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN => Ok(DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN),
        other => {
            let entry = StandardUidRegistry
                .by_uid(other)
                .context(UnknownUidSnafu { uid: other })?;
            snafu::ensure!(
                entry.kind == UidType::TransferSyntax,
                WrongCategorySnafu {
                    uid: other,
                    category: entry.kind,
                }
            );
            Ok(EXPLICIT_VR_LITTLE_ENDIAN)
        }
    }
}

/// An error raised when a UID cannot be canonicalised to a transfer syntax.
#[derive(Debug, Clone, PartialEq, snafu::Snafu)]
#[non_exhaustive]
pub enum CanonicalError {
    /// The UID is not in the registry.
    #[snafu(display("Unknown UID `{}`", uid))]
    UnknownUid {
        /// the UID looked up
        uid: String,
    },
    /// The UID is registered, but does not identify a transfer syntax.
    #[snafu(display("UID `{}` is not a transfer syntax (is a {})", uid, category))]
    WrongCategory {
        /// the UID looked up
        uid: String,
        /// the category it actually belongs to
        category: UidType,
    },
}
