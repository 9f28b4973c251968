//! Resolution of a transfer syntax UID into the byte order and VR mode
//! governing a data set's encoding.

use crate::error::{Result, UnsupportedTransferSyntaxSnafu};
use byteordered::Endianness;
use dcmio_dictionary_std::uids;
use snafu::ResultExt;

/// Whether element headers carry their VR inline (explicit) or take it
/// from the data dictionary (implicit).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum VrMode {
    /// The VR is looked up in the dictionary; headers carry only a length.
    Implicit,
    /// A two-character VR field appears in each element header.
    Explicit,
}

/// Resolve a transfer syntax UID to its byte order and VR mode.
///
/// The deflated syntax is recognised here, but the byte stream is *not*
/// inflated by this library; the caller is responsible for decompression.
/// Any registered transfer syntax beyond the four base ones resolves to
/// Explicit VR Little Endian, the encoding of its (encapsulated) data set.
pub fn resolve(uid: &str) -> Result<(Endianness, VrMode)> {
    let canonical =
        uids::canonical_transfer_syntax(uid).context(UnsupportedTransferSyntaxSnafu)?;
    match canonical {
        uids::IMPLICIT_VR_LITTLE_ENDIAN => Ok((Endianness::Little, VrMode::Implicit)),
        uids::EXPLICIT_VR_LITTLE_ENDIAN | uids::DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN => {
            Ok((Endianness::Little, VrMode::Explicit))
        }
        uids::EXPLICIT_VR_BIG_ENDIAN => Ok((Endianness::Big, VrMode::Explicit)),
        _ => unreachable!("canonical transfer syntax is always one of the base four"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn base_syntaxes_resolve() {
        assert_eq!(
            resolve("1.2.840.10008.1.2").unwrap(),
            (Endianness::Little, VrMode::Implicit)
        );
        assert_eq!(
            resolve("1.2.840.10008.1.2.1").unwrap(),
            (Endianness::Little, VrMode::Explicit)
        );
        assert_eq!(
            resolve("1.2.840.10008.1.2.1.99").unwrap(),
            (Endianness::Little, VrMode::Explicit)
        );
        assert_eq!(
            resolve("1.2.840.10008.1.2.2").unwrap(),
            (Endianness::Big, VrMode::Explicit)
        );
    }

    #[test]
    fn encapsulated_syntaxes_resolve_to_explicit_le() {
        assert_eq!(
            resolve("1.2.840.10008.1.2.4.90").unwrap(),
            (Endianness::Little, VrMode::Explicit)
        );
    }

    #[test]
    fn unknown_or_wrong_category_uids_are_errors() {
        assert!(matches!(
            resolve("1.1.1.1"),
            Err(Error::UnsupportedTransferSyntax { .. })
        ));
        // a SOP class is not a transfer syntax
        assert!(resolve("1.2.840.10008.5.1.4.1.1.4").is_err());
    }
}
