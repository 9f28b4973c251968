#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(missing_docs, unused_qualifications, unused_import_braces)]
//! Data set parsing and serialisation for `dcmio`.
//!
//! This crate drives the `dcmio-encoding` byte stream across whole DICOM
//! files: the recursive element codec, the file meta group, and the data
//! set read and write drivers. For a file-path level API, see
//! `dcmio-object`.
//!
//! All APIs are based on synchronous I/O.

pub mod read;
pub mod write;

pub use read::{read_data_set, read_data_set_from_bytes, read_element, ReadOptions};
pub use write::{write_data_set, write_data_set_to_bytes, write_element};

use dcmio_core::DataSet;
use dcmio_dictionary_std::tags;
use dcmio_encoding::error::{MissingTransferSyntaxSnafu, Result};
use dcmio_encoding::{transfer_syntax, Endianness, VrMode};

/// Resolve the transfer syntax declared by the data set's
/// `TransferSyntaxUID` meta element.
pub(crate) fn transfer_syntax_of(data_set: &DataSet) -> Result<(Endianness, VrMode)> {
    let element = data_set
        .element(tags::TRANSFER_SYNTAX_UID)
        .ok_or_else(|| MissingTransferSyntaxSnafu.build())?;
    let uid = element
        .to_str()
        .map_err(|_| MissingTransferSyntaxSnafu.build())?;
    transfer_syntax::resolve(uid)
}
