//! This crate serves as a parent for the library crates of the dcmio
//! project.
//!
//! For an idiomatic API to reading and writing DICOM files, please see
//! [`dcmio_object`](../dcmio_object).
pub use dcmio_core as core;
pub use dcmio_dictionary_std as dictionary_std;
pub use dcmio_encoding as encoding;
pub use dcmio_object as object;
pub use dcmio_parser as parser;
