#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    unused_import_braces
)]
//! This crate contains the base data types of the `dcmio` DICOM library:
//! attribute tags, value representations and their in-memory kinds, the
//! data element and data set types, and the dictionary traits that the
//! standard lookup tables implement.
//!
//! Encoding and decoding live in the `dcmio-encoding` and `dcmio-parser`
//! crates; for a file-level API, see `dcmio-object`.

pub mod dictionary;
pub mod element;
pub mod header;
pub mod value;

pub use element::{DataSet, Element};
pub use header::{Tag, VrKind, UNDEFINED_LENGTH, VR};
pub use value::{DicomValue, PixelFrames};
