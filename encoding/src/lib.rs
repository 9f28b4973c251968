#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    unused_import_braces
)]
//! DICOM encoding and decoding primitives for `dcmio`.
//!
//! This crate provides the scoped byte stream shared by the element codec:
//! typed primitive reads and writes under a stack of transfer syntaxes and
//! a stack of byte-limit windows, a deferred (sticky) error discipline, and
//! pluggable text decoding for the specific character sets. It also resolves
//! transfer syntax UIDs into their byte order and VR mode.
//!
//! All APIs are based on synchronous I/O.

pub mod decode;
pub mod encode;
pub mod error;
pub mod text;
pub mod transfer_syntax;

pub use decode::Decoder;
pub use encode::Encoder;
pub use error::{Error, Result};
pub use text::{CodingSystem, CodingSystemKind, TextCodec};
pub use transfer_syntax::VrMode;

pub use byteordered::Endianness;
