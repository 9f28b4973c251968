//! The codec error type.
//!
//! One enum covers the whole encode/decode surface, because errors travel
//! through the byte stream's sticky slot: the first error raised anywhere in
//! a parse is captured there, and later surfaced with the partial result.

use dcmio_core::{Tag, VR};
use snafu::{Backtrace, Snafu};

/// Type alias for a result from this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The main error type of the codec.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
#[non_exhaustive]
pub enum Error {
    /// Underlying stream failure.
    #[snafu(display("I/O failure at position {}", position))]
    Io {
        /// stream position at the time of the failure
        position: u64,
        /// the underlying error
        source: std::io::Error,
        /// error backtrace
        backtrace: Backtrace,
    },

    /// A read past the end of the stream or of the active limit window.
    #[snafu(display(
        "Requested {} bytes at position {}, but only {} are available",
        requested,
        position,
        available
    ))]
    Truncated {
        /// number of bytes requested
        requested: u64,
        /// number of bytes available in the active window
        available: u64,
        /// stream position at the time of the request
        position: u64,
        /// error backtrace
        backtrace: Backtrace,
    },

    /// A new limit window would end beyond its enclosing window.
    #[snafu(display(
        "New limit of {} bytes overruns the enclosing window by {} bytes",
        requested,
        excess
    ))]
    LimitOverrun {
        /// window size requested
        requested: u64,
        /// how far it overruns the enclosing window
        excess: u64,
        /// error backtrace
        backtrace: Backtrace,
    },

    /// Unconsumed data remains in the outermost window.
    #[snafu(display("Unconsumed data remains at position {}", position))]
    TrailingData {
        /// stream position
        position: u64,
        /// error backtrace
        backtrace: Backtrace,
    },

    /// A text value could not be decoded under the active character set.
    #[snafu(display("Could not decode text: {}", message))]
    DecodeText {
        /// decoder diagnostic
        message: String,
        /// error backtrace
        backtrace: Backtrace,
    },

    /// A text value could not be encoded under the target character set.
    #[snafu(display("Could not encode text: {}", message))]
    EncodeText {
        /// encoder diagnostic
        message: String,
        /// error backtrace
        backtrace: Backtrace,
    },

    /// A `SpecificCharacterSet` name with no known decoder.
    #[snafu(display("Unknown character set `{}`", name))]
    UnknownCharacterSet {
        /// the unrecognised name
        name: String,
        /// error backtrace
        backtrace: Backtrace,
    },

    /// A transfer syntax UID that cannot be resolved to an encoding.
    #[snafu(display("Unsupported transfer syntax: {}", source))]
    UnsupportedTransferSyntax {
        /// the canonicalisation failure
        source: dcmio_dictionary_std::uids::CanonicalError,
        /// error backtrace
        backtrace: Backtrace,
    },

    /// The `DICM` magic code is missing from the file header.
    #[snafu(display("Magic code `DICM` not found in the file header"))]
    MissingMagicCode {
        /// error backtrace
        backtrace: Backtrace,
    },

    /// The first meta element is not the file meta group length.
    #[snafu(display(
        "Expected File Meta Information Group Length as first meta element, found {}",
        tag
    ))]
    MissingGroupLength {
        /// the tag actually found
        tag: Tag,
        /// error backtrace
        backtrace: Backtrace,
    },

    /// No transfer syntax UID in the file meta group.
    #[snafu(display("Transfer syntax UID not found in the file meta group"))]
    MissingTransferSyntax {
        /// error backtrace
        backtrace: Backtrace,
    },

    /// An element carried an odd value length where an even one is required.
    #[snafu(display("Odd value length {} in element {} with VR {}", length, tag, vr))]
    OddLength {
        /// the element tag
        tag: Tag,
        /// the element VR
        vr: VR,
        /// the odd length
        length: u32,
        /// error backtrace
        backtrace: Backtrace,
    },

    /// The undefined-length sentinel on a VR that does not admit it.
    #[snafu(display("Undefined value length not allowed for VR {} in element {}", vr, tag))]
    UndefinedLengthForbidden {
        /// the element tag
        tag: Tag,
        /// the element VR
        vr: VR,
        /// error backtrace
        backtrace: Backtrace,
    },

    /// A structural violation: an unexpected tag in the current container.
    #[snafu(display("Unexpected element {} inside {}", tag, context))]
    UnexpectedTag {
        /// the offending tag
        tag: Tag,
        /// where it was found
        context: &'static str,
        /// error backtrace
        backtrace: Backtrace,
    },

    /// A delimiter carrying a non-zero length.
    #[snafu(display("Delimiter {} should have zero length, found {}", tag, length))]
    UnexpectedDelimiterLength {
        /// the delimiter tag
        tag: Tag,
        /// the length it carried
        length: u32,
        /// error backtrace
        backtrace: Backtrace,
    },

    /// An encapsulated pixel data item with undefined length.
    #[snafu(display("Encapsulated pixel data items must have a defined length"))]
    UndefinedItemLength {
        /// error backtrace
        backtrace: Backtrace,
    },

    /// Encapsulated pixel data without a basic offset table item.
    #[snafu(display("Basic offset table not found in encapsulated pixel data"))]
    MissingOffsetTable {
        /// error backtrace
        backtrace: Backtrace,
    },

    /// A value atom whose type does not match the element's VR (write side).
    #[snafu(display(
        "Value #{} of element {} does not match VR {}: found {}",
        index,
        tag,
        vr,
        found
    ))]
    ValueType {
        /// the element tag
        tag: Tag,
        /// the element VR
        vr: VR,
        /// position of the offending atom
        index: usize,
        /// type name of the offending atom
        found: &'static str,
        /// error backtrace
        backtrace: Backtrace,
    },

    /// A carried VR that maps to a different value kind than the
    /// dictionary VR (write side).
    #[snafu(display(
        "Element {} carries VR {}, but the dictionary defines {} of another kind",
        tag,
        vr,
        expected
    ))]
    VrMismatch {
        /// the element tag
        tag: Tag,
        /// the VR carried by the element
        vr: VR,
        /// the dictionary VR
        expected: VR,
        /// error backtrace
        backtrace: Backtrace,
    },

    /// A required file meta element is absent from the data set.
    #[snafu(display("Required meta element {} not found in the data set", tag))]
    MissingMetaElement {
        /// the absent tag
        tag: Tag,
        /// error backtrace
        backtrace: Backtrace,
    },

    /// An element read consumed no bytes; the input cannot be advanced.
    #[snafu(display("Element read made no progress at position {}", position))]
    NoProgress {
        /// stream position
        position: u64,
        /// error backtrace
        backtrace: Backtrace,
    },
}
