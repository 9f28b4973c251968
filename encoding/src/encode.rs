//! The writing half of the byte stream: typed primitive writes under a
//! stack of transfer syntaxes, with the same sticky error discipline as
//! the reading half.
//!
//! An encoder over a plain `Vec<u8>` doubles as the sub-encoder used to
//! pre-measure nested content before its container header is emitted; see
//! [`Encoder::to_bytes`] and [`Encoder::into_bytes`].

use crate::error::{Error, IoSnafu, Result};
use crate::transfer_syntax::VrMode;
use byteordered::{ByteOrdered, Endianness};
use snafu::IntoError;
use std::io::Write;

/// A byte stream writer for DICOM content.
#[derive(Debug)]
pub struct Encoder<W> {
    sink: W,
    err: Option<Error>,
    endianness: Endianness,
    vr_mode: VrMode,
    /// cumulative number of bytes written
    position: u64,
    syntax_stack: Vec<(Endianness, VrMode)>,
}

impl Encoder<Vec<u8>> {
    /// Create an encoder writing to an in-memory buffer, retrievable with
    /// [`into_bytes`](Self::into_bytes). Used to measure the byte length of
    /// nested content before emitting its container header.
    pub fn to_bytes(endianness: Endianness, vr_mode: VrMode) -> Self {
        Encoder::new(Vec::new(), endianness, vr_mode)
    }

    /// Consume the encoder and take the encoded bytes.
    ///
    /// Returns the pending error instead, if one was recorded.
    ///
    /// # Panics
    ///
    /// Panics if a pushed transfer syntax was not popped: scopes must be
    /// balanced before the buffer is taken.
    pub fn into_bytes(mut self) -> Result<Vec<u8>> {
        assert!(
            self.syntax_stack.is_empty(),
            "unbalanced transfer syntax stack"
        );
        match self.err.take() {
            Some(err) => Err(err),
            None => Ok(self.sink),
        }
    }
}

impl<W> Encoder<W>
where
    W: Write,
{
    /// Create an encoder writing to the given sink with the given initial
    /// transfer syntax.
    pub fn new(sink: W, endianness: Endianness, vr_mode: VrMode) -> Self {
        Encoder {
            sink,
            err: None,
            endianness,
            vr_mode,
            position: 0,
            syntax_stack: Vec::new(),
        }
    }

    /// The active transfer syntax pair.
    #[inline]
    pub fn transfer_syntax(&self) -> (Endianness, VrMode) {
        (self.endianness, self.vr_mode)
    }

    /// Temporarily switch the transfer syntax governing typed writes.
    /// Restore the previous one with [`pop_transfer_syntax`](Self::pop_transfer_syntax).
    pub fn push_transfer_syntax(&mut self, endianness: Endianness, vr_mode: VrMode) {
        self.syntax_stack.push((self.endianness, self.vr_mode));
        self.endianness = endianness;
        self.vr_mode = vr_mode;
    }

    /// Restore the transfer syntax saved by the matching push.
    ///
    /// # Panics
    ///
    /// Panics if there is no transfer syntax to pop: push and pop calls
    /// must be balanced.
    pub fn pop_transfer_syntax(&mut self) {
        let (endianness, vr_mode) = self
            .syntax_stack
            .pop()
            .expect("unbalanced transfer syntax stack");
        self.endianness = endianness;
        self.vr_mode = vr_mode;
    }

    /// Record an error, unless one is already pending. The first error
    /// sticks; later ones are dropped.
    pub fn set_error(&mut self, err: Error) {
        if self.err.is_none() {
            self.err = Some(err);
        }
    }

    /// The pending error, if any.
    #[inline]
    pub fn error(&self) -> Option<&Error> {
        self.err.as_ref()
    }

    /// Take the pending error, clearing the slot.
    pub fn take_error(&mut self) -> Option<Error> {
        self.err.take()
    }

    /// Cumulative number of bytes written so far.
    #[inline]
    pub fn bytes_written(&self) -> u64 {
        self.position
    }

    /// Finish writing: returns the pending error, if any was recorded.
    pub fn finish(mut self) -> Result<()> {
        match self.err.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn emit(&mut self, bytes: &[u8]) {
        if self.err.is_some() {
            return;
        }
        match self.sink.write_all(bytes) {
            Ok(()) => self.position += bytes.len() as u64,
            Err(e) => {
                let position = self.position;
                self.set_error(IoSnafu { position }.into_error(e));
            }
        }
    }

    /// Write a single byte.
    pub fn write_u8(&mut self, value: u8) {
        self.emit(&[value]);
    }

    /// Write an unsigned 16-bit integer in the active byte order.
    pub fn write_u16(&mut self, value: u16) {
        let mut buf = [0u8; 2];
        ByteOrdered::runtime(&mut buf[..], self.endianness)
            .write_u16(value)
            .expect("write to fixed buffer cannot fail");
        self.emit(&buf);
    }

    /// Write an unsigned 32-bit integer in the active byte order.
    pub fn write_u32(&mut self, value: u32) {
        let mut buf = [0u8; 4];
        ByteOrdered::runtime(&mut buf[..], self.endianness)
            .write_u32(value)
            .expect("write to fixed buffer cannot fail");
        self.emit(&buf);
    }

    /// Write a signed 16-bit integer in the active byte order.
    pub fn write_i16(&mut self, value: i16) {
        let mut buf = [0u8; 2];
        ByteOrdered::runtime(&mut buf[..], self.endianness)
            .write_i16(value)
            .expect("write to fixed buffer cannot fail");
        self.emit(&buf);
    }

    /// Write a signed 32-bit integer in the active byte order.
    pub fn write_i32(&mut self, value: i32) {
        let mut buf = [0u8; 4];
        ByteOrdered::runtime(&mut buf[..], self.endianness)
            .write_i32(value)
            .expect("write to fixed buffer cannot fail");
        self.emit(&buf);
    }

    /// Write a single-precision float in the active byte order.
    pub fn write_f32(&mut self, value: f32) {
        let mut buf = [0u8; 4];
        ByteOrdered::runtime(&mut buf[..], self.endianness)
            .write_f32(value)
            .expect("write to fixed buffer cannot fail");
        self.emit(&buf);
    }

    /// Write a double-precision float in the active byte order.
    pub fn write_f64(&mut self, value: f64) {
        let mut buf = [0u8; 8];
        ByteOrdered::runtime(&mut buf[..], self.endianness)
            .write_f64(value)
            .expect("write to fixed buffer cannot fail");
        self.emit(&buf);
    }

    /// Write a string's bytes, without any length prefix or padding.
    pub fn write_str(&mut self, value: &str) {
        self.emit(value.as_bytes());
    }

    /// Write raw bytes as given.
    pub fn write_bytes(&mut self, value: &[u8]) {
        self.emit(value);
    }

    /// Write `length` zero bytes.
    pub fn write_zeros(&mut self, length: usize) {
        // zero runs are short in practice (preamble, reserved fields)
        const ZEROS: [u8; 128] = [0; 128];
        let mut remaining = length;
        while remaining > 0 {
            let chunk = remaining.min(ZEROS.len());
            self.emit(&ZEROS[..chunk]);
            remaining -= chunk;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_writes_follow_byte_order() {
        let mut e = Encoder::to_bytes(Endianness::Little, VrMode::Explicit);
        e.write_u16(0x3CC3);
        e.write_u32(0x0102_0304);
        assert_eq!(e.bytes_written(), 6);
        assert_eq!(
            e.into_bytes().unwrap(),
            vec![0xC3, 0x3C, 0x04, 0x03, 0x02, 0x01]
        );

        let mut e = Encoder::to_bytes(Endianness::Big, VrMode::Explicit);
        e.write_u16(0x3CC3);
        e.write_i16(-2);
        assert_eq!(e.into_bytes().unwrap(), vec![0x3C, 0xC3, 0xFF, 0xFE]);
    }

    #[test]
    fn pushed_syntax_governs_writes_until_popped() {
        let mut e = Encoder::to_bytes(Endianness::Little, VrMode::Explicit);
        e.write_u16(0x0102);
        e.push_transfer_syntax(Endianness::Big, VrMode::Implicit);
        e.write_u16(0x0102);
        e.pop_transfer_syntax();
        assert_eq!(e.into_bytes().unwrap(), vec![0x02, 0x01, 0x01, 0x02]);
    }

    #[test]
    fn zeros_and_strings() {
        let mut e = Encoder::to_bytes(Endianness::Little, VrMode::Explicit);
        e.write_zeros(3);
        e.write_str("DICM");
        e.write_bytes(&[0xAA]);
        assert_eq!(
            e.into_bytes().unwrap(),
            vec![0, 0, 0, b'D', b'I', b'C', b'M', 0xAA]
        );
    }

    #[test]
    #[should_panic(expected = "unbalanced transfer syntax stack")]
    fn taking_bytes_with_pushed_syntax_panics() {
        let mut e = Encoder::to_bytes(Endianness::Little, VrMode::Explicit);
        e.push_transfer_syntax(Endianness::Big, VrMode::Implicit);
        let _ = e.into_bytes();
    }

    #[test]
    fn pending_error_is_returned_on_finish() {
        use crate::error::TruncatedSnafu;
        let mut e = Encoder::to_bytes(Endianness::Little, VrMode::Explicit);
        e.set_error(
            TruncatedSnafu {
                requested: 1u64,
                available: 0u64,
                position: 0u64,
            }
            .build(),
        );
        e.write_u16(7);
        assert!(e.into_bytes().is_err());
    }
}
