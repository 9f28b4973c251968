//! The reading half of the byte stream: typed primitive reads under a
//! stack of transfer syntaxes and a stack of byte-limit windows, with a
//! deferred (sticky) error discipline.
//!
//! The first error raised on a [`Decoder`] is captured and every later read
//! becomes a no-op returning a zero value, so parsing code can run straight
//! through a corrupt region and let the driver recover as much of the file
//! as possible.

use crate::error::{Error, IoSnafu, LimitOverrunSnafu, Result, TrailingDataSnafu, TruncatedSnafu};
use crate::text::{CodingSystem, CodingSystemKind};
use crate::transfer_syntax::VrMode;
use byteordered::{ByteOrdered, Endianness};
use snafu::IntoError;
use std::io::{Cursor, Read};

/// One saved byte-limit window, together with the error state it scoped out.
#[derive(Debug)]
struct LimitFrame {
    limit: u64,
    err: Option<Error>,
}

/// A byte stream reader for DICOM content.
///
/// All typed reads honour the transfer syntax on top of the syntax stack;
/// all reads are bounded by the innermost limit window. See the module
/// documentation for the error discipline.
#[derive(Debug)]
pub struct Decoder<S> {
    source: S,
    /// one byte of lookahead, fed back before the next read
    lookahead: Option<u8>,
    err: Option<Error>,
    endianness: Endianness,
    vr_mode: VrMode,
    /// cumulative number of bytes consumed
    position: u64,
    /// absolute position bound of the innermost window
    limit: u64,
    coding_system: CodingSystem,
    syntax_stack: Vec<(Endianness, VrMode)>,
    limit_stack: Vec<LimitFrame>,
}

impl Decoder<Cursor<Vec<u8>>> {
    /// Create a decoder reading from an in-memory byte buffer.
    pub fn from_bytes(data: Vec<u8>, endianness: Endianness, vr_mode: VrMode) -> Self {
        Decoder::new(Cursor::new(data), endianness, vr_mode)
    }
}

impl<S> Decoder<S>
where
    S: Read,
{
    /// Create a decoder reading from the given source with the given
    /// initial transfer syntax.
    pub fn new(source: S, endianness: Endianness, vr_mode: VrMode) -> Self {
        Decoder {
            source,
            lookahead: None,
            err: None,
            endianness,
            vr_mode,
            position: 0,
            limit: u64::MAX,
            coding_system: CodingSystem::default(),
            syntax_stack: Vec::new(),
            limit_stack: Vec::new(),
        }
    }

    /// The active transfer syntax pair.
    #[inline]
    pub fn transfer_syntax(&self) -> (Endianness, VrMode) {
        (self.endianness, self.vr_mode)
    }

    /// Temporarily switch the transfer syntax governing typed reads.
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

    /// Override the character decoders used by string reads from here on.
    pub fn set_coding_system(&mut self, coding_system: CodingSystem) {
        self.coding_system = coding_system;
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

    /// Cumulative number of bytes consumed so far.
    #[inline]
    pub fn bytes_read(&self) -> u64 {
        self.position
    }

    /// Number of bytes left in the innermost window.
    #[inline]
    fn available(&self) -> u64 {
        self.limit - self.position
    }

    /// Whether no more data can be read: an error is pending, the innermost
    /// window is exhausted, or the source is at its end.
    pub fn eof(&mut self) -> bool {
        if self.err.is_some() {
            return true;
        }
        if self.position >= self.limit {
            return true;
        }
        if self.lookahead.is_some() {
            return false;
        }
        let mut buf = [0u8; 1];
        loop {
            match self.source.read(&mut buf) {
                Ok(0) => return true,
                Ok(_) => {
                    self.lookahead = Some(buf[0]);
                    return false;
                }
                Err(ref e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(_) => return true,
            }
        }
    }

    /// Install a window ending `bytes` bytes from the current position.
    /// Subsequent reads fail past the window; [`eof`](Self::eof) turns true
    /// at its boundary.
    ///
    /// A pending error is saved along with the window and restored at the
    /// matching pop, so that the scope starts error-free. A window larger
    /// than the enclosing one is an error and is clamped to zero size.
    pub fn push_limit(&mut self, bytes: u64) {
        let new_limit = match self.position.checked_add(bytes) {
            Some(limit) if limit <= self.limit => limit,
            _ => {
                let excess = self
                    .position
                    .checked_add(bytes)
                    .map_or(u64::MAX, |l| l - self.limit);
                self.set_error(
                    LimitOverrunSnafu {
                        requested: bytes,
                        excess,
                    }
                    .build(),
                );
                self.position
            }
        };
        self.limit_stack.push(LimitFrame {
            limit: self.limit,
            err: self.err.take(),
        });
        self.limit = new_limit;
    }

    /// Restore the window saved by the matching [`push_limit`](Self::push_limit).
    ///
    /// If the window was not fully consumed, the remainder is skipped: a
    /// corrupt inner element must not invalidate the outer parse. An error
    /// saved at push time becomes pending again, taking precedence over
    /// anything raised inside the window.
    ///
    /// # Panics
    ///
    /// Panics if there is no window to pop: push and pop calls must be
    /// balanced.
    pub fn pop_limit(&mut self) {
        if self.err.is_none() && self.position < self.limit {
            let remainder = self.limit - self.position;
            self.skip(remainder);
        }
        let frame = self.limit_stack.pop().expect("unbalanced limit stack");
        self.limit = frame.limit;
        if frame.err.is_some() {
            self.err = frame.err;
        }
    }

    /// Finish reading: returns the pending error, or an error if data
    /// remains unconsumed in the outermost window.
    pub fn finish(mut self) -> Result<()> {
        if let Some(err) = self.err.take() {
            return Err(err);
        }
        if !self.eof() {
            return TrailingDataSnafu {
                position: self.position,
            }
            .fail();
        }
        Ok(())
    }

    /// Read exactly `buf.len()` bytes, recording an error and returning
    /// `false` on failure.
    fn fill(&mut self, buf: &mut [u8]) -> bool {
        if self.err.is_some() {
            return false;
        }
        let requested = buf.len() as u64;
        if requested == 0 {
            return true;
        }
        let available = self.available();
        if requested > available {
            self.set_error(
                TruncatedSnafu {
                    requested,
                    available,
                    position: self.position,
                }
                .build(),
            );
            return false;
        }
        let mut start = 0;
        if let Some(byte) = self.lookahead.take() {
            buf[0] = byte;
            start = 1;
        }
        match self.source.read_exact(&mut buf[start..]) {
            Ok(()) => {
                self.position += requested;
                true
            }
            Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                self.position += start as u64;
                self.set_error(
                    TruncatedSnafu {
                        requested,
                        available: start as u64,
                        position: self.position,
                    }
                    .build(),
                );
                false
            }
            Err(e) => {
                self.position += start as u64;
                let position = self.position;
                self.set_error(IoSnafu { position }.into_error(e));
                false
            }
        }
    }

    /// Read a single byte. Returns 0 once an error is pending.
    pub fn read_u8(&mut self) -> u8 {
        let mut buf = [0u8; 1];
        if !self.fill(&mut buf) {
            return 0;
        }
        buf[0]
    }

    /// Read an unsigned 16-bit integer in the active byte order.
    pub fn read_u16(&mut self) -> u16 {
        let mut buf = [0u8; 2];
        if !self.fill(&mut buf) {
            return 0;
        }
        ByteOrdered::runtime(&buf[..], self.endianness)
            .read_u16()
            .unwrap_or(0)
    }

    /// Read an unsigned 32-bit integer in the active byte order.
    pub fn read_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        if !self.fill(&mut buf) {
            return 0;
        }
        ByteOrdered::runtime(&buf[..], self.endianness)
            .read_u32()
            .unwrap_or(0)
    }

    /// Read a signed 16-bit integer in the active byte order.
    pub fn read_i16(&mut self) -> i16 {
        let mut buf = [0u8; 2];
        if !self.fill(&mut buf) {
            return 0;
        }
        ByteOrdered::runtime(&buf[..], self.endianness)
            .read_i16()
            .unwrap_or(0)
    }

    /// Read a signed 32-bit integer in the active byte order.
    pub fn read_i32(&mut self) -> i32 {
        let mut buf = [0u8; 4];
        if !self.fill(&mut buf) {
            return 0;
        }
        ByteOrdered::runtime(&buf[..], self.endianness)
            .read_i32()
            .unwrap_or(0)
    }

    /// Read a single-precision float in the active byte order.
    pub fn read_f32(&mut self) -> f32 {
        let mut buf = [0u8; 4];
        if !self.fill(&mut buf) {
            return 0.;
        }
        ByteOrdered::runtime(&buf[..], self.endianness)
            .read_f32()
            .unwrap_or(0.)
    }

    /// Read a double-precision float in the active byte order.
    pub fn read_f64(&mut self) -> f64 {
        let mut buf = [0u8; 8];
        if !self.fill(&mut buf) {
            return 0.;
        }
        ByteOrdered::runtime(&buf[..], self.endianness)
            .read_f64()
            .unwrap_or(0.)
    }

    /// Read `length` raw bytes. Returns an empty vector on failure.
    pub fn read_bytes(&mut self, length: usize) -> Vec<u8> {
        if self.err.is_some() {
            return Vec::new();
        }
        let available = self.available();
        if length as u64 > available {
            self.set_error(
                TruncatedSnafu {
                    requested: length as u64,
                    available,
                    position: self.position,
                }
                .build(),
            );
            return Vec::new();
        }
        let mut buf = vec![0u8; length];
        if self.fill(&mut buf) {
            buf
        } else {
            Vec::new()
        }
    }

    /// Read `length` bytes as text, decoded with the ideographic slot of
    /// the installed coding system (pass-through when none is installed).
    pub fn read_string(&mut self, length: usize) -> String {
        self.read_string_with_coding_system(CodingSystemKind::Ideographic, length)
    }

    /// Read `length` bytes as text with an explicitly selected coding
    /// system slot.
    pub fn read_string_with_coding_system(
        &mut self,
        kind: CodingSystemKind,
        length: usize,
    ) -> String {
        let bytes = self.read_bytes(length);
        if bytes.is_empty() {
            return String::new();
        }
        let decoded = match self.coding_system.decoder(kind) {
            None => return String::from_utf8_lossy(&bytes).into_owned(),
            Some(codec) => codec.decode(&bytes),
        };
        match decoded {
            Ok(text) => text,
            Err(e) => {
                self.set_error(e);
                String::new()
            }
        }
    }

    /// Discard `length` bytes, counting them as read.
    pub fn skip(&mut self, length: u64) {
        if self.err.is_some() {
            return;
        }
        let available = self.available();
        if length > available {
            self.set_error(
                TruncatedSnafu {
                    requested: length,
                    available,
                    position: self.position,
                }
                .build(),
            );
            return;
        }
        let mut remaining = length;
        if remaining > 0 && self.lookahead.take().is_some() {
            remaining -= 1;
            self.position += 1;
        }
        match std::io::copy(
            &mut Read::by_ref(&mut self.source).take(remaining),
            &mut std::io::sink(),
        ) {
            Ok(copied) => {
                self.position += copied;
                if copied < remaining {
                    self.set_error(
                        TruncatedSnafu {
                            requested: remaining,
                            available: copied,
                            position: self.position,
                        }
                        .build(),
                    );
                }
            }
            Err(e) => {
                let position = self.position;
                self.set_error(IoSnafu { position }.into_error(e));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::CodingSystem;

    fn le_decoder(data: &[u8]) -> Decoder<Cursor<Vec<u8>>> {
        Decoder::from_bytes(data.to_vec(), Endianness::Little, VrMode::Explicit)
    }

    #[test]
    fn typed_reads_follow_byte_order() {
        let data = [0xC3, 0x3C, 0x33, 0xCC, 0x40, 0x49, 0x0F, 0xDB];
        let mut d = le_decoder(&data);
        assert_eq!(d.read_u16(), 0x3CC3);
        assert_eq!(d.read_u16(), 0xCC33);

        let mut d = Decoder::from_bytes(data.to_vec(), Endianness::Big, VrMode::Explicit);
        assert_eq!(d.read_u16(), 0xC33C);
        assert_eq!(d.read_u32(), 0x33CC4049);
        assert_eq!(d.bytes_read(), 6);
    }

    #[test]
    fn transfer_syntax_stack_is_lifo() {
        let data = [0x01, 0x00, 0x00, 0x01];
        let mut d = le_decoder(&data);
        assert_eq!(d.read_u16(), 1);
        d.push_transfer_syntax(Endianness::Big, VrMode::Implicit);
        assert_eq!(d.transfer_syntax(), (Endianness::Big, VrMode::Implicit));
        assert_eq!(d.read_u16(), 1);
        d.pop_transfer_syntax();
        assert_eq!(d.transfer_syntax(), (Endianness::Little, VrMode::Explicit));
    }

    #[test]
    #[should_panic(expected = "unbalanced transfer syntax stack")]
    fn unbalanced_syntax_pop_panics() {
        let mut d = le_decoder(&[]);
        d.pop_transfer_syntax();
    }

    #[test]
    fn limit_window_bounds_reads() {
        let data = [1, 2, 3, 4, 5, 6];
        let mut d = le_decoder(&data);
        d.push_limit(2);
        assert_eq!(d.read_u8(), 1);
        assert!(!d.eof());
        assert_eq!(d.read_u8(), 2);
        assert!(d.eof());
        d.pop_limit();
        assert!(!d.eof());
        assert_eq!(d.read_u8(), 3);
    }

    #[test]
    fn reads_past_the_window_set_an_error() {
        let data = [1, 2, 3, 4];
        let mut d = le_decoder(&data);
        d.push_limit(2);
        assert_eq!(d.read_u32(), 0);
        assert!(matches!(d.error(), Some(Error::Truncated { .. })));
        d.pop_limit();
        assert!(matches!(d.error(), Some(Error::Truncated { .. })));
    }

    #[test]
    fn popping_an_unconsumed_window_skips_the_remainder() {
        let data = [1, 2, 3, 4, 5, 6];
        let mut d = le_decoder(&data);
        d.push_limit(4);
        assert_eq!(d.read_u8(), 1);
        d.pop_limit();
        // the remaining 3 bytes of the window were skipped
        assert_eq!(d.bytes_read(), 4);
        assert_eq!(d.read_u8(), 5);
        assert!(d.error().is_none());
    }

    #[test]
    fn oversized_window_is_rejected_and_clamped() {
        let data = [1, 2, 3, 4];
        let mut d = le_decoder(&data);
        d.push_limit(2);
        d.push_limit(10);
        // the inner window was clamped to the current position
        assert!(d.eof());
        assert_eq!(d.read_u8(), 0);
        d.pop_limit();
        // the overrun error is pending again after the pop
        assert!(matches!(d.error(), Some(Error::LimitOverrun { .. })));
        d.pop_limit();
    }

    #[test]
    fn sticky_error_masks_later_reads() {
        let data = [1, 2];
        let mut d = le_decoder(&data);
        assert_eq!(d.read_u32(), 0);
        assert!(d.error().is_some());
        // reads are no-ops now
        assert_eq!(d.read_u8(), 0);
        assert_eq!(d.read_bytes(1), Vec::<u8>::new());
        assert!(d.eof());
    }

    #[test]
    fn window_scopes_the_error_state() {
        let data = [1, 2, 3, 4, 5, 6, 7, 8];
        let mut d = le_decoder(&data);
        d.read_u8();
        d.set_error(
            TruncatedSnafu {
                requested: 99u64,
                available: 0u64,
                position: 1u64,
            }
            .build(),
        );
        // the window starts error-free so inner content can still be parsed
        d.push_limit(4);
        assert!(!d.eof());
        assert_eq!(d.read_u8(), 2);
        d.pop_limit();
        // the outer error is pending again
        assert!(matches!(d.error(), Some(Error::Truncated { requested: 99, .. })));
    }

    #[test]
    fn finish_reports_trailing_data() {
        let mut d = le_decoder(&[1, 2, 3]);
        assert_eq!(d.read_u8(), 1);
        assert!(matches!(d.finish(), Err(Error::TrailingData { .. })));

        let mut d = le_decoder(&[1]);
        d.read_u8();
        assert!(d.finish().is_ok());
    }

    #[test]
    fn skip_counts_bytes_and_respects_bounds() {
        let mut d = le_decoder(&[1, 2, 3, 4]);
        assert!(!d.eof());
        d.skip(3);
        assert_eq!(d.bytes_read(), 3);
        assert_eq!(d.read_u8(), 4);

        let mut d = le_decoder(&[1, 2]);
        d.push_limit(1);
        d.skip(2);
        assert!(matches!(d.error(), Some(Error::Truncated { .. })));
    }

    #[test]
    fn string_reads_honour_the_coding_system() {
        // "Jérôme" in ISO-8859-1
        let bytes = b"J\xe9r\xf4me";
        let mut d = le_decoder(bytes);
        let cs = CodingSystem::from_charset_names(&["ISO_IR 100"]).unwrap();
        d.set_coding_system(cs);
        assert_eq!(d.read_string(6), "Jérôme");

        // without a decoder, bytes pass through as (lossy) UTF-8
        let mut d = le_decoder(b"DICM");
        assert_eq!(d.read_string(4), "DICM");
    }

    #[test]
    fn string_reads_can_select_a_slot() {
        let bytes = b"ab";
        let mut d = le_decoder(bytes);
        let cs = CodingSystem::from_charset_names(&["ISO_IR 100"]).unwrap();
        d.set_coding_system(cs);
        assert_eq!(
            d.read_string_with_coding_system(CodingSystemKind::Alphabetic, 2),
            "ab"
        );
    }
}
