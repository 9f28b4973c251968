//! Text decoding and encoding for DICOM string values, with support for
//! the specific character sets negotiated in a data set.
//!
//! A [`CodingSystem`] bundles up to three decoders, selected by the
//! multi-group person-name convention: alphabetic, ideographic and
//! phonetic. All value representations other than `PN` only ever use the
//! ideographic slot.

use crate::error::{
    DecodeTextSnafu, EncodeTextSnafu, Result, UnknownCharacterSetSnafu,
};
use encoding::all::{
    GB18030, ISO_2022_JP, ISO_8859_1, ISO_8859_2, ISO_8859_3, ISO_8859_4, ISO_8859_5, ISO_8859_6,
    ISO_8859_7, ISO_8859_8, UTF_8, WINDOWS_1254, WINDOWS_31J, WINDOWS_874, WINDOWS_949,
};
use encoding::{DecoderTrap, EncoderTrap, EncodingRef, RawDecoder, StringWriter};
use std::fmt::Debug;

/// A holder of encoding and decoding mechanisms for text in DICOM content,
/// which according to the standard depends on the specific character set.
pub trait TextCodec: Debug {
    /// Obtain a unique name of the text encoding.
    ///
    /// Should contain no leading or trailing spaces. This method may be
    /// useful for testing purposes, considering that `TextCodec` is often
    /// used as a trait object.
    fn name(&self) -> &'static str;

    /// Decode the given byte buffer as a single string. The resulting string
    /// _may_ contain backslash characters (`\`) to delimit individual
    /// values, and should be split later on if required.
    fn decode(&self, text: &[u8]) -> Result<String>;

    /// Encode a text value into a byte vector. The input string can feature
    /// multiple text values by using the backslash character (`\`) as the
    /// value delimiter.
    fn encode(&self, text: &str) -> Result<Vec<u8>>;
}

impl<T: ?Sized> TextCodec for Box<T>
where
    T: TextCodec,
{
    fn name(&self) -> &'static str {
        self.as_ref().name()
    }

    fn decode(&self, text: &[u8]) -> Result<String> {
        self.as_ref().decode(text)
    }

    fn encode(&self, text: &str) -> Result<Vec<u8>> {
        self.as_ref().encode(text)
    }
}

impl<'a, T: ?Sized> TextCodec for &'a T
where
    T: TextCodec,
{
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn decode(&self, text: &[u8]) -> Result<String> {
        (**self).decode(text)
    }

    fn encode(&self, text: &str) -> Result<Vec<u8>> {
        (**self).encode(text)
    }
}

/// Type alias for a type erased text codec.
pub type DynamicTextCodec = Box<dyn TextCodec>;

/// Replace an undecodable byte with a `\ooo` octal escape, so that a parse
/// can proceed over isolated mojibake.
fn decode_text_trap(
    _decoder: &mut dyn RawDecoder,
    input: &[u8],
    output: &mut dyn StringWriter,
) -> bool {
    let c = input[0];
    let o0 = c & 7;
    let o1 = (c & 56) >> 3;
    let o2 = (c & 192) >> 6;
    output.write_char('\\');
    output.write_char((o2 + b'0') as char);
    output.write_char((o1 + b'0') as char);
    output.write_char((o0 + b'0') as char);
    true
}

/// A text codec backed by a character encoding from the `encoding` crate.
#[derive(Copy, Clone)]
pub struct EncodingTextCodec {
    encoding: EncodingRef,
}

impl Debug for EncodingTextCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("EncodingTextCodec")
            .field("encoding", &self.encoding.name())
            .finish()
    }
}

impl EncodingTextCodec {
    /// Create a codec over the given character encoding.
    pub fn new(encoding: EncodingRef) -> Self {
        EncodingTextCodec { encoding }
    }
}

impl TextCodec for EncodingTextCodec {
    fn name(&self) -> &'static str {
        self.encoding.name()
    }

    fn decode(&self, text: &[u8]) -> Result<String> {
        self.encoding
            .decode(text, DecoderTrap::Call(decode_text_trap))
            .map_err(|e| {
                DecodeTextSnafu {
                    message: e.into_owned(),
                }
                .build()
            })
    }

    fn encode(&self, text: &str) -> Result<Vec<u8>> {
        self.encoding
            .encode(text, EncoderTrap::Strict)
            .map_err(|e| {
                EncodeTextSnafu {
                    message: e.into_owned(),
                }
                .build()
            })
    }
}

/// Which of the three coding system slots to decode a string with.
/// Only person names distinguish the three; everything else reads through
/// the ideographic slot.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CodingSystemKind {
    /// The (English) alphabetic representation of a name.
    Alphabetic,
    /// The native writing system representation.
    Ideographic,
    /// The phonetic representation.
    Phonetic,
}

/// The decoder bundle installed on a byte stream while reading string
/// values. An empty slot means the default character repertoire: bytes are
/// assumed to be ASCII-compatible and pass through.
#[derive(Default)]
pub struct CodingSystem {
    /// Decoder for the alphabetic name group.
    pub alphabetic: Option<DynamicTextCodec>,
    /// Decoder for the ideographic name group, and for all ordinary strings.
    pub ideographic: Option<DynamicTextCodec>,
    /// Decoder for the phonetic name group.
    pub phonetic: Option<DynamicTextCodec>,
}

impl Debug for CodingSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = |c: &Option<DynamicTextCodec>| c.as_ref().map_or("default", |c| c.name());
        f.debug_struct("CodingSystem")
            .field("alphabetic", &name(&self.alphabetic))
            .field("ideographic", &name(&self.ideographic))
            .field("phonetic", &name(&self.phonetic))
            .finish()
    }
}

impl CodingSystem {
    /// Fetch the decoder for the given slot.
    pub fn decoder(&self, kind: CodingSystemKind) -> Option<&DynamicTextCodec> {
        match kind {
            CodingSystemKind::Alphabetic => self.alphabetic.as_ref(),
            CodingSystemKind::Ideographic => self.ideographic.as_ref(),
            CodingSystemKind::Phonetic => self.phonetic.as_ref(),
        }
    }

    /// Resolve an ordered list of DICOM character set names, as found in a
    /// _Specific Character Set_ element, into a decoder bundle.
    ///
    /// With a single decoder all three slots share it; with two, the first
    /// becomes the alphabetic slot and the second fills the other two; with
    /// three or more, the first three fill the slots in order. An
    /// unrecognised name is a hard error.
    pub fn from_charset_names<T>(names: &[T]) -> Result<Self>
    where
        T: AsRef<str>,
    {
        let codecs = names
            .iter()
            .map(|name| charset_codec(name.as_ref()))
            .collect::<Result<Vec<Option<EncodingTextCodec>>>>()?;

        let boxed = |codec: &Option<EncodingTextCodec>| -> Option<DynamicTextCodec> {
            codec.map(|c| Box::new(c) as DynamicTextCodec)
        };

        Ok(match codecs.as_slice() {
            [] => CodingSystem::default(),
            [single] => CodingSystem {
                alphabetic: boxed(single),
                ideographic: boxed(single),
                phonetic: boxed(single),
            },
            [first, second] => CodingSystem {
                alphabetic: boxed(first),
                ideographic: boxed(second),
                phonetic: boxed(second),
            },
            [first, second, third, ..] => CodingSystem {
                alphabetic: boxed(first),
                ideographic: boxed(second),
                phonetic: boxed(third),
            },
        })
    }
}

/// Resolve a DICOM character set name to a text codec.
///
/// `Ok(None)` means the name is recognised but maps to the default
/// repertoire (identity decoding). The names follow PS3.2 D.6.2; each
/// ISO-IR entry is accepted in both its `ISO_IR` and `ISO 2022 IR`
/// spellings.
pub fn charset_codec(name: &str) -> Result<Option<EncodingTextCodec>> {
    let encoding: Option<EncodingRef> = match name.trim() {
        "" | "ISO_IR 6" => None,
        "ISO 2022 IR 6" => Some(ISO_8859_1),
        "ISO_IR 13" | "ISO 2022 IR 13" => Some(WINDOWS_31J),
        "ISO_IR 100" | "ISO 2022 IR 100" => Some(ISO_8859_1),
        "ISO_IR 101" | "ISO 2022 IR 101" => Some(ISO_8859_2),
        "ISO_IR 109" | "ISO 2022 IR 109" => Some(ISO_8859_3),
        "ISO_IR 110" | "ISO 2022 IR 110" => Some(ISO_8859_4),
        "ISO_IR 126" | "ISO 2022 IR 126" => Some(ISO_8859_7),
        "ISO_IR 127" | "ISO 2022 IR 127" => Some(ISO_8859_6),
        "ISO_IR 138" | "ISO 2022 IR 138" => Some(ISO_8859_8),
        "ISO_IR 144" | "ISO 2022 IR 144" => Some(ISO_8859_5),
        "ISO_IR 148" | "ISO 2022 IR 148" => Some(WINDOWS_1254),
        "ISO_IR 149" | "ISO 2022 IR 149" => Some(WINDOWS_949),
        "ISO 2022 IR 87" | "ISO 2022 IR 159" => Some(ISO_2022_JP),
        "ISO_IR 166" | "ISO 2022 IR 166" => Some(WINDOWS_874),
        "ISO_IR 192" => Some(UTF_8),
        "GB18030" => Some(GB18030),
        other => {
            return UnknownCharacterSetSnafu { name: other }.fail();
        }
    };
    Ok(encoding.map(EncodingTextCodec::new))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn latin1_decoding() {
        let codec = charset_codec("ISO_IR 100").unwrap().unwrap();
        // "Buc^Jérôme" in ISO-8859-1
        let bytes = b"Buc^J\xe9r\xf4me";
        assert_eq!(codec.decode(bytes).unwrap(), "Buc^Jérôme");
        assert_eq!(codec.encode("Buc^Jérôme").unwrap(), bytes.to_vec());
    }

    #[test]
    fn default_repertoire_names_are_identity() {
        assert!(charset_codec("ISO_IR 6").unwrap().is_none());
        assert!(charset_codec("").unwrap().is_none());
    }

    #[test]
    fn unknown_names_are_hard_errors() {
        let err = charset_codec("ISO_IR 9999").unwrap_err();
        assert!(matches!(err, Error::UnknownCharacterSet { .. }));
        assert!(CodingSystem::from_charset_names(&["ISO_IR 9999"]).is_err());
    }

    #[test]
    fn slot_rules_follow_decoder_count() {
        let cs = CodingSystem::from_charset_names::<&str>(&[]).unwrap();
        assert!(cs.alphabetic.is_none() && cs.ideographic.is_none() && cs.phonetic.is_none());

        let cs = CodingSystem::from_charset_names(&["ISO_IR 100"]).unwrap();
        assert_eq!(cs.alphabetic.as_ref().unwrap().name(), "iso-8859-1");
        assert_eq!(cs.ideographic.as_ref().unwrap().name(), "iso-8859-1");
        assert_eq!(cs.phonetic.as_ref().unwrap().name(), "iso-8859-1");

        let cs = CodingSystem::from_charset_names(&["ISO 2022 IR 6", "ISO 2022 IR 87"]).unwrap();
        assert_eq!(cs.ideographic.as_ref().unwrap().name(), "iso-2022-jp");
        assert_eq!(cs.phonetic.as_ref().unwrap().name(), "iso-2022-jp");

        let cs = CodingSystem::from_charset_names(&[
            "ISO 2022 IR 6",
            "ISO 2022 IR 87",
            "ISO 2022 IR 13",
        ])
        .unwrap();
        assert_eq!(cs.ideographic.as_ref().unwrap().name(), "iso-2022-jp");
        assert_eq!(cs.phonetic.as_ref().unwrap().name(), "windows-31j");
    }

    #[test]
    fn bad_bytes_decode_to_octal_escapes() {
        let codec = charset_codec("ISO_IR 192").unwrap().unwrap();
        // 0xFF can never start a UTF-8 sequence
        let decoded = codec.decode(b"A\xffB").unwrap();
        assert_eq!(decoded, "A\\377B");
    }
}
