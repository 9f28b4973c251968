//! The element reader and the data set read driver.
//!
//! [`read_element`] consumes exactly one data element from the byte stream,
//! recursing into sequences and items; [`read_data_set`] drives it across a
//! whole file, from the preamble and meta group to the last body element.
//! Errors are recorded on the stream's sticky slot and the reader keeps
//! returning partial content, so as much of a corrupt file as possible is
//! recovered.

use dcmio_core::header::{
    ITEM, ITEM_DELIMITATION_ITEM, ITEM_GROUP, PIXEL_DATA, SEQUENCE_DELIMITATION_ITEM,
    UNDEFINED_LENGTH,
};
use dcmio_core::{DataSet, DicomValue, Element, PixelFrames, Tag, VR};
use dcmio_dictionary_std::tags;
use dcmio_encoding::decode::Decoder;
use dcmio_encoding::error::{
    DecodeTextSnafu, Error, MissingGroupLengthSnafu, MissingMagicCodeSnafu,
    MissingOffsetTableSnafu, NoProgressSnafu, OddLengthSnafu, UndefinedItemLengthSnafu,
    UndefinedLengthForbiddenSnafu, UnexpectedDelimiterLengthSnafu, UnexpectedTagSnafu,
};
use dcmio_encoding::text::CodingSystem;
use dcmio_encoding::{Endianness, VrMode};
use std::io::{Cursor, Read};

/// Options applied while reading a data set.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ReadOptions {
    /// Stop reading when the pixel data element is reached, leaving it out
    /// of the result.
    pub drop_pixel_data: bool,

    /// When set, only elements with these exact tags are retained. Other
    /// elements are still parsed, which is necessary for correct
    /// positioning, but dropped from the result.
    pub return_tags: Option<Vec<Tag>>,

    /// Stop reading at the first element whose group number *and* element
    /// number both reach the given tag's. Note that this is a conjunctive
    /// per-field test, not a comparison in tag order: with a threshold of
    /// (0020,000D), an element (0040,0001) keeps being read because its
    /// element number is below 0x000D.
    pub stop_at_tag: Option<Tag>,
}

fn read_tag<S: Read>(d: &mut Decoder<S>) -> Tag {
    Tag(d.read_u16(), d.read_u16())
}

/// Read the header fields after the tag in implicit VR mode: the VR comes
/// from the dictionary (`UN` when unknown) and the length is a single u32.
fn read_implicit_header<S: Read>(d: &mut Decoder<S>, tag: Tag) -> (VR, u32) {
    let vr = dcmio_dictionary_std::find(tag)
        .map(|entry| entry.vr)
        .unwrap_or(VR::UN);
    let mut length = d.read_u32();
    if length != UNDEFINED_LENGTH && length % 2 != 0 {
        d.set_error(OddLengthSnafu { tag, vr, length }.build());
        length = 0;
    }
    (vr, length)
}

/// Read the header fields after the tag in explicit VR mode. The two raw
/// VR bytes select between the short form (u16 length) and the long form
/// (two reserved bytes, then a u32 length); an unrecognised code is not in
/// the long-form set and is stored as `UN`.
fn read_explicit_header<S: Read>(d: &mut Decoder<S>, tag: Tag) -> (VR, u32) {
    let vr_bytes = d.read_bytes(2);
    let parsed = match vr_bytes.as_slice() {
        [a, b] => VR::from_binary([*a, *b]),
        _ => None,
    };
    let mut length = if parsed.map_or(false, VR::has_long_form) {
        // two bytes reserved for future use
        d.skip(2);
        d.read_u32()
    } else {
        match d.read_u16() {
            0xFFFF => UNDEFINED_LENGTH,
            short => u32::from(short),
        }
    };
    let vr = parsed.unwrap_or(VR::UN);
    if length == UNDEFINED_LENGTH && matches!(vr, VR::UC | VR::UR | VR::UT) {
        d.set_error(UndefinedLengthForbiddenSnafu { tag, vr }.build());
        length = 0;
    }
    if length != UNDEFINED_LENGTH && length % 2 != 0 {
        d.set_error(OddLengthSnafu { tag, vr, length }.build());
        length = 0;
    }
    (vr, length)
}

/// The outcome of reading one raw (non-parsed) item of an encapsulated
/// pixel data element.
enum RawItem {
    /// An item with its payload bytes.
    Fragment(Vec<u8>),
    /// The sequence delimiter, or a state in which no item can be read.
    End,
}

/// Read one raw item of an encapsulated pixel data element. Items are
/// always encoded in implicit VR and must carry a defined length.
fn read_raw_item<S: Read>(d: &mut Decoder<S>) -> RawItem {
    let tag = read_tag(d);
    let (_, length) = read_implicit_header(d, tag);
    if d.error().is_some() {
        return RawItem::End;
    }
    if tag == SEQUENCE_DELIMITATION_ITEM {
        if length != 0 {
            d.set_error(UnexpectedDelimiterLengthSnafu { tag, length }.build());
        }
        return RawItem::End;
    }
    if tag != ITEM {
        d.set_error(
            UnexpectedTagSnafu {
                tag,
                context: "encapsulated pixel data",
            }
            .build(),
        );
        return RawItem::End;
    }
    if length == UNDEFINED_LENGTH {
        d.set_error(UndefinedItemLengthSnafu.build());
        return RawItem::End;
    }
    RawItem::Fragment(d.read_bytes(length as usize))
}

/// Read the basic offset table, the first item inside encapsulated pixel
/// data. An empty payload decodes as a single zero offset.
fn read_basic_offset_table<S: Read>(d: &mut Decoder<S>) -> Vec<u32> {
    let data = match read_raw_item(d) {
        RawItem::Fragment(data) => data,
        RawItem::End => {
            d.set_error(MissingOffsetTableSnafu.build());
            return Vec::new();
        }
    };
    if data.is_empty() {
        return vec![0];
    }
    let (endianness, _) = d.transfer_syntax();
    let mut table = Decoder::from_bytes(data, endianness, VrMode::Implicit);
    let mut offsets = Vec::new();
    while !table.eof() {
        offsets.push(table.read_u32());
    }
    offsets
}

/// Check each offset table entry against the cumulative size of the frames
/// preceding it. Mismatches are reported but do not fail the parse.
fn validate_offsets(offsets: &[u32], frames: &[Vec<u8>]) {
    if offsets.len() <= 1 {
        return;
    }
    let mut cumulative = 0u64;
    for (index, offset) in offsets.iter().enumerate() {
        if u64::from(*offset) != cumulative {
            tracing::warn!(
                "offset table entry #{} is {}, but frame data begins at byte {}",
                index,
                offset,
                cumulative
            );
        }
        if let Some(frame) = frames.get(index) {
            cumulative += frame.len() as u64;
        }
    }
}

fn trim_padding(text: &str) -> &str {
    text.trim_end_matches(|c| c == ' ' || c == '\0')
}

/// Decode the payload of a scalar or string element per its VR. Runs inside
/// the element's limit window; list VRs read until the window is exhausted.
fn read_scalar_values<S: Read>(d: &mut Decoder<S>, tag: Tag, vr: VR, length: u32) -> Vec<DicomValue> {
    let mut values = Vec::new();
    match vr {
        VR::DA => {
            let text = d.read_string(length as usize);
            values.push(DicomValue::Str(trim_padding(&text).to_owned()));
        }
        VR::LT | VR::UT => {
            let text = d.read_string(length as usize);
            values.push(DicomValue::Str(trim_padding(&text).to_owned()));
        }
        VR::AT => {
            while !d.eof() {
                values.push(DicomValue::Tag(read_tag(d)));
            }
        }
        VR::OW => {
            if length % 2 != 0 {
                d.set_error(OddLengthSnafu { tag, vr, length }.build());
            } else {
                // words are read in the active byte order, but the blob is
                // stored in native order so a write round-trips the bytes
                let mut blob = Vec::new();
                while !d.eof() {
                    let word = d.read_u16();
                    blob.extend_from_slice(&word.to_ne_bytes());
                }
                values.push(DicomValue::Bytes(blob));
            }
        }
        VR::OB | VR::OL => {
            values.push(DicomValue::Bytes(d.read_bytes(length as usize)));
        }
        VR::UL => {
            while !d.eof() {
                values.push(DicomValue::U32(d.read_u32()));
            }
        }
        VR::SL => {
            while !d.eof() {
                values.push(DicomValue::I32(d.read_i32()));
            }
        }
        VR::US => {
            while !d.eof() {
                values.push(DicomValue::U16(d.read_u16()));
            }
        }
        VR::SS => {
            while !d.eof() {
                values.push(DicomValue::I16(d.read_i16()));
            }
        }
        VR::FL | VR::OF => {
            while !d.eof() {
                values.push(DicomValue::F32(d.read_f32()));
            }
        }
        VR::FD | VR::OD => {
            while !d.eof() {
                values.push(DicomValue::F64(d.read_f64()));
            }
        }
        _ => {
            // a list of strings delimited by backslashes; trailing space or
            // NUL padding is removed before splitting
            let text = d.read_string(length as usize);
            let trimmed = trim_padding(&text);
            if !trimmed.is_empty() {
                for part in trimmed.split('\\') {
                    values.push(DicomValue::Str(part.to_owned()));
                }
            }
        }
    }
    values
}

/// Read one data element from the stream.
///
/// Returns `None` when a read option requests a stop at this point (pixel
/// data with [`ReadOptions::drop_pixel_data`], or the
/// [`ReadOptions::stop_at_tag`] threshold); the element's tag has been
/// consumed in that case. On a read failure the partial element is
/// returned and the error is left on the stream.
pub fn read_element<S>(d: &mut Decoder<S>, options: &ReadOptions) -> Option<Element>
where
    S: Read,
{
    let tag = read_tag(d);
    if tag == PIXEL_DATA && options.drop_pixel_data {
        return None;
    }
    if let Some(stop) = options.stop_at_tag {
        if tag.group() >= stop.group() && tag.element() >= stop.element() {
            return None;
        }
    }

    // elements of the item group are encoded in implicit VR regardless of
    // the active transfer syntax (PS3.6 7.5)
    let (_, mut vr_mode) = d.transfer_syntax();
    if tag.group() == ITEM_GROUP {
        vr_mode = VrMode::Implicit;
    }
    let (vr, length) = match vr_mode {
        VrMode::Implicit => read_implicit_header(d, tag),
        VrMode::Explicit => read_explicit_header(d, tag),
    };
    let undefined = length == UNDEFINED_LENGTH;
    // nonconformant files encode sequences as (UN, undefined length)
    let vr = if vr == VR::UN && undefined { VR::SQ } else { vr };

    let mut values = Vec::new();
    if tag == PIXEL_DATA {
        if undefined {
            let offsets = read_basic_offset_table(d);
            if offsets.len() > 1 {
                tracing::warn!(
                    "pixel data offset table has {} entries; keeping frames separate",
                    offsets.len()
                );
            }
            let mut frames = Vec::new();
            while !d.eof() {
                match read_raw_item(d) {
                    RawItem::Fragment(data) => frames.push(data),
                    RawItem::End => break,
                }
            }
            validate_offsets(&offsets, &frames);
            values.push(DicomValue::PixelFrames(PixelFrames { offsets, frames }));
        } else {
            tracing::warn!(
                "element {} has defined-length pixel data; reading a single frame",
                tag
            );
            let frame = d.read_bytes(length as usize);
            values.push(DicomValue::PixelFrames(PixelFrames {
                offsets: Vec::new(),
                frames: vec![frame],
            }));
        }
    } else if vr == VR::SQ {
        // children are read with default options: honouring a filter here
        // would make the rest of the file unreadable
        if undefined {
            loop {
                let child = match read_element(d, &ReadOptions::default()) {
                    Some(child) => child,
                    None => break,
                };
                if d.error().is_some() {
                    break;
                }
                if child.tag() == SEQUENCE_DELIMITATION_ITEM {
                    break;
                }
                if child.tag() != ITEM {
                    d.set_error(
                        UnexpectedTagSnafu {
                            tag: child.tag(),
                            context: "sequence",
                        }
                        .build(),
                    );
                    break;
                }
                values.push(DicomValue::Item(child));
            }
        } else {
            d.push_limit(u64::from(length));
            while !d.eof() {
                let child = match read_element(d, &ReadOptions::default()) {
                    Some(child) => child,
                    None => break,
                };
                if d.error().is_some() {
                    break;
                }
                if child.tag() != ITEM {
                    d.set_error(
                        UnexpectedTagSnafu {
                            tag: child.tag(),
                            context: "sequence",
                        }
                        .build(),
                    );
                    break;
                }
                values.push(DicomValue::Item(child));
            }
            d.pop_limit();
        }
    } else if tag == ITEM {
        if undefined {
            loop {
                let child = match read_element(d, &ReadOptions::default()) {
                    Some(child) => child,
                    None => break,
                };
                if d.error().is_some() {
                    break;
                }
                if child.tag() == ITEM_DELIMITATION_ITEM {
                    break;
                }
                values.push(DicomValue::Item(child));
            }
        } else {
            d.push_limit(u64::from(length));
            while !d.eof() {
                let child = match read_element(d, &ReadOptions::default()) {
                    Some(child) => child,
                    None => break,
                };
                if d.error().is_some() {
                    break;
                }
                values.push(DicomValue::Item(child));
            }
            d.pop_limit();
        }
    } else {
        if undefined {
            d.set_error(UndefinedLengthForbiddenSnafu { tag, vr }.build());
            return Some(Element::from_parts(tag, vr, undefined, values));
        }
        d.push_limit(u64::from(length));
        values = read_scalar_values(d, tag, vr, length);
        d.pop_limit();
    }

    Some(Element::from_parts(tag, vr, undefined, values))
}

/// Read the 128-byte preamble, the `DICM` magic code and the file meta
/// group. The returned list starts with the group length element; errors
/// are recorded on the stream.
pub fn read_file_header<S>(d: &mut Decoder<S>) -> Vec<Element>
where
    S: Read,
{
    // the meta group is always in Explicit VR Little Endian
    d.push_transfer_syntax(Endianness::Little, VrMode::Explicit);
    let elements = read_file_header_inner(d);
    d.pop_transfer_syntax();
    elements
}

fn read_file_header_inner<S>(d: &mut Decoder<S>) -> Vec<Element>
where
    S: Read,
{
    d.skip(128);
    let magic = d.read_string(4);
    if magic != "DICM" {
        d.set_error(MissingMagicCodeSnafu.build());
        return Vec::new();
    }

    let group_length_element = match read_element(d, &ReadOptions::default()) {
        Some(element) => element,
        None => return Vec::new(),
    };
    if d.error().is_some() {
        return Vec::new();
    }
    if group_length_element.tag() != tags::FILE_META_INFORMATION_GROUP_LENGTH {
        let tag = group_length_element.tag();
        d.set_error(MissingGroupLengthSnafu { tag }.build());
        return vec![group_length_element];
    }
    let group_length = match group_length_element.to_u32() {
        Ok(length) => length,
        Err(_) => {
            let tag = group_length_element.tag();
            d.set_error(MissingGroupLengthSnafu { tag }.build());
            return vec![group_length_element];
        }
    };

    let mut elements = vec![group_length_element];
    d.push_limit(u64::from(group_length));
    while !d.eof() {
        match read_element(d, &ReadOptions::default()) {
            Some(element) => {
                if d.error().is_some() {
                    break;
                }
                tracing::trace!(element = %element, "meta element");
                elements.push(element);
            }
            None => break,
        }
    }
    d.pop_limit();
    elements
}

/// Resolve a freshly read _Specific Character Set_ element and install the
/// decoders on the stream for all subsequent string reads.
fn install_character_set<S>(d: &mut Decoder<S>, element: &Element)
where
    S: Read,
{
    let names = match element.strings() {
        Ok(names) => names,
        Err(e) => {
            d.set_error(
                DecodeTextSnafu {
                    message: e.to_string(),
                }
                .build(),
            );
            return;
        }
    };
    match CodingSystem::from_charset_names(&names) {
        Ok(coding_system) => d.set_coding_system(coding_system),
        Err(e) => d.set_error(e),
    }
}

/// Read a whole DICOM file from the given source.
///
/// Returns the data set together with the first error recorded during the
/// read; on failure, the data set holds everything parsed up to that point.
pub fn read_data_set<R>(source: R, options: &ReadOptions) -> (DataSet, Option<Error>)
where
    R: Read,
{
    let mut d = Decoder::new(source, Endianness::Little, VrMode::Explicit);

    let meta = read_file_header(&mut d);
    let mut data_set = DataSet::from_elements(meta);
    if let Some(err) = d.take_error() {
        return (data_set, Some(err));
    }

    let (endianness, vr_mode) = match crate::transfer_syntax_of(&data_set) {
        Ok(pair) => pair,
        Err(err) => return (data_set, Some(err)),
    };
    d.push_transfer_syntax(endianness, vr_mode);

    while !d.eof() {
        let start = d.bytes_read();
        let element = read_element(&mut d, options);
        if d.bytes_read() <= start {
            // pathological input; bail out instead of spinning
            let position = d.bytes_read();
            d.set_error(NoProgressSnafu { position }.build());
            break;
        }
        let element = match element {
            Some(element) => element,
            None => break,
        };

        // character set changes apply to all subsequent string decoding,
        // and may occur anywhere in the body
        if element.tag() == tags::SPECIFIC_CHARACTER_SET {
            install_character_set(&mut d, &element);
        }

        let retain = match &options.return_tags {
            None => true,
            Some(wanted) => wanted.contains(&element.tag()),
        };
        if retain {
            data_set.push(element);
        }
    }

    d.pop_transfer_syntax();
    (data_set, d.take_error())
}

/// Read a whole DICOM file from an in-memory byte buffer.
pub fn read_data_set_from_bytes(
    data: Vec<u8>,
    options: &ReadOptions,
) -> (DataSet, Option<Error>) {
    read_data_set(Cursor::new(data), options)
}
