//! The element writer and the data set write driver.
//!
//! [`write_element`] emits one data element under the encoder's active
//! transfer syntax, pre-measuring nested content where a defined length is
//! required; [`write_data_set`] drives it across a whole file, composing
//! the preamble, magic code and meta group before the body.

use dcmio_core::header::{
    vr_kind, ITEM, ITEM_DELIMITATION_ITEM, ITEM_GROUP, PIXEL_DATA, SEQUENCE_DELIMITATION_ITEM,
    UNDEFINED_LENGTH,
};
use dcmio_core::{DataSet, DicomValue, Element, Tag, VR};
use dcmio_dictionary_std::{tags, StandardDataDictionary};
use dcmio_encoding::encode::Encoder;
use dcmio_encoding::error::{
    MissingMetaElementSnafu, Result, UndefinedLengthForbiddenSnafu, UnexpectedTagSnafu,
    ValueTypeSnafu, VrMismatchSnafu,
};
use dcmio_encoding::{Endianness, VrMode};
use std::collections::HashSet;
use std::io::Write;

/// The implementation class UID written into the file meta group when the
/// data set does not provide one.
pub const IMPLEMENTATION_CLASS_UID: &str = "1.2.826.0.1.3680043.10.562.1";

/// The implementation version name written into the file meta group when
/// the data set does not provide one.
pub const IMPLEMENTATION_VERSION_NAME: &str = "DCMIO_0_1";

/// Emit one element header under the encoder's active transfer syntax.
/// Elements of the item group are always encoded in implicit VR.
fn encode_element_header<W: Write>(e: &mut Encoder<W>, tag: Tag, vr: VR, length: u32) {
    debug_assert!(length == UNDEFINED_LENGTH || length % 2 == 0);
    e.write_u16(tag.group());
    e.write_u16(tag.element());

    let (_, mut vr_mode) = e.transfer_syntax();
    if tag.group() == ITEM_GROUP {
        vr_mode = VrMode::Implicit;
    }
    match vr_mode {
        VrMode::Implicit => e.write_u32(length),
        VrMode::Explicit => {
            e.write_str(vr.to_str());
            if vr.has_long_form() {
                // two bytes reserved for future use
                e.write_zeros(2);
                e.write_u32(length);
            } else {
                e.write_u16(length as u16);
            }
        }
    }
}

/// Emit one raw item with the given payload.
fn write_raw_item<W: Write>(e: &mut Encoder<W>, data: &[u8]) {
    encode_element_header(e, ITEM, VR::NA, data.len() as u32);
    e.write_bytes(data);
}

/// Emit the basic offset table as the first item of an encapsulated pixel
/// data element.
fn write_basic_offset_table<W: Write>(e: &mut Encoder<W>, offsets: &[u32]) {
    let (endianness, _) = e.transfer_syntax();
    let mut table = Encoder::to_bytes(endianness, VrMode::Implicit);
    for offset in offsets {
        table.write_u32(*offset);
    }
    match table.into_bytes() {
        Ok(bytes) => write_raw_item(e, &bytes),
        Err(err) => e.set_error(err),
    }
}

/// Resolve the VR to encode an element with, verifying it against the
/// dictionary. A carried VR that maps to a different value kind than the
/// dictionary's is unencodable; one of the same kind is honoured with a
/// warning.
fn effective_vr<W: Write>(e: &mut Encoder<W>, element: &Element) -> Option<VR> {
    let tag = element.tag();
    let vr = element.vr();
    if let Ok(entry) = dcmio_dictionary_std::find(tag) {
        if entry.vr != vr {
            if vr_kind(tag, entry.vr) != vr_kind(tag, vr) {
                e.set_error(
                    VrMismatchSnafu {
                        tag,
                        vr,
                        expected: entry.vr,
                    }
                    .build(),
                );
                return None;
            }
            tracing::warn!(
                "element {} carries VR {}, but the dictionary defines {}; continuing",
                tag,
                vr,
                entry.vr
            );
        }
    }
    Some(vr)
}

fn value_type_error<W: Write>(
    e: &mut Encoder<W>,
    tag: Tag,
    vr: VR,
    index: usize,
    value: &DicomValue,
) {
    e.set_error(
        ValueTypeSnafu {
            tag,
            vr,
            index,
            found: value.type_name(),
        }
        .build(),
    );
}

/// Emit the encapsulated (or single-frame) pixel data element.
fn write_pixel_data<W: Write>(e: &mut Encoder<W>, element: &Element, vr: VR) {
    let tag = element.tag();
    let frames = match element.values() {
        [DicomValue::PixelFrames(frames)] => frames,
        [other, ..] => {
            value_type_error(e, tag, vr, 0, other);
            return;
        }
        [] => {
            e.set_error(
                ValueTypeSnafu {
                    tag,
                    vr,
                    index: 0usize,
                    found: "no value",
                }
                .build(),
            );
            return;
        }
    };

    if element.undefined_length() {
        encode_element_header(e, tag, vr, UNDEFINED_LENGTH);
        write_basic_offset_table(e, &frames.offsets);
        for frame in &frames.frames {
            write_raw_item(e, frame);
        }
        encode_element_header(e, SEQUENCE_DELIMITATION_ITEM, VR::NA, 0);
    } else {
        if frames.frames.len() != 1 {
            e.set_error(
                ValueTypeSnafu {
                    tag,
                    vr,
                    index: 0usize,
                    found: "multiple frames without undefined length",
                }
                .build(),
            );
            return;
        }
        let frame = &frames.frames[0];
        encode_element_header(e, tag, vr, frame.len() as u32);
        e.write_bytes(frame);
    }
}

/// Serialise the children of a container into a temporary buffer so the
/// container's length can be written before its payload.
fn encode_children<W: Write>(
    e: &mut Encoder<W>,
    element: &Element,
    require_item_tag: bool,
) -> Option<Vec<u8>> {
    let (endianness, vr_mode) = e.transfer_syntax();
    let mut sub = Encoder::to_bytes(endianness, vr_mode);
    write_children(&mut sub, element, require_item_tag);
    if let Some(err) = sub.take_error() {
        e.set_error(err);
        return None;
    }
    match sub.into_bytes() {
        Ok(bytes) => Some(bytes),
        Err(err) => {
            e.set_error(err);
            None
        }
    }
}

/// Emit each child element of a container in order. With
/// `require_item_tag`, children must be elements tagged (FFFE,E000).
fn write_children<W: Write>(e: &mut Encoder<W>, element: &Element, require_item_tag: bool) {
    for (index, value) in element.values().iter().enumerate() {
        let child = match value {
            DicomValue::Item(child) => child,
            other => {
                value_type_error(e, element.tag(), element.vr(), index, other);
                return;
            }
        };
        if require_item_tag && child.tag() != ITEM {
            e.set_error(
                UnexpectedTagSnafu {
                    tag: child.tag(),
                    context: "sequence",
                }
                .build(),
            );
            return;
        }
        write_element(e, child);
    }
}

/// Serialise the values of a scalar or string element per its VR into a
/// temporary buffer, applying the padding rules: `UI` pads with a NUL
/// byte, other string VRs with a space, `OB` blobs with a NUL byte.
fn encode_scalar_values<W: Write>(
    e: &mut Encoder<W>,
    element: &Element,
    vr: VR,
) -> Option<Vec<u8>> {
    let tag = element.tag();
    let (endianness, vr_mode) = e.transfer_syntax();
    let mut sub = Encoder::to_bytes(endianness, vr_mode);

    match vr {
        VR::US => {
            for (index, value) in element.values().iter().enumerate() {
                match value {
                    DicomValue::U16(v) => sub.write_u16(*v),
                    other => value_type_error(e, tag, vr, index, other),
                }
            }
        }
        VR::UL => {
            for (index, value) in element.values().iter().enumerate() {
                match value {
                    DicomValue::U32(v) => sub.write_u32(*v),
                    other => value_type_error(e, tag, vr, index, other),
                }
            }
        }
        VR::SS => {
            for (index, value) in element.values().iter().enumerate() {
                match value {
                    DicomValue::I16(v) => sub.write_i16(*v),
                    other => value_type_error(e, tag, vr, index, other),
                }
            }
        }
        VR::SL => {
            for (index, value) in element.values().iter().enumerate() {
                match value {
                    DicomValue::I32(v) => sub.write_i32(*v),
                    other => value_type_error(e, tag, vr, index, other),
                }
            }
        }
        VR::FL | VR::OF => {
            for (index, value) in element.values().iter().enumerate() {
                match value {
                    DicomValue::F32(v) => sub.write_f32(*v),
                    other => value_type_error(e, tag, vr, index, other),
                }
            }
        }
        VR::FD | VR::OD => {
            for (index, value) in element.values().iter().enumerate() {
                match value {
                    DicomValue::F64(v) => sub.write_f64(*v),
                    other => value_type_error(e, tag, vr, index, other),
                }
            }
        }
        VR::AT => {
            for (index, value) in element.values().iter().enumerate() {
                match value {
                    DicomValue::Tag(t) => {
                        sub.write_u16(t.group());
                        sub.write_u16(t.element());
                    }
                    other => value_type_error(e, tag, vr, index, other),
                }
            }
        }
        VR::OW => match element.values() {
            [DicomValue::Bytes(blob)] => {
                if blob.len() % 2 != 0 {
                    e.set_error(
                        ValueTypeSnafu {
                            tag,
                            vr,
                            index: 0usize,
                            found: "odd-length byte blob",
                        }
                        .build(),
                    );
                } else {
                    // the blob holds native-order words; re-emit them in
                    // the active byte order
                    for pair in blob.chunks_exact(2) {
                        sub.write_u16(u16::from_ne_bytes([pair[0], pair[1]]));
                    }
                }
            }
            values => {
                if let Some(value) = values.first() {
                    value_type_error(e, tag, vr, 0, value);
                }
            }
        },
        VR::OB | VR::OL => match element.values() {
            [DicomValue::Bytes(blob)] => {
                sub.write_bytes(blob);
                if blob.len() % 2 == 1 {
                    sub.write_u8(0);
                }
            }
            values => {
                if let Some(value) = values.first() {
                    value_type_error(e, tag, vr, 0, value);
                }
            }
        },
        VR::UI => {
            let mut text = String::new();
            for (index, value) in element.values().iter().enumerate() {
                match value {
                    DicomValue::Str(s) => {
                        if index > 0 {
                            text.push('\\');
                        }
                        text.push_str(s);
                    }
                    other => value_type_error(e, tag, vr, index, other),
                }
            }
            sub.write_str(&text);
            if text.len() % 2 == 1 {
                sub.write_u8(0);
            }
        }
        _ => {
            // every other VR is text on the wire, space padded
            let mut text = String::new();
            for (index, value) in element.values().iter().enumerate() {
                match value {
                    DicomValue::Str(s) => {
                        if index > 0 {
                            text.push('\\');
                        }
                        text.push_str(s);
                    }
                    other => value_type_error(e, tag, vr, index, other),
                }
            }
            sub.write_str(&text);
            if text.len() % 2 == 1 {
                sub.write_u8(b' ');
            }
        }
    }

    match sub.into_bytes() {
        Ok(bytes) => Some(bytes),
        Err(err) => {
            e.set_error(err);
            None
        }
    }
}

/// Write one data element under the encoder's active transfer syntax.
/// Errors are recorded on the encoder.
pub fn write_element<W>(e: &mut Encoder<W>, element: &Element)
where
    W: Write,
{
    let vr = match effective_vr(e, element) {
        Some(vr) => vr,
        None => return,
    };
    let tag = element.tag();

    if tag == PIXEL_DATA {
        write_pixel_data(e, element, vr);
        return;
    }

    if vr == VR::SQ {
        if element.undefined_length() {
            encode_element_header(e, tag, vr, UNDEFINED_LENGTH);
            write_children(e, element, true);
            encode_element_header(e, SEQUENCE_DELIMITATION_ITEM, VR::NA, 0);
        } else if let Some(bytes) = encode_children(e, element, true) {
            encode_element_header(e, tag, vr, bytes.len() as u32);
            e.write_bytes(&bytes);
        }
        return;
    }

    if tag == ITEM {
        if element.undefined_length() {
            encode_element_header(e, tag, vr, UNDEFINED_LENGTH);
            write_children(e, element, false);
            encode_element_header(e, ITEM_DELIMITATION_ITEM, VR::NA, 0);
        } else if let Some(bytes) = encode_children(e, element, false) {
            encode_element_header(e, tag, vr, bytes.len() as u32);
            e.write_bytes(&bytes);
        }
        return;
    }

    if element.undefined_length() {
        e.set_error(UndefinedLengthForbiddenSnafu { tag, vr }.build());
        return;
    }
    if let Some(bytes) = encode_scalar_values(e, element, vr) {
        encode_element_header(e, tag, vr, bytes.len() as u32);
        e.write_bytes(&bytes);
    }
}

fn find_meta<'a>(meta: &[&'a Element], tag: Tag) -> Option<&'a Element> {
    meta.iter().find(|element| element.tag() == tag).copied()
}

/// Write the 128-byte preamble, the `DICM` magic code and the file meta
/// group.
///
/// The meta elements are emitted in the prescribed order with a freshly
/// computed group length. `MediaStorageSOPClassUID`,
/// `MediaStorageSOPInstanceUID` and `TransferSyntaxUID` are required;
/// `FileMetaInformationVersion`, `ImplementationClassUID` and
/// `ImplementationVersionName` receive defaults when absent. Any further
/// group 0002 elements follow in their data set order. Errors are
/// recorded on the encoder.
pub fn write_file_header<W>(e: &mut Encoder<W>, meta: &[&Element])
where
    W: Write,
{
    e.push_transfer_syntax(Endianness::Little, VrMode::Explicit);
    write_file_header_inner(e, meta);
    e.pop_transfer_syntax();
}

fn write_file_header_inner<W>(e: &mut Encoder<W>, meta: &[&Element])
where
    W: Write,
{
    let mut sub = Encoder::to_bytes(Endianness::Little, VrMode::Explicit);
    let mut used: HashSet<Tag> = HashSet::new();
    used.insert(tags::FILE_META_INFORMATION_GROUP_LENGTH);

    let write_required = |sub: &mut Encoder<Vec<u8>>, used: &mut HashSet<Tag>, tag: Tag| {
        match find_meta(meta, tag) {
            Some(element) => write_element(sub, element),
            None => sub.set_error(MissingMetaElementSnafu { tag }.build()),
        }
        used.insert(tag);
    };
    let write_defaulted =
        |sub: &mut Encoder<Vec<u8>>, used: &mut HashSet<Tag>, tag: Tag, default: DicomValue| {
            match find_meta(meta, tag) {
                Some(element) => write_element(sub, element),
                None => {
                    match Element::new(StandardDataDictionary, tag, vec![default]) {
                        Ok(element) => write_element(sub, &element),
                        Err(_) => unreachable!("default meta values match their dictionary VR"),
                    };
                }
            }
            used.insert(tag);
        };

    write_defaulted(
        &mut sub,
        &mut used,
        tags::FILE_META_INFORMATION_VERSION,
        DicomValue::Bytes(b"0 1".to_vec()),
    );
    write_required(&mut sub, &mut used, tags::MEDIA_STORAGE_SOP_CLASS_UID);
    write_required(&mut sub, &mut used, tags::MEDIA_STORAGE_SOP_INSTANCE_UID);
    write_required(&mut sub, &mut used, tags::TRANSFER_SYNTAX_UID);
    write_defaulted(
        &mut sub,
        &mut used,
        tags::IMPLEMENTATION_CLASS_UID,
        DicomValue::from(IMPLEMENTATION_CLASS_UID),
    );
    write_defaulted(
        &mut sub,
        &mut used,
        tags::IMPLEMENTATION_VERSION_NAME,
        DicomValue::from(IMPLEMENTATION_VERSION_NAME),
    );

    for element in meta {
        if element.tag().group() == 0x0002 && !used.contains(&element.tag()) {
            write_element(&mut sub, element);
        }
    }

    let meta_bytes = match sub.into_bytes() {
        Ok(bytes) => bytes,
        Err(err) => {
            e.set_error(err);
            return;
        }
    };

    e.write_zeros(128);
    e.write_str("DICM");
    let group_length = Element::new(
        StandardDataDictionary,
        tags::FILE_META_INFORMATION_GROUP_LENGTH,
        vec![DicomValue::U32(meta_bytes.len() as u32)],
    )
    .expect("group length element matches its dictionary VR");
    write_element(e, &group_length);
    e.write_bytes(&meta_bytes);
}

/// Write the data set to the given sink in the DICOM file format, complete
/// with preamble, magic code and meta group.
///
/// The transfer syntax of the body is taken from the data set's
/// `TransferSyntaxUID` element; it is an error for the data set to lack it
/// or the other required meta elements.
pub fn write_data_set<W>(sink: W, data_set: &DataSet) -> Result<()>
where
    W: Write,
{
    let mut e = Encoder::new(sink, Endianness::Little, VrMode::Explicit);

    let meta: Vec<&Element> = data_set
        .iter()
        .filter(|element| element.tag().group() == 0x0002)
        .collect();
    write_file_header(&mut e, &meta);
    if let Some(err) = e.take_error() {
        return Err(err);
    }

    let (endianness, vr_mode) = crate::transfer_syntax_of(data_set)?;
    e.push_transfer_syntax(endianness, vr_mode);
    for element in data_set {
        if element.tag().group() != 0x0002 {
            write_element(&mut e, element);
        }
    }
    e.pop_transfer_syntax();
    e.finish()
}

/// Write the data set into a fresh byte buffer.
pub fn write_data_set_to_bytes(data_set: &DataSet) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    write_data_set(&mut bytes, data_set)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmio_core::PixelFrames;
    use dcmio_encoding::error::Error;

    fn le_encoder() -> Encoder<Vec<u8>> {
        Encoder::to_bytes(Endianness::Little, VrMode::Explicit)
    }

    fn element(tag: Tag, values: Vec<DicomValue>) -> Element {
        Element::new(StandardDataDictionary, tag, values).unwrap()
    }

    #[test]
    fn explicit_le_string_element_bytes() {
        let mut e = le_encoder();
        write_element(
            &mut e,
            &element(tags::PATIENT_NAME, vec![DicomValue::from("DOE^JOHN")]),
        );
        assert_eq!(
            e.into_bytes().unwrap(),
            vec![
                0x10, 0x00, 0x10, 0x00, 0x4C, 0x4F, 0x08, 0x00, 0x44, 0x4F, 0x45, 0x5E, 0x4A,
                0x4F, 0x48, 0x4E,
            ]
        );
    }

    #[test]
    fn odd_string_values_are_space_padded() {
        let mut e = le_encoder();
        write_element(
            &mut e,
            &element(tags::PATIENT_NAME, vec![DicomValue::from("DOE^J")]),
        );
        let bytes = e.into_bytes().unwrap();
        assert_eq!(bytes[6], 6); // padded length
        assert_eq!(bytes[8..], [b'D', b'O', b'E', b'^', b'J', b' ']);
    }

    #[test]
    fn odd_uid_values_are_nul_padded() {
        let mut e = le_encoder();
        write_element(
            &mut e,
            &element(tags::STUDY_INSTANCE_UID, vec![DicomValue::from("1.2.3")]),
        );
        let bytes = e.into_bytes().unwrap();
        assert_eq!(bytes[6], 6);
        assert_eq!(bytes[8..], [b'1', b'.', b'2', b'.', b'3', 0]);
    }

    #[test]
    fn odd_ob_blobs_are_nul_padded() {
        let mut e = le_encoder();
        let version = element(
            tags::FILE_META_INFORMATION_VERSION,
            vec![DicomValue::Bytes(vec![1, 2, 3])],
        );
        write_element(&mut e, &version);
        let bytes = e.into_bytes().unwrap();
        // long form: tag + VR + reserved + u32 length
        assert_eq!(&bytes[4..6], b"OB");
        assert_eq!(bytes[8..12], [4, 0, 0, 0]);
        assert_eq!(bytes[12..], [1, 2, 3, 0]);
    }

    #[test]
    fn multi_valued_strings_join_with_backslashes() {
        let mut e = le_encoder();
        write_element(
            &mut e,
            &element(
                tags::IMAGE_TYPE,
                vec![DicomValue::from("ORIGINAL"), DicomValue::from("PRIMARY")],
            ),
        );
        let bytes = e.into_bytes().unwrap();
        assert_eq!(&bytes[8..], b"ORIGINAL\\PRIMARY");
    }

    #[test]
    fn numeric_elements_follow_byte_order() {
        let mut e = Encoder::to_bytes(Endianness::Big, VrMode::Explicit);
        write_element(&mut e, &element(tags::ROWS, vec![DicomValue::U16(0x0102)]));
        let bytes = e.into_bytes().unwrap();
        assert_eq!(bytes[..4], [0x00, 0x28, 0x00, 0x10]);
        assert_eq!(bytes[8..], [0x01, 0x02]);
    }

    #[test]
    fn implicit_mode_omits_the_vr() {
        let mut e = Encoder::to_bytes(Endianness::Little, VrMode::Implicit);
        write_element(&mut e, &element(tags::ROWS, vec![DicomValue::U16(16)]));
        assert_eq!(
            e.into_bytes().unwrap(),
            vec![0x28, 0x00, 0x10, 0x00, 0x02, 0x00, 0x00, 0x00, 0x10, 0x00]
        );
    }

    #[test]
    fn wrong_atom_type_fails_the_write() {
        let mut e = le_encoder();
        let bogus = Element::from_parts(
            tags::ROWS,
            VR::US,
            false,
            vec![DicomValue::from("sixteen")],
        );
        write_element(&mut e, &bogus);
        assert!(matches!(e.error(), Some(Error::ValueType { .. })));
    }

    #[test]
    fn vr_override_of_another_kind_fails() {
        // Rows as a string VR would decode to a different in-memory kind
        let bogus = Element::from_parts(tags::ROWS, VR::LO, false, vec![DicomValue::from("16")]);
        let mut e = le_encoder();
        write_element(&mut e, &bogus);
        assert!(matches!(e.error(), Some(Error::VrMismatch { .. })));
    }

    #[test]
    fn vr_override_of_the_same_kind_is_honoured() {
        // OB instead of OW: both are byte blobs
        let ob = Element::from_parts(
            PIXEL_DATA,
            VR::OB,
            false,
            vec![DicomValue::PixelFrames(PixelFrames {
                offsets: Vec::new(),
                frames: vec![vec![1, 2, 3, 4]],
            })],
        );
        let mut e = le_encoder();
        write_element(&mut e, &ob);
        let bytes = e.into_bytes().unwrap();
        assert_eq!(&bytes[4..6], b"OB");
        assert_eq!(bytes[12..], [1, 2, 3, 4]);
    }

    #[test]
    fn defined_length_sequences_are_pre_measured() {
        let rows = element(tags::ROWS, vec![DicomValue::U16(16)]);
        let item = Element::from_parts(ITEM, VR::NA, false, vec![DicomValue::Item(rows)]);
        let seq = Element::from_parts(
            tags::REFERENCED_IMAGE_SEQUENCE,
            VR::SQ,
            false,
            vec![DicomValue::Item(item)],
        );
        let mut e = le_encoder();
        write_element(&mut e, &seq);
        let bytes = e.into_bytes().unwrap();
        // sequence header carries the measured length of its single item:
        // item header (8) + element (10)
        assert_eq!(&bytes[4..6], b"SQ");
        assert_eq!(bytes[8..12], [18, 0, 0, 0]);
        // the nested item also carries a defined length
        assert_eq!(bytes[12..16], [0xFE, 0xFF, 0x00, 0xE0]);
        assert_eq!(bytes[16..20], [10, 0, 0, 0]);
    }

    #[test]
    fn undefined_length_sequences_use_delimiters() {
        let item = Element::from_parts(ITEM, VR::NA, true, vec![]);
        let seq = Element::from_parts(
            tags::REFERENCED_IMAGE_SEQUENCE,
            VR::SQ,
            true,
            vec![DicomValue::Item(item)],
        );
        let mut e = le_encoder();
        write_element(&mut e, &seq);
        let bytes = e.into_bytes().unwrap();
        let n = bytes.len();
        // ends with ItemDelimitationItem then SequenceDelimitationItem
        assert_eq!(bytes[n - 16..n - 8], [0xFE, 0xFF, 0x0D, 0xE0, 0, 0, 0, 0]);
        assert_eq!(bytes[n - 8..], [0xFE, 0xFF, 0xDD, 0xE0, 0, 0, 0, 0]);
    }

    #[test]
    fn sequence_children_must_be_items() {
        let stray = element(tags::ROWS, vec![DicomValue::U16(1)]);
        let seq = Element::from_parts(
            tags::REFERENCED_IMAGE_SEQUENCE,
            VR::SQ,
            false,
            vec![DicomValue::Item(stray)],
        );
        let mut e = le_encoder();
        write_element(&mut e, &seq);
        assert!(matches!(e.error(), Some(Error::UnexpectedTag { .. })));
    }

    #[test]
    fn encapsulated_pixel_data_layout() {
        let px = Element::from_parts(
            PIXEL_DATA,
            VR::OB,
            true,
            vec![DicomValue::PixelFrames(PixelFrames {
                offsets: vec![0, 4],
                frames: vec![vec![1, 1, 1, 1], vec![2, 2, 2, 2]],
            })],
        );
        let mut e = le_encoder();
        write_element(&mut e, &px);
        let bytes = e.into_bytes().unwrap();

        // header with undefined length
        assert_eq!(bytes[8..12], [0xFF, 0xFF, 0xFF, 0xFF]);
        // offset table item with two u32 entries
        assert_eq!(bytes[12..16], [0xFE, 0xFF, 0x00, 0xE0]);
        assert_eq!(bytes[16..20], [8, 0, 0, 0]);
        assert_eq!(bytes[20..28], [0, 0, 0, 0, 4, 0, 0, 0]);
        // first frame item
        assert_eq!(bytes[28..32], [0xFE, 0xFF, 0x00, 0xE0]);
        assert_eq!(bytes[32..36], [4, 0, 0, 0]);
        // trailer
        let n = bytes.len();
        assert_eq!(bytes[n - 8..], [0xFE, 0xFF, 0xDD, 0xE0, 0, 0, 0, 0]);
    }

    #[test]
    fn meta_group_is_ordered_and_measured() {
        let mut ds = DataSet::new();
        ds.push(element(
            tags::TRANSFER_SYNTAX_UID,
            vec![DicomValue::from("1.2.840.10008.1.2.1")],
        ));
        ds.push(element(
            tags::MEDIA_STORAGE_SOP_CLASS_UID,
            vec![DicomValue::from("1.2.840.10008.5.1.4.1.1.7")],
        ));
        ds.push(element(
            tags::MEDIA_STORAGE_SOP_INSTANCE_UID,
            vec![DicomValue::from("1.2.3.4")],
        ));

        let meta: Vec<&Element> = ds.iter().collect();
        let mut e = le_encoder();
        write_file_header(&mut e, &meta);
        let bytes = e.into_bytes().unwrap();

        assert_eq!(&bytes[128..132], b"DICM");
        // the group length element follows the magic code
        assert_eq!(bytes[132..136], [0x02, 0x00, 0x00, 0x00]);
        let declared = u32::from_le_bytes([bytes[140], bytes[141], bytes[142], bytes[143]]);
        assert_eq!(declared as usize, bytes.len() - 144);
        // the first meta element after the group length is the version
        assert_eq!(bytes[144..148], [0x02, 0x00, 0x01, 0x00]);
    }

    #[test]
    fn missing_required_meta_element_fails() {
        let mut ds = DataSet::new();
        ds.push(element(
            tags::TRANSFER_SYNTAX_UID,
            vec![DicomValue::from("1.2.840.10008.1.2.1")],
        ));
        let err = write_data_set_to_bytes(&ds).unwrap_err();
        assert!(matches!(err, Error::MissingMetaElement { .. }));
    }
}
