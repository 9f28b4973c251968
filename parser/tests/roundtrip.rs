//! Whole-file round trips across the standard uncompressed transfer
//! syntaxes.

use dcmio_core::header::{ITEM, PIXEL_DATA};
use dcmio_core::{DataSet, DicomValue, Element, PixelFrames, Tag, VR};
use dcmio_dictionary_std::{tags, StandardDataDictionary};
use dcmio_parser::{read_data_set_from_bytes, write_data_set_to_bytes, ReadOptions};

fn element(tag: Tag, values: Vec<DicomValue>) -> Element {
    Element::new(StandardDataDictionary, tag, values).expect("values should match the VR")
}

fn meta_elements(transfer_syntax: &str) -> Vec<Element> {
    vec![
        element(
            tags::MEDIA_STORAGE_SOP_CLASS_UID,
            vec![DicomValue::from("1.2.840.10008.5.1.4.1.1.7")],
        ),
        element(
            tags::MEDIA_STORAGE_SOP_INSTANCE_UID,
            vec![DicomValue::from("1.2.276.0.7230010.3.1.4.8323329.1")],
        ),
        element(
            tags::TRANSFER_SYNTAX_UID,
            vec![DicomValue::from(transfer_syntax)],
        ),
    ]
}

/// A data set exercising each value kind expressible in an uncompressed
/// syntax.
fn body_elements() -> Vec<Element> {
    let rows = element(tags::ROWS, vec![DicomValue::U16(2)]);
    let columns = element(tags::COLUMNS, vec![DicomValue::U16(4)]);
    let item = Element::from_parts(
        ITEM,
        VR::NA,
        false,
        vec![DicomValue::Item(rows), DicomValue::Item(columns)],
    );
    let sequence = Element::from_parts(
        tags::REFERENCED_IMAGE_SEQUENCE,
        VR::SQ,
        false,
        vec![DicomValue::Item(item)],
    );

    vec![
        element(
            tags::IMAGE_TYPE,
            vec![DicomValue::from("ORIGINAL"), DicomValue::from("PRIMARY")],
        ),
        element(
            tags::STUDY_DATE,
            vec![DicomValue::from("19530828")],
        ),
        element(tags::PATIENT_NAME, vec![DicomValue::from("DOE^JOHN")]),
        element(
            tags::STUDY_INSTANCE_UID,
            vec![DicomValue::from("1.2.840.113619.2.1.1")],
        ),
        element(
            tags::SAMPLES_PER_PIXEL,
            vec![DicomValue::U16(1)],
        ),
        element(
            tags::SMALLEST_IMAGE_PIXEL_VALUE,
            vec![DicomValue::U16(0)],
        ),
        element(
            tags::IMAGES_IN_ACQUISITION,
            vec![DicomValue::from("42")],
        ),
        sequence,
        element(
            tags::PATIENT_COMMENTS,
            vec![DicomValue::from("reviewed  ")],
        ),
        Element::from_parts(
            PIXEL_DATA,
            VR::OW,
            false,
            vec![DicomValue::PixelFrames(PixelFrames {
                offsets: Vec::new(),
                frames: vec![vec![0x10, 0x32, 0x54, 0x76, 0x98, 0xBA, 0xDC, 0xFE]],
            })],
        ),
    ]
}

fn assert_round_trip(transfer_syntax: &str) {
    let mut original = DataSet::new();
    original.extend(meta_elements(transfer_syntax));
    let body = body_elements();
    original.extend(body.clone());

    let bytes = write_data_set_to_bytes(&original).expect("write should succeed");
    let (reread, err) = read_data_set_from_bytes(bytes, &ReadOptions::default());
    assert!(err.is_none(), "unexpected read error: {:?}", err);

    for expected in &body {
        let found = reread
            .element(expected.tag())
            .unwrap_or_else(|| panic!("element {} missing after round trip", expected.tag()));
        // trailing padding is consumed by the read
        if expected.tag() == tags::PATIENT_COMMENTS {
            assert_eq!(found.to_str().unwrap(), "reviewed");
            continue;
        }
        assert_eq!(found, expected, "element {} changed", expected.tag());
    }

    // the meta group is rewritten in prescribed order with a fresh length
    let ts = reread.element(tags::TRANSFER_SYNTAX_UID).unwrap();
    assert_eq!(ts.to_str().unwrap(), transfer_syntax);
    assert!(reread
        .element(tags::FILE_META_INFORMATION_GROUP_LENGTH)
        .is_some());
    assert!(reread.element(tags::IMPLEMENTATION_CLASS_UID).is_some());
}

#[test]
fn round_trip_implicit_vr_little_endian() {
    assert_round_trip("1.2.840.10008.1.2");
}

#[test]
fn round_trip_explicit_vr_little_endian() {
    assert_round_trip("1.2.840.10008.1.2.1");
}

#[test]
fn round_trip_explicit_vr_big_endian() {
    assert_round_trip("1.2.840.10008.1.2.2");
}

#[test]
fn round_trip_encapsulated_pixel_data() {
    let mut original = DataSet::new();
    original.extend(meta_elements("1.2.840.10008.1.2.1"));
    original.push(Element::from_parts(
        PIXEL_DATA,
        VR::OB,
        true,
        vec![DicomValue::PixelFrames(PixelFrames {
            offsets: vec![0, 4],
            frames: vec![vec![1, 2, 3, 4], vec![5, 6, 7, 8]],
        })],
    ));

    let bytes = write_data_set_to_bytes(&original).expect("write should succeed");
    let (reread, err) = read_data_set_from_bytes(bytes, &ReadOptions::default());
    assert!(err.is_none(), "unexpected read error: {:?}", err);

    let px = reread.element(PIXEL_DATA).unwrap();
    assert!(px.undefined_length());
    match &px.values()[0] {
        DicomValue::PixelFrames(frames) => {
            assert_eq!(frames.offsets, vec![0, 4]);
            assert_eq!(frames.frames, vec![vec![1, 2, 3, 4], vec![5, 6, 7, 8]]);
        }
        other => panic!("expected pixel frames, got {:?}", other),
    }
}

#[test]
fn round_trip_undefined_length_sequence() {
    let mut original = DataSet::new();
    original.extend(meta_elements("1.2.840.10008.1.2.1"));
    let rows = element(tags::ROWS, vec![DicomValue::U16(16)]);
    let item = Element::from_parts(ITEM, VR::NA, true, vec![DicomValue::Item(rows)]);
    original.push(Element::from_parts(
        tags::REFERENCED_IMAGE_SEQUENCE,
        VR::SQ,
        true,
        vec![DicomValue::Item(item)],
    ));

    let bytes = write_data_set_to_bytes(&original).expect("write should succeed");
    let (reread, err) = read_data_set_from_bytes(bytes, &ReadOptions::default());
    assert!(err.is_none(), "unexpected read error: {:?}", err);

    let seq = reread.element(tags::REFERENCED_IMAGE_SEQUENCE).unwrap();
    assert!(seq.undefined_length());
    let item = match &seq.values()[0] {
        DicomValue::Item(item) => item,
        other => panic!("expected item, got {:?}", other),
    };
    assert!(item.undefined_length());
    match &item.values()[0] {
        DicomValue::Item(rows) => assert_eq!(rows.uint16s().unwrap(), vec![16]),
        other => panic!("expected nested element, got {:?}", other),
    }
}

#[test]
fn written_files_can_be_filtered_on_read() {
    let mut original = DataSet::new();
    original.extend(meta_elements("1.2.840.10008.1.2.1"));
    original.extend(body_elements());

    let bytes = write_data_set_to_bytes(&original).expect("write should succeed");
    let options = ReadOptions {
        drop_pixel_data: true,
        return_tags: Some(vec![tags::STUDY_INSTANCE_UID]),
        ..ReadOptions::default()
    };
    let (reread, err) = read_data_set_from_bytes(bytes, &options);
    assert!(err.is_none(), "unexpected read error: {:?}", err);

    // only the whitelisted body element survives, besides the meta group
    assert!(reread.element(tags::STUDY_INSTANCE_UID).is_some());
    assert!(reread.element(tags::PATIENT_NAME).is_none());
    assert!(reread.element(PIXEL_DATA).is_none());
}
