//! End-to-end checks through the file-level API: save a data set to disk,
//! open it again, and query it.

use dcmio_core::header::PIXEL_DATA;
use dcmio_core::{DataSet, DicomValue, Element, PixelFrames, VR};
use dcmio_dictionary_std::tags;
use dcmio_object::{element_by_name, new_element, open_file, query, save_file};
use dcmio_parser::ReadOptions;

fn sample_data_set() -> DataSet {
    let mut ds = DataSet::new();
    ds.push(
        new_element(
            tags::MEDIA_STORAGE_SOP_CLASS_UID,
            vec![DicomValue::from("1.2.840.10008.5.1.4.1.1.7")],
        )
        .unwrap(),
    );
    ds.push(
        new_element(
            tags::MEDIA_STORAGE_SOP_INSTANCE_UID,
            vec![DicomValue::from("1.2.276.0.7230010.3.1.4.1")],
        )
        .unwrap(),
    );
    ds.push(
        new_element(
            tags::TRANSFER_SYNTAX_UID,
            vec![DicomValue::from("1.2.840.10008.1.2.1")],
        )
        .unwrap(),
    );
    ds.push(new_element(tags::MODALITY, vec![DicomValue::from("OT")]).unwrap());
    ds.push(new_element(tags::PATIENT_NAME, vec![DicomValue::from("DOE^JANE")]).unwrap());
    ds.push(
        new_element(
            tags::STUDY_INSTANCE_UID,
            vec![DicomValue::from("1.2.840.113619.2.1.1")],
        )
        .unwrap(),
    );
    ds.push(new_element(tags::ROWS, vec![DicomValue::U16(2)]).unwrap());
    ds.push(new_element(tags::COLUMNS, vec![DicomValue::U16(2)]).unwrap());
    ds.push(Element::from_parts(
        PIXEL_DATA,
        VR::OW,
        false,
        vec![DicomValue::PixelFrames(PixelFrames {
            offsets: Vec::new(),
            frames: vec![vec![0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]],
        })],
    ));
    ds
}

#[test]
fn save_open_and_query() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ot_instance.dcm");

    save_file(&path, &sample_data_set()).unwrap();

    let (data_set, error) = open_file(&path, &ReadOptions::default());
    assert!(error.is_none(), "unexpected error: {:?}", error);

    let name = element_by_name(&data_set, "PatientName").unwrap().unwrap();
    assert_eq!(name.to_str().unwrap(), "DOE^JANE");

    let filter = new_element(tags::PATIENT_NAME, vec![DicomValue::from("DOE^*")]).unwrap();
    let outcome = query(&data_set, &filter).unwrap();
    assert!(outcome.matched);

    let filter =
        new_element(tags::STUDY_INSTANCE_UID, vec![DicomValue::from("1.9.9.9")]).unwrap();
    assert!(!query(&data_set, &filter).unwrap().matched);
}

#[test]
fn open_with_options_drops_bulk_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ot_instance.dcm");
    save_file(&path, &sample_data_set()).unwrap();

    let options = ReadOptions {
        drop_pixel_data: true,
        ..ReadOptions::default()
    };
    let (data_set, error) = open_file(&path, &options);
    assert!(error.is_none(), "unexpected error: {:?}", error);
    assert!(data_set.element(tags::ROWS).is_some());
    assert!(data_set.element(PIXEL_DATA).is_none());
}
