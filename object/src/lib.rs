#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(missing_docs, unused_qualifications, unused_import_braces)]
//! High-level access to DICOM files for `dcmio`: opening and saving data
//! sets by path, dictionary-backed conveniences, and query/retrieve filter
//! matching.

pub mod query;

pub use query::{query, QueryMatch};

use dcmio_core::dictionary::LookupError;
use dcmio_core::element::CreateElementError;
use dcmio_core::{DataSet, DicomValue, Element, Tag};
use dcmio_dictionary_std::StandardDataDictionary;
use dcmio_encoding::error::{Error, IoSnafu, Result};
use dcmio_parser::{read_data_set, write_data_set, ReadOptions};
use snafu::IntoError;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

fn io_error(e: std::io::Error) -> Error {
    IoSnafu { position: 0u64 }.into_error(e)
}

/// Read a data set from any byte source.
///
/// Returns the data set together with the first error recorded during the
/// read; on failure, the data set holds everything parsed up to that point.
pub fn from_reader<R>(reader: R, options: &ReadOptions) -> (DataSet, Option<Error>)
where
    R: Read,
{
    read_data_set(reader, options)
}

/// Read a data set from a file path.
///
/// Returns the data set together with the first error recorded during the
/// read; on failure, the data set holds everything parsed up to that point.
pub fn open_file<P>(path: P, options: &ReadOptions) -> (DataSet, Option<Error>)
where
    P: AsRef<Path>,
{
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => return (DataSet::new(), Some(io_error(e))),
    };
    read_data_set(BufReader::new(file), options)
}

/// Write a data set to any byte sink in the DICOM file format.
pub fn to_writer<W>(writer: W, data_set: &DataSet) -> Result<()>
where
    W: Write,
{
    write_data_set(writer, data_set)
}

/// Write a data set to the given file path, clobbering any existing file.
pub fn save_file<P>(path: P, data_set: &DataSet) -> Result<()>
where
    P: AsRef<Path>,
{
    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    write_data_set(&mut writer, data_set)?;
    writer.flush().map_err(io_error)
}

/// Create an element with the standard dictionary, validating each value
/// atom against the tag's canonical VR.
pub fn new_element(tag: Tag, values: Vec<DicomValue>) -> Result<Element, CreateElementError> {
    Element::new(StandardDataDictionary, tag, values)
}

/// Find the first element with the given keyword, e.g. `"PatientName"`.
pub fn element_by_name<'a>(
    data_set: &'a DataSet,
    name: &str,
) -> Result<Option<&'a Element>, LookupError> {
    let entry = dcmio_dictionary_std::find_by_name(name)?;
    Ok(data_set.element(entry.tag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmio_dictionary_std::tags;

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
                vec![DicomValue::from("1.2.3.4.5")],
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
        ds.push(new_element(tags::PATIENT_NAME, vec![DicomValue::from("DOE^JOHN")]).unwrap());
        ds.push(new_element(tags::PATIENT_ID, vec![DicomValue::from("7DkT2Tp")]).unwrap());
        ds
    }

    #[test]
    fn save_and_open_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("instance.dcm");

        save_file(&path, &sample_data_set()).unwrap();
        let (reread, err) = open_file(&path, &ReadOptions::default());
        assert!(err.is_none(), "unexpected error: {:?}", err);

        let patient_id = reread.element(tags::PATIENT_ID).unwrap();
        assert_eq!(patient_id.to_str().unwrap(), "7DkT2Tp");
    }

    #[test]
    fn opening_a_missing_file_reports_the_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let (ds, err) = open_file(dir.path().join("nope.dcm"), &ReadOptions::default());
        assert!(ds.is_empty());
        assert!(matches!(err, Some(Error::Io { .. })));
    }

    #[test]
    fn updating_an_element_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("updated.dcm");

        let mut ds = sample_data_set();
        let (index, _) = ds
            .iter()
            .enumerate()
            .find(|(_, e)| e.tag() == tags::PATIENT_ID)
            .unwrap();
        let replacement =
            new_element(tags::PATIENT_ID, vec![DicomValue::from("ZHANG^SAN")]).unwrap();
        let mut elements: Vec<Element> = ds.into_iter().collect();
        elements[index] = replacement;
        ds = DataSet::from_elements(elements);

        save_file(&path, &ds).unwrap();
        let (reread, err) = open_file(&path, &ReadOptions::default());
        assert!(err.is_none());
        assert_eq!(
            reread.element(tags::PATIENT_ID).unwrap().to_str().unwrap(),
            "ZHANG^SAN"
        );
    }

    #[test]
    fn lookup_by_keyword() {
        let ds = sample_data_set();
        let name = element_by_name(&ds, "PatientName").unwrap().unwrap();
        assert_eq!(name.to_str().unwrap(), "DOE^JOHN");
        assert!(element_by_name(&ds, "StudyDate").unwrap().is_none());
        assert!(element_by_name(&ds, "NoSuchAttribute").is_err());
    }
}
