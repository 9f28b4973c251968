//! The standard attribute table backing the dictionary registry.
//!
//! This is the practical subset of the DICOM data dictionary exercised by
//! the file codec and typical consumers; group ranges are not covered.

use crate::tags::*;
use dcmio_core::dictionary::DictionaryEntry;
use dcmio_core::header::{ITEM, ITEM_DELIMITATION_ITEM, SEQUENCE_DELIMITATION_ITEM};
use dcmio_core::{Tag, VR};

const fn entry(tag: Tag, alias: &'static str, vr: VR, vm: &'static str) -> DictionaryEntry {
    DictionaryEntry { tag, alias, vr, vm }
}

/// The full table of registered standard attributes.
#[rustfmt::skip]
pub static ENTRIES: &[DictionaryEntry] = &[
    // group 0002: file meta information
    entry(FILE_META_INFORMATION_GROUP_LENGTH, "FileMetaInformationGroupLength", VR::UL, "1"),
    entry(FILE_META_INFORMATION_VERSION, "FileMetaInformationVersion", VR::OB, "1"),
    entry(MEDIA_STORAGE_SOP_CLASS_UID, "MediaStorageSOPClassUID", VR::UI, "1"),
    entry(MEDIA_STORAGE_SOP_INSTANCE_UID, "MediaStorageSOPInstanceUID", VR::UI, "1"),
    entry(TRANSFER_SYNTAX_UID, "TransferSyntaxUID", VR::UI, "1"),
    entry(IMPLEMENTATION_CLASS_UID, "ImplementationClassUID", VR::UI, "1"),
    entry(IMPLEMENTATION_VERSION_NAME, "ImplementationVersionName", VR::SH, "1"),
    entry(SOURCE_APPLICATION_ENTITY_TITLE, "SourceApplicationEntityTitle", VR::AE, "1"),
    entry(SENDING_APPLICATION_ENTITY_TITLE, "SendingApplicationEntityTitle", VR::AE, "1"),
    entry(RECEIVING_APPLICATION_ENTITY_TITLE, "ReceivingApplicationEntityTitle", VR::AE, "1"),
    entry(PRIVATE_INFORMATION_CREATOR_UID, "PrivateInformationCreatorUID", VR::UI, "1"),
    entry(PRIVATE_INFORMATION, "PrivateInformation", VR::OB, "1"),
    // group 0008
    entry(SPECIFIC_CHARACTER_SET, "SpecificCharacterSet", VR::CS, "1-n"),
    entry(IMAGE_TYPE, "ImageType", VR::CS, "2-n"),
    entry(INSTANCE_CREATION_DATE, "InstanceCreationDate", VR::DA, "1"),
    entry(INSTANCE_CREATION_TIME, "InstanceCreationTime", VR::TM, "1"),
    entry(INSTANCE_CREATOR_UID, "InstanceCreatorUID", VR::UI, "1"),
    entry(SOP_CLASS_UID, "SOPClassUID", VR::UI, "1"),
    entry(SOP_INSTANCE_UID, "SOPInstanceUID", VR::UI, "1"),
    entry(STUDY_DATE, "StudyDate", VR::DA, "1"),
    entry(SERIES_DATE, "SeriesDate", VR::DA, "1"),
    entry(ACQUISITION_DATE, "AcquisitionDate", VR::DA, "1"),
    entry(CONTENT_DATE, "ContentDate", VR::DA, "1"),
    entry(STUDY_TIME, "StudyTime", VR::TM, "1"),
    entry(SERIES_TIME, "SeriesTime", VR::TM, "1"),
    entry(ACQUISITION_TIME, "AcquisitionTime", VR::TM, "1"),
    entry(CONTENT_TIME, "ContentTime", VR::TM, "1"),
    entry(ACCESSION_NUMBER, "AccessionNumber", VR::SH, "1"),
    entry(QUERY_RETRIEVE_LEVEL, "QueryRetrieveLevel", VR::CS, "1"),
    entry(RETRIEVE_AE_TITLE, "RetrieveAETitle", VR::AE, "1-n"),
    entry(INSTANCE_AVAILABILITY, "InstanceAvailability", VR::CS, "1"),
    entry(MODALITY, "Modality", VR::CS, "1"),
    entry(MODALITIES_IN_STUDY, "ModalitiesInStudy", VR::CS, "1-n"),
    entry(CONVERSION_TYPE, "ConversionType", VR::CS, "1"),
    entry(MANUFACTURER, "Manufacturer", VR::LO, "1"),
    entry(INSTITUTION_NAME, "InstitutionName", VR::LO, "1"),
    entry(INSTITUTION_ADDRESS, "InstitutionAddress", VR::ST, "1"),
    entry(REFERRING_PHYSICIAN_NAME, "ReferringPhysicianName", VR::PN, "1"),
    entry(STATION_NAME, "StationName", VR::SH, "1"),
    entry(STUDY_DESCRIPTION, "StudyDescription", VR::LO, "1"),
    entry(SERIES_DESCRIPTION, "SeriesDescription", VR::LO, "1"),
    entry(INSTITUTIONAL_DEPARTMENT_NAME, "InstitutionalDepartmentName", VR::LO, "1"),
    entry(PHYSICIANS_OF_RECORD, "PhysiciansOfRecord", VR::PN, "1-n"),
    entry(PERFORMING_PHYSICIAN_NAME, "PerformingPhysicianName", VR::PN, "1-n"),
    entry(NAME_OF_PHYSICIANS_READING_STUDY, "NameOfPhysiciansReadingStudy", VR::PN, "1-n"),
    entry(OPERATORS_NAME, "OperatorsName", VR::PN, "1-n"),
    entry(ADMITTING_DIAGNOSES_DESCRIPTION, "AdmittingDiagnosesDescription", VR::LO, "1-n"),
    entry(MANUFACTURER_MODEL_NAME, "ManufacturerModelName", VR::LO, "1"),
    entry(REFERENCED_STUDY_SEQUENCE, "ReferencedStudySequence", VR::SQ, "1"),
    entry(REFERENCED_PERFORMED_PROCEDURE_STEP_SEQUENCE, "ReferencedPerformedProcedureStepSequence", VR::SQ, "1"),
    entry(REFERENCED_SERIES_SEQUENCE, "ReferencedSeriesSequence", VR::SQ, "1"),
    entry(REFERENCED_PATIENT_SEQUENCE, "ReferencedPatientSequence", VR::SQ, "1"),
    entry(REFERENCED_IMAGE_SEQUENCE, "ReferencedImageSequence", VR::SQ, "1"),
    entry(REFERENCED_SOP_CLASS_UID, "ReferencedSOPClassUID", VR::UI, "1"),
    entry(REFERENCED_SOP_INSTANCE_UID, "ReferencedSOPInstanceUID", VR::UI, "1"),
    entry(DERIVATION_DESCRIPTION, "DerivationDescription", VR::ST, "1"),
    entry(SOURCE_IMAGE_SEQUENCE, "SourceImageSequence", VR::SQ, "1"),
    // group 0010
    entry(PATIENT_NAME, "PatientName", VR::PN, "1"),
    entry(PATIENT_ID, "PatientID", VR::LO, "1"),
    entry(ISSUER_OF_PATIENT_ID, "IssuerOfPatientID", VR::LO, "1"),
    entry(PATIENT_BIRTH_DATE, "PatientBirthDate", VR::DA, "1"),
    entry(PATIENT_BIRTH_TIME, "PatientBirthTime", VR::TM, "1"),
    entry(PATIENT_SEX, "PatientSex", VR::CS, "1"),
    entry(OTHER_PATIENT_IDS, "OtherPatientIDs", VR::LO, "1-n"),
    entry(OTHER_PATIENT_NAMES, "OtherPatientNames", VR::PN, "1-n"),
    entry(PATIENT_AGE, "PatientAge", VR::AS, "1"),
    entry(PATIENT_SIZE, "PatientSize", VR::DS, "1"),
    entry(PATIENT_WEIGHT, "PatientWeight", VR::DS, "1"),
    entry(ETHNIC_GROUP, "EthnicGroup", VR::SH, "1"),
    entry(ADDITIONAL_PATIENT_HISTORY, "AdditionalPatientHistory", VR::LT, "1"),
    entry(PATIENT_COMMENTS, "PatientComments", VR::LT, "1"),
    // group 0018
    entry(CONTRAST_BOLUS_AGENT, "ContrastBolusAgent", VR::LO, "1"),
    entry(BODY_PART_EXAMINED, "BodyPartExamined", VR::CS, "1"),
    entry(SCANNING_SEQUENCE, "ScanningSequence", VR::CS, "1-n"),
    entry(SEQUENCE_VARIANT, "SequenceVariant", VR::CS, "1-n"),
    entry(SCAN_OPTIONS, "ScanOptions", VR::CS, "1-n"),
    entry(MR_ACQUISITION_TYPE, "MRAcquisitionType", VR::CS, "1"),
    entry(SLICE_THICKNESS, "SliceThickness", VR::DS, "1"),
    entry(KVP, "KVP", VR::DS, "1"),
    entry(REPETITION_TIME, "RepetitionTime", VR::DS, "1"),
    entry(ECHO_TIME, "EchoTime", VR::DS, "1"),
    entry(INVERSION_TIME, "InversionTime", VR::DS, "1"),
    entry(NUMBER_OF_AVERAGES, "NumberOfAverages", VR::DS, "1"),
    entry(IMAGING_FREQUENCY, "ImagingFrequency", VR::DS, "1"),
    entry(IMAGED_NUCLEUS, "ImagedNucleus", VR::SH, "1"),
    entry(ECHO_NUMBERS, "EchoNumbers", VR::IS, "1-n"),
    entry(MAGNETIC_FIELD_STRENGTH, "MagneticFieldStrength", VR::DS, "1"),
    entry(SPACING_BETWEEN_SLICES, "SpacingBetweenSlices", VR::DS, "1"),
    entry(ECHO_TRAIN_LENGTH, "EchoTrainLength", VR::IS, "1"),
    entry(PIXEL_BANDWIDTH, "PixelBandwidth", VR::DS, "1"),
    entry(DEVICE_SERIAL_NUMBER, "DeviceSerialNumber", VR::LO, "1"),
    entry(SOFTWARE_VERSIONS, "SoftwareVersions", VR::LO, "1-n"),
    entry(PROTOCOL_NAME, "ProtocolName", VR::LO, "1"),
    entry(RECONSTRUCTION_DIAMETER, "ReconstructionDiameter", VR::DS, "1"),
    entry(X_RAY_TUBE_CURRENT, "XRayTubeCurrent", VR::IS, "1"),
    entry(EXPOSURE, "Exposure", VR::IS, "1"),
    entry(FILTER_TYPE, "FilterType", VR::SH, "1"),
    entry(CONVOLUTION_KERNEL, "ConvolutionKernel", VR::SH, "1-n"),
    entry(ACQUISITION_MATRIX, "AcquisitionMatrix", VR::US, "4"),
    entry(IN_PLANE_PHASE_ENCODING_DIRECTION, "InPlanePhaseEncodingDirection", VR::CS, "1"),
    entry(FLIP_ANGLE, "FlipAngle", VR::DS, "1"),
    entry(SAR, "SAR", VR::DS, "1"),
    entry(PATIENT_POSITION, "PatientPosition", VR::CS, "1"),
    // group 0020
    entry(STUDY_INSTANCE_UID, "StudyInstanceUID", VR::UI, "1"),
    entry(SERIES_INSTANCE_UID, "SeriesInstanceUID", VR::UI, "1"),
    entry(STUDY_ID, "StudyID", VR::SH, "1"),
    entry(SERIES_NUMBER, "SeriesNumber", VR::IS, "1"),
    entry(ACQUISITION_NUMBER, "AcquisitionNumber", VR::IS, "1"),
    entry(INSTANCE_NUMBER, "InstanceNumber", VR::IS, "1"),
    entry(PATIENT_ORIENTATION, "PatientOrientation", VR::CS, "2"),
    entry(IMAGE_POSITION_PATIENT, "ImagePositionPatient", VR::DS, "3"),
    entry(IMAGE_ORIENTATION_PATIENT, "ImageOrientationPatient", VR::DS, "6"),
    entry(FRAME_OF_REFERENCE_UID, "FrameOfReferenceUID", VR::UI, "1"),
    entry(IMAGES_IN_ACQUISITION, "ImagesInAcquisition", VR::IS, "1"),
    entry(POSITION_REFERENCE_INDICATOR, "PositionReferenceIndicator", VR::LO, "1"),
    entry(SLICE_LOCATION, "SliceLocation", VR::DS, "1"),
    entry(IMAGE_COMMENTS, "ImageComments", VR::LT, "1"),
    // group 0028
    entry(SAMPLES_PER_PIXEL, "SamplesPerPixel", VR::US, "1"),
    entry(PHOTOMETRIC_INTERPRETATION, "PhotometricInterpretation", VR::CS, "1"),
    entry(PLANAR_CONFIGURATION, "PlanarConfiguration", VR::US, "1"),
    entry(NUMBER_OF_FRAMES, "NumberOfFrames", VR::IS, "1"),
    entry(ROWS, "Rows", VR::US, "1"),
    entry(COLUMNS, "Columns", VR::US, "1"),
    entry(PIXEL_SPACING, "PixelSpacing", VR::DS, "2"),
    entry(PIXEL_ASPECT_RATIO, "PixelAspectRatio", VR::IS, "2"),
    entry(BITS_ALLOCATED, "BitsAllocated", VR::US, "1"),
    entry(BITS_STORED, "BitsStored", VR::US, "1"),
    entry(HIGH_BIT, "HighBit", VR::US, "1"),
    entry(PIXEL_REPRESENTATION, "PixelRepresentation", VR::US, "1"),
    entry(SMALLEST_IMAGE_PIXEL_VALUE, "SmallestImagePixelValue", VR::US, "1"),
    entry(LARGEST_IMAGE_PIXEL_VALUE, "LargestImagePixelValue", VR::US, "1"),
    entry(WINDOW_CENTER, "WindowCenter", VR::DS, "1-n"),
    entry(WINDOW_WIDTH, "WindowWidth", VR::DS, "1-n"),
    entry(RESCALE_INTERCEPT, "RescaleIntercept", VR::DS, "1"),
    entry(RESCALE_SLOPE, "RescaleSlope", VR::DS, "1"),
    entry(RESCALE_TYPE, "RescaleType", VR::LO, "1"),
    entry(LOSSY_IMAGE_COMPRESSION, "LossyImageCompression", VR::CS, "1"),
    entry(LOSSY_IMAGE_COMPRESSION_RATIO, "LossyImageCompressionRatio", VR::DS, "1-n"),
    // group 0032
    entry(REQUESTING_PHYSICIAN, "RequestingPhysician", VR::PN, "1"),
    entry(REQUESTED_PROCEDURE_DESCRIPTION, "RequestedProcedureDescription", VR::LO, "1"),
    entry(STUDY_COMMENTS, "StudyComments", VR::LT, "1"),
    // group 0040
    entry(PERFORMED_PROCEDURE_STEP_START_DATE, "PerformedProcedureStepStartDate", VR::DA, "1"),
    entry(PERFORMED_PROCEDURE_STEP_START_TIME, "PerformedProcedureStepStartTime", VR::TM, "1"),
    entry(PERFORMED_PROCEDURE_STEP_ID, "PerformedProcedureStepID", VR::SH, "1"),
    entry(PERFORMED_PROCEDURE_STEP_DESCRIPTION, "PerformedProcedureStepDescription", VR::LO, "1"),
    entry(REQUEST_ATTRIBUTES_SEQUENCE, "RequestAttributesSequence", VR::SQ, "1"),
    entry(CONTENT_SEQUENCE, "ContentSequence", VR::SQ, "1-n"),
    // group 7FE0
    entry(FLOAT_PIXEL_DATA, "FloatPixelData", VR::OF, "1"),
    entry(DOUBLE_FLOAT_PIXEL_DATA, "DoubleFloatPixelData", VR::OD, "1"),
    entry(PIXEL_DATA, "PixelData", VR::OW, "1"),
    // group FFFE: items and delimiters
    entry(ITEM, "Item", VR::NA, "1"),
    entry(ITEM_DELIMITATION_ITEM, "ItemDelimitationItem", VR::NA, "1"),
    entry(SEQUENCE_DELIMITATION_ITEM, "SequenceDelimitationItem", VR::NA, "1"),
];
