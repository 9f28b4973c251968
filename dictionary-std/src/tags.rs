//! Tag constants for the standard attributes known to this dictionary.
//!
//! Item and delimiter tags are structural to the encoding and live in
//! `dcmio_core::header`.

use dcmio_core::Tag;

// group 0002: file meta information

/// File Meta Information Group Length (0002,0000)
pub const FILE_META_INFORMATION_GROUP_LENGTH: Tag = Tag(0x0002, 0x0000);
/// File Meta Information Version (0002,0001)
pub const FILE_META_INFORMATION_VERSION: Tag = Tag(0x0002, 0x0001);
/// Media Storage SOP Class UID (0002,0002)
pub const MEDIA_STORAGE_SOP_CLASS_UID: Tag = Tag(0x0002, 0x0002);
/// Media Storage SOP Instance UID (0002,0003)
pub const MEDIA_STORAGE_SOP_INSTANCE_UID: Tag = Tag(0x0002, 0x0003);
/// Transfer Syntax UID (0002,0010)
pub const TRANSFER_SYNTAX_UID: Tag = Tag(0x0002, 0x0010);
/// Implementation Class UID (0002,0012)
pub const IMPLEMENTATION_CLASS_UID: Tag = Tag(0x0002, 0x0012);
/// Implementation Version Name (0002,0013)
pub const IMPLEMENTATION_VERSION_NAME: Tag = Tag(0x0002, 0x0013);
/// Source Application Entity Title (0002,0016)
pub const SOURCE_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0016);
/// Sending Application Entity Title (0002,0017)
pub const SENDING_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0017);
/// Receiving Application Entity Title (0002,0018)
pub const RECEIVING_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0018);
/// Private Information Creator UID (0002,0100)
pub const PRIVATE_INFORMATION_CREATOR_UID: Tag = Tag(0x0002, 0x0100);
/// Private Information (0002,0102)
pub const PRIVATE_INFORMATION: Tag = Tag(0x0002, 0x0102);

// group 0008

/// Specific Character Set (0008,0005)
pub const SPECIFIC_CHARACTER_SET: Tag = Tag(0x0008, 0x0005);
/// Image Type (0008,0008)
pub const IMAGE_TYPE: Tag = Tag(0x0008, 0x0008);
/// Instance Creation Date (0008,0012)
pub const INSTANCE_CREATION_DATE: Tag = Tag(0x0008, 0x0012);
/// Instance Creation Time (0008,0013)
pub const INSTANCE_CREATION_TIME: Tag = Tag(0x0008, 0x0013);
/// Instance Creator UID (0008,0014)
pub const INSTANCE_CREATOR_UID: Tag = Tag(0x0008, 0x0014);
/// SOP Class UID (0008,0016)
pub const SOP_CLASS_UID: Tag = Tag(0x0008, 0x0016);
/// SOP Instance UID (0008,0018)
pub const SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x0018);
/// Study Date (0008,0020)
pub const STUDY_DATE: Tag = Tag(0x0008, 0x0020);
/// Series Date (0008,0021)
pub const SERIES_DATE: Tag = Tag(0x0008, 0x0021);
/// Acquisition Date (0008,0022)
pub const ACQUISITION_DATE: Tag = Tag(0x0008, 0x0022);
/// Content Date (0008,0023)
pub const CONTENT_DATE: Tag = Tag(0x0008, 0x0023);
/// Study Time (0008,0030)
pub const STUDY_TIME: Tag = Tag(0x0008, 0x0030);
/// Series Time (0008,0031)
pub const SERIES_TIME: Tag = Tag(0x0008, 0x0031);
/// Acquisition Time (0008,0032)
pub const ACQUISITION_TIME: Tag = Tag(0x0008, 0x0032);
/// Content Time (0008,0033)
pub const CONTENT_TIME: Tag = Tag(0x0008, 0x0033);
/// Accession Number (0008,0050)
pub const ACCESSION_NUMBER: Tag = Tag(0x0008, 0x0050);
/// Query/Retrieve Level (0008,0052)
pub const QUERY_RETRIEVE_LEVEL: Tag = Tag(0x0008, 0x0052);
/// Retrieve AE Title (0008,0054)
pub const RETRIEVE_AE_TITLE: Tag = Tag(0x0008, 0x0054);
/// Instance Availability (0008,0056)
pub const INSTANCE_AVAILABILITY: Tag = Tag(0x0008, 0x0056);
/// Modality (0008,0060)
pub const MODALITY: Tag = Tag(0x0008, 0x0060);
/// Modalities in Study (0008,0061)
pub const MODALITIES_IN_STUDY: Tag = Tag(0x0008, 0x0061);
/// Conversion Type (0008,0064)
pub const CONVERSION_TYPE: Tag = Tag(0x0008, 0x0064);
/// Manufacturer (0008,0070)
pub const MANUFACTURER: Tag = Tag(0x0008, 0x0070);
/// Institution Name (0008,0080)
pub const INSTITUTION_NAME: Tag = Tag(0x0008, 0x0080);
/// Institution Address (0008,0081)
pub const INSTITUTION_ADDRESS: Tag = Tag(0x0008, 0x0081);
/// Referring Physician's Name (0008,0090)
pub const REFERRING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x0090);
/// Station Name (0008,1010)
pub const STATION_NAME: Tag = Tag(0x0008, 0x1010);
/// Study Description (0008,1030)
pub const STUDY_DESCRIPTION: Tag = Tag(0x0008, 0x1030);
/// Series Description (0008,103E)
pub const SERIES_DESCRIPTION: Tag = Tag(0x0008, 0x103E);
/// Institutional Department Name (0008,1040)
pub const INSTITUTIONAL_DEPARTMENT_NAME: Tag = Tag(0x0008, 0x1040);
/// Physician(s) of Record (0008,1048)
pub const PHYSICIANS_OF_RECORD: Tag = Tag(0x0008, 0x1048);
/// Performing Physician's Name (0008,1050)
pub const PERFORMING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x1050);
/// Name of Physician(s) Reading Study (0008,1060)
pub const NAME_OF_PHYSICIANS_READING_STUDY: Tag = Tag(0x0008, 0x1060);
/// Operators' Name (0008,1070)
pub const OPERATORS_NAME: Tag = Tag(0x0008, 0x1070);
/// Admitting Diagnoses Description (0008,1080)
pub const ADMITTING_DIAGNOSES_DESCRIPTION: Tag = Tag(0x0008, 0x1080);
/// Manufacturer's Model Name (0008,1090)
pub const MANUFACTURER_MODEL_NAME: Tag = Tag(0x0008, 0x1090);
/// Referenced Study Sequence (0008,1110)
pub const REFERENCED_STUDY_SEQUENCE: Tag = Tag(0x0008, 0x1110);
/// Referenced Performed Procedure Step Sequence (0008,1111)
pub const REFERENCED_PERFORMED_PROCEDURE_STEP_SEQUENCE: Tag = Tag(0x0008, 0x1111);
/// Referenced Series Sequence (0008,1115)
pub const REFERENCED_SERIES_SEQUENCE: Tag = Tag(0x0008, 0x1115);
/// Referenced Patient Sequence (0008,1120)
pub const REFERENCED_PATIENT_SEQUENCE: Tag = Tag(0x0008, 0x1120);
/// Referenced Image Sequence (0008,1140)
pub const REFERENCED_IMAGE_SEQUENCE: Tag = Tag(0x0008, 0x1140);
/// Referenced SOP Class UID (0008,1150)
pub const REFERENCED_SOP_CLASS_UID: Tag = Tag(0x0008, 0x1150);
/// Referenced SOP Instance UID (0008,1155)
pub const REFERENCED_SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x1155);
/// Derivation Description (0008,2111)
pub const DERIVATION_DESCRIPTION: Tag = Tag(0x0008, 0x2111);
/// Source Image Sequence (0008,2112)
pub const SOURCE_IMAGE_SEQUENCE: Tag = Tag(0x0008, 0x2112);

// group 0010

/// Patient's Name (0010,0010)
pub const PATIENT_NAME: Tag = Tag(0x0010, 0x0010);
/// Patient ID (0010,0020)
pub const PATIENT_ID: Tag = Tag(0x0010, 0x0020);
/// Issuer of Patient ID (0010,0021)
pub const ISSUER_OF_PATIENT_ID: Tag = Tag(0x0010, 0x0021);
/// Patient's Birth Date (0010,0030)
pub const PATIENT_BIRTH_DATE: Tag = Tag(0x0010, 0x0030);
/// Patient's Birth Time (0010,0032)
pub const PATIENT_BIRTH_TIME: Tag = Tag(0x0010, 0x0032);
/// Patient's Sex (0010,0040)
pub const PATIENT_SEX: Tag = Tag(0x0010, 0x0040);
/// Other Patient IDs (0010,1000)
pub const OTHER_PATIENT_IDS: Tag = Tag(0x0010, 0x1000);
/// Other Patient Names (0010,1001)
pub const OTHER_PATIENT_NAMES: Tag = Tag(0x0010, 0x1001);
/// Patient's Age (0010,1010)
pub const PATIENT_AGE: Tag = Tag(0x0010, 0x1010);
/// Patient's Size (0010,1020)
pub const PATIENT_SIZE: Tag = Tag(0x0010, 0x1020);
/// Patient's Weight (0010,1030)
pub const PATIENT_WEIGHT: Tag = Tag(0x0010, 0x1030);
/// Ethnic Group (0010,2160)
pub const ETHNIC_GROUP: Tag = Tag(0x0010, 0x2160);
/// Additional Patient History (0010,21B0)
pub const ADDITIONAL_PATIENT_HISTORY: Tag = Tag(0x0010, 0x21B0);
/// Patient Comments (0010,4000)
pub const PATIENT_COMMENTS: Tag = Tag(0x0010, 0x4000);

// group 0018

/// Contrast/Bolus Agent (0018,0010)
pub const CONTRAST_BOLUS_AGENT: Tag = Tag(0x0018, 0x0010);
/// Body Part Examined (0018,0015)
pub const BODY_PART_EXAMINED: Tag = Tag(0x0018, 0x0015);
/// Scanning Sequence (0018,0020)
pub const SCANNING_SEQUENCE: Tag = Tag(0x0018, 0x0020);
/// Sequence Variant (0018,0021)
pub const SEQUENCE_VARIANT: Tag = Tag(0x0018, 0x0021);
/// Scan Options (0018,0022)
pub const SCAN_OPTIONS: Tag = Tag(0x0018, 0x0022);
/// MR Acquisition Type (0018,0023)
pub const MR_ACQUISITION_TYPE: Tag = Tag(0x0018, 0x0023);
/// Slice Thickness (0018,0050)
pub const SLICE_THICKNESS: Tag = Tag(0x0018, 0x0050);
/// KVP (0018,0060)
pub const KVP: Tag = Tag(0x0018, 0x0060);
/// Repetition Time (0018,0080)
pub const REPETITION_TIME: Tag = Tag(0x0018, 0x0080);
/// Echo Time (0018,0081)
pub const ECHO_TIME: Tag = Tag(0x0018, 0x0081);
/// Inversion Time (0018,0082)
pub const INVERSION_TIME: Tag = Tag(0x0018, 0x0082);
/// Number of Averages (0018,0083)
pub const NUMBER_OF_AVERAGES: Tag = Tag(0x0018, 0x0083);
/// Imaging Frequency (0018,0084)
pub const IMAGING_FREQUENCY: Tag = Tag(0x0018, 0x0084);
/// Imaged Nucleus (0018,0085)
pub const IMAGED_NUCLEUS: Tag = Tag(0x0018, 0x0085);
/// Echo Number(s) (0018,0086)
pub const ECHO_NUMBERS: Tag = Tag(0x0018, 0x0086);
/// Magnetic Field Strength (0018,0087)
pub const MAGNETIC_FIELD_STRENGTH: Tag = Tag(0x0018, 0x0087);
/// Spacing Between Slices (0018,0088)
pub const SPACING_BETWEEN_SLICES: Tag = Tag(0x0018, 0x0088);
/// Echo Train Length (0018,0091)
pub const ECHO_TRAIN_LENGTH: Tag = Tag(0x0018, 0x0091);
/// Pixel Bandwidth (0018,0095)
pub const PIXEL_BANDWIDTH: Tag = Tag(0x0018, 0x0095);
/// Device Serial Number (0018,1000)
pub const DEVICE_SERIAL_NUMBER: Tag = Tag(0x0018, 0x1000);
/// Software Versions (0018,1020)
pub const SOFTWARE_VERSIONS: Tag = Tag(0x0018, 0x1020);
/// Protocol Name (0018,1030)
pub const PROTOCOL_NAME: Tag = Tag(0x0018, 0x1030);
/// Reconstruction Diameter (0018,1100)
pub const RECONSTRUCTION_DIAMETER: Tag = Tag(0x0018, 0x1100);
/// X-Ray Tube Current (0018,1151)
pub const X_RAY_TUBE_CURRENT: Tag = Tag(0x0018, 0x1151);
/// Exposure (0018,1152)
pub const EXPOSURE: Tag = Tag(0x0018, 0x1152);
/// Filter Type (0018,1160)
pub const FILTER_TYPE: Tag = Tag(0x0018, 0x1160);
/// Convolution Kernel (0018,1210)
pub const CONVOLUTION_KERNEL: Tag = Tag(0x0018, 0x1210);
/// Acquisition Matrix (0018,1310)
pub const ACQUISITION_MATRIX: Tag = Tag(0x0018, 0x1310);
/// In-plane Phase Encoding Direction (0018,1312)
pub const IN_PLANE_PHASE_ENCODING_DIRECTION: Tag = Tag(0x0018, 0x1312);
/// Flip Angle (0018,1314)
pub const FLIP_ANGLE: Tag = Tag(0x0018, 0x1314);
/// SAR (0018,1316)
pub const SAR: Tag = Tag(0x0018, 0x1316);
/// Patient Position (0018,5100)
pub const PATIENT_POSITION: Tag = Tag(0x0018, 0x5100);

// group 0020

/// Study Instance UID (0020,000D)
pub const STUDY_INSTANCE_UID: Tag = Tag(0x0020, 0x000D);
/// Series Instance UID (0020,000E)
pub const SERIES_INSTANCE_UID: Tag = Tag(0x0020, 0x000E);
/// Study ID (0020,0010)
pub const STUDY_ID: Tag = Tag(0x0020, 0x0010);
/// Series Number (0020,0011)
pub const SERIES_NUMBER: Tag = Tag(0x0020, 0x0011);
/// Acquisition Number (0020,0012)
pub const ACQUISITION_NUMBER: Tag = Tag(0x0020, 0x0012);
/// Instance Number (0020,0013)
pub const INSTANCE_NUMBER: Tag = Tag(0x0020, 0x0013);
/// Patient Orientation (0020,0020)
pub const PATIENT_ORIENTATION: Tag = Tag(0x0020, 0x0020);
/// Image Position (Patient) (0020,0032)
pub const IMAGE_POSITION_PATIENT: Tag = Tag(0x0020, 0x0032);
/// Image Orientation (Patient) (0020,0037)
pub const IMAGE_ORIENTATION_PATIENT: Tag = Tag(0x0020, 0x0037);
/// Frame of Reference UID (0020,0052)
pub const FRAME_OF_REFERENCE_UID: Tag = Tag(0x0020, 0x0052);
/// Images in Acquisition (0020,1002)
pub const IMAGES_IN_ACQUISITION: Tag = Tag(0x0020, 0x1002);
/// Position Reference Indicator (0020,1040)
pub const POSITION_REFERENCE_INDICATOR: Tag = Tag(0x0020, 0x1040);
/// Slice Location (0020,1041)
pub const SLICE_LOCATION: Tag = Tag(0x0020, 0x1041);
/// Image Comments (0020,4000)
pub const IMAGE_COMMENTS: Tag = Tag(0x0020, 0x4000);

// group 0028

/// Samples per Pixel (0028,0002)
pub const SAMPLES_PER_PIXEL: Tag = Tag(0x0028, 0x0002);
/// Photometric Interpretation (0028,0004)
pub const PHOTOMETRIC_INTERPRETATION: Tag = Tag(0x0028, 0x0004);
/// Planar Configuration (0028,0006)
pub const PLANAR_CONFIGURATION: Tag = Tag(0x0028, 0x0006);
/// Number of Frames (0028,0008)
pub const NUMBER_OF_FRAMES: Tag = Tag(0x0028, 0x0008);
/// Rows (0028,0010)
pub const ROWS: Tag = Tag(0x0028, 0x0010);
/// Columns (0028,0011)
pub const COLUMNS: Tag = Tag(0x0028, 0x0011);
/// Pixel Spacing (0028,0030)
pub const PIXEL_SPACING: Tag = Tag(0x0028, 0x0030);
/// Pixel Aspect Ratio (0028,0034)
pub const PIXEL_ASPECT_RATIO: Tag = Tag(0x0028, 0x0034);
/// Bits Allocated (0028,0100)
pub const BITS_ALLOCATED: Tag = Tag(0x0028, 0x0100);
/// Bits Stored (0028,0101)
pub const BITS_STORED: Tag = Tag(0x0028, 0x0101);
/// High Bit (0028,0102)
pub const HIGH_BIT: Tag = Tag(0x0028, 0x0102);
/// Pixel Representation (0028,0103)
pub const PIXEL_REPRESENTATION: Tag = Tag(0x0028, 0x0103);
/// Smallest Image Pixel Value (0028,0106)
pub const SMALLEST_IMAGE_PIXEL_VALUE: Tag = Tag(0x0028, 0x0106);
/// Largest Image Pixel Value (0028,0107)
pub const LARGEST_IMAGE_PIXEL_VALUE: Tag = Tag(0x0028, 0x0107);
/// Window Center (0028,1050)
pub const WINDOW_CENTER: Tag = Tag(0x0028, 0x1050);
/// Window Width (0028,1051)
pub const WINDOW_WIDTH: Tag = Tag(0x0028, 0x1051);
/// Rescale Intercept (0028,1052)
pub const RESCALE_INTERCEPT: Tag = Tag(0x0028, 0x1052);
/// Rescale Slope (0028,1053)
pub const RESCALE_SLOPE: Tag = Tag(0x0028, 0x1053);
/// Rescale Type (0028,1054)
pub const RESCALE_TYPE: Tag = Tag(0x0028, 0x1054);
/// Lossy Image Compression (0028,2110)
pub const LOSSY_IMAGE_COMPRESSION: Tag = Tag(0x0028, 0x2110);
/// Lossy Image Compression Ratio (0028,2112)
pub const LOSSY_IMAGE_COMPRESSION_RATIO: Tag = Tag(0x0028, 0x2112);

// group 0032

/// Requesting Physician (0032,1032)
pub const REQUESTING_PHYSICIAN: Tag = Tag(0x0032, 0x1032);
/// Requested Procedure Description (0032,1060)
pub const REQUESTED_PROCEDURE_DESCRIPTION: Tag = Tag(0x0032, 0x1060);
/// Study Comments (0032,4000)
pub const STUDY_COMMENTS: Tag = Tag(0x0032, 0x4000);

// group 0040

/// Performed Procedure Step Start Date (0040,0244)
pub const PERFORMED_PROCEDURE_STEP_START_DATE: Tag = Tag(0x0040, 0x0244);
/// Performed Procedure Step Start Time (0040,0245)
pub const PERFORMED_PROCEDURE_STEP_START_TIME: Tag = Tag(0x0040, 0x0245);
/// Performed Procedure Step ID (0040,0253)
pub const PERFORMED_PROCEDURE_STEP_ID: Tag = Tag(0x0040, 0x0253);
/// Performed Procedure Step Description (0040,0254)
pub const PERFORMED_PROCEDURE_STEP_DESCRIPTION: Tag = Tag(0x0040, 0x0254);
/// Request Attributes Sequence (0040,0275)
pub const REQUEST_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0040, 0x0275);
/// Content Sequence (0040,A730)
pub const CONTENT_SEQUENCE: Tag = Tag(0x0040, 0xA730);

// group 7FE0

/// Float Pixel Data (7FE0,0008)
pub const FLOAT_PIXEL_DATA: Tag = Tag(0x7FE0, 0x0008);
/// Double Float Pixel Data (7FE0,0009)
pub const DOUBLE_FLOAT_PIXEL_DATA: Tag = Tag(0x7FE0, 0x0009);
/// Pixel Data (7FE0,0010)
pub const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);
