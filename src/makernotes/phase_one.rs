//! Phase One makernote tags.
//!
//! Tag ids, names, and formats follow the exiftool Phase One reference
//! (<https://exiftool.org/TagNames/PhaseOne.html>). Most tags are plain
//! signed 32-bit integers; photographic quantities are single-precision
//! floats in APEX units, and identification fields are strings.

use once_cell::sync::Lazy;

use crate::tag::{TagFormat, TagId, TagValue};
use crate::vendor::VendorTable;

// =============================================================================
// Tag constants
// =============================================================================

pub const TAG_CAMERA_ORIENTATION: TagId = 0x0100;
pub const TAG_SERIAL_NUMBER: TagId = 0x0102;
pub const TAG_ISO: TagId = 0x0105;
pub const TAG_COLOR_MATRIX_1: TagId = 0x0106;
pub const TAG_WB_RGB_LEVELS: TagId = 0x0107;
pub const TAG_SENSOR_WIDTH: TagId = 0x0108;
pub const TAG_SENSOR_HEIGHT: TagId = 0x0109;
pub const TAG_SENSOR_LEFT_MARGIN: TagId = 0x010A;
pub const TAG_SENSOR_TOP_MARGIN: TagId = 0x010B;
pub const TAG_IMAGE_WIDTH: TagId = 0x010C;
pub const TAG_IMAGE_HEIGHT: TagId = 0x010D;
pub const TAG_RAW_FORMAT: TagId = 0x010E;
pub const TAG_RAW_DATA: TagId = 0x010F;
pub const TAG_SENSOR_CALIBRATION: TagId = 0x0110;
pub const TAG_DATE_TIME_ORIGINAL: TagId = 0x0112;
pub const TAG_IMAGE_NUMBER: TagId = 0x0113;
pub const TAG_SOFTWARE: TagId = 0x0203;
pub const TAG_SYSTEM: TagId = 0x0204;
pub const TAG_SENSOR_TEMPERATURE: TagId = 0x0210;
pub const TAG_SENSOR_TEMPERATURE_2: TagId = 0x0211;
pub const TAG_STRIP_OFFSETS: TagId = 0x021C;
pub const TAG_BLACK_LEVEL: TagId = 0x021D;
pub const TAG_SPLIT_COLUMN: TagId = 0x0222;
pub const TAG_BLACK_LEVEL_DATA: TagId = 0x0223;
pub const TAG_COLOR_MATRIX_2: TagId = 0x0226;
pub const TAG_AF_ADJUSTMENT: TagId = 0x0267;
pub const TAG_FIRMWARE_VERSIONS: TagId = 0x0301;
pub const TAG_SHUTTER_SPEED_VALUE: TagId = 0x0400;
pub const TAG_APERTURE_VALUE: TagId = 0x0401;
pub const TAG_EXPOSURE_COMPENSATION: TagId = 0x0402;
pub const TAG_FOCAL_LENGTH: TagId = 0x0403;
pub const TAG_CAMERA_MODEL: TagId = 0x0410;
pub const TAG_LENS_MODEL: TagId = 0x0412;
pub const TAG_MAX_APERTURE_VALUE: TagId = 0x0414;
pub const TAG_MIN_APERTURE_VALUE: TagId = 0x0415;
pub const TAG_VIEWFINDER: TagId = 0x0455;

// =============================================================================
// Name table
// =============================================================================

// Sorted ascending by tag id; VendorTable::validate checks this in tests.
static TAG_NAMES: &[(TagId, &str)] = &[
    (TAG_CAMERA_ORIENTATION, "Camera Orientation"),
    (TAG_SERIAL_NUMBER, "Serial Number"),
    (TAG_ISO, "ISO"),
    (TAG_COLOR_MATRIX_1, "Color Matrix 1"),
    (TAG_WB_RGB_LEVELS, "WB_RGB Levels"),
    (TAG_SENSOR_WIDTH, "Sensor Width"),
    (TAG_SENSOR_HEIGHT, "Sensor Height"),
    (TAG_SENSOR_LEFT_MARGIN, "Sensor Left Margin"),
    (TAG_SENSOR_TOP_MARGIN, "Sensor Top Margin"),
    (TAG_IMAGE_WIDTH, "Sensor Image Width"),
    (TAG_IMAGE_HEIGHT, "Sensor Image Height"),
    (TAG_RAW_FORMAT, "Raw Format"),
    (TAG_RAW_DATA, "Raw Data"),
    (TAG_SENSOR_CALIBRATION, "Sensor Calibration"),
    (TAG_DATE_TIME_ORIGINAL, "Date/Time Original"),
    (TAG_IMAGE_NUMBER, "Image Number"),
    (TAG_SOFTWARE, "Software"),
    (TAG_SYSTEM, "System"),
    (TAG_SENSOR_TEMPERATURE, "Sensor Temperature"),
    (TAG_SENSOR_TEMPERATURE_2, "Sensor Temperature 2"),
    (TAG_STRIP_OFFSETS, "Strip Offsets"),
    (TAG_BLACK_LEVEL, "Black Level"),
    (TAG_SPLIT_COLUMN, "Split Column"),
    (TAG_BLACK_LEVEL_DATA, "Black Level Data"),
    (TAG_COLOR_MATRIX_2, "Color Matrix 2"),
    (TAG_AF_ADJUSTMENT, "AF Adjustment"),
    (TAG_FIRMWARE_VERSIONS, "Firmware Versions"),
    (TAG_SHUTTER_SPEED_VALUE, "Shutter Speed Value"),
    (TAG_APERTURE_VALUE, "Aperture Value"),
    (TAG_EXPOSURE_COMPENSATION, "Exposure Compensation"),
    (TAG_FOCAL_LENGTH, "Focal Length"),
    (TAG_CAMERA_MODEL, "Camera Model"),
    (TAG_LENS_MODEL, "Lens Model"),
    (TAG_MAX_APERTURE_VALUE, "Max Aperture Value"),
    (TAG_MIN_APERTURE_VALUE, "Min Aperture Value"),
    (TAG_VIEWFINDER, "Viewfinder"),
];

// =============================================================================
// Format registry
// =============================================================================

/// Expected on-disk format per Phase One tag.
///
/// Total over the tag space: undocumented tags default to `Int32S`, so the
/// upstream reader can always proceed.
pub fn format(tag: TagId) -> TagFormat {
    match tag {
        TAG_WB_RGB_LEVELS
        | TAG_COLOR_MATRIX_1
        | TAG_SENSOR_TEMPERATURE
        | TAG_SENSOR_TEMPERATURE_2
        | TAG_BLACK_LEVEL_DATA
        | TAG_COLOR_MATRIX_2
        | TAG_AF_ADJUSTMENT
        | TAG_SHUTTER_SPEED_VALUE
        | TAG_APERTURE_VALUE
        | TAG_EXPOSURE_COMPENSATION
        | TAG_FOCAL_LENGTH
        | TAG_MAX_APERTURE_VALUE
        | TAG_MIN_APERTURE_VALUE => TagFormat::Single,
        TAG_SERIAL_NUMBER
        | TAG_SOFTWARE
        | TAG_SYSTEM
        | TAG_FIRMWARE_VERSIONS
        | TAG_CAMERA_MODEL
        | TAG_LENS_MODEL
        | TAG_VIEWFINDER => TagFormat::String,
        TAG_DATE_TIME_ORIGINAL => TagFormat::Int32U,
        _ => TagFormat::Int32S,
    }
}

// =============================================================================
// Semantic formatters
// =============================================================================

fn formatter(tag: TagId, value: &TagValue) -> Option<String> {
    match tag {
        TAG_CAMERA_ORIENTATION => camera_orientation(value),
        TAG_RAW_FORMAT => raw_format(value),
        TAG_DATE_TIME_ORIGINAL => date_time_original(value),
        TAG_FOCAL_LENGTH => focal_length(value),
        TAG_SHUTTER_SPEED_VALUE => shutter_speed(value),
        TAG_APERTURE_VALUE | TAG_MAX_APERTURE_VALUE | TAG_MIN_APERTURE_VALUE => aperture(value),
        _ => None,
    }
}

fn camera_orientation(value: &TagValue) -> Option<String> {
    let label = match value.as_i64()? {
        0 => "Horizontal (normal)",
        1 => "Rotate 90 CW",
        2 => "Rotate 270 CW",
        3 => "Rotate 180",
        _ => return None,
    };
    Some(label.to_string())
}

fn raw_format(value: &TagValue) -> Option<String> {
    let label = match value.as_i64()? {
        1 => "RAW 1",
        2 => "RAW 2",
        3 => "IIQ L",
        5 => "IIQ S",
        6 => "IIQ Sv2",
        _ => return None,
    };
    Some(label.to_string())
}

/// Unix-epoch seconds rendered in the EXIF date/time layout, UTC.
fn date_time_original(value: &TagValue) -> Option<String> {
    let seconds = i64::try_from(value.as_u64()?).ok()?;
    let timestamp = chrono::DateTime::from_timestamp(seconds, 0)?;
    Some(timestamp.format("%Y:%m:%d %H:%M:%S").to_string())
}

fn focal_length(value: &TagValue) -> Option<String> {
    let mm = float_value(value)?;
    Some(format!("{mm:.1} mm"))
}

/// APEX shutter speed: exposure time is 2^-value seconds.
fn shutter_speed(value: &TagValue) -> Option<String> {
    let apex = float_value(value)?;
    if !apex.is_finite() || apex.abs() > 64.0 {
        return None;
    }
    let seconds = 2f64.powf(-apex);
    if seconds < 1.0 {
        Some(format!("1/{} sec", (1.0 / seconds).round() as i64))
    } else {
        Some(format!("{seconds:.1} sec"))
    }
}

/// APEX aperture: f-number is 2^(value/2).
fn aperture(value: &TagValue) -> Option<String> {
    let apex = float_value(value)?;
    if !apex.is_finite() || apex.abs() > 32.0 {
        return None;
    }
    Some(format!("f/{:.1}", 2f64.powf(apex / 2.0)))
}

// Photographic formatters only accept genuinely floating-point storage;
// an integer under a Single-format tag means the block is malformed and
// the generic rendering is the honest output.
fn float_value(value: &TagValue) -> Option<f64> {
    match value {
        TagValue::Float(v) => Some(f64::from(*v)),
        TagValue::Double(v) => Some(*v),
        _ => None,
    }
}

// =============================================================================
// Vendor table
// =============================================================================

/// The Phase One vendor table, shared by every Phase One directory.
pub static PHASE_ONE: Lazy<VendorTable> = Lazy::new(|| {
    let table = VendorTable {
        label: "Phase One Makernote",
        names: TAG_NAMES,
        format,
        formatter,
    };
    debug_assert!(table.validate().is_ok(), "Phase One tag table is malformed");
    table
});

/// The Phase One vendor table.
pub fn table() -> &'static VendorTable {
    &PHASE_ONE
}

/// Create an empty directory for a Phase One makernote block.
pub fn new_directory() -> crate::Directory {
    crate::Directory::new(table())
}

// =============================================================================
// Tests
// =============================================================================
