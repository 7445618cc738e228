//! Descriptor rendering tests.
//!
//! Tests verify:
//! - Semantic formatters apply where defined (orientation, dates, APEX)
//! - Generic fallback for tags without a formatter
//! - Unknown-tag and absent-tag fallbacks
//! - Describe never panics on mismatched or corrupt raw values

use bytes::Bytes;

use makernote_core::makernotes::phase_one::{self, *};
use makernote_core::{Description, Descriptor, TagValue};

use super::test_utils::sample_phase_one_directory;

// =============================================================================
// Generic rendering
// =============================================================================

#[test]
fn test_iso_renders_base_10() {
    let dir = sample_phase_one_directory();
    let desc = Descriptor::new(&dir);
    assert_eq!(desc.describe_string(TAG_ISO), "400");
}

#[test]
fn test_lens_model_passes_through_verbatim() {
    let dir = sample_phase_one_directory();
    let desc = Descriptor::new(&dir);
    assert_eq!(desc.describe_string(TAG_LENS_MODEL), "AF 80mm");
}

#[test]
fn test_string_padding_is_trimmed() {
    let dir = sample_phase_one_directory();
    let desc = Descriptor::new(&dir);
    assert_eq!(desc.describe_string(TAG_SERIAL_NUMBER), "EE021234");
}

#[test]
fn test_float_array_renders_space_joined() {
    let mut dir = phase_one::new_directory();
    dir.set(TAG_WB_RGB_LEVELS, TagValue::FloatArray(vec![1.0, 0.5, 0.75]));
    let desc = Descriptor::new(&dir);
    assert_eq!(desc.describe_string(TAG_WB_RGB_LEVELS), "1 0.5 0.75");
}

// =============================================================================
// Semantic formatters
// =============================================================================

#[test]
fn test_camera_orientation_label() {
    let dir = sample_phase_one_directory();
    let desc = Descriptor::new(&dir);
    assert_eq!(
        desc.describe(TAG_CAMERA_ORIENTATION),
        Description::Semantic("Horizontal (normal)".to_string())
    );
}

#[test]
fn test_date_time_original_formats_timestamp() {
    let dir = sample_phase_one_directory();
    let desc = Descriptor::new(&dir);
    // Raw epoch-like integer renders as a timestamp, not the raw number
    assert_eq!(
        desc.describe_string(TAG_DATE_TIME_ORIGINAL),
        "2020:09:13 12:26:40"
    );
}

#[test]
fn test_raw_format_label() {
    let dir = sample_phase_one_directory();
    let desc = Descriptor::new(&dir);
    assert_eq!(desc.describe_string(TAG_RAW_FORMAT), "IIQ L");
}

#[test]
fn test_focal_length_in_millimetres() {
    let dir = sample_phase_one_directory();
    let desc = Descriptor::new(&dir);
    assert_eq!(desc.describe_string(TAG_FOCAL_LENGTH), "80.0 mm");
}

#[test]
fn test_unrecognized_orientation_code_falls_back_to_generic() {
    let mut dir = phase_one::new_directory();
    dir.set(TAG_CAMERA_ORIENTATION, TagValue::Int(9));
    let desc = Descriptor::new(&dir);
    assert_eq!(desc.describe(TAG_CAMERA_ORIENTATION), Description::Generic("9".to_string()));
}

// =============================================================================
// Fallbacks
// =============================================================================

#[test]
fn test_undocumented_tag_fallback() {
    let mut dir = phase_one::new_directory();
    dir.set(0x0999, TagValue::Int(7));
    let desc = Descriptor::new(&dir);

    assert_eq!(dir.name(0x0999), None);
    assert_eq!(desc.describe_string(0x0999), "Unknown (0x0999): 7");
}

#[test]
fn test_absent_tag_sentinel() {
    let dir = phase_one::new_directory();
    let desc = Descriptor::new(&dir);
    assert!(desc.describe(TAG_ISO).is_absent());
    assert_eq!(desc.describe_string(TAG_ISO), "no description available");
}

// =============================================================================
// Robustness: describe never panics
// =============================================================================

#[test]
fn test_mismatched_value_types_never_panic() {
    // Every documented tag, fed every shape of value, must render something
    let hostile_values = [
        TagValue::Int(-1),
        TagValue::UInt(u64::MAX),
        TagValue::Float(f32::NAN),
        TagValue::Double(f64::INFINITY),
        TagValue::URational(1, 0),
        TagValue::SRational(i32::MIN, -1),
        TagValue::Text("not a number".to_string()),
        TagValue::Bytes(Bytes::from_static(&[0xFF, 0x00])),
        TagValue::IntArray(vec![1, -2, 3]),
        TagValue::FloatArray(vec![]),
    ];

    for &(tag, _) in &[
        (TAG_CAMERA_ORIENTATION, ""),
        (TAG_RAW_FORMAT, ""),
        (TAG_DATE_TIME_ORIGINAL, ""),
        (TAG_SHUTTER_SPEED_VALUE, ""),
        (TAG_APERTURE_VALUE, ""),
        (TAG_FOCAL_LENGTH, ""),
        (TAG_ISO, ""),
        (TAG_LENS_MODEL, ""),
        (0x0999, ""),
    ] {
        for value in &hostile_values {
            let mut dir = phase_one::new_directory();
            dir.set(tag, value.clone());
            let desc = Descriptor::new(&dir);
            // Must produce some rendering without panicking
            let _ = desc.describe_string(tag);
        }
    }
}

#[test]
fn test_string_under_numeric_tag_renders_generically() {
    let mut dir = phase_one::new_directory();
    dir.set(TAG_ISO, TagValue::Text("garbled".to_string()));
    let desc = Descriptor::new(&dir);
    assert_eq!(desc.describe_string(TAG_ISO), "garbled");
}

// =============================================================================
// Reporting rows
// =============================================================================

#[test]
fn test_report_rows_for_sample_block() {
    let dir = sample_phase_one_directory();
    let desc = Descriptor::new(&dir);

    let rows: Vec<(String, String)> = dir
        .tags()
        .map(|tag| (dir.display_name(tag), desc.describe_string(tag)))
        .collect();

    assert!(rows.contains(&("ISO".to_string(), "400".to_string())));
    assert!(rows.contains(&("Lens Model".to_string(), "AF 80mm".to_string())));
    assert!(rows.contains(&(
        "Camera Orientation".to_string(),
        "Horizontal (normal)".to_string()
    )));
    assert_eq!(rows.len(), dir.len());
}
