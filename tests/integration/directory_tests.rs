//! Directory behavior tests.
//!
//! Tests verify:
//! - Set/get round trips with last-write-wins on duplicate tag ids
//! - Absence is distinct from present-with-zero
//! - Enumeration follows block order for reporting
//! - Name and format lookups stay co-located with the vendor table

use makernote_core::makernotes::phase_one::{self, *};
use makernote_core::{TagFormat, TagId, TagValue};

use super::test_utils::{init_tracing, sample_phase_one_directory};

// =============================================================================
// Set / get
// =============================================================================

#[test]
fn test_set_then_get_exact_value() {
    let mut dir = phase_one::new_directory();
    dir.set(TAG_ISO, TagValue::Int(400));
    assert_eq!(dir.try_get_raw(TAG_ISO), Some(&TagValue::Int(400)));
}

#[test]
fn test_absent_tag_is_a_miss() {
    let dir = phase_one::new_directory();
    assert_eq!(dir.try_get_raw(TAG_ISO), None);
    assert!(!dir.contains(TAG_ISO));
}

#[test]
fn test_duplicate_tag_last_write_wins() {
    // A malformed block repeating a tag id keeps the last decoded value
    init_tracing();
    let mut dir = phase_one::new_directory();
    dir.set(TAG_ISO, TagValue::Int(100));
    dir.set(TAG_ISO, TagValue::Int(800));
    assert_eq!(dir.try_get_raw(TAG_ISO), Some(&TagValue::Int(800)));
    assert_eq!(dir.len(), 1);
}

#[test]
fn test_present_zero_is_not_absent() {
    let mut dir = phase_one::new_directory();
    dir.set(TAG_SENSOR_LEFT_MARGIN, TagValue::Int(0));
    assert_eq!(dir.try_get_raw(TAG_SENSOR_LEFT_MARGIN), Some(&TagValue::Int(0)));
}

// =============================================================================
// Enumeration
// =============================================================================

#[test]
fn test_entries_follow_block_order() {
    let dir = sample_phase_one_directory();
    let tags: Vec<TagId> = dir.tags().collect();
    assert_eq!(tags[0], TAG_CAMERA_ORIENTATION);
    assert_eq!(tags[1], TAG_SERIAL_NUMBER);
    assert_eq!(tags[2], TAG_ISO);
    assert_eq!(tags.len(), dir.len());

    // entries() yields the same order with values attached
    let first = dir.entries().next().unwrap();
    assert_eq!(first, (TAG_CAMERA_ORIENTATION, &TagValue::Int(0)));
}

// =============================================================================
// Names and formats
// =============================================================================

#[test]
fn test_vendor_label() {
    let dir = phase_one::new_directory();
    assert_eq!(dir.vendor_label(), "Phase One Makernote");
}

#[test]
fn test_name_lookup() {
    let dir = phase_one::new_directory();
    assert_eq!(dir.name(TAG_ISO), Some("ISO"));
    assert_eq!(dir.name(TAG_LENS_MODEL), Some("Lens Model"));
    assert_eq!(dir.name(0x0999), None);
    assert_eq!(dir.display_name(0x0999), "Unknown tag (0x0999)");
}

#[test]
fn test_format_lookup_is_total() {
    let dir = phase_one::new_directory();
    assert_eq!(dir.format(TAG_FOCAL_LENGTH), TagFormat::Single);
    assert_eq!(dir.format(TAG_SOFTWARE), TagFormat::String);
    assert_eq!(dir.format(TAG_DATE_TIME_ORIGINAL), TagFormat::Int32U);
    // Undocumented tags still resolve, to the default
    assert_eq!(dir.format(0x0999), TagFormat::Int32S);
}

#[test]
fn test_phase_one_table_has_no_duplicate_ids() {
    assert!(phase_one::table().validate().is_ok());
}

// =============================================================================
// Typed getters
// =============================================================================

#[test]
fn test_typed_getters_on_sample() {
    let dir = sample_phase_one_directory();
    assert_eq!(dir.get_i64(TAG_ISO), Some(400));
    assert_eq!(dir.get_u64(TAG_DATE_TIME_ORIGINAL), Some(1_600_000_000));
    assert_eq!(dir.get_f64(TAG_FOCAL_LENGTH), Some(80.0));
    assert_eq!(dir.get_string(TAG_SERIAL_NUMBER), Some("EE021234"));
    // Wrong type degrades to None, absent degrades to None
    assert_eq!(dir.get_string(TAG_ISO), None);
    assert_eq!(dir.get_i64(TAG_WB_RGB_LEVELS), None);
}

// =============================================================================
// Sibling directories
// =============================================================================

#[test]
fn test_directories_are_independent() {
    let mut a = phase_one::new_directory();
    let mut b = phase_one::new_directory();
    a.set(TAG_ISO, TagValue::Int(100));
    b.set(TAG_ISO, TagValue::Int(800));
    assert_eq!(a.get_i64(TAG_ISO), Some(100));
    assert_eq!(b.get_i64(TAG_ISO), Some(800));
}
