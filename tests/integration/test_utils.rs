//! Shared helpers for integration tests.

use std::sync::Once;

use makernote_core::makernotes::phase_one::{self, *};
use makernote_core::{Directory, TagValue};

static INIT: Once = Once::new();

/// Initialize tracing output for tests. Honors `RUST_LOG`, so duplicate-tag
/// and fallback diagnostics can be inspected when a test fails.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Build a Phase One directory populated the way a real IIQ capture's
/// makernote block lands after decoding.
pub fn sample_phase_one_directory() -> Directory {
    let mut dir = phase_one::new_directory();
    dir.set(TAG_CAMERA_ORIENTATION, TagValue::Int(0));
    dir.set(TAG_SERIAL_NUMBER, TagValue::Text("EE021234\0".to_string()));
    dir.set(TAG_ISO, TagValue::Int(400));
    dir.set(TAG_RAW_FORMAT, TagValue::Int(3));
    dir.set(TAG_DATE_TIME_ORIGINAL, TagValue::UInt(1_600_000_000));
    dir.set(TAG_SOFTWARE, TagValue::Text("Capture One".to_string()));
    dir.set(TAG_FOCAL_LENGTH, TagValue::Float(80.0));
    dir.set(TAG_CAMERA_MODEL, TagValue::Text("IQ4 150MP".to_string()));
    dir.set(TAG_LENS_MODEL, TagValue::Text("AF 80mm".to_string()));
    dir
}
