use thiserror::Error;

use crate::tag::{TagFormat, TagId};

/// Errors that can occur when decoding raw tag bytes into values.
///
/// These surface at the boundary with the upstream binary reader. The
/// directory and descriptor layers themselves never produce errors;
/// misses and malformed values degrade to fallback renderings instead.
#[derive(Debug, Clone, Error)]
pub enum DecodeError {
    /// Value byte range is shorter than the format and count require
    #[error("Truncated value: {format:?} needs {needed} bytes, got {actual}")]
    Truncated {
        format: TagFormat,
        needed: usize,
        actual: usize,
    },

    /// Numeric TIFF type code not in the known format set
    #[error("Unknown format code: {0}")]
    UnknownFormatCode(u16),
}

/// Definition-time defects in a vendor tag table.
///
/// These are programming errors in a vendor module, caught by tests and
/// debug assertions at table construction, never a runtime condition for
/// consumers to handle.
#[derive(Debug, Clone, Error)]
pub enum TableError {
    /// The same tag id is mapped to two names
    #[error("Duplicate tag 0x{tag:04X} in name table: {first:?} and {second:?}")]
    DuplicateTag {
        tag: TagId,
        first: &'static str,
        second: &'static str,
    },

    /// Name table entries are not in ascending tag-id order
    #[error("Name table entry 0x{tag:04X} is out of order")]
    Unsorted { tag: TagId },
}
