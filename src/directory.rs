//! Tag directories.
//!
//! A [`Directory`] is the in-memory decoded representation of one metadata
//! block in a file: a map from tag id to raw decoded value, bound to the
//! vendor table that knows the block's tag names and formats.
//!
//! # Lifecycle
//!
//! A directory has two phases, separated by convention rather than API:
//! the upstream reader populates it with one [`set`](Directory::set) per
//! decoded tag, then downstream consumers (descriptor, reporting) treat it
//! as read-only. Mutating a directory after handing it to a descriptor is
//! undefined and must be avoided by the caller.
//!
//! Multiple directories of different vendor types may coexist for one file
//! (a standard EXIF block beside a vendor makernote); they are siblings,
//! never nested, and share nothing but their `'static` vendor tables.

use std::collections::HashMap;

use tracing::debug;

use crate::tag::{TagFormat, TagId, TagValue};
use crate::vendor::VendorTable;

// =============================================================================
// Directory
// =============================================================================

/// Decoded tag values for one metadata block.
///
/// Enumeration order follows insertion order, so reporting output matches
/// the order tags appeared in the source block.
#[derive(Debug, Clone)]
pub struct Directory {
    vendor: &'static VendorTable,
    values: HashMap<TagId, TagValue>,
    // Insertion order of first occurrence; re-sets keep their position
    order: Vec<TagId>,
}

impl Directory {
    /// Create an empty directory for a vendor.
    pub fn new(vendor: &'static VendorTable) -> Self {
        Directory {
            vendor,
            values: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// The vendor table this directory is bound to.
    #[inline]
    pub fn vendor(&self) -> &'static VendorTable {
        self.vendor
    }

    /// Human-readable label of the block type, constant per vendor.
    #[inline]
    pub fn vendor_label(&self) -> &'static str {
        self.vendor.label
    }

    /// Record a decoded value for a tag.
    ///
    /// Last write wins: a malformed block that repeats a tag id overwrites
    /// the earlier value. The duplicate is worth a diagnostic but is not
    /// an error.
    pub fn set(&mut self, tag: TagId, value: TagValue) {
        if let Some(previous) = self.values.insert(tag, value) {
            debug!(
                vendor = self.vendor.label,
                tag = %format_args!("0x{tag:04X}"),
                ?previous,
                "duplicate tag in block, keeping last value"
            );
        } else {
            self.order.push(tag);
        }
    }

    /// Get the raw decoded value for a tag, or `None` if the tag was never
    /// set in this block.
    ///
    /// Absence is distinct from "present with a zero or empty value".
    #[inline]
    pub fn try_get_raw(&self, tag: TagId) -> Option<&TagValue> {
        self.values.get(&tag)
    }

    /// Whether a tag was set in this block.
    #[inline]
    pub fn contains(&self, tag: TagId) -> bool {
        self.values.contains_key(&tag)
    }

    /// Display name for a tag, per the vendor's name table.
    #[inline]
    pub fn name(&self, tag: TagId) -> Option<&'static str> {
        self.vendor.name(tag)
    }

    /// Display name for a tag, falling back to `"Unknown tag (0x%04x)"`
    /// for tags absent from the vendor's name table.
    pub fn display_name(&self, tag: TagId) -> String {
        match self.vendor.name(tag) {
            Some(name) => name.to_string(),
            None => format!("Unknown tag (0x{tag:04X})"),
        }
    }

    /// Expected on-disk format for a tag, per the vendor's format registry.
    #[inline]
    pub fn format(&self, tag: TagId) -> TagFormat {
        self.vendor.format(tag)
    }

    /// Tag ids in insertion order.
    pub fn tags(&self) -> impl Iterator<Item = TagId> + '_ {
        self.order.iter().copied()
    }

    /// `(tag, value)` pairs in insertion order, for the reporting boundary.
    pub fn entries(&self) -> impl Iterator<Item = (TagId, &TagValue)> + '_ {
        self.order.iter().map(move |&tag| (tag, &self.values[&tag]))
    }

    /// Number of distinct tags set.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no tags have been set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    // -------------------------------------------------------------------------
    // Typed convenience getters
    // -------------------------------------------------------------------------

    /// The tag's value as a signed integer, if set and integral.
    pub fn get_i64(&self, tag: TagId) -> Option<i64> {
        self.try_get_raw(tag)?.as_i64()
    }

    /// The tag's value as an unsigned integer, if set and non-negative.
    pub fn get_u64(&self, tag: TagId) -> Option<u64> {
        self.try_get_raw(tag)?.as_u64()
    }

    /// The tag's value as a float, if set and numeric.
    pub fn get_f64(&self, tag: TagId) -> Option<f64> {
        self.try_get_raw(tag)?.as_f64()
    }

    /// The tag's value as trimmed text, if set and textual.
    pub fn get_string(&self, tag: TagId) -> Option<&str> {
        self.try_get_raw(tag)?.as_str()
    }
}

// =============================================================================
// Tests
// =============================================================================
