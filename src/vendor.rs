//! Vendor capability tables.
//!
//! Every makernote vendor is a thin configuration of the same pattern: a
//! display label, a static tag-name table, a total format function, and an
//! optional semantic formatter. A [`VendorTable`] bundles those four pieces
//! so one generic [`Directory`](crate::Directory) and
//! [`Descriptor`](crate::Descriptor) serve all vendors without subclassing.
//!
//! Tables are `'static` and immutable after construction; they may be
//! shared freely across threads and across every directory instance of
//! their vendor type.

use crate::error::TableError;
use crate::tag::{TagFormat, TagId, TagValue};

/// Per-tag semantic formatter.
///
/// Returns `Some` with a presentation string when the formatter recognizes
/// the tag and its value, `None` to decline and let the generic rendering
/// take over. Implementations must not panic on mismatched or out-of-range
/// values; declining is the degradation path.
pub type TagFormatter = fn(TagId, &TagValue) -> Option<String>;

// =============================================================================
// VendorTable
// =============================================================================

/// Everything the generic layers need to know about one vendor.
#[derive(Clone, Copy)]
pub struct VendorTable {
    /// Human-readable block label, e.g. "Phase One Makernote"
    pub label: &'static str,

    /// Tag-name table, sorted ascending by tag id with no duplicates.
    ///
    /// Sparse by design: undocumented tags are expected and simply miss.
    pub names: &'static [(TagId, &'static str)],

    /// Expected on-disk format per tag. Total over the whole tag space;
    /// tags outside the documented set report the vendor's default format.
    pub format: fn(TagId) -> TagFormat,

    /// Semantic formatter for tags with a display rendering beyond the
    /// generic one (enumerations, timestamps, photographic quantities).
    pub formatter: TagFormatter,
}

impl VendorTable {
    /// Look up the display name for a tag.
    ///
    /// Misses are routine, not an error; callers fall back to a generic
    /// "unknown tag" rendering.
    pub fn name(&self, tag: TagId) -> Option<&'static str> {
        self.names
            .binary_search_by_key(&tag, |&(id, _)| id)
            .ok()
            .map(|i| self.names[i].1)
    }

    /// Expected format for a tag.
    #[inline]
    pub fn format(&self, tag: TagId) -> TagFormat {
        (self.format)(tag)
    }

    /// Apply the vendor's semantic formatter, if one recognizes this tag
    /// and value.
    #[inline]
    pub fn describe(&self, tag: TagId, value: &TagValue) -> Option<String> {
        (self.formatter)(tag, value)
    }

    /// Check table invariants: ascending tag-id order, no duplicates.
    ///
    /// Name lookup binary-searches the table, so ordering is load-bearing.
    /// A failure here is a defect in the vendor module definition; vendor
    /// modules assert this in tests and at first use in debug builds.
    pub fn validate(&self) -> Result<(), TableError> {
        for window in self.names.windows(2) {
            let (prev_id, prev_name) = window[0];
            let (id, name) = window[1];
            if id == prev_id {
                return Err(TableError::DuplicateTag {
                    tag: id,
                    first: prev_name,
                    second: name,
                });
            }
            if id < prev_id {
                return Err(TableError::Unsorted { tag: id });
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for VendorTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VendorTable")
            .field("label", &self.label)
            .field("names", &self.names.len())
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
