//! Value rendering.
//!
//! A [`Descriptor`] turns a directory's raw values into presentation
//! strings. Resolution order for each tag:
//!
//! 1. Tag never set → [`Description::Absent`]
//! 2. Vendor semantic formatter recognizes the tag and value → [`Description::Semantic`]
//! 3. Tag is documented in the vendor's name table → [`Description::Generic`]
//!    (base-10 numbers, trimmed verbatim strings)
//! 4. Undocumented tag → [`Description::Unknown`], rendered as
//!    `"Unknown (0xHHHH): <generic value>"`
//!
//! Describing never fails and never panics, whatever shape the raw value
//! has. Metadata extraction is best-effort: one corrupt tag degrades one
//! output row, never the rest of the block or the batch.

use std::fmt;

use tracing::trace;

use crate::directory::Directory;
use crate::tag::TagId;

// =============================================================================
// Description
// =============================================================================

/// Outcome of describing one tag.
///
/// The fallback cases are explicit variants rather than sentinel strings,
/// so the reporting layer can distinguish them without string matching.
#[derive(Debug, Clone, PartialEq)]
pub enum Description {
    /// A vendor semantic formatter produced the rendering
    Semantic(String),

    /// Format-generic rendering of the raw value
    Generic(String),

    /// The tag is not in the vendor's name table; carries the generic
    /// rendering of its value
    Unknown { tag: TagId, rendering: String },

    /// The tag was never set in the directory
    Absent,
}

impl Description {
    /// Whether the tag had no value to describe.
    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, Description::Absent)
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Description::Semantic(s) | Description::Generic(s) => f.write_str(s),
            Description::Unknown { tag, rendering } => {
                write!(f, "Unknown (0x{tag:04X}): {rendering}")
            }
            Description::Absent => f.write_str("no description available"),
        }
    }
}

// =============================================================================
// Descriptor
// =============================================================================

/// Stateless rendering layer bound to one directory.
///
/// Borrows the directory, so it cannot outlive it; create one per
/// finalized directory when producing report rows.
#[derive(Debug, Clone, Copy)]
pub struct Descriptor<'a> {
    directory: &'a Directory,
}

impl<'a> Descriptor<'a> {
    /// Create a descriptor for a finalized directory.
    pub fn new(directory: &'a Directory) -> Self {
        Descriptor { directory }
    }

    /// The directory this descriptor renders.
    #[inline]
    pub fn directory(&self) -> &'a Directory {
        self.directory
    }

    /// Describe one tag.
    pub fn describe(&self, tag: TagId) -> Description {
        let Some(value) = self.directory.try_get_raw(tag) else {
            return Description::Absent;
        };

        let vendor = self.directory.vendor();
        if let Some(rendered) = vendor.describe(tag, value) {
            return Description::Semantic(rendered);
        }

        let rendering = value.to_string();
        if vendor.name(tag).is_some() {
            Description::Generic(rendering)
        } else {
            trace!(
                vendor = vendor.label,
                tag = %format_args!("0x{tag:04X}"),
                "describing undocumented tag"
            );
            Description::Unknown { tag, rendering }
        }
    }

    /// Describe one tag as a plain string, fallbacks included.
    pub fn describe_string(&self, tag: TagId) -> String {
        self.describe(tag).to_string()
    }
}

// =============================================================================
// Tests
// =============================================================================
