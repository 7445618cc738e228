//! # Makernote Core
//!
//! A tag directory and descriptor core for vendor-specific "makernote"
//! metadata blocks embedded in image files.
//!
//! Makernotes are manufacturer-proprietary blocks structurally similar to
//! standard EXIF but with vendor-defined tag meanings. This crate provides
//! the reusable pattern every vendor module is a configuration of: a typed
//! registry mapping small integer tag ids to a raw decoded value, a display
//! name, and an expected on-disk data format, plus a rendering layer that
//! turns raw values into display strings.
//!
//! ## What this crate does not do
//!
//! No file I/O, no byte-order detection, no JPEG/TIFF/PNG container
//! walking. An upstream binary reader locates the block, decodes each tag's
//! bytes (consulting the vendor's format registry), and stores the values
//! here; a downstream reporting layer enumerates the finished directory.
//!
//! ## Architecture
//!
//! - [`tag`] - tag identifiers, wire formats, decoded values, byte decoding
//! - [`vendor`] - the per-vendor capability table (label, names, formats,
//!   semantic formatters)
//! - [`directory`] - the decoded representation of one metadata block
//! - [`descriptor`] - rendering of raw values into presentation strings
//! - [`makernotes`] - concrete vendor tables (currently Phase One)
//!
//! ## Example
//!
//! ```rust
//! use makernote_core::makernotes::phase_one::{self, TAG_ISO, TAG_LENS_MODEL};
//! use makernote_core::{Descriptor, TagValue};
//!
//! // The upstream reader decodes tag bytes and populates the directory.
//! let mut directory = phase_one::new_directory();
//! directory.set(TAG_ISO, TagValue::Int(400));
//! directory.set(TAG_LENS_MODEL, TagValue::Text("AF 80mm".to_string()));
//!
//! // The reporting layer renders (name, description) rows.
//! let descriptor = Descriptor::new(&directory);
//! assert_eq!(directory.display_name(TAG_ISO), "ISO");
//! assert_eq!(descriptor.describe_string(TAG_ISO), "400");
//! assert_eq!(descriptor.describe_string(TAG_LENS_MODEL), "AF 80mm");
//! ```

pub mod descriptor;
pub mod directory;
pub mod error;
pub mod makernotes;
pub mod tag;
pub mod vendor;

// Re-export commonly used types
pub use descriptor::{Description, Descriptor};
pub use directory::Directory;
pub use error::{DecodeError, TableError};
pub use tag::{decode_value, ByteOrder, TagFormat, TagId, TagValue};
pub use vendor::{TagFormatter, VendorTable};
