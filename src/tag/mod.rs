//! Tag vocabulary for makernote metadata blocks.
//!
//! A tag is a small integer identifier denoting one metadata field within
//! a directory. This module defines:
//!
//! - **Formats**: the on-disk data format each tag is expected to carry
//! - **Values**: the decoded in-memory representation of a tag's data
//! - **Decoding**: turning already-positioned raw bytes into values,
//!   respecting the stream's byte order
//!
//! Which tag means what is vendor knowledge and lives in the vendor tables
//! under [`crate::makernotes`]; this module is vendor-agnostic.

mod decode;
mod format;
mod value;

pub use decode::{decode_value, ByteOrder};
pub use format::TagFormat;
pub use value::TagValue;

/// Identifier of one metadata field within a vendor's tag namespace.
///
/// Tag ids are 16-bit in every TIFF-derived makernote layout. They are
/// unique within one vendor's namespace but freely collide across vendors.
pub type TagId = u16;
