//! Tag data format definitions.
//!
//! Every makernote tag has an expected on-disk data format, fixed at
//! table-definition time. The upstream binary reader consults the format
//! to know how many bytes to decode for a tag and how to interpret them.
//!
//! The format codes match the TIFF data format numbering (1..=12), which
//! makernote blocks reuse even when their overall layout is proprietary.

// =============================================================================
// TagFormat
// =============================================================================

/// Wire-level data formats for tag values.
///
/// Each format has a fixed component size in bytes. Multi-component tags
/// (arrays, strings) store `count` components of the same format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum TagFormat {
    /// Unsigned 8-bit integer (1 byte)
    Int8U = 1,

    /// Null-terminated ASCII string (1 byte per character)
    String = 2,

    /// Unsigned 16-bit integer (2 bytes)
    Int16U = 3,

    /// Unsigned 32-bit integer (4 bytes)
    Int32U = 4,

    /// Unsigned rational: numerator and denominator, each 32-bit (8 bytes)
    RationalU = 5,

    /// Signed 8-bit integer (1 byte)
    Int8S = 6,

    /// Opaque byte data (1 byte per element)
    Undefined = 7,

    /// Signed 16-bit integer (2 bytes)
    Int16S = 8,

    /// Signed 32-bit integer (4 bytes)
    Int32S = 9,

    /// Signed rational: numerator and denominator, each 32-bit (8 bytes)
    RationalS = 10,

    /// Single-precision IEEE float (4 bytes)
    Single = 11,

    /// Double-precision IEEE float (8 bytes)
    Double = 12,
}

impl TagFormat {
    /// Size of a single component of this format in bytes.
    ///
    /// Needed to compute the total byte span of a tag value before decoding.
    #[inline]
    pub const fn component_size(self) -> usize {
        match self {
            TagFormat::Int8U | TagFormat::Int8S => 1,
            TagFormat::String | TagFormat::Undefined => 1,
            TagFormat::Int16U | TagFormat::Int16S => 2,
            TagFormat::Int32U | TagFormat::Int32S | TagFormat::Single => 4,
            TagFormat::RationalU | TagFormat::RationalS | TagFormat::Double => 8,
        }
    }

    /// Create a `TagFormat` from its numeric TIFF type code.
    ///
    /// Returns `None` for unrecognized codes. An unknown code is not fatal;
    /// the upstream reader skips the tag and continues with the block.
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            1 => Some(TagFormat::Int8U),
            2 => Some(TagFormat::String),
            3 => Some(TagFormat::Int16U),
            4 => Some(TagFormat::Int32U),
            5 => Some(TagFormat::RationalU),
            6 => Some(TagFormat::Int8S),
            7 => Some(TagFormat::Undefined),
            8 => Some(TagFormat::Int16S),
            9 => Some(TagFormat::Int32S),
            10 => Some(TagFormat::RationalS),
            11 => Some(TagFormat::Single),
            12 => Some(TagFormat::Double),
            _ => None,
        }
    }

    /// Get the numeric TIFF type code.
    #[inline]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }
}

// =============================================================================
// Tests
// =============================================================================
