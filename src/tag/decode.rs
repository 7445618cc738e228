//! Pure byte-slice decoding of tag values.
//!
//! This is the glue between the upstream binary reader and the directory:
//! the reader consults the vendor's format registry for a tag, slices out
//! the value bytes, and calls [`decode_value`] to turn them into a
//! [`TagValue`] it can store with `Directory::set`.
//!
//! Byte order is supplied by the caller. Makernote blocks inherit the
//! endianness of their enclosing TIFF stream ("II" little-endian, "MM"
//! big-endian); detecting it is the reader's job, applying it happens here.

use bytes::Bytes;

use crate::error::DecodeError;

use super::format::TagFormat;
use super::value::TagValue;

// =============================================================================
// ByteOrder
// =============================================================================

/// Byte order (endianness) for multi-byte value components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Little-endian ("II" = Intel)
    LittleEndian,
    /// Big-endian ("MM" = Motorola)
    BigEndian,
}

impl ByteOrder {
    /// Read a u16 from the start of a byte slice using this byte order.
    #[inline]
    pub fn read_u16(self, bytes: &[u8]) -> u16 {
        let b = [bytes[0], bytes[1]];
        match self {
            ByteOrder::LittleEndian => u16::from_le_bytes(b),
            ByteOrder::BigEndian => u16::from_be_bytes(b),
        }
    }

    /// Read a u32 from the start of a byte slice using this byte order.
    #[inline]
    pub fn read_u32(self, bytes: &[u8]) -> u32 {
        let b = [bytes[0], bytes[1], bytes[2], bytes[3]];
        match self {
            ByteOrder::LittleEndian => u32::from_le_bytes(b),
            ByteOrder::BigEndian => u32::from_be_bytes(b),
        }
    }

    /// Read an i32 from the start of a byte slice using this byte order.
    #[inline]
    pub fn read_i32(self, bytes: &[u8]) -> i32 {
        self.read_u32(bytes) as i32
    }

    /// Read an f32 from the start of a byte slice using this byte order.
    #[inline]
    pub fn read_f32(self, bytes: &[u8]) -> f32 {
        f32::from_bits(self.read_u32(bytes))
    }

    /// Read an f64 from the start of a byte slice using this byte order.
    #[inline]
    pub fn read_f64(self, bytes: &[u8]) -> f64 {
        let b = [
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
        ];
        match self {
            ByteOrder::LittleEndian => f64::from_bits(u64::from_le_bytes(b)),
            ByteOrder::BigEndian => f64::from_bits(u64::from_be_bytes(b)),
        }
    }
}

// =============================================================================
// decode_value
// =============================================================================

/// Decode `count` components of `format` from `bytes` into a [`TagValue`].
///
/// A count of 1 yields a scalar variant; larger counts yield the matching
/// array variant. For `String` and `Undefined`, `count` is the byte length
/// of the value. Strings are cut at the first null terminator and decoded
/// lossily, so malformed text degrades rather than fails.
///
/// Multi-component rational and double values have no array variant; they
/// are passed through as opaque bytes so the generic rendering can still
/// report them. No known makernote tag carries such an array.
pub fn decode_value(
    format: TagFormat,
    count: usize,
    bytes: &[u8],
    byte_order: ByteOrder,
) -> Result<TagValue, DecodeError> {
    let needed = format.component_size() * count;
    if bytes.len() < needed {
        return Err(DecodeError::Truncated {
            format,
            needed,
            actual: bytes.len(),
        });
    }
    let bytes = &bytes[..needed];

    let value = match format {
        TagFormat::String => {
            let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
            TagValue::Text(String::from_utf8_lossy(&bytes[..end]).into_owned())
        }
        TagFormat::Undefined => TagValue::Bytes(Bytes::copy_from_slice(bytes)),

        TagFormat::Int8U if count == 1 => TagValue::UInt(u64::from(bytes[0])),
        TagFormat::Int8U => TagValue::UIntArray(bytes.iter().map(|&b| u32::from(b)).collect()),

        TagFormat::Int8S if count == 1 => TagValue::Int(i64::from(bytes[0] as i8)),
        TagFormat::Int8S => TagValue::IntArray(bytes.iter().map(|&b| i32::from(b as i8)).collect()),

        TagFormat::Int16U if count == 1 => TagValue::UInt(u64::from(byte_order.read_u16(bytes))),
        TagFormat::Int16U => TagValue::UIntArray(
            (0..count)
                .map(|i| u32::from(byte_order.read_u16(&bytes[i * 2..])))
                .collect(),
        ),

        TagFormat::Int16S if count == 1 => {
            TagValue::Int(i64::from(byte_order.read_u16(bytes) as i16))
        }
        TagFormat::Int16S => TagValue::IntArray(
            (0..count)
                .map(|i| i32::from(byte_order.read_u16(&bytes[i * 2..]) as i16))
                .collect(),
        ),

        TagFormat::Int32U if count == 1 => TagValue::UInt(u64::from(byte_order.read_u32(bytes))),
        TagFormat::Int32U => TagValue::UIntArray(
            (0..count)
                .map(|i| byte_order.read_u32(&bytes[i * 4..]))
                .collect(),
        ),

        TagFormat::Int32S if count == 1 => TagValue::Int(i64::from(byte_order.read_i32(bytes))),
        TagFormat::Int32S => TagValue::IntArray(
            (0..count)
                .map(|i| byte_order.read_i32(&bytes[i * 4..]))
                .collect(),
        ),

        TagFormat::Single if count == 1 => TagValue::Float(byte_order.read_f32(bytes)),
        TagFormat::Single => TagValue::FloatArray(
            (0..count)
                .map(|i| byte_order.read_f32(&bytes[i * 4..]))
                .collect(),
        ),

        TagFormat::Double if count == 1 => TagValue::Double(byte_order.read_f64(bytes)),

        TagFormat::RationalU if count == 1 => {
            TagValue::URational(byte_order.read_u32(bytes), byte_order.read_u32(&bytes[4..]))
        }
        TagFormat::RationalS if count == 1 => {
            TagValue::SRational(byte_order.read_i32(bytes), byte_order.read_i32(&bytes[4..]))
        }

        // Rational and double arrays stay opaque
        TagFormat::Double | TagFormat::RationalU | TagFormat::RationalS => {
            TagValue::Bytes(Bytes::copy_from_slice(bytes))
        }
    };

    Ok(value)
}

// =============================================================================
// Tests
// =============================================================================
