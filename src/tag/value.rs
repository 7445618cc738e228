//! Decoded tag values.
//!
//! A [`TagValue`] is the in-memory representation of one decoded tag,
//! produced by the upstream reader (typically via [`decode_value`]) and
//! stored in a directory. The variant set covers the wire formats defined
//! in [`TagFormat`](super::TagFormat); integers are widened so a single
//! variant serves all integer widths of the same signedness.
//!
//! `Display` gives the format-generic rendering used when no vendor
//! semantic formatter applies: numbers in base 10, strings verbatim with
//! trailing padding and null terminators stripped, arrays space-joined,
//! opaque data summarized by length.
//!
//! [`decode_value`]: super::decode_value

use std::fmt;

use bytes::Bytes;

// =============================================================================
// TagValue
// =============================================================================

/// A raw decoded tag value.
#[derive(Debug, Clone, PartialEq)]
pub enum TagValue {
    /// Signed integer (Int8S, Int16S, Int32S), widened to i64
    Int(i64),

    /// Unsigned integer (Int8U, Int16U, Int32U), widened to u64
    UInt(u64),

    /// Single-precision float
    Float(f32),

    /// Double-precision float
    Double(f64),

    /// Unsigned rational (numerator, denominator)
    URational(u32, u32),

    /// Signed rational (numerator, denominator)
    SRational(i32, i32),

    /// ASCII/UTF-8 text
    Text(String),

    /// Opaque byte data (Undefined format)
    Bytes(Bytes),

    /// Array of signed integers
    IntArray(Vec<i32>),

    /// Array of unsigned integers
    UIntArray(Vec<u32>),

    /// Array of single-precision floats
    FloatArray(Vec<f32>),
}

impl TagValue {
    /// The value as a signed integer, if it is integral and fits.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            TagValue::Int(v) => Some(*v),
            TagValue::UInt(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    /// The value as an unsigned integer, if it is integral and non-negative.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            TagValue::UInt(v) => Some(*v),
            TagValue::Int(v) => u64::try_from(*v).ok(),
            _ => None,
        }
    }

    /// The value as a float, converting integers and rationals as needed.
    ///
    /// Rationals with a zero denominator yield `None` rather than infinity;
    /// a corrupt rational must not leak "inf" into display output.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            TagValue::Int(v) => Some(*v as f64),
            TagValue::UInt(v) => Some(*v as f64),
            TagValue::Float(v) => Some(f64::from(*v)),
            TagValue::Double(v) => Some(*v),
            TagValue::URational(_, 0) | TagValue::SRational(_, 0) => None,
            TagValue::URational(n, d) => Some(f64::from(*n) / f64::from(*d)),
            TagValue::SRational(n, d) => Some(f64::from(*n) / f64::from(*d)),
            _ => None,
        }
    }

    /// The value as text, trimmed of trailing null terminators and padding.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TagValue::Text(s) => Some(s.trim_end_matches(['\0', ' '])),
            _ => None,
        }
    }
}

impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagValue::Int(v) => write!(f, "{v}"),
            TagValue::UInt(v) => write!(f, "{v}"),
            TagValue::Float(v) => write!(f, "{v}"),
            TagValue::Double(v) => write!(f, "{v}"),
            TagValue::URational(n, d) => write!(f, "{n}/{d}"),
            TagValue::SRational(n, d) => write!(f, "{n}/{d}"),
            TagValue::Text(s) => f.write_str(s.trim_end_matches(['\0', ' '])),
            TagValue::Bytes(b) => write!(f, "[{} bytes]", b.len()),
            TagValue::IntArray(values) => write_joined(f, values),
            TagValue::UIntArray(values) => write_joined(f, values),
            TagValue::FloatArray(values) => write_joined(f, values),
        }
    }
}

fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>, values: &[T]) -> fmt::Result {
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{v}")?;
    }
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
