//! Scalar column types and the value-to-bytes encoding contract.
//!
//! Each attribute value arrives as text and leaves as the canonical byte
//! representation of its declared type:
//!
//! ```text
//! string  → charset-encoded bytes (variable width)
//! double  → 8-byte big-endian IEEE-754 f64
//! float   → 4-byte big-endian IEEE-754 f32
//! int     → 4-byte big-endian two's-complement i32
//! long    → 8-byte big-endian two's-complement i64
//! short   → 2-byte big-endian two's-complement i16
//! ```
//!
//! Big-endian matches the byte layout the downstream row store uses for
//! its fixed-width cells, so encoded values sort and compare natively.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::charset::Charset;
use crate::error::ValueFormatError;

/// Declared type of a column.
///
/// Resolved from its configuration name exactly once, when the registry
/// is built; the per-attribute encode path only ever matches on the enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarType {
    String,
    Double,
    Float,
    Int32,
    Int64,
    Int16,
}

impl ScalarType {
    /// Parse a configured type name, case-insensitive.
    ///
    /// The recognized names are `string`, `double`, `float`, `int`,
    /// `long`, `short`. Anything else returns `None`.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "string" => Some(Self::String),
            "double" => Some(Self::Double),
            "float" => Some(Self::Float),
            "int" => Some(Self::Int32),
            "long" => Some(Self::Int64),
            "short" => Some(Self::Int16),
            _ => None,
        }
    }

    /// Canonical configuration name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Double => "double",
            Self::Float => "float",
            Self::Int32 => "int",
            Self::Int64 => "long",
            Self::Int16 => "short",
        }
    }

    /// Encoded width in bytes. `None` for variable-width strings.
    pub fn width(&self) -> Option<usize> {
        match self {
            Self::String => None,
            Self::Double => Some(8),
            Self::Float => Some(4),
            Self::Int32 => Some(4),
            Self::Int64 => Some(8),
            Self::Int16 => Some(2),
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Encode one textual value into the canonical bytes of its declared
/// type. Pure and stateless.
pub fn encode_scalar(
    ty: ScalarType,
    value: &str,
    charset: Charset,
) -> Result<Vec<u8>, ValueFormatError> {
    match ty {
        ScalarType::String => charset.encode(value).ok_or_else(|| {
            ValueFormatError::Unencodable {
                charset,
                value: value.to_string(),
            }
        }),
        ScalarType::Double => value
            .parse::<f64>()
            .map(|v| v.to_be_bytes().to_vec())
            .map_err(|source| float_err(ty, value, source)),
        ScalarType::Float => value
            .parse::<f32>()
            .map(|v| v.to_be_bytes().to_vec())
            .map_err(|source| float_err(ty, value, source)),
        ScalarType::Int32 => value
            .parse::<i32>()
            .map(|v| v.to_be_bytes().to_vec())
            .map_err(|source| int_err(ty, value, source)),
        ScalarType::Int64 => value
            .parse::<i64>()
            .map(|v| v.to_be_bytes().to_vec())
            .map_err(|source| int_err(ty, value, source)),
        ScalarType::Int16 => value
            .parse::<i16>()
            .map(|v| v.to_be_bytes().to_vec())
            .map_err(|source| int_err(ty, value, source)),
    }
}

fn int_err(ty: ScalarType, value: &str, source: std::num::ParseIntError) -> ValueFormatError {
    ValueFormatError::InvalidInt {
        ty,
        value: value.to_string(),
        source,
    }
}

fn float_err(ty: ScalarType, value: &str, source: std::num::ParseFloatError) -> ValueFormatError {
    ValueFormatError::InvalidFloat {
        ty,
        value: value.to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_recognized_names() {
        assert_eq!(ScalarType::parse("string"), Some(ScalarType::String));
        assert_eq!(ScalarType::parse("double"), Some(ScalarType::Double));
        assert_eq!(ScalarType::parse("float"), Some(ScalarType::Float));
        assert_eq!(ScalarType::parse("int"), Some(ScalarType::Int32));
        assert_eq!(ScalarType::parse("long"), Some(ScalarType::Int64));
        assert_eq!(ScalarType::parse("short"), Some(ScalarType::Int16));
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(ScalarType::parse("STRING"), Some(ScalarType::String));
        assert_eq!(ScalarType::parse("Int"), Some(ScalarType::Int32));
        assert_eq!(ScalarType::parse("LoNg"), Some(ScalarType::Int64));
    }

    #[test]
    fn test_parse_unrecognized() {
        assert_eq!(ScalarType::parse("integer"), None);
        assert_eq!(ScalarType::parse("i32"), None);
        assert_eq!(ScalarType::parse(""), None);
    }

    #[test]
    fn test_name_roundtrips_through_parse() {
        for ty in [
            ScalarType::String,
            ScalarType::Double,
            ScalarType::Float,
            ScalarType::Int32,
            ScalarType::Int64,
            ScalarType::Int16,
        ] {
            assert_eq!(ScalarType::parse(ty.name()), Some(ty));
        }
    }

    #[test]
    fn test_int32_canonical_bytes() {
        let bytes = encode_scalar(ScalarType::Int32, "42", Charset::Utf8).unwrap();
        assert_eq!(bytes, vec![0x00, 0x00, 0x00, 0x2A]);
    }

    #[test]
    fn test_int64_canonical_bytes() {
        let bytes = encode_scalar(ScalarType::Int64, "42", Charset::Utf8).unwrap();
        assert_eq!(bytes, vec![0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x2A]);
    }

    #[test]
    fn test_int16_canonical_bytes() {
        let bytes = encode_scalar(ScalarType::Int16, "42", Charset::Utf8).unwrap();
        assert_eq!(bytes, vec![0x00, 0x2A]);
    }

    #[test]
    fn test_double_ieee754_bits() {
        let bytes = encode_scalar(ScalarType::Double, "1.5", Charset::Utf8).unwrap();
        assert_eq!(bytes, 1.5f64.to_be_bytes().to_vec());
        // 1.5 = 0x3FF8000000000000
        assert_eq!(bytes[0], 0x3F);
        assert_eq!(bytes[1], 0xF8);
        assert!(bytes[2..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_float_width() {
        let bytes = encode_scalar(ScalarType::Float, "1.5", Charset::Utf8).unwrap();
        assert_eq!(bytes, 1.5f32.to_be_bytes().to_vec());
        assert_eq!(bytes.len(), 4);
    }

    #[test]
    fn test_negative_int_twos_complement() {
        let bytes = encode_scalar(ScalarType::Int32, "-1", Charset::Utf8).unwrap();
        assert_eq!(bytes, vec![0xFF, 0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn test_string_uses_charset() {
        let bytes = encode_scalar(ScalarType::String, "héllo", Charset::Latin1).unwrap();
        assert_eq!(bytes, vec![0x68, 0xE9, 0x6C, 0x6C, 0x6F]);

        let err = encode_scalar(ScalarType::String, "héllo", Charset::Ascii).unwrap_err();
        assert!(matches!(err, ValueFormatError::Unencodable { .. }));
    }

    #[test]
    fn test_widths_match_encoded_lengths() {
        for (ty, value) in [
            (ScalarType::Double, "3.25"),
            (ScalarType::Float, "3.25"),
            (ScalarType::Int32, "7"),
            (ScalarType::Int64, "7"),
            (ScalarType::Int16, "7"),
        ] {
            let bytes = encode_scalar(ty, value, Charset::Utf8).unwrap();
            assert_eq!(Some(bytes.len()), ty.width(), "width mismatch for {}", ty);
        }
    }

    #[test]
    fn test_parse_failure_carries_context() {
        let err = encode_scalar(ScalarType::Int32, "abc", Charset::Utf8).unwrap_err();
        match err {
            ValueFormatError::InvalidInt { ty, value, .. } => {
                assert_eq!(ty, ScalarType::Int32);
                assert_eq!(value, "abc");
            }
            other => panic!("expected InvalidInt, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_is_a_parse_failure() {
        // Fits i32 but not i16
        let err = encode_scalar(ScalarType::Int16, "40000", Charset::Utf8).unwrap_err();
        assert!(matches!(err, ValueFormatError::InvalidInt { .. }));
    }

    #[test]
    fn test_no_whitespace_tolerance() {
        assert!(encode_scalar(ScalarType::Int32, " 42", Charset::Utf8).is_err());
        assert!(encode_scalar(ScalarType::Int32, "42 ", Charset::Utf8).is_err());
    }
}
