// src/types.rs
use crate::error::{IsfError, Result};
use std::fmt;

/// Canonical ISF header field names
///
/// Both header dialects are normalized onto this set; see
/// [`KeyAliasTable`](crate::metadata::KeyAliasTable) for the raw spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HeaderField {
    ByteNr,
    Encoding,
    BinaryFormat,
    ByteOrder,
    WaveformId,
    NumPoints,
    PointFormat,
    XUnit,
    XIncrement,
    XZero,
    PointOffset,
    YUnit,
    YMultiplier,
    YOffset,
    YZero,
    VerticalScale,
    HorizontalScale,
    VerticalPosition,
    VerticalOffset,
    HorizontalDelay,
    /// The `:CURVE` directive itself; its value is the length-prefix text (`#42500`).
    Curve,
}

impl HeaderField {
    /// Every schema field, in header order
    pub const ALL: [HeaderField; 21] = [
        HeaderField::ByteNr,
        HeaderField::Encoding,
        HeaderField::BinaryFormat,
        HeaderField::ByteOrder,
        HeaderField::WaveformId,
        HeaderField::NumPoints,
        HeaderField::PointFormat,
        HeaderField::XUnit,
        HeaderField::XIncrement,
        HeaderField::XZero,
        HeaderField::PointOffset,
        HeaderField::YUnit,
        HeaderField::YMultiplier,
        HeaderField::YOffset,
        HeaderField::YZero,
        HeaderField::VerticalScale,
        HeaderField::HorizontalScale,
        HeaderField::VerticalPosition,
        HeaderField::VerticalOffset,
        HeaderField::HorizontalDelay,
        HeaderField::Curve,
    ];

    /// Get the canonical name of the field as it appears in long-form headers
    pub fn name(&self) -> &'static str {
        match self {
            HeaderField::ByteNr => "BYT_NR",
            HeaderField::Encoding => "ENCDG",
            HeaderField::BinaryFormat => "BN_FMT",
            HeaderField::ByteOrder => "BYT_OR",
            HeaderField::WaveformId => "WFID",
            HeaderField::NumPoints => "NR_PT",
            HeaderField::PointFormat => "PT_FMT",
            HeaderField::XUnit => "XUNIT",
            HeaderField::XIncrement => "XINCR",
            HeaderField::XZero => "XZERO",
            HeaderField::PointOffset => "PT_OFF",
            HeaderField::YUnit => "YUNIT",
            HeaderField::YMultiplier => "YMULT",
            HeaderField::YOffset => "YOFF",
            HeaderField::YZero => "YZERO",
            HeaderField::VerticalScale => "VSCALE",
            HeaderField::HorizontalScale => "HSCALE",
            HeaderField::VerticalPosition => "VPOS",
            HeaderField::VerticalOffset => "VOFFSET",
            HeaderField::HorizontalDelay => "HDELAY",
            HeaderField::Curve => "CURVE",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|field| field.name() == name)
    }

    /// The value type this field is coerced to
    pub fn kind(&self) -> ValueKind {
        match self {
            HeaderField::ByteNr | HeaderField::NumPoints | HeaderField::PointOffset => {
                ValueKind::Integer
            }
            HeaderField::XIncrement
            | HeaderField::XZero
            | HeaderField::YMultiplier
            | HeaderField::YOffset
            | HeaderField::YZero
            | HeaderField::VerticalScale
            | HeaderField::HorizontalScale
            | HeaderField::VerticalPosition
            | HeaderField::VerticalOffset
            | HeaderField::HorizontalDelay => ValueKind::Float,
            HeaderField::XUnit | HeaderField::YUnit => ValueKind::QuotedString,
            HeaderField::Encoding
            | HeaderField::BinaryFormat
            | HeaderField::ByteOrder
            | HeaderField::WaveformId
            | HeaderField::PointFormat
            | HeaderField::Curve => ValueKind::String,
        }
    }

    /// Convert raw header text into this field's typed value
    pub fn coerce(&self, raw: &str) -> Result<HeaderValue> {
        self.kind().coerce(*self, raw)
    }
}

impl fmt::Display for HeaderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Declared value type of a header field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Integer,
    Float,
    String,
    /// A string that may be wrapped in one layer of `"` quotes, e.g. `"s"`
    ///
    /// A leading and a trailing quote are removed independently, so a lone
    /// quote on either end is dropped as well.
    QuotedString,
}

impl ValueKind {
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::String => "string",
            ValueKind::QuotedString => "quoted string",
        }
    }

    pub fn coerce(&self, field: HeaderField, raw: &str) -> Result<HeaderValue> {
        let text = raw.trim();
        let fail = || IsfError::Coercion {
            field,
            value: raw.to_string(),
            expected: self.name(),
        };

        match self {
            ValueKind::Integer => text.parse::<i64>().map(HeaderValue::Integer).map_err(|_| fail()),
            ValueKind::Float => text.parse::<f64>().map(HeaderValue::Float).map_err(|_| fail()),
            ValueKind::String => Ok(HeaderValue::String(text.to_string())),
            ValueKind::QuotedString => {
                let unquoted = text.strip_prefix('"').unwrap_or(text);
                let unquoted = unquoted.strip_suffix('"').unwrap_or(unquoted);
                Ok(HeaderValue::String(unquoted.to_string()))
            }
        }
    }
}

/// A coerced header value
///
/// `Missing` marks a schema field the header text never mentioned, so
/// consumers can tell "absent" apart from zero or an empty string.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum HeaderValue {
    #[default]
    Missing,
    Integer(i64),
    Float(f64),
    String(String),
}

impl HeaderValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, HeaderValue::Missing)
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            HeaderValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            HeaderValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            HeaderValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for HeaderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderValue::Missing => f.write_str("<missing>"),
            HeaderValue::Integer(v) => write!(f, "{}", v),
            HeaderValue::Float(v) => write!(f, "{}", v),
            HeaderValue::String(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_roundtrip() {
        for field in HeaderField::ALL {
            assert_eq!(HeaderField::from_name(field.name()), Some(field));
        }
        assert_eq!(HeaderField::from_name("BYT_N"), None);
    }

    #[test]
    fn test_integer_coercion() {
        assert_eq!(HeaderField::NumPoints.coerce("2500").unwrap(), HeaderValue::Integer(2500));
        assert_eq!(HeaderField::PointOffset.coerce(" -4 ").unwrap(), HeaderValue::Integer(-4));

        let err = HeaderField::ByteNr.coerce("two").unwrap_err();
        assert!(matches!(
            err,
            IsfError::Coercion { field: HeaderField::ByteNr, expected: "integer", .. }
        ));
    }

    #[test]
    fn test_float_coercion() {
        assert_eq!(HeaderField::XIncrement.coerce("4.0E-10").unwrap(), HeaderValue::Float(4.0e-10));
        assert_eq!(HeaderField::YZero.coerce("0").unwrap(), HeaderValue::Float(0.0));
        assert!(HeaderField::YMultiplier.coerce("V").is_err());
    }

    #[test]
    fn test_quoted_string_strips_one_layer() {
        assert_eq!(HeaderField::XUnit.coerce("\"s\"").unwrap(), HeaderValue::String("s".into()));
        assert_eq!(HeaderField::YUnit.coerce("V").unwrap(), HeaderValue::String("V".into()));
        assert_eq!(
            HeaderField::YUnit.coerce("\"\"V\"\"").unwrap(),
            HeaderValue::String("\"V\"".into())
        );
    }

    #[test]
    fn test_quoted_string_unbalanced_quotes() {
        assert_eq!(HeaderField::XUnit.coerce("\"s").unwrap(), HeaderValue::String("s".into()));
        assert_eq!(HeaderField::YUnit.coerce("V\"").unwrap(), HeaderValue::String("V".into()));
        assert_eq!(HeaderField::YUnit.coerce("\"").unwrap(), HeaderValue::String("".into()));
    }

    #[test]
    fn test_plain_string_keeps_quotes() {
        let value = HeaderField::WaveformId.coerce("\"Ch1, DC coupling\"").unwrap();
        assert_eq!(value.as_str(), Some("\"Ch1, DC coupling\""));
    }

    #[test]
    fn test_missing_is_default() {
        let value = HeaderValue::default();
        assert!(value.is_missing());
        assert_eq!(value.as_integer(), None);
        assert_eq!(value.to_string(), "<missing>");
    }
}
