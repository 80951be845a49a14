// src/metadata/header.rs
use crate::error::{IsfError, Result};
use crate::types::{HeaderField, HeaderValue, ValueKind};
use std::collections::BTreeMap;
use std::fmt;

static MISSING: HeaderValue = HeaderValue::Missing;

/// Canonical ISF header: every schema field mapped to its coerced value
///
/// A freshly created header holds [`HeaderValue::Missing`] for every field;
/// parsing only overwrites the fields the text actually carries.
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    values: BTreeMap<HeaderField, HeaderValue>,
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        let values = HeaderField::ALL
            .iter()
            .map(|&field| (field, HeaderValue::Missing))
            .collect();
        Header { values }
    }

    pub fn get(&self, field: HeaderField) -> &HeaderValue {
        self.values.get(&field).unwrap_or(&MISSING)
    }

    pub fn set(&mut self, field: HeaderField, value: HeaderValue) {
        self.values.insert(field, value);
    }

    pub fn iter(&self) -> impl Iterator<Item = (HeaderField, &HeaderValue)> {
        self.values.iter().map(|(field, value)| (*field, value))
    }

    /// Fields the header text never mentioned, in schema order
    pub fn missing_fields(&self) -> Vec<HeaderField> {
        self.iter()
            .filter(|(_, value)| value.is_missing())
            .map(|(field, _)| field)
            .collect()
    }

    /// Read an integer field, failing if it is missing or not an integer
    pub fn integer(&self, field: HeaderField) -> Result<i64> {
        let value = self.get(field);
        value
            .as_integer()
            .ok_or_else(|| Self::wrong_kind(field, value, ValueKind::Integer))
    }

    /// Read a float field, failing if it is missing or not a float
    pub fn float(&self, field: HeaderField) -> Result<f64> {
        let value = self.get(field);
        value
            .as_float()
            .ok_or_else(|| Self::wrong_kind(field, value, ValueKind::Float))
    }

    /// Read a string field; `None` when missing
    pub fn text(&self, field: HeaderField) -> Option<&str> {
        self.get(field).as_str()
    }

    /// Whether the waveform was acquired in envelope (`PT_FMT ENV`) mode
    pub fn is_envelope(&self) -> bool {
        self.text(HeaderField::PointFormat) == Some("ENV")
    }

    fn wrong_kind(field: HeaderField, value: &HeaderValue, expected: ValueKind) -> IsfError {
        IsfError::Coercion {
            field,
            value: value.to_string(),
            expected: expected.name(),
        }
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (field, value) in self.iter() {
            writeln!(f, "{:<8} {}", field.name(), value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_header_is_all_missing() {
        let header = Header::new();
        assert_eq!(header.missing_fields().len(), HeaderField::ALL.len());
        assert!(header.get(HeaderField::NumPoints).is_missing());
        assert!(!header.is_envelope());
    }

    #[test]
    fn test_typed_accessors() {
        let mut header = Header::new();
        header.set(HeaderField::NumPoints, HeaderValue::Integer(10));
        header.set(HeaderField::XIncrement, HeaderValue::Float(0.5));
        header.set(HeaderField::PointFormat, HeaderValue::String("ENV".into()));

        assert_eq!(header.integer(HeaderField::NumPoints).unwrap(), 10);
        assert_eq!(header.float(HeaderField::XIncrement).unwrap(), 0.5);
        assert!(header.is_envelope());
        assert!(!header.missing_fields().contains(&HeaderField::NumPoints));
    }

    #[test]
    fn test_missing_numeric_field_is_coercion_error() {
        let header = Header::new();
        let err = header.float(HeaderField::YMultiplier).unwrap_err();
        match err {
            IsfError::Coercion { field, value, expected } => {
                assert_eq!(field, HeaderField::YMultiplier);
                assert_eq!(value, "<missing>");
                assert_eq!(expected, "float");
            }
            other => panic!("Expected Coercion, got {:?}", other),
        }
    }

    #[test]
    fn test_wrong_kind_is_coercion_error() {
        let mut header = Header::new();
        header.set(HeaderField::ByteNr, HeaderValue::String("1".into()));
        assert!(matches!(
            header.integer(HeaderField::ByteNr),
            Err(IsfError::Coercion { field: HeaderField::ByteNr, .. })
        ));
    }

    #[test]
    fn test_display_lists_every_field() {
        let header = Header::new();
        let text = header.to_string();
        assert_eq!(text.lines().count(), HeaderField::ALL.len());
        assert!(text.contains("BYT_NR"));
    }
}
