// src/raw_data/format.rs
use crate::error::{IsfError, Result};
use crate::metadata::Header;
use crate::types::HeaderField;
use std::fmt;

/// Byte order of multi-byte samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endianness {
    Big,
    Little,
}

/// Fixed-width integer layout of the samples in a binary payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SampleFormat {
    pub endianness: Endianness,
    pub signed: bool,
    /// Bytes per sample: 1, 2, 4 or 8
    pub width: usize,
}

impl SampleFormat {
    pub const SUPPORTED_WIDTHS: [usize; 4] = [1, 2, 4, 8];

    pub fn new(endianness: Endianness, signed: bool, width: usize) -> Result<Self> {
        if !Self::SUPPORTED_WIDTHS.contains(&width) {
            return Err(IsfError::UnsupportedSampleWidth(width));
        }
        Ok(SampleFormat {
            endianness,
            signed,
            width,
        })
    }

    /// Derive the layout from `BYT_OR`, `BN_FMT` and `BYT_NR`
    ///
    /// `MSB` selects big-endian and `RI` selects signed; any other value
    /// (including a missing one) falls back to little-endian / unsigned.
    pub fn from_header(header: &Header) -> Result<Self> {
        let endianness = match header.text(HeaderField::ByteOrder) {
            Some("MSB") => Endianness::Big,
            _ => Endianness::Little,
        };
        let signed = header.text(HeaderField::BinaryFormat) == Some("RI");

        let raw_width = header.integer(HeaderField::ByteNr)?;
        let width = usize::try_from(raw_width).map_err(|_| IsfError::Coercion {
            field: HeaderField::ByteNr,
            value: raw_width.to_string(),
            expected: "non-negative integer",
        })?;

        Self::new(endianness, signed, width)
    }

    /// Get the name of the integer type as a string, e.g. `i16`
    pub fn name(&self) -> &'static str {
        match (self.signed, self.width) {
            (true, 1) => "i8",
            (true, 2) => "i16",
            (true, 4) => "i32",
            (true, 8) => "i64",
            (false, 1) => "u8",
            (false, 2) => "u16",
            (false, 4) => "u32",
            (false, 8) => "u64",
            _ => "unknown",
        }
    }
}

impl fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let order = match self.endianness {
            Endianness::Big => "big-endian",
            Endianness::Little => "little-endian",
        };
        write!(f, "{} {}", order, self.name())
    }
}
