// src/utils/string_encoding.rs

/// Decode single-byte header text: every byte maps to the code point of the
/// same value (ISO-8859-1), so arbitrary 8-bit metadata never fails to decode.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
