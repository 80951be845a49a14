// src/segment/info.rs
use crate::error::{IsfError, Result};
use crate::segment::BlockMarker;
use crate::utils::find_bytes;
use std::ops::Range;

/// Location of one header + binary block inside a buffer
///
/// All offsets are absolute positions in the buffer that was searched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockInfo {
    /// Where this block's header text begins
    pub start: usize,
    /// Offset of the `:CURV` marker
    pub marker_offset: usize,
    /// Whether the directive was spelled `:CURVE` rather than `:CURV`
    pub long_form: bool,
    /// First byte after the length prefix, i.e. the first payload byte
    pub payload_offset: usize,
    /// Payload length declared by the length prefix
    pub data_len: usize,
    /// 0 for the outer block, 1 for the block nested inside an ENV block
    pub depth: usize,
}

impl BlockInfo {
    /// Find the block marker at or after `start` and read its length prefix
    pub fn locate(buffer: &[u8], start: usize, depth: usize) -> Result<Self> {
        let region = buffer.get(start..).unwrap_or(&[]);
        let marker_offset = start
            + find_bytes(region, BlockMarker::TAG).ok_or(IsfError::HeaderSeparatorNotFound)?;

        let after_tag = marker_offset + BlockMarker::TAG.len();
        let long_form = buffer.get(after_tag) == Some(&BlockMarker::LONG_FORM_SUFFIX);
        let prefix_offset = marker_offset + BlockMarker::directive_len(long_form);

        let digit_count = match buffer.get(prefix_offset) {
            Some(byte) if byte.is_ascii_digit() => (byte - b'0') as usize,
            Some(byte) => {
                return Err(Self::bad_prefix(
                    prefix_offset,
                    format!("expected digit count, found byte 0x{:02x}", byte),
                ))
            }
            None => return Err(Self::bad_prefix(prefix_offset, "buffer ends before length prefix")),
        };

        if digit_count == 0 {
            return Err(Self::bad_prefix(
                prefix_offset,
                "indefinite-length blocks (#0) are not supported",
            ));
        }

        let digits_start = prefix_offset + 1;
        let payload_offset = digits_start + digit_count;
        let digits = buffer
            .get(digits_start..payload_offset)
            .ok_or_else(|| Self::bad_prefix(digits_start, "buffer ends inside length prefix"))?;
        let data_len = Self::parse_length(digits)
            .ok_or_else(|| Self::bad_prefix(digits_start, "length is not an ASCII decimal number"))?;

        let available = buffer.len() - payload_offset;
        if data_len > available {
            return Err(IsfError::TruncatedPayload {
                declared: data_len,
                available,
            });
        }

        Ok(BlockInfo {
            start,
            marker_offset,
            long_form,
            payload_offset,
            data_len,
            depth,
        })
    }

    /// Header text, including the `:CURVE #<n><len>` directive
    pub fn header_range(&self) -> Range<usize> {
        self.start..self.payload_offset
    }

    pub fn payload_range(&self) -> Range<usize> {
        self.payload_offset..self.payload_end()
    }

    /// First byte after the payload
    pub fn payload_end(&self) -> usize {
        self.payload_offset + self.data_len
    }

    fn parse_length(digits: &[u8]) -> Option<usize> {
        if !digits.iter().all(u8::is_ascii_digit) {
            return None;
        }
        std::str::from_utf8(digits).ok()?.parse().ok()
    }

    fn bad_prefix(offset: usize, reason: impl Into<String>) -> IsfError {
        IsfError::InvalidLengthPrefix {
            offset,
            reason: reason.into(),
        }
    }
}
