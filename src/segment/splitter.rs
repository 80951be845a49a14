// src/segment/splitter.rs
use crate::error::{IsfError, Result};
use crate::metadata::{check_missing, parse_fields, Header};
use crate::reader::ParseOptions;
use crate::segment::{BlockInfo, Segment};
use crate::utils::decode_latin1;
use bytes::Bytes;
use tracing::debug;

/// Split an ISF buffer into its parsed header and binary payload
///
/// The payload is a zero-copy view into `buffer`. For ENV acquisitions the
/// nested block's header and payload are returned. Borrowed buffers that
/// cannot become [`Bytes`] without a copy go through
/// [`split_header_and_payload_ref`] instead.
///
/// ```
/// use isf_rs::{split_header_and_payload, HeaderField};
///
/// let buffer = b":WFMPRE:NR_PT 2;BYT_NR 1;:CURVE #12\x01\x02".to_vec();
/// let (header, payload) = split_header_and_payload(buffer).unwrap();
/// assert_eq!(header.integer(HeaderField::NumPoints).unwrap(), 2);
/// assert_eq!(&payload[..], &[1, 2]);
/// ```
pub fn split_header_and_payload(buffer: impl Into<Bytes>) -> Result<(Header, Bytes)> {
    let buffer = buffer.into();
    let segment = split_segment(&buffer, &ParseOptions::default())?;
    let payload = buffer.slice(segment.info.payload_range());
    Ok((segment.header, payload))
}

/// Like [`split_header_and_payload`], with the payload borrowed from `buffer`
pub fn split_header_and_payload_ref(buffer: &[u8]) -> Result<(Header, &[u8])> {
    let segment = split_segment(buffer, &ParseOptions::default())?;
    let payload = segment.payload(buffer);
    Ok((segment.header, payload))
}

/// Locate the data block, resolving ENV nesting, and parse its header
pub fn split_segment(buffer: &[u8], options: &ParseOptions) -> Result<Segment> {
    let segment = split_at(buffer, 0, 0, options.max_env_depth)?;
    check_missing(&segment.header, options.missing_fields)?;
    Ok(segment)
}

fn split_at(buffer: &[u8], start: usize, depth: usize, max_depth: usize) -> Result<Segment> {
    let info = BlockInfo::locate(buffer, start, depth)?;
    let header_text = decode_latin1(&buffer[info.header_range()]);
    let header = parse_fields(&header_text)?;

    debug!(
        depth,
        marker_offset = info.marker_offset,
        long_form = info.long_form,
        data_len = info.data_len,
        "located ISF data block"
    );

    if !header.is_envelope() {
        return Ok(Segment { header, info });
    }

    if depth >= max_depth {
        return Err(IsfError::NestingTooDeep { max_depth });
    }

    debug!(depth, next_block = info.payload_end(), "ENV header, reading nested block");
    split_at(buffer, info.payload_end(), depth + 1, max_depth).map_err(|err| match err {
        IsfError::NestingTooDeep { .. } | IsfError::IncompleteEnvelope(_) => err,
        err if err.is_invalid_file() => IsfError::IncompleteEnvelope(Box::new(err)),
        err => err,
    })
}
