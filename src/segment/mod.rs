// src/segment/mod.rs
mod info;
mod marker;
mod splitter;

pub use info::BlockInfo;
pub use marker::BlockMarker;
pub use splitter::{split_header_and_payload, split_header_and_payload_ref, split_segment};

use crate::metadata::Header;

/// A located data block together with its parsed header
#[derive(Debug, Clone)]
pub struct Segment {
    pub header: Header,
    pub info: BlockInfo,
}

impl Segment {
    /// The binary payload of this block within the buffer it was split from
    pub fn payload<'a>(&self, buffer: &'a [u8]) -> &'a [u8] {
        &buffer[self.info.payload_range()]
    }
}
