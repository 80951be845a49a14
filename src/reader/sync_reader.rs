// src/reader/sync_reader.rs
use crate::error::Result;
use crate::metadata::Header;
use crate::reader::decoder::{decode_samples, SampleArray};
use crate::reader::ParseOptions;
use crate::segment::split_segment;
use std::fs;
use std::path::Path;
use tracing::debug;

#[cfg(feature = "mmap")]
use memmap2::Mmap;
#[cfg(feature = "mmap")]
use std::fs::File;

/// Result of [`parse_with_options`]
#[derive(Debug, Clone, PartialEq)]
pub struct IsfWaveform {
    pub samples: SampleArray,
    /// Present when [`ParseOptions::include_header`] was set
    pub header: Option<Header>,
}

/// Decode an in-memory ISF file into calibrated samples
///
/// ```
/// let mut buffer = b":WFMPRE:BYT_NR 1;BN_FMT RI;BYT_OR LSB;NR_PT 3;PT_OFF 0;\
///     XINCR 1.0;XZERO 0.0;YOFF 0.0;YMULT 2.0;YZERO 0.0;PT_FMT Y;:CURVE #13".to_vec();
/// buffer.extend_from_slice(&[1, 0xff, 2]);
///
/// let samples = isf_rs::parse(&buffer).unwrap();
/// assert_eq!(samples.xs(), vec![0.0, 1.0, 2.0]);
/// assert_eq!(samples.ys(), vec![2.0, -2.0, 4.0]);
/// ```
pub fn parse(buffer: impl AsRef<[u8]>) -> Result<SampleArray> {
    parse_with_options(buffer, &ParseOptions::default()).map(|waveform| waveform.samples)
}

/// Like [`parse`], also returning the header the samples were decoded with
pub fn parse_with_header(buffer: impl AsRef<[u8]>) -> Result<(SampleArray, Header)> {
    let buffer = buffer.as_ref();
    let segment = split_segment(buffer, &ParseOptions::default())?;
    let samples = decode_samples(&segment.header, segment.payload(buffer))?;
    Ok((samples, segment.header))
}

pub fn parse_with_options(buffer: impl AsRef<[u8]>, options: &ParseOptions) -> Result<IsfWaveform> {
    let buffer = buffer.as_ref();
    let segment = split_segment(buffer, options)?;
    let samples = decode_samples(&segment.header, segment.payload(buffer))?;

    Ok(IsfWaveform {
        samples,
        header: options.include_header.then_some(segment.header),
    })
}

/// Read and decode an ISF file from disk
pub fn read_file(path: impl AsRef<Path>) -> Result<SampleArray> {
    read_file_with_options(path, &ParseOptions::default()).map(|waveform| waveform.samples)
}

pub fn read_file_with_header(path: impl AsRef<Path>) -> Result<(SampleArray, Header)> {
    let buffer = fs::read(path)?;
    parse_with_header(buffer)
}

pub fn read_file_with_options(path: impl AsRef<Path>, options: &ParseOptions) -> Result<IsfWaveform> {
    let path = path.as_ref();
    let buffer = fs::read(path)?;
    debug!(path = %path.display(), bytes = buffer.len(), "read ISF file");
    parse_with_options(buffer, options)
}

/// Decode an ISF file through a memory map instead of reading it into a buffer
#[cfg(feature = "mmap")]
pub fn read_file_mmap(path: impl AsRef<Path>, options: &ParseOptions) -> Result<IsfWaveform> {
    let file = File::open(path)?;
    // SAFETY: the map is read-only and dropped before this function returns.
    let mmap = unsafe { Mmap::map(&file)? };
    parse_with_options(&mmap[..], options)
}
