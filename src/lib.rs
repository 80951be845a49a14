// src/lib.rs
//! # isf-rs
//!
//! A Rust library for reading ISF (Instrument Sample Format) waveform files, the
//! `.isf` exports written by Tektronix oscilloscopes.
//!
//! An ISF file is a `;`-separated text header followed by a binary block:
//!
//! ```text
//! :WFMPRE:BYT_NR 2;BN_FMT RI;BYT_OR MSB;NR_PT 2500;...;:CURVE #45000<5000 bytes>
//! ```
//!
//! ## Features
//!
//! - Both header dialects (`:WFMPRE:` long keys and `:WFMP:` short keys)
//! - 8/16/32/64-bit signed or unsigned samples, either byte order
//! - Calibrated time/amplitude pairs from `XINCR`/`XZERO`/`YMULT`/`YOFF`/`YZERO`
//! - Envelope (`PT_FMT ENV`) files with a nested data block
//! - Zero-copy payload splitting with [`bytes::Bytes`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use isf_rs::*;
//!
//! fn main() -> Result<()> {
//!     let (samples, header) = read_file_with_header("tek0000CH1.isf")?;
//!
//!     println!("{} points, x unit {:?}", samples.len(), header.text(HeaderField::XUnit));
//!     for point in samples.iter().take(5) {
//!         println!("{:e} s, {:e} V", point.x, point.y);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ### Working from a buffer
//!
//! ```rust,no_run
//! use isf_rs::*;
//!
//! fn decode(bytes: Vec<u8>) -> Result<()> {
//!     let (header, payload) = split_header_and_payload(bytes)?;
//!     let raw = decode_raw(&header, &payload)?;
//!     let samples = decode_samples(&header, &payload)?;
//!     assert_eq!(raw.len(), samples.len());
//!     Ok(())
//! }
//! ```
//!
//! ### Async loading
//!
//! ```rust,no_run
//! # #[cfg(feature = "async")]
//! use isf_rs::*;
//!
//! # #[cfg(feature = "async")]
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let options = ParseOptions::new().with_header(true);
//!     let waveform = read_file_async("tek0000CH1.isf", &options).await?;
//!     println!("{} points", waveform.samples.len());
//!     Ok(())
//! }
//! ```

// Modules
pub mod error;
pub mod types;
pub mod metadata;
pub mod segment;
pub mod raw_data;
pub mod reader;

mod utils;

// Re-export commonly used types at the crate root for convenience
pub use error::{ErrorKind, IsfError, Result};

// Type exports
pub use types::{
    HeaderField,
    HeaderValue,
    ValueKind,
};

// Metadata exports
pub use metadata::{
    parse_header,
    parse_header_with_policy,
    Header,
    HeaderDialect,
    KeyAliasTable,
};

// Segment exports
pub use segment::{
    split_header_and_payload,
    split_header_and_payload_ref,
    split_segment,
    BlockInfo,
    BlockMarker,
    Segment,
};

// Raw data exports
pub use raw_data::{
    Endianness,
    RawDataReader,
    RawSamples,
    SampleFormat,
};

// Reader exports
pub use reader::{
    decode_raw,
    decode_samples,
    parse,
    parse_with_header,
    parse_with_options,
    read_file,
    read_file_with_header,
    read_file_with_options,
    Calibration,
    IsfWaveform,
    MissingFieldPolicy,
    ParseOptions,
    Point,
    SampleArray,
};

#[cfg(feature = "mmap")]
pub use reader::read_file_mmap;

#[cfg(feature = "async")]
pub use reader::read_file_async;

// Prelude module for glob imports
pub mod prelude {
    //! Convenient imports for common use cases.
    //!
    //! ```rust
    //! use isf_rs::prelude::*;
    //! ```

    pub use crate::error::{IsfError, Result};
    pub use crate::types::HeaderField;
    pub use crate::metadata::Header;
    pub use crate::reader::{parse, parse_with_header, read_file, ParseOptions, SampleArray};
}

/// The library version
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");
