// src/raw_data/mod.rs
//! Binary payload decoding
//!
//! - [`SampleFormat`] - byte order, signedness and width declared by the header
//! - [`RawDataReader`] - turns a payload into [`RawSamples`]
//!
//! # Example
//!
//! ```
//! use isf_rs::raw_data::{Endianness, RawDataReader, SampleFormat};
//!
//! let format = SampleFormat::new(Endianness::Little, true, 2).unwrap();
//! let samples = RawDataReader::read_samples(&[1, 0, 0xff, 0xff], 2, format).unwrap();
//! assert_eq!(samples.to_f64(), vec![1.0, -1.0]);
//! ```

mod format;
mod reader;
mod samples;

pub use format::{Endianness, SampleFormat};
pub use reader::RawDataReader;
pub use samples::RawSamples;
