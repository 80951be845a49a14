// src/reader/mod.rs
mod decoder;
mod options;
mod sync_reader;

#[cfg(feature = "async")]
mod async_reader;

pub use decoder::{calibrate, decode_raw, decode_samples, point_count, Calibration, Point, SampleArray};
pub use options::{MissingFieldPolicy, ParseOptions};
pub use sync_reader::{
    parse, parse_with_header, parse_with_options, read_file, read_file_with_header,
    read_file_with_options, IsfWaveform,
};

#[cfg(feature = "mmap")]
pub use sync_reader::read_file_mmap;

#[cfg(feature = "async")]
pub use async_reader::read_file_async;
