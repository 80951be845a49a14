// src/reader/async_reader.rs
use crate::error::Result;
use crate::reader::{parse_with_options, IsfWaveform, ParseOptions};
use std::path::Path;
use tracing::debug;

/// Load an ISF file with `tokio::fs` and decode it
///
/// Decoding itself is synchronous and runs on the calling task.
pub async fn read_file_async(path: impl AsRef<Path>, options: &ParseOptions) -> Result<IsfWaveform> {
    let path = path.as_ref();
    let buffer = tokio::fs::read(path).await?;
    debug!(path = %path.display(), bytes = buffer.len(), "read ISF file");
    parse_with_options(buffer, options)
}
