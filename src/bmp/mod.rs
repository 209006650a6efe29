//! Uncompressed 24-bit BMP encoder.
//!
//! Encoding goes through the top-level [`crate::encode_bmp`],
//! [`crate::write_bmp`] and [`crate::save_bmp`]. The [`header`] submodule
//! and the size helpers are public for callers that inspect or pre-size
//! the output.

mod encode;
pub mod header;

pub use encode::{encoded_len, row_padding, row_stride};

use crate::buffer::PixelBuffer;
use crate::error::BitmapError;
use alloc::vec::Vec;

/// Encode to BMP bytes.
pub(crate) fn encode(buffer: &PixelBuffer) -> Result<Vec<u8>, BitmapError> {
    encode::encode_bmp(buffer)
}

/// Encode straight into a writer.
#[cfg(feature = "std")]
pub(crate) fn write<W: std::io::Write>(
    buffer: &PixelBuffer,
    sink: &mut W,
) -> Result<u64, BitmapError> {
    encode::write_bmp(buffer, sink)
}

/// Create (or truncate) `path` and write the encoded file to it.
///
/// Not atomic: if a write fails the file keeps whatever was flushed before
/// the error.
#[cfg(feature = "std")]
#[tracing::instrument(level = "debug", skip(buffer, path), fields(path = %path.display()))]
pub(crate) fn save(buffer: &PixelBuffer, path: &std::path::Path) -> Result<u64, BitmapError> {
    let file = std::fs::File::create(path).inspect_err(|e| {
        tracing::warn!(error = %e, "could not create bmp file");
    })?;
    let mut sink = std::io::BufWriter::new(file);
    write(buffer, &mut sink)
}
