//! # zenbmp
//!
//! An in-memory 24-bit pixel buffer and an encoder for uncompressed Windows
//! bitmap (BMP) files.
//!
//! ## Format
//!
//! Output is always a 54-byte header (BITMAPFILEHEADER + BITMAPINFOHEADER)
//! followed by 24-bit pixel rows:
//! - rows stored bottom-up (the buffer's last row is written first)
//! - each pixel written as blue, green, red
//! - each row zero-padded to a multiple of 4 bytes
//!
//! ## Non-Goals
//!
//! - Decoding BMP files
//! - Compression (RLE, bitfields), palettes, or bit depths other than 24
//! - Drawing beyond single pixels and filled rectangles
//!
//! ## Logging
//!
//! Encoding emits `tracing` events at `debug` level (dimensions, stride,
//! file size) and `warn` level when a sink rejects a write. Install a
//! subscriber in your application to see them.
//!
//! ## Usage
//!
//! ```no_run
//! use zenbmp::{Color, PixelBuffer};
//!
//! let mut image = PixelBuffer::new(30, 20)?;
//! image.fill_rect(0, 0, 10, 20, Color::new(0x000091)?)?;
//! image.fill_rect(10, 0, 10, 20, Color::WHITE)?;
//! image.fill_rect(20, 0, 10, 20, Color::new(0xE1000F)?)?;
//!
//! let bytes = zenbmp::encode_bmp(&image)?;
//! assert_eq!(bytes.len(), 1894);
//!
//! # #[cfg(feature = "std")]
//! zenbmp::save_bmp(&image, "flag.bmp")?;
//! # Ok::<(), zenbmp::BitmapError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod buffer;
mod error;
mod limits;
mod pixel;

pub mod bmp;

use alloc::vec::Vec;

// Re-exports
pub use bmp::{encoded_len, row_padding, row_stride};
pub use buffer::{MAX_DIMENSION, PixelBuffer};
pub use error::BitmapError;
pub use limits::Limits;
pub use pixel::Color;

/// Encode `buffer` as a complete BMP file in memory.
pub fn encode_bmp(buffer: &PixelBuffer) -> Result<Vec<u8>, BitmapError> {
    bmp::encode(buffer)
}

/// Write `buffer` as a BMP file to `sink`, row by row, then flush it.
///
/// Returns the number of bytes written. A failure part-way through leaves
/// the bytes the sink already accepted in place.
#[cfg(feature = "std")]
pub fn write_bmp<W: std::io::Write>(buffer: &PixelBuffer, sink: &mut W) -> Result<u64, BitmapError> {
    bmp::write(buffer, sink)
}

/// Save `buffer` as a BMP file at `path`, replacing any existing file.
///
/// The replacement is not atomic; see [`write_bmp`] for partial-failure behavior.
#[cfg(feature = "std")]
pub fn save_bmp(
    buffer: &PixelBuffer,
    path: impl AsRef<std::path::Path>,
) -> Result<u64, BitmapError> {
    bmp::save(buffer, path.as_ref())
}
