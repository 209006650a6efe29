//! BMP encoder: uncompressed 24-bit, bottom-up rows, BGR channel order.

use alloc::vec::Vec;

use super::header::{FileHeader, HEADER_LEN, InfoHeader, header_bytes};
use crate::buffer::PixelBuffer;
use crate::error::BitmapError;
use crate::pixel::Color;

/// Bytes one row occupies on disk: 3 bytes per pixel, rounded up to a
/// multiple of 4.
pub fn row_stride(width: u32) -> u64 {
    (u64::from(width) * 24 + 31) / 32 * 4
}

/// Zero bytes appended after each row's pixel data.
pub fn row_padding(width: u32) -> u64 {
    row_stride(width) - u64::from(width) * 3
}

/// Total size of the encoded file: headers plus padded pixel rows.
pub fn encoded_len(width: u32, height: u32) -> u64 {
    HEADER_LEN as u64 + row_stride(width) * u64::from(height)
}

/// Sizes derived from the buffer dimensions, validated against the 32-bit
/// header fields.
#[derive(Clone, Copy, Debug)]
struct Plan {
    width: u32,
    height: u32,
    padding: usize,
    stride: usize,
    image_size: u32,
    file_size: u32,
}

impl Plan {
    fn new(width: u32, height: u32) -> Result<Self, BitmapError> {
        let too_large = || BitmapError::InvalidDimension {
            width: u64::from(width),
            height: u64::from(height),
        };
        let stride = row_stride(width);
        let image_size = u32::try_from(stride * u64::from(height)).map_err(|_| too_large())?;
        let file_size = u32::try_from(encoded_len(width, height)).map_err(|_| too_large())?;
        Ok(Self {
            width,
            height,
            padding: row_padding(width) as usize,
            stride: stride as usize,
            image_size,
            file_size,
        })
    }

    fn headers(&self) -> [u8; HEADER_LEN] {
        // PixelBuffer caps both dimensions at i32::MAX.
        let info = InfoHeader::new(self.width as i32, self.height as i32, self.image_size);
        header_bytes(&FileHeader::new(self.file_size), &info)
    }
}

/// Append one row: each pixel as B, G, R, then the zero padding.
fn pack_row(row: &[Color], padding: usize, out: &mut Vec<u8>) {
    for px in row {
        out.extend_from_slice(&px.to_bgr());
    }
    out.extend(core::iter::repeat_n(0u8, padding));
}

fn try_alloc(bytes: usize) -> Result<Vec<u8>, BitmapError> {
    let mut out = Vec::new();
    out.try_reserve_exact(bytes)
        .map_err(|_| BitmapError::OutOfMemory {
            bytes: bytes as u64,
        })?;
    Ok(out)
}

/// Encode the whole buffer into a freshly allocated byte vector.
pub(crate) fn encode_bmp(buffer: &PixelBuffer) -> Result<Vec<u8>, BitmapError> {
    let plan = Plan::new(buffer.width(), buffer.height())?;
    tracing::debug!(
        width = buffer.width(),
        height = buffer.height(),
        stride = plan.stride,
        file_size = plan.file_size,
        "encoding bmp"
    );

    let mut out = try_alloc(plan.file_size as usize)?;
    out.extend_from_slice(&plan.headers());
    for row in buffer.pixels().chunks_exact(plan.width as usize).rev() {
        pack_row(row, plan.padding, &mut out);
    }

    debug_assert_eq!(out.len(), plan.file_size as usize);
    Ok(out)
}

/// Stream the encoded file into `sink` one row at a time, then flush.
///
/// Returns the number of bytes written. On failure, whatever the sink had
/// already accepted stays written.
#[cfg(feature = "std")]
pub(crate) fn write_bmp<W: std::io::Write>(
    buffer: &PixelBuffer,
    sink: &mut W,
) -> Result<u64, BitmapError> {
    let plan = Plan::new(buffer.width(), buffer.height())?;
    tracing::debug!(
        width = buffer.width(),
        height = buffer.height(),
        stride = plan.stride,
        file_size = plan.file_size,
        "writing bmp"
    );

    let mut row_bytes = try_alloc(plan.stride)?;
    let result = (|| {
        sink.write_all(&plan.headers())?;
        for row in buffer.pixels().chunks_exact(plan.width as usize).rev() {
            row_bytes.clear();
            pack_row(row, plan.padding, &mut row_bytes);
            sink.write_all(&row_bytes)?;
        }
        sink.flush()
    })();

    if let Err(e) = &result {
        tracing::warn!(error = %e, "bmp write failed");
    }
    result?;
    Ok(u64::from(plan.file_size))
}
