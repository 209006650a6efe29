use crate::error::BitmapError;
use crate::pixel::Color;

/// Caps applied when allocating a [`PixelBuffer`](crate::PixelBuffer)
/// through [`PixelBuffer::with_limits`](crate::PixelBuffer::with_limits).
///
/// All fields default to `None` (no limit beyond the format's own
/// `i32::MAX` dimension bound).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum bytes for the in-memory pixel grid.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Bytes a `width` x `height` grid occupies in memory, saturating at `u64::MAX`.
    pub(crate) fn grid_bytes(width: u32, height: u32) -> u64 {
        (u64::from(width) * u64::from(height))
            .saturating_mul(core::mem::size_of::<Color>() as u64)
    }

    /// Check a buffer of the given size against every configured cap.
    pub(crate) fn check(&self, width: u32, height: u32) -> Result<(), BitmapError> {
        let pixels = u64::from(width) * u64::from(height);
        let bytes = Self::grid_bytes(width, height);
        exceeds("width", u64::from(width), self.max_width)?;
        exceeds("height", u64::from(height), self.max_height)?;
        exceeds("pixel count", pixels, self.max_pixels)?;
        exceeds("grid bytes", bytes, self.max_memory_bytes)
    }
}

fn exceeds(what: &str, value: u64, limit: Option<u64>) -> Result<(), BitmapError> {
    match limit {
        Some(max) if value > max => Err(BitmapError::LimitExceeded(alloc::format!(
            "{what} {value} exceeds limit {max}"
        ))),
        _ => Ok(()),
    }
}
