//! In-memory pixel grid with bounds-checked drawing primitives.

use alloc::vec::Vec;

use crate::error::BitmapError;
use crate::limits::Limits;
use crate::pixel::Color;

/// Largest width or height a BMP info header can record (signed 32-bit field).
pub const MAX_DIMENSION: u32 = i32::MAX as u32;

/// A width x height grid of [`Color`]s, stored row-major with row 0 at the top.
///
/// Dimensions are fixed at creation. Drawing operations validate every
/// coordinate before touching a pixel, so a failed call leaves the buffer
/// unchanged.
///
/// There is no negative-direction fill: rectangles always extend right and
/// down from their anchor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl PixelBuffer {
    /// Allocate a black `width` x `height` buffer.
    ///
    /// Fails with [`BitmapError::InvalidDimension`] if either dimension is
    /// zero or above [`MAX_DIMENSION`], and with [`BitmapError::OutOfMemory`]
    /// if the grid cannot be allocated.
    pub fn new(width: u32, height: u32) -> Result<Self, BitmapError> {
        check_dimensions(width, height)?;
        let bytes = Limits::grid_bytes(width, height);
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or(BitmapError::OutOfMemory { bytes })?;
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(len)
            .map_err(|_| BitmapError::OutOfMemory { bytes })?;
        pixels.resize(len, Color::BLACK);

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Like [`PixelBuffer::new`], but also checks the dimensions against
    /// `limits` before allocating.
    ///
    /// Zero or oversized dimensions still fail with
    /// [`BitmapError::InvalidDimension`], ahead of any limit.
    pub fn with_limits(width: u32, height: u32, limits: &Limits) -> Result<Self, BitmapError> {
        check_dimensions(width, height)?;
        limits.check(width, height)?;
        Self::new(width, height)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// All pixels, row-major, top row first.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// One row of pixels, left to right. `None` if `y` is past the last row.
    pub fn row(&self, y: u32) -> Option<&[Color]> {
        if y >= self.height {
            return None;
        }
        let w = self.width as usize;
        let start = y as usize * w;
        Some(&self.pixels[start..start + w])
    }

    pub fn get_pixel(&self, x: u32, y: u32) -> Result<Color, BitmapError> {
        let idx = self.index(x, y)?;
        Ok(self.pixels[idx])
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) -> Result<(), BitmapError> {
        let idx = self.index(x, y)?;
        self.pixels[idx] = color;
        Ok(())
    }

    /// Paint the half-open rectangle `[x, x + w) x [y, y + h)`.
    ///
    /// The anchor must lie inside the buffer even when `w` or `h` is zero
    /// (an empty rectangle is then a no-op). The far corner may touch but
    /// not pass the right and bottom edges.
    pub fn fill_rect(
        &mut self,
        x: u32,
        y: u32,
        w: u32,
        h: u32,
        color: Color,
    ) -> Result<(), BitmapError> {
        self.index(x, y)?;
        let x_end = u64::from(x) + u64::from(w);
        let y_end = u64::from(y) + u64::from(h);
        if x_end > u64::from(self.width) || y_end > u64::from(self.height) {
            return Err(self.out_of_bounds(x_end, y_end));
        }

        let stride = self.width as usize;
        let (x, w) = (x as usize, w as usize);
        for row in y as usize..y_end as usize {
            let start = row * stride + x;
            self.pixels[start..start + w].fill(color);
        }
        Ok(())
    }

    /// Paint every pixel.
    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    fn index(&self, x: u32, y: u32) -> Result<usize, BitmapError> {
        if x >= self.width || y >= self.height {
            return Err(self.out_of_bounds(u64::from(x), u64::from(y)));
        }
        Ok(y as usize * self.width as usize + x as usize)
    }

    fn out_of_bounds(&self, x: u64, y: u64) -> BitmapError {
        BitmapError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }
}

fn check_dimensions(width: u32, height: u32) -> Result<(), BitmapError> {
    if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(BitmapError::InvalidDimension {
            width: u64::from(width),
            height: u64::from(height),
        });
    }
    Ok(())
}
