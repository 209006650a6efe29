use alloc::string::String;

/// Errors from pixel buffer operations and BMP encoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BitmapError {
    /// Width or height is zero, larger than a BMP header can hold, or
    /// produces a file too large for the 32-bit size fields.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimension { width: u64, height: u64 },

    /// A coordinate or rectangle corner lies outside the buffer.
    #[error("({x}, {y}) is out of bounds for a {width}x{height} buffer")]
    OutOfBounds {
        x: u64,
        y: u64,
        width: u32,
        height: u32,
    },

    #[error("out of memory: could not allocate {bytes} bytes")]
    OutOfMemory { bytes: u64 },

    /// Color value with bits set above the 24-bit RGB range.
    #[error("color {0:#010x} has bits set above 0xFFFFFF")]
    InvalidColor(u32),

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    /// The sink rejected a write, or the destination could not be opened or flushed.
    #[cfg(feature = "std")]
    #[error("write failed: {0}")]
    Write(#[from] std::io::Error),
}
