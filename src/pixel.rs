use crate::error::BitmapError;

/// A 24-bit true-color value.
///
/// Packed as `0x00RRGGBB`: red in bits 23..16, green in 15..8, blue in 7..0.
/// The top byte is always zero; there is no alpha channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Color(u32);

impl Color {
    pub const BLACK: Color = Color(0x000000);
    pub const WHITE: Color = Color(0xFFFFFF);

    /// Largest packed value a color can hold.
    pub const MAX: u32 = 0x00FF_FFFF;

    /// Build a color from a packed `0x00RRGGBB` value.
    ///
    /// Values with any of the top 8 bits set are rejected with
    /// [`BitmapError::InvalidColor`] rather than masked.
    pub fn new(packed: u32) -> Result<Self, BitmapError> {
        if packed > Self::MAX {
            return Err(BitmapError::InvalidColor(packed));
        }
        Ok(Color(packed))
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Packed `0x00RRGGBB` value.
    pub const fn to_u32(self) -> u32 {
        self.0
    }

    /// Channel bytes in BMP on-disk order: blue, green, red.
    #[inline]
    pub const fn to_bgr(self) -> [u8; 3] {
        [self.blue(), self.green(), self.red()]
    }
}

impl TryFrom<u32> for Color {
    type Error = BitmapError;

    fn try_from(packed: u32) -> Result<Self, Self::Error> {
        Color::new(packed)
    }
}

impl From<Color> for u32 {
    fn from(c: Color) -> u32 {
        c.0
    }
}

impl From<[u8; 3]> for Color {
    /// `[r, g, b]`.
    fn from([r, g, b]: [u8; 3]) -> Self {
        Color::from_rgb(r, g, b)
    }
}

#[cfg(feature = "rgb")]
impl From<rgb::RGB8> for Color {
    fn from(px: rgb::RGB8) -> Self {
        Color::from_rgb(px.r, px.g, px.b)
    }
}

#[cfg(feature = "rgb")]
impl From<Color> for rgb::RGB8 {
    fn from(c: Color) -> Self {
        rgb::RGB8::new(c.red(), c.green(), c.blue())
    }
}
