//! BMP file and info headers (BITMAPFILEHEADER + BITMAPINFOHEADER).
//!
//! Serialized field by field in little-endian order so the on-disk layout
//! never depends on host struct packing or endianness.

/// "BM" read as a little-endian u16.
pub const SIGNATURE: u16 = 0x4D42;
pub const FILE_HEADER_LEN: usize = 14;
pub const INFO_HEADER_LEN: usize = 40;
/// Both headers; also the pixel data offset since no palette is written.
pub const HEADER_LEN: usize = FILE_HEADER_LEN + INFO_HEADER_LEN;

pub const PLANES: u16 = 1;
pub const BITS_PER_PIXEL: u16 = 24;
/// BI_RGB, uncompressed.
pub const COMPRESSION_NONE: u32 = 0;

/// The 14-byte file header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileHeader {
    pub signature: u16,
    pub file_size: u32,
    pub reserved1: u16,
    pub reserved2: u16,
    pub data_offset: u32,
}

impl FileHeader {
    pub fn new(file_size: u32) -> Self {
        Self {
            signature: SIGNATURE,
            file_size,
            reserved1: 0,
            reserved2: 0,
            data_offset: HEADER_LEN as u32,
        }
    }

    pub fn to_bytes(&self) -> [u8; FILE_HEADER_LEN] {
        let mut out = [0u8; FILE_HEADER_LEN];
        out[0..2].copy_from_slice(&self.signature.to_le_bytes());
        out[2..6].copy_from_slice(&self.file_size.to_le_bytes());
        out[6..8].copy_from_slice(&self.reserved1.to_le_bytes());
        out[8..10].copy_from_slice(&self.reserved2.to_le_bytes());
        out[10..14].copy_from_slice(&self.data_offset.to_le_bytes());
        out
    }
}

/// The 40-byte BITMAPINFOHEADER for a 24-bit uncompressed image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoHeader {
    pub size: u32,
    pub width: i32,
    /// Positive: rows are stored bottom-up.
    pub height: i32,
    pub planes: u16,
    pub bit_count: u16,
    pub compression: u32,
    pub image_size: u32,
    pub x_resolution: i32,
    pub y_resolution: i32,
    pub colors_used: u32,
    pub important_colors: u32,
}

impl InfoHeader {
    pub fn new(width: i32, height: i32, image_size: u32) -> Self {
        Self {
            size: INFO_HEADER_LEN as u32,
            width,
            height,
            planes: PLANES,
            bit_count: BITS_PER_PIXEL,
            compression: COMPRESSION_NONE,
            image_size,
            x_resolution: 0,
            y_resolution: 0,
            colors_used: 0,
            important_colors: 0,
        }
    }

    pub fn to_bytes(&self) -> [u8; INFO_HEADER_LEN] {
        let mut out = [0u8; INFO_HEADER_LEN];
        out[0..4].copy_from_slice(&self.size.to_le_bytes());
        out[4..8].copy_from_slice(&self.width.to_le_bytes());
        out[8..12].copy_from_slice(&self.height.to_le_bytes());
        out[12..14].copy_from_slice(&self.planes.to_le_bytes());
        out[14..16].copy_from_slice(&self.bit_count.to_le_bytes());
        out[16..20].copy_from_slice(&self.compression.to_le_bytes());
        out[20..24].copy_from_slice(&self.image_size.to_le_bytes());
        out[24..28].copy_from_slice(&self.x_resolution.to_le_bytes());
        out[28..32].copy_from_slice(&self.y_resolution.to_le_bytes());
        out[32..36].copy_from_slice(&self.colors_used.to_le_bytes());
        out[36..40].copy_from_slice(&self.important_colors.to_le_bytes());
        out
    }
}

/// Serialize both headers back to back.
pub(crate) fn header_bytes(file: &FileHeader, info: &InfoHeader) -> [u8; HEADER_LEN] {
    let mut out = [0u8; HEADER_LEN];
    out[..FILE_HEADER_LEN].copy_from_slice(&file.to_bytes());
    out[FILE_HEADER_LEN..].copy_from_slice(&info.to_bytes());
    out
}
