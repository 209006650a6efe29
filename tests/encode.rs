#![cfg(feature = "std")]

use zenbmp::*;

const NAVY: u32 = 0x000091;
const CRIMSON: u32 = 0xE1000F;

fn solid(w: u32, h: u32, packed: u32) -> PixelBuffer {
    let mut image = PixelBuffer::new(w, h).unwrap();
    image.fill(Color::new(packed).unwrap());
    image
}

fn le_u32(bytes: &[u8], off: usize) -> u32 {
    u32::from_le_bytes(bytes[off..off + 4].try_into().unwrap())
}

fn le_i32(bytes: &[u8], off: usize) -> i32 {
    i32::from_le_bytes(bytes[off..off + 4].try_into().unwrap())
}

fn le_u16(bytes: &[u8], off: usize) -> u16 {
    u16::from_le_bytes(bytes[off..off + 2].try_into().unwrap())
}

fn flag() -> PixelBuffer {
    let mut image = PixelBuffer::new(30, 20).unwrap();
    image
        .fill_rect(0, 0, 10, 20, Color::new(NAVY).unwrap())
        .unwrap();
    image.fill_rect(10, 0, 10, 20, Color::WHITE).unwrap();
    image
        .fill_rect(20, 0, 10, 20, Color::new(CRIMSON).unwrap())
        .unwrap();
    image
}

#[test]
fn header_fields() {
    let encoded = encode_bmp(&solid(30, 20, CRIMSON)).unwrap();

    assert_eq!(&encoded[0..2], b"BM");
    assert_eq!(le_u32(&encoded, 2), encoded.len() as u32);
    assert_eq!(le_u16(&encoded, 6), 0);
    assert_eq!(le_u16(&encoded, 8), 0);
    assert_eq!(le_u32(&encoded, 10), 54);
    assert_eq!(le_u32(&encoded, 14), 40);
    assert_eq!(le_i32(&encoded, 18), 30);
    assert_eq!(le_i32(&encoded, 22), 20);
    assert_eq!(le_u16(&encoded, 26), 1);
    assert_eq!(le_u16(&encoded, 28), 24);
    assert_eq!(le_u32(&encoded, 30), 0);
    assert_eq!(le_u32(&encoded, 34), 92 * 20);
    assert!(encoded[38..54].iter().all(|&b| b == 0));
}

#[test]
fn length_matches_formula_for_many_sizes() {
    for w in 1..=13u32 {
        for h in [1u32, 2, 3, 7] {
            let encoded = encode_bmp(&PixelBuffer::new(w, h).unwrap()).unwrap();
            let expected = 54 + 4 * (w * 3).div_ceil(4) * h;
            assert_eq!(encoded.len() as u32, expected, "{w}x{h}");
            assert_eq!(encoded.len() as u64, encoded_len(w, h));
            assert_eq!(le_u32(&encoded, 2), expected, "{w}x{h}");
            assert_eq!(&encoded[0..2], b"BM");
        }
    }
}

#[test]
fn first_pixel_is_bgr() {
    let encoded = encode_bmp(&solid(4, 4, CRIMSON)).unwrap();
    assert_eq!(&encoded[54..57], &[0x0F, 0x00, 0xE1]);
}

#[test]
fn bottom_row_written_first() {
    let mut image = PixelBuffer::new(1, 2).unwrap();
    image.set_pixel(0, 0, Color::new(NAVY).unwrap()).unwrap();
    image.set_pixel(0, 1, Color::WHITE).unwrap();

    let encoded = encode_bmp(&image).unwrap();
    assert_eq!(encoded.len(), 54 + 4 * 2);
    assert_eq!(&encoded[54..58], &[0xFF, 0xFF, 0xFF, 0x00]);
    assert_eq!(&encoded[58..62], &[0x91, 0x00, 0x00, 0x00]);
}

#[test]
fn padding_bytes_are_zero() {
    let encoded = encode_bmp(&solid(30, 3, 0xFFFFFF)).unwrap();
    for row in encoded[54..].chunks_exact(92) {
        assert!(row[..90].iter().all(|&b| b == 0xFF));
        assert_eq!(&row[90..], &[0, 0]);
    }
}

#[test]
fn flag_matches_fixture() {
    let expected = include_bytes!("fixtures/flag_30x20.bmp");
    let encoded = encode_bmp(&flag()).unwrap();
    assert_eq!(encoded.len(), 1894);
    assert_eq!(&encoded[..], &expected[..]);
}

#[test]
fn out_of_bounds_drawing_is_rejected() {
    let mut image = flag();
    let before = image.clone();

    assert!(matches!(
        image.set_pixel(30, 0, Color::BLACK),
        Err(BitmapError::OutOfBounds { .. })
    ));
    assert!(matches!(
        image.set_pixel(0, 20, Color::BLACK),
        Err(BitmapError::OutOfBounds { .. })
    ));
    assert!(matches!(
        image.fill_rect(25, 0, 6, 1, Color::BLACK),
        Err(BitmapError::OutOfBounds { .. })
    ));
    assert!(matches!(
        image.fill_rect(0, 30, 1, 1, Color::BLACK),
        Err(BitmapError::OutOfBounds { .. })
    ));
    assert_eq!(image, before);
}

#[test]
fn invalid_dimensions() {
    for (w, h) in [(0, 10), (10, 0), (MAX_DIMENSION + 1, 1), (1, MAX_DIMENSION + 1)] {
        assert!(matches!(
            PixelBuffer::new(w, h),
            Err(BitmapError::InvalidDimension { .. })
        ));
    }
}

#[test]
fn write_to_vec_matches_encode() {
    let image = flag();
    let mut sink = Vec::new();
    let written = write_bmp(&image, &mut sink).unwrap();
    assert_eq!(written, 1894);
    assert_eq!(sink, encode_bmp(&image).unwrap());
}

/// Sink that accepts a fixed number of bytes, then fails.
struct FullDisk {
    accepted: Vec<u8>,
    capacity: usize,
}

impl std::io::Write for FullDisk {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let room = self.capacity - self.accepted.len();
        if room == 0 {
            return Err(std::io::Error::other("disk full"));
        }
        let n = room.min(buf.len());
        self.accepted.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn failing_sink_reports_write_error_and_keeps_prefix() {
    let image = flag();
    let mut sink = FullDisk {
        accepted: Vec::new(),
        capacity: 100,
    };
    let err = write_bmp(&image, &mut sink).unwrap_err();
    assert!(matches!(err, BitmapError::Write(_)));
    assert_eq!(sink.accepted.len(), 100);
    assert_eq!(&sink.accepted[..], &encode_bmp(&image).unwrap()[..100]);
}

#[test]
fn save_writes_file() {
    let dir = std::env::temp_dir().join(format!("zenbmp-save-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("flag.bmp");

    let written = save_bmp(&flag(), &path).unwrap();
    assert_eq!(written, 1894);
    assert_eq!(
        std::fs::read(&path).unwrap(),
        include_bytes!("fixtures/flag_30x20.bmp")
    );

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn save_to_missing_directory_fails() {
    let path = std::env::temp_dir()
        .join("zenbmp-does-not-exist")
        .join("nested")
        .join("out.bmp");
    assert!(matches!(
        save_bmp(&flag(), &path),
        Err(BitmapError::Write(_))
    ));
}
