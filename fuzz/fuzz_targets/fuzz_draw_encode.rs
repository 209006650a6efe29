#![no_main]
use libfuzzer_sys::fuzz_target;
use zenbmp::*;

fuzz_target!(|data: &[u8]| {
    // First two bytes pick a small size, the rest are 8-byte fill_rect commands.
    let [w, h, rest @ ..] = data else {
        return;
    };
    let (w, h) = (u32::from(*w) % 64 + 1, u32::from(*h) % 64 + 1);
    let mut image = PixelBuffer::new(w, h).unwrap();

    for cmd in rest.chunks_exact(8) {
        let before = image.clone();
        let color = Color::from_rgb(cmd[5], cmd[6], cmd[7]);
        let (x, y) = (u32::from(cmd[0]) % 80, u32::from(cmd[1]) % 80);
        let (rw, rh) = (u32::from(cmd[2]) % 80, u32::from(cmd[3]) % 80);
        let result = if cmd[4] & 1 == 0 {
            image.set_pixel(x, y, color)
        } else {
            image.fill_rect(x, y, rw, rh, color)
        };
        if result.is_err() {
            assert_eq!(image, before, "failed draw mutated the buffer");
        }
    }

    let encoded = encode_bmp(&image).unwrap();
    assert_eq!(encoded.len() as u64, encoded_len(w, h));
    assert_eq!(&encoded[0..2], b"BM");
    assert_eq!(
        u32::from_le_bytes(encoded[2..6].try_into().unwrap()) as usize,
        encoded.len()
    );

    let mut streamed = Vec::new();
    write_bmp(&image, &mut streamed).unwrap();
    assert_eq!(streamed, encoded);
});
