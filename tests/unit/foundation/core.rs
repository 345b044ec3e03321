use super::*;

#[test]
fn filled_buffer_has_expected_len_and_color() {
    let buf = PixelBuffer::filled(3, 2, Rgba8::WHITE);
    assert_eq!(buf.pixel_count(), 6);
    assert_eq!(buf.as_bytes().len(), 24);
    assert!(buf.pixels().all(|px| px == Rgba8::WHITE));
}

#[test]
fn from_raw_rejects_len_mismatch() {
    assert!(PixelBuffer::from_raw(2, 2, vec![0u8; 15]).is_err());
    assert!(PixelBuffer::from_raw(2, 2, vec![0u8; 16]).is_ok());
}

#[test]
fn put_and_get_ignore_out_of_bounds() {
    let mut buf = PixelBuffer::new(4, 4);
    buf.put(-1, 0, Rgba8::WHITE);
    buf.put(4, 0, Rgba8::WHITE);
    buf.put(0, 4, Rgba8::WHITE);
    assert!(buf.pixels().all(|px| px == Rgba8::TRANSPARENT));

    buf.put(2, 1, Rgba8::opaque(1, 2, 3));
    assert_eq!(buf.get(2, 1), Some(Rgba8::opaque(1, 2, 3)));
    assert_eq!(buf.get(-1, 1), None);
    assert_eq!(buf.get(1, 9), None);
}

#[test]
fn from_fn_par_matches_row_major_order() {
    let buf = PixelBuffer::from_fn_par(5, 3, |x, y| Rgba8::opaque(x as u8, y as u8, 0));
    for y in 0..3 {
        for x in 0..5 {
            assert_eq!(buf.get(x, y), Some(Rgba8::opaque(x as u8, y as u8, 0)));
        }
    }
}

#[test]
fn to_rgba_image_preserves_bytes() {
    let buf = PixelBuffer::filled(2, 1, Rgba8::opaque(9, 8, 7));
    let img = buf.to_rgba_image().unwrap();
    assert_eq!(img.dimensions(), (2, 1));
    assert_eq!(img.as_raw().as_slice(), buf.as_bytes());
}
