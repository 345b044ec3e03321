use image::AnimationDecoder;

use super::*;
use crate::foundation::core::Rgba8;

fn decode(bytes: Vec<u8>) -> Vec<image::Frame> {
    let decoder = image::codecs::gif::GifDecoder::new(std::io::Cursor::new(bytes)).unwrap();
    decoder.into_frames().collect_frames().unwrap()
}

#[test]
fn frames_are_quantized_and_delayed() {
    let palette = Palette::studio();
    let gradient = PixelBuffer::from_fn_par(12, 6, |x, y| {
        Rgba8::opaque((x * 21) as u8, (y * 40) as u8, 90)
    });
    let white = PixelBuffer::filled(12, 6, Rgba8::WHITE);

    let mut bytes = Vec::new();
    encode_gif(&[gradient, white], &palette, GIF_FRAME_DELAY_CS, &mut bytes).unwrap();
    let frames = decode(bytes);

    assert_eq!(frames.len(), 2);
    for frame in &frames {
        let (num, den) = frame.delay().numer_denom_ms();
        assert_eq!(num / den, 150);
        assert_eq!(frame.buffer().dimensions(), (12, 6));
        for px in frame.buffer().pixels() {
            let c = Rgba8::from_array(px.0);
            assert!(palette.colors().contains(&c), "{c:?} not in palette");
        }
    }
    assert!(
        frames[1]
            .buffer()
            .pixels()
            .all(|p| Rgba8::from_array(p.0) == Rgba8::WHITE)
    );
}

#[test]
fn empty_frame_list_is_an_encode_error() {
    let err = encode_gif(&[], &Palette::studio(), 15, Vec::new()).unwrap_err();
    assert!(matches!(err, GlyphloomError::Encode(_)), "{err}");
}
