use super::*;

const SYSTEM_FONT: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf";

fn system_font_bytes() -> Option<Vec<u8>> {
    std::fs::read(SYSTEM_FONT).ok()
}

#[test]
fn rejects_non_positive_or_non_finite_size() {
    for size in [0.0, -4.0, f32::NAN, f32::INFINITY] {
        let err = ParleyFace::new(Vec::new(), size).unwrap_err();
        assert!(matches!(err, GlyphloomError::FaceCreation(_)), "{err}");
    }
}

#[test]
fn garbage_bytes_are_an_asset_load_error() {
    let err = ParleyFace::new(b"not a font".to_vec(), 24.0).unwrap_err();
    assert!(matches!(err, GlyphloomError::AssetLoad(_)), "{err}");
}

#[test]
fn metrics_scale_with_size() {
    let Some(bytes) = system_font_bytes() else {
        return;
    };
    let mut small = ParleyFace::new(bytes.clone(), 16.0).unwrap();
    let mut large = ParleyFace::new(bytes, 48.0).unwrap();
    assert!(!small.family_name().is_empty());
    assert!(small.ascent() > 0.0 && small.descent() >= 0.0);
    assert!(large.line_height() > small.line_height());

    let s = small.measure("Hello world");
    let l = large.measure("Hello world");
    assert!(s.width > 0);
    assert!(l.width > s.width * 2);
    assert_eq!(s.height, small.line_height());
    assert_eq!(small.measure("").width, 0);
}

#[test]
fn advance_is_positive_for_letters() {
    let Some(bytes) = system_font_bytes() else {
        return;
    };
    let mut face = ParleyFace::new(bytes, 32.0).unwrap();
    assert!(face.advance('W') > face.advance('i'));
    assert!(face.advance(' ') > 0);
}

#[test]
fn draw_paints_inside_the_line_box_only() {
    let Some(bytes) = system_font_bytes() else {
        return;
    };
    let mut face = ParleyFace::new(bytes, 32.0).unwrap();
    let mut buf = PixelBuffer::new(200, 80);
    let baseline = 10 + face.ascent_px();
    face.draw(&mut buf, "Hi", 20, baseline, Rgba8::WHITE);
    let right = 20 + face.measure("Hi").width + 2;
    let bottom = 10 + face.line_height() + 2;

    let mut painted = 0;
    for y in 0..80 {
        for x in 0..200 {
            let Some(px) = buf.get(x, y) else { continue };
            if px.a > 0 {
                painted += 1;
                assert!(x >= 18 && x < right, "x={x}");
                assert!(y >= 8 && y <= bottom, "y={y}");
            }
        }
    }
    assert!(painted > 50);
}
