use super::*;

#[test]
fn xor_pixel_matches_formula() {
    assert_eq!(xor_pixel(0, 0), Rgba8::opaque(0, 255, 0));
    assert_eq!(xor_pixel(1, 0), Rgba8::opaque(1, 254, 3));
    assert_eq!(xor_pixel(2, 2), Rgba8::opaque(6, 249, 18));
    assert_eq!(xor_pixel(100, 50), Rgba8::opaque(25, 230, 75));
    // v = 85 -> 3v = 255 wraps to 0 under mod 255.
    assert_eq!(xor_pixel(0, 57), Rgba8::opaque(85, 170, 0));
}

#[test]
fn xor_pattern_uses_pixel_function() {
    let buf = xor_pattern(12, 9);
    for y in 0..9 {
        for x in 0..12 {
            assert_eq!(buf.get(x as i32, y as i32), Some(xor_pixel(x, y)));
        }
    }
}

#[test]
fn radial_center_has_zero_distance_and_angle() {
    let buf = radial(10, 10);
    assert_eq!(buf.get(5, 5), Some(Rgba8::opaque(0, 255, 0)));
}

#[test]
fn radial_right_of_center_depends_only_on_distance() {
    // On the row through the center, the right side has angle 0.
    let buf = radial(40, 20);
    let px = buf.get(30, 10).unwrap();
    let dist = 10.0f64;
    assert_eq!(px.r, ((dist / 20.0).sin().abs() * 255.0) as u8);
    assert_eq!(px.g, ((dist / 30.0).cos().abs() * 255.0) as u8);
    assert_eq!(px.b, ((dist / 40.0).sin().abs() * 255.0) as u8);
}
