use doc_scanner::image::RgbImageU8;

/// Paints a filled convex quad over a uniform background.
///
/// A pixel takes the foreground color when its center lies inside the
/// polygon (even-odd rule), so edges land within one pixel of the given
/// corner coordinates.
pub fn filled_quad_rgb(
    width: usize,
    height: usize,
    corners: &[(f32, f32); 4],
    background: [u8; 3],
    foreground: [u8; 3],
) -> RgbImageU8 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");

    let mut img = RgbImageU8::filled(width, height, background);
    for y in 0..height {
        for x in 0..width {
            if inside_quad(x as f32, y as f32, corners) {
                img.set(x, y, foreground);
            }
        }
    }
    img
}

fn inside_quad(px: f32, py: f32, corners: &[(f32, f32); 4]) -> bool {
    let mut inside = false;
    let mut j = 3;
    for i in 0..4 {
        let (ax, ay) = corners[i];
        let (bx, by) = corners[j];
        if (ay > py) != (by > py) {
            let t = (py - ay) / (by - ay);
            if px < ax + t * (bx - ax) {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
