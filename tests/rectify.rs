use doc_scanner::homography::{project_point, quad_homography};
use doc_scanner::image::RgbImageU8;
use doc_scanner::types::{CornerSet, Point};
use doc_scanner::warp::warp_to_rectangle;

/// Smooth test pattern in rectangle (u, v) space; linear, so bilinear
/// resampling reproduces it almost exactly.
fn pattern(u: f32, v: f32) -> f32 {
    (20.0 + 0.8 * u + 0.5 * v).clamp(0.0, 255.0)
}

fn gray(v: f32) -> [u8; 3] {
    let v = v.round().clamp(0.0, 255.0) as u8;
    [v, v, v]
}

/// Assert the rectified buffer matches the pattern at rectangle coordinates,
/// skipping a small border where interpolation mixes in background.
fn assert_matches_pattern(out: &RgbImageU8, rect_w: f32, rect_h: f32, tolerance: f32) {
    let (w, h) = (out.width(), out.height());
    let su = rect_w / (w - 1) as f32;
    let sv = rect_h / (h - 1) as f32;
    for y in 2..h - 2 {
        for x in 2..w - 2 {
            let expected = pattern(x as f32 * su, y as f32 * sv);
            let got = out.get(x, y)[0] as f32;
            assert!(
                (got - expected).abs() <= tolerance,
                "({x},{y}): got {got}, expected {expected:.1}"
            );
        }
    }
}

#[test]
fn rigidly_rotated_rectangle_round_trips() {
    // 200x150 pattern rotated by the 3-4-5 angle and translated; side
    // lengths are preserved, so the target must be 199x149 give or take
    // floating-point rounding before the floor.
    let (rect_w, rect_h) = (199.0f32, 149.0f32);
    let (c, s) = (0.8f32, 0.6f32);
    let (tx, ty) = (120.0f32, 40.0f32);
    let to_src = |u: f32, v: f32| (tx + c * u - s * v, ty + s * u + c * v);
    let to_rect = |x: f32, y: f32| {
        let (dx, dy) = (x - tx, y - ty);
        (c * dx + s * dy, -s * dx + c * dy)
    };

    let mut src = RgbImageU8::zeros(420, 360);
    for y in 0..360 {
        for x in 0..420 {
            let (u, v) = to_rect(x as f32, y as f32);
            src.set(x, y, gray(pattern(u, v)));
        }
    }

    let corner = |u: f32, v: f32| {
        let (x, y) = to_src(u, v);
        Point::new(x, y)
    };
    let corners = CornerSet {
        top_left: corner(0.0, 0.0),
        top_right: corner(rect_w, 0.0),
        bottom_right: corner(rect_w, rect_h),
        bottom_left: corner(0.0, rect_h),
    };

    let out = warp_to_rectangle(&src.as_view(), &corners).expect("well-posed quad");
    assert!(
        (198..=200).contains(&out.width()) && (148..=150).contains(&out.height()),
        "rigid motion must preserve the rectangle size, got {}x{}",
        out.width(),
        out.height()
    );
    assert_matches_pattern(&out, rect_w, rect_h, 2.0);
}

#[test]
fn perspective_embedded_rectangle_round_trips() {
    // Embed the pattern through a genuine projective map (opposing sides of
    // the quad are neither parallel nor equal) and recover it.
    let (rect_w, rect_h) = (199.0f64, 149.0f64);
    let quad = [[60.0, 50.0], [420.0, 90.0], [380.0, 430.0], [100.0, 390.0]];
    let rect = [[0.0, 0.0], [rect_w, 0.0], [rect_w, rect_h], [0.0, rect_h]];

    let embed = quad_homography(&rect, &quad).expect("well posed");
    let unembed = embed.try_inverse().expect("invertible");

    let mut src = RgbImageU8::zeros(480, 480);
    for y in 0..480 {
        for x in 0..480 {
            // Pixels past the horizon line (far outside the quad) stay black;
            // the warp never samples them.
            let px = match project_point(&unembed, x as f64, y as f64) {
                Some((u, v)) => gray(pattern(u as f32, v as f32)),
                None => [0, 0, 0],
            };
            src.set(x, y, px);
        }
    }

    let corners = CornerSet {
        top_left: Point::new(60.0, 50.0),
        top_right: Point::new(420.0, 90.0),
        bottom_right: Point::new(380.0, 430.0),
        bottom_left: Point::new(100.0, 390.0),
    };
    let out = warp_to_rectangle(&src.as_view(), &corners).expect("well-posed quad");

    // Target size follows the quad's own side lengths, not the pattern's.
    let expect_w = corners
        .top_left
        .distance(&corners.top_right)
        .max(corners.bottom_left.distance(&corners.bottom_right))
        .floor() as usize;
    let expect_h = corners
        .top_left
        .distance(&corners.bottom_left)
        .max(corners.top_right.distance(&corners.bottom_right))
        .floor() as usize;
    assert_eq!((out.width(), out.height()), (expect_w, expect_h));

    assert_matches_pattern(&out, rect_w as f32, rect_h as f32, 3.0);
}
