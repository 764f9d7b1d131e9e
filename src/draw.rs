//! Minimal raster drawing for the detection overlay.
use crate::image::RgbImageU8;
use crate::types::Point;

/// Stroke the closed polygon `points` onto `image` with a square brush.
/// Segments falling outside the raster are clipped per pixel.
pub fn draw_closed_polyline(
    image: &mut RgbImageU8,
    points: &[Point],
    color: [u8; 3],
    thickness: usize,
) {
    match points {
        [] => {}
        [p] => stamp(image, p.x.round() as i64, p.y.round() as i64, color, thickness),
        _ => {
            for i in 0..points.len() {
                let a = points[i];
                let b = points[(i + 1) % points.len()];
                draw_segment(image, a, b, color, thickness);
            }
        }
    }
}

/// Bresenham line from `a` to `b`, stamped at `thickness`.
fn draw_segment(image: &mut RgbImageU8, a: Point, b: Point, color: [u8; 3], thickness: usize) {
    let mut x0 = a.x.round() as i64;
    let mut y0 = a.y.round() as i64;
    let x1 = b.x.round() as i64;
    let y1 = b.y.round() as i64;

    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        stamp(image, x0, y0, color, thickness);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

fn stamp(image: &mut RgbImageU8, cx: i64, cy: i64, color: [u8; 3], thickness: usize) {
    let t = thickness.max(1) as i64;
    let off = t / 2;
    for dy in 0..t {
        for dx in 0..t {
            let x = cx + dx - off;
            let y = cy + dy - off;
            if x >= 0 && y >= 0 && (x as usize) < image.width() && (y as usize) < image.height() {
                image.set(x as usize, y as usize, color);
            }
        }
    }
}
