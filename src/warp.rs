//! Perspective rectification: map the detected sheet onto an axis-aligned
//! rectangle of its own dimensions.
//!
//! The output size comes from the quad itself (longer of each pair of
//! opposing sides), so a sheet photographed at an angle is stretched back to
//! its full extent rather than to some fixed paper format. Sampling is
//! inverse-mapped: the forward homography is solved once, inverted, and every
//! output pixel pulls a bilinear sample from the source; pixels that land
//! outside stay black.
use crate::corners::order_corners;
use crate::error::ScanError;
use crate::homography::{project_point, quad_homography};
use crate::image::{ImageRgb8, RgbImageU8};
use crate::types::{CornerSet, QuadCandidate};

/// Rectified dimensions: the longer of each pair of opposing sides, floored.
pub fn target_size(corners: &CornerSet) -> (usize, usize) {
    let top = corners.top_left.distance(&corners.top_right);
    let bottom = corners.bottom_left.distance(&corners.bottom_right);
    let left = corners.top_left.distance(&corners.bottom_left);
    let right = corners.top_right.distance(&corners.bottom_right);
    let width = top.max(bottom).floor() as usize;
    let height = left.max(right).floor() as usize;
    (width, height)
}

/// Order, scale, and warp in one step: takes the quad in working-resolution
/// coordinates and the ratio mapping them onto `image`.
pub fn rectify(
    image: &ImageRgb8,
    quad: &QuadCandidate,
    scale_ratio: f32,
) -> Result<RgbImageU8, ScanError> {
    let corners = order_corners(&quad.corners).scaled(scale_ratio);
    warp_to_rectangle(image, &corners)
}

/// Warp the quad spanned by `corners` (in `image` coordinates) onto an
/// axis-aligned rectangle.
pub fn warp_to_rectangle(image: &ImageRgb8, corners: &CornerSet) -> Result<RgbImageU8, ScanError> {
    if image.w == 0 || image.h == 0 {
        return Err(ScanError::EmptyInput {
            width: image.w,
            height: image.h,
        });
    }
    let (width, height) = target_size(corners);
    if width == 0 || height == 0 {
        return Err(ScanError::DegenerateGeometry { width, height });
    }

    let src = corners.as_array().map(|p| [p.x as f64, p.y as f64]);
    let dst = [
        [0.0, 0.0],
        [(width - 1) as f64, 0.0],
        [(width - 1) as f64, (height - 1) as f64],
        [0.0, (height - 1) as f64],
    ];
    let inverse = quad_homography(&src, &dst)
        .and_then(|h| h.try_inverse())
        .ok_or(ScanError::DegenerateGeometry { width, height })?;

    let mut out = RgbImageU8::zeros(width, height);
    for y in 0..height {
        for x in 0..width {
            if let Some((sx, sy)) = project_point(&inverse, x as f64, y as f64) {
                out.set(x, y, sample_or_black(image, sx as f32, sy as f32));
            }
        }
    }
    Ok(out)
}

/// Bilinear sample; anything outside the source raster is black.
fn sample_or_black(src: &ImageRgb8, x: f32, y: f32) -> [u8; 3] {
    if x < 0.0 || y < 0.0 || x > (src.w - 1) as f32 || y > (src.h - 1) as f32 {
        return [0, 0, 0];
    }
    let x0 = x.floor() as usize;
    let y0 = y.floor() as usize;
    let x1 = (x0 + 1).min(src.w - 1);
    let y1 = (y0 + 1).min(src.h - 1);
    let fx = x - x0 as f32;
    let fy = y - y0 as f32;

    let p00 = src.get(x0, y0);
    let p10 = src.get(x1, y0);
    let p01 = src.get(x0, y1);
    let p11 = src.get(x1, y1);

    let mut px = [0u8; 3];
    for c in 0..3 {
        let top = p00[c] as f32 * (1.0 - fx) + p10[c] as f32 * fx;
        let bottom = p01[c] as f32 * (1.0 - fx) + p11[c] as f32 * fx;
        px[c] = (top * (1.0 - fy) + bottom * fy).round().clamp(0.0, 255.0) as u8;
    }
    px
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;

    fn corner_set(tl: (f32, f32), tr: (f32, f32), br: (f32, f32), bl: (f32, f32)) -> CornerSet {
        CornerSet {
            top_left: Point::new(tl.0, tl.1),
            top_right: Point::new(tr.0, tr.1),
            bottom_right: Point::new(br.0, br.1),
            bottom_left: Point::new(bl.0, bl.1),
        }
    }

    #[test]
    fn target_size_takes_the_longer_opposing_sides() {
        let corners = corner_set((0.0, 0.0), (200.0, 10.0), (195.0, 140.0), (0.0, 120.0));
        let (w, h) = target_size(&corners);
        // top ~200.25, bottom ~196.0, left 120, right ~130.1
        assert_eq!(w, 200);
        assert_eq!(h, 130);
    }

    #[test]
    fn axis_aligned_crop_reproduces_the_source_pattern() {
        // Luma-linear pattern: bilinear sampling reproduces it exactly.
        let mut src = RgbImageU8::zeros(60, 60);
        for y in 0..60 {
            for x in 0..60 {
                let v = (x + 2 * y) as u8;
                src.set(x, y, [v, v, v]);
            }
        }
        let corners = corner_set((10.0, 10.0), (39.0, 10.0), (39.0, 29.0), (10.0, 29.0));
        let out = warp_to_rectangle(&src.as_view(), &corners).expect("valid quad");
        assert_eq!((out.width(), out.height()), (29, 19));
        for y in 0..out.height() {
            for x in 0..out.width() {
                // Where this output pixel samples the source.
                let sx = 10.0 + x as f32 * 29.0 / 28.0;
                let sy = 10.0 + y as f32 * 19.0 / 18.0;
                let expected = sx + 2.0 * sy;
                let got = out.get(x, y)[0] as f32;
                assert!(
                    (got - expected).abs() <= 1.0,
                    "({x},{y}): got {got}, expected {expected}"
                );
            }
        }
    }

    #[test]
    fn quad_outside_the_image_fills_black() {
        let src = RgbImageU8::filled(50, 50, [200, 200, 200]);
        // Entirely to the right of the raster.
        let corners = corner_set((100.0, 0.0), (140.0, 0.0), (140.0, 30.0), (100.0, 30.0));
        let out = warp_to_rectangle(&src.as_view(), &corners).expect("valid quad");
        assert!(out.pixels().iter().all(|px| *px == [0, 0, 0]));
    }

    #[test]
    fn coincident_corners_are_degenerate() {
        let src = RgbImageU8::filled(10, 10, [1, 2, 3]);
        let p = (4.0, 4.0);
        let err = warp_to_rectangle(&src.as_view(), &corner_set(p, p, p, p))
            .expect_err("zero-size target");
        assert_eq!(err, ScanError::DegenerateGeometry { width: 0, height: 0 });
    }

    #[test]
    fn repeated_corner_is_degenerate() {
        let src = RgbImageU8::filled(100, 100, [9, 9, 9]);
        // tl and bl coincide: the target has size but the mapping is singular.
        let corners = corner_set((10.0, 10.0), (60.0, 10.0), (60.0, 40.0), (10.0, 10.0));
        let err = warp_to_rectangle(&src.as_view(), &corners).expect_err("singular mapping");
        assert_eq!(err, ScanError::DegenerateGeometry { width: 58, height: 30 });
    }

    #[test]
    fn empty_source_image_is_rejected() {
        let src = ImageRgb8 {
            w: 0,
            h: 0,
            stride: 0,
            data: &[],
        };
        let quad = QuadCandidate {
            corners: [
                Point::new(10.0, 10.0),
                Point::new(60.0, 10.0),
                Point::new(60.0, 50.0),
                Point::new(10.0, 50.0),
            ],
            area: 2000.0,
        };
        let err = rectify(&src, &quad, 1.0).expect_err("no pixels to sample");
        assert_eq!(err, ScanError::EmptyInput { width: 0, height: 0 });
    }

    #[test]
    fn rectify_scales_the_quad_before_warping() {
        let src = RgbImageU8::filled(120, 100, [60, 70, 80]);
        let quad = QuadCandidate {
            corners: [
                Point::new(0.0, 0.0),
                Point::new(50.0, 0.0),
                Point::new(50.0, 40.0),
                Point::new(0.0, 40.0),
            ],
            area: 2000.0,
        };
        let out = rectify(&src.as_view(), &quad, 2.0).expect("valid quad");
        assert_eq!((out.width(), out.height()), (100, 80));
        assert_eq!(out.get(50, 40), [60, 70, 80]);
    }
}
