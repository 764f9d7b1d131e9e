//! Downscale to the working width and record the scale ratio.
//!
//! Detection runs on a small working copy; only the scale ratio carries its
//! geometry back to the full-resolution image. The ratio is defined as
//! `original_height / working_height`, matching how corner points are mapped
//! before rectification.
use crate::image::{ImageRgb8, ImageViewMut, RgbImageU8};

/// Resize `src` to `target_width`, preserving aspect ratio.
///
/// Returns the working image and the scale ratio. Bilinear sampling with
/// pixel-center alignment; the working height is never rounded below 1.
pub fn resize_to_width(src: &ImageRgb8, target_width: usize) -> (RgbImageU8, f32) {
    debug_assert!(src.w > 0 && src.h > 0, "empty inputs are rejected upstream");
    let target_width = target_width.max(1);
    let scale = src.w as f32 / target_width as f32;
    let target_height = ((src.h as f32 / scale).round() as usize).max(1);

    let mut out = RgbImageU8::zeros(target_width, target_height);
    let sx = src.w as f32 / target_width as f32;
    let sy = src.h as f32 / target_height as f32;
    for (y, dst_row) in out.rows_mut().enumerate() {
        let src_y = (y as f32 + 0.5) * sy - 0.5;
        for (x, dst) in dst_row.iter_mut().enumerate() {
            let src_x = (x as f32 + 0.5) * sx - 0.5;
            *dst = sample_clamped(src, src_x, src_y);
        }
    }

    let ratio = src.h as f32 / target_height as f32;
    (out, ratio)
}

fn sample_clamped(src: &ImageRgb8, x: f32, y: f32) -> [u8; 3] {
    let max_x = (src.w - 1) as f32;
    let max_y = (src.h - 1) as f32;
    let x = x.clamp(0.0, max_x);
    let y = y.clamp(0.0, max_y);
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
