//! Adaptive binarization of the rectified page.
//!
//! A global threshold fails under uneven lighting, so each pixel is compared
//! against the mean of its own neighborhood: white iff the pixel is brighter
//! than the local mean minus a small bias. The bias keeps flat background
//! regions (where pixel and mean coincide) from flickering into black. Local
//! means come from a summed-area table, so the cost is independent of the
//! window size.
use crate::error::ScanError;
use crate::image::{GrayImageU8, ImageRgb8};

pub const WHITE: u8 = 255;
pub const BLACK: u8 = 0;

/// Grayscale + adaptive mean threshold in one step.
pub fn binarize_document(
    image: &ImageRgb8,
    window: usize,
    bias: f32,
) -> Result<GrayImageU8, ScanError> {
    adaptive_mean_threshold(&image.to_luma_u8(), window, bias)
}

/// Binarize against the local box mean.
///
/// `window` is forced odd (rounded up). The image must be at least
/// `window` pixels in both dimensions; neighborhoods are clamped at the
/// borders rather than padded.
pub fn adaptive_mean_threshold(
    gray: &GrayImageU8,
    window: usize,
    bias: f32,
) -> Result<GrayImageU8, ScanError> {
    let window = window | 1;
    let (w, h) = (gray.width(), gray.height());
    if w == 0 || h == 0 {
        return Err(ScanError::EmptyInput {
            width: w,
            height: h,
        });
    }
    if w < window || h < window {
        return Err(ScanError::WindowTooLarge {
            width: w,
            height: h,
            window,
        });
    }

    let integral = integral_image(gray);
    let half = window / 2;
    let mut out = GrayImageU8::zeros(w, h);
    for y in 0..h {
        let y0 = y.saturating_sub(half);
        let y1 = (y + half).min(h - 1);
        for x in 0..w {
            let x0 = x.saturating_sub(half);
            let x1 = (x + half).min(w - 1);
            let sum = box_sum(&integral, w, x0, y0, x1, y1);
            let count = ((x1 - x0 + 1) * (y1 - y0 + 1)) as f32;
            let mean = sum as f32 / count;
            let px = gray.get(x, y) as f32;
            out.set(x, y, if px > mean - bias { WHITE } else { BLACK });
        }
    }
    Ok(out)
}

/// Summed-area table with a zero row and column, `(w + 1)`-stride.
fn integral_image(gray: &GrayImageU8) -> Vec<u64> {
    let (w, h) = (gray.width(), gray.height());
    let stride = w + 1;
    let mut table = vec![0u64; stride * (h + 1)];
    for y in 0..h {
        let mut row_sum = 0u64;
        for x in 0..w {
            row_sum += gray.get(x, y) as u64;
            table[(y + 1) * stride + (x + 1)] = table[y * stride + (x + 1)] + row_sum;
        }
    }
    table
}

/// Pixel sum over the inclusive box `[x0, x1] x [y0, y1]`.
#[inline]
fn box_sum(integral: &[u64], w: usize, x0: usize, y0: usize, x1: usize, y1: usize) -> u64 {
    let stride = w + 1;
    integral[(y1 + 1) * stride + (x1 + 1)] + integral[y0 * stride + x0]
        - integral[y0 * stride + (x1 + 1)]
        - integral[(y1 + 1) * stride + x0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_sums_match_direct_summation() {
        let gray = GrayImageU8::new(3, 2, vec![1, 2, 3, 4, 5, 6]);
        let integral = integral_image(&gray);
        assert_eq!(box_sum(&integral, 3, 0, 0, 2, 1), 21);
        assert_eq!(box_sum(&integral, 3, 1, 0, 2, 0), 5);
        assert_eq!(box_sum(&integral, 3, 1, 1, 2, 1), 11);
        assert_eq!(box_sum(&integral, 3, 0, 0, 0, 0), 1);
    }

    #[test]
    fn empty_image_is_rejected_as_empty_input() {
        let gray = GrayImageU8::zeros(0, 0);
        let err = adaptive_mean_threshold(&gray, 251, 11.0).expect_err("no pixels");
        assert_eq!(err, ScanError::EmptyInput { width: 0, height: 0 });
    }

    #[test]
    fn small_page_is_rejected() {
        let gray = GrayImageU8::zeros(100, 100);
        let err = adaptive_mean_threshold(&gray, 251, 11.0).expect_err("window exceeds image");
        assert_eq!(
            err,
            ScanError::WindowTooLarge {
                width: 100,
                height: 100,
                window: 251
            }
        );
    }

    #[test]
    fn even_window_is_rounded_up_before_the_size_check() {
        let gray = GrayImageU8::zeros(10, 10);
        // 10 -> 11, which no longer fits the 10px image.
        let err = adaptive_mean_threshold(&gray, 10, 5.0).expect_err("rounded window is 11");
        assert_eq!(
            err,
            ScanError::WindowTooLarge {
                width: 10,
                height: 10,
                window: 11
            }
        );
    }

    #[test]
    fn dark_block_on_bright_page_separates_cleanly() {
        let mut gray = GrayImageU8::zeros(260, 260);
        for y in 0..260 {
            for x in 0..260 {
                let in_block = (110..150).contains(&x) && (110..150).contains(&y);
                gray.set(x, y, if in_block { 20 } else { 200 });
            }
        }
        let out = adaptive_mean_threshold(&gray, 251, 11.0).expect("fits");
        for y in 0..260 {
            for x in 0..260 {
                let in_block = (110..150).contains(&x) && (110..150).contains(&y);
                let expected = if in_block { BLACK } else { WHITE };
                assert_eq!(out.get(x, y), expected, "pixel ({x},{y})");
            }
        }
    }

    #[test]
    fn gentle_illumination_gradient_stays_white() {
        let mut gray = GrayImageU8::zeros(260, 260);
        for y in 0..260 {
            for x in 0..260 {
                gray.set(x, y, (100 + x * 30 / 259) as u8);
            }
        }
        let out = adaptive_mean_threshold(&gray, 251, 11.0).expect("fits");
        assert!(out.pixels().iter().all(|&px| px == WHITE));
    }
}
