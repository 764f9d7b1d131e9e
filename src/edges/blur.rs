//! Separable binomial smoothing.
//!
//! Binomial taps approximate a Gaussian closely enough for edge suppression
//! and cost two cheap 1-D passes. Borders clamp (replicate). The 5-tap kernel
//! is the classic `[1 4 6 4 1] / 16`.
use crate::image::{ImageF32, ImageView, ImageViewMut};

/// Blur with an odd binomial kernel of `kernel_size` taps.
///
/// Even sizes round up to the next odd size; size 1 is a copy.
pub fn gaussian_blur(src: &ImageF32, kernel_size: usize) -> ImageF32 {
    let size = kernel_size.max(1) | 1;
    if size == 1 || src.w == 0 || src.h == 0 {
        return src.clone();
    }
    let taps = binomial_taps(size);
    let radius = size / 2;

    // Horizontal pass
    let mut tmp = ImageF32::new(src.w, src.h);
    for (y, dst_row) in tmp.rows_mut().enumerate() {
        let row = src.row(y);
        for (x, dst) in dst_row.iter_mut().enumerate() {
            let mut acc = 0.0;
            for (k, &t) in taps.iter().enumerate() {
                let xx = clamp_index(x as isize + k as isize - radius as isize, src.w);
                acc += t * row[xx];
            }
            *dst = acc;
        }
    }

    // Vertical pass
    let mut out = ImageF32::new(src.w, src.h);
    for y in 0..src.h {
        let rows: Vec<&[f32]> = (0..size)
            .map(|k| tmp.row(clamp_index(y as isize + k as isize - radius as isize, src.h)))
            .collect();
        let dst_row = out.row_mut(y);
        for (x, dst) in dst_row.iter_mut().enumerate() {
            let mut acc = 0.0;
            for (row, &t) in rows.iter().zip(taps.iter()) {
                acc += t * row[x];
            }
            *dst = acc;
        }
    }
    out
}

/// Normalized Pascal-triangle row of odd length `size`.
fn binomial_taps(size: usize) -> Vec<f32> {
    let mut taps = vec![1.0f64];
    for _ in 1..size {
        let mut next = vec![1.0f64; taps.len() + 1];
        for i in 1..taps.len() {
            next[i] = taps[i - 1] + taps[i];
        }
        taps = next;
    }
    let total: f64 = taps.iter().sum();
    taps.iter().map(|&t| (t / total) as f32).collect()
}

#[inline]
fn clamp_index(i: isize, len: usize) -> usize {
    i.clamp(0, len as isize - 1) as usize
}
