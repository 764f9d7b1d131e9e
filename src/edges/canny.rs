//! Canny-style edge map: non-maximum suppression plus hysteresis linking.
//!
//! NMS keeps a pixel only when its magnitude dominates the two neighbors
//! along the quantized gradient direction (4 buckets selected with the
//! tan 22.5° trick). Linking then seeds at strong pixels (`mag >= high`) and
//! grows through weak ones (`mag >= low`) over the 8-neighborhood with an
//! explicit stack, yielding a 0/255 edge map.
//!
//! The outermost 1-pixel frame is ignored to keep neighbor lookups branch
//! free; hysteresis cannot re-enter it.
use super::grad::{sobel_gradients, Grad};
use crate::image::{GrayImageU8, ImageF32, ImageView};

/// Value of an "on" pixel in the edge map.
pub const EDGE_ON: u8 = 255;

const TAN_22_5_DEG: f32 = 0.41421356237;

const NEIGH_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Detect edges on a blurred single-channel image.
///
/// `low`/`high` are hysteresis thresholds in 8-bit Sobel magnitude units.
pub fn detect_edges(l: &ImageF32, low: f32, high: f32) -> GrayImageU8 {
    let grad = sobel_gradients(l);
    let thin = suppress_non_maxima(&grad, low.min(high));
    link_edges(&thin, low, high)
}

/// Keep only direction-aligned local maxima with magnitude at least `floor`.
fn suppress_non_maxima(grad: &Grad, floor: f32) -> ImageF32 {
    let w = grad.mag.w;
    let h = grad.mag.h;
    let mut out = ImageF32::new(w, h);
    if w < 3 || h < 3 {
        return out;
    }

    for y in 1..h - 1 {
        let mag_prev = grad.mag.row(y - 1);
        let mag_row = grad.mag.row(y);
        let mag_next = grad.mag.row(y + 1);
        let gx_row = grad.gx.row(y);
        let gy_row = grad.gy.row(y);
        let start = y * w;

        for x in 1..w - 1 {
            let mag = mag_row[x];
            if mag < floor {
                continue;
            }

            let gx = gx_row[x];
            let gy = gy_row[x];
            let abs_gx = gx.abs();
            let abs_gy = gy.abs();
            let same_sign = (gx >= 0.0 && gy >= 0.0) || (gx <= 0.0 && gy <= 0.0);

            // neighbor1 is always the scan-earlier side.
            let (neighbor1, neighbor2) = if abs_gx >= abs_gy {
                if abs_gy <= abs_gx * TAN_22_5_DEG {
                    (mag_row[x - 1], mag_row[x + 1])
                } else if same_sign {
                    (mag_prev[x - 1], mag_next[x + 1])
                } else {
                    (mag_prev[x + 1], mag_next[x - 1])
                }
            } else if abs_gx <= abs_gy * TAN_22_5_DEG {
                (mag_prev[x], mag_next[x])
            } else if same_sign {
                (mag_prev[x - 1], mag_next[x + 1])
            } else {
                (mag_prev[x + 1], mag_next[x - 1])
            };

            // Plateau ties collapse to the first pixel in scan order.
            if mag > neighbor1 && mag >= neighbor2 {
                out.data[start + x] = mag;
            }
        }
    }
    out
}

/// Hysteresis: seed at strong responses, grow through weak ones.
fn link_edges(thin: &ImageF32, low: f32, high: f32) -> GrayImageU8 {
    let w = thin.w;
    let h = thin.h;
    let mut on = vec![0u8; w * h];
    let mut stack: Vec<usize> = Vec::with_capacity(256);

    for idx in 0..w * h {
        if on[idx] != 0 || thin.data[idx] < high {
            continue;
        }
        on[idx] = EDGE_ON;
        stack.push(idx);
        while let Some(i) = stack.pop() {
            let x = (i % w) as isize;
            let y = (i / w) as isize;
            for (dx, dy) in NEIGH_OFFSETS {
                let nx = x + dx;
                let ny = y + dy;
                if nx < 0 || ny < 0 || nx >= w as isize || ny >= h as isize {
                    continue;
                }
                let ni = ny as usize * w + nx as usize;
                if on[ni] == 0 && thin.data[ni] >= low {
                    on[ni] = EDGE_ON;
                    stack.push(ni);
                }
            }
        }
    }

    GrayImageU8::new(w, h, on)
}
