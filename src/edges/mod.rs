//! Edge extraction: the first pipeline stage.
//!
//! Turns a working-resolution grayscale image into a binary edge map in three
//! steps, each its own submodule:
//!
//! - [`blur`] – separable binomial smoothing to suppress noise edges.
//! - [`grad`] – 3×3 Sobel gradients with L1 magnitude.
//! - [`canny`] – non-maximum suppression and hysteresis linking.
//!
//! Design goals
//! - Favor clarity and cache-friendly row access over micro-optimizations.
//! - Handle borders by clamping indices (replicate).
//! - Keep magnitudes in 8-bit Sobel units so thresholds read conventionally.

pub mod blur;
pub mod canny;
pub mod grad;

pub use blur::gaussian_blur;
pub use canny::{detect_edges, EDGE_ON};
pub use grad::{sobel_gradients, Grad};

use crate::image::{GrayImageU8, ImageF32};

/// Run the full edge stage: blur, gradients, NMS, hysteresis.
pub fn edge_map(gray: &ImageF32, blur_kernel_size: usize, low: f32, high: f32) -> GrayImageU8 {
    let blurred = gaussian_blur(gray, blur_kernel_size);
    detect_edges(&blurred, low, high)
}
