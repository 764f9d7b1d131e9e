//! Tunable surface of the pipeline.
//!
//! The defaults reproduce the classic fixed constants of the algorithm; they
//! are lifted into named fields so individual stages stay testable in
//! isolation. All fields deserialize with per-field defaults, so a JSON
//! config may override any subset.
use serde::Deserialize;

/// Detection resolution: inputs are downscaled to this width.
pub const DEFAULT_WORKING_WIDTH: usize = 500;
/// Binomial smoothing kernel size (odd).
pub const DEFAULT_BLUR_KERNEL_SIZE: usize = 5;
/// Hysteresis linking threshold, in 8-bit Sobel magnitude units.
pub const DEFAULT_EDGE_LOW: f32 = 75.0;
/// Strong-edge seeding threshold, in 8-bit Sobel magnitude units.
pub const DEFAULT_EDGE_HIGH: f32 = 200.0;
/// Polygon approximation tolerance, percent of contour perimeter.
pub const DEFAULT_APPROX_TOLERANCE_PCT: f32 = 2.0;
/// Adaptive-threshold neighborhood size (odd).
pub const DEFAULT_THRESHOLD_WINDOW: usize = 251;
/// Bias subtracted from the local mean before comparison.
pub const DEFAULT_THRESHOLD_BIAS: f32 = 11.0;
/// How many area-ranked contours the quad selector examines.
pub const DEFAULT_MAX_CANDIDATES: usize = 5;

/// Pipeline configuration with the classic defaults.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScanOptions {
    /// Width of the working (detection) image in pixels.
    pub working_width: usize,
    /// Smoothing kernel size; even values round up to the next odd size.
    pub blur_kernel_size: usize,
    /// Lower hysteresis threshold for edge linking.
    pub edge_low: f32,
    /// Upper hysteresis threshold for strong-edge seeding.
    pub edge_high: f32,
    /// Douglas-Peucker tolerance as a percentage of the contour perimeter.
    pub approx_tolerance_pct: f32,
    /// Adaptive-threshold window; even values round up to the next odd size.
    pub threshold_window: usize,
    /// Constant subtracted from the local mean in the binarizer.
    pub threshold_bias: f32,
    /// Area-ranked candidate cutoff of the quad selector. The classic value
    /// of 5 assumes the document dominates the scene; widen it when smaller
    /// documents share the frame with larger shapes.
    pub max_candidates: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            working_width: DEFAULT_WORKING_WIDTH,
            blur_kernel_size: DEFAULT_BLUR_KERNEL_SIZE,
            edge_low: DEFAULT_EDGE_LOW,
            edge_high: DEFAULT_EDGE_HIGH,
            approx_tolerance_pct: DEFAULT_APPROX_TOLERANCE_PCT,
            threshold_window: DEFAULT_THRESHOLD_WINDOW,
            threshold_bias: DEFAULT_THRESHOLD_BIAS,
            max_candidates: DEFAULT_MAX_CANDIDATES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_constants() {
        let opts = ScanOptions::default();
        assert_eq!(opts.working_width, 500);
        assert_eq!(opts.blur_kernel_size, 5);
        assert_eq!(opts.edge_low, 75.0);
        assert_eq!(opts.edge_high, 200.0);
        assert_eq!(opts.approx_tolerance_pct, 2.0);
        assert_eq!(opts.threshold_window, 251);
        assert_eq!(opts.threshold_bias, 11.0);
        assert_eq!(opts.max_candidates, 5);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let opts: ScanOptions =
            serde_json::from_str(r#"{ "edge_low": 50.0, "max_candidates": 8 }"#)
                .expect("options should parse");
        assert_eq!(opts.edge_low, 50.0);
        assert_eq!(opts.max_candidates, 8);
        assert_eq!(opts.working_width, DEFAULT_WORKING_WIDTH);
        assert_eq!(opts.threshold_window, DEFAULT_THRESHOLD_WINDOW);
    }
}
