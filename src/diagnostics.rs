//! Run diagnostics: per-stage timings plus the counters that explain a
//! detection (or its failure) without rerunning the pipeline.
use serde::{Deserialize, Serialize};

/// Timing entry for a single pipeline stage.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            elapsed_ms,
        }
    }
}

/// Aggregated trace of one scan.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanTrace {
    pub input_width: usize,
    pub input_height: usize,
    pub working_width: usize,
    pub working_height: usize,
    pub scale_ratio: f32,
    /// Pixels surviving hysteresis in the working-resolution edge map.
    pub edge_pixels: usize,
    /// External contours handed to the quad selector.
    pub contour_count: usize,
    /// Contours within the candidate cutoff, i.e. the selector's pool size.
    pub candidates_examined: usize,
    /// Area of the chosen contour, squared working pixels; 0 when none.
    pub quad_area: f32,
    pub output_width: usize,
    pub output_height: usize,
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl ScanTrace {
    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.stages.push(StageTiming::new(label, elapsed_ms));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_serializes_with_camel_case_keys() {
        let mut trace = ScanTrace {
            input_width: 1000,
            input_height: 800,
            scale_ratio: 2.0,
            ..ScanTrace::default()
        };
        trace.push("resize", 1.25);
        let json = serde_json::to_string(&trace).expect("serializable");
        assert!(json.contains("\"inputWidth\":1000"));
        assert!(json.contains("\"scaleRatio\":2.0"));
        assert!(json.contains("\"elapsedMs\":1.25"));
    }
}
