use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::options::{DEFAULT_THRESHOLD_BIAS, DEFAULT_THRESHOLD_WINDOW};

#[derive(Debug, Deserialize)]
pub struct WarpToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    /// Four corner points in input-image coordinates, any order.
    pub corners: [[f32; 2]; 4],
    #[serde(default)]
    pub binarize: BinarizeConfig,
    pub output: WarpOutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BinarizeConfig {
    pub threshold_window: usize,
    pub threshold_bias: f32,
}

impl Default for BinarizeConfig {
    fn default() -> Self {
        Self {
            threshold_window: DEFAULT_THRESHOLD_WINDOW,
            threshold_bias: DEFAULT_THRESHOLD_BIAS,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct WarpOutputConfig {
    #[serde(rename = "rectified_image")]
    pub rectified_image: PathBuf,
    /// When set, the rectified page is additionally binarized and saved here.
    #[serde(default, rename = "document_image")]
    pub document_image: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<WarpToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
