use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::options::ScanOptions;

#[derive(Debug, Deserialize)]
pub struct ScanToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    /// Pipeline options; omitted fields keep the classic defaults.
    #[serde(default)]
    pub options: ScanOptions,
    pub output: ScanOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct ScanOutputConfig {
    /// Working-resolution copy with the detected outline drawn in.
    #[serde(rename = "outline_image")]
    pub outline_image: PathBuf,
    /// Rectified, binarized page.
    #[serde(rename = "document_image")]
    pub document_image: PathBuf,
    /// Optional JSON run summary (corners, scale ratio, timings).
    #[serde(default, rename = "summary_json")]
    pub summary_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<ScanToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
