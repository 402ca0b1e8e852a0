use crate::detector::CannyParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// JSON configuration consumed by the `canny_edges` tool.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeToolConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub detector: CannyParams,
    pub output: EdgeOutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeOutputConfig {
    /// Black/white rendering of the edge mask.
    pub edges_image: PathBuf,
    /// Optional JSON report with counts and stage timings.
    #[serde(default)]
    pub report_json: Option<PathBuf>,
    /// Optional dump of the blurred input.
    #[serde(default)]
    pub blurred_image: Option<PathBuf>,
    /// Optional dump of the gradient magnitude, scaled to its maximum.
    #[serde(default)]
    pub magnitude_image: Option<PathBuf>,
}

pub fn parse_config(json: &str) -> Result<EdgeToolConfig, String> {
    serde_json::from_str(json).map_err(|e| format!("Failed to parse config: {e}"))
}

pub fn load_config(path: &Path) -> Result<EdgeToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("{}: {e}", path.display()))
}
