use super::timing::TimingBreakdown;
use crate::detector::CannyParams;
use serde::{Deserialize, Serialize};

/// Summary of one detector run, suitable for JSON output.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CannyReport {
    pub width: usize,
    pub height: usize,
    pub params: CannyParams,
    /// Cells with a non-zero magnitude after suppression.
    pub nms_survivors: usize,
    pub strong_count: usize,
    pub weak_count: usize,
    /// Cells marked in the final mask.
    pub edge_count: usize,
    pub timings: TimingBreakdown,
}

impl CannyReport {
    /// Weak cells that hysteresis linked into the mask.
    pub fn linked_weak_count(&self) -> usize {
        self.edge_count.saturating_sub(self.strong_count)
    }
}
