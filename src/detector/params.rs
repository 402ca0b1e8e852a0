//! Parameters configuring the edge pipeline.
//!
//! Defaults mirror the classic interactive tool settings: a unit Gaussian and
//! thresholds of 31/91 in 8-bit intensity units. Thresholds apply to Sobel
//! magnitudes, which for 0–255 inputs range up to roughly `4·255·√2`.

use crate::edges::{BorderMode, HysteresisStrategy, Thresholds};
use crate::error::CannyError;
use serde::{Deserialize, Serialize};

/// Detector-wide parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CannyParams {
    /// Gaussian standard deviation; `0` disables smoothing.
    pub sigma: f32,
    /// Lower hysteresis threshold (exclusive).
    pub low_threshold: f32,
    /// Upper hysteresis threshold (exclusive).
    pub high_threshold: f32,
    /// Padding used by both convolution stages.
    pub border: BorderMode,
    /// Traversal used to link weak cells.
    pub hysteresis: HysteresisStrategy,
}

impl Default for CannyParams {
    fn default() -> Self {
        Self {
            sigma: 1.0,
            low_threshold: 31.0,
            high_threshold: 91.0,
            border: BorderMode::Zero,
            hysteresis: HysteresisStrategy::Worklist,
        }
    }
}

impl CannyParams {
    pub fn new(sigma: f32, low_threshold: f32, high_threshold: f32) -> Self {
        Self {
            sigma,
            low_threshold,
            high_threshold,
            ..Self::default()
        }
    }

    pub fn with_border(mut self, border: BorderMode) -> Self {
        self.border = border;
        self
    }

    pub fn with_hysteresis(mut self, hysteresis: HysteresisStrategy) -> Self {
        self.hysteresis = hysteresis;
        self
    }

    /// Check sigma, then thresholds.
    pub fn validate(&self) -> Result<Thresholds, CannyError> {
        if !(self.sigma.is_finite() && self.sigma >= 0.0) {
            return Err(CannyError::InvalidSigma { sigma: self.sigma });
        }
        Thresholds::new(self.low_threshold, self.high_threshold)
    }
}
