//! Canny detector orchestrating the edge stages over one sample grid.
//!
//! Overview
//! - Validates the grid shape (at least 3×3), sigma and thresholds before any
//!   stage runs. A failure aborts without producing a partial mask.
//! - Smooths with a Gaussian, differentiates with Sobel kernels, quantizes
//!   gradient angles, suppresses non-maxima, classifies against two
//!   thresholds, and links weak cells to strong ones by hysteresis.
//!
//! Modules
//! - [`params`] – configuration types used by the detector and the CLI.
//! - `pipeline` – the [`CannyDetector`] implementation.

pub mod params;
mod pipeline;

pub use params::CannyParams;
pub use pipeline::{CannyDetector, CannyOutput, MIN_GRID_SIDE};

use crate::error::CannyError;
use crate::image::{EdgeMask, SampleGrid};

/// Detect edges with the default border mode and worklist hysteresis.
///
/// Preconditions: `grid` is at least 3×3, `sigma >= 0`, and
/// `high_threshold >= low_threshold >= 0`.
pub fn detect_edges(
    grid: &SampleGrid,
    sigma: f32,
    low_threshold: f32,
    high_threshold: f32,
) -> Result<EdgeMask, CannyError> {
    CannyDetector::new(CannyParams::new(sigma, low_threshold, high_threshold)).detect(grid)
}
