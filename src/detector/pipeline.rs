//! Detector pipeline driving Canny edge detection end-to-end.
//!
//! [`CannyDetector`] validates its inputs once, then runs the stages in
//! order. Every stage returns its whole output grid before the next stage
//! starts reading it.
//!
//! Typical usage:
//! ```
//! use canny_edge::{CannyDetector, CannyParams, SampleGrid};
//!
//! let grid = SampleGrid::zeros(16, 16);
//! let detector = CannyDetector::new(CannyParams::new(1.0, 10.0, 40.0));
//! let out = detector.run(&grid).expect("valid input");
//! assert_eq!(out.report.edge_count, 0);
//! ```
use super::params::CannyParams;
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{CannyReport, TimingBreakdown};
use crate::edges::{
    self, ClassGrid, DirectionGrid, EdgeClass, HysteresisTracker, Thresholds,
};
use crate::error::CannyError;
use crate::image::{EdgeMask, SampleGrid};
use log::debug;
use std::time::Instant;

/// Smallest supported extent along either axis.
pub const MIN_GRID_SIDE: usize = 3;

/// All intermediate grids of one run, plus the report.
#[derive(Clone, Debug)]
pub struct CannyOutput {
    pub blurred: SampleGrid,
    pub gx: SampleGrid,
    pub gy: SampleGrid,
    pub magnitude: SampleGrid,
    pub angle: SampleGrid,
    pub directions: DirectionGrid,
    pub suppressed: SampleGrid,
    pub classes: ClassGrid,
    pub mask: EdgeMask,
    pub report: CannyReport,
}

/// Canny edge detector over single-channel sample grids.
#[derive(Clone, Debug, Default)]
pub struct CannyDetector {
    params: CannyParams,
}

impl CannyDetector {
    pub fn new(params: CannyParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &CannyParams {
        &self.params
    }

    /// Run the pipeline and return only the edge mask.
    pub fn detect(&self, grid: &SampleGrid) -> Result<EdgeMask, CannyError> {
        self.run(grid).map(|out| out.mask)
    }

    /// Run the pipeline and keep every intermediate grid.
    pub fn run(&self, grid: &SampleGrid) -> Result<CannyOutput, CannyError> {
        let thresholds = validate(grid, &self.params)?;
        Ok(self.run_validated(grid, &thresholds))
    }

    fn run_validated(&self, grid: &SampleGrid, thresholds: &Thresholds) -> CannyOutput {
        let params = self.params;
        let (width, height) = (grid.width(), grid.height());
        debug!(
            "CannyDetector::run start w={} h={} sigma={} low={} high={}",
            width, height, params.sigma, params.low_threshold, params.high_threshold
        );
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();

        let blurred = timings.time("smooth", || edges::smooth(grid, params.sigma, params.border));
        let (gx, gy) = timings.time("gradients", || edges::gradients(&blurred, params.border));
        let (magnitude, angle) = timings.time("magnitude_angle", || {
            (edges::magnitude(&gx, &gy), edges::angle(&gx, &gy))
        });
        let directions = timings.time("quantize", || edges::quantize(&angle));
        let suppressed = timings.time("suppress", || edges::suppress(&magnitude, &directions));
        let classes = timings.time("classify", || edges::classify_with(&suppressed, thresholds));
        let mask = timings.time("hysteresis", || {
            HysteresisTracker::new(params.hysteresis).track(&classes)
        });
        timings.total_ms = elapsed_ms(total_start);

        let nms_survivors = suppressed.count_where(|&v| v > 0.0);
        let strong_count = classes.count_where(|&c| c == EdgeClass::Strong);
        let weak_count = classes.count_where(|&c| c == EdgeClass::Weak);
        let edge_count = mask.count_where(|&v| v);
        debug!(
            "CannyDetector::run done survivors={} strong={} weak={} edges={} total_ms={:.3}",
            nms_survivors, strong_count, weak_count, edge_count, timings.total_ms
        );

        let report = CannyReport {
            width,
            height,
            params,
            nms_survivors,
            strong_count,
            weak_count,
            edge_count,
            timings,
        };

        CannyOutput {
            blurred,
            gx,
            gy,
            magnitude,
            angle,
            directions,
            suppressed,
            classes,
            mask,
            report,
        }
    }
}

/// Check the grid shape, then sigma, then thresholds.
fn validate(grid: &SampleGrid, params: &CannyParams) -> Result<Thresholds, CannyError> {
    if grid.width() < MIN_GRID_SIDE || grid.height() < MIN_GRID_SIDE {
        return Err(CannyError::InvalidDimensions {
            width: grid.width(),
            height: grid.height(),
        });
    }
    params.validate()
}
