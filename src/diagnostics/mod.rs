//! Diagnostics returned by the detector and written by the edge tool.
//!
//! `CannyReport` carries per-class cell counts and a `TimingBreakdown` with
//! one entry per pipeline stage.

pub mod report;
pub mod timing;

pub use report::CannyReport;
pub use timing::{StageTiming, TimingBreakdown};
