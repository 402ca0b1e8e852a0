#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod image;

// Stage-level building blocks, usable on their own.
pub mod edges;

// --- High-level re-exports -------------------------------------------------

pub use crate::detector::{detect_edges, CannyDetector, CannyOutput, CannyParams};
pub use crate::diagnostics::{CannyReport, TimingBreakdown};
pub use crate::error::CannyError;
pub use crate::image::{EdgeMask, Grid, SampleGrid};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use canny_edge::prelude::*;
///
/// let mut rows = vec![vec![0.0f32; 9]; 9];
/// for row in rows.iter_mut().skip(1).take(7) {
///     row[4] = 255.0;
/// }
/// let grid = SampleGrid::from_rows(rows).expect("rectangular");
/// let mask = detect_edges(&grid, 0.0, 10.0, 50.0).expect("valid parameters");
/// assert!(mask.get(4, 3) && mask.get(4, 5));
/// assert!(!mask.get(4, 4));
/// ```
pub mod prelude {
    pub use crate::edges::{BorderMode, HysteresisStrategy};
    pub use crate::{detect_edges, CannyDetector, CannyError, CannyParams, EdgeMask, SampleGrid};
}
