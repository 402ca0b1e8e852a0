//! Canny edge stages over single-channel sample grids.
//!
//! Each stage is a pure function that consumes the previous stage's fully
//! materialized grid and returns a new grid of the same shape:
//!
//! - [`smooth`] – Gaussian blur with a `ceil(3σ)` radius.
//! - [`grad`] – Sobel `gx`/`gy`, magnitude and angle.
//! - [`direction`] – angle quantization into four suppression buckets.
//! - [`nms`] – non‑maximum suppression with strict comparisons and a zeroed
//!   frame.
//! - [`threshold`] – `NONE`/`WEAK`/`STRONG` classification.
//! - [`hysteresis`] – 8‑connected linking of weak cells to strong ones.
//!
//! Border handling
//! - Convolutions read outside samples per [`BorderMode`] (zero by default).
//! - Suppression ignores the outermost frame entirely, so any bleed from the
//!   padding choice never reaches the mask.
//!
//! The per‑cell stages fill their output rows in parallel with the
//! `parallel` feature; results are identical either way.

pub mod border;
pub mod direction;
pub mod grad;
pub mod hysteresis;
pub mod nms;
pub mod smooth;
pub mod threshold;

pub use border::BorderMode;
pub use direction::{quantize, quantize_angle, DirectionBucket, DirectionGrid};
pub use grad::{angle, gradients, magnitude};
pub use hysteresis::{track_sweep, track_worklist, HysteresisStrategy, HysteresisTracker};
pub use nms::suppress;
pub use smooth::{smooth, GaussianKernel};
pub use threshold::{classify, classify_with, ClassGrid, EdgeClass, Thresholds};
