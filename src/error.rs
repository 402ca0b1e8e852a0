//! Typed failures surfaced by the edge detector.
//!
//! Every variant is a parameter or shape problem detected before any stage
//! runs. Once validation passes the pipeline is total and cannot fail.
use thiserror::Error;

/// Reasons why a detection request is rejected.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum CannyError {
    /// The grid is smaller than 3×3 in at least one axis.
    #[error("grid must be at least 3x3, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// Thresholds are negative, non-finite, or `high < low`.
    #[error("invalid thresholds: need high >= low >= 0, got low={low} high={high}")]
    InvalidThreshold { low: f32, high: f32 },
    /// Sigma is negative or non-finite.
    #[error("invalid sigma {sigma}: must be finite and >= 0")]
    InvalidSigma { sigma: f32 },
    /// A backing buffer does not match `width * height`.
    #[error("shape mismatch: expected {expected} cells, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
}
