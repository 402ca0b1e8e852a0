//! Double-threshold classification of suppressed magnitudes.
//!
//! - `STRONG` iff `value > high`
//! - `WEAK` iff `low < value <= high`
//! - `NONE` otherwise
use crate::error::CannyError;
use crate::image::{Grid, SampleGrid};
use serde::Serialize;

/// Per-cell edge strength class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum EdgeClass {
    #[default]
    None = 0,
    Weak = 1,
    Strong = 2,
}

pub type ClassGrid = Grid<EdgeClass>;

/// Validated `(low, high)` pair with `high >= low >= 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Thresholds {
    low: f32,
    high: f32,
}

impl Thresholds {
    pub fn new(low: f32, high: f32) -> Result<Self, CannyError> {
        let valid = low.is_finite() && high.is_finite() && low >= 0.0 && high >= low;
        if !valid {
            return Err(CannyError::InvalidThreshold { low, high });
        }
        Ok(Self { low, high })
    }

    pub fn low(&self) -> f32 {
        self.low
    }

    pub fn high(&self) -> f32 {
        self.high
    }

    #[inline]
    pub fn classify_value(&self, v: f32) -> EdgeClass {
        if v > self.high {
            EdgeClass::Strong
        } else if v > self.low {
            EdgeClass::Weak
        } else {
            EdgeClass::None
        }
    }
}

/// Classify every cell of `suppressed` against `low` and `high`.
pub fn classify(suppressed: &SampleGrid, low: f32, high: f32) -> Result<ClassGrid, CannyError> {
    let thresholds = Thresholds::new(low, high)?;
    Ok(classify_with(suppressed, &thresholds))
}

/// Classify with already validated thresholds.
pub fn classify_with(suppressed: &SampleGrid, thresholds: &Thresholds) -> ClassGrid {
    Grid::build_rows(
        suppressed.width(),
        suppressed.height(),
        EdgeClass::None,
        |y, out| {
            for (dst, &v) in out.iter_mut().zip(suppressed.row(y)) {
                *dst = thresholds.classify_value(v);
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::{classify, EdgeClass, Thresholds};
    use crate::error::CannyError;
    use crate::image::SampleGrid;

    #[test]
    fn boundaries_are_exclusive_below() {
        let t = Thresholds::new(10.0, 50.0).expect("ordered thresholds");
        assert_eq!(t.classify_value(0.0), EdgeClass::None);
        assert_eq!(t.classify_value(10.0), EdgeClass::None);
        assert_eq!(t.classify_value(10.5), EdgeClass::Weak);
        assert_eq!(t.classify_value(50.0), EdgeClass::Weak);
        assert_eq!(t.classify_value(50.01), EdgeClass::Strong);
    }

    #[test]
    fn rejects_inverted_or_negative_thresholds() {
        assert_eq!(
            Thresholds::new(20.0, 10.0),
            Err(CannyError::InvalidThreshold {
                low: 20.0,
                high: 10.0
            })
        );
        assert!(Thresholds::new(-1.0, 10.0).is_err());
        assert!(Thresholds::new(1.0, f32::NAN).is_err());
        assert!(Thresholds::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn equal_thresholds_leave_no_weak_cells() {
        let values: Vec<f32> = (0..25).map(|i| (i * 3) as f32).collect();
        let grid = SampleGrid::from_vec(5, 5, values.clone()).expect("valid shape");
        let classes = classify(&grid, 30.0, 30.0).expect("valid thresholds");

        assert_eq!(classes.count_where(|&c| c == EdgeClass::Weak), 0);
        for (&v, &c) in values.iter().zip(classes.data()) {
            assert_eq!(c == EdgeClass::Strong, v > 30.0);
        }
    }
}
