//! Quantization of gradient angles into four suppression directions.
//!
//! The angle is scaled by `5/π`, rounded half-to-even, shifted by 5 and
//! reduced modulo 5, which yields a step in `0..=4`. Step 4 is then folded
//! onto step 0 with a final `mod 4`. Angles `0` and `π` therefore land in the
//! same bucket: orientation is treated as undirected.
//!
//! The resulting bucket selects which pair of 3×3 neighbours non-maximum
//! suppression compares against.
use crate::image::{Grid, SampleGrid};
use serde::Serialize;
use std::f32::consts::PI;

/// One of four discrete orientations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum DirectionBucket {
    /// E-W
    #[default]
    Horizontal = 0,
    /// NE-SW
    Diagonal = 1,
    /// N-S
    Vertical = 2,
    /// NW-SE
    AntiDiagonal = 3,
}

impl DirectionBucket {
    /// Bucket for an integer step; steps wrap modulo 4.
    #[inline]
    pub fn from_step(step: u8) -> Self {
        match step % 4 {
            0 => DirectionBucket::Horizontal,
            1 => DirectionBucket::Diagonal,
            2 => DirectionBucket::Vertical,
            _ => DirectionBucket::AntiDiagonal,
        }
    }

    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// `(d_row, d_col)` offsets of the two cells compared during suppression.
    #[inline]
    pub fn neighbor_offsets(self) -> [(isize, isize); 2] {
        match self {
            DirectionBucket::Horizontal => [(0, -1), (0, 1)],
            DirectionBucket::Diagonal => [(-1, 1), (1, -1)],
            DirectionBucket::Vertical => [(-1, 0), (1, 0)],
            DirectionBucket::AntiDiagonal => [(-1, -1), (1, 1)],
        }
    }
}

/// Grid of per-cell direction buckets.
pub type DirectionGrid = Grid<DirectionBucket>;

/// Quantize a single angle in radians.
#[inline]
pub fn quantize_angle(angle: f32) -> DirectionBucket {
    bucket_for_scaled(angle * (5.0 / PI))
}

#[inline]
fn bucket_for_scaled(scaled: f32) -> DirectionBucket {
    let step = (scaled.round_ties_even() + 5.0).rem_euclid(5.0);
    DirectionBucket::from_step(step as u8)
}

/// Quantize every cell of an angle grid.
pub fn quantize(angle: &SampleGrid) -> DirectionGrid {
    Grid::build_rows(
        angle.width(),
        angle.height(),
        DirectionBucket::Horizontal,
        |y, out| {
            for (dst, &a) in out.iter_mut().zip(angle.row(y)) {
                *dst = quantize_angle(a);
            }
        },
    )
}
