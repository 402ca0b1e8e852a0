//! Non‑maximum suppression on gradient magnitude along quantized directions.
//!
//! For every interior cell the magnitude is compared against its two
//! neighbours along the cell's [`DirectionBucket`](super::DirectionBucket). The cell survives only if
//! it is strictly greater than both; a tie with either neighbour suppresses
//! it. The outermost one‑cell frame is always zeroed.
//!
//! Invariant: `suppressed[r][c] <= magnitude[r][c]`, with equality exactly on
//! surviving cells (and on cells whose magnitude was already zero).
use super::direction::DirectionGrid;
use crate::image::SampleGrid;

/// Thin `magnitude` to local maxima along `directions`.
pub fn suppress(magnitude: &SampleGrid, directions: &DirectionGrid) -> SampleGrid {
    debug_assert!(
        magnitude.same_shape(directions),
        "direction grid must match magnitude"
    );
    let w = magnitude.width();
    let h = magnitude.height();

    SampleGrid::build_rows(w, h, 0.0, |y, out| {
        if y == 0 || y + 1 >= h {
            return;
        }
        // rows y-1, y, y+1 indexed by d_row + 1
        let mag_rows = [magnitude.row(y - 1), magnitude.row(y), magnitude.row(y + 1)];
        let dir_row = directions.row(y);
        let at = |x: usize, (dr, dc): (isize, isize)| {
            mag_rows[(dr + 1) as usize][(x as isize + dc) as usize]
        };

        for x in 1..w.saturating_sub(1) {
            let mag = mag_rows[1][x];
            let [n1, n2] = dir_row[x].neighbor_offsets();
            let (neighbor1, neighbor2) = (at(x, n1), at(x, n2));

            if mag <= neighbor1 || mag <= neighbor2 {
                continue;
            }
            out[x] = mag;
        }
    })
}
