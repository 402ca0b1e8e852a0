//! Hysteresis edge linking over 8-connected neighbourhoods.
//!
//! The final mask is the reachability closure of `STRONG` cells through
//! `WEAK` cells: a cell is an edge iff it is strong, or it is weak and an
//! 8-connected path of weak cells joins it to some strong cell. `NONE` cells
//! never become edges.
//!
//! Two strategies produce the same mask:
//! - [`HysteresisStrategy::Worklist`] seeds a stack with every strong cell and
//!   pops until empty. A cell is accepted at the moment it is pushed, so each
//!   cell enters the stack at most once and the pass is `O(W·H)`.
//! - [`HysteresisStrategy::Sweep`] repeats a full-grid pass that accepts every
//!   weak cell touching a cell accepted in the previous pass, until the
//!   accepted count stops changing. Each pass only reads the previous mask, so
//!   rows of one pass can be computed in parallel.
use super::threshold::{ClassGrid, EdgeClass};
use crate::image::{EdgeMask, Grid};
use log::debug;
use serde::{Deserialize, Serialize};

/// Traversal discipline for hysteresis linking.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HysteresisStrategy {
    #[default]
    Worklist,
    Sweep,
}

/// Grows the edge mask from strong cells.
#[derive(Clone, Debug, Default)]
pub struct HysteresisTracker {
    strategy: HysteresisStrategy,
}

impl HysteresisTracker {
    pub fn new(strategy: HysteresisStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> HysteresisStrategy {
        self.strategy
    }

    pub fn track(&self, classes: &ClassGrid) -> EdgeMask {
        match self.strategy {
            HysteresisStrategy::Worklist => track_worklist(classes),
            HysteresisStrategy::Sweep => track_sweep(classes),
        }
    }
}

/// Link edges with an explicit stack of flat indices.
pub fn track_worklist(classes: &ClassGrid) -> EdgeMask {
    let w = classes.width();
    let h = classes.height();
    let mut mask = classes.map(|&c| c == EdgeClass::Strong);
    let mut stack: Vec<usize> = mask
        .data()
        .iter()
        .enumerate()
        .filter_map(|(idx, &on)| on.then_some(idx))
        .collect();
    let seeds = stack.len();

    let cls = classes.data();
    let accepted = mask.data_mut();
    while let Some(idx) = stack.pop() {
        let x = idx % w;
        let y = idx / w;

        let y0 = y.saturating_sub(1);
        let y1 = (y + 1).min(h - 1);
        let x0 = x.saturating_sub(1);
        let x1 = (x + 1).min(w - 1);

        for ny in y0..=y1 {
            for nx in x0..=x1 {
                let nidx = ny * w + nx;
                if !accepted[nidx] && cls[nidx] == EdgeClass::Weak {
                    accepted[nidx] = true;
                    stack.push(nidx);
                }
            }
        }
    }

    debug!(
        "hysteresis worklist: seeds={} edges={}",
        seeds,
        mask.count_where(|&v| v)
    );
    mask
}

/// Link edges by repeated full-grid sweeps until a fixed point.
pub fn track_sweep(classes: &ClassGrid) -> EdgeMask {
    let w = classes.width();
    let h = classes.height();
    let mut mask = classes.map(|&c| c == EdgeClass::Strong);
    let mut accepted = mask.count_where(|&v| v);
    let mut sweeps = 0usize;

    loop {
        sweeps += 1;
        let prev = &mask;
        let next = Grid::build_rows(w, h, false, |y, out| {
            let cls_row = classes.row(y);
            let prev_row = prev.row(y);
            for (x, dst) in out.iter_mut().enumerate() {
                *dst = prev_row[x]
                    || (cls_row[x] == EdgeClass::Weak && touches_accepted(prev, y, x));
            }
        });
        let next_accepted = next.count_where(|&v| v);
        mask = next;
        if next_accepted == accepted {
            break;
        }
        accepted = next_accepted;
    }

    debug!("hysteresis sweep: sweeps={} edges={}", sweeps, accepted);
    mask
}

#[inline]
fn touches_accepted(mask: &EdgeMask, y: usize, x: usize) -> bool {
    let h = mask.height();
    let w = mask.width();
    let y0 = y.saturating_sub(1);
    let y1 = (y + 1).min(h - 1);
    let x0 = x.saturating_sub(1);
    let x1 = (x + 1).min(w - 1);
    (y0..=y1).any(|ny| mask.row(ny)[x0..=x1].iter().any(|&v| v))
}

#[cfg(test)]
mod tests {
    use super::{track_sweep, track_worklist, HysteresisStrategy, HysteresisTracker};
    use crate::edges::threshold::{ClassGrid, EdgeClass};

    fn classes_from(rows: &[&str]) -> ClassGrid {
        let rows = rows
            .iter()
            .map(|r| {
                r.chars()
                    .map(|ch| match ch {
                        'S' => EdgeClass::Strong,
                        'w' => EdgeClass::Weak,
                        _ => EdgeClass::None,
                    })
                    .collect()
            })
            .collect();
        ClassGrid::from_rows(rows).expect("rectangular rows")
    }

    #[test]
    fn weak_chain_attached_to_strong_is_kept() {
        let classes = classes_from(&[".....", "w....", ".wS..", ".....", "....w"]);
        for strategy in [HysteresisStrategy::Worklist, HysteresisStrategy::Sweep] {
            let mask = HysteresisTracker::new(strategy).track(&classes);
            assert!(mask.get(2, 2), "{strategy:?}");
            assert!(mask.get(2, 1), "{strategy:?}");
            assert!(mask.get(1, 0), "{strategy:?}");
            assert!(!mask.get(4, 4), "{strategy:?}");
            assert_eq!(mask.count_where(|&v| v), 3, "{strategy:?}");
        }
    }

    #[test]
    fn none_cells_break_the_chain() {
        let classes = classes_from(&["S.w", "...", "..."]);
        let mask = track_worklist(&classes);
        assert!(mask.get(0, 0));
        assert!(!mask.get(0, 2));
    }

    #[test]
    fn diagonal_contact_counts_as_connected() {
        let classes = classes_from(&["S...", ".w..", "..w.", "...w"]);
        let mask = track_worklist(&classes);
        assert_eq!(mask.count_where(|&v| v), 4);
    }

    #[test]
    fn no_strong_cells_means_empty_mask() {
        let classes = classes_from(&["www", "www", "www"]);
        assert_eq!(track_worklist(&classes).count_where(|&v| v), 0);
        assert_eq!(track_sweep(&classes).count_where(|&v| v), 0);
    }

    #[test]
    fn strategies_agree_on_winding_path() {
        let classes = classes_from(&[
            "Swwwwww.",
            ".......w",
            ".wwwwww.",
            "w.......",
            ".wwwwwww",
            "........",
            "ww..w..S",
        ]);
        let a = track_worklist(&classes);
        let b = track_sweep(&classes);
        assert_eq!(a, b);
        assert!(a.get(4, 7));
        assert!(!a.get(6, 0));
        assert!(!a.get(6, 4));
    }
}
