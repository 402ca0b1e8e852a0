//! Out-of-bounds sampling shared by the smoothing and gradient stages.
//!
//! Both convolution stages of one run must use the same mode; the detector
//! passes a single [`BorderMode`] to each of them.
use serde::{Deserialize, Serialize};

/// How samples outside the grid are read during convolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderMode {
    /// Outside samples read as `0.0`.
    #[default]
    Zero,
    /// Outside samples repeat the nearest edge sample.
    Replicate,
}

impl BorderMode {
    /// Map a possibly out-of-range index into `[0, len)`.
    ///
    /// `None` means the sample lies outside the grid and reads as zero.
    #[inline]
    pub fn map_index(self, i: isize, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        if i >= 0 && (i as usize) < len {
            return Some(i as usize);
        }
        match self {
            BorderMode::Zero => None,
            BorderMode::Replicate => Some(if i < 0 { 0 } else { len - 1 }),
        }
    }

    /// Read `line[i]` under this border mode.
    #[inline]
    pub(crate) fn tap(self, line: &[f32], i: isize) -> f32 {
        match self.map_index(i, line.len()) {
            Some(idx) => line[idx],
            None => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BorderMode;

    #[test]
    fn zero_mode_drops_outside_indices() {
        let mode = BorderMode::Zero;
        assert_eq!(mode.map_index(-1, 5), None);
        assert_eq!(mode.map_index(0, 5), Some(0));
        assert_eq!(mode.map_index(4, 5), Some(4));
        assert_eq!(mode.map_index(5, 5), None);
        assert_eq!(mode.tap(&[3.0, 4.0], -2), 0.0);
    }

    #[test]
    fn replicate_mode_clamps_to_edges() {
        let mode = BorderMode::Replicate;
        assert_eq!(mode.map_index(-3, 5), Some(0));
        assert_eq!(mode.map_index(2, 5), Some(2));
        assert_eq!(mode.map_index(99, 5), Some(4));
        assert_eq!(mode.map_index(0, 0), None);
        assert_eq!(mode.tap(&[3.0, 4.0], 7), 4.0);
    }
}
