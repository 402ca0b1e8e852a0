//! Owned single-channel grids in row-major layout.
//!
//! A [`Grid`] is immutable once a stage has produced it: the public surface
//! only hands out shared borrows, and writes happen inside this crate while
//! the producing stage fills its output row by row.
//!
//! Cells are addressed `(row, col)`; `row` runs over `0..height` and `col`
//! over `0..width`.
use crate::error::CannyError;

/// Dense `height × width` grid stored row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

/// Real-valued samples: raw intensities, blurred image, derivatives, magnitudes.
pub type SampleGrid = Grid<f32>;

/// Final binary classification, `true` on edge cells.
pub type EdgeMask = Grid<bool>;

impl<T> Grid<T> {
    /// Wrap a row-major buffer, checking that it holds `width * height` cells.
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> Result<Self, CannyError> {
        let expected = cell_count(width, height).ok_or(CannyError::ShapeMismatch {
            expected: usize::MAX,
            actual: data.len(),
        })?;
        if data.len() != expected {
            return Err(CannyError::ShapeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build from nested rows; every row must have the same length.
    ///
    /// Empty inner rows give a `0 × rows.len()` grid, the same shape
    /// `from_vec(0, rows.len(), vec![])` produces.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, CannyError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(cell_count(width, height).unwrap_or(0));
        for row in rows {
            if row.len() != width {
                return Err(CannyError::ShapeMismatch {
                    expected: width,
                    actual: row.len(),
                });
            }
            data.extend(row);
        }
        Self::from_vec(width, height, data)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Backing storage in row-major order.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Convert `(row, col)` to a linear index into [`Grid::data`].
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    #[inline]
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.width;
        &self.data[start..start + self.width]
    }

    /// Iterate rows top to bottom; always yields `height` rows, empty ones
    /// when `width == 0`.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.height).map(move |r| self.row(r))
    }

    /// Whether `(row, col)` lies on the outermost one-cell frame.
    #[inline]
    pub fn is_border(&self, row: usize, col: usize) -> bool {
        row == 0 || col == 0 || row + 1 == self.height || col + 1 == self.width
    }

    pub fn same_shape<U>(&self, other: &Grid<U>) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Count cells matching `pred`.
    pub fn count_where(&self, pred: impl Fn(&T) -> bool) -> usize {
        self.data.iter().filter(|v| pred(v)).count()
    }

    /// Elementwise map into a grid of the same shape.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> Grid<U> {
        Grid {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(f).collect(),
        }
    }

    #[inline]
    pub(crate) fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, value: T) {
        let i = self.index(row, col);
        self.data[i] = value;
    }
}

/// `width * height`, or `None` on overflow. Every constructor sizes through this.
#[inline]
fn cell_count(width: usize, height: usize) -> Option<usize> {
    width.checked_mul(height)
}

impl<T: Copy> Grid<T> {
    /// Value at `(row, col)`. Panics when out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[self.index(row, col)]
    }
}

impl<T: Clone> Grid<T> {
    /// Grid of the given shape with every cell set to `value`.
    ///
    /// # Panics
    ///
    /// When `width * height` overflows `usize`, which [`Grid::from_vec`]
    /// reports as [`CannyError::ShapeMismatch`] instead.
    pub fn new_fill(width: usize, height: usize, value: T) -> Self {
        let Some(len) = cell_count(width, height) else {
            panic!("grid shape {width}x{height} overflows usize");
        };
        Self {
            width,
            height,
            data: vec![value; len],
        }
    }
}

impl<T: Clone + Send> Grid<T> {
    /// Allocate a grid filled with `init` and let `fill` write each row.
    ///
    /// `fill(row, out)` receives the row index and that row's cells. With the
    /// `parallel` feature rows are filled concurrently; each row is written by
    /// exactly one call, so no synchronization is needed beyond the join that
    /// happens before this returns.
    pub(crate) fn build_rows<F>(width: usize, height: usize, init: T, fill: F) -> Self
    where
        F: Fn(usize, &mut [T]) + Sync,
    {
        let mut out = Self::new_fill(width, height, init);
        if width == 0 || height == 0 {
            return out;
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            out.data
                .par_chunks_mut(width)
                .enumerate()
                .for_each(|(row, cells)| fill(row, cells));
        }

        #[cfg(not(feature = "parallel"))]
        for (row, cells) in out.data.chunks_mut(width).enumerate() {
            fill(row, cells);
        }

        out
    }
}

impl SampleGrid {
    /// Zero-initialized sample grid of size `width × height`.
    pub fn zeros(width: usize, height: usize) -> Self {
        Self::new_fill(width, height, 0.0)
    }

    /// Largest sample, or `0.0` for an empty grid.
    pub fn max_value(&self) -> f32 {
        self.data.iter().copied().fold(0.0f32, f32::max)
    }
}
