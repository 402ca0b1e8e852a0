//! Gaussian pre-smoothing.
//!
//! The 2D Gaussian is applied separably: a horizontal pass into a scratch
//! grid, then a vertical pass into the output. Taps follow the usual
//! conventions:
//! - `radius = ceil(3*sigma)`, minimum 1.
//! - taps are normalized so that `sum(taps) == 1` up to rounding.
//!
//! Only offsets up to the grid extent are materialized. Anything farther
//! reads zero under [`BorderMode::Zero`] and the edge sample under
//! [`BorderMode::Replicate`], so the cut-off mass is either dropped or folded
//! into the end taps. The result matches the full-radius kernel while memory
//! stays bounded by the grid, whatever `sigma` is.
//!
//! `sigma <= 0` disables smoothing and returns a copy of the input.
use super::border::BorderMode;
use crate::image::SampleGrid;

/// Tail lengths up to this are summed term by term.
const DIRECT_SUM_LIMIT: f64 = 65_536.0;

/// Normalized, symmetric 1D Gaussian taps, truncated to a window.
#[derive(Clone, Debug)]
pub struct GaussianKernel {
    pub sigma: f32,
    /// Nominal radius `ceil(3*sigma)`; saturates for huge `sigma`.
    pub radius: usize,
    /// Taps for offsets `-window..=window`, divided by the full-radius mass.
    pub taps: Vec<f32>,
    /// Normalized mass of the offsets beyond the window on one side.
    pub tail: f32,
}

impl GaussianKernel {
    /// Build the kernel for `sigma`, materializing at most `max_window` taps
    /// on each side of the centre.
    ///
    /// `None` when `sigma` is not a positive finite value.
    pub fn new(sigma: f32, max_window: usize) -> Option<Self> {
        if !(sigma.is_finite() && sigma > 0.0) {
            return None;
        }

        let sigma64 = f64::from(sigma);
        let radius = (3.0 * sigma64).ceil().max(1.0);
        let window = radius.min(max_window.max(1) as f64) as usize;
        let two_sigma2 = 2.0 * sigma64 * sigma64;

        let weights: Vec<f64> = (0..=2 * window)
            .map(|i| {
                let x = i as f64 - window as f64;
                (-(x * x) / two_sigma2).exp()
            })
            .collect();
        let tail = gaussian_sum(window as f64 + 1.0, radius, sigma64);
        let total = weights.iter().sum::<f64>() + 2.0 * tail;

        Some(Self {
            sigma,
            radius: radius as usize,
            taps: weights.iter().map(|w| (w / total) as f32).collect(),
            tail: (tail / total) as f32,
        })
    }

    /// Materialized half-width.
    #[inline]
    pub fn window(&self) -> usize {
        self.taps.len() / 2
    }

    /// Taps to convolve with under `border`.
    pub fn taps_for(&self, border: BorderMode) -> Vec<f32> {
        let mut taps = self.taps.clone();
        if border == BorderMode::Replicate && self.tail > 0.0 {
            let last = taps.len() - 1;
            taps[0] += self.tail;
            taps[last] += self.tail;
        }
        taps
    }
}

/// Sum of `exp(-k^2 / (2 sigma^2))` over integers `k` in `from..=to`.
fn gaussian_sum(from: f64, to: f64, sigma: f64) -> f64 {
    if from > to {
        return 0.0;
    }
    let g = |k: f64| (-(k * k) / (2.0 * sigma * sigma)).exp();
    if to - from < DIRECT_SUM_LIMIT {
        let mut sum = 0.0;
        let mut k = from;
        while k <= to {
            sum += g(k);
            k += 1.0;
        }
        return sum;
    }
    // Euler-Maclaurin: integral plus endpoint correction. Derivative terms
    // scale with 1/sigma^2 and vanish at these lengths.
    let scale = sigma * std::f64::consts::SQRT_2;
    let integral = sigma
        * (std::f64::consts::PI / 2.0).sqrt()
        * (erf(to / scale) - erf(from / scale));
    integral + 0.5 * (g(from) + g(to))
}

/// Abramowitz-Stegun 7.1.26, absolute error below 1.5e-7.
fn erf(x: f64) -> f64 {
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();
    let t = 1.0 / (1.0 + 0.327_591_1 * x);
    let poly = t
        * (0.254_829_592
            + t * (-0.284_496_736 + t * (1.421_413_741 + t * (-1.453_152_027 + t * 1.061_405_429))));
    sign * (1.0 - poly * (-x * x).exp())
}

/// Blur `input` with a Gaussian of standard deviation `sigma`.
pub fn smooth(input: &SampleGrid, sigma: f32, border: BorderMode) -> SampleGrid {
    let extent = input.width().max(input.height());
    match GaussianKernel::new(sigma, extent) {
        Some(kernel) => smooth_with_kernel(input, &kernel, border),
        None => input.clone(),
    }
}

fn smooth_with_kernel(input: &SampleGrid, kernel: &GaussianKernel, border: BorderMode) -> SampleGrid {
    let w = input.width();
    let h = input.height();
    let radius = kernel.window() as isize;
    let taps = kernel.taps_for(border);
    let taps = taps.as_slice();

    let horizontal = SampleGrid::build_rows(w, h, 0.0, |y, out| {
        let src = input.row(y);
        for (x, dst) in out.iter_mut().enumerate() {
            let base = x as isize - radius;
            *dst = taps
                .iter()
                .enumerate()
                .map(|(k, &t)| t * border.tap(src, base + k as isize))
                .sum();
        }
    });

    SampleGrid::build_rows(w, h, 0.0, |y, out| {
        let base = y as isize - radius;
        for (k, &t) in taps.iter().enumerate() {
            let Some(sy) = border.map_index(base + k as isize, h) else {
                continue;
            };
            let src = horizontal.row(sy);
            for (dst, &v) in out.iter_mut().zip(src) {
                *dst += t * v;
            }
        }
    })
}
