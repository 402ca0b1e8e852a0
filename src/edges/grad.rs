//! Sobel derivatives with magnitude and angle.
//!
//! - Convolves the 3×3 Sobel pair with the input. This is a true convolution
//!   (kernel flipped), so `gx` is positive where intensity falls to the right
//!   and `gy` is positive where it falls towards the top.
//! - Out-of-grid samples follow the supplied [`BorderMode`].
//! - `magnitude = sqrt(gx^2 + gy^2)` and `angle = atan2(gy, gx)` in `(-π, π]`
//!   are separate elementwise passes.
//!
//! Complexity: O(W·H) per pass; memory: one float buffer per output.
use super::border::BorderMode;
use crate::image::SampleGrid;

type Kernel3 = [[f32; 3]; 3];

/// Horizontal derivative kernel.
pub const SOBEL_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
/// Vertical derivative kernel.
pub const SOBEL_KERNEL_Y: Kernel3 = [[1.0, 2.0, 1.0], [0.0, 0.0, 0.0], [-1.0, -2.0, -1.0]];

/// Convolve `blurred` with both Sobel kernels, returning `(gx, gy)`.
pub fn gradients(blurred: &SampleGrid, border: BorderMode) -> (SampleGrid, SampleGrid) {
    let gx = convolve3(blurred, &SOBEL_KERNEL_X, border);
    let gy = convolve3(blurred, &SOBEL_KERNEL_Y, border);
    (gx, gy)
}

/// Per-cell Euclidean norm of the derivative pair.
pub fn magnitude(gx: &SampleGrid, gy: &SampleGrid) -> SampleGrid {
    debug_assert!(gx.same_shape(gy), "derivative grids must share a shape");
    SampleGrid::build_rows(gx.width(), gx.height(), 0.0, |y, out| {
        for ((dst, &dx), &dy) in out.iter_mut().zip(gx.row(y)).zip(gy.row(y)) {
            *dst = (dx * dx + dy * dy).sqrt();
        }
    })
}

/// Per-cell gradient direction `atan2(gy, gx)`.
pub fn angle(gx: &SampleGrid, gy: &SampleGrid) -> SampleGrid {
    debug_assert!(gx.same_shape(gy), "derivative grids must share a shape");
    SampleGrid::build_rows(gx.width(), gx.height(), 0.0, |y, out| {
        for ((dst, &dx), &dy) in out.iter_mut().zip(gx.row(y)).zip(gy.row(y)) {
            *dst = dy.atan2(dx);
        }
    })
}

fn convolve3(src: &SampleGrid, kernel: &Kernel3, border: BorderMode) -> SampleGrid {
    let w = src.width();
    let h = src.height();
    // Convolution reads the kernel rotated by 180 degrees.
    let mut flipped = [[0.0f32; 3]; 3];
    for (i, row) in kernel.iter().enumerate() {
        for (j, &v) in row.iter().enumerate() {
            flipped[2 - i][2 - j] = v;
        }
    }

    SampleGrid::build_rows(w, h, 0.0, |y, out| {
        let rows = [
            border.map_index(y as isize - 1, h).map(|r| src.row(r)),
            Some(src.row(y)),
            border.map_index(y as isize + 1, h).map(|r| src.row(r)),
        ];
        for (x, dst) in out.iter_mut().enumerate() {
            let mut sum = 0.0f32;
            for (k_row, line) in flipped.iter().zip(rows.iter()) {
                let Some(line) = line else {
                    continue;
                };
                for (kx, &weight) in k_row.iter().enumerate() {
                    sum += weight * border.tap(line, x as isize + kx as isize - 1);
                }
            }
            *dst = sum;
        }
    })
}

#[cfg(test)]
mod tests {
    use super::{angle, gradients, magnitude};
    use crate::edges::border::BorderMode;
    use crate::image::SampleGrid;

    fn vertical_step(width: usize, height: usize, split: usize) -> SampleGrid {
        let data = (0..height)
            .flat_map(|_| (0..width).map(move |x| if x < split { 0.0 } else { 10.0 }))
            .collect();
        SampleGrid::from_vec(width, height, data).expect("valid shape")
    }

    #[test]
    fn constant_image_has_zero_interior_gradient() {
        let img = SampleGrid::new_fill(5, 5, 7.0);
        let (gx, gy) = gradients(&img, BorderMode::Zero);
        assert_eq!(gx.get(2, 2), 0.0);
        assert_eq!(gy.get(2, 2), 0.0);
        // zero padding makes the frame respond
        assert!(gx.get(2, 0) != 0.0);

        let (gx, gy) = gradients(&img, BorderMode::Replicate);
        assert!(gx.data().iter().chain(gy.data()).all(|&v| v == 0.0));
    }

    #[test]
    fn vertical_step_responds_in_x_only() {
        let img = vertical_step(6, 5, 3);
        let (gx, gy) = gradients(&img, BorderMode::Replicate);

        // Rising intensity to the right gives a negative convolution response.
        assert_eq!(gx.get(2, 2), -40.0);
        assert_eq!(gx.get(2, 3), -40.0);
        assert_eq!(gx.get(2, 1), 0.0);
        assert_eq!(gy.get(2, 2), 0.0);

        let mag = magnitude(&gx, &gy);
        assert_eq!(mag.get(2, 2), 40.0);
        let ang = angle(&gx, &gy);
        assert!((ang.get(2, 2) - std::f32::consts::PI).abs() < 1e-6);
    }

    #[test]
    fn horizontal_step_responds_in_y_only() {
        let data = (0..5)
            .flat_map(|y| (0..5).map(move |_| if y < 2 { 0.0 } else { 10.0 }))
            .collect();
        let img = SampleGrid::from_vec(5, 5, data).expect("valid shape");
        let (gx, gy) = gradients(&img, BorderMode::Replicate);

        assert_eq!(gx.get(2, 2), 0.0);
        // Brighter rows below: bottom minus top under the flipped kernel.
        assert_eq!(gy.get(2, 2), 40.0);
        assert_eq!(gy.get(1, 2), 40.0);
        let ang = angle(&gx, &gy);
        assert!((ang.get(2, 2) - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn magnitude_is_euclidean_norm() {
        let gx = SampleGrid::from_vec(2, 1, vec![3.0, -6.0]).expect("valid shape");
        let gy = SampleGrid::from_vec(2, 1, vec![4.0, 8.0]).expect("valid shape");
        let mag = magnitude(&gx, &gy);
        assert_eq!(mag.data(), &[5.0, 10.0]);
    }
}
