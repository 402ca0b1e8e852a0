#![allow(dead_code)]

use canny_edge::SampleGrid;

/// Generates a simple high-contrast checkerboard grid.
pub fn checkerboard(width: usize, height: usize, cell: usize) -> SampleGrid {
    assert!(width > 0 && height > 0, "grid dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut data = vec![0.0f32; width * height];
    for y in 0..height {
        for x in 0..width {
            let sum = x / cell + y / cell;
            data[y * width + x] = if sum & 1 == 0 { 32.0 } else { 220.0 };
        }
    }
    SampleGrid::from_vec(width, height, data).expect("valid shape")
}

/// Zero grid with a bright vertical segment in `col` spanning `rows`.
pub fn vertical_line(
    width: usize,
    height: usize,
    col: usize,
    rows: std::ops::RangeInclusive<usize>,
    value: f32,
) -> SampleGrid {
    let mut data = vec![0.0f32; width * height];
    for y in rows {
        data[y * width + col] = value;
    }
    SampleGrid::from_vec(width, height, data).expect("valid shape")
}

/// Dark-to-bright ramp across columns: 0 left of `col`, 100 at `col`, 200 right of it.
pub fn ramp_step(width: usize, height: usize, col: usize) -> SampleGrid {
    let data = (0..height)
        .flat_map(|_| {
            (0..width).map(move |x| match x.cmp(&col) {
                std::cmp::Ordering::Less => 0.0,
                std::cmp::Ordering::Equal => 100.0,
                std::cmp::Ordering::Greater => 200.0,
            })
        })
        .collect();
    SampleGrid::from_vec(width, height, data).expect("valid shape")
}

/// Checkerboard with deterministic pseudo-random noise in `[-amp, amp]`.
pub fn noisy_checkerboard(width: usize, height: usize, cell: usize, amp: f32, seed: u64) -> SampleGrid {
    let base = checkerboard(width, height, cell);
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    let data = base
        .data()
        .iter()
        .map(|&v| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let unit = (state >> 40) as f32 / (1u64 << 24) as f32;
            v + (2.0 * unit - 1.0) * amp
        })
        .collect();
    SampleGrid::from_vec(width, height, data).expect("valid shape")
}

/// Render a boolean grid as rows of `#`/`.` for readable assertion messages.
pub fn render(mask: &canny_edge::EdgeMask) -> String {
    mask.rows()
        .map(|row| row.iter().map(|&on| if on { '#' } else { '.' }).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
