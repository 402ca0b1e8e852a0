//! I/O helpers for grayscale images, edge masks, and JSON.
//!
//! - `load_grayscale_grid`: read a PNG/JPEG/etc. into a [`SampleGrid`] of raw
//!   0–255 intensities.
//! - `save_edge_mask`: write an [`EdgeMask`] as a black/white PNG.
//! - `save_grid_scaled`: write a sample grid to grayscale, scaled by its maximum.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{EdgeMask, SampleGrid};
use image::{GrayImage, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk, convert to 8-bit luma, and widen to `f32`.
///
/// Intensities are kept in `[0, 255]` so thresholds stay in pixel units.
pub fn load_grayscale_grid(path: &Path) -> Result<SampleGrid, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    grid_from_luma(&img)
}

/// Convert a decoded luma buffer into a sample grid.
pub fn grid_from_luma(img: &GrayImage) -> Result<SampleGrid, String> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img.as_raw().iter().map(|&v| v as f32).collect();
    SampleGrid::from_vec(width, height, data).map_err(|e| e.to_string())
}

/// Render a mask as luma: edge cells white, everything else black.
pub fn mask_to_luma(mask: &EdgeMask) -> GrayImage {
    let mut out = GrayImage::new(mask.width() as u32, mask.height() as u32);
    for (y, row) in mask.rows().enumerate() {
        for (x, &on) in row.iter().enumerate() {
            let v = if on { 255 } else { 0 };
            out.put_pixel(x as u32, y as u32, Luma([v]));
        }
    }
    out
}

/// Save an edge mask as a black/white image; format follows the extension.
pub fn save_edge_mask(mask: &EdgeMask, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    mask_to_luma(mask)
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Save a sample grid to grayscale, mapping `[0, max]` onto `[0, 255]`.
///
/// Negative samples clamp to black. A grid whose maximum is not positive
/// renders fully black.
pub fn save_grid_scaled(grid: &SampleGrid, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let max = grid.max_value();
    let scale = if max > 0.0 { 255.0 / max } else { 0.0 };
    let mut out = GrayImage::new(grid.width() as u32, grid.height() as u32);
    for (y, row) in grid.rows().enumerate() {
        for (x, &px) in row.iter().enumerate() {
            let v = (px * scale).round().clamp(0.0, 255.0);
            out.put_pixel(x as u32, y as u32, Luma([v as u8]));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
