use canny_edge::config::load_config;
use canny_edge::image::io::{
    load_grayscale_grid, save_edge_mask, save_grid_scaled, write_json_file,
};
use canny_edge::CannyDetector;
use log::info;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let grid = load_grayscale_grid(&config.input)?;
    info!(
        "loaded {} ({}x{})",
        config.input.display(),
        grid.width(),
        grid.height()
    );

    let detector = CannyDetector::new(config.detector);
    let out = detector.run(&grid).map_err(|e| e.to_string())?;

    save_edge_mask(&out.mask, &config.output.edges_image)?;
    if let Some(path) = &config.output.blurred_image {
        save_grid_scaled(&out.blurred, path)?;
    }
    if let Some(path) = &config.output.magnitude_image {
        save_grid_scaled(&out.magnitude, path)?;
    }
    if let Some(path) = &config.output.report_json {
        write_json_file(path, &out.report)?;
    }

    println!(
        "Saved {} edge cells ({} strong, {} linked weak) to {} in {:.3} ms",
        out.report.edge_count,
        out.report.strong_count,
        out.report.linked_weak_count(),
        config.output.edges_image.display(),
        out.report.timings.total_ms
    );

    Ok(())
}

fn usage() -> String {
    "Usage: canny_edges <config.json>".to_string()
}
