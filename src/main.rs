mod app;
mod color;
mod data;
mod grid;
mod ui;

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use app::HistogramApp;
use eframe::egui;
use grid::PlotGrid;

const USAGE: &str = "Usage: plot-histogram <csv_path> [<csv2_path>] [<csv3_path>] ... ";

fn main() -> Result<()> {
    env_logger::init();

    let paths: Vec<PathBuf> = std::env::args_os().skip(1).map(PathBuf::from).collect();
    if paths.is_empty() {
        println!("{USAGE}");
        return Ok(());
    }

    // Everything is loaded before the window opens.
    let grid = PlotGrid::load(&paths)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(app::initial_window_size(grid.shape))
            .with_min_inner_size([600.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Histograms",
        options,
        Box::new(|_cc| Ok(Box::new(HistogramApp::new(grid)))),
    )
    .map_err(|e| anyhow!("display failed: {e}"))
}
