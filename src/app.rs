use eframe::egui;

use crate::grid::{GridShape, PlotGrid};
use crate::ui::panels;

/// Window size per grid cell before the user resizes anything.
const CELL_SIZE: [f32; 2] = [420.0, 340.0];

/// Largest starting window; beyond this the grid shrinks its cells.
const MAX_WINDOW_SIZE: [f32; 2] = [1260.0, 800.0];

/// Starting window size for `shape`, capped at [`MAX_WINDOW_SIZE`].
pub fn initial_window_size(shape: GridShape) -> [f32; 2] {
    [
        (CELL_SIZE[0] * shape.cols as f32).min(MAX_WINDOW_SIZE[0]),
        (CELL_SIZE[1] * shape.rows as f32).min(MAX_WINDOW_SIZE[1]),
    ]
}

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct HistogramApp {
    pub grid: PlotGrid,
}

impl HistogramApp {
    pub fn new(grid: PlotGrid) -> Self {
        Self { grid }
    }
}

impl eframe::App for HistogramApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::grid_panel(ui, &self.grid);
        });
    }
}
