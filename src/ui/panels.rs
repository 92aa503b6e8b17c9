use eframe::egui::{self, Ui, Vec2};

use crate::grid::PlotGrid;
use crate::ui::plot;

// ---------------------------------------------------------------------------
// Central panel – subplot grid
// ---------------------------------------------------------------------------

/// Render every paired slot of `grid`, row by row. Removed slots take up
/// their cell but draw nothing.
pub fn grid_panel(ui: &mut Ui, grid: &PlotGrid) {
    let shape = grid.shape;
    if shape.rows == 0 {
        return;
    }

    let spacing = ui.spacing().item_spacing;
    let available = ui.available_size();
    let cell = cell_size(available, spacing, shape.rows, shape.cols);

    for row in 0..shape.rows {
        ui.horizontal(|ui: &mut Ui| {
            for col in 0..shape.cols {
                let index = row * shape.cols + col;
                ui.allocate_ui(cell, |ui: &mut Ui| {
                    ui.set_min_size(cell);
                    if let Some(slot) = grid.slot(row, col) {
                        plot::slot_plot(ui, index, slot, cell);
                    }
                });
            }
        });
    }
}

/// Size of one cell so that `rows` × `cols` cells plus spacing fill `available`.
pub fn cell_size(available: Vec2, spacing: Vec2, rows: usize, cols: usize) -> Vec2 {
    let rows = rows.max(1) as f32;
    let cols = cols.max(1) as f32;
    egui::vec2(
        ((available.x - spacing.x * (cols - 1.0)) / cols).max(0.0),
        ((available.y - spacing.y * (rows - 1.0)) / rows).max(0.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_split_the_panel_evenly() {
        let cell = cell_size(egui::vec2(920.0, 610.0), egui::vec2(10.0, 10.0), 2, 3);
        assert_eq!(cell, egui::vec2(300.0, 300.0));
    }

    #[test]
    fn cells_never_go_negative() {
        let cell = cell_size(egui::vec2(5.0, 5.0), egui::vec2(10.0, 10.0), 3, 3);
        assert_eq!(cell, Vec2::ZERO);
    }
}
