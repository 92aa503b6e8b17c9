use eframe::egui::{RichText, Ui, Vec2};
use egui_plot::{Bar, BarChart, GridInput, GridMark, Plot};

use crate::color::generate_palette;
use crate::data::model::Histogram;
use crate::grid::Slot;

pub const X_LABEL: &str = "Bins";
pub const Y_LABEL: &str = "Frequencies";

/// Distance between x-axis ticks, in bins.
pub const TICK_SPACING: i64 = 10;

/// Total width of one group of bars; each series gets an equal share.
const GROUP_WIDTH: f64 = 0.5;

// ---------------------------------------------------------------------------
// Subplot decorations
// ---------------------------------------------------------------------------

/// Title, labels and ticks applied to a histogram subplot.
#[derive(Debug, Clone, PartialEq)]
pub struct Decorations {
    pub title: String,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub x_ticks: Vec<f64>,
}

/// Decorations for `slot`, or `None` for a skipped path, whose surface gets
/// no title and no axis labels.
pub fn decorations(slot: &Slot) -> Option<Decorations> {
    let hist = slot.histogram()?;
    Some(Decorations {
        title: hist.name.clone(),
        x_label: X_LABEL,
        y_label: Y_LABEL,
        x_ticks: x_ticks(hist.bin_count),
    })
}

/// Tick positions `0, 10, 20, …` strictly below `bin_count`.
pub fn x_ticks(bin_count: i64) -> Vec<f64> {
    (0..bin_count.max(0))
        .step_by(TICK_SPACING as usize)
        .map(|tick| tick as f64)
        .collect()
}

// ---------------------------------------------------------------------------
// Bar placement
// ---------------------------------------------------------------------------

/// Width of a single bar when `series` bars share a group.
pub fn bar_width(series: usize) -> f64 {
    GROUP_WIDTH / series.max(1) as f64
}

/// Centre of the bar for `series` (out of `n_series`) in frequency `column`.
///
/// Groups are centred on the column index; bars run left to right in row
/// order.
pub fn bar_center(column: usize, series: usize, n_series: usize) -> f64 {
    column as f64 - GROUP_WIDTH / 2.0 + (series as f64 + 0.5) * bar_width(n_series)
}

/// One chart per series. Missing (`NaN`) frequencies produce no bar.
fn bar_charts(hist: &Histogram) -> Vec<BarChart> {
    let n_series = hist.series.len();
    let width = bar_width(n_series);

    hist.series
        .iter()
        .zip(generate_palette(n_series))
        .enumerate()
        .map(|(series, (frequencies, color))| {
            let bars: Vec<Bar> = frequencies
                .iter()
                .enumerate()
                .filter(|(_, value)| !value.is_nan())
                .map(|(column, &value)| {
                    Bar::new(bar_center(column, series, n_series), value).width(width)
                })
                .collect();
            BarChart::new(bars)
                .color(color)
                .name(format!("row {series}"))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Render the subplot for grid slot `index` into a `size` cell.
pub fn slot_plot(ui: &mut Ui, index: usize, slot: &Slot, size: Vec2) {
    let id = ("histogram_slot", index);

    let (Some(deco), Some(hist)) = (decorations(slot), slot.histogram()) else {
        // Skipped input: bare axes only.
        Plot::new(id)
            .width(size.x)
            .height(size.y)
            .show(ui, |_plot_ui| {});
        return;
    };

    ui.vertical(|ui: &mut Ui| {
        let title = ui.label(RichText::new(&deco.title).strong());
        if let Some(comment) = &hist.comment {
            title.on_hover_text(comment);
        }
        let plot_height = (size.y - ui.spacing().interact_size.y).max(0.0);

        let ticks = deco.x_ticks;
        Plot::new(id)
            .width(size.x)
            .height(plot_height)
            .x_axis_label(deco.x_label)
            .y_axis_label(deco.y_label)
            .x_grid_spacer(move |_input: GridInput| {
                ticks
                    .iter()
                    .map(|&value| GridMark {
                        value,
                        step_size: TICK_SPACING as f64,
                    })
                    .collect()
            })
            .x_axis_formatter(|mark, _range| format!("{:.0}", mark.value))
            .allow_boxed_zoom(true)
            .allow_drag(true)
            .allow_scroll(true)
            .allow_zoom(true)
            .show(ui, |plot_ui| {
                for chart in bar_charts(hist) {
                    plot_ui.bar_chart(chart);
                }
            });
    });
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn histogram(bin_count: i64, series: Vec<Vec<f64>>) -> Histogram {
        Histogram {
            name: "data1".into(),
            source: PathBuf::from("data1.csv"),
            comment: None,
            bin_count,
            series,
        }
    }

    #[test]
    fn fifty_bins_tick_every_ten() {
        assert_eq!(x_ticks(50), vec![0.0, 10.0, 20.0, 30.0, 40.0]);
        assert_eq!(x_ticks(51), vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0]);
        assert_eq!(x_ticks(1), vec![0.0]);
    }

    #[test]
    fn no_ticks_without_bins() {
        assert!(x_ticks(0).is_empty());
        assert!(x_ticks(-5).is_empty());
    }

    #[test]
    fn histogram_slot_is_decorated() {
        let slot = Slot::Histogram(histogram(50, vec![vec![1.0; 50]]));
        let deco = decorations(&slot).unwrap();
        assert_eq!(deco.title, "data1");
        assert_eq!(deco.x_label, "Bins");
        assert_eq!(deco.y_label, "Frequencies");
        assert_eq!(deco.x_ticks, vec![0.0, 10.0, 20.0, 30.0, 40.0]);
    }

    #[test]
    fn skipped_slot_is_bare() {
        let slot = Slot::Skipped(PathBuf::from("notes.txt"));
        assert_eq!(decorations(&slot), None);
    }

    #[test]
    fn single_series_bars_sit_on_columns() {
        assert_eq!(bar_width(1), 0.5);
        assert_eq!(bar_center(0, 0, 1), 0.0);
        assert_eq!(bar_center(7, 0, 1), 7.0);
    }

    #[test]
    fn grouped_bars_share_the_group_width() {
        assert_eq!(bar_width(2), 0.25);
        assert_eq!(bar_center(3, 0, 2), 2.875);
        assert_eq!(bar_center(3, 1, 2), 3.125);
    }

    #[test]
    fn one_chart_per_series() {
        let hist = histogram(3, vec![vec![1.0, f64::NAN, 3.0], vec![4.0, 5.0, 6.0]]);
        assert_eq!(bar_charts(&hist).len(), 2);
    }
}
