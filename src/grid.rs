use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::data::loader;
use crate::data::model::Histogram;

/// Fixed number of columns in the plot grid.
pub const COLUMNS: usize = 3;

// ---------------------------------------------------------------------------
// Grid shape
// ---------------------------------------------------------------------------

/// Rows × columns of the subplot grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    pub rows: usize,
    pub cols: usize,
}

impl GridShape {
    /// Shape for `inputs` sources: [`COLUMNS`] wide, `ceil(inputs / COLUMNS)` tall.
    pub fn for_inputs(inputs: usize) -> Self {
        Self {
            rows: inputs.div_ceil(COLUMNS),
            cols: COLUMNS,
        }
    }

    /// Total number of slots, used or not.
    pub fn slot_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Row-major (row, col) position of slot `index`.
    pub fn position(&self, index: usize) -> (usize, usize) {
        (index / self.cols, index % self.cols)
    }
}

// ---------------------------------------------------------------------------
// Slots
// ---------------------------------------------------------------------------

/// What occupies a paired grid slot.
#[derive(Debug, Clone, PartialEq)]
pub enum Slot {
    /// A loaded histogram, drawn as a bar chart.
    Histogram(Histogram),
    /// A path the loader does not accept; its surface stays empty.
    Skipped(PathBuf),
}

impl Slot {
    pub fn histogram(&self) -> Option<&Histogram> {
        match self {
            Slot::Histogram(hist) => Some(hist),
            Slot::Skipped(_) => None,
        }
    }

    /// Path this slot was paired with.
    pub fn source(&self) -> &Path {
        match self {
            Slot::Histogram(hist) => &hist.source,
            Slot::Skipped(path) => path,
        }
    }
}

/// Input paths paired with grid slots in argument order.
///
/// `slots` holds exactly one entry per input; the trailing
/// `shape.slot_count() - slots.len()` positions are removed from the figure.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotGrid {
    pub shape: GridShape,
    pub slots: Vec<Slot>,
}

impl PlotGrid {
    /// Load every accepted path. The first load failure aborts.
    pub fn load<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let shape = GridShape::for_inputs(paths.len());
        log::info!(
            "Laying out {} input(s) on a {}x{} grid",
            paths.len(),
            shape.rows,
            shape.cols
        );

        let slots = paths
            .iter()
            .map(|path| load_slot(path.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        for (index, slot) in slots.iter().enumerate() {
            log::debug!("Slot {:?} <- {}", shape.position(index), slot.source().display());
        }

        let grid = Self { shape, slots };
        if grid.removed_slots() > 0 {
            log::debug!("Removing {} unused slot(s)", grid.removed_slots());
        }
        Ok(grid)
    }

    /// Number of trailing slots removed from the figure.
    pub fn removed_slots(&self) -> usize {
        self.shape.slot_count() - self.slots.len()
    }

    /// Slot at (`row`, `col`), or `None` when that position was removed.
    pub fn slot(&self, row: usize, col: usize) -> Option<&Slot> {
        if col >= self.shape.cols {
            return None;
        }
        self.slots.get(row * self.shape.cols + col)
    }
}

fn load_slot(path: &Path) -> Result<Slot> {
    if !loader::accepts(path) {
        log::warn!(
            "Skipping {}: not a {} file",
            path.display(),
            loader::CSV_SUFFIX
        );
        return Ok(Slot::Skipped(path.to_path_buf()));
    }

    let hist = loader::load_file(path)?;
    log::info!(
        "Loaded '{}': {} bins, {} series x {} columns",
        hist.name,
        hist.bin_count,
        hist.series.len(),
        hist.columns()
    );
    Ok(Slot::Histogram(hist))
}
