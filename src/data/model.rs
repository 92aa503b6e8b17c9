use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Histogram – one loaded CSV file
// ---------------------------------------------------------------------------

/// A histogram loaded from one CSV file.
///
/// Each data row of the file becomes one entry of `series`; after
/// transposition every series contributes one bar per frequency column.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// File stem of the source, used as the subplot title.
    pub name: String,
    /// Path the histogram was read from.
    pub source: PathBuf,
    /// Image path from the `# ...` header line, when present.
    pub comment: Option<String>,
    /// Number of bins, taken from the first cell of the first data row.
    pub bin_count: i64,
    /// Per-row frequencies with the bin-count column removed.
    /// Missing cells are `NaN`.
    pub series: Vec<Vec<f64>>,
}

impl Histogram {
    /// Number of frequency columns (bars per series).
    pub fn columns(&self) -> usize {
        self.series.first().map_or(0, Vec::len)
    }
}

/// Base name of `path` without directory or final extension.
///
/// `runs/data1.csv` → `data1`, `a.b.csv` → `a.b`, `.csv` → `.csv`.
pub fn base_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_name_strips_directory_and_extension() {
        assert_eq!(base_name(Path::new("data1.csv")), "data1");
        assert_eq!(base_name(Path::new("out/run-3/data2.csv")), "data2");
        assert_eq!(base_name(Path::new("a.b.csv")), "a.b");
        assert_eq!(base_name(Path::new(".csv")), ".csv");
    }

    #[test]
    fn columns_follow_first_series() {
        let hist = Histogram {
            name: "h".into(),
            source: PathBuf::from("h.csv"),
            comment: None,
            bin_count: 3,
            series: vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]],
        };
        assert_eq!(hist.columns(), 3);
    }
}
