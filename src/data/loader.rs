use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;

use super::model::{Histogram, base_name};

/// Only paths whose text ends with this suffix are loaded.
pub const CSV_SUFFIX: &str = ".csv";

/// Leading rows skipped before the table starts.
pub const HEADER_ROWS: usize = 2;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Structural problems with a histogram file.
#[derive(Debug, Error, PartialEq)]
pub enum HistogramError {
    #[error("expected {} header rows, found {found}", HEADER_ROWS)]
    MissingHeader { found: usize },

    #[error("no data rows after the header")]
    NoData,

    #[error("bin count '{0}' is not an integer")]
    InvalidBinCount(String),

    #[error("no frequency columns after the bin count")]
    NoFrequencies,

    #[error("line {line}: expected {expected} fields, found {found}")]
    TooManyFields {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}, column {column}: '{value}' is not a number")]
    InvalidFrequency {
        line: usize,
        column: usize,
        value: String,
    },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Whether `path` names a file the loader accepts.
///
/// The match is on the raw path text and is case-sensitive, so `DATA.CSV`
/// is not accepted.
pub fn accepts(path: &Path) -> bool {
    path.to_string_lossy().ends_with(CSV_SUFFIX)
}

/// Load a histogram from a CSV file.
///
/// Layout:
///
/// ```text
/// # /images/frame_0001.png
/// # Format: number of bins followed by bin frequencies
/// 50, 3, 0, 12, ...
/// ```
///
/// The first two lines are skipped whatever they contain. Every following
/// row is one series; its first cell is the bin count column, of which only
/// the very first cell is used. Rows shorter than the first are padded with
/// missing values; longer rows are an error.
pub fn load_file(path: &Path) -> Result<Histogram> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    parse_histogram(&text, path).with_context(|| format!("loading {}", path.display()))
}

/// Parse the contents of a histogram file. `path` only names the result.
pub fn parse_histogram(text: &str, path: &Path) -> Result<Histogram> {
    let parts: Vec<&str> = if text.is_empty() {
        Vec::new()
    } else {
        text.splitn(HEADER_ROWS + 1, '\n').collect()
    };
    if parts.len() < HEADER_ROWS {
        return Err(HistogramError::MissingHeader { found: parts.len() }.into());
    }
    let body = parts.get(HEADER_ROWS).ok_or(HistogramError::NoData)?;

    let comment = parts[0]
        .trim()
        .strip_prefix('#')
        .map(|rest| rest.trim().to_string())
        .filter(|rest| !rest.is_empty());

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(body.as_bytes());

    let mut bin_count = None;
    let mut width = None;
    let mut series = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {}", row_no + 1))?;
        let line = record
            .position()
            .map_or(HEADER_ROWS + row_no + 1, |pos| HEADER_ROWS + pos.line() as usize);

        let expected = *width.get_or_insert(record.len());
        if record.len() > expected {
            return Err(HistogramError::TooManyFields {
                line,
                expected,
                found: record.len(),
            }
            .into());
        }

        let mut cells = record.iter();
        let bin_cell = cells.next().unwrap_or("");
        // Column 0 of later rows is read but unused.
        if bin_count.is_none() {
            let bins = bin_cell
                .parse::<i64>()
                .map_err(|_| HistogramError::InvalidBinCount(bin_cell.to_string()))?;
            bin_count = Some(bins);
        }

        let mut frequencies = cells
            .enumerate()
            .map(|(j, cell)| parse_frequency(cell, line, j + 1))
            .collect::<Result<Vec<f64>, HistogramError>>()?;
        frequencies.resize(expected.saturating_sub(1), f64::NAN);
        series.push(frequencies);
    }

    let bin_count = bin_count.ok_or(HistogramError::NoData)?;
    if series.iter().all(Vec::is_empty) {
        return Err(HistogramError::NoFrequencies.into());
    }

    Ok(Histogram {
        name: base_name(path),
        source: path.to_path_buf(),
        comment,
        bin_count,
        series,
    })
}

fn parse_frequency(cell: &str, line: usize, column: usize) -> Result<f64, HistogramError> {
    if cell.is_empty() {
        return Ok(f64::NAN);
    }
    cell.parse::<f64>()
        .map_err(|_| HistogramError::InvalidFrequency {
            line,
            column,
            value: cell.to_string(),
        })
}
