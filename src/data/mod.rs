/// Data layer: histogram type and CSV loading.
///
/// Architecture:
/// ```text
///   histogram .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  skip 2 header rows, parse table → Histogram
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ Histogram  │  bin count + one frequency series per row
///   └───────────┘
/// ```

pub mod loader;
pub mod model;
