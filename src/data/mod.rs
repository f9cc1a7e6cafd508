/// Data layer: record types, loading, search and derived metrics.
///
/// Architecture:
/// ```text
///   data.csv
///      │
///      ▼
///   ┌──────────┐
///   │  loader  │  split lines/fields, coerce ratings → Vec<EvaluationRecord>
///   └──────────┘
///      │
///      ▼
///   ┌──────────┐
///   │  filter  │  name search → matching indices
///   └──────────┘
///      │
///      ▼
///   ┌──────────┐
///   │ metrics  │  average, band, chart points, summary
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod metrics;
pub mod model;
