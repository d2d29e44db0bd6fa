/// Data layer: core types, loading, and windowing.
///
/// Architecture:
/// ```text
///  Year;Month;DateFraction;...  (semicolon file)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse rows → Table
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Table    │  Vec<Record>, immutable
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  window   │  year range, rolling mean, cycle residual → Series
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod series;
pub mod window;
