use std::fmt;

use crate::error::{Result, SunspotError};

use super::series::Series;
use super::window;

// ---------------------------------------------------------------------------
// Marker – provisional vs. definitive observation
// ---------------------------------------------------------------------------

/// Data quality flag from the last column of the source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// `1` in the source: the value is final.
    Definitive,
    /// `0` in the source: the value may still be revised.
    Provisional,
}

impl Marker {
    pub fn from_field(s: &str) -> Option<Self> {
        match s {
            "1" => Some(Marker::Definitive),
            "0" => Some(Marker::Provisional),
            _ => None,
        }
    }

    pub fn as_field(self) -> &'static str {
        match self {
            Marker::Definitive => "1",
            Marker::Provisional => "0",
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Marker::Definitive => write!(f, "definitive"),
            Marker::Provisional => write!(f, "provisional"),
        }
    }
}

// ---------------------------------------------------------------------------
// Record – one row of the dataset
// ---------------------------------------------------------------------------

/// One monthly observation.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub year: i32,
    /// 1–12.
    pub month: u8,
    /// Fractional-year timestamp of the middle of the month.
    pub date_fraction: f64,
    /// Monthly mean total sunspot number; negative means missing.
    pub monthly_total: f64,
    pub mean_std_dev: f64,
    pub num_observations: i32,
    pub marker: Marker,
}

impl Record {
    /// Whether the monthly total is the "no observation" sentinel.
    pub fn is_missing(&self) -> bool {
        self.monthly_total < 0.0
    }
}

/// Why `next` may not follow `prev` in a table, if it may not.
pub(crate) fn order_violation(prev: &Record, next: &Record) -> Option<String> {
    if (next.year, next.month) <= (prev.year, prev.month) {
        return Some(format!(
            "{}-{:02} does not follow {}-{:02}",
            next.year, next.month, prev.year, prev.month
        ));
    }
    if next.date_fraction <= prev.date_fraction {
        return Some(format!(
            "date fraction {} is not after {}",
            next.date_fraction, prev.date_fraction
        ));
    }
    None
}

// ---------------------------------------------------------------------------
// Table – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The loaded dataset, ordered by `date_fraction`. Never mutated after
/// construction; every derived view borrows from it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    records: Vec<Record>,
}

impl Table {
    /// Build a table, checking that rows are strictly increasing in
    /// `(year, month)` and in date fraction. Errors report the 1-based row.
    pub fn from_records(records: Vec<Record>) -> Result<Self> {
        for (i, pair) in records.windows(2).enumerate() {
            if let Some(message) = order_violation(&pair[0], &pair[1]) {
                return Err(SunspotError::parse(i as u64 + 2, message));
            }
        }
        Ok(Table { records })
    }

    /// Wrap rows the caller has already checked with [`order_violation`].
    pub(crate) fn from_ordered(records: Vec<Record>) -> Self {
        Table { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of monthly records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn first_year(&self) -> Option<i32> {
        self.records.first().map(|r| r.year)
    }

    pub fn last_year(&self) -> Option<i32> {
        self.records.last().map(|r| r.year)
    }

    /// Months whose total is the "no observation" sentinel.
    pub fn missing_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_missing()).count()
    }

    pub fn contains_year(&self, year: i32) -> bool {
        self.records.iter().any(|r| r.year == year)
    }

    /// See [`window::select_range`].
    pub fn select_range(&self, start_year: i32, end_year: i32) -> Result<&[Record]> {
        window::select_range(&self.records, start_year, end_year)
    }

    /// See [`window::rolling_average`].
    pub fn rolling_average(&self, window_size: i64) -> Result<Series> {
        window::rolling_average(&self.records, window_size)
    }

    /// See [`window::cycle_residual`].
    pub fn cycle_residual(&self, cycle_length: f64) -> Result<Series> {
        window::cycle_residual(&self.records, cycle_length)
    }
}
