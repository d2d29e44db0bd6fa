//! Year-range selection, centered rolling mean and cycle folding.
//!
//! All operations borrow the loaded records and never modify them.

use crate::error::{Result, SunspotError};

use super::model::Record;
use super::series::{Series, SeriesStyle};

pub const RAW_SERIES_NAME: &str = "Monthly Total";
pub const SMOOTHED_SERIES_NAME: &str = "Smoothed Total";
pub const RESIDUAL_SERIES_NAME: &str = "Cycle Residual";

// ---------------------------------------------------------------------------
// Range selection
// ---------------------------------------------------------------------------

/// Return the contiguous run of records from the first record of
/// `start_year` through the last record of `end_year`, both inclusive.
pub fn select_range(records: &[Record], start_year: i32, end_year: i32) -> Result<&[Record]> {
    if start_year > end_year {
        return Err(SunspotError::InvertedRange {
            start: start_year,
            end: end_year,
        });
    }

    let begin = records
        .iter()
        .position(|r| r.year == start_year)
        .ok_or(SunspotError::YearNotFound { year: start_year })?;
    let last = records
        .iter()
        .rposition(|r| r.year == end_year)
        .ok_or(SunspotError::YearNotFound { year: end_year })?;

    // Empty only if the records are out of order.
    Ok(records.get(begin..=last).unwrap_or(&[]))
}

// ---------------------------------------------------------------------------
// Series builders
// ---------------------------------------------------------------------------

/// The unsmoothed `(date_fraction, monthly_total)` series.
pub fn raw_series(records: &[Record]) -> Series {
    let points = records
        .iter()
        .map(|r| [r.date_fraction, r.monthly_total])
        .collect();
    Series::new(RAW_SERIES_NAME, SeriesStyle::Line, points)
}

/// Centered rolling mean of `monthly_total`.
///
/// The window for row `i` spans `i - floor((w-1)/2) ..= i + ceil((w-1)/2)`.
/// Rows whose window would run past either end are dropped, so the output
/// has `len - (w - 1)` points, or none when `w > len`.
pub fn rolling_average(records: &[Record], window_size: i64) -> Result<Series> {
    if window_size <= 0 {
        return Err(SunspotError::param("smoothing window", window_size));
    }
    let window = usize::try_from(window_size)
        .map_err(|_| SunspotError::param("smoothing window", window_size))?;
    let lead = (window - 1) / 2;

    let points = records
        .windows(window)
        .map(|slice| {
            let sum: f64 = slice.iter().map(|r| r.monthly_total).sum();
            [slice[lead].date_fraction, sum / window as f64]
        })
        .collect();

    Ok(Series::new(SMOOTHED_SERIES_NAME, SeriesStyle::Line, points))
}

/// Fold every record onto a single cycle: `(date_fraction mod cycle, total)`.
pub fn cycle_residual(records: &[Record], cycle_length: f64) -> Result<Series> {
    if !cycle_length.is_finite() || cycle_length <= 0.0 {
        return Err(SunspotError::param("cycle length", cycle_length));
    }

    let points = records
        .iter()
        .map(|r| [residual(r.date_fraction, cycle_length), r.monthly_total])
        .collect();

    Ok(Series::new(RESIDUAL_SERIES_NAME, SeriesStyle::Scatter, points))
}

/// Non-negative real modulo, strictly below `cycle_length`.
fn residual(value: f64, cycle_length: f64) -> f64 {
    let r = value.rem_euclid(cycle_length);
    // rem_euclid may round up to exactly `cycle_length` for tiny negatives.
    if r >= cycle_length {
        0.0
    } else {
        r
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Marker;
    use crate::error::ErrorKind;

    fn record(year: i32, month: u8, total: f64) -> Record {
        Record {
            year,
            month,
            date_fraction: year as f64 + (month as f64 - 0.5) / 12.0,
            monthly_total: total,
            mean_std_dev: 1.0,
            num_observations: 10,
            marker: Marker::Definitive,
        }
    }

    /// Three records per year for 2000..=2002.
    fn skeleton() -> Vec<Record> {
        (2000..=2002)
            .flat_map(|y| [1u8, 5, 9].map(|m| record(y, m, (y - 2000) as f64 * 10.0 + m as f64)))
            .collect()
    }

    #[test]
    fn select_single_year() {
        let records = skeleton();
        let sel = select_range(&records, 2001, 2001).unwrap();
        assert_eq!(sel.len(), 3);
        assert!(sel.iter().all(|r| r.year == 2001));
        assert_eq!(sel[0].month, 1);
        assert_eq!(sel[2].month, 9);
    }

    #[test]
    fn select_keeps_all_months_of_boundary_years() {
        let records = skeleton();
        let sel = select_range(&records, 2000, 2001).unwrap();
        assert_eq!(sel.len(), 6);
        assert_eq!(sel.first().unwrap().year, 2000);
        assert_eq!(sel.last().unwrap().year, 2001);
        assert_eq!(sel.last().unwrap().month, 9);
    }

    #[test]
    fn select_missing_year_is_range_error() {
        let records = skeleton();
        let err = select_range(&records, 3000, 3000).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        assert!(matches!(err, SunspotError::YearNotFound { year: 3000 }));

        let err = select_range(&records, 2000, 2023).unwrap_err();
        assert!(matches!(err, SunspotError::YearNotFound { year: 2023 }));
    }

    #[test]
    fn select_inverted_bounds_is_rejected() {
        let records = skeleton();
        let err = select_range(&records, 2002, 2000).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        assert!(matches!(
            err,
            SunspotError::InvertedRange { start: 2002, end: 2000 }
        ));
    }

    #[test]
    fn rolling_three_over_one_to_five() {
        let records: Vec<Record> = (1..=5).map(|m| record(2000, m, m as f64)).collect();
        let smoothed = rolling_average(&records, 3).unwrap();
        assert_eq!(smoothed.ys().collect::<Vec<_>>(), vec![2.0, 3.0, 4.0]);
        // Centered: the first average sits on the second record.
        assert_eq!(smoothed.points[0][0], records[1].date_fraction);
        assert_eq!(smoothed.points[2][0], records[3].date_fraction);
        assert_eq!(smoothed.style, SeriesStyle::Line);
    }

    #[test]
    fn rolling_even_window_leans_right() {
        let records: Vec<Record> = (1..=6).map(|m| record(2000, m, m as f64)).collect();
        let smoothed = rolling_average(&records, 4).unwrap();
        assert_eq!(smoothed.len(), 3);
        // Window for row 1 is rows 0..=3.
        assert_eq!(smoothed.points[0], [records[1].date_fraction, 2.5]);
    }

    #[test]
    fn rolling_window_one_is_identity() {
        let records = skeleton();
        let smoothed = rolling_average(&records, 1).unwrap();
        assert_eq!(smoothed.points, raw_series(&records).points);
    }

    #[test]
    fn rolling_window_longer_than_input_is_empty() {
        let records = skeleton();
        let smoothed = rolling_average(&records, 10).unwrap();
        assert!(smoothed.is_empty());
    }

    #[test]
    fn rolling_rejects_non_positive_window() {
        let records = skeleton();
        for w in [0, -3] {
            let err = rolling_average(&records, w).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Param);
        }
    }

    #[test]
    fn residual_folds_dates() {
        let records = vec![record(2000, 1, 5.0), record(2011, 1, 7.0)];
        let folded = cycle_residual(&records, 11.0).unwrap();
        assert_eq!(folded.style, SeriesStyle::Scatter);
        assert!((folded.points[0][0] - folded.points[1][0]).abs() < 1e-9);
        assert_eq!(folded.ys().collect::<Vec<_>>(), vec![5.0, 7.0]);
    }

    #[test]
    fn residual_rejects_bad_cycle() {
        let records = skeleton();
        for c in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = cycle_residual(&records, c).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Param);
        }
    }

    #[test]
    fn residual_never_reaches_cycle_length() {
        assert_eq!(residual(-1e-20, 11.0), 0.0);
        assert_eq!(residual(22.0, 11.0), 0.0);
        assert!((residual(2023.5, 11.0) - 10.5).abs() < 1e-9);
    }
}
