use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::{Result, SunspotError};

use super::model::{order_violation, Marker, Record, Table};

/// Number of semicolon-separated fields on every line.
pub const FIELD_COUNT: usize = 7;

const FIELD_NAMES: [&str; FIELD_COUNT] = [
    "year",
    "month",
    "date fraction",
    "monthly total",
    "mean std dev",
    "number of observations",
    "marker",
];

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a monthly sunspot dataset from a file on disk.
pub fn load_file(path: &Path) -> Result<Table> {
    let file = File::open(path)?;
    load_reader(file)
}

/// Load a monthly sunspot dataset from any byte stream.
///
/// Layout, one month per line, no header:
///
/// ```text
/// Year;Month;DateFraction;MonthlyTotal;MeanStdDev;NumObservations;Marker
/// 1749;01;1749.042;  96.7; -1.0;   -1;1
/// ```
///
/// Fields may be padded with spaces. Rows must be strictly increasing in
/// `(year, month)` and in date fraction.
pub fn load_reader<R: Read>(reader: R) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut records: Vec<Record> = Vec::new();

    for result in reader.records() {
        let row = result.map_err(csv_error)?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        let record = parse_row(&row, line)?;

        if let Some(prev) = records.last() {
            if let Some(message) = order_violation(prev, &record) {
                return Err(SunspotError::parse(line, message));
            }
        }

        records.push(record);
    }

    Ok(Table::from_ordered(records))
}

// ---------------------------------------------------------------------------
// Row parsing
// ---------------------------------------------------------------------------

fn parse_row(row: &StringRecord, line: u64) -> Result<Record> {
    if row.len() != FIELD_COUNT {
        return Err(SunspotError::parse(
            line,
            format!("expected {FIELD_COUNT} fields, found {}", row.len()),
        ));
    }

    let month: u8 = parse_field(row, 1, line)?;
    if !(1..=12).contains(&month) {
        return Err(SunspotError::parse(line, format!("month {month} out of range 1-12")));
    }

    let marker_text = &row[6];
    let marker = Marker::from_field(marker_text).ok_or_else(|| {
        SunspotError::parse(line, format!("marker: '{marker_text}' is not 0 or 1"))
    })?;

    Ok(Record {
        year: parse_field(row, 0, line)?,
        month,
        date_fraction: parse_real(row, 2, line)?,
        monthly_total: parse_real(row, 3, line)?,
        mean_std_dev: parse_real(row, 4, line)?,
        num_observations: parse_field(row, 5, line)?,
        marker,
    })
}

fn parse_field<T: FromStr>(row: &StringRecord, idx: usize, line: u64) -> Result<T> {
    let text = &row[idx];
    text.parse::<T>().map_err(|_| {
        SunspotError::parse(line, format!("{}: '{text}' is not a number", FIELD_NAMES[idx]))
    })
}

fn parse_real(row: &StringRecord, idx: usize, line: u64) -> Result<f64> {
    let value: f64 = parse_field(row, idx, line)?;
    if !value.is_finite() {
        return Err(SunspotError::parse(
            line,
            format!("{}: '{}' is not a finite number", FIELD_NAMES[idx], &row[idx]),
        ));
    }
    Ok(value)
}

fn csv_error(err: csv::Error) -> SunspotError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(e) => SunspotError::Io(e),
        _ => SunspotError::parse(line, message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const SAMPLE: &str = "\
1749;01;1749.042;  96.7; -1.0;   -1;1
1749;02;1749.123; 104.3; -1.0;   -1;1
1749;03;1749.204; 116.7; -1.0;   -1;1
2023;11;2023.873; 105.4; 16.2; 1207;0
";

    #[test]
    fn loads_padded_rows_in_order() {
        let table = load_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(table.len(), 4);

        let first = &table.records()[0];
        assert_eq!(first.year, 1749);
        assert_eq!(first.month, 1);
        assert_eq!(first.date_fraction, 1749.042);
        assert_eq!(first.monthly_total, 96.7);
        assert_eq!(first.mean_std_dev, -1.0);
        assert_eq!(first.num_observations, -1);
        assert_eq!(first.marker, Marker::Definitive);

        let last = &table.records()[3];
        assert_eq!(last.marker, Marker::Provisional);
        assert_eq!(last.num_observations, 1207);
        assert_eq!(table.first_year(), Some(1749));
        assert_eq!(table.last_year(), Some(2023));
    }

    #[test]
    fn empty_input_is_empty_table() {
        let table = load_reader("".as_bytes()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn blank_lines_are_skipped() {
        let text = "2000;01;2000.042;1.0;0.1;3;1\n\n2000;02;2000.123;2.0;0.1;3;1\n";
        assert_eq!(load_reader(text.as_bytes()).unwrap().len(), 2);
    }

    #[test]
    fn wrong_field_count_reports_line() {
        let text = "2000;01;2000.042;1.0;0.1;3;1\n2000;02;2000.123;2.0;0.1\n";
        let err = load_reader(text.as_bytes()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        match err {
            SunspotError::Parse { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("expected 7 fields, found 5"), "{message}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_numeric_field_is_parse_error() {
        let text = "2000;01;2000.042;lots;0.1;3;1\n";
        let err = load_reader(text.as_bytes()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(err.to_string().contains("monthly total: 'lots'"), "{err}");
    }

    #[test]
    fn bad_month_and_marker_are_rejected() {
        let err = load_reader("2000;13;2000.042;1.0;0.1;3;1\n".as_bytes()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        let err = load_reader("2000;01;2000.042;1.0;0.1;3;x\n".as_bytes()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn duplicate_month_is_rejected() {
        let text = "2000;01;2000.042;1.0;0.1;3;1\n2000;01;2000.050;2.0;0.1;3;1\n";
        let err = load_reader(text.as_bytes()).unwrap_err();
        assert!(matches!(err, SunspotError::Parse { line: 2, .. }));
    }

    #[test]
    fn date_fraction_must_increase() {
        let text = "2000;01;2000.500;1.0;0.1;3;1\n2000;02;2000.100;2.0;0.1;3;1\n";
        let err = load_reader(text.as_bytes()).unwrap_err();
        match err {
            SunspotError::Parse { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("date fraction 2000.1 is not after 2000.5"), "{message}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_finite_reals_are_rejected() {
        for text in [
            "2000;01;NaN;1.0;0.1;3;1\n",
            "2000;01;2000.042;inf;0.1;3;1\n",
            "2000;01;2000.042;1.0;-inf;3;1\n",
        ] {
            let err = load_reader(text.as_bytes()).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Parse, "{text}");
            assert!(err.to_string().contains("is not a finite number"), "{err}");
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_file(Path::new("/nonexistent/monthly_sunspot.csv")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
