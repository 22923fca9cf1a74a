//! CSV ingestion — raw text to a sorted sequence of price observations.
//!
//! The accepted dialect is deliberately minimal: lines split on newlines,
//! fields split on commas, no quoting or escaping. Header names are matched
//! case-insensitively after trimming; the close column is the first header
//! named "close" or "adj close" in a left-to-right scan.
//!
//! Malformed rows are skipped, never fatal. The only fatal outcome is a
//! header without the required columns.

use crate::domain::PriceObservation;
use chrono::NaiveDate;
use thiserror::Error;

/// Errors from CSV ingestion.
#[derive(Debug, Error)]
pub enum CsvError {
    #[error("missing required columns: need \"date\" and \"close\" or \"adj close\"")]
    MissingColumns,
}

/// Accepted date layouts, tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

fn parse_date(field: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(field, fmt).ok())
}

/// Parse raw CSV text into price observations sorted by date ascending.
///
/// A row is kept only when its date field parses as a calendar date and its
/// close field parses as a finite number; everything else is dropped
/// silently. Header-only or fully dropped input yields an empty vector,
/// which callers surface as a "no valid data" advisory rather than an
/// error. Duplicate dates pass through unmerged, keeping their relative
/// row order.
pub fn parse_closes(raw: &str) -> Result<Vec<PriceObservation>, CsvError> {
    let mut lines = raw.lines();
    let header = loop {
        match lines.next() {
            Some(line) if !line.trim().is_empty() => break line,
            Some(_) => continue,
            None => return Ok(Vec::new()),
        }
    };

    let headers: Vec<String> = header
        .split(',')
        .map(|h| h.trim().to_ascii_lowercase())
        .collect();
    let date_idx = headers.iter().position(|h| h == "date");
    let close_idx = headers.iter().position(|h| h == "close" || h == "adj close");
    let (Some(date_idx), Some(close_idx)) = (date_idx, close_idx) else {
        return Err(CsvError::MissingColumns);
    };

    let mut observations = Vec::new();
    for line in lines {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let Some(&date_field) = fields.get(date_idx) else {
            continue;
        };
        let Some(&close_field) = fields.get(close_idx) else {
            continue;
        };
        if date_field.is_empty() {
            continue;
        }
        let Some(date) = parse_date(date_field) else {
            continue;
        };
        let Ok(close) = close_field.parse::<f64>() else {
            continue;
        };
        if !close.is_finite() {
            continue;
        }
        observations.push(PriceObservation { date, close });
    }

    // Stable sort: equal dates keep their row order.
    observations.sort_by_key(|obs| obs.date);
    Ok(observations)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_and_sorts_reverse_chronological_input() {
        let raw = "Date,Open,High,Low,Close,Adj Close,Volume\n\
                   2023-01-04,126.89,128.66,125.08,126.36,125.84,89113600\n\
                   2023-01-03,130.28,130.90,124.17,125.07,124.56,112117500\n";
        let parsed = parse_closes(raw).unwrap();

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].date, date(2023, 1, 3));
        assert_eq!(parsed[0].close, 125.07);
        assert_eq!(parsed[1].date, date(2023, 1, 4));
        assert_eq!(parsed[1].close, 126.36);
    }

    #[test]
    fn missing_close_columns_is_fatal() {
        let raw = "Date,Open,Volume\n2023-01-03,130.28,112117500\n";
        assert!(matches!(parse_closes(raw), Err(CsvError::MissingColumns)));
    }

    #[test]
    fn missing_date_column_is_fatal() {
        let raw = "Timestamp,Close\n2023-01-03,125.07\n";
        assert!(matches!(parse_closes(raw), Err(CsvError::MissingColumns)));
    }

    #[test]
    fn header_only_returns_empty() {
        let parsed = parse_closes("Date,Close\n").unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn empty_input_returns_empty() {
        assert!(parse_closes("").unwrap().is_empty());
        assert!(parse_closes("\n\n  \n").unwrap().is_empty());
    }

    #[test]
    fn header_match_is_case_insensitive_and_trimmed() {
        let raw = " DATE , CLOSE \n2023-01-03,125.07\n";
        let parsed = parse_closes(raw).unwrap();
        assert_eq!(parsed.len(), 1);
    }

    #[test]
    fn adj_close_satisfies_close_requirement() {
        let raw = "Date,Adj Close\n2023-01-03,124.56\n";
        let parsed = parse_closes(raw).unwrap();
        assert_eq!(parsed[0].close, 124.56);
    }

    #[test]
    fn close_wins_when_listed_before_adj_close() {
        let raw = "Date,Close,Adj Close\n2023-01-03,125.07,124.56\n";
        let parsed = parse_closes(raw).unwrap();
        assert_eq!(parsed[0].close, 125.07);
    }

    #[test]
    fn first_accepted_close_header_wins() {
        // Left-to-right scan: whichever accepted name appears first is used.
        let raw = "Date,Adj Close,Close\n2023-01-03,124.56,125.07\n";
        let parsed = parse_closes(raw).unwrap();
        assert_eq!(parsed[0].close, 124.56);
    }

    #[test]
    fn empty_close_field_is_dropped_silently() {
        let raw = "Date,Close\n2023-01-05,\n2023-01-03,125.07\n";
        let parsed = parse_closes(raw).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].date, date(2023, 1, 3));
    }

    #[test]
    fn non_numeric_close_is_dropped() {
        let raw = "Date,Close\n2023-01-03,n/a\n2023-01-04,126.36\n";
        let parsed = parse_closes(raw).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].date, date(2023, 1, 4));
    }

    #[test]
    fn non_finite_close_is_dropped() {
        let raw = "Date,Close\n2023-01-03,inf\n2023-01-04,NaN\n2023-01-05,126.36\n";
        let parsed = parse_closes(raw).unwrap();
        assert_eq!(parsed.len(), 1);
    }

    #[test]
    fn empty_date_field_is_dropped() {
        let raw = "Date,Close\n,125.07\n2023-01-04,126.36\n";
        let parsed = parse_closes(raw).unwrap();
        assert_eq!(parsed.len(), 1);
    }

    #[test]
    fn unparseable_date_is_dropped() {
        let raw = "Date,Close\nJanuary third,125.07\n2023-01-04,126.36\n";
        let parsed = parse_closes(raw).unwrap();
        assert_eq!(parsed.len(), 1);
    }

    #[test]
    fn short_rows_are_dropped() {
        let raw = "Date,Open,Close\n2023-01-03,130.28\n2023-01-04,126.89,126.36\n";
        let parsed = parse_closes(raw).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].date, date(2023, 1, 4));
    }

    #[test]
    fn fields_are_trimmed() {
        let raw = "Date,Close\n 2023-01-03 , 125.07 \n";
        let parsed = parse_closes(raw).unwrap();
        assert_eq!(parsed[0].close, 125.07);
    }

    #[test]
    fn slash_dates_are_accepted() {
        let raw = "Date,Close\n1/3/2023,125.07\n";
        let parsed = parse_closes(raw).unwrap();
        assert_eq!(parsed[0].date, date(2023, 1, 3));
    }

    #[test]
    fn blank_lines_before_header_are_skipped() {
        let raw = "\n\nDate,Close\n2023-01-03,125.07\n";
        let parsed = parse_closes(raw).unwrap();
        assert_eq!(parsed.len(), 1);
    }

    #[test]
    fn duplicate_dates_pass_through_in_row_order() {
        let raw = "Date,Close\n2023-01-03,125.07\n2023-01-03,126.36\n";
        let parsed = parse_closes(raw).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].close, 125.07);
        assert_eq!(parsed[1].close, 126.36);
    }

    #[test]
    fn all_rows_dropped_returns_empty_not_error() {
        let raw = "Date,Close\n2023-01-03,\nbad row\n";
        let parsed = parse_closes(raw).unwrap();
        assert!(parsed.is_empty());
    }
}
