use csv::{Reader, ReaderBuilder, StringRecord, Trim};
use log::{debug, warn};
use std::io::Read;
use std::path::Path;

use crate::error::{Field, InputError, LoadError};
use crate::schedule::{Interval, Schedule};

/// Parses a comma-separated list of integers such as `"1, 3,0,5"`.
///
/// Whitespace around each token is ignored. Empty tokens (including an empty
/// field or a trailing comma) are rejected like any other non-integer.
pub fn parse_time_list(input: &str, field: Field) -> Result<Vec<i64>, InputError> {
    input
        .trim()
        .split(',')
        .map(|token| {
            let token = token.trim();
            token.parse::<i64>().map_err(|_| InputError::Parse {
                field,
                token: token.to_string(),
            })
        })
        .collect()
}

/// Parses both form fields and pairs them into a schedule.
/// Both fields are parsed before the lengths are compared.
pub fn parse_schedule(start_input: &str, end_input: &str) -> Result<Schedule, InputError> {
    let starts = parse_time_list(start_input, Field::Start)?;
    let ends = parse_time_list(end_input, Field::End)?;
    Schedule::from_parallel(&starts, &ends)
}

/// Loads a schedule from a CSV file with `start` and `end` columns
pub fn load_schedule<P: AsRef<Path>>(csv_path: P) -> Result<Schedule, LoadError> {
    let reader = csv_reader().from_path(csv_path)?;
    read_schedule(reader)
}

/// Reader settings shared by file and in-memory sources: ragged rows are
/// allowed through so that short rows can be skipped instead of failing.
pub fn csv_reader() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder.flexible(true).trim(Trim::All);
    builder
}

/// Reads a schedule from any CSV source. Column positions are taken from the
/// header ("start"/"end", case-insensitive), falling back to the first two
/// columns. Rows with fewer than two fields are skipped.
pub fn read_schedule<R: Read>(mut reader: Reader<R>) -> Result<Schedule, LoadError> {
    let headers = reader.headers()?.clone();
    let start_col = find_column(&headers, "start").unwrap_or(0);
    let end_col = find_column(&headers, "end").unwrap_or(1);
    debug!("reading schedule: start column {}, end column {}", start_col, end_col);

    let mut intervals = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let record = result?;
        // header is line 1
        let row = i + 2;

        if record.len() < 2 {
            warn!("skipping incomplete row {}", row);
            continue;
        }

        let start = parse_cell(&record, start_col, row, "start")?;
        let end = parse_cell(&record, end_col, row, "end")?;
        intervals.push(Interval::new(start, end));
    }

    Ok(Schedule { intervals })
}

fn find_column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.trim().to_lowercase().contains(name))
}

fn parse_cell(record: &StringRecord, col: usize, row: usize, column: &'static str) -> Result<i64, LoadError> {
    let value = record.get(col).unwrap_or("").trim();
    value.parse().map_err(|_| LoadError::InvalidValue {
        row,
        column,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader(data: &str) -> Reader<&[u8]> {
        csv_reader().from_reader(data.as_bytes())
    }

    #[test]
    fn parses_default_example() {
        let schedule = parse_schedule("1,3,0,5,8,5", "2,4,6,7,9,9").unwrap();
        assert_eq!(schedule.starts(), vec![1, 3, 0, 5, 8, 5]);
        assert_eq!(schedule.ends(), vec![2, 4, 6, 7, 9, 9]);
    }

    #[test]
    fn tolerates_whitespace_and_signs() {
        let list = parse_time_list("  1, -2 ,+3 ", Field::Start).unwrap();
        assert_eq!(list, vec![1, -2, 3]);
    }

    #[test]
    fn malformed_token_is_a_parse_error() {
        let err = parse_schedule("1,a,3", "2,4,6").unwrap_err();
        assert_eq!(
            err,
            InputError::Parse { field: Field::Start, token: "a".to_string() }
        );
        assert_eq!(err.to_string(), "Please enter only integers, separated by commas.");
    }

    #[test]
    fn malformed_end_reports_end_field() {
        let err = parse_schedule("1,2", "3,x").unwrap_err();
        assert!(matches!(err, InputError::Parse { field: Field::End, .. }));
    }

    #[test]
    fn empty_field_and_trailing_comma_are_rejected() {
        assert!(parse_time_list("", Field::Start).is_err());
        assert!(parse_time_list("1,2,", Field::Start).is_err());
        assert!(parse_time_list("1.5", Field::Start).is_err());
    }

    #[test]
    fn mismatched_lengths() {
        let err = parse_schedule("1,2", "1").unwrap_err();
        assert_eq!(err, InputError::LengthMismatch { starts: 2, ends: 1 });
        assert_eq!(err.to_string(), "Start and End time lists must be the same length.");
    }

    #[test]
    fn parse_error_wins_over_length_mismatch() {
        let err = parse_schedule("1,2,3", "x").unwrap_err();
        assert!(matches!(err, InputError::Parse { .. }));
    }

    #[test]
    fn reads_csv_by_header_name() {
        let schedule = read_schedule(reader("label,end,start\nA1,2,1\nA2,4,3\n")).unwrap();
        assert_eq!(schedule.intervals, vec![Interval::new(1, 2), Interval::new(3, 4)]);
    }

    #[test]
    fn csv_without_named_headers_uses_first_columns() {
        let schedule = read_schedule(reader("a,b\n5,7\n8,9\n")).unwrap();
        assert_eq!(schedule.starts(), vec![5, 8]);
        assert_eq!(schedule.ends(), vec![7, 9]);
    }

    #[test]
    fn csv_short_rows_are_skipped() {
        let schedule = read_schedule(reader("start,end\n1,2\n7\n3,4\n")).unwrap();
        assert_eq!(schedule.len(), 2);
    }

    #[test]
    fn csv_bad_value_reports_row() {
        let err = read_schedule(reader("start,end\n1,2\n3,oops\n")).unwrap_err();
        match err {
            LoadError::InvalidValue { row, column, value } => {
                assert_eq!(row, 3);
                assert_eq!(column, "end");
                assert_eq!(value, "oops");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
