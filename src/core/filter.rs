// logtally - core/filter.rs
//
// Severity filter over loaded records.
// Core layer: pure logic, no I/O.

use crate::core::model::{Level, LogRecord};
use crate::util::error::FilterError;

/// Select the records whose level equals the requested level.
///
/// `requested` is case-insensitive and is validated before any record is
/// looked at, so an unknown level fails even for an empty slice. The result
/// borrows from `records` and keeps their original order.
pub fn filter_by_level<'a>(
    records: &'a [LogRecord],
    requested: &str,
) -> Result<Vec<&'a LogRecord>, FilterError> {
    let level = Level::normalize(requested)?;
    let selected = select_level(records, level);

    tracing::debug!(
        level = %level,
        selected = selected.len(),
        total = records.len(),
        "Severity filter applied"
    );

    Ok(selected)
}

/// Infallible variant for callers that already hold a validated `Level`.
pub fn select_level(records: &[LogRecord], level: Level) -> Vec<&LogRecord> {
    records.iter().filter(|r| r.level == level).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_record(line_number: u64, level: Level, message: &str) -> LogRecord {
        LogRecord {
            line_number,
            timestamp: NaiveDate::from_ymd_opt(2024, 1, 1)
                .and_then(|d| d.and_hms_opt(10, 0, line_number as u32))
                .unwrap(),
            level,
            message: message.to_string(),
        }
    }

    fn sample() -> Vec<LogRecord> {
        vec![
            make_record(1, Level::Info, "Starting service"),
            make_record(2, Level::Error, "Connection failed"),
            make_record(3, Level::Error, "Retry failed"),
            make_record(4, Level::Info, "Recovered"),
        ]
    }

    #[test]
    fn test_filter_is_case_insensitive_and_ordered() {
        let records = sample();
        let result = filter_by_level(&records, "error").unwrap();
        let messages: Vec<_> = result.iter().map(|r| r.message.as_str()).collect();
        assert_eq!(messages, vec!["Connection failed", "Retry failed"]);
    }

    #[test]
    fn test_filter_absent_level_returns_empty() {
        let records = sample();
        assert!(filter_by_level(&records, "WARNING").unwrap().is_empty());
    }

    #[test]
    fn test_invalid_level_fails_even_when_empty() {
        let empty: Vec<LogRecord> = Vec::new();
        assert!(matches!(
            filter_by_level(&empty, "trace"),
            Err(FilterError::InvalidLevel { .. })
        ));
        assert!(matches!(
            filter_by_level(&sample(), "warn"),
            Err(FilterError::InvalidLevel { .. })
        ));
    }

    #[test]
    fn test_filter_borrows_original_records() {
        let records = sample();
        let result = filter_by_level(&records, "Info").unwrap();
        assert!(std::ptr::eq(result[0], &records[0]));
        assert!(std::ptr::eq(result[1], &records[3]));
    }
}
