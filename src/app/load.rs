// logtally - app/load.rs
//
// Log loading: drives a LineSource through the line parser and collects the
// records in file order. Loading is fail-fast: the first unreadable or
// malformed line aborts the whole load and no partial result is returned.

use crate::core::model::LogRecord;
use crate::core::parser;
use crate::platform::fs::LineSource;
use crate::util::error::{LogTallyError, Result};
use std::io::BufRead;
use std::path::Path;

/// Load every record from the log file at `path`, in file order.
///
/// Fails with `SourceError::NotFound` for a missing path or non-regular file,
/// `SourceError::Io` for read failures and `ParseError::MalformedLine` for
/// the first line that does not match the grammar.
pub fn load_logs(path: &Path) -> Result<Vec<LogRecord>> {
    let source = LineSource::open(path).map_err(|e| {
        tracing::warn!(path = %path.display(), error = %e, "Cannot open log file");
        LogTallyError::from(e)
    })?;
    load_from_source(source)
}

/// Load records from an already-open line source.
///
/// The source is consumed; its reader is released when this returns,
/// whether loading succeeded or not.
pub fn load_from_source<R: BufRead>(mut source: LineSource<R>) -> Result<Vec<LogRecord>> {
    let path = source.path().to_path_buf();
    let mut records = Vec::new();

    for line in source.by_ref() {
        let line = line.map_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Read failed");
            LogTallyError::from(e)
        })?;

        let record = parser::parse_line(line.number, &line.text).map_err(|e| {
            tracing::warn!(
                path = %path.display(),
                line = line.number,
                error = %e,
                "Malformed line; aborting load"
            );
            LogTallyError::from(e)
        })?;

        records.push(record);
    }

    tracing::info!(
        path = %path.display(),
        lines = source.lines_read(),
        records = records.len(),
        "Log file loaded"
    );

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Level;
    use crate::util::error::{MalformedReason, ParseError, SourceError};
    use std::io::Cursor;

    fn load_str(content: &str) -> Result<Vec<LogRecord>> {
        load_from_source(LineSource::from_reader("mem.log", Cursor::new(content.to_string())))
    }

    #[test]
    fn test_load_preserves_order_and_count() {
        let records = load_str(
            "2024-01-01 10:00:00 INFO Starting service\n\
             2024-01-01 10:00:05 ERROR Connection failed\n\
             2024-01-01 10:00:06 ERROR Retry failed\n\
             2024-01-01 10:00:07 INFO Recovered\n",
        )
        .unwrap();

        assert_eq!(records.len(), 4);
        let lines: Vec<_> = records.iter().map(|r| r.line_number).collect();
        assert_eq!(lines, vec![1, 2, 3, 4]);
        assert_eq!(records[1].level, Level::Error);
        assert_eq!(records[3].message, "Recovered");
    }

    #[test]
    fn test_empty_input_loads_nothing() {
        assert!(load_str("").unwrap().is_empty());
    }

    #[test]
    fn test_fails_on_first_malformed_line() {
        let result = load_str(
            "2024-01-01 10:00:00 INFO ok\n\
             not a log line\n\
             also bad\n",
        );
        match result {
            Err(LogTallyError::Parse(ParseError::MalformedLine {
                line_number,
                reason,
                ..
            })) => {
                assert_eq!(line_number, 2);
                assert_eq!(reason, MalformedReason::PatternMismatch);
            }
            other => panic!("expected MalformedLine, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_line_is_malformed() {
        let result = load_str("2024-01-01 10:00:00 INFO ok\n\n");
        assert!(matches!(
            result,
            Err(LogTallyError::Parse(ParseError::MalformedLine { line_number: 2, .. }))
        ));
    }

    #[test]
    fn test_read_error_propagates() {
        let bytes: Vec<u8> = b"2024-01-01 10:00:00 INFO ok\n\xff\n".to_vec();
        let result = load_from_source(LineSource::from_reader("bin.log", Cursor::new(bytes)));
        assert!(matches!(
            result,
            Err(LogTallyError::Source(SourceError::Io { .. }))
        ));
    }
}
