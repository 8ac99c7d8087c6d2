// logtally - core/export.rs
//
// CSV and JSON rendering of severity counts and filtered records.
// Core layer: writes to any Write trait object.

use crate::core::model::{Level, LogRecord};
use crate::core::summary::SeverityCounts;
use crate::util::error::ExportError;
use serde::Serialize;
use std::io::Write;

/// Write the counts table and, when a level was requested, the matching
/// records as CSV.
///
/// Layout: a `level,count` table, then a blank line and a
/// `line,timestamp,level,message` table if `details` is present.
pub fn export_csv<W: Write>(
    counts: &SeverityCounts,
    details: Option<(Level, &[&LogRecord])>,
    mut writer: W,
) -> Result<(), ExportError> {
    {
        let mut csv_writer = csv::Writer::from_writer(&mut writer);
        csv_writer
            .write_record(["level", "count"])
            .map_err(|source| ExportError::Csv { source })?;
        for (level, count) in counts.iter() {
            let count = count.to_string();
            csv_writer
                .write_record([level.as_str(), count.as_str()])
                .map_err(|source| ExportError::Csv { source })?;
        }
        csv_writer
            .flush()
            .map_err(|source| ExportError::Io { source })?;
    }

    if let Some((_, records)) = details {
        writeln!(writer).map_err(|source| ExportError::Io { source })?;

        let mut csv_writer = csv::Writer::from_writer(&mut writer);
        csv_writer
            .write_record(["line", "timestamp", "level", "message"])
            .map_err(|source| ExportError::Csv { source })?;
        for record in records {
            let line_number = record.line_number.to_string();
            let timestamp = record.timestamp_text();
            csv_writer
                .write_record([
                    line_number.as_str(),
                    timestamp.as_str(),
                    record.level.as_str(),
                    record.message.as_str(),
                ])
                .map_err(|source| ExportError::Csv { source })?;
        }
        csv_writer
            .flush()
            .map_err(|source| ExportError::Io { source })?;
    }

    Ok(())
}

/// Shape of the JSON report document.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    counts: &'a SeverityCounts,
    #[serde(skip_serializing_if = "Option::is_none")]
    level: Option<Level>,
    #[serde(skip_serializing_if = "Option::is_none")]
    records: Option<&'a [&'a LogRecord]>,
}

/// Write the counts and optional filtered records as one pretty-printed
/// JSON object.
pub fn export_json<W: Write>(
    counts: &SeverityCounts,
    details: Option<(Level, &[&LogRecord])>,
    mut writer: W,
) -> Result<(), ExportError> {
    let report = JsonReport {
        counts,
        level: details.map(|(level, _)| level),
        records: details.map(|(_, records)| records),
    };
    serde_json::to_writer_pretty(&mut writer, &report)
        .map_err(|source| ExportError::Json { source })?;
    writeln!(writer).map_err(|source| ExportError::Io { source })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::summary::count_by_level;
    use chrono::NaiveDate;

    fn make_record(line_number: u64, level: Level, message: &str) -> LogRecord {
        LogRecord {
            line_number,
            timestamp: NaiveDate::from_ymd_opt(2024, 1, 1)
                .and_then(|d| d.and_hms_opt(10, 0, 5))
                .unwrap(),
            level,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_csv_counts_only() {
        let records = vec![
            make_record(1, Level::Info, "a"),
            make_record(2, Level::Error, "b"),
            make_record(3, Level::Info, "c"),
        ];
        let mut buf = Vec::new();
        export_csv(&count_by_level(&records), None, &mut buf).unwrap();

        let output = String::from_utf8(buf).unwrap();
        assert_eq!(output, "level,count\nINFO,2\nERROR,1\n");
    }

    #[test]
    fn test_csv_with_details_quotes_messages() {
        let records = vec![
            make_record(1, Level::Info, "ok"),
            make_record(2, Level::Error, "failed, retrying"),
        ];
        let selected: Vec<&LogRecord> = records.iter().filter(|r| r.level == Level::Error).collect();
        let mut buf = Vec::new();
        export_csv(
            &count_by_level(&records),
            Some((Level::Error, selected.as_slice())),
            &mut buf,
        )
        .unwrap();

        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("\n\nline,timestamp,level,message\n"), "got: {output}");
        assert!(output.contains("2,2024-01-01 10:00:05,ERROR,\"failed, retrying\""));
    }

    #[test]
    fn test_json_report_shape() {
        let records = vec![
            make_record(1, Level::Error, "Connection failed"),
            make_record(2, Level::Info, "Recovered"),
        ];
        let selected: Vec<&LogRecord> = records.iter().filter(|r| r.level == Level::Error).collect();
        let mut buf = Vec::new();
        export_json(
            &count_by_level(&records),
            Some((Level::Error, selected.as_slice())),
            &mut buf,
        )
        .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["counts"]["ERROR"], 1);
        assert_eq!(value["level"], "ERROR");
        assert_eq!(value["records"][0]["timestamp"], "2024-01-01 10:00:05");
        assert_eq!(value["records"][0]["message"], "Connection failed");
        assert_eq!(value["records"].as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn test_json_without_level_omits_records() {
        let records = vec![make_record(1, Level::Debug, "x")];
        let mut buf = Vec::new();
        export_json(&count_by_level(&records), None, &mut buf).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert!(value.get("records").is_none());
        assert!(value.get("level").is_none());
    }
}
