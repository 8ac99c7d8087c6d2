// logtally - ui/report.rs
//
// Plain-text rendering of severity counts and filtered records.
// Pure formatting: takes already-aggregated data, returns a String.

use crate::core::model::{Level, LogRecord};
use crate::core::summary::SeverityCounts;
use std::fmt::Write;

/// Render the two-column `Level | Count` table.
///
/// Rows follow the iteration order of `counts` (first-seen order). The level
/// column is padded to `column_width`.
pub fn render_counts(counts: &SeverityCounts, column_width: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<column_width$} | Count", "Level");
    let _ = writeln!(out, "{} | {}", "-".repeat(column_width), "-".repeat(9));
    for (level, count) in counts.iter() {
        let _ = writeln!(out, "{:<column_width$} | {count}", level.as_str());
    }
    out
}

/// Render the detail view for one level: a heading, then one
/// `YYYY-MM-DD HH:MM:SS - message` line per record.
pub fn render_details(level: Level, records: &[&LogRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Log details for level '{level}':");
    for record in records {
        let _ = writeln!(out, "{} - {}", record.timestamp_text(), record.message);
    }
    out
}
