// logtally - core/parser.rs
//
// Single-line log parsing against the fixed grammar
//   <YYYY-MM-DD HH:MM:SS> <LEVEL> <message>
// Core layer: works on strings handed over by the line source and never
// touches the filesystem.

use crate::core::model::{Level, LogRecord};
use crate::util::constants;
use crate::util::error::{MalformedReason, ParseError};
use chrono::{NaiveDateTime, Timelike};
use regex::Regex;
use std::sync::OnceLock;

/// The compiled line pattern, built once per process.
fn line_regex() -> &'static Regex {
    static LINE_RE: OnceLock<Regex> = OnceLock::new();
    // The pattern is a compile-time constant covered by the tests below, so a
    // mistake there shows up as a failing test rather than a runtime panic.
    LINE_RE.get_or_init(|| Regex::new(constants::LINE_PATTERN).expect("LINE_PATTERN is valid"))
}

fn timestamp_shape_regex() -> &'static Regex {
    static SHAPE_RE: OnceLock<Regex> = OnceLock::new();
    SHAPE_RE.get_or_init(|| {
        Regex::new(constants::TIMESTAMP_SHAPE_PATTERN).expect("TIMESTAMP_SHAPE_PATTERN is valid")
    })
}

/// Strict `YYYY-MM-DD HH:MM:SS` parse: zero-padded fields, single space,
/// no leap second.
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if !timestamp_shape_regex().is_match(raw) {
        return None;
    }
    let ts = NaiveDateTime::parse_from_str(raw, constants::TIMESTAMP_FORMAT).ok()?;
    // chrono stores second 60 as a nanosecond overflow.
    if ts.nanosecond() >= 1_000_000_000 {
        return None;
    }
    Some(ts)
}

/// Parse one raw line (terminator included or not) into a `LogRecord`.
///
/// There is no best-effort mode: either the whole line matches the grammar
/// and the timestamp is a real calendar date-time, or the line is rejected
/// with `ParseError::MalformedLine`.
pub fn parse_line(line_number: u64, line: &str) -> Result<LogRecord, ParseError> {
    let malformed = |reason: MalformedReason| ParseError::MalformedLine {
        line_number,
        line: excerpt(line),
        reason,
    };

    let caps = line_regex()
        .captures(line)
        .ok_or_else(|| malformed(MalformedReason::PatternMismatch))?;

    // All three groups are mandatory in the pattern.
    let (raw_ts, token, message) = match (caps.get(1), caps.get(2), caps.get(3)) {
        (Some(ts), Some(level), Some(msg)) => (ts.as_str(), level.as_str(), msg.as_str()),
        _ => return Err(malformed(MalformedReason::PatternMismatch)),
    };

    let timestamp = parse_timestamp(raw_ts).ok_or_else(|| {
        malformed(MalformedReason::InvalidTimestamp {
            raw: raw_ts.to_string(),
        })
    })?;

    let level = Level::from_token(token)
        .ok_or_else(|| malformed(MalformedReason::PatternMismatch))?;

    Ok(LogRecord {
        line_number,
        timestamp,
        level,
        message: message.to_string(),
    })
}

/// Trim the terminator and cap the length of a line quoted in an error.
fn excerpt(line: &str) -> String {
    let trimmed = line.trim_end_matches(['\r', '\n']);
    match trimmed.char_indices().nth(constants::MAX_ERROR_LINE_CHARS) {
        Some((cut, _)) => format!("{}...", &trimmed[..cut]),
        None => trimmed.to_string(),
    }
}
