// logtally - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no
// platform dependencies.
//
// These types are the shared vocabulary across all layers.

use crate::util::error::FilterError;
use chrono::NaiveDateTime;
use serde::Serialize;

// =============================================================================
// Log Record (output of parsing)
// =============================================================================

/// A single parsed log line.
///
/// A record only exists if its source line fully matched the log grammar;
/// there is no partially populated record. Records are never mutated after
/// the loader creates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    /// 1-based line number in the source file.
    pub line_number: u64,

    /// Timestamp as written in the file. No timezone is attached.
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: NaiveDateTime,

    /// Severity level.
    pub level: Level,

    /// Message text with the line terminator stripped.
    pub message: String,
}

impl LogRecord {
    /// Timestamp rendered in the log grammar's own format.
    pub fn timestamp_text(&self) -> String {
        self.timestamp
            .format(crate::util::constants::TIMESTAMP_FORMAT)
            .to_string()
    }
}

fn serialize_timestamp<S: serde::Serializer>(
    ts: &NaiveDateTime,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&ts.format(crate::util::constants::TIMESTAMP_FORMAT))
}

// =============================================================================
// Level
// =============================================================================

/// The closed set of severity levels understood by the log grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Debug,
    Info,
    Warning,
    Error,
}

impl Level {
    /// Returns all variants in grammar order.
    pub fn all() -> &'static [Level] {
        &[Level::Debug, Level::Info, Level::Warning, Level::Error]
    }

    /// The uppercase token used in log files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
        }
    }

    /// Exact, case-sensitive token match as required by the line grammar.
    pub fn from_token(token: &str) -> Option<Level> {
        Self::all().iter().copied().find(|l| l.as_str() == token)
    }

    /// Normalise a user-supplied level name (any case, surrounding
    /// whitespace ignored) into a `Level`.
    pub fn normalize(requested: &str) -> Result<Level, FilterError> {
        let upper = requested.trim().to_ascii_uppercase();
        Self::from_token(&upper).ok_or_else(|| FilterError::InvalidLevel {
            requested: requested.to_string(),
        })
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Level {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::normalize(s)
    }
}
