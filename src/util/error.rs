// logtally - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation. Every pipeline failure is terminal for
// the operation in progress; callers decide how to report it.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all logtally operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum LogTallyError {
    /// Opening or reading the input file failed.
    Source(SourceError),

    /// A line of the input file did not match the log grammar.
    Parse(ParseError),

    /// A requested filter level was rejected.
    Filter(FilterError),

    /// Writing a CSV or JSON report failed.
    Export(ExportError),
}

impl fmt::Display for LogTallyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source(e) => write!(f, "Input error: {e}"),
            Self::Parse(e) => write!(f, "Parse error: {e}"),
            Self::Filter(e) => write!(f, "Filter error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
        }
    }
}

impl std::error::Error for LogTallyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Source(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Filter(e) => Some(e),
            Self::Export(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Source errors
// ---------------------------------------------------------------------------

/// Errors raised while opening or reading the input file.
#[derive(Debug)]
pub enum SourceError {
    /// The path does not exist or does not name a regular file.
    NotFound { path: PathBuf },

    /// Any other I/O failure (permissions, invalid UTF-8, device errors).
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path } => {
                write!(f, "File '{}' not found", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "Cannot read '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::NotFound { .. } => None,
        }
    }
}

impl From<SourceError> for LogTallyError {
    fn from(e: SourceError) -> Self {
        Self::Source(e)
    }
}

// ---------------------------------------------------------------------------
// Parse errors
// ---------------------------------------------------------------------------

/// Why a line was rejected by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    /// The line does not have the `<timestamp> <LEVEL> <message>` shape.
    PatternMismatch,

    /// The timestamp segment is not a valid `YYYY-MM-DD HH:MM:SS` value.
    InvalidTimestamp { raw: String },
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PatternMismatch => {
                f.write_str("expected '<YYYY-MM-DD HH:MM:SS> <LEVEL> <message>'")
            }
            Self::InvalidTimestamp { raw } => {
                write!(f, "invalid timestamp '{raw}', expected YYYY-MM-DD HH:MM:SS")
            }
        }
    }
}

/// Errors related to log line parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A line does not match the log grammar.
    MalformedLine {
        line_number: u64,
        line: String,
        reason: MalformedReason,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedLine {
                line_number,
                line,
                reason,
            } => write!(f, "line {line_number}: unexpected log format ({reason}): '{line}'"),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<ParseError> for LogTallyError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

// ---------------------------------------------------------------------------
// Filter errors
// ---------------------------------------------------------------------------

/// Errors related to filter operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// The requested level is not one of DEBUG, INFO, WARNING, ERROR.
    InvalidLevel { requested: String },
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLevel { requested } => write!(
                f,
                "Invalid log level '{requested}'. Choose one of: debug, info, warning, error"
            ),
        }
    }
}

impl std::error::Error for FilterError {}

impl From<FilterError> for LogTallyError {
    fn from(e: FilterError) -> Self {
        Self::Filter(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to writing CSV or JSON reports.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error writing the report.
    Io { source: io::Error },

    /// CSV serialisation error.
    Csv { source: csv::Error },

    /// JSON serialisation error.
    Json { source: serde_json::Error },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { source } => write!(f, "Report I/O error: {source}"),
            Self::Csv { source } => write!(f, "CSV report error: {source}"),
            Self::Json { source } => write!(f, "JSON report error: {source}"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source } => Some(source),
            Self::Csv { source } => Some(source),
            Self::Json { source } => Some(source),
        }
    }
}

impl From<ExportError> for LogTallyError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
///
/// Config problems never abort a run: `platform::config::load_config`
/// returns them as warnings and falls back to defaults.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            Self::ValueOutOfRange { .. } => None,
        }
    }
}

/// Convenience type alias for logtally results.
pub type Result<T> = std::result::Result<T, LogTallyError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_not_found_message_names_path() {
        let err = LogTallyError::from(SourceError::NotFound {
            path: PathBuf::from("/nonexistent/app.log"),
        });
        let msg = err.to_string();
        assert!(msg.contains("/nonexistent/app.log"), "got: {msg}");
        assert!(msg.contains("not found"), "got: {msg}");
    }

    #[test]
    fn test_malformed_line_message_has_line_number_and_reason() {
        let err = ParseError::MalformedLine {
            line_number: 7,
            line: "garbage".to_string(),
            reason: MalformedReason::InvalidTimestamp {
                raw: "2024-13-01 10:00:00".to_string(),
            },
        };
        let msg = err.to_string();
        assert!(msg.starts_with("line 7:"), "got: {msg}");
        assert!(msg.contains("2024-13-01 10:00:00"), "got: {msg}");
    }

    #[test]
    fn test_source_chain_preserved_for_io() {
        let err = LogTallyError::from(SourceError::Io {
            path: PathBuf::from("x.log"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        });
        let inner = err.source().and_then(|s| s.source());
        assert!(inner.is_some(), "io::Error should be reachable via source()");
    }
}
