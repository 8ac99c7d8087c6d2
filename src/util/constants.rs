// logtally - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "logtally";

/// Application identifier used for config directories.
pub const APP_ID: &str = "logtally";

/// Current application version (taken from Cargo.toml).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the optional configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

// =============================================================================
// Log grammar
// =============================================================================

/// Anchored pattern for a single log line:
/// `<timestamp> <LEVEL> <message>` followed by an optional terminator.
///
/// Capture groups: 1 = timestamp segment, 2 = level token, 3 = message.
pub const LINE_PATTERN: &str = r"^([\d:\- ]+) (DEBUG|INFO|WARNING|ERROR) (.+?)\r?\n?$";

/// Exact shape of the timestamp segment. chrono alone accepts single-digit
/// fields and padding whitespace, so the segment is checked against this
/// first.
pub const TIMESTAMP_SHAPE_PATTERN: &str = r"^[0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}:[0-9]{2}$";

/// chrono format of the timestamp segment. Also used when rendering records.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Maximum number of characters of an offending line kept in a
/// `MalformedLine` error. Longer lines are cut and suffixed with "...".
pub const MAX_ERROR_LINE_CHARS: usize = 200;

// =============================================================================
// Report rendering
// =============================================================================

/// Default width of the level column in the counts table.
pub const DEFAULT_LEVEL_COLUMN_WIDTH: usize = 16;

/// Minimum accepted level column width (fits the longest token, "WARNING").
pub const MIN_LEVEL_COLUMN_WIDTH: usize = 7;

/// Maximum accepted level column width.
pub const MAX_LEVEL_COLUMN_WIDTH: usize = 64;

// =============================================================================
// Logging
// =============================================================================

/// Default tracing filter when neither RUST_LOG, --debug nor config set one.
///
/// Kept at "warn" so diagnostics do not drown the report on a terminal.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Accepted values for `[logging] level` in config.toml.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];
