// logtally - platform/config.rs
//
// Config directory resolution and config.toml loading with startup
// validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Output format of the report written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    /// Plain-text tables.
    #[default]
    Text,
    /// Comma-separated values.
    Csv,
    /// A single JSON document.
    Json,
}

impl ReportFormat {
    fn from_config_str(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Default location of config.toml, or `None` if the platform config
/// directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    let path = ProjectDirs::from("", "", constants::APP_ID)
        .map(|dirs| dirs.config_dir().join(constants::CONFIG_FILE_NAME));
    match &path {
        Some(p) => tracing::debug!(path = %p.display(), "Config path resolved"),
        None => tracing::debug!("Could not determine platform config directory"),
    }
    path
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[report]` section.
    pub report: ReportSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[report]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ReportSection {
    /// "text", "csv" or "json".
    pub format: Option<String>,
    /// Width of the level column in the text counts table.
    pub level_column_width: Option<usize>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub report_format: ReportFormat,
    pub level_column_width: usize,
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            report_format: ReportFormat::default(),
            level_column_width: constants::DEFAULT_LEVEL_COLUMN_WIDTH,
            log_level: None,
        }
    }
}

/// Load and validate the config file at `config_path`.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// A missing file yields defaults with no warnings. An unreadable or
/// unparseable file yields defaults plus one warning. Each invalid value
/// falls back to its default with a warning naming the field.
///
/// This runs before logging is initialised, so warnings are returned for the
/// caller to emit rather than logged here.
pub fn load_config(config_path: &Path) -> (AppConfig, Vec<ConfigError>) {
    let mut warnings: Vec<ConfigError> = Vec::new();

    if !config_path.exists() {
        return (AppConfig::default(), warnings);
    }

    let content = match std::fs::read_to_string(config_path) {
        Ok(c) => c,
        Err(e) => {
            warnings.push(ConfigError::Io {
                path: config_path.to_path_buf(),
                source: e,
            });
            return (AppConfig::default(), warnings);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(e) => {
            warnings.push(ConfigError::TomlParse {
                path: config_path.to_path_buf(),
                source: e,
            });
            return (AppConfig::default(), warnings);
        }
    };

    let (config, field_warnings) = validate(raw);
    warnings.extend(field_warnings);
    (config, warnings)
}

/// Validate each field against named constants, accumulating all errors.
fn validate(raw: RawConfig) -> (AppConfig, Vec<ConfigError>) {
    let mut config = AppConfig::default();
    let mut warnings = Vec::new();

    // -- Report: format --
    if let Some(ref format) = raw.report.format {
        match ReportFormat::from_config_str(format) {
            Some(f) => config.report_format = f,
            None => warnings.push(ConfigError::ValueOutOfRange {
                field: "report.format".to_string(),
                value: format.clone(),
                expected: "\"text\", \"csv\" or \"json\"".to_string(),
            }),
        }
    }

    // -- Report: level_column_width --
    if let Some(width) = raw.report.level_column_width {
        if (constants::MIN_LEVEL_COLUMN_WIDTH..=constants::MAX_LEVEL_COLUMN_WIDTH).contains(&width)
        {
            config.level_column_width = width;
        } else {
            warnings.push(ConfigError::ValueOutOfRange {
                field: "report.level_column_width".to_string(),
                value: width.to_string(),
                expected: format!(
                    "{}-{}",
                    constants::MIN_LEVEL_COLUMN_WIDTH,
                    constants::MAX_LEVEL_COLUMN_WIDTH
                ),
            });
        }
    }

    // -- Logging: level --
    if let Some(level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            warnings.push(ConfigError::ValueOutOfRange {
                field: "logging.level".to_string(),
                value: level,
                expected: constants::VALID_LOG_LEVELS.join(", "),
            });
        }
    }

    (config, warnings)
}
