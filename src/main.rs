// logtally - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Config loading and logging initialisation (debug mode support)
// 3. Running the load / count / filter pipeline
// 4. Writing the report and mapping failures to the exit code

use clap::Parser;
use logtally::app::load::load_logs;
use logtally::core::export;
use logtally::core::filter::select_level;
use logtally::core::model::{Level, LogRecord};
use logtally::core::summary::count_by_level;
use logtally::platform::config::{self, AppConfig, ReportFormat};
use logtally::ui::report;
use logtally::util;
use logtally::util::error::Result;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

/// logtally - count and inspect log records by severity.
///
/// Reads a log file whose lines look like
/// `YYYY-MM-DD HH:MM:SS LEVEL message`, prints how many records each level
/// has and, if LEVEL is given, lists the records of that level.
#[derive(Parser, Debug)]
#[command(name = "logtally", version, about)]
struct Cli {
    /// Log file to analyse.
    path: PathBuf,

    /// Show details for this level: debug, info, warning or error (any case).
    level: Option<String>,

    /// Report format (overrides [report] format in config.toml).
    #[arg(short = 'f', long = "format", value_enum)]
    format: Option<ReportFormat>,

    /// Use this config file instead of the platform default.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Config is read before logging so [logging] level can take effect;
    // its warnings are emitted once the subscriber is installed.
    let config_path = cli.config.clone().or_else(config::default_config_path);
    let (app_config, config_warnings) = match &config_path {
        Some(path) => config::load_config(path),
        None => (AppConfig::default(), Vec::new()),
    };

    util::logging::init(cli.debug, app_config.log_level.as_deref());

    for warning in &config_warnings {
        tracing::warn!(error = %warning, "Config warning; using default");
    }

    tracing::info!(
        version = util::constants::APP_VERSION,
        path = %cli.path.display(),
        level = ?cli.level,
        "logtally starting"
    );

    match run(&cli, &app_config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Run failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Execute the pipeline and write the report to stdout.
fn run(cli: &Cli, app_config: &AppConfig) -> Result<()> {
    let records = load_logs(&cli.path)?;
    let counts = count_by_level(&records);

    // Validate the requested level before writing anything, so an invalid
    // level never produces a half-written report.
    let details: Option<(Level, Vec<&LogRecord>)> = match cli.level.as_deref() {
        Some(requested) => {
            let level = Level::normalize(requested)?;
            Some((level, select_level(&records, level)))
        }
        None => None,
    };
    let details_ref = details
        .as_ref()
        .map(|(level, selected)| (*level, selected.as_slice()));

    let format = cli.format.unwrap_or(app_config.report_format);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        ReportFormat::Text => {
            let mut text = report::render_counts(&counts, app_config.level_column_width);
            if let Some((level, selected)) = details_ref {
                text.push('\n');
                text.push_str(&report::render_details(level, selected));
            }
            out.write_all(text.as_bytes())
                .and_then(|()| out.flush())
                .map_err(|source| util::error::ExportError::Io { source })?;
        }
        ReportFormat::Csv => export::export_csv(&counts, details_ref, &mut out)?,
        ReportFormat::Json => export::export_json(&counts, details_ref, &mut out)?,
    }

    Ok(())
}
