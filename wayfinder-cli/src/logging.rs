//! Diagnostics setup for the `wayfinder` binary.
//!
//! The format comes from `--log-format`, then `WAYFINDER_LOG_FORMAT`, then
//! defaults to human-readable lines. `RUST_LOG` picks the level (`info` when
//! unset). Everything goes to stderr; stdout carries only the report.

use std::{env, sync::OnceLock};

use clap::ValueEnum;
use thiserror::Error;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Environment fallback consulted when `--log-format` is absent.
pub const LOG_FORMAT_ENV: &str = "WAYFINDER_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

static INSTALLED: OnceLock<LogFormat> = OnceLock::new();

/// Output format for diagnostics.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum LogFormat {
    /// Compact lines for terminals.
    #[default]
    Human,
    /// One JSON object per event, with the enclosing span list.
    Json,
}

/// Why diagnostics could not be configured.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// `WAYFINDER_LOG_FORMAT` held bytes that are not UTF-8.
    #[error("`WAYFINDER_LOG_FORMAT` is not valid UTF-8")]
    InvalidUnicode,
    /// `WAYFINDER_LOG_FORMAT` named a format the binary does not know.
    #[error("`WAYFINDER_LOG_FORMAT={provided}` is not a log format; use `human` or `json`")]
    UnsupportedFormat {
        /// Value as found in the environment.
        provided: String,
    },
    /// Another global subscriber was already installed.
    #[error("could not install the tracing subscriber: {source}")]
    InstallFailed {
        /// Error reported by `tracing_subscriber`.
        #[source]
        source: tracing_subscriber::util::TryInitError,
    },
}

/// Picks the diagnostics format. An explicit flag wins over the environment
/// value, which wins over [`LogFormat::Human`].
///
/// `env_value` is the result of looking up [`LOG_FORMAT_ENV`]; it is passed
/// in so callers and tests control where it comes from.
///
/// # Errors
/// Returns [`LoggingError`] when the flag is absent and the environment value
/// is not UTF-8 or names no known format.
pub fn resolve_log_format(
    flag: Option<LogFormat>,
    env_value: Result<String, env::VarError>,
) -> Result<LogFormat, LoggingError> {
    if let Some(format) = flag {
        return Ok(format);
    }
    match env_value {
        Ok(raw) => LogFormat::from_str(raw.trim(), true)
            .map_err(|_| LoggingError::UnsupportedFormat { provided: raw }),
        Err(env::VarError::NotPresent) => Ok(LogFormat::default()),
        Err(env::VarError::NotUnicode(_)) => Err(LoggingError::InvalidUnicode),
    }
}

/// Resolves the format against the process environment and installs the
/// global subscriber once. Later calls return the format chosen first.
///
/// A subscriber installed by someone else is reported on stderr and left in
/// place.
///
/// # Errors
/// Returns [`LoggingError`] when [`resolve_log_format`] rejects the
/// environment value.
pub fn init_logging(flag: Option<LogFormat>) -> Result<LogFormat, LoggingError> {
    if let Some(&format) = INSTALLED.get() {
        return Ok(format);
    }

    let format = resolve_log_format(flag, env::var(LOG_FORMAT_ENV))?;
    if let Err(err) = install_subscriber(format) {
        eprintln!("wayfinder: keeping the existing subscriber: {err}");
    }
    Ok(*INSTALLED.get_or_init(|| format))
}

fn install_subscriber(format: LogFormat) -> Result<(), LoggingError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let lines = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_span_events(FmtSpan::CLOSE);
    let output = match format {
        LogFormat::Human => lines.boxed(),
        LogFormat::Json => lines
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .boxed(),
    };

    // `log` records from dependencies are bridged when the slot is free.
    let _ = LogTracer::init();

    tracing_subscriber::registry()
        .with(filter)
        .with(output)
        .try_init()
        .map_err(|source| LoggingError::InstallFailed { source })
}
