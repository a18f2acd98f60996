//! Logging System
//!
//! Structured logging using the `tracing` crate. Logging is silent by default;
//! the level and format come from configuration, CLI flags, or the
//! `CASCADE_JSON_LOG` environment variable. Events always go to stderr so
//! stdout carries only the merged JSON.

use crate::error::CliError;
use serde::{Deserialize, Serialize};
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Environment variable holding a full `EnvFilter` directive
pub const LOG_ENV: &str = "CASCADE_JSON_LOG";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text (default: text)
    #[serde(default = "default_format")]
    pub format: String,

    /// Enable colored output (text format only)
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_log_level() -> String {
    "off".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_format(),
            color: default_true(),
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LoggingConfig {
    /// Validate the configured format.
    pub fn log_format(&self) -> Result<LogFormat, CliError> {
        match self.format.as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(CliError::Logging(format!(
                "Invalid log format: {} (must be 'json' or 'text')",
                other
            ))),
        }
    }
}

/// Install the global subscriber.
///
/// Priority order (highest to lowest):
/// 1. `CASCADE_JSON_LOG` environment variable
/// 2. The given config (already merged with CLI flags)
pub fn init_logging(config: &LoggingConfig) -> Result<(), CliError> {
    let filter = build_env_filter(config)?;
    let format = config.log_format()?;
    let registry = Registry::default().with(filter);

    let result = match format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(config.color)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    result.map_err(|e| CliError::Logging(format!("Failed to install subscriber: {}", e)))
}

fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, CliError> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        return Ok(filter);
    }

    match config.level.as_str() {
        "off" => Ok(EnvFilter::new("off")),
        "trace" | "debug" | "info" | "warn" | "error" => Ok(EnvFilter::new(&config.level)),
        other => Err(CliError::Logging(format!(
            "Invalid log level: {} (must be trace, debug, info, warn, error, or off)",
            other
        ))),
    }
}
