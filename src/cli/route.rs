//! CLI route: resolve arguments against configuration and run the ascent.

use crate::ascent::{level_budget, Ascent, AscentOutcome};
use crate::cli::output::{format_report, render_value};
use crate::cli::parse::Cli;
use crate::config::{ConfigLoader, ToolConfig};
use crate::error::CliError;
use crate::paths::{absolutize, is_rooted};
use std::path::Path;
use tracing::{debug, info, warn};

/// Output of one invocation
#[derive(Debug, Clone, PartialEq)]
pub struct Execution {
    /// Merged JSON, one line
    pub json: String,
    /// Per-level report, when requested
    pub report: Option<String>,
}

/// Loaded configuration plus the operations the binary routes to
pub struct RunContext {
    config: ToolConfig,
    /// Why the implicit configuration was ignored, if it was
    config_warning: Option<String>,
}

impl RunContext {
    pub fn new(config: ToolConfig) -> Self {
        Self {
            config,
            config_warning: None,
        }
    }

    /// Load configuration from `--config` or the global sources.
    ///
    /// Only an explicit `--config` failure is an error. A broken global file
    /// or environment override falls back to the defaults; the reason is kept
    /// for [`RunContext::warn_config_fallback`].
    pub fn load(cli: &Cli) -> Result<Self, CliError> {
        match cli.config {
            Some(ref path) => Ok(Self::new(ConfigLoader::load_from_file(path)?)),
            None => Ok(Self::from_implicit(ConfigLoader::load())),
        }
    }

    fn from_implicit(loaded: Result<ToolConfig, CliError>) -> Self {
        match loaded {
            Ok(config) => Self::new(config),
            Err(e) => Self {
                config: ToolConfig::default(),
                config_warning: Some(e.to_string()),
            },
        }
    }

    pub fn config(&self) -> &ToolConfig {
        &self.config
    }

    pub fn config_warning(&self) -> Option<&str> {
        self.config_warning.as_deref()
    }

    /// Log the implicit-config fallback; call once logging is installed.
    pub fn warn_config_fallback(&self) {
        if let Some(ref reason) = self.config_warning {
            warn!(reason = %reason, "Ignoring configuration, using defaults");
        }
    }

    /// Run the ascent described by the command line.
    pub fn ascend(&self, cli: &Cli) -> Result<AscentOutcome, CliError> {
        let start_dir = absolutize(&cli.directory)?;
        if cli.file_name.is_empty() {
            return Err(CliError::InvalidArguments(
                "file name must not be empty".to_string(),
            ));
        }
        if is_rooted(Path::new(&cli.file_name)) {
            return Err(CliError::InvalidArguments(format!(
                "file name must be relative to each directory: {}",
                cli.file_name
            )));
        }

        let requested = cli.max_levels.or(self.config.ascent.max_levels);
        let max_levels = level_budget(&start_dir, requested);
        info!(
            start_dir = %start_dir.display(),
            file_name = %cli.file_name,
            max_levels,
            "Starting ascent"
        );

        Ok(Ascent::new(start_dir, cli.file_name.as_str(), max_levels).run())
    }

    pub fn execute(&self, cli: &Cli) -> Result<Execution, CliError> {
        let outcome = self.ascend(cli)?;
        let dropped = outcome.dropped_levels().count();
        if dropped > 0 {
            debug!(dropped, "Some levels were found but not merged");
        }

        Ok(Execution {
            json: render_value(outcome.value.as_ref())?,
            report: cli.report.then(|| format_report(&outcome)),
        })
    }
}
