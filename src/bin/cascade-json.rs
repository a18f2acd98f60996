//! cascade-json CLI Binary
//!
//! Prints the merged JSON found in a directory and its ancestors.

use cascade_json::cli::{map_error, Cli, RunContext};
use cascade_json::logging::{init_logging, LoggingConfig};
use clap::Parser;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let context = match RunContext::load(&cli) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    let logging_config = build_logging_config(&cli, &context.config().logging);
    if let Err(e) = init_logging(&logging_config) {
        eprintln!("{}", map_error(&e));
        process::exit(1);
    }

    info!("cascade-json starting");
    context.warn_config_fallback();

    match context.execute(&cli) {
        Ok(execution) => {
            println!("{}", execution.json);
            if let Some(report) = execution.report {
                eprint!("{}", report);
            }
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}

/// Apply CLI flags on top of the configured logging settings.
/// Precedence: explicit flags, then --verbose, then config.
fn build_logging_config(cli: &Cli, configured: &LoggingConfig) -> LoggingConfig {
    let mut config = configured.clone();

    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }

    config
}
