//! CLI parse: clap types for cascade-json. No behavior; definitions only.

use clap::Parser;
use std::path::PathBuf;

/// Merge a JSON file found at every level from a directory up to the root
#[derive(Parser, Debug)]
#[command(name = "cascade-json")]
#[command(version)]
#[command(about = "Cascading JSON configuration: merge a file found in a directory and its ancestors")]
pub struct Cli {
    /// Directory to start from
    pub directory: PathBuf,

    /// Name of the JSON file to look for at each level
    pub file_name: String,

    /// Number of levels to climb (omitted or 0: up to the filesystem root)
    pub max_levels: Option<usize>,

    /// Configuration file path (overrides the global config file)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Print what happened at each level to stderr
    #[arg(long)]
    pub report: bool,
}
