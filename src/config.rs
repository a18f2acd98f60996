//! Configuration System
//!
//! Settings for the tool itself (not the documents it merges): logging and
//! ascent defaults. Layered with the `config` crate; see [`merge_policy`] for
//! the precedence order.

use crate::error::CliError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

mod merge_policy;
mod sources;

pub use sources::environment::ENV_PREFIX;
pub use sources::global_file::global_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub ascent: AscentConfig,
}

/// Ascent defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AscentConfig {
    /// Levels to climb when the command line does not say; unset or 0 means
    /// up to the filesystem root.
    #[serde(default)]
    pub max_levels: Option<usize>,
}

/// Loads [`ToolConfig`] from its layered sources
pub struct ConfigLoader;

impl ConfigLoader {
    /// Defaults, then the global config file (if present), then environment.
    pub fn load() -> Result<ToolConfig, CliError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = sources::global_file::add_to_builder(builder)?;
        let builder = sources::environment::add_to_builder(builder);
        Ok(builder.build()?.try_deserialize()?)
    }

    /// Defaults, then `path` (which must exist), then environment.
    pub fn load_from_file(path: &Path) -> Result<ToolConfig, CliError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = sources::explicit_file::add_to_builder(builder, path)?;
        let builder = sources::environment::add_to_builder(builder);
        Ok(builder.build()?.try_deserialize()?)
    }
}
