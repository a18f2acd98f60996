//! Merge rules for the tool's own configuration: defaults and override order.
//!
//! Order (lowest to highest): built-in defaults, config file, environment.
//! CLI flags are applied on top by the binary.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Create a Config builder with the built-in defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("logging.level", "off")?
        .set_default("logging.format", "text")?
        .set_default("logging.color", true)
}
