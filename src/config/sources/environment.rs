//! Environment source: CASCADE_JSON__<SECTION>__<KEY>, e.g.
//! `CASCADE_JSON__LOGGING__LEVEL=debug` or `CASCADE_JSON__ASCENT__MAX_LEVELS=3`.

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment};

pub const ENV_PREFIX: &str = "CASCADE_JSON";

pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    )
}
