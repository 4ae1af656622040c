//! Environment variable source: CODEVIS__ prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Environment variable prefix, e.g. `CODEVIS__TREE__SOURCE_SUFFIX`.
pub const ENV_PREFIX: &str = "CODEVIS";

/// Add environment variable overlay to builder.
/// Uses CODEVIS prefix and __ as separator for nested keys.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true),
    );
    Ok(builder)
}
