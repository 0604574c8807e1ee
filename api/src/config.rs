//! Configuration loading
//!
//! Sources, later ones winning:
//! 1. Built-in defaults
//! 2. `config/<environment>.toml`, when present
//! 3. `TOOLBOX__SECTION__KEY` environment variables, e.g. `TOOLBOX__AUTH__JWT__SECRET`
//! 4. The `SECRET` and `PORT` variables
//!
//! A missing secret or an unparseable default token lifetime fails the load,
//! so misconfiguration stops the process at startup.

use std::collections::HashMap;

use config::{Config, ConfigError, Environment as EnvSource, File};
use tb_core::services::TokenServiceConfig;
use tb_shared::{AppConfig, Environment, LoggingConfig};

/// Prefix of structured configuration variables
pub const ENV_PREFIX: &str = "TOOLBOX";

/// Loads configuration for the detected environment from the process environment
pub fn load() -> Result<AppConfig, ConfigError> {
    load_with(Environment::from_env(), std::env::vars().collect())
}

/// Loads configuration from an explicit set of variables
pub fn load_with(
    environment: Environment,
    vars: HashMap<String, String>,
) -> Result<AppConfig, ConfigError> {
    let secret = vars.get("SECRET").cloned();
    let port = vars.get("PORT").cloned();

    let config: AppConfig = Config::builder()
        .set_default("environment", environment.to_string())?
        .set_default("logging.level", LoggingConfig::for_environment(environment).level)?
        .add_source(File::with_name(&environment.config_file()).required(false))
        .add_source(
            EnvSource::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                .source(Some(vars)),
        )
        .set_override_option("auth.jwt.secret", secret)?
        .set_override_option("server.port", port)?
        .build()?
        .try_deserialize()?;

    TokenServiceConfig::from_app_config(&config)
        .map_err(|error| ConfigError::Message(error.to_string()))?;

    Ok(config)
}
