//! Builds an `AppConfig` from layered sources.
//! `config/base.toml` is read first, then the environment specific file
//! (`local.toml` or `production.toml`), then `APP_` prefixed environment variables.
//! Gets initialized with `OnceLock` so it only needs to get initialized once.

mod error;
mod types;

use std::{path::Path, sync::OnceLock};

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use tracing::info;

// Re-export config structs
pub use error::{ConfigError, ConfigResult};
pub use types::{AppConfig, DbConfig, Environment, NetConfig, SslRequire};

/// Allocates a static `OnceLock` containing `AppConfig`.
/// This ensures configuration only gets initialized the first time we call this function.
/// Every other caller gets a &'static ref to AppConfig.
/// Panics if anything goes wrong.
pub fn get_or_init_config() -> &'static AppConfig {
    static CONFIG_INIT: OnceLock<AppConfig> = OnceLock::new();
    CONFIG_INIT.get_or_init(|| {
        info!("{:<20} - Initializing the configuration", "get_or_init_config");
        let base_path = std::env::current_dir().expect("Failed to determine the current DIR.");
        let config_dir = base_path.join("config");

        let environment: Environment = std::env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "local".into())
            .try_into()
            .unwrap_or_else(|er| panic!("Fatal Error: Parsing APP_ENVIRONMENT: {er}"));

        let mut config = AppConfig::load(&config_dir, &environment)
            .unwrap_or_else(|er| panic!("Fatal Error: Building config: {er}"));

        // Setup DbConfig for production
        if matches!(environment, Environment::Production) {
            // Panic early if there are any problems.
            let production_db = std::env::var("DATABASE_URL").unwrap_or_else(|er| {
                panic!("Fatal Error: While looking for DATABASE_URL env variable: {er:?}")
            });
            let prod_db_config = DbConfig::try_from(production_db.as_str()).unwrap_or_else(|er| {
                panic!("Fatal Error: While parsing DbConfig from String: {er:?}")
            });
            config.db_config = prod_db_config;
        }

        config
    })
}

const ENV_PREFIX: &str = "APP_";

impl AppConfig {
    /// Merges the base file, the file of the given `environment` (both found in `config_dir`)
    /// and the `APP_` environment variables. Later sources override earlier ones.
    ///
    /// Nested keys are separated by a double underscore, e.g. `APP_NET_CONFIG__APP_PORT=9000`.
    pub fn load(config_dir: &Path, environment: &Environment) -> ConfigResult<Self> {
        Self::load_with_env_prefix(config_dir, environment, ENV_PREFIX)
    }

    fn load_with_env_prefix(
        config_dir: &Path,
        environment: &Environment,
        env_prefix: &str,
    ) -> ConfigResult<Self> {
        let environment_filename = format!("{}.toml", environment.as_ref().to_lowercase());

        let config = Figment::new()
            .merge(Toml::file_exact(config_dir.join("base.toml")))
            .merge(Toml::file_exact(config_dir.join(environment_filename)))
            .merge(Env::prefixed(env_prefix).ignore(&["ENVIRONMENT"]).split("__"))
            .extract()?;

        Ok(config)
    }
}
