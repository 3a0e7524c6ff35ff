//! Configuration module
//!
//! Configuration is organised by concern:
//! - `auth` - token signing secrets and lifetimes
//! - `database` - account store connection pool
//! - `environment` - environment detection and logging
//! - `server` - HTTP listener
//!
//! [`AppConfig::load`] layers built-in defaults, an optional config file and
//! `APP_*` environment variables. Any failure here is fatal at startup.

pub mod auth;
pub mod database;
pub mod environment;
pub mod server;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use auth::{AuthConfig, JwtConfig};
pub use database::DatabaseConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::ServerConfig;

/// Environment variable naming the configuration file
pub const CONFIG_PATH_ENV: &str = "MY_DICTIONARIES_CONFIG";

/// Configuration file used when [`CONFIG_PATH_ENV`] is unset
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Prefix for environment overrides, e.g. `APP_AUTH__JWT__ACCESS_SECRET`
pub const ENV_PREFIX: &str = "APP";

/// Startup configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from defaults, the config file and the environment
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let (path, required) = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => (PathBuf::from(path), true),
            Err(_) => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        Self::load_from(Some((path, required)))
    }

    /// Load configuration from an optional file plus the environment
    pub fn load_from(file: Option<(PathBuf, bool)>) -> Result<Self, ConfigError> {
        let environment = Environment::from_env();
        let defaults = Self {
            environment,
            logging: LoggingConfig::for_environment(environment),
            ..Default::default()
        };

        let mut builder = config::Config::builder()
            .add_source(config::Config::try_from(&defaults)?);

        if let Some((path, required)) = file {
            builder = builder.add_source(config::File::from(path.as_path()).required(required));
        }

        let config: Self = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Validate every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.auth.jwt.validate()?;
        self.database.validate()?;
        if self.environment.is_production() && self.auth.jwt.is_using_default_secrets() {
            return Err(ConfigError::Invalid(
                "development JWT secrets must not be used in production".into(),
            ));
        }
        Ok(())
    }
}
