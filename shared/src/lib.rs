//! Shared configuration and common types for the My Dictionaries server
//!
//! This crate provides functionality used across all server modules:
//! - Configuration types and the startup configuration loader
//! - The error body returned by every API endpoint

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, ConfigError, DatabaseConfig, Environment, JwtConfig, AuthConfig,
    LogFormat, LoggingConfig, ServerConfig,
};
pub use errors::{error_codes, ErrorResponse};
