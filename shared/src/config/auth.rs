//! Authentication configuration: signing secrets and token lifetimes

use serde::{Deserialize, Serialize};

use super::ConfigError;

const DEVELOPMENT_ACCESS_SECRET: &str = "development-access-secret-change-in-production";
const DEVELOPMENT_REFRESH_SECRET: &str = "development-refresh-secret-change-in-production";

/// Longest accepted token lifetime, in seconds (10 years)
pub const MAX_TOKEN_LIFETIME_SECS: i64 = 10 * 365 * 24 * 60 * 60;

/// JWT configuration for the access/refresh token pair
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Service-wide `sub` claim stamped on every token
    pub subject: String,

    /// HMAC secret for access tokens
    pub access_secret: String,

    /// HMAC secret for refresh tokens
    pub refresh_secret: String,

    /// Access token lifetime in seconds
    pub access_token_lifetime: i64,

    /// Refresh token lifetime in seconds
    pub refresh_token_lifetime: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            subject: String::from("my-dictionaries"),
            access_secret: String::from(DEVELOPMENT_ACCESS_SECRET),
            refresh_secret: String::from(DEVELOPMENT_REFRESH_SECRET),
            access_token_lifetime: 900,     // 15 minutes
            refresh_token_lifetime: 604800, // 7 days
        }
    }
}

impl JwtConfig {
    /// Create a configuration with explicit secrets and default lifetimes
    pub fn new(access_secret: impl Into<String>, refresh_secret: impl Into<String>) -> Self {
        Self {
            access_secret: access_secret.into(),
            refresh_secret: refresh_secret.into(),
            ..Default::default()
        }
    }

    /// Set both lifetimes in seconds
    pub fn with_lifetimes(mut self, access_seconds: i64, refresh_seconds: i64) -> Self {
        self.access_token_lifetime = access_seconds;
        self.refresh_token_lifetime = refresh_seconds;
        self
    }

    /// Set the service-wide subject claim
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Check if either secret is still the shipped development value
    pub fn is_using_default_secrets(&self) -> bool {
        self.access_secret == DEVELOPMENT_ACCESS_SECRET
            || self.refresh_secret == DEVELOPMENT_REFRESH_SECRET
    }

    /// Reject configurations the token manager cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.subject.trim().is_empty() {
            return Err(ConfigError::Invalid("jwt.subject must not be empty".into()));
        }
        if self.access_secret.is_empty() {
            return Err(ConfigError::Invalid("jwt.access_secret must not be empty".into()));
        }
        if self.refresh_secret.is_empty() {
            return Err(ConfigError::Invalid("jwt.refresh_secret must not be empty".into()));
        }
        if self.access_secret == self.refresh_secret {
            return Err(ConfigError::Invalid(
                "jwt.access_secret and jwt.refresh_secret must differ".into(),
            ));
        }
        if self.access_token_lifetime <= 0 || self.refresh_token_lifetime <= 0 {
            return Err(ConfigError::Invalid("token lifetimes must be positive".into()));
        }
        if self.access_token_lifetime > MAX_TOKEN_LIFETIME_SECS
            || self.refresh_token_lifetime > MAX_TOKEN_LIFETIME_SECS
        {
            return Err(ConfigError::Invalid(format!(
                "token lifetimes must not exceed {} seconds",
                MAX_TOKEN_LIFETIME_SECS
            )));
        }
        if self.access_token_lifetime >= self.refresh_token_lifetime {
            return Err(ConfigError::Invalid(
                "jwt.access_token_lifetime must be shorter than jwt.refresh_token_lifetime".into(),
            ));
        }
        Ok(())
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_default() {
        let config = JwtConfig::default();
        assert_eq!(config.access_token_lifetime, 900);
        assert_eq!(config.refresh_token_lifetime, 604800);
        assert_eq!(config.subject, "my-dictionaries");
        assert!(config.is_using_default_secrets());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_jwt_config_builder() {
        let config = JwtConfig::new("access", "refresh")
            .with_lifetimes(5, 60)
            .with_subject("dictionaries-test");

        assert_eq!(config.access_token_lifetime, 5);
        assert_eq!(config.refresh_token_lifetime, 60);
        assert_eq!(config.subject, "dictionaries-test");
        assert!(!config.is_using_default_secrets());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_secret_is_rejected() {
        let config = JwtConfig::new("", "refresh");
        assert!(config.validate().is_err());

        let config = JwtConfig::new("access", "");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_shared_secret_is_rejected() {
        let config = JwtConfig::new("same", "same");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_lifetime_ordering_is_enforced() {
        assert!(JwtConfig::new("a", "r").with_lifetimes(60, 60).validate().is_err());
        assert!(JwtConfig::new("a", "r").with_lifetimes(0, 60).validate().is_err());
        assert!(JwtConfig::new("a", "r").with_lifetimes(5, -1).validate().is_err());
    }

    #[test]
    fn test_lifetime_ceiling_is_enforced() {
        let at_ceiling = JwtConfig::new("a", "r").with_lifetimes(60, MAX_TOKEN_LIFETIME_SECS);
        assert!(at_ceiling.validate().is_ok());

        let refresh_too_long =
            JwtConfig::new("a", "r").with_lifetimes(60, MAX_TOKEN_LIFETIME_SECS + 1);
        assert!(matches!(refresh_too_long.validate(), Err(ConfigError::Invalid(_))));

        let both_huge =
            JwtConfig::new("a", "r").with_lifetimes(10_000_000_000_000, 20_000_000_000_000);
        assert!(both_huge.validate().is_err());

        let out_of_chrono_range =
            JwtConfig::new("a", "r").with_lifetimes(10_000_000_000_000_000, 20_000_000_000_000_000);
        assert!(out_of_chrono_range.validate().is_err());
    }
}
