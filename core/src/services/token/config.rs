//! Configuration for the token service

use chrono::Duration;
use md_shared::JwtConfig;

use crate::domain::entities::token::TokenRole;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Service-wide `sub` claim
    pub subject: String,
    /// Access token lifetime
    pub access_token_lifetime: Duration,
    /// Refresh token lifetime
    pub refresh_token_lifetime: Duration,
}

impl TokenServiceConfig {
    pub fn from_jwt_config(config: &JwtConfig) -> Self {
        Self {
            subject: config.subject.clone(),
            access_token_lifetime: Duration::seconds(config.access_token_lifetime),
            refresh_token_lifetime: Duration::seconds(config.refresh_token_lifetime),
        }
    }

    /// Lifetime of tokens issued in `role`
    pub fn lifetime(&self, role: TokenRole) -> Duration {
        match role {
            TokenRole::Access => self.access_token_lifetime,
            TokenRole::Refresh => self.refresh_token_lifetime,
        }
    }
}
