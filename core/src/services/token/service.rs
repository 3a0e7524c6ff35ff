//! Token lifecycle manager: issue, validate, refresh and logout

use std::sync::Arc;

use constant_time_eq::constant_time_eq;
use md_shared::JwtConfig;

use crate::domain::entities::token::{Claims, TokenPair, TokenRole};
use crate::errors::{DomainError, TokenError};
use crate::repositories::TokenStore;

use super::codec::TokenCodec;
use super::config::TokenServiceConfig;
use super::key_manager::KeyManager;

/// Service managing the access/refresh token pair of each account
///
/// Signing and verification are pure; the only shared mutable state is the
/// stored binding behind `S`, which performs every write as one atomic update.
pub struct TokenService<S: TokenStore> {
    store: Arc<S>,
    keys: Arc<KeyManager>,
    codec: TokenCodec,
    config: TokenServiceConfig,
}

impl<S: TokenStore> TokenService<S> {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `store` - Stored token binding, the revocation source of truth
    /// * `keys` - Signing keys for both roles
    /// * `config` - Subject and per-role lifetimes
    pub fn new(store: Arc<S>, keys: Arc<KeyManager>, config: TokenServiceConfig) -> Self {
        let codec = TokenCodec::new(config.subject.clone());
        Self {
            store,
            keys,
            codec,
            config,
        }
    }

    /// Creates a token service from JWT configuration
    ///
    /// Fails with `DomainError::Config` when the configuration is unusable.
    pub fn from_config(store: Arc<S>, config: &JwtConfig) -> Result<Self, DomainError> {
        config.validate()?;
        let keys = Arc::new(KeyManager::from_config(config)?);
        Ok(Self::new(store, keys, TokenServiceConfig::from_jwt_config(config)))
    }

    pub fn config(&self) -> &TokenServiceConfig {
        &self.config
    }

    /// Issues and persists a new token pair for `login`
    ///
    /// Any previously issued pair for the account is superseded. On storage
    /// failure no tokens are returned.
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - The persisted pair
    /// * `Err(DomainError)` - Signing failed, the account does not exist, or
    ///   storage failed
    pub async fn issue(&self, login: &str) -> Result<TokenPair, DomainError> {
        let pair = self.sign_pair(login)?;

        self.store
            .persist(login, &pair.access_token, &pair.refresh_token)
            .await
            .map_err(|e| {
                tracing::error!(login, error = %e, "failed to persist token pair");
                e
            })?;

        tracing::info!(login, "issued token pair");
        Ok(pair)
    }

    /// Validates an access token and returns the login it was issued for
    pub async fn validate_access(&self, token: &str) -> Result<String, DomainError> {
        self.validate(token, TokenRole::Access).await
    }

    /// Validates a refresh token and returns the login it was issued for
    pub async fn validate_refresh(&self, token: &str) -> Result<String, DomainError> {
        self.validate(token, TokenRole::Refresh).await
    }

    /// Validates `token` in `role`
    ///
    /// Checks, in order: signature under the role's key, expiry, and equality
    /// with the stored token of that role. A mismatch covers both logout and
    /// supersession and is reported as `Revoked`.
    pub async fn validate(&self, token: &str, role: TokenRole) -> Result<String, DomainError> {
        let claims = self.codec.verify(token, self.keys.key(role)).map_err(|e| {
            tracing::warn!(role = %role, kind = e.kind(), "token rejected");
            e
        })?;

        if claims.is_expired() {
            tracing::warn!(role = %role, login = %claims.login, kind = "expired", "token rejected");
            return Err(TokenError::Expired.into());
        }

        let stored = match self.store.fetch_stored(&claims.login, role).await {
            Ok(stored) => stored,
            Err(DomainError::AccountNotFound) => String::new(),
            Err(e) => return Err(e),
        };

        if stored.is_empty() || !constant_time_eq(stored.as_bytes(), token.as_bytes()) {
            tracing::warn!(role = %role, login = %claims.login, kind = "revoked", "token rejected");
            return Err(TokenError::Revoked.into());
        }

        Ok(claims.login)
    }

    /// Exchanges a refresh token for a brand-new pair
    ///
    /// The presented refresh token is single-use: the new pair replaces it
    /// through a compare-and-swap on the stored refresh token, so of two
    /// concurrent refreshes with the same token at most one succeeds and the
    /// other fails with `Revoked`. Validation errors are propagated without
    /// issuing anything.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, DomainError> {
        let login = self.validate_refresh(refresh_token).await?;
        let pair = self.sign_pair(&login)?;

        let rotated = match self
            .store
            .rotate(&login, refresh_token, &pair.access_token, &pair.refresh_token)
            .await
        {
            Ok(rotated) => rotated,
            Err(DomainError::AccountNotFound) => false,
            Err(e) => {
                tracing::error!(login = %login, error = %e, "failed to rotate token pair");
                return Err(e);
            }
        };

        if !rotated {
            tracing::warn!(login = %login, kind = "revoked", "refresh lost rotation race");
            return Err(TokenError::Revoked.into());
        }

        tracing::info!(login = %login, "rotated token pair");
        Ok(pair)
    }

    /// Revokes the account's current pair
    pub async fn logout(&self, login: &str) -> Result<(), DomainError> {
        self.store.clear(login).await?;
        tracing::info!(login, "cleared token pair");
        Ok(())
    }

    /// Signs a token for `login` in `role` with a fresh token id
    pub fn sign(&self, login: &str, role: TokenRole) -> Result<String, DomainError> {
        let claims = Claims::new(self.config.subject.clone(), login, self.config.lifetime(role));
        self.sign_claims(&claims, role)
    }

    /// Signs arbitrary claims in `role`
    pub fn sign_claims(&self, claims: &Claims, role: TokenRole) -> Result<String, DomainError> {
        self.codec
            .sign(claims, self.keys.key(role))
            .map_err(|e| {
                tracing::error!(role = %role, error = %e, "failed to sign token");
                e.into()
            })
    }

    fn sign_pair(&self, login: &str) -> Result<TokenPair, DomainError> {
        Ok(TokenPair {
            access_token: self.sign(login, TokenRole::Access)?,
            refresh_token: self.sign(login, TokenRole::Refresh)?,
            access_expires_in: self.config.access_token_lifetime.num_seconds(),
            refresh_expires_in: self.config.refresh_token_lifetime.num_seconds(),
        })
    }
}
