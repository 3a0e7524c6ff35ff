//! Authentication service implementation

use std::sync::Arc;

use crate::domain::entities::token::TokenPair;
use crate::errors::DomainError;
use crate::repositories::{AccountRepository, TokenStore};
use crate::services::token::TokenService;

/// Entry point for the four account-facing token operations
///
/// Login checks the password and issues a pair; the rest delegate to the
/// [`TokenService`].
pub struct AuthService<A: AccountRepository, S: TokenStore> {
    accounts: Arc<A>,
    tokens: Arc<TokenService<S>>,
}

impl<A: AccountRepository, S: TokenStore> AuthService<A, S> {
    pub fn new(accounts: Arc<A>, tokens: Arc<TokenService<S>>) -> Self {
        Self { accounts, tokens }
    }

    pub fn token_service(&self) -> &Arc<TokenService<S>> {
        &self.tokens
    }

    /// Authenticates `login`/`password` and issues a new token pair
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - Credentials valid, pair persisted
    /// * `Err(DomainError::InvalidCredentials)` - Unknown login or wrong password
    /// * `Err(DomainError)` - Storage or signing failure
    pub async fn login(&self, login: &str, password: &str) -> Result<TokenPair, DomainError> {
        let account = self
            .accounts
            .find_by_login(login)
            .await?
            .ok_or_else(|| {
                tracing::warn!(login, "login for unknown account");
                DomainError::InvalidCredentials
            })?;

        let password = password.to_owned();
        let hash = account.password_hash.clone();
        let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("password check aborted: {}", e),
            })?;

        match matches {
            Ok(true) => {}
            Ok(false) => {
                tracing::warn!(login, "login with wrong password");
                return Err(DomainError::InvalidCredentials);
            }
            Err(e) => {
                tracing::error!(login, error = %e, "stored password hash is unusable");
                return Err(DomainError::InvalidCredentials);
            }
        }

        self.tokens.issue(&account.login).await
    }

    /// Validates a bearer access token
    pub async fn authenticate(&self, access_token: &str) -> Result<String, DomainError> {
        self.tokens.validate_access(access_token).await
    }

    /// Rotates the pair bound to `refresh_token`
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, DomainError> {
        self.tokens.refresh(refresh_token).await
    }

    /// Revokes the account's current pair
    pub async fn logout(&self, login: &str) -> Result<(), DomainError> {
        self.tokens.logout(login).await
    }
}
