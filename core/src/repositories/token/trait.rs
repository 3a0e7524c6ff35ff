//! Token store trait: the per-account binding of the last issued token pair.

use async_trait::async_trait;

use crate::domain::entities::token::TokenRole;
use crate::errors::DomainError;

/// Persistent binding of one access and one refresh token per account
///
/// The stored strings are the revocation source of truth: a token is only
/// valid while it is byte-for-byte equal to the stored string of its role.
/// Writes overwrite, they never append.
///
/// # Errors
/// Every method fails with `DomainError::AccountNotFound` when no account row
/// matches `login`, and with `DomainError::Storage` on I/O failure.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Overwrite both stored token strings for the account
    async fn persist(
        &self,
        login: &str,
        access_token: &str,
        refresh_token: &str,
    ) -> Result<(), DomainError>;

    /// Currently stored token of `role`; empty when none is bound
    async fn fetch_stored(&self, login: &str, role: TokenRole) -> Result<String, DomainError>;

    /// Set both stored strings to empty, revoking the current pair
    async fn clear(&self, login: &str) -> Result<(), DomainError>;

    /// Replace the pair only if the stored refresh token still equals
    /// `presented_refresh`
    ///
    /// Must be a single atomic write. Of two concurrent calls presenting the
    /// same refresh token at most one returns `Ok(true)`.
    ///
    /// # Returns
    /// * `Ok(true)` - Pair replaced
    /// * `Ok(false)` - Stored refresh token no longer matches
    async fn rotate(
        &self,
        login: &str,
        presented_refresh: &str,
        access_token: &str,
        refresh_token: &str,
    ) -> Result<bool, DomainError>;
}
