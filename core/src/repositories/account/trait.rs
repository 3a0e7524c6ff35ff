//! Account repository trait: read access to the `users` table.

use async_trait::async_trait;

use crate::domain::entities::account::Account;
use crate::errors::DomainError;

/// Repository trait for account lookups
///
/// Only the login step reads whole accounts; token state is accessed through
/// [`TokenStore`](crate::repositories::TokenStore).
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an account by login
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Account found
    /// * `Ok(None)` - No account with this login
    /// * `Err(DomainError::Storage)` - Lower-level I/O failure
    async fn find_by_login(&self, login: &str) -> Result<Option<Account>, DomainError>;
}
