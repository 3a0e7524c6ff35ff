use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use md_core::domain::entities::account::Account;
use md_core::domain::entities::token::TokenRole;
use md_core::errors::DomainError;
use md_core::repositories::{AccountRepository, TokenStore};

/// Account table kept behind a tokio `RwLock`
///
/// Every write takes the lock once, so `rotate` is atomic with respect to
/// concurrent callers.
#[derive(Clone, Default)]
pub struct InMemoryAccountRepository {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with `accounts`
    pub fn with_accounts(accounts: impl IntoIterator<Item = Account>) -> Self {
        let accounts = accounts
            .into_iter()
            .map(|account| (account.login.clone(), account))
            .collect();
        Self {
            accounts: Arc::new(RwLock::new(accounts)),
        }
    }

    /// Insert or replace an account
    pub async fn insert(&self, account: Account) {
        self.accounts
            .write()
            .await
            .insert(account.login.clone(), account);
    }

    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn find_by_login(&self, login: &str) -> Result<Option<Account>, DomainError> {
        Ok(self.accounts.read().await.get(login).cloned())
    }
}

#[async_trait]
impl TokenStore for InMemoryAccountRepository {
    async fn persist(
        &self,
        login: &str,
        access_token: &str,
        refresh_token: &str,
    ) -> Result<(), DomainError> {
        let mut accounts = self.accounts.write().await;
        let account = accounts.get_mut(login).ok_or(DomainError::AccountNotFound)?;
        account.access_token = access_token.to_owned();
        account.refresh_token = refresh_token.to_owned();
        Ok(())
    }

    async fn fetch_stored(&self, login: &str, role: TokenRole) -> Result<String, DomainError> {
        self.accounts
            .read()
            .await
            .get(login)
            .map(|account| account.stored_token(role).to_owned())
            .ok_or(DomainError::AccountNotFound)
    }

    async fn clear(&self, login: &str) -> Result<(), DomainError> {
        self.persist(login, "", "").await
    }

    async fn rotate(
        &self,
        login: &str,
        presented_refresh: &str,
        access_token: &str,
        refresh_token: &str,
    ) -> Result<bool, DomainError> {
        let mut accounts = self.accounts.write().await;
        let account = accounts.get_mut(login).ok_or(DomainError::AccountNotFound)?;
        if account.refresh_token.is_empty() || account.refresh_token != presented_refresh {
            return Ok(false);
        }
        account.access_token = access_token.to_owned();
        account.refresh_token = refresh_token.to_owned();
        Ok(true)
    }
}
