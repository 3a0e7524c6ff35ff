//! Mock implementation of TokenStore and AccountRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::account::Account;
use crate::domain::entities::token::TokenRole;
use crate::errors::DomainError;
use crate::repositories::AccountRepository;

use super::r#trait::TokenStore;

/// Mock account table for testing
pub struct MockTokenStore {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
    fail_writes: AtomicBool,
}

impl MockTokenStore {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Create a mock holding one account per login
    pub fn with_accounts(logins: &[&str]) -> Self {
        let accounts = logins
            .iter()
            .map(|login| (login.to_string(), Account::new(*login, "")))
            .collect();
        Self {
            accounts: Arc::new(RwLock::new(accounts)),
            fail_writes: AtomicBool::new(false),
        }
    }

    pub async fn insert(&self, account: Account) {
        self.accounts.write().await.insert(account.login.clone(), account);
    }

    pub async fn get(&self, login: &str) -> Option<Account> {
        self.accounts.read().await.get(login).cloned()
    }

    /// Make every subsequent write fail with a storage error
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn check_writes(&self) -> Result<(), DomainError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::storage("mock write failure"));
        }
        Ok(())
    }
}

impl Default for MockTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountRepository for MockTokenStore {
    async fn find_by_login(&self, login: &str) -> Result<Option<Account>, DomainError> {
        Ok(self.get(login).await)
    }
}

#[async_trait]
impl TokenStore for MockTokenStore {
    async fn persist(
        &self,
        login: &str,
        access_token: &str,
        refresh_token: &str,
    ) -> Result<(), DomainError> {
        self.check_writes()?;
        let mut accounts = self.accounts.write().await;
        let account = accounts.get_mut(login).ok_or(DomainError::AccountNotFound)?;
        account.access_token = access_token.to_string();
        account.refresh_token = refresh_token.to_string();
        Ok(())
    }

    async fn fetch_stored(&self, login: &str, role: TokenRole) -> Result<String, DomainError> {
        let accounts = self.accounts.read().await;
        accounts
            .get(login)
            .map(|account| account.stored_token(role).to_string())
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
        self.check_writes()?;
        let mut accounts = self.accounts.write().await;
        let account = accounts.get_mut(login).ok_or(DomainError::AccountNotFound)?;
        if account.refresh_token.is_empty() || account.refresh_token != presented_refresh {
            return Ok(false);
        }
        account.access_token = access_token.to_string();
        account.refresh_token = refresh_token.to_string();
        Ok(true)
    }
}
