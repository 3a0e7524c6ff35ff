//! MySQL implementation of the AccountRepository and TokenStore traits.
//!
//! Every account is one row of the `users` table; its stored token pair lives
//! in the `access_token` and `refresh_token` columns. Rotation is a single
//! conditional UPDATE so concurrent refreshes of one token cannot both win.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};

use md_core::domain::entities::account::Account;
use md_core::domain::entities::token::TokenRole;
use md_core::errors::DomainError;
use md_core::repositories::{AccountRepository, TokenStore};

const SELECT_ACCOUNT: &str = r#"
    SELECT login, password_hash, access_token, refresh_token
    FROM users
    WHERE login = ?
    LIMIT 1
"#;

const SELECT_ACCESS_TOKEN: &str = "SELECT access_token FROM users WHERE login = ? LIMIT 1";
const SELECT_REFRESH_TOKEN: &str = "SELECT refresh_token FROM users WHERE login = ? LIMIT 1";

const UPDATE_PAIR: &str = r#"
    UPDATE users
    SET access_token = ?, refresh_token = ?
    WHERE login = ?
"#;

const ROTATE_PAIR: &str = r#"
    UPDATE users
    SET access_token = ?, refresh_token = ?
    WHERE login = ? AND refresh_token = ? AND refresh_token <> ''
"#;

const ACCOUNT_EXISTS: &str = "SELECT 1 FROM users WHERE login = ? LIMIT 1";

/// MySQL implementation of the account and token storage
#[derive(Clone)]
pub struct MySqlAccountRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlAccountRepository {
    /// Create a new MySQL account repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Account entity
    fn row_to_account(row: &sqlx::mysql::MySqlRow) -> Result<Account, DomainError> {
        Ok(Account {
            login: row
                .try_get("login")
                .map_err(|e| DomainError::storage(format!("Failed to get login: {}", e)))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| DomainError::storage(format!("Failed to get password_hash: {}", e)))?,
            access_token: row
                .try_get("access_token")
                .map_err(|e| DomainError::storage(format!("Failed to get access_token: {}", e)))?,
            refresh_token: row
                .try_get("refresh_token")
                .map_err(|e| DomainError::storage(format!("Failed to get refresh_token: {}", e)))?,
        })
    }

    // MySQL reports changed rows, not matched rows: an UPDATE writing
    // identical values affects 0 rows even though the account exists.
    async fn account_exists(&self, login: &str) -> Result<bool, DomainError> {
        let row = sqlx::query(ACCOUNT_EXISTS)
            .bind(login)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Database query failed: {}", e)))?;
        Ok(row.is_some())
    }

    async fn write_pair(
        &self,
        login: &str,
        access_token: &str,
        refresh_token: &str,
    ) -> Result<(), DomainError> {
        let result = sqlx::query(UPDATE_PAIR)
            .bind(access_token)
            .bind(refresh_token)
            .bind(login)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to store tokens: {}", e)))?;

        if result.rows_affected() == 0 && !self.account_exists(login).await? {
            return Err(DomainError::AccountNotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl AccountRepository for MySqlAccountRepository {
    async fn find_by_login(&self, login: &str) -> Result<Option<Account>, DomainError> {
        let result = sqlx::query(SELECT_ACCOUNT)
            .bind(login)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Database query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_account(&row)?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl TokenStore for MySqlAccountRepository {
    async fn persist(
        &self,
        login: &str,
        access_token: &str,
        refresh_token: &str,
    ) -> Result<(), DomainError> {
        self.write_pair(login, access_token, refresh_token).await?;
        tracing::debug!(login, "stored new token pair");
        Ok(())
    }

    async fn fetch_stored(&self, login: &str, role: TokenRole) -> Result<String, DomainError> {
        let query = match role {
            TokenRole::Access => SELECT_ACCESS_TOKEN,
            TokenRole::Refresh => SELECT_REFRESH_TOKEN,
        };

        let row = sqlx::query(query)
            .bind(login)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Database query failed: {}", e)))?
            .ok_or(DomainError::AccountNotFound)?;

        row.try_get::<String, _>(0)
            .map_err(|e| DomainError::storage(format!("Failed to get {} token: {}", role, e)))
    }

    async fn clear(&self, login: &str) -> Result<(), DomainError> {
        self.write_pair(login, "", "").await?;
        tracing::debug!(login, "cleared token pair");
        Ok(())
    }

    async fn rotate(
        &self,
        login: &str,
        presented_refresh: &str,
        access_token: &str,
        refresh_token: &str,
    ) -> Result<bool, DomainError> {
        let result = sqlx::query(ROTATE_PAIR)
            .bind(access_token)
            .bind(refresh_token)
            .bind(login)
            .bind(presented_refresh)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to rotate tokens: {}", e)))?;

        if result.rows_affected() == 1 {
            return Ok(true);
        }
        if !self.account_exists(login).await? {
            return Err(DomainError::AccountNotFound);
        }
        Ok(false)
    }
}
