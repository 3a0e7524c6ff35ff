//! Account entity: one row of the `users` table.

use serde::{Deserialize, Serialize};

use super::token::TokenRole;

/// Account record with its stored token binding
///
/// `access_token` and `refresh_token` hold the last issued pair; an empty
/// string means no token of that role is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Login, the primary key
    pub login: String,

    /// bcrypt hash of the account password
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Last issued access token
    #[serde(skip_serializing)]
    pub access_token: String,

    /// Last issued refresh token
    #[serde(skip_serializing)]
    pub refresh_token: String,
}

impl Account {
    /// Creates an account without an active token pair
    pub fn new(login: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password_hash: password_hash.into(),
            access_token: String::new(),
            refresh_token: String::new(),
        }
    }

    /// Stored token for `role`
    pub fn stored_token(&self, role: TokenRole) -> &str {
        match role {
            TokenRole::Access => &self.access_token,
            TokenRole::Refresh => &self.refresh_token,
        }
    }

    /// Whether a token pair is currently bound to the account
    pub fn has_active_pair(&self) -> bool {
        !self.access_token.is_empty() && !self.refresh_token.is_empty()
    }
}
