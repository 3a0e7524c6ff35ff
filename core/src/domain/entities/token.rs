//! Token entities for the access/refresh token pair.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which half of a token pair a token belongs to.
///
/// The role selects the signing key, the lifetime and the storage slot, so a
/// token can only ever be validated in the role it was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenRole {
    Access,
    Refresh,
}

impl TokenRole {
    /// Key identifier written into the token header
    pub fn key_id(&self) -> &'static str {
        match self {
            TokenRole::Access => "access_key",
            TokenRole::Refresh => "refresh_key",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenRole::Access => "access",
            TokenRole::Refresh => "refresh",
        }
    }
}

impl std::fmt::Display for TokenRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (service-wide identifier, not per account)
    pub sub: String,

    /// Account the token was issued for
    #[serde(default)]
    pub login: String,

    /// JWT ID, fresh for every issuance
    pub jti: String,

    /// Expiration timestamp (seconds since epoch)
    pub exp: i64,
}

impl Claims {
    /// Creates claims for `login` expiring `lifetime` from now
    pub fn new(subject: impl Into<String>, login: impl Into<String>, lifetime: Duration) -> Self {
        let expiry = Utc::now() + lifetime;

        Self {
            sub: subject.into(),
            login: login.into(),
            jti: Uuid::new_v4().to_string(),
            exp: expiry.timestamp(),
        }
    }

    /// Checks whether the claims have expired at `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() > self.exp
    }

    /// Checks whether the claims have expired
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Expiry as a timestamp, if representable
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.exp, 0).single()
    }
}

/// Token pair returned by login and refresh
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Signed access token
    pub access_token: String,

    /// Signed refresh token
    pub refresh_token: String,

    /// Access token lifetime in seconds
    pub access_expires_in: i64,

    /// Refresh token lifetime in seconds
    pub refresh_expires_in: i64,
}
