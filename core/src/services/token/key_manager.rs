//! HMAC key management for the two token roles

use jsonwebtoken::{DecodingKey, EncodingKey};
use md_shared::JwtConfig;

use crate::domain::entities::token::TokenRole;
use crate::errors::DomainError;

/// Symmetric signing key bound to one token role
#[derive(Clone)]
pub struct SigningKey {
    role: TokenRole,
    /// Key for signing JWTs
    encoding_key: EncodingKey,
    /// Key for verifying JWTs
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKey")
            .field("kid", &self.key_id())
            .finish()
    }
}

impl SigningKey {
    fn from_secret(role: TokenRole, secret: &[u8]) -> Result<Self, DomainError> {
        if secret.is_empty() {
            return Err(DomainError::config(format!("{} secret is missing", role.key_id())));
        }

        Ok(Self {
            role,
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
        })
    }

    pub fn role(&self) -> TokenRole {
        self.role
    }

    /// Identifier written to the `kid` header, `access_key` or `refresh_key`
    pub fn key_id(&self) -> &'static str {
        self.role.key_id()
    }

    pub fn encoding_key(&self) -> &EncodingKey {
        &self.encoding_key
    }

    pub fn decoding_key(&self) -> &DecodingKey {
        &self.decoding_key
    }
}

/// Signing keys for access and refresh tokens
///
/// Built once at startup and shared read-only for the life of the process.
/// There is no rotation.
#[derive(Clone, Debug)]
pub struct KeyManager {
    access: SigningKey,
    refresh: SigningKey,
}

impl KeyManager {
    /// Creates both role keys from raw secret material
    ///
    /// # Returns
    ///
    /// * `Ok(KeyManager)` - Keys initialized
    /// * `Err(DomainError::Config)` - A secret is empty, or both secrets are
    ///   identical (a refresh token would then verify as an access token)
    pub fn new(access_secret: &[u8], refresh_secret: &[u8]) -> Result<Self, DomainError> {
        if access_secret == refresh_secret {
            return Err(DomainError::config(
                "access and refresh secrets must be distinct",
            ));
        }

        Ok(Self {
            access: SigningKey::from_secret(TokenRole::Access, access_secret)?,
            refresh: SigningKey::from_secret(TokenRole::Refresh, refresh_secret)?,
        })
    }

    /// Creates the key manager from JWT configuration
    pub fn from_config(config: &JwtConfig) -> Result<Self, DomainError> {
        Self::new(config.access_secret.as_bytes(), config.refresh_secret.as_bytes())
    }

    /// Key for `role`
    pub fn key(&self, role: TokenRole) -> &SigningKey {
        match role {
            TokenRole::Access => &self.access,
            TokenRole::Refresh => &self.refresh,
        }
    }
}
