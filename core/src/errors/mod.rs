//! Domain-specific error types and error handling.

mod types;

pub use types::TokenError;

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("Account not found")]
    AccountNotFound,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn storage(message: impl Into<String>) -> Self {
        DomainError::Storage { message: message.into() }
    }

    pub fn config(message: impl Into<String>) -> Self {
        DomainError::Config { message: message.into() }
    }

    /// Errors reported to clients as a single opaque "unauthorized"
    pub fn is_unauthorized(&self) -> bool {
        match self {
            DomainError::Token(e) => e.is_validation_failure(),
            DomainError::AccountNotFound | DomainError::InvalidCredentials => true,
            _ => false,
        }
    }

    /// Errors reported to clients as a server-side failure
    pub fn is_server_error(&self) -> bool {
        !self.is_unauthorized()
    }

    /// Short kind label for logs and telemetry
    pub fn kind(&self) -> &'static str {
        match self {
            DomainError::Token(e) => e.kind(),
            DomainError::AccountNotFound => "account_not_found",
            DomainError::InvalidCredentials => "invalid_credentials",
            DomainError::Storage { .. } => "storage_error",
            DomainError::Config { .. } => "config_error",
            DomainError::Internal { .. } => "internal_error",
        }
    }
}

impl From<md_shared::ConfigError> for DomainError {
    fn from(err: md_shared::ConfigError) -> Self {
        DomainError::config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_failures_are_unauthorized() {
        for err in [
            TokenError::Malformed,
            TokenError::SignatureInvalid,
            TokenError::Expired,
            TokenError::Revoked,
        ] {
            let domain: DomainError = err.into();
            assert!(domain.is_unauthorized(), "{domain:?}");
            assert!(!domain.is_server_error());
        }
        assert!(DomainError::InvalidCredentials.is_unauthorized());
        assert!(DomainError::AccountNotFound.is_unauthorized());
    }

    #[test]
    fn test_server_failures() {
        let signing: DomainError = TokenError::SigningError { message: "boom".into() }.into();
        assert!(signing.is_server_error());
        assert!(DomainError::storage("disk").is_server_error());
        assert!(DomainError::config("missing").is_server_error());
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(DomainError::from(TokenError::Revoked).kind(), "revoked");
        assert_eq!(DomainError::storage("x").kind(), "storage_error");
        assert_eq!(DomainError::storage("x").to_string(), "Storage error: x");
    }
}
