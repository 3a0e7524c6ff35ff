//! Token error taxonomy
//!
//! Every variant except `SigningError` is a validation failure. The HTTP
//! layer reports all validation failures with one opaque status and keeps the
//! variant for logs only.

use thiserror::Error;

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// The string cannot be parsed into the expected token structure
    #[error("Malformed token")]
    Malformed,

    /// Signature does not match the key of the requested role
    #[error("Invalid signature")]
    SignatureInvalid,

    /// Past its declared expiry
    #[error("Token expired")]
    Expired,

    /// No longer the stored token for its account (logout or supersession)
    #[error("Token revoked")]
    Revoked,

    /// Key manager failure while signing
    #[error("Token signing failed: {message}")]
    SigningError { message: String },
}

impl TokenError {
    /// Short kind label for logs and telemetry
    pub fn kind(&self) -> &'static str {
        match self {
            TokenError::Malformed => "malformed",
            TokenError::SignatureInvalid => "signature_invalid",
            TokenError::Expired => "expired",
            TokenError::Revoked => "revoked",
            TokenError::SigningError { .. } => "signing_error",
        }
    }

    /// Whether this is a validation failure rather than a server fault
    pub fn is_validation_failure(&self) -> bool {
        !matches!(self, TokenError::SigningError { .. })
    }
}
