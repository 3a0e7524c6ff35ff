//! Signing and verification of claim sets as compact HS256 JWTs

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, decode_header, encode, Algorithm, Header, Validation};

use crate::domain::entities::token::Claims;
use crate::errors::TokenError;

use super::key_manager::SigningKey;

/// Stateless JWT codec
///
/// Verification checks structure, signature and subject. Expiry is left to
/// the caller so an expired token can be told apart from a forged one.
#[derive(Debug, Clone)]
pub struct TokenCodec {
    validation: Validation,
}

impl TokenCodec {
    /// Creates a codec accepting only tokens whose `sub` equals `subject`
    pub fn new(subject: impl Into<String>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.set_required_spec_claims(&["exp", "sub"]);
        validation.sub = Some(subject.into());

        Self { validation }
    }

    /// Signs `claims` with `key`
    pub fn sign(&self, claims: &Claims, key: &SigningKey) -> Result<String, TokenError> {
        let mut header = Header::new(Algorithm::HS256);
        header.kid = Some(key.key_id().to_string());

        encode(&header, claims, key.encoding_key()).map_err(|e| TokenError::SigningError {
            message: e.to_string(),
        })
    }

    /// Verifies `token` against `key` and returns its claims
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - Signature valid, claims unexamined for expiry
    /// * `Err(TokenError::SignatureInvalid)` - Signed with another key, or the
    ///   header declares the other role
    /// * `Err(TokenError::Malformed)` - Not a parseable token of the expected
    ///   structure, wrong subject, or missing/empty `login`
    pub fn verify(&self, token: &str, key: &SigningKey) -> Result<Claims, TokenError> {
        let header = decode_header(token).map_err(|_| TokenError::Malformed)?;
        if let Some(kid) = header.kid.as_deref() {
            if kid != key.key_id() {
                return Err(TokenError::SignatureInvalid);
            }
        }

        let token_data = decode::<Claims>(token, key.decoding_key(), &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => TokenError::SignatureInvalid,
                _ => TokenError::Malformed,
            })?;

        if token_data.claims.login.trim().is_empty() {
            return Err(TokenError::Malformed);
        }

        Ok(token_data.claims)
    }
}
