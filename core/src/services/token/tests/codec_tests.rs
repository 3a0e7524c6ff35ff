//! Unit tests for the token codec

use chrono::{Duration, Utc};
use jsonwebtoken::{decode_header, encode, EncodingKey, Header};

use crate::domain::entities::token::{Claims, TokenRole};
use crate::errors::TokenError;
use crate::services::token::{KeyManager, TokenCodec};

fn keys() -> KeyManager {
    KeyManager::new(b"access-secret", b"refresh-secret").unwrap()
}

fn claims(login: &str) -> Claims {
    Claims::new("my-dictionaries", login, Duration::seconds(60))
}

#[test]
fn test_sign_then_verify_returns_claims() {
    let keys = keys();
    let codec = TokenCodec::new("my-dictionaries");
    let claims = claims("alice");

    let token = codec.sign(&claims, keys.key(TokenRole::Access)).unwrap();
    let verified = codec.verify(&token, keys.key(TokenRole::Access)).unwrap();

    assert_eq!(verified, claims);
}

#[test]
fn test_header_declares_role_key() {
    let keys = keys();
    let codec = TokenCodec::new("my-dictionaries");

    let token = codec.sign(&claims("alice"), keys.key(TokenRole::Refresh)).unwrap();
    let header = decode_header(&token).unwrap();

    assert_eq!(header.kid.as_deref(), Some("refresh_key"));
}

#[test]
fn test_wrong_role_key_is_signature_invalid() {
    let keys = keys();
    let codec = TokenCodec::new("my-dictionaries");

    let refresh = codec.sign(&claims("alice"), keys.key(TokenRole::Refresh)).unwrap();

    assert_eq!(
        codec.verify(&refresh, keys.key(TokenRole::Access)),
        Err(TokenError::SignatureInvalid)
    );
}

#[test]
fn test_foreign_key_is_signature_invalid() {
    let ours = keys();
    let theirs = KeyManager::new(b"other-access", b"other-refresh").unwrap();
    let codec = TokenCodec::new("my-dictionaries");

    let forged = codec.sign(&claims("alice"), theirs.key(TokenRole::Access)).unwrap();

    assert_eq!(
        codec.verify(&forged, ours.key(TokenRole::Access)),
        Err(TokenError::SignatureInvalid)
    );
}

#[test]
fn test_unsigned_header_without_kid_still_checks_signature() {
    let keys = keys();
    let codec = TokenCodec::new("my-dictionaries");

    let token = encode(
        &Header::default(),
        &claims("alice"),
        &EncodingKey::from_secret(b"guessed-secret"),
    )
    .unwrap();

    assert_eq!(
        codec.verify(&token, keys.key(TokenRole::Access)),
        Err(TokenError::SignatureInvalid)
    );
}

#[test]
fn test_tampered_payload_is_rejected() {
    let keys = keys();
    let codec = TokenCodec::new("my-dictionaries");
    let token = codec.sign(&claims("alice"), keys.key(TokenRole::Access)).unwrap();
    let other = codec.sign(&claims("mallory"), keys.key(TokenRole::Access)).unwrap();

    // alice's header and signature around mallory's payload
    let parts: Vec<&str> = token.split('.').collect();
    let other_parts: Vec<&str> = other.split('.').collect();
    let spliced = format!("{}.{}.{}", parts[0], other_parts[1], parts[2]);

    assert_eq!(
        codec.verify(&spliced, keys.key(TokenRole::Access)),
        Err(TokenError::SignatureInvalid)
    );
}

#[test]
fn test_garbage_is_malformed() {
    let keys = keys();
    let codec = TokenCodec::new("my-dictionaries");

    for input in ["", "not-a-token", "a.b.c", "....."] {
        assert_eq!(
            codec.verify(input, keys.key(TokenRole::Access)),
            Err(TokenError::Malformed),
            "{input:?}"
        );
    }
}

#[test]
fn test_empty_login_is_malformed() {
    let keys = keys();
    let codec = TokenCodec::new("my-dictionaries");

    let token = codec.sign(&claims(""), keys.key(TokenRole::Access)).unwrap();

    assert_eq!(
        codec.verify(&token, keys.key(TokenRole::Access)),
        Err(TokenError::Malformed)
    );
}

#[test]
fn test_missing_login_is_malformed() {
    #[derive(serde::Serialize)]
    struct Anonymous {
        sub: String,
        jti: String,
        exp: i64,
    }

    let keys = keys();
    let codec = TokenCodec::new("my-dictionaries");
    let mut header = Header::default();
    header.kid = Some("access_key".into());
    let anonymous = Anonymous {
        sub: "my-dictionaries".into(),
        jti: "id".into(),
        exp: Utc::now().timestamp() + 60,
    };

    let token = encode(&header, &anonymous, keys.key(TokenRole::Access).encoding_key()).unwrap();

    assert_eq!(
        codec.verify(&token, keys.key(TokenRole::Access)),
        Err(TokenError::Malformed)
    );
}

#[test]
fn test_other_subject_is_malformed() {
    let keys = keys();
    let issuing = TokenCodec::new("another-service");
    let verifying = TokenCodec::new("my-dictionaries");

    let mut foreign = claims("alice");
    foreign.sub = "another-service".into();
    let token = issuing.sign(&foreign, keys.key(TokenRole::Access)).unwrap();

    assert_eq!(
        verifying.verify(&token, keys.key(TokenRole::Access)),
        Err(TokenError::Malformed)
    );
}

#[test]
fn test_verify_does_not_check_expiry() {
    let keys = keys();
    let codec = TokenCodec::new("my-dictionaries");
    let mut expired = claims("alice");
    expired.exp = Utc::now().timestamp() - 3600;

    let token = codec.sign(&expired, keys.key(TokenRole::Access)).unwrap();
    let verified = codec.verify(&token, keys.key(TokenRole::Access)).unwrap();

    assert!(verified.is_expired());
}
