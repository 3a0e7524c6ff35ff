//! Tests for the mock token store contract

use crate::domain::entities::token::TokenRole;
use crate::errors::DomainError;
use crate::repositories::token::{MockTokenStore, TokenStore};

#[tokio::test]
async fn test_persist_overwrites_both_slots() {
    let store = MockTokenStore::with_accounts(&["alice"]);

    store.persist("alice", "at1", "rt1").await.unwrap();
    store.persist("alice", "at2", "rt2").await.unwrap();

    assert_eq!(store.fetch_stored("alice", TokenRole::Access).await.unwrap(), "at2");
    assert_eq!(store.fetch_stored("alice", TokenRole::Refresh).await.unwrap(), "rt2");
}

#[tokio::test]
async fn test_unknown_account() {
    let store = MockTokenStore::new();

    assert_eq!(
        store.persist("ghost", "a", "r").await,
        Err(DomainError::AccountNotFound)
    );
    assert_eq!(
        store.fetch_stored("ghost", TokenRole::Access).await,
        Err(DomainError::AccountNotFound)
    );
    assert_eq!(store.clear("ghost").await, Err(DomainError::AccountNotFound));
}

#[tokio::test]
async fn test_clear_empties_slots() {
    let store = MockTokenStore::with_accounts(&["alice"]);
    store.persist("alice", "at", "rt").await.unwrap();

    store.clear("alice").await.unwrap();

    assert_eq!(store.fetch_stored("alice", TokenRole::Access).await.unwrap(), "");
    assert_eq!(store.fetch_stored("alice", TokenRole::Refresh).await.unwrap(), "");
}

#[tokio::test]
async fn test_rotate_is_compare_and_swap() {
    let store = MockTokenStore::with_accounts(&["alice"]);
    store.persist("alice", "at1", "rt1").await.unwrap();

    assert!(store.rotate("alice", "rt1", "at2", "rt2").await.unwrap());
    assert!(!store.rotate("alice", "rt1", "at3", "rt3").await.unwrap());
    assert_eq!(store.fetch_stored("alice", TokenRole::Refresh).await.unwrap(), "rt2");
}

#[tokio::test]
async fn test_rotate_never_matches_cleared_slot() {
    let store = MockTokenStore::with_accounts(&["alice"]);
    assert!(!store.rotate("alice", "", "at", "rt").await.unwrap());
}
