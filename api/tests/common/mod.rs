//! Shared setup for the HTTP tests
#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use base64::{engine::general_purpose::STANDARD, Engine as _};

use md_api::app::AppState;
use md_core::domain::entities::account::Account;
use md_core::services::{AuthService, TokenService};
use md_infra::InMemoryAccountRepository;
use md_shared::JwtConfig;

pub const PASSWORD: &str = "correct horse";

pub type TestState = AppState<InMemoryAccountRepository, InMemoryAccountRepository>;

pub fn test_state() -> (web::Data<TestState>, InMemoryAccountRepository) {
    test_state_with(JwtConfig::new("test-access-secret", "test-refresh-secret"))
}

pub fn test_state_with(jwt: JwtConfig) -> (web::Data<TestState>, InMemoryAccountRepository) {
    let hash = bcrypt::hash(PASSWORD, 4).unwrap();
    let repository = InMemoryAccountRepository::with_accounts([
        Account::new("alice", hash.clone()),
        Account::new("bob", hash),
    ]);

    let store = Arc::new(repository.clone());
    let tokens = Arc::new(TokenService::from_config(store.clone(), &jwt).unwrap());
    let auth = Arc::new(AuthService::new(store, tokens));

    (web::Data::new(AppState::new(auth)), repository)
}

pub fn basic(login: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{}:{}", login, password)))
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// `GET /login` with the test password
pub fn login_request(login: &str) -> actix_web::test::TestRequest {
    actix_web::test::TestRequest::get()
        .uri("/login")
        .insert_header((actix_web::http::header::AUTHORIZATION, basic(login, PASSWORD)))
}
