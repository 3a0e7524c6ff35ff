//! Token lifecycle module
//!
//! This module handles everything about the access/refresh token pair:
//! - Signing keys for both roles, built once at startup
//! - HS256 signing and verification of claim sets
//! - Issuance, validation against the stored binding, refresh rotation and logout

mod codec;
mod config;
mod key_manager;
mod service;

#[cfg(test)]
mod tests;

pub use codec::TokenCodec;
pub use config::TokenServiceConfig;
pub use key_manager::{KeyManager, SigningKey};
pub use service::TokenService;
