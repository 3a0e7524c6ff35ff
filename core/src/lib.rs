//! # My Dictionaries Core
//!
//! Core business logic and domain layer for the My Dictionaries backend.
//! This crate contains the token lifecycle manager (issue, validate, refresh,
//! logout), its signing key manager and codec, the repository interfaces the
//! storage layer implements, and the error taxonomy shared by every layer.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
