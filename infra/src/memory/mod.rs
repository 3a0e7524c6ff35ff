//! In-memory account store
//!
//! Backs the HTTP tests and local runs without MySQL. Holds the same
//! contract as the `users` table: one row per login with its stored pair.

mod account_store;


pub use account_store::InMemoryAccountRepository;
