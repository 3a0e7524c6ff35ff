//! Database module - MySQL implementations using SQLx
//!
//! - Connection pool management and migrations
//! - The account/token repository over the `users` table

pub mod connection;
pub mod mysql;


// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::MySqlAccountRepository;
