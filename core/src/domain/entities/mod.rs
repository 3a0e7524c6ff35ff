//! Domain entities representing core business objects.

pub mod account;
pub mod token;

pub use account::Account;
pub use token::{Claims, TokenPair, TokenRole};
