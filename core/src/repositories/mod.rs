pub mod account;
pub mod token;

pub use account::AccountRepository;
pub use token::TokenStore;

#[cfg(test)]
pub use token::MockTokenStore;
