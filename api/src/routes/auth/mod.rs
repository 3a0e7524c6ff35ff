//! Authentication route handlers
//!
//! - Login with HTTP Basic credentials
//! - Token refresh
//! - Logout

pub mod login;
pub mod logout;
pub mod refresh;
