//! Authentication service: password login on top of the token lifecycle

mod service;


pub use service::AuthService;
