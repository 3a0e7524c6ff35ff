//! HTTP surface of the My Dictionaries backend.
//!
//! Exposed as a library so the binary and the integration tests build the
//! same application through [`app::create_app`].

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod telemetry;
