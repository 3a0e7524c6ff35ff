//! Application state and factory
//!
//! This module holds the shared application state and provides the factory
//! for the Actix-web application used by the binary and the tests.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, Error, HttpResponse,
};
use tracing_actix_web::TracingLogger;

use md_core::repositories::{AccountRepository, TokenStore};
use md_core::services::AuthService;

use crate::handlers::error_handler::{json_error_handler, not_found};
use crate::middleware::auth::{AccessTokenValidator, JwtAuth};
use crate::routes::auth::{login::login, logout::logout, refresh::refresh_token};
use crate::routes::{health::health_check, protected::whoami};

/// State shared by every handler
pub struct AppState<A: AccountRepository, S: TokenStore> {
    pub auth_service: Arc<AuthService<A, S>>,
}

impl<A: AccountRepository, S: TokenStore> AppState<A, S> {
    pub fn new(auth_service: Arc<AuthService<A, S>>) -> Self {
        Self { auth_service }
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<A, S>(
    app_state: web::Data<AppState<A, S>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    A: AccountRepository + 'static,
    S: TokenStore + 'static,
{
    let validator: Arc<dyn AccessTokenValidator> = app_state.auth_service.clone();

    App::new()
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check))
        .route("/login", web::get().to(login::<A, S>))
        .route("/refresh_token", web::post().to(refresh_token::<A, S>))
        .service(
            web::resource("/logout")
                .wrap(JwtAuth::new(validator.clone()))
                .route(web::get().to(logout::<A, S>)),
        )
        .service(
            web::scope("/api")
                .wrap(JwtAuth::new(validator))
                .route("/test", web::get().to(whoami)),
        )
        .default_service(web::route().to(default_handler))
}

async fn default_handler() -> HttpResponse {
    not_found()
}
