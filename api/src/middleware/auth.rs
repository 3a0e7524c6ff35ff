//! Bearer token authentication middleware for protecting API endpoints.
//!
//! This middleware extracts the access token from the Authorization header,
//! validates it against the stored binding, and injects the account's
//! [`AuthContext`] into the request.

use actix_web::{
    body::EitherBody,
    dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use async_trait::async_trait;
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use md_core::errors::DomainError;
use md_core::repositories::{AccountRepository, TokenStore};
use md_core::services::AuthService;

use crate::handlers::error_handler::{handle_domain_error, unauthorized};

/// Authenticated account injected into requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub login: String,
}

/// Access token validation as seen by the middleware
///
/// Lets [`JwtAuth`] stay free of the storage type parameters.
#[async_trait]
pub trait AccessTokenValidator: Send + Sync {
    /// Login bound to a valid access token
    async fn validate_access(&self, token: &str) -> Result<String, DomainError>;
}

#[async_trait]
impl<A, S> AccessTokenValidator for AuthService<A, S>
where
    A: AccountRepository + 'static,
    S: TokenStore + 'static,
{
    async fn validate_access(&self, token: &str) -> Result<String, DomainError> {
        self.authenticate(token).await
    }
}

/// Bearer authentication middleware factory
#[derive(Clone)]
pub struct JwtAuth {
    validator: Arc<dyn AccessTokenValidator>,
}

impl JwtAuth {
    pub fn new(validator: Arc<dyn AccessTokenValidator>) -> Self {
        Self { validator }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            validator: self.validator.clone(),
        }))
    }
}

/// Bearer authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    validator: Arc<dyn AccessTokenValidator>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let validator = self.validator.clone();

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => {
                    tracing::warn!(path = req.path(), "missing bearer token");
                    return Ok(req.into_response(unauthorized()).map_into_right_body());
                }
            };

            let login = match validator.validate_access(&token).await {
                Ok(login) => login,
                Err(error) => {
                    let response = handle_domain_error(&error);
                    return Ok(req.into_response(response).map_into_right_body());
                }
            };

            req.extensions_mut().insert(AuthContext { login });

            service
                .call(req)
                .await
                .map(ServiceResponse::map_into_left_body)
        })
    }
}

/// Extracts Bearer token from Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result: Result<Self, Self::Error> = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| {
                actix_web::error::InternalError::from_response(
                    "authentication required",
                    unauthorized(),
                )
                .into()
            });

        ready(result)
    }
}
