use actix_web::{web, HttpResponse};

use md_core::repositories::{AccountRepository, TokenStore};

use crate::app::AppState;
use crate::dto::auth::{RefreshTokenRequest, TokenPairResponse};
use crate::handlers::error_handler::handle_domain_error;

/// Handler for POST /refresh_token
///
/// Exchanges a valid refresh token for a new pair. The presented token and its
/// access token stop being valid.
///
/// # Request Body
///
/// ```json
/// {
///     "refresh_token": "string"
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: Invalid, expired or already used refresh token
/// - 422 Unprocessable Entity: Missing or unreadable body
/// - 500 Internal Server Error: Storage or signing failure
pub async fn refresh_token<A, S>(
    state: web::Data<AppState<A, S>>,
    request: web::Json<RefreshTokenRequest>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    S: TokenStore + 'static,
{
    match state.auth_service.refresh(&request.refresh_token).await {
        Ok(pair) => HttpResponse::Ok().json(TokenPairResponse::from(pair)),
        Err(error) => handle_domain_error(&error),
    }
}
