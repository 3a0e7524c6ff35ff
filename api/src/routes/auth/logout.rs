use actix_web::{web, HttpResponse};

use md_core::repositories::{AccountRepository, TokenStore};

use crate::app::AppState;
use crate::dto::auth::LogoutResponse;
use crate::handlers::error_handler::handle_domain_error;
use crate::middleware::auth::AuthContext;

/// Handler for GET /logout
///
/// Clears the stored pair of the authenticated account. Requires a bearer
/// access token.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "message": "Logged out successfully"
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: Missing or invalid access token
/// - 500 Internal Server Error: Storage failure
pub async fn logout<A, S>(state: web::Data<AppState<A, S>>, auth: AuthContext) -> HttpResponse
where
    A: AccountRepository + 'static,
    S: TokenStore + 'static,
{
    match state.auth_service.logout(&auth.login).await {
        Ok(()) => {
            tracing::info!(login = %auth.login, "logged out");
            HttpResponse::Ok().json(LogoutResponse {
                message: "Logged out successfully".to_string(),
            })
        }
        Err(error) => handle_domain_error(&error),
    }
}
