use actix_web::{http::header::AUTHORIZATION, web, HttpRequest, HttpResponse};
use base64::{engine::general_purpose::STANDARD, Engine as _};

use md_core::repositories::{AccountRepository, TokenStore};

use crate::app::AppState;
use crate::dto::auth::TokenPairResponse;
use crate::handlers::error_handler::{handle_domain_error, unauthorized};

/// Handler for GET /login
///
/// Authenticates with HTTP Basic credentials and issues a new token pair,
/// superseding any pair the account held before.
///
/// # Headers
///
/// ```text
/// Authorization: Basic base64(login:password)
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "access_token": "eyJ...",
///     "refresh_token": "eyJ..."
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: Missing credentials, unknown login or wrong password
/// - 500 Internal Server Error: Storage or signing failure
pub async fn login<A, S>(req: HttpRequest, state: web::Data<AppState<A, S>>) -> HttpResponse
where
    A: AccountRepository + 'static,
    S: TokenStore + 'static,
{
    let Some((login, password)) = basic_credentials(&req) else {
        tracing::warn!("login without basic credentials");
        return unauthorized();
    };

    match state.auth_service.login(&login, &password).await {
        Ok(pair) => {
            tracing::info!(login = %login, "login succeeded");
            HttpResponse::Ok().json(TokenPairResponse::from(pair))
        }
        Err(error) => handle_domain_error(&error),
    }
}

/// Decodes `Authorization: Basic` into login and password
fn basic_credentials(req: &HttpRequest) -> Option<(String, String)> {
    let encoded = req
        .headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Basic ")?;

    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (login, password) = decoded.split_once(':')?;

    if login.is_empty() {
        return None;
    }
    Some((login.to_string(), password.to_string()))
}
