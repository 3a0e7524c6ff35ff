use actix_web::HttpResponse;

use crate::dto::auth::WhoAmIResponse;
use crate::middleware::auth::AuthContext;

/// Handler for GET /api/test
///
/// Echoes the login the bearer token belongs to.
pub async fn whoami(auth: AuthContext) -> HttpResponse {
    HttpResponse::Ok().json(WhoAmIResponse { login: auth.login })
}
