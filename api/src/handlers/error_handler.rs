//! Mapping of domain errors to HTTP responses
//!
//! Every authentication failure gets the same 401 body, whatever the internal
//! reason. The reason is only logged.

use actix_web::{error::JsonPayloadError, http::StatusCode, HttpRequest, HttpResponse};

use md_core::errors::DomainError;
use md_shared::{error_codes, ErrorResponse};

/// Convert a domain error into its HTTP response
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    if error.is_unauthorized() {
        tracing::warn!(kind = error.kind(), "request rejected");
        return unauthorized();
    }

    tracing::error!(kind = error.kind(), error = %error, "request failed");
    error_response(StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal())
}

/// The opaque 401 response
pub fn unauthorized() -> HttpResponse {
    error_response(StatusCode::UNAUTHORIZED, ErrorResponse::unauthorized())
}

pub fn not_found() -> HttpResponse {
    error_response(
        StatusCode::NOT_FOUND,
        ErrorResponse::new(error_codes::NOT_FOUND, "The requested resource was not found"),
    )
}

/// Rejects unreadable JSON bodies with 422
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::warn!(error = %err, "invalid JSON body");
    let response = error_response(
        StatusCode::UNPROCESSABLE_ENTITY,
        ErrorResponse::new(error_codes::UNPROCESSABLE_ENTITY, "Invalid request body"),
    );
    actix_web::error::InternalError::from_response(err, response).into()
}

fn error_response(status: StatusCode, body: ErrorResponse) -> HttpResponse {
    HttpResponse::build(status).json(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use md_core::errors::TokenError;

    #[test]
    fn test_validation_failures_share_one_status() {
        for err in [
            TokenError::Malformed,
            TokenError::SignatureInvalid,
            TokenError::Expired,
            TokenError::Revoked,
        ] {
            let response = handle_domain_error(&DomainError::Token(err));
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        }

        let response = handle_domain_error(&DomainError::InvalidCredentials);
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_server_errors() {
        let response = handle_domain_error(&DomainError::storage("connection reset"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = handle_domain_error(&DomainError::Token(TokenError::SigningError {
            message: "bad key".into(),
        }));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
