//! HTTP handlers, kept thin over the service layer.

use actix_session::Session;
use actix_web::HttpResponse;
use serde_json::json;

use crate::ADMIN_SESSION_KEY;
use crate::domain::auth::AdminUser;
use crate::services::ServiceError;

pub mod auth;
pub mod categories;
pub mod products;
pub mod shops;
pub mod upload;

/// Reads the administrator claim out of the session cookie, if any.
///
/// This is only the claim; callers hand it to the service layer, which
/// re-checks it against the user store.
pub fn session_admin(session: &Session) -> Option<AdminUser> {
    session.get::<AdminUser>(ADMIN_SESSION_KEY).ok().flatten()
}

/// JSON error body used across the API.
pub fn error_body(message: impl AsRef<str>) -> serde_json::Value {
    json!({ "message": message.as_ref() })
}

/// Maps service failures onto HTTP responses.
pub fn service_error_response(e: ServiceError) -> HttpResponse {
    match e {
        ServiceError::InvalidCredentials | ServiceError::NotAnAdmin | ServiceError::Unauthorized => {
            HttpResponse::Unauthorized().json(error_body(e.to_string()))
        }
        ServiceError::Validation(message) => HttpResponse::BadRequest().json(error_body(message)),
        ServiceError::NotFound => HttpResponse::NotFound().json(error_body("not found")),
        ServiceError::Repository(message) => {
            HttpResponse::InternalServerError().json(error_body(message))
        }
        ServiceError::Internal => {
            HttpResponse::InternalServerError().json(error_body("internal error"))
        }
    }
}

/// 401 issued when a privileged route is hit without a session claim.
pub fn unauthorized_response() -> HttpResponse {
    HttpResponse::Unauthorized().json(error_body("unauthorized"))
}
