//! # Error Handling
//!
//! This module defines the application error type and how each variant is
//! turned into an HTTP response.
//!
//! ## Disclosure policy
//! - Login failures (unknown user, wrong password) share one generic message.
//! - Store failures during login are logged server-side and reported as a
//!   generic 500; the underlying error text never reaches the client.
//! - The health check is not routed through here: it reports store errors
//!   inline (see `gateway::health`).

use crate::db::StoreError;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Message returned for any rejected login, whatever the cause.
pub const INVALID_CREDENTIALS: &str =
    "ユーザー名またはパスワードが間違っています (invalid username or password)";

/// Message returned for a login body that isn't `{username, password}` JSON.
pub const INVALID_BODY: &str =
    "リクエストの形式が正しくありません (expected JSON body with string username and password)";

/// Message returned for any unexpected failure.
pub const SERVER_ERROR: &str = "サーバーエラーが発生しました (internal server error)";

/// Application-wide error type
///
/// `#[from]` lets handlers and the gateway use `?` on store results and on
/// axum's JSON extractor result.
#[derive(Error, Debug)]
pub enum AppError {
    /// The user record store could not be queried (500)
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// The login body was not valid JSON or missed a field (4xx from axum)
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    /// Well-formed body with unusable content (400)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Unknown username or wrong password (401)
    ///
    /// Deliberately carries no detail so both causes look the same.
    #[error("Unauthorized")]
    Unauthorized,

    /// Any other unexpected failure (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Convert AppError into an HTTP response
///
/// The body mirrors the login response shape so clients only parse one format:
/// `{ "success": false, "message": "..." }`
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Store(e) => {
                // Detailed cause stays in the server log
                tracing::error!(error = %e, "user store query failed");
                (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR.to_string())
            }
            AppError::Internal(detail) => {
                tracing::error!(%detail, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR.to_string())
            }
            AppError::InvalidBody(rejection) => {
                // Rejection text can quote field values, including the password
                let status = rejection.status();
                tracing::debug!(status = status.as_u16(), "rejected request body");
                (status, INVALID_BODY.to_string())
            }
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, INVALID_CREDENTIALS.to_string()),
        };

        let body = Json(json!({
            "success": false,
            "message": message,
        }));

        (status, body).into_response()
    }
}

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_the_taxonomy() {
        let store_failure = StoreError::MalformedResponse("truncated".into());

        assert_eq!(AppError::Unauthorized.into_response().status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AppError::Store(store_failure).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Internal("worker panicked".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::BadRequest("username must not be empty".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }
}
