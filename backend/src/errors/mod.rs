//! Global application error types and handlers.
//!
//! The profile and metric services signal failures as typed variants rather
//! than exceptions; this module defines that taxonomy and maps each variant
//! onto the HTTP response the API returns, keeping the translation in one
//! place.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::database::StoreError;

/// JSON body attached to every error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Typed failure signalled by the profile and metric services.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The principal may not perform this operation on the target user.
    #[error("operation not permitted for this user")]
    Forbidden,
    /// No profile is stored for the target username.
    #[error("no health profile exists for user '{0}'")]
    ProfileNotFound(String),
    /// A profile for this username is already stored.
    #[error("a health profile already exists for user '{0}'")]
    ProfileAlreadyExists(String),
    /// The underlying store failed; fatal for the current call.
    #[error("storage failure: {0}")]
    Store(#[from] StoreError),
}

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::ProfileNotFound(_) => StatusCode::NOT_FOUND,
            Self::ProfileAlreadyExists(_) => StatusCode::CONFLICT,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        // Store failure detail stays out of the response body.
        let body = match &self {
            Self::Store(_) => ErrorResponse {
                error: "internal storage failure".into(),
            },
            other => ErrorResponse {
                error: other.to_string(),
            },
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_expected_status_codes() {
        assert_eq!(ServiceError::Forbidden.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            ServiceError::ProfileNotFound("testuser".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ServiceError::ProfileAlreadyExists("testuser".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ServiceError::Store(StoreError::Unavailable("down".into())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn store_failure_detail_is_not_leaked() {
        let error = ServiceError::Store(StoreError::Unavailable("dsn=secret".into()));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        let body = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(!body.contains("secret"));
        assert!(body.contains("internal storage failure"));
    }
}
