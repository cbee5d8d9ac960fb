use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;
use serde_json::Value;
use thiserror::Error as ThisError;

use crate::store::StoreError;
use crate::utils::config::ErrorMode;

#[derive(Debug, ThisError)]
pub enum ServiceError {
    #[error("news {0} not found")]
    NotFound(i32),
    #[error("news {0} already exists")]
    Conflict(i32),
    #[error("news number is required for update")]
    MissingNumber,
    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for ServiceError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound(number) => ServiceError::NotFound(number),
            StoreError::Conflict(number) => ServiceError::Conflict(number),
            StoreError::Unnumbered => ServiceError::MissingNumber,
            other => ServiceError::Store(other),
        }
    }
}

#[derive(Debug)]
pub struct Error {
    pub code: StatusCode,
    pub body: Json<Value>,
}

impl Error {
    pub fn new(code: StatusCode, message: &str) -> Self {
        Self {
            code,
            body: Json(json!({"message": message})),
        }
    }

    /// Translates a service failure into a response according to `mode`.
    pub fn from_service(error: ServiceError, mode: ErrorMode) -> Self {
        let code = match (mode, &error) {
            (ErrorMode::Observed, _) => StatusCode::INTERNAL_SERVER_ERROR,
            (ErrorMode::Strict, ServiceError::NotFound(_)) => StatusCode::NOT_FOUND,
            (ErrorMode::Strict, ServiceError::Conflict(_)) => StatusCode::CONFLICT,
            (ErrorMode::Strict, ServiceError::MissingNumber) => StatusCode::BAD_REQUEST,
            (ErrorMode::Strict, ServiceError::Store(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if code.is_server_error() {
            tracing::error!(error = %error, "news request failed");
        } else {
            tracing::warn!(error = %error, "news request rejected");
        }
        Self::new(code, &error.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (self.code, self.body).into_response()
    }
}
