//! Mapping from core failures to HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use patient_metrics_core::{RegistryError, StoreError};

/// Wrapper that turns an engine error into an HTTP response.
///
/// Failure bodies are `{"detail": "..."}` with one status per error variant.
#[derive(Debug)]
pub struct ApiError(pub RegistryError);

impl ApiError {
    /// Status code this error maps to.
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            RegistryError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            RegistryError::DuplicateId(_) => StatusCode::CONFLICT,
            RegistryError::NotFound(_) => StatusCode::NOT_FOUND,
            RegistryError::InvalidSortKey(_) | RegistryError::InvalidSortOrder(_) => {
                StatusCode::BAD_REQUEST
            }
            RegistryError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        Self(err)
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self(RegistryError::Storage(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }
        (status, Json(json!({ "detail": self.0.to_string() }))).into_response()
    }
}
