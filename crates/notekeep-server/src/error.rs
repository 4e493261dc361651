//! HTTP mapping for `NoteError`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use notekeep_core::error::{ClientCode, NoteError};

/// Handler-side wrapper so `NoteError` can be returned from axum handlers.
#[derive(Debug)]
pub struct ApiError(pub NoteError);

impl From<NoteError> for ApiError {
    fn from(e: NoteError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.0.client_code();
        let status = match code {
            ClientCode::Validation => StatusCode::BAD_REQUEST,
            ClientCode::NotFound => StatusCode::NOT_FOUND,
            ClientCode::InvalidConfig | ClientCode::UnsupportedVersion | ClientCode::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        tracing::debug!(code = code.as_str(), error = %self.0, "request rejected");
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
