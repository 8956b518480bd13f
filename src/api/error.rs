use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

use crate::error::{ErrorKind, ReportError};

/// Renders as `{"success": false, "error": "..."}` with a status chosen by
/// error kind. 503 responses also carry `fallbackMode`.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
    pub fallback_mode: Option<bool>,
}

impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.into(),
            fallback_mode: None,
        }
    }

    pub fn unavailable(msg: impl Into<String>, fallback_mode: bool) -> Self {
        Self {
            status: StatusCode::SERVICE_UNAVAILABLE,
            message: msg.into(),
            fallback_mode: Some(fallback_mode),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.into(),
            fallback_mode: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut body = json!({ "success": false, "error": self.message });
        if let Some(fallback) = self.fallback_mode {
            body["fallbackMode"] = json!(fallback);
        }
        (self.status, Json(body)).into_response()
    }
}

impl From<ReportError> for AppError {
    fn from(e: ReportError) -> Self {
        match e.kind() {
            ErrorKind::Validation => AppError::bad_request(e.to_string()),
            ErrorKind::Unavailable => AppError::unavailable(e.to_string(), false),
            ErrorKind::Internal => AppError::internal(e.to_string()),
        }
    }
}
