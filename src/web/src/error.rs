use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use core::{EngineError, ErrorKind};
use serde_json::json;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    InternalError(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::BadRequest(message)
            | ApiError::NotFound(message)
            | ApiError::Conflict(message)
            | ApiError::InternalError(message) => message,
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Engine rejections map onto HTTP by their coarse kind: broken rules
/// and exceeded limits are the client's fault, stale-state rejections
/// are conflicts, missing entities are 404s.
impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        let message = err.to_string();

        match err.kind() {
            ErrorKind::Validation | ErrorKind::CapacityExceeded => ApiError::BadRequest(message),
            ErrorKind::StateConflict => ApiError::Conflict(message),
            ErrorKind::NotFound => ApiError::NotFound(message),
        }
    }
}
