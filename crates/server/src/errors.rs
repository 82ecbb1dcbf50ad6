use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use tracing::error;

/// HTTP-facing error carrying the status and the `{"message": ...}` body.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub message: String,
}

impl JsonApiError {
    pub fn new<S: Into<String>>(status: StatusCode, message: S) -> Self {
        Self { status, message: message.into() }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({ "message": self.message }))).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            ServiceError::Model(e) => Self::new(StatusCode::BAD_REQUEST, e.to_string()),
            // id lookups always surface the flat "Not found" body
            ServiceError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, "Not found"),
            ServiceError::Storage(msg) => {
                error!(error = %msg, "catalog storage fault");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            ServiceError::Upstream(msg) => {
                error!(error = %msg, "price feed fetch failed");
                Self::new(StatusCode::BAD_GATEWAY, "Price feed unavailable")
            }
        }
    }
}
