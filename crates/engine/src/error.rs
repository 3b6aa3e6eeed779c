use axum::{
    extract::Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("Malformed webhook body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error("Action {action} requires the {permission} permission")]
    PermissionDenied {
        action: String,
        permission: &'static str,
    },
}

impl WebhookError {
    pub fn status(&self) -> StatusCode {
        match self {
            WebhookError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            WebhookError::PermissionDenied { .. } => StatusCode::FORBIDDEN,
        }
    }
}

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[derive(Debug, Error)]
pub enum GeoError {
    #[error("Location request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The lookup parses the body but has never written it into the result.
    #[error("Location body was not applied to the result")]
    BodyNotApplied,
}
