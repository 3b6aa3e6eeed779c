use axum::{
    body::Bytes,
    extract::{Json, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use spyglass_shared::{DEVICE_PRECISE_LOCATION, WebhookRequest};

use super::state::AppState;
use crate::dispatch::Outcome;
use crate::error::WebhookError;

pub async fn handle_dialogflow(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, WebhookError> {
    tracing::info!(payload = %String::from_utf8_lossy(&body), "Dialogflow request");

    let req: WebhookRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!(error = %e, "Rejecting malformed webhook body");
        WebhookError::MalformedBody(e)
    })?;

    match state.dispatcher.handle(&req) {
        Outcome::Respond(resp) => Ok(Json(resp).into_response()),
        Outcome::PermissionDenied { action } => {
            if state.strict {
                Err(WebhookError::PermissionDenied {
                    action,
                    permission: DEVICE_PRECISE_LOCATION,
                })
            } else {
                Ok(empty_body(StatusCode::OK))
            }
        }
        Outcome::Unhandled { .. } => {
            if state.strict {
                Ok(StatusCode::NO_CONTENT.into_response())
            } else {
                Ok(empty_body(StatusCode::OK))
            }
        }
    }
}

// The platform ignores an empty fulfillment; keep the JSON content type so
// the reply still looks like one.
fn empty_body(status: StatusCode) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")]).into_response()
}
