use axum::{routing::post, Router};

use super::handlers;
use super::state::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new().route("/dialogflow", post(handlers::handle_dialogflow))
}
