//! Chat API module

mod handler;

use axum::{Router, routing::post};

use crate::core::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/chat", post(handler::chat))
}
