//! Complaints API module
//!
//! # Routes
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /complaints | GET | List all complaints |
//! | /complaints | POST | File a new complaint |
//! | /complaints/update-status | POST | Change a complaint's status |
//! | /complaints/{id} | PUT | Change a complaint's status (path form) |

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::AppState;

pub fn router() -> Router<AppState> {
    Router::new().nest("/complaints", routes())
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/update-status", post(handler::update_status))
        .route("/{id}", put(handler::update_by_id))
}
