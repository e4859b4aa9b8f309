//! API routes
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`complaints`] - complaint CRUD and status updates
//! - [`chat`] - chatbot forwarder

pub mod convert;

pub mod chat;
pub mod complaints;
pub mod health;

use axum::Router;
use http::{HeaderName, HeaderValue};
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::AppState;

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build the application router with middleware and state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(complaints::router())
        .merge(chat::router())
        // CORS - the admin panel and chat page are hosted separately
        .layer(CorsLayer::permissive())
        // Request tracing
        .layer(TraceLayer::new_for_http())
        // Unique ID per request, echoed back to the caller
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static("x-request-id"),
            XRequestId,
        ))
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            "x-request-id",
        )))
        .with_state(state)
}
