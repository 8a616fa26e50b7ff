//! seminote-content library - Content service router
//!
//! Delivers lessons, sheet music, and interactive exercises. Currently a
//! skeleton exposing its health and status surface only.

use axum::Router;

pub mod api;

/// Default listen port for the content service
pub const DEFAULT_PORT: u16 = 8082;

/// Service key used for port resolution
pub const SERVICE_NAME: &str = "content";

/// Build application router
pub fn build_router() -> Router {
    use axum::routing::get;
    use tower_http::trace::TraceLayer;

    Router::new()
        .route("/health", get(api::health))
        .route("/content/status", get(api::content_status))
        .layer(TraceLayer::new_for_http())
}
