//! seminote-progress library - Progress service router
//!
//! Tracks piano learning achievements and practice milestones.
//! Currently a skeleton exposing its health surface only.

use axum::Router;

pub mod api;

/// Default listen port for the progress service
pub const DEFAULT_PORT: u16 = 8083;

/// Service key used for port resolution
pub const SERVICE_NAME: &str = "progress";

/// Build application router
pub fn build_router() -> Router {
    use axum::routing::get;
    use tower_http::trace::TraceLayer;

    Router::new()
        .route("/health", get(api::health))
        .layer(TraceLayer::new_for_http())
}
