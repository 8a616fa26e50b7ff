//! seminote-notification library - Notification service router
//!
//! Will deliver practice reminders and achievement notifications.
//! Currently a skeleton exposing its health surface only.

use axum::Router;

pub mod api;

/// Default listen port for the notification service
pub const DEFAULT_PORT: u16 = 8085;

/// Service key used for port resolution
pub const SERVICE_NAME: &str = "notification";

/// Build application router
pub fn build_router() -> Router {
    use axum::routing::get;
    use tower_http::trace::TraceLayer;

    Router::new()
        .route("/health", get(api::health))
        .layer(TraceLayer::new_for_http())
}
