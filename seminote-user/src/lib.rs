//! seminote-user library - User service router
//!
//! Manages piano learner accounts: registration, authentication,
//! profiles, and skill assessment. Currently a skeleton exposing its
//! health and status surface only.

use axum::Router;

pub mod api;

/// Default listen port for the user service
pub const DEFAULT_PORT: u16 = 8081;

/// Service key used for port resolution
pub const SERVICE_NAME: &str = "user";

/// Build application router
pub fn build_router() -> Router {
    use axum::routing::get;
    use tower_http::trace::TraceLayer;

    Router::new()
        .route("/health", get(api::health))
        .route("/users/status", get(api::user_status))
        .route("/users/stats", get(api::user_stats))
        .layer(TraceLayer::new_for_http())
}
