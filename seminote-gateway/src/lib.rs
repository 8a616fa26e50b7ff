//! seminote-gateway library - API gateway router
//!
//! Single entry point for the platform. Will route requests to the
//! downstream services and own cross-cutting concerns (authentication,
//! rate limiting, WebRTC signaling coordination); today it exposes the
//! welcome and status surface only.

use axum::Router;

pub mod api;

/// Default listen port for the API gateway
pub const DEFAULT_PORT: u16 = 8080;

/// Service key used for port resolution
pub const SERVICE_NAME: &str = "gateway";

/// Build application router.
///
/// The gateway fronts browser clients, so it carries a permissive CORS
/// layer in addition to request tracing.
pub fn build_router() -> Router {
    use axum::routing::get;
    use tower_http::cors::CorsLayer;
    use tower_http::trace::TraceLayer;

    Router::new()
        .route("/", get(api::welcome))
        .route("/health", get(api::health))
        .route("/gateway/status", get(api::gateway_status))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
