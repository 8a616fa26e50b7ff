//! seminote-payment library - Payment service router
//!
//! Will process lesson subscription billing. Currently a skeleton
//! exposing its health surface only.

use axum::Router;

pub mod api;

/// Default listen port for the payment service
pub const DEFAULT_PORT: u16 = 8086;

/// Service key used for port resolution
pub const SERVICE_NAME: &str = "payment";

/// Build application router
pub fn build_router() -> Router {
    use axum::routing::get;
    use tower_http::trace::TraceLayer;

    Router::new()
        .route("/health", get(api::health))
        .layer(TraceLayer::new_for_http())
}
