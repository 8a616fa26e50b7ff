//! HTTP API handlers for seminote-analytics

/// GET /health
pub async fn health() -> &'static str {
    "📊 Seminote Analytics Service is running! Tracking piano learning progress."
}
