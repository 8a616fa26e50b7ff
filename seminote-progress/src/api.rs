//! HTTP API handlers for seminote-progress

/// GET /health
pub async fn health() -> &'static str {
    "📈 Seminote Progress Service is running! Monitoring piano learning achievements."
}
