//! HTTP API handlers for seminote-notification

/// GET /health
pub async fn health() -> &'static str {
    "🔔 Seminote Notification Service is running! Keeping piano learners engaged."
}
