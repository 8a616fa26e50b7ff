//! HTTP API handlers for seminote-payment

/// GET /health
pub async fn health() -> &'static str {
    "💳 Seminote Payment Service is running! Processing piano lesson subscriptions."
}
