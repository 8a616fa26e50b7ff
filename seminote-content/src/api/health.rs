//! Health check endpoint

/// GET /health
pub async fn health() -> &'static str {
    "🎼 Seminote Content Service is running! Delivering world-class piano education content."
}
