//! Health check endpoint

/// GET /health
pub async fn health() -> &'static str {
    "🎹 Seminote API Gateway is running! Ready to orchestrate your piano learning journey."
}
