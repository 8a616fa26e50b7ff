//! Health check endpoint

/// GET /health
///
/// Liveness probe. Reports process liveness, not subsystem health.
pub async fn health() -> &'static str {
    "🎹 Seminote User Service is running! Managing piano learners worldwide."
}
