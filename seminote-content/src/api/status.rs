//! Content catalog status endpoint
//!
//! Counts are hard-coded at zero until the content catalog lands.

/// GET /content/status
pub async fn content_status() -> &'static str {
    "📚 Content Service: ACTIVE | Lessons: 0 | Sheet Music: 0 | Interactive Exercises: 0"
}
