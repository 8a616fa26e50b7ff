//! User service status and statistics endpoints
//!
//! Counts are hard-coded at zero until the user store lands.

/// GET /users/status
pub async fn user_status() -> &'static str {
    "👥 User Service Status: ACTIVE | Features: Registration, Authentication, Profiles, Piano Skills Assessment"
}

/// GET /users/stats
pub async fn user_stats() -> &'static str {
    "📊 Piano Learners: 0 registered | Skill Levels: Beginner to Advanced | Practice Sessions: 0 completed"
}
