//! Platform welcome page

/// GET /
pub async fn welcome() -> &'static str {
    "🎹 Welcome to Seminote - The Future of Piano Learning! 🎵\nAPI Gateway v0.1.0 | Microservices Architecture | Real-time WebRTC Audio Processing"
}
