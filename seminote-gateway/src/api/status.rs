//! Gateway status endpoint
//!
//! The service list is static; the gateway does not yet probe the
//! downstream services it names.

/// GET /gateway/status
pub async fn gateway_status() -> &'static str {
    "🚀 API Gateway Status: ACTIVE | Services: User, Content, Analytics, Progress, Notification, Payment | WebRTC: READY"
}
