//! Platform constants and latency thresholds
//!
//! Real-time piano feedback budgets the end-to-end audio path as three
//! nested deadlines: WebRTC transport, note detection, and user-visible
//! feedback. The thresholds here are the accepted upper bounds in
//! milliseconds; the comparison is inclusive at the bound.

/// Platform name used in banners and status strings
pub const PLATFORM_NAME: &str = "Seminote";

/// Platform version string
pub const VERSION: &str = "0.1.0-SNAPSHOT";

/// Maximum acceptable WebRTC transport latency (ms)
pub const MAX_WEBRTC_LATENCY_MS: i64 = 5;

/// Maximum acceptable note detection latency (ms)
pub const MAX_NOTE_DETECTION_LATENCY_MS: i64 = 10;

/// Maximum acceptable end-to-end feedback latency (ms)
pub const MAX_FEEDBACK_LATENCY_MS: i64 = 20;

/// Human-readable platform identification line
pub fn platform_info() -> String {
    format!(
        "🎹 {} v{} - Piano Learning Platform",
        PLATFORM_NAME, VERSION
    )
}

/// Whether a measured WebRTC latency meets the real-time audio budget.
///
/// Inclusive at [`MAX_WEBRTC_LATENCY_MS`]. No lower bound is enforced;
/// negative measurements (clock skew artifacts) trivially pass.
pub fn is_webrtc_latency_acceptable(latency_ms: i64) -> bool {
    latency_ms <= MAX_WEBRTC_LATENCY_MS
}
