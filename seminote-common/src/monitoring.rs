//! Metric recording helpers
//!
//! Measurements are emitted as human-readable lines through the tracing
//! sink. There is no buffering, aggregation, or export; a structured
//! metrics pipeline replaces this module once one exists.

use tracing::info;

/// Record a measured WebRTC transport latency
pub fn record_webrtc_latency(latency_ms: i64) {
    info!("📊 WebRTC Latency: {}ms", latency_ms);
}

/// Record a measured piano note detection time
pub fn record_note_detection_time(detection_ms: i64) {
    info!("🎹 Note Detection: {}ms", detection_ms);
}
