//! Security placeholders
//!
//! Session validation is not implemented yet; callers gate real-time
//! audio paths on [`is_session_secure`] so the call sites exist before
//! the JWT layer lands.

/// Signing key placeholder for session tokens
pub const JWT_SECRET_KEY: &str = "seminote-piano-learning-platform-secret";

/// Session token lifetime in hours
pub const JWT_EXPIRATION_HOURS: i64 = 24;

/// Whether the current session is secure enough for real-time audio.
///
/// Placeholder: always `true` until session validation is implemented.
pub fn is_session_secure() -> bool {
    true
}
