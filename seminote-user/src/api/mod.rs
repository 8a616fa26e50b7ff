//! HTTP API handlers for seminote-user

pub mod health;
pub mod status;

pub use health::health;
pub use status::{user_stats, user_status};
