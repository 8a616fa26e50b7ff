//! HTTP API handlers for seminote-content

pub mod health;
pub mod status;

pub use health::health;
pub use status::content_status;
