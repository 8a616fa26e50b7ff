//! HTTP API handlers for seminote-gateway

pub mod health;
pub mod status;
pub mod welcome;

pub use health::health;
pub use status::gateway_status;
pub use welcome::welcome;
