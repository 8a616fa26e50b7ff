//! # Seminote Common Library
//!
//! Shared code for all Seminote platform services including:
//! - Platform constants and latency thresholds
//! - Metric recording helpers
//! - Security placeholders
//! - Port and configuration resolution
//! - HTTP server runtime

pub mod config;
pub mod error;
pub mod monitoring;
pub mod platform;
pub mod security;
pub mod serve;

pub use error::{Error, Result};
