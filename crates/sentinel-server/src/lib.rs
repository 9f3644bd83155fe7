//! SentinelPay dashboard HTTP server library
//!
//! Exposes the router, configuration and rendering for tests and reuse.

pub mod api;
pub mod config;
pub mod error;
pub mod render;
