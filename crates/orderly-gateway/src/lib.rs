//! orderly gateway library entry.
//!
//! Wires the core order service, the metrics registry, and the HTTP routes
//! into one axum application. Consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod error;
pub mod obs;
pub mod ops;
pub mod router;
