//! Lightweight in-process metrics.
//!
//! Counters and the products-per-order histogram are stored as atomics and
//! rendered by the `/metrics` handler in Prometheus text format.

pub mod metrics;

pub use metrics::OrderMetrics;
