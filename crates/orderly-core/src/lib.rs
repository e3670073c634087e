//! orderly core: transport-agnostic order domain, store, and metrics seam.
//!
//! This crate owns the product catalog, the order collection, and the
//! operations over them. It carries no HTTP or runtime dependencies; the
//! gateway crate wraps it in an axum router and plugs in a metrics registry
//! through [`metrics::MetricsSink`].
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. Missing orders and
//! products surface as [`OrderlyError`] rather than crashing the process.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod metrics;
pub mod model;
pub mod service;
pub mod store;

/// Shared result type.
pub use error::{OrderlyError, Result};
pub use metrics::{MetricsSink, NoopMetrics};
pub use model::{Order, Product};
pub use service::OrderService;
