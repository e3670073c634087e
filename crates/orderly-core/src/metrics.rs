//! Metrics capability used by [`OrderService`](crate::OrderService).
//!
//! The service reports events through this trait after each mutation and
//! knows nothing about how they are stored or exported. The live order count
//! gauge is not pushed here: exporters sample
//! [`OrderService::order_count`](crate::OrderService::order_count) when they
//! render.

use rust_decimal::Decimal;

pub trait MetricsSink: Send + Sync {
    /// A product was added to the catalog.
    fn product_created(&self, price: &Decimal);
    /// An order was added to the order collection.
    fn order_created(&self);
    /// An order was checked out holding `count` products.
    fn products_per_order(&self, count: usize);
}

/// Sink that drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopMetrics;

impl MetricsSink for NoopMetrics {
    fn product_created(&self, _price: &Decimal) {}
    fn order_created(&self) {}
    fn products_per_order(&self, _count: usize) {}
}
