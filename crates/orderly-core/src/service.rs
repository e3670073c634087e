//! Order service: the single entry point for catalog and order operations.
//!
//! All state sits in one [`Store`] behind one mutex. Each operation holds the
//! lock for its own duration only, so create/delete/checkout are atomic with
//! respect to each other. Metrics are reported after the lock is released.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use rust_decimal::Decimal;

use crate::error::{OrderlyError, Result};
use crate::metrics::{MetricsSink, NoopMetrics};
use crate::model::{Order, Product};
use crate::store::Store;

pub struct OrderService {
    store: Mutex<Store>,
    metrics: Arc<dyn MetricsSink>,
}

impl Default for OrderService {
    fn default() -> Self {
        Self::new(Arc::new(NoopMetrics))
    }
}

impl OrderService {
    pub fn new(metrics: Arc<dyn MetricsSink>) -> Self {
        Self {
            store: Mutex::new(Store::new()),
            metrics,
        }
    }

    // Every mutation is a single Vec push/remove plus a counter bump, so a
    // poisoned guard still holds a consistent store.
    fn store(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn create_product(&self, name: Option<String>, price: Decimal) -> Product {
        let product = self.store().insert_product(name, price);
        self.metrics.product_created(&product.price);
        tracing::info!(product_id = product.id, price = %product.price, "product created");
        product
    }

    /// Create an order from whichever of `product_ids` exist in the catalog.
    /// Unknown ids are skipped; an empty list yields an empty order. Fails
    /// only when the summed prices overflow the decimal range.
    pub fn create_order(&self, product_ids: &[u64]) -> Result<Order> {
        let order = self
            .store()
            .insert_order(product_ids, Utc::now())
            .inspect_err(|e| tracing::warn!(error = %e, "order rejected"))?;
        self.metrics.order_created();
        tracing::info!(
            order_id = order.id,
            requested = product_ids.len(),
            product_count = order.product_count(),
            "order created"
        );
        Ok(order)
    }

    pub fn get_order(&self, id: u64) -> Result<Order> {
        self.store()
            .order(id)
            .cloned()
            .ok_or(OrderlyError::OrderNotFound(id))
    }

    pub fn delete_order(&self, id: u64) -> Result<Order> {
        let removed = self
            .store()
            .remove_order(id)
            .ok_or(OrderlyError::OrderNotFound(id))?;
        tracing::info!(order_id = id, "order deleted");
        Ok(removed)
    }

    /// Record the order's product count in the products-per-order histogram.
    pub fn checkout(&self, order_id: u64) -> Result<()> {
        let count = match self.store().order(order_id) {
            Some(order) => order.product_count(),
            None => {
                tracing::warn!(order_id, "checkout of unknown order");
                return Err(OrderlyError::OrderNotFound(order_id));
            }
        };
        self.metrics.products_per_order(count);
        tracing::info!(order_id, product_count = count, "order checked out");
        Ok(())
    }

    pub fn get_product(&self, id: u64) -> Result<Product> {
        self.store()
            .product(id)
            .cloned()
            .ok_or(OrderlyError::ProductNotFound(id))
    }

    pub fn list_products(&self) -> Vec<Product> {
        self.store().products().to_vec()
    }

    pub fn list_orders(&self) -> Vec<Order> {
        self.store().orders().to_vec()
    }

    /// Current number of orders. Backs the pull-sampled order gauge.
    pub fn order_count(&self) -> usize {
        self.store().order_count()
    }
}
