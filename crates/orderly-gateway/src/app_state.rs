//! Shared application state for the orderly gateway.
//!
//! One `OrderService` per process, wired to the in-process metrics registry.
//! Cloned into every handler; all fields are behind `Arc`.

use std::sync::Arc;

use orderly_core::error::Result;
use orderly_core::OrderService;

use crate::config::Config;
use crate::obs::OrderMetrics;

#[derive(Clone)]
pub struct AppState {
    cfg: Arc<Config>,
    orders: Arc<OrderService>,
    metrics: Arc<OrderMetrics>,
}

impl AppState {
    /// Build application state.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn new(cfg: Config) -> Result<Self> {
        cfg.validate()?;

        let metrics = Arc::new(OrderMetrics::default());
        let orders = Arc::new(OrderService::new(metrics.clone()));

        Ok(Self {
            cfg: Arc::new(cfg),
            orders,
            metrics,
        })
    }

    pub fn cfg(&self) -> &Config {
        &self.cfg
    }

    pub fn orders(&self) -> &OrderService {
        &self.orders
    }

    pub fn metrics(&self) -> &OrderMetrics {
        &self.metrics
    }

    /// Render `/metrics`, sampling the live order gauge now.
    pub fn render_metrics(&self) -> String {
        self.metrics.render(self.orders.order_count())
    }

    pub fn set_draining(&self) {
        self.metrics.set_draining();
    }

    pub fn is_draining(&self) -> bool {
        self.metrics.is_draining()
    }
}
