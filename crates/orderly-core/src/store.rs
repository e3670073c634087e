use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::error::Result;
use crate::model::{Order, Product};

/// Catalog + order collection with monotonic id counters.
///
/// Not synchronized; [`OrderService`](crate::OrderService) keeps it behind a
/// single lock. Ids start at 1 and are never handed out twice, even after an
/// order is removed.
#[derive(Debug)]
pub struct Store {
    products: Vec<Product>,
    orders: Vec<Order>,
    next_product_id: u64,
    next_order_id: u64,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            orders: Vec::new(),
            next_product_id: 1,
            next_order_id: 1,
        }
    }

    pub fn insert_product(&mut self, name: Option<String>, price: Decimal) -> Product {
        let product = Product {
            id: self.next_product_id,
            name,
            price,
        };
        self.next_product_id += 1;
        self.products.push(product.clone());
        product
    }

    /// Snapshot the catalog entries named by `product_ids` (catalog order,
    /// unknown ids skipped) into a new order. Nothing is stored and no id is
    /// consumed when the order total overflows.
    pub fn insert_order(
        &mut self,
        product_ids: &[u64],
        created_at: DateTime<Utc>,
    ) -> Result<Order> {
        let products = self
            .products
            .iter()
            .filter(|p| product_ids.contains(&p.id))
            .cloned()
            .collect();

        let order = Order::new(self.next_order_id, created_at, products)?;
        self.next_order_id += 1;
        self.orders.push(order.clone());
        Ok(order)
    }

    pub fn product(&self, id: u64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn order(&self, id: u64) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    pub fn remove_order(&mut self, id: u64) -> Option<Order> {
        let idx = self.orders.iter().position(|o| o.id == id)?;
        Some(self.orders.remove(idx))
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }
}
