//! Catalog and order records.
//!
//! Wire shape is camelCase JSON; prices are `rust_decimal::Decimal` and
//! serialize as JSON numbers carrying the exact decimal digits.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{OrderlyError, Result};

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub name: Option<String>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
}

/// An order holding snapshots of the products it was created with.
///
/// `total_price` is fixed at construction; products are never mutated after
/// creation so it cannot drift from `products`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: u64,
    pub created_at: DateTime<Utc>,
    pub products: Vec<Product>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_price: Decimal,
}

impl Order {
    /// Fails when the prices do not fit in a `Decimal` once summed.
    pub fn new(id: u64, created_at: DateTime<Utc>, products: Vec<Product>) -> Result<Self> {
        let total_price = total_of(&products)?;
        Ok(Self {
            id,
            created_at,
            products,
            total_price,
        })
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }
}

fn total_of(products: &[Product]) -> Result<Decimal> {
    products
        .iter()
        .try_fold(Decimal::ZERO, |acc, p| acc.checked_add(p.price))
        .ok_or_else(|| OrderlyError::BadRequest("order total overflows decimal range".into()))
}
