//! JSON handlers for the order and product endpoints.

pub mod orders;
pub mod products;
