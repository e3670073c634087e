//! Top-level facade crate for orderly.
//!
//! Re-exports the core domain and the gateway library so users can depend on a single crate.

pub mod core {
    pub use orderly_core::*;
}

pub mod gateway {
    pub use orderly_gateway::*;
}
