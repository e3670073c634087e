//! Shared error type across orderly crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed request.
    BadRequest,
    /// Referenced order or product does not exist.
    NotFound,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, OrderlyError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum OrderlyError {
    #[error("order not found: {0}")]
    OrderNotFound(u64),
    #[error("product not found: {0}")]
    ProductNotFound(u64),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl OrderlyError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            OrderlyError::OrderNotFound(_) | OrderlyError::ProductNotFound(_) => {
                ClientCode::NotFound
            }
            OrderlyError::BadRequest(_) => ClientCode::BadRequest,
            OrderlyError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            OrderlyError::Internal(_) => ClientCode::Internal,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.client_code() == ClientCode::NotFound
    }
}
