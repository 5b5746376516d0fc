//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// stock shortfalls). A market refusing a sale is *not* an error; see
/// `Market::sell`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed price string).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A checked sale asked for more than the vendor holds.
    #[error("insufficient stock for {item}: requested {requested}, available {available}")]
    InsufficientStock {
        item: String,
        requested: i64,
        available: i64,
    },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn insufficient_stock(item: impl Into<String>, requested: i64, available: i64) -> Self {
        Self::InsufficientStock {
            item: item.into(),
            requested,
            available,
        }
    }
}
