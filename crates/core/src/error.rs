//! Domain error model.

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// lookups, conflicts, funds). Transport concerns belong to the API crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. negative amount, blank name).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. blank customer identifier).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// No customer is registered under the requested identifier.
    #[error("not found")]
    NotFound,

    /// A conflict occurred (e.g. identifier already registered).
    #[error("conflict: {0}")]
    Conflict(String),

    /// A debit exceeded the current balance.
    #[error("insufficient funds (requested: {requested}, available: {available})")]
    InsufficientFunds { requested: Decimal, available: Decimal },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn insufficient_funds(requested: Decimal, available: Decimal) -> Self {
        Self::InsufficientFunds {
            requested,
            available,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_funds_message_carries_both_amounts() {
        let err = DomainError::insufficient_funds(Decimal::new(150, 0), Decimal::new(100, 0));
        assert_eq!(
            err.to_string(),
            "insufficient funds (requested: 150, available: 100)"
        );
    }

    #[test]
    fn constructors_wrap_messages() {
        assert_eq!(
            DomainError::conflict("identifier 111 already registered"),
            DomainError::Conflict("identifier 111 already registered".to_string())
        );
        assert_eq!(DomainError::not_found().to_string(), "not found");
    }
}
