//! Domain error types.

use thiserror::Error;

use crate::Money;

/// Validation errors raised by aggregate constructors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A customer needs a person with a non-empty name.
    #[error("A customer has to have a valid person")]
    InvalidPerson,

    /// A product needs both a name and a description.
    #[error("Missing values: a product needs a name and a description")]
    MissingValues,

    /// Prices cannot be negative.
    #[error("Invalid price: {price} (must not be negative)")]
    NegativePrice { price: Money },

    /// A total does not fit in the money representation.
    #[error("Price overflow: total exceeds {max}")]
    PriceOverflow { max: Money },
}

/// Result type for domain operations.
pub type Result<T> = std::result::Result<T, DomainError>;
