use std::time::Duration;

use common::{CustomerId, ProductId};
use thiserror::Error;

/// Errors that can occur when interacting with a repository.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No customer is stored under the ID.
    #[error("Customer not found: {0}")]
    CustomerNotFound(CustomerId),

    /// A customer with the same ID is already stored.
    #[error("Customer already exists: {0}")]
    CustomerAlreadyExists(CustomerId),

    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    #[error("Product already exists: {0}")]
    ProductAlreadyExists(ProductId),

    /// A storage call did not finish within its time budget.
    #[error("Storage operation timed out after {0:?}")]
    Timeout(Duration),

    /// A stored row could not be mapped back into an aggregate.
    #[error("Invalid row: {0}")]
    InvalidRow(String),

    /// A database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl RepositoryError {
    /// Returns true for the not-found variants.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RepositoryError::CustomerNotFound(_) | RepositoryError::ProductNotFound(_)
        )
    }

    /// Returns true for the already-exists variants.
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            RepositoryError::CustomerAlreadyExists(_) | RepositoryError::ProductAlreadyExists(_)
        )
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
