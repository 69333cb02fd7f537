//! Service error types.

use domain::DomainError;
use store::RepositoryError;
use thiserror::Error;

/// Errors that can occur while assembling or running a service.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Domain validation error.
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Repository error.
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// `build()` was called before a customer repository was configured.
    #[error("Order service has no customer repository")]
    MissingCustomerRepository,

    /// `build()` was called before a product repository was configured.
    #[error("Order service has no product repository")]
    MissingProductRepository,

    #[error("Tavern has no order service")]
    MissingOrderService,

    /// Billing service error.
    #[error("Billing service error: {0}")]
    Billing(String),
}

impl ServiceError {
    /// Returns true when a customer or product lookup found nothing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::Repository(e) if e.is_not_found())
    }
}

/// Convenience type alias for service results.
pub type Result<T> = std::result::Result<T, ServiceError>;
