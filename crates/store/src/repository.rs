use async_trait::async_trait;
use common::{CustomerId, ProductId};
use domain::{Customer, Product};

use crate::Result;

/// Storage contract for customer aggregates.
///
/// Implementations hand out copies: changing a returned customer has no
/// effect until it is passed back through [`update`](Self::update).
/// All implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Loads a customer by ID.
    ///
    /// Fails with `CustomerNotFound` when nothing is stored under `id`.
    async fn get(&self, id: CustomerId) -> Result<Customer>;

    /// Stores a new customer.
    ///
    /// Fails with `CustomerAlreadyExists` if the ID is taken; the stored
    /// value is left untouched in that case.
    async fn add(&self, customer: Customer) -> Result<()>;

    /// Replaces a stored customer.
    ///
    /// Fails with `CustomerNotFound` if the ID is not stored.
    async fn update(&self, customer: Customer) -> Result<()>;
}

/// Storage contract for product aggregates.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Returns every stored product. Order is unspecified.
    async fn get_all(&self) -> Result<Vec<Product>>;

    async fn get_by_id(&self, id: ProductId) -> Result<Product>;

    async fn add(&self, product: Product) -> Result<()>;

    async fn update(&self, product: Product) -> Result<()>;

    /// Removes a product, failing with `ProductNotFound` if it is not stored.
    async fn delete(&self, id: ProductId) -> Result<()>;
}
