//! Order service: validates an order against the repositories and prices it.

use std::sync::Arc;

use common::{CustomerId, ProductId};
use domain::{DomainError, Money, Product};
use store::{
    CustomerRepository, InMemoryCustomerRepository, InMemoryProductRepository, ProductRepository,
    SqliteCustomerRepository,
};

use crate::{Result, ServiceError};

/// Prices orders for known customers.
///
/// Built with [`OrderService::builder`]. The service never writes to the
/// repositories; an order is only a computed total.
#[derive(Clone)]
pub struct OrderService {
    customers: Arc<dyn CustomerRepository>,
    products: Arc<dyn ProductRepository>,
}

impl OrderService {
    pub fn builder() -> OrderServiceBuilder {
        OrderServiceBuilder::default()
    }

    /// The customer repository the service reads from.
    pub fn customers(&self) -> &Arc<dyn CustomerRepository> {
        &self.customers
    }

    /// The product repository the service reads from.
    pub fn products(&self) -> &Arc<dyn ProductRepository> {
        &self.products
    }

    /// Creates an order and returns its total price.
    ///
    /// The customer must exist and so must every product. The first failed
    /// lookup aborts the order and its error is returned as is.
    #[tracing::instrument(skip_all, fields(%customer_id, product_count = product_ids.len()))]
    pub async fn create_order(
        &self,
        customer_id: CustomerId,
        product_ids: &[ProductId],
    ) -> Result<Money> {
        match self.price_order(customer_id, product_ids).await {
            Ok(total) => {
                metrics::counter!("orders_created_total").increment(1);
                Ok(total)
            }
            Err(e) => {
                metrics::counter!("orders_failed_total").increment(1);
                tracing::debug!(error = %e, "order rejected");
                Err(e)
            }
        }
    }

    async fn price_order(&self, customer_id: CustomerId, product_ids: &[ProductId]) -> Result<Money> {
        let customer = self.customers.get(customer_id).await?;

        let mut products = Vec::with_capacity(product_ids.len());
        for id in product_ids {
            products.push(self.products.get_by_id(*id).await?);
        }

        let total = products
            .iter()
            .map(Product::price)
            .try_fold(Money::zero(), |acc, price| acc.checked_add(price))
            .ok_or(DomainError::PriceOverflow {
                max: Money::from_cents(i64::MAX),
            })?;

        tracing::info!(
            customer_id = %customer.id(),
            products = products.len(),
            %total,
            "customer has ordered products"
        );
        Ok(total)
    }
}

/// Assembles an [`OrderService`] step by step.
///
/// Steps run in the order they are chained. Fallible steps return a
/// `Result`, so `?` stops the assembly at the first failure.
#[derive(Default)]
pub struct OrderServiceBuilder {
    customers: Option<Arc<dyn CustomerRepository>>,
    products: Option<Arc<dyn ProductRepository>>,
}

impl OrderServiceBuilder {
    /// Uses the given customer repository.
    pub fn with_customer_repository(mut self, repo: impl CustomerRepository + 'static) -> Self {
        self.customers = Some(Arc::new(repo));
        self
    }

    /// Uses an existing shared customer repository.
    pub fn with_shared_customer_repository(mut self, repo: Arc<dyn CustomerRepository>) -> Self {
        self.customers = Some(repo);
        self
    }

    /// Uses a fresh in-memory customer repository.
    pub fn with_memory_customer_repository(self) -> Self {
        self.with_customer_repository(InMemoryCustomerRepository::new())
    }

    /// Opens a SQLite customer repository at `url`.
    pub async fn with_sqlite_customer_repository(self, url: &str) -> Result<Self> {
        let repo = SqliteCustomerRepository::connect(url).await?;
        Ok(self.with_customer_repository(repo))
    }

    /// Uses the given product repository.
    pub fn with_product_repository(mut self, repo: impl ProductRepository + 'static) -> Self {
        self.products = Some(Arc::new(repo));
        self
    }

    /// Uses a fresh in-memory product repository holding `products`.
    ///
    /// Fails if two products share an ID.
    pub async fn with_memory_product_repository(
        self,
        products: impl IntoIterator<Item = Product>,
    ) -> Result<Self> {
        let repo = InMemoryProductRepository::with_products(products).await?;
        Ok(self.with_product_repository(repo))
    }

    pub fn build(self) -> Result<OrderService> {
        Ok(OrderService {
            customers: self
                .customers
                .ok_or(ServiceError::MissingCustomerRepository)?,
            products: self.products.ok_or(ServiceError::MissingProductRepository)?,
        })
    }
}
