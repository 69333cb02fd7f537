use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use async_trait::async_trait;
use common::ProductId;
use domain::Product;
use tokio::sync::RwLock;

use crate::{ProductRepository, RepositoryError, Result};

/// In-memory product repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<ProductId, Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding `products`.
    ///
    /// Fails on the first duplicate ID.
    pub async fn with_products(products: impl IntoIterator<Item = Product>) -> Result<Self> {
        let repo = Self::new();
        for product in products {
            repo.add(product).await?;
        }
        Ok(repo)
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get_all(&self) -> Result<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products.values().cloned().collect())
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Product> {
        let products = self.products.read().await;
        products
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::ProductNotFound(id))
    }

    async fn add(&self, product: Product) -> Result<()> {
        let mut products = self.products.write().await;
        match products.entry(product.id()) {
            Entry::Occupied(_) => Err(RepositoryError::ProductAlreadyExists(product.id())),
            Entry::Vacant(slot) => {
                slot.insert(product);
                Ok(())
            }
        }
    }

    async fn update(&self, product: Product) -> Result<()> {
        let mut products = self.products.write().await;
        match products.get_mut(&product.id()) {
            Some(stored) => {
                *stored = product;
                Ok(())
            }
            None => Err(RepositoryError::ProductNotFound(product.id())),
        }
    }

    async fn delete(&self, id: ProductId) -> Result<()> {
        let mut products = self.products.write().await;
        products
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::ProductNotFound(id))
    }
}
