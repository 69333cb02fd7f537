use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use async_trait::async_trait;
use common::CustomerId;
use domain::Customer;
use tokio::sync::RwLock;

use crate::{CustomerRepository, RepositoryError, Result};

/// In-memory customer repository.
///
/// Clones share the same map. Lookups take the read lock; `add` and
/// `update` check and write under a single write guard.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCustomerRepository {
    customers: Arc<RwLock<HashMap<CustomerId, Customer>>>,
}

impl InMemoryCustomerRepository {
    /// Creates a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored customers.
    pub async fn customer_count(&self) -> usize {
        self.customers.read().await.len()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn get(&self, id: CustomerId) -> Result<Customer> {
        let customers = self.customers.read().await;
        customers
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::CustomerNotFound(id))
    }

    async fn add(&self, customer: Customer) -> Result<()> {
        let mut customers = self.customers.write().await;
        match customers.entry(customer.id()) {
            Entry::Occupied(_) => Err(RepositoryError::CustomerAlreadyExists(customer.id())),
            Entry::Vacant(slot) => {
                tracing::debug!(customer_id = %customer.id(), "customer added");
                slot.insert(customer);
                Ok(())
            }
        }
    }

    async fn update(&self, customer: Customer) -> Result<()> {
        let mut customers = self.customers.write().await;
        match customers.get_mut(&customer.id()) {
            Some(stored) => {
                *stored = customer;
                Ok(())
            }
            None => Err(RepositoryError::CustomerNotFound(customer.id())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn add_and_get_customer() {
        let repo = InMemoryCustomerRepository::new();
        let customer = Customer::new("Donald").unwrap();
        let id = customer.id();

        repo.add(customer).await.unwrap();

        let stored = repo.get(id).await.unwrap();
        assert_eq!(stored.id(), id);
        assert_eq!(stored.name(), "Donald");
    }

    #[tokio::test]
    async fn get_missing_customer() {
        let repo = InMemoryCustomerRepository::new();
        let id = CustomerId::new();

        let result = repo.get(id).await;
        assert!(matches!(result, Err(RepositoryError::CustomerNotFound(missing)) if missing == id));
    }

    #[tokio::test]
    async fn duplicate_add_keeps_first_value() {
        let repo = InMemoryCustomerRepository::new();
        let original = Customer::new("Donald").unwrap();
        let mut impostor = Customer::new("Daisy").unwrap();
        impostor.set_id(original.id());

        repo.add(original.clone()).await.unwrap();
        let result = repo.add(impostor).await;

        assert!(matches!(result, Err(RepositoryError::CustomerAlreadyExists(_))));
        assert_eq!(repo.get(original.id()).await.unwrap().name(), "Donald");
        assert_eq!(repo.customer_count().await, 1);
    }

    #[tokio::test]
    async fn update_replaces_stored_customer() {
        let repo = InMemoryCustomerRepository::new();
        let mut customer = Customer::new("Donald").unwrap();
        repo.add(customer.clone()).await.unwrap();

        customer.set_name("Donald Duck");
        repo.update(customer.clone()).await.unwrap();

        assert_eq!(repo.get(customer.id()).await.unwrap().name(), "Donald Duck");
    }

    #[tokio::test]
    async fn update_missing_customer_leaves_store_unchanged() {
        let repo = InMemoryCustomerRepository::new();
        let customer = Customer::new("Donald").unwrap();

        let result = repo.update(customer.clone()).await;

        assert!(matches!(result, Err(RepositoryError::CustomerNotFound(_))));
        assert_eq!(repo.customer_count().await, 0);
    }

    #[tokio::test]
    async fn returned_customer_is_a_copy() {
        let repo = InMemoryCustomerRepository::new();
        let customer = Customer::new("Donald").unwrap();
        let id = customer.id();
        repo.add(customer).await.unwrap();

        let mut copy = repo.get(id).await.unwrap();
        copy.set_name("Scrooge");

        assert_eq!(repo.get(id).await.unwrap().name(), "Donald");
    }
}
