//! Billing service trait and in-memory implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use common::CustomerId;
use domain::Money;
use tokio::sync::RwLock;

use crate::{Result, ServiceError};

/// Charges customers for their orders.
#[async_trait]
pub trait BillingService: Send + Sync {
    /// Bills `amount` to the customer.
    async fn bill(&self, customer_id: CustomerId, amount: Money) -> Result<()>;
}

#[derive(Debug, Default)]
struct InMemoryBillingState {
    charges: HashMap<CustomerId, Vec<Money>>,
    fail_on_bill: bool,
}

/// In-memory billing service that records every charge.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBillingService {
    state: Arc<RwLock<InMemoryBillingState>>,
}

impl InMemoryBillingService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the service to decline every following bill.
    pub async fn set_fail_on_bill(&self, fail: bool) {
        self.state.write().await.fail_on_bill = fail;
    }

    /// Returns the number of charges recorded across all customers.
    pub async fn charge_count(&self) -> usize {
        self.state.read().await.charges.values().map(Vec::len).sum()
    }

    /// Returns the sum of everything billed to a customer.
    pub async fn total_billed(&self, customer_id: CustomerId) -> Money {
        self.state
            .read()
            .await
            .charges
            .get(&customer_id)
            .map(|charges| charges.iter().copied().sum::<Money>())
            .unwrap_or_default()
    }
}

#[async_trait]
impl BillingService for InMemoryBillingService {
    async fn bill(&self, customer_id: CustomerId, amount: Money) -> Result<()> {
        let mut state = self.state.write().await;

        if state.fail_on_bill {
            return Err(ServiceError::Billing("Payment declined".to_string()));
        }

        state.charges.entry(customer_id).or_default().push(amount);
        Ok(())
    }
}
