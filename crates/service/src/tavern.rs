//! The tavern: entry point for placing orders.

use std::sync::Arc;

use common::{CustomerId, ProductId};
use domain::Money;

use crate::{BillingService, OrderService, Result, ServiceError};

/// Places orders and forwards their price to billing.
///
/// Billing is optional. Without a billing service the order still
/// succeeds and the unbilled amount is logged.
pub struct Tavern {
    order_service: OrderService,
    billing: Option<Arc<dyn BillingService>>,
}

impl Tavern {
    pub fn builder() -> TavernBuilder {
        TavernBuilder::default()
    }

    pub fn order_service(&self) -> &OrderService {
        &self.order_service
    }

    /// Places an order for a customer and returns the price charged.
    #[tracing::instrument(skip_all, fields(%customer_id))]
    pub async fn order(&self, customer_id: CustomerId, product_ids: &[ProductId]) -> Result<Money> {
        let price = self
            .order_service
            .create_order(customer_id, product_ids)
            .await?;

        match &self.billing {
            Some(billing) => {
                billing.bill(customer_id, price).await?;
                tracing::info!(%price, "billed the customer");
            }
            None => tracing::warn!(%price, "billing not connected, customer was not billed"),
        }

        Ok(price)
    }
}

/// Assembles a [`Tavern`].
#[derive(Default)]
pub struct TavernBuilder {
    order_service: Option<OrderService>,
    billing: Option<Arc<dyn BillingService>>,
}

impl TavernBuilder {
    pub fn with_order_service(mut self, order_service: OrderService) -> Self {
        self.order_service = Some(order_service);
        self
    }

    pub fn with_billing_service(mut self, billing: impl BillingService + 'static) -> Self {
        self.billing = Some(Arc::new(billing));
        self
    }

    pub fn build(self) -> Result<Tavern> {
        Ok(Tavern {
            order_service: self.order_service.ok_or(ServiceError::MissingOrderService)?,
            billing: self.billing,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_requires_order_service() {
        let result = Tavern::builder().build();
        assert!(matches!(result, Err(ServiceError::MissingOrderService)));
    }
}
