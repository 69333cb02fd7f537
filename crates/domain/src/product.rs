//! Product aggregate.

use common::ProductId;
use serde::{Deserialize, Serialize};

use crate::{DomainError, Item, Money, Result};

/// Something the tavern sells.
///
/// The `Item` is the root entity and carries the ID, name and description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    item: Item,
    price: Money,
    quantity: u32,
}

impl Product {
    /// Creates a product with a fresh ID and no stock.
    ///
    /// Name and description must be non-empty and the price must not be
    /// negative.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
    ) -> Result<Self> {
        let name = name.into();
        let description = description.into();

        if name.trim().is_empty() || description.trim().is_empty() {
            return Err(DomainError::MissingValues);
        }
        if price.is_negative() {
            return Err(DomainError::NegativePrice { price });
        }

        Ok(Self {
            item: Item::new(name, description),
            price,
            quantity: 0,
        })
    }

    pub fn id(&self) -> ProductId {
        self.item.id
    }

    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn name(&self) -> &str {
        &self.item.name
    }

    pub fn description(&self) -> &str {
        &self.item.description
    }

    pub fn price(&self) -> Money {
        self.price
    }

    /// Units in stock.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn set_price(&mut self, price: Money) -> Result<()> {
        if price.is_negative() {
            return Err(DomainError::NegativePrice { price });
        }
        self.price = price;
        Ok(())
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }
}
