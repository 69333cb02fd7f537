//! Entities owned by the aggregates.

use common::{CustomerId, ProductId};
use serde::{Deserialize, Serialize};

/// A person, the root entity of a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: CustomerId,
    pub name: String,
}

impl Person {
    pub fn new(id: CustomerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl Default for Person {
    /// A person with a nil ID and no name.
    fn default() -> Self {
        Self {
            id: CustomerId::nil(),
            name: String::new(),
        }
    }
}

/// Something a customer can hold and a product is built around.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ProductId,
    pub name: String,
    pub description: String,
}

impl Item {
    /// Creates an item with a fresh ID.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: ProductId::new(),
            name: name.into(),
            description: description.into(),
        }
    }
}
