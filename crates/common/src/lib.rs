//! Identifier types shared by the domain, storage and service layers.

mod types;

pub use types::{CustomerId, ProductId};
