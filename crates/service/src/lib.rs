//! Business flows built on top of the repositories.
//!
//! [`OrderService`] prices an order for a known customer from products in
//! the product repository. [`Tavern`] is the front door: it places the
//! order and hands the price to a [`BillingService`] when one is connected.

pub mod billing;
pub mod error;
pub mod order;
pub mod tavern;

pub use billing::{BillingService, InMemoryBillingService};
pub use error::{Result, ServiceError};
pub use order::{OrderService, OrderServiceBuilder};
pub use tavern::{Tavern, TavernBuilder};
