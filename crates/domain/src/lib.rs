//! Domain layer for the tavern.
//!
//! This crate provides the building blocks the repositories store and the
//! order service prices:
//! - `Person` and `Item` entities
//! - `Money` and `Transaction` value objects
//! - `Customer` and `Product` aggregates with validating constructors

pub mod customer;
pub mod entity;
pub mod error;
pub mod product;
pub mod value_objects;

pub use common::{CustomerId, ProductId};
pub use customer::Customer;
pub use entity::{Item, Person};
pub use error::{DomainError, Result};
pub use product::Product;
pub use value_objects::{Money, Transaction};
