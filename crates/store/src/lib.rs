//! Repositories for the tavern aggregates.
//!
//! Callers depend on the [`CustomerRepository`] and [`ProductRepository`]
//! traits only. Two customer backends are provided (in-memory and SQLite);
//! products are kept in memory.

pub mod error;
pub mod memory;
pub mod repository;
pub mod sqlite;

pub use error::{RepositoryError, Result};
pub use memory::{InMemoryCustomerRepository, InMemoryProductRepository};
pub use repository::{CustomerRepository, ProductRepository};
pub use sqlite::{QUERY_TIMEOUT, SqliteCustomerRepository};
