//! In-memory repositories backed by a `HashMap` behind an async `RwLock`.

mod customer;
mod product;

pub use customer::InMemoryCustomerRepository;
pub use product::InMemoryProductRepository;
