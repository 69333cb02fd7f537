//! Composition root for the tavern.
//!
//! Wires a customer repository (SQLite when `DATABASE_URL` is set, memory
//! otherwise), seeds the menu and places orders through the [`Tavern`].

pub mod config;

use domain::{Customer, Money, Product};
use service::{InMemoryBillingService, OrderService, Result, Tavern};
use store::CustomerRepository;

pub use config::Config;

/// The products the tavern sells.
pub fn menu() -> Result<Vec<Product>> {
    Ok(vec![
        Product::new("Beer", "Healthy Beverage", Money::from_cents(199))?,
        Product::new("Peanuts", "Healthy Snack", Money::from_cents(99))?,
        Product::new("Wine", "Healthy Snacks", Money::from_cents(99))?,
    ])
}

/// Builds a tavern serving `products`, with an in-memory billing service.
pub async fn build_tavern(
    config: &Config,
    products: Vec<Product>,
    billing: InMemoryBillingService,
) -> Result<Tavern> {
    let builder = OrderService::builder();
    let builder = match &config.database_url {
        Some(url) => {
            tracing::info!(%url, "using sqlite customer repository");
            builder.with_sqlite_customer_repository(url).await?
        }
        None => {
            tracing::info!("using in-memory customer repository");
            builder.with_memory_customer_repository()
        }
    };
    let order_service = builder
        .with_memory_product_repository(products)
        .await?
        .build()?;

    Tavern::builder()
        .with_order_service(order_service)
        .with_billing_service(billing)
        .build()
}

/// Registers a guest and orders every item on the menu for them.
///
/// Returns the price billed.
pub async fn run(config: &Config) -> Result<Money> {
    let products = menu()?;
    let product_ids: Vec<_> = products.iter().map(Product::id).collect();
    let billing = InMemoryBillingService::new();
    let tavern = build_tavern(config, products, billing.clone()).await?;

    let guest = Customer::new("Donald")?;
    let guest_id = guest.id();
    tavern.order_service().customers().add(guest).await?;

    let price = tavern.order(guest_id, &product_ids).await?;
    tracing::info!(customer_id = %guest_id, billed = %billing.total_billed(guest_id).await, "order complete");
    Ok(price)
}
