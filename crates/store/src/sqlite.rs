use std::future::Future;
use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use common::CustomerId;
use domain::Customer;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;

use crate::{CustomerRepository, RepositoryError, Result};

/// Upper bound for a single storage call.
pub const QUERY_TIMEOUT: Duration = Duration::from_secs(10);

const SCHEMA: &str = include_str!("../../../migrations/001_create_customers_table.sql");

/// Storage shape of a customer.
///
/// Kept separate from the aggregate so the table layout can change without
/// touching the domain. Only identity and name are persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
struct CustomerRow {
    id: String,
    name: String,
}

impl CustomerRow {
    fn from_customer(customer: &Customer) -> Self {
        Self {
            id: customer.id().to_string(),
            name: customer.name().to_string(),
        }
    }

    fn from_row(row: &SqliteRow) -> Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
        })
    }

    fn into_customer(self) -> Result<Customer> {
        let id = CustomerId::from_str(&self.id)
            .map_err(|e| RepositoryError::InvalidRow(format!("customer id {:?}: {e}", self.id)))?;

        let mut customer = Customer::default();
        customer.set_id(id);
        customer.set_name(self.name);
        Ok(customer)
    }
}

/// SQLite-backed customer repository.
///
/// Owns its connection pool for its whole lifetime. Every call is bounded
/// by [`QUERY_TIMEOUT`].
#[derive(Debug, Clone)]
pub struct SqliteCustomerRepository {
    pool: SqlitePool,
}

impl SqliteCustomerRepository {
    /// Wraps an existing pool. The schema is not touched; call
    /// [`init_schema`](Self::init_schema) if the table may be missing.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens the database at `url` and creates the customers table if needed.
    ///
    /// The database file is created when it does not exist. In-memory URLs
    /// (`sqlite::memory:` or `mode=memory`) get a single long-lived
    /// connection so every call sees the same data.
    /// If schema creation fails the pool is closed before returning.
    #[tracing::instrument]
    pub async fn connect(url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        let pool_options = if is_in_memory(url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };

        let pool = bounded(pool_options.connect_with(options)).await?;
        let repo = Self::new(pool);

        if let Err(e) = repo.init_schema().await {
            repo.pool.close().await;
            return Err(e);
        }

        tracing::debug!("sqlite customer repository ready");
        Ok(repo)
    }

    /// Creates the customers table if it does not exist. Idempotent.
    pub async fn init_schema(&self) -> Result<()> {
        bounded(sqlx::raw_sql(SCHEMA).execute(&self.pool)).await?;
        Ok(())
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Closes every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl CustomerRepository for SqliteCustomerRepository {
    async fn get(&self, id: CustomerId) -> Result<Customer> {
        let row = bounded(async {
            sqlx::query("SELECT id, name FROM customers WHERE id = ?1")
                .bind(id.to_string())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| match e {
                    sqlx::Error::RowNotFound => RepositoryError::CustomerNotFound(id),
                    e => RepositoryError::Database(e),
                })
        })
        .await?;

        CustomerRow::from_row(&row)?.into_customer()
    }

    async fn add(&self, customer: Customer) -> Result<()> {
        let id = customer.id();
        let row = CustomerRow::from_customer(&customer);

        bounded(async {
            sqlx::query("INSERT INTO customers (id, name) VALUES (?1, ?2)")
                .bind(&row.id)
                .bind(&row.name)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    // Primary key collision
                    if let sqlx::Error::Database(ref db_err) = e
                        && db_err.is_unique_violation()
                    {
                        return RepositoryError::CustomerAlreadyExists(id);
                    }
                    RepositoryError::Database(e)
                })
        })
        .await?;

        tracing::debug!(customer_id = %id, "customer inserted");
        Ok(())
    }

    async fn update(&self, customer: Customer) -> Result<()> {
        let id = customer.id();
        let row = CustomerRow::from_customer(&customer);

        let result = bounded(
            sqlx::query("UPDATE customers SET name = ?1 WHERE id = ?2")
                .bind(&row.name)
                .bind(&row.id)
                .execute(&self.pool),
        )
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::CustomerNotFound(id));
        }
        Ok(())
    }
}

/// True for URLs whose database lives only inside the connection.
fn is_in_memory(url: &str) -> bool {
    let query = url.split_once('?').map(|(_, q)| q).unwrap_or_default();
    url.contains(":memory:") || query.split('&').any(|pair| pair == "mode=memory")
}

/// Runs a storage call under [`QUERY_TIMEOUT`].
async fn bounded<T, E>(operation: impl Future<Output = std::result::Result<T, E>>) -> Result<T>
where
    RepositoryError: From<E>,
{
    match tokio::time::timeout(QUERY_TIMEOUT, operation).await {
        Ok(result) => result.map_err(RepositoryError::from),
        Err(_) => Err(RepositoryError::Timeout(QUERY_TIMEOUT)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_repo() -> SqliteCustomerRepository {
        SqliteCustomerRepository::connect("sqlite::memory:")
            .await
            .unwrap()
    }

    #[test]
    fn row_round_trips_identity_and_name() {
        let customer = Customer::new("Donald").unwrap();
        let row = CustomerRow::from_customer(&customer);

        let restored = row.into_customer().unwrap();
        assert_eq!(restored.id(), customer.id());
        assert_eq!(restored.name(), "Donald");
    }

    #[test]
    fn row_with_bad_id_is_rejected() {
        let row = CustomerRow {
            id: "42".to_string(),
            name: "Donald".to_string(),
        };
        assert!(matches!(
            row.into_customer(),
            Err(RepositoryError::InvalidRow(_))
        ));
    }

    #[test]
    fn in_memory_urls_are_recognized() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite:file:tavern?mode=memory"));
        assert!(is_in_memory("sqlite:file:tavern?cache=shared&mode=memory"));
        assert!(!is_in_memory("sqlite:///tmp/tavern.db"));
        assert!(!is_in_memory("sqlite:///tmp/tavern.db?mode=rwc"));
    }

    #[tokio::test(start_paused = true)]
    async fn stalled_call_times_out() {
        let result = bounded(std::future::pending::<std::result::Result<(), sqlx::Error>>()).await;
        assert!(matches!(result, Err(RepositoryError::Timeout(limit)) if limit == QUERY_TIMEOUT));
    }

    #[tokio::test]
    async fn mode_memory_url_shares_one_database() {
        let repo = SqliteCustomerRepository::connect("sqlite:file:tavern-shared?mode=memory")
            .await
            .unwrap();
        let customer = Customer::new("Donald").unwrap();

        repo.add(customer.clone()).await.unwrap();

        assert_eq!(repo.get(customer.id()).await.unwrap().name(), "Donald");
    }

    #[tokio::test]
    async fn add_and_get_customer() {
        let repo = memory_repo().await;
        let customer = Customer::new("Donald").unwrap();

        repo.add(customer.clone()).await.unwrap();

        let stored = repo.get(customer.id()).await.unwrap();
        assert_eq!(stored.id(), customer.id());
        assert_eq!(stored.name(), "Donald");
    }

    #[tokio::test]
    async fn get_missing_customer() {
        let repo = memory_repo().await;
        let id = CustomerId::new();

        let result = repo.get(id).await;
        assert!(matches!(result, Err(RepositoryError::CustomerNotFound(missing)) if missing == id));
    }

    #[tokio::test]
    async fn duplicate_insert_does_not_overwrite() {
        let repo = memory_repo().await;
        let original = Customer::new("Donald").unwrap();
        let mut impostor = Customer::new("Daisy").unwrap();
        impostor.set_id(original.id());

        repo.add(original.clone()).await.unwrap();
        let result = repo.add(impostor).await;

        assert!(matches!(result, Err(RepositoryError::CustomerAlreadyExists(_))));
        assert_eq!(repo.get(original.id()).await.unwrap().name(), "Donald");
    }

    #[tokio::test]
    async fn update_changes_name() {
        let repo = memory_repo().await;
        let mut customer = Customer::new("Donald").unwrap();
        repo.add(customer.clone()).await.unwrap();

        customer.set_name("Donald Duck");
        repo.update(customer.clone()).await.unwrap();

        assert_eq!(repo.get(customer.id()).await.unwrap().name(), "Donald Duck");
    }

    #[tokio::test]
    async fn update_missing_customer() {
        let repo = memory_repo().await;
        let customer = Customer::new("Donald").unwrap();

        let result = repo.update(customer.clone()).await;

        assert!(matches!(result, Err(RepositoryError::CustomerNotFound(_))));
        assert!(repo.get(customer.id()).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn init_schema_is_idempotent() {
        let repo = memory_repo().await;
        let customer = Customer::new("Donald").unwrap();
        repo.add(customer.clone()).await.unwrap();

        repo.init_schema().await.unwrap();
        repo.init_schema().await.unwrap();

        assert_eq!(repo.get(customer.id()).await.unwrap().name(), "Donald");
    }
}
