// order_core/src/store/postgres.rs

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, error, instrument};

use super::OrderStore;
use crate::error::{DataAccessError, DataResult};
use crate::model::Order;

// Integer columns are widened and `created_at` is normalised to timestamptz so that
// both SERIAL/INT and TIMESTAMP column definitions decode into the domain types.
// sqlx pins the session time zone to UTC, so naive timestamps are read as UTC.
const LIST_ORDERS_SQL: &str = "SELECT id::int8 AS id, product_name, quantity::int8 AS quantity, \
   created_at::timestamptz AS created_at FROM orders";

/// `OrderStore` backed by a PostgreSQL connection pool.
#[derive(Debug, Clone)]
pub struct PgOrderStore {
  pool: PgPool,
}

impl PgOrderStore {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }

  /// Round-trips a trivial statement to prove the database is reachable.
  #[instrument(name = "pg_order_store::ping", skip(self), err(Display))]
  pub async fn ping(&self) -> DataResult<()> {
    sqlx::query("SELECT 1").execute(&self.pool).await?;
    Ok(())
  }
}

#[async_trait]
impl OrderStore for PgOrderStore {
  #[instrument(name = "pg_order_store::list_orders", skip(self))]
  async fn list_orders(&self) -> DataResult<Vec<Order>> {
    // fetch_all drains the cursor and hands the connection back to the pool on
    // every path, including when this future is dropped mid-query.
    let orders: Vec<Order> = sqlx::query_as(LIST_ORDERS_SQL)
      .fetch_all(&self.pool)
      .await
      .map_err(|e| {
        error!(error = %e, "Failed to fetch orders from database.");
        DataAccessError::from(e)
      })?;

    debug!(count = orders.len(), "Fetched orders.");
    Ok(orders)
  }
}
