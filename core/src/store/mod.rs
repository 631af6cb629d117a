// order_core/src/store/mod.rs

//! The storage seam behind the order service.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::error::DataResult;
use crate::model::Order;

pub use memory::InMemoryOrderStore;
pub use postgres::PgOrderStore;

/// Read access to the persisted orders.
///
/// Implementations must be safe to share between every protocol adapter at once.
/// Cancellation is cooperative: dropping the returned future abandons the query.
#[async_trait]
pub trait OrderStore: Send + Sync + 'static {
  /// Returns every stored order, in whatever order the backend yields them.
  async fn list_orders(&self) -> DataResult<Vec<Order>>;
}
