// order_core/src/store/memory.rs

//! An `OrderStore` held entirely in memory.
//!
//! Used to exercise the service and the protocol adapters without a database. The
//! store can be told to fail, which simulates a dropped connection, and to delay
//! every call, which keeps a request in flight long enough to observe shutdown.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::RwLock;

use super::OrderStore;
use crate::error::{DataAccessError, DataResult};
use crate::model::Order;

#[derive(Debug, Default)]
struct State {
  orders: Vec<Order>,
  failing: bool,
  delay: Option<Duration>,
}

/// Cloning shares the underlying state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderStore {
  state: Arc<RwLock<State>>,
}

impl InMemoryOrderStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_orders(orders: impl IntoIterator<Item = Order>) -> Self {
    let store = Self::new();
    store.state.write().orders = orders.into_iter().collect();
    store
  }

  pub fn insert(&self, order: Order) {
    self.state.write().orders.push(order);
  }

  /// While set, every call fails the way a closed connection pool does.
  pub fn set_failing(&self, failing: bool) {
    self.state.write().failing = failing;
  }

  /// Sleeps for `delay` before answering each call.
  pub fn set_delay(&self, delay: Option<Duration>) {
    self.state.write().delay = delay;
  }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
  async fn list_orders(&self) -> DataResult<Vec<Order>> {
    let delay = self.state.read().delay;
    if let Some(delay) = delay {
      tokio::time::sleep(delay).await;
    }

    let state = self.state.read();
    if state.failing {
      return Err(DataAccessError::from(sqlx::Error::PoolClosed));
    }
    Ok(state.orders.clone())
  }
}
