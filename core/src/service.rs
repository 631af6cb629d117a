// order_core/src/service.rs

//! The protocol-independent entry point every adapter calls into.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::error::DataResult;
use crate::model::Order;
use crate::store::OrderStore;

/// Thin façade over an [`OrderStore`].
///
/// This is the single place where cross-protocol rules (validation, authorization,
/// caching) would be added; today it forwards to the store and passes errors through
/// untouched. Cloning is cheap and shares the store.
#[derive(Clone)]
pub struct OrderService {
  store: Arc<dyn OrderStore>,
}

impl OrderService {
  pub fn new<S: OrderStore>(store: S) -> Self {
    Self { store: Arc::new(store) }
  }

  pub fn from_shared(store: Arc<dyn OrderStore>) -> Self {
    Self { store }
  }

  #[instrument(name = "order_service::list_orders", skip(self), err(Display))]
  pub async fn list_orders(&self) -> DataResult<Vec<Order>> {
    let orders = self.store.list_orders().await?;
    debug!(count = orders.len(), "Listed orders.");
    Ok(orders)
  }
}

impl std::fmt::Debug for OrderService {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("OrderService").finish_non_exhaustive()
  }
}
