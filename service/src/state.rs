// service/src/state.rs
use order_core::OrderService;

/// Shared, read-only state handed to every adapter.
#[derive(Clone, Debug)]
pub struct AppState {
  pub order_service: OrderService,
}

impl AppState {
  pub fn new(order_service: OrderService) -> Self {
    Self { order_service }
  }
}
