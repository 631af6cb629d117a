// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper

use chrono::{TimeZone, Utc};
use once_cell::sync::Lazy;
use order_core::Order;
use order_service::ListenAddrs;
use tracing::Level;

pub fn widget_order() -> Order {
  Order::new(1, "Widget", 3, Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap())
}

pub fn sample_orders() -> Vec<Order> {
  vec![
    widget_order(),
    Order::new(2, "Gadget", 12, Utc.with_ymd_and_hms(2024, 2, 29, 23, 59, 59).unwrap()),
    Order::new(7, "Sprocket", 0, Utc.timestamp_opt(1_700_000_000, 250_000_000).unwrap()),
  ]
}

/// Ephemeral loopback ports for all three listeners.
pub fn loopback_addrs() -> ListenAddrs {
  ListenAddrs {
    rest: "127.0.0.1:0".to_string(),
    grpc: "127.0.0.1:0".to_string(),
    graphql: "127.0.0.1:0".to_string(),
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
