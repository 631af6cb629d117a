// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper

use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use order_core::Order;
use tracing::Level;

// --- Common Fixtures ---
pub fn widget_created_at() -> DateTime<Utc> {
  Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
}

pub fn widget_order() -> Order {
  Order::new(1, "Widget", 3, widget_created_at())
}

pub fn sample_orders() -> Vec<Order> {
  vec![
    widget_order(),
    Order::new(2, "Gadget", 12, Utc.with_ymd_and_hms(2024, 2, 29, 23, 59, 59).unwrap()),
    Order::new(3, "Sprocket", 0, Utc.with_ymd_and_hms(1999, 12, 31, 0, 0, 0).unwrap()),
  ]
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
