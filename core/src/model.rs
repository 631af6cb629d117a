// order_core/src/model.rs

//! Domain records read from the `orders` table.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// An order as stored in the database.
///
/// Records are never mutated by this system; they are written by some external
/// producer and only ever read here.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Order {
  pub id: i64,
  pub product_name: String,
  pub quantity: i64,
  pub created_at: DateTime<Utc>,
}

impl Order {
  pub fn new(id: i64, product_name: impl Into<String>, quantity: i64, created_at: DateTime<Utc>) -> Self {
    Self {
      id,
      product_name: product_name.into(),
      quantity,
      created_at,
    }
  }
}
