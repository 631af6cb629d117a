// order_core/src/view.rs

//! The wire-facing rendering of an [`Order`], shared by every protocol adapter.
//!
//! Each adapter starts from an `OrderView` so that the timestamp convention and the
//! field set are defined exactly once.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::model::Order;

/// An order with `created_at` already rendered as RFC 3339 text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderView {
  pub id: i64,
  pub product_name: String,
  pub quantity: i64,
  pub created_at: String,
}

impl OrderView {
  /// `(id, quantity)` narrowed to the 32-bit integers carried by gRPC and GraphQL.
  pub fn int32_fields(&self) -> Result<(i32, i32), IntOutOfRange> {
    Ok((narrow_i32("id", self.id)?, narrow_i32("quantity", self.quantity)?))
  }
}

/// A 64-bit order field that a 32-bit wire format cannot represent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("order {field} {value} does not fit in a 32-bit integer")]
pub struct IntOutOfRange {
  pub field: &'static str,
  pub value: i64,
}

/// Checked narrowing; never wraps into a different number.
pub fn narrow_i32(field: &'static str, value: i64) -> Result<i32, IntOutOfRange> {
  i32::try_from(value).map_err(|_| IntOutOfRange { field, value })
}

impl From<Order> for OrderView {
  fn from(order: Order) -> Self {
    Self {
      id: order.id,
      created_at: format_timestamp(&order.created_at),
      product_name: order.product_name,
      quantity: order.quantity,
    }
  }
}

impl From<&Order> for OrderView {
  fn from(order: &Order) -> Self {
    Self {
      id: order.id,
      product_name: order.product_name.clone(),
      quantity: order.quantity,
      created_at: format_timestamp(&order.created_at),
    }
  }
}

/// Formats a UTC instant as RFC 3339 with a `Z` suffix.
///
/// Fractional seconds are only emitted when non-zero, so `2024-01-15T10:30:00Z` stays
/// short while sub-second precision still survives a round trip.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
  ts.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Parses text produced by [`format_timestamp`] (or any RFC 3339 timestamp) back into
/// a UTC instant.
pub fn parse_timestamp(text: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
  DateTime::parse_from_rfc3339(text).map(|ts| ts.with_timezone(&Utc))
}
