// service/src/grpc/convert.rs

//! Mapping from the shared order view onto the `order.v1` wire messages.
//!
//! The domain carries 64-bit integers while the wire message uses `int32`. The
//! narrowing is checked by [`OrderView::int32_fields`]: a value that does not fit is
//! reported as `OUT_OF_RANGE` instead of being truncated into a different number.

use order_core::OrderView;
use tonic::Status;

use super::proto;

impl TryFrom<OrderView> for proto::Order {
  type Error = Status;

  fn try_from(view: OrderView) -> Result<Self, Self::Error> {
    let (id, quantity) = view.int32_fields().map_err(|e| Status::out_of_range(e.to_string()))?;
    Ok(Self {
      id,
      product_name: view.product_name,
      quantity,
      created_at: view.created_at,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tonic::Code;

  fn view(id: i64, quantity: i64) -> OrderView {
    OrderView {
      id,
      product_name: "Widget".to_string(),
      quantity,
      created_at: "2024-01-15T10:30:00Z".to_string(),
    }
  }

  #[test]
  fn copies_fields_when_in_range() {
    let order = proto::Order::try_from(view(1, 3)).unwrap();
    assert_eq!(
      order,
      proto::Order {
        id: 1,
        product_name: "Widget".to_string(),
        quantity: 3,
        created_at: "2024-01-15T10:30:00Z".to_string(),
      }
    );
  }

  #[test]
  fn boundary_values_survive() {
    let order = proto::Order::try_from(view(i32::MAX as i64, i32::MIN as i64)).unwrap();
    assert_eq!(order.id, i32::MAX);
    assert_eq!(order.quantity, i32::MIN);
  }

  #[test]
  fn out_of_range_id_is_reported_not_truncated() {
    let status = proto::Order::try_from(view(i32::MAX as i64 + 1, 3)).unwrap_err();
    assert_eq!(status.code(), Code::OutOfRange);
    assert!(status.message().contains("id"));
  }

  #[test]
  fn out_of_range_quantity_is_reported() {
    let status = proto::Order::try_from(view(1, -(1_i64 << 40))).unwrap_err();
    assert_eq!(status.code(), Code::OutOfRange);
    assert!(status.message().contains("quantity"));
  }
}
