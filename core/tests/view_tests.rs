// tests/view_tests.rs
mod common;
use chrono::{TimeZone, Utc};
use common::*;
use order_core::{format_timestamp, narrow_i32, parse_timestamp, IntOutOfRange, Order, OrderView};

#[test]
fn test_view_renders_rfc3339_with_zulu_suffix() {
  let view = OrderView::from(widget_order());
  assert_eq!(
    view,
    OrderView {
      id: 1,
      product_name: "Widget".to_string(),
      quantity: 3,
      created_at: "2024-01-15T10:30:00Z".to_string(),
    }
  );
}

#[test]
fn test_view_json_uses_snake_case_fields() {
  let json = serde_json::to_string(&OrderView::from(&widget_order())).unwrap();
  assert_eq!(
    json,
    r#"{"id":1,"product_name":"Widget","quantity":3,"created_at":"2024-01-15T10:30:00Z"}"#
  );
}

#[test]
fn test_timestamp_round_trips() {
  let instants = [
    widget_created_at(),
    Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap(),
    Utc.timestamp_opt(1_700_000_000, 123_456_789).unwrap(),
    Utc.timestamp_opt(1_700_000_000, 500_000_000).unwrap(),
  ];
  for instant in instants {
    let text = format_timestamp(&instant);
    assert_eq!(parse_timestamp(&text).unwrap(), instant, "round trip of {}", text);
  }
}

#[test]
fn test_fractional_seconds_only_when_present() {
  let whole = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
  let fractional = Utc.timestamp_opt(1_700_000_000, 250_000_000).unwrap();
  assert!(!format_timestamp(&whole).contains('.'));
  assert_eq!(format_timestamp(&fractional), "2023-11-14T22:13:20.250Z");
}

#[test]
fn test_parse_accepts_offsets_and_normalises_to_utc() {
  let parsed = parse_timestamp("2024-01-15T12:30:00+02:00").unwrap();
  assert_eq!(parsed, widget_created_at());
  assert!(parse_timestamp("15/01/2024 10:30").is_err());
}

#[test]
fn test_borrowed_and_owned_conversions_agree() {
  let order = Order::new(42, "Cog", 7, widget_created_at());
  assert_eq!(OrderView::from(&order), OrderView::from(order));
}

#[test]
fn test_int32_fields_accept_boundary_values() {
  let mut view = OrderView::from(widget_order());
  view.id = i32::MAX as i64;
  view.quantity = i32::MIN as i64;
  assert_eq!(view.int32_fields(), Ok((i32::MAX, i32::MIN)));
}

#[test]
fn test_int32_fields_report_the_offending_field() {
  let mut view = OrderView::from(widget_order());
  view.id = i32::MAX as i64 + 10;
  let err = view.int32_fields().unwrap_err();
  assert_eq!(err, IntOutOfRange { field: "id", value: 2_147_483_657 });
  assert_eq!(err.to_string(), "order id 2147483657 does not fit in a 32-bit integer");

  view.id = 1;
  view.quantity = -(1_i64 << 40);
  assert_eq!(view.int32_fields().unwrap_err().field, "quantity");
}

#[test]
fn test_narrow_i32_never_wraps() {
  assert_eq!(narrow_i32("id", 42), Ok(42));
  assert!(narrow_i32("id", 1_i64 << 32).is_err());
}
