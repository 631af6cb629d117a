// service/src/graphql/schema.rs

//! Hand-written resolver table for the GraphQL schema.
//!
//! ```graphql
//! type Query { listOrders: [Order!] }
//! type Order { id: Int!, productName: String!, quantity: Int!, createdAt: String! }
//! ```
//!
//! Each `Order` field is one row of [`ORDER_FIELDS`]: the GraphQL field name, its
//! scalar type, and an accessor on the shared [`OrderView`]. The `Query` root is a
//! table of its own, mapping field names to resolver functions.

use async_graphql::dynamic::{
  Field, FieldFuture, FieldValue, Object, ResolverContext, Schema, SchemaBuilder, SchemaError, TypeRef,
};
use async_graphql::Value;
use order_core::{narrow_i32, OrderService, OrderView};
use tracing::info;

pub type OrderSchema = Schema;

const QUERY_TYPE: &str = "Query";
const ORDER_TYPE: &str = "Order";

type OrderFieldAccessor = fn(&OrderView) -> async_graphql::Result<Value>;

/// `(field name, scalar type, accessor)` for every field of `Order`.
///
/// `Int` is a signed 32-bit scalar, so the integer fields go through the same checked
/// narrowing as the gRPC message.
pub const ORDER_FIELDS: &[(&str, &str, OrderFieldAccessor)] = &[
  ("id", TypeRef::INT, |order| Ok(Value::from(narrow_i32("id", order.id)?))),
  ("productName", TypeRef::STRING, |order| Ok(Value::from(order.product_name.clone()))),
  ("quantity", TypeRef::INT, |order| Ok(Value::from(narrow_i32("quantity", order.quantity)?))),
  ("createdAt", TypeRef::STRING, |order| Ok(Value::from(order.created_at.clone()))),
];

type QueryResolver = for<'a> fn(ResolverContext<'a>) -> FieldFuture<'a>;

/// `(field name, return type builder, resolver)` for every field of `Query`.
const QUERY_FIELDS: &[(&str, fn() -> TypeRef, QueryResolver)] =
  &[("listOrders", || TypeRef::named_nn_list(ORDER_TYPE), resolve_list_orders)];

/// `listOrders` is nullable: a failure is reported against this field, which resolves
/// to `null`, instead of discarding the whole `data` object.
fn resolve_list_orders(ctx: ResolverContext<'_>) -> FieldFuture<'_> {
  FieldFuture::new(async move {
    match load_order_views(&ctx).await {
      Ok(views) => Ok(Some(FieldValue::list(views.into_iter().map(FieldValue::owned_any)))),
      Err(e) => {
        ctx.add_error(ctx.set_error_path(e.into_server_error(ctx.item.pos)));
        Ok(None)
      }
    }
  })
}

async fn load_order_views(ctx: &ResolverContext<'_>) -> async_graphql::Result<Vec<OrderView>> {
  let service = ctx.data::<OrderService>()?;
  let orders = service.list_orders().await?;
  info!("Successfully fetched {} orders.", orders.len());

  let views: Vec<OrderView> = orders.into_iter().map(OrderView::from).collect();
  for view in &views {
    view.int32_fields()?;
  }
  Ok(views)
}

fn order_object() -> Object {
  ORDER_FIELDS
    .iter()
    .fold(Object::new(ORDER_TYPE), |object, &(name, scalar, accessor)| {
      object.field(Field::new(name, TypeRef::named_nn(scalar), move |ctx| {
        FieldFuture::new(async move {
          let order = ctx.parent_value.try_downcast_ref::<OrderView>()?;
          accessor(order).map(Some)
        })
      }))
    })
}

fn query_object() -> Object {
  QUERY_FIELDS
    .iter()
    .fold(Object::new(QUERY_TYPE), |object, &(name, type_ref, resolver)| {
      object.field(Field::new(name, type_ref(), resolver))
    })
}

fn schema_builder(order_service: OrderService) -> SchemaBuilder {
  Schema::build(QUERY_TYPE, None, None)
    .register(order_object())
    .register(query_object())
    .data(order_service)
}

/// Builds the executable schema with the order service installed as context data.
pub fn build_schema(order_service: OrderService) -> Result<OrderSchema, SchemaError> {
  schema_builder(order_service).finish()
}
