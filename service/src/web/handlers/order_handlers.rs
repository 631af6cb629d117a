// service/src/web/handlers/order_handlers.rs

use actix_web::{web, HttpResponse};
use order_core::OrderView;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;

/// `GET /order`: every stored order as a bare JSON array.
#[instrument(name = "handler::list_orders", skip(app_state))]
pub async fn list_orders_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let orders = app_state.order_service.list_orders().await?;
  info!("Successfully fetched {} orders.", orders.len());

  let body: Vec<OrderView> = orders.into_iter().map(OrderView::from).collect();
  Ok(HttpResponse::Ok().json(body))
}
