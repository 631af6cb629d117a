// service/src/web/routes.rs

use actix_web::web;

use crate::web::handlers::order_handlers;

// Liveness only; it deliberately does not query the database.
async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// Called by the supervisor to configure services for the REST App.
pub fn configure_rest_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .route("/health", web::get().to(health_check_handler))
    // Any other method on /order falls through to the resource default: 405.
    .service(web::resource("/order").route(web::get().to(order_handlers::list_orders_handler)));
}
