// service/src/graphql/mod.rs

//! GraphQL adapter: the GraphiQL explorer at `/` and the query endpoint at `/query`.

pub mod schema;

use actix_web::{web, HttpResponse};
use async_graphql::http::GraphiQLSource;
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};
use tracing::instrument;

pub use schema::{build_schema, OrderSchema};

pub const QUERY_PATH: &str = "/query";

#[instrument(name = "graphql::query", skip_all)]
async fn query_handler(schema: web::Data<OrderSchema>, request: GraphQLRequest) -> GraphQLResponse {
  schema.execute(request.into_inner()).await.into()
}

async fn explorer_handler() -> HttpResponse {
  HttpResponse::Ok()
    .content_type("text/html; charset=utf-8")
    .body(GraphiQLSource::build().endpoint(QUERY_PATH).finish())
}

// Called by the supervisor to configure services for the GraphQL App.
// The schema itself is registered as app data by the caller.
pub fn configure_graphql_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .service(web::resource("/").route(web::get().to(explorer_handler)))
    .service(
      web::resource(QUERY_PATH)
        .route(web::post().to(query_handler))
        .route(web::get().to(query_handler)),
    );
}
