// service/src/grpc/service.rs

use order_core::{OrderService, OrderView};
use tonic::{Request, Response, Status};
use tracing::{info, instrument};

use super::proto::order_service_server::OrderService as OrderServiceRpc;
use super::proto::{ListOrdersRequest, ListOrdersResponse, Order};

/// `order.v1.OrderService` backed by the shared [`OrderService`].
#[derive(Debug, Clone)]
pub struct OrderGrpcService {
  order_service: OrderService,
}

impl OrderGrpcService {
  pub fn new(order_service: OrderService) -> Self {
    Self { order_service }
  }
}

#[tonic::async_trait]
impl OrderServiceRpc for OrderGrpcService {
  #[instrument(name = "grpc::list_orders", skip(self, _request))]
  async fn list_orders(&self, _request: Request<ListOrdersRequest>) -> Result<Response<ListOrdersResponse>, Status> {
    let orders = self
      .order_service
      .list_orders()
      .await
      .map_err(|e| Status::internal(e.to_string()))?;
    info!("Successfully fetched {} orders.", orders.len());

    let orders = orders
      .into_iter()
      .map(|order| Order::try_from(OrderView::from(order)))
      .collect::<Result<Vec<_>, _>>()?;

    Ok(Response::new(ListOrdersResponse { orders }))
  }
}
