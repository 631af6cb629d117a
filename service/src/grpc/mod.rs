// service/src/grpc/mod.rs

//! gRPC adapter.
//!
//! This module provides:
//! - Generated protobuf types (`proto`) for the `order.v1` package
//! - Conversions from the shared order view to the wire messages (`convert`)
//! - The `OrderService` implementation (`service`)

pub mod convert;
pub mod service;

/// Re-exported generated proto types.
pub mod proto {
  tonic::include_proto!("order.v1");
}

/// Encoded descriptor set served by the reflection service.
pub const FILE_DESCRIPTOR_SET: &[u8] = tonic::include_file_descriptor_set!("order_descriptor");

pub use service::OrderGrpcService;

use crate::errors::Result;
use proto::order_service_server::OrderServiceServer;
use tonic::transport::server::Router;
use tonic::transport::Server;

/// Assembles the gRPC router: the order service plus v1 server reflection.
pub fn build_router(service: OrderGrpcService) -> Result<Router> {
  let reflection_service = tonic_reflection::server::Builder::configure()
    .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
    .build_v1()?;

  Ok(
    Server::builder()
      .add_service(OrderServiceServer::new(service))
      .add_service(reflection_service),
  )
}
