// service/src/lib.rs

//! The order service process: one read-only "list orders" operation served over
//! REST, gRPC and GraphQL at the same time.
//!
//! The adapters share a single [`order_core::OrderService`]; the [`supervisor`]
//! wires them up and stops them together.

pub mod config;
pub mod errors;
pub mod graphql;
pub mod grpc;
pub mod logging;
pub mod state;
pub mod supervisor;
pub mod web;

pub use crate::config::AppConfig;
pub use crate::errors::{AppError, Result};
pub use crate::supervisor::{ListenAddrs, RunningAdapters, StoppableAdapter};
