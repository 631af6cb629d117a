// order_core/src/lib.rs

//! Order domain shared by every protocol adapter of the order service.
//!
//! The crate is layered leaf-first:
//!  - [`model`]: the `Order` domain record.
//!  - [`store`]: the `OrderStore` seam, with PostgreSQL and in-memory backends.
//!  - [`service`]: `OrderService`, the one operation every adapter calls.
//!  - [`view`]: the single domain-to-wire mapping, including timestamp formatting.

pub mod error;
pub mod model;
pub mod service;
pub mod store;
pub mod view;

// --- Re-exports for the Public API ---

pub use crate::error::{DataAccessError, DataResult};
pub use crate::model::Order;
pub use crate::service::OrderService;
pub use crate::store::{InMemoryOrderStore, OrderStore, PgOrderStore};
pub use crate::view::{format_timestamp, narrow_i32, parse_timestamp, IntOutOfRange, OrderView};
