// service/src/web/mod.rs

//! REST adapter.

// Declare child modules
pub mod handlers;
pub mod routes;

pub use routes::configure_rest_routes;
