// service/src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use order_core::DataAccessError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Configuration Error: {0}")]
  Config(String),

  // Rendered verbatim so every adapter shows the same message for the same failure.
  #[error(transparent)]
  DataAccess(#[from] DataAccessError),

  #[error("Failed to bind {adapter} listener on {addr}: {source}")]
  Bind {
    adapter: &'static str,
    addr: String,
    #[source]
    source: std::io::Error,
  },

  #[error("gRPC transport error: {0}")]
  Transport(#[from] tonic::transport::Error),

  #[error("Failed to build gRPC reflection service: {0}")]
  Reflection(#[from] tonic_reflection::server::Error),

  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
  }

  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    tracing::error!(application_error = %self, "Responding with error");
    // Plain-text body carrying the error message, whatever the variant.
    HttpResponse::build(self.status_code())
      .content_type("text/plain; charset=utf-8")
      .body(self.to_string())
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
