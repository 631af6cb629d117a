// order_core/src/error.rs
use thiserror::Error;

/// The single failure kind of the data layer.
///
/// Covers connection failures as well as query and row-decoding failures. It is
/// deliberately not classified any further: every layer above the store passes it
/// along unchanged and each protocol adapter renders it in its own envelope.
#[derive(Debug, Error)]
#[error("data access error: {source}")]
pub struct DataAccessError {
  #[from]
  source: sqlx::Error,
}

impl DataAccessError {
  /// The underlying driver error.
  pub fn driver_error(&self) -> &sqlx::Error {
    &self.source
  }
}

pub type DataResult<T, E = DataAccessError> = std::result::Result<T, E>;
