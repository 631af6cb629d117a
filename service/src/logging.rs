// service/src/logging.rs

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing
use tracing_subscriber::EnvFilter;

use crate::config::LogFormat;

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` overrides the default `info` level. Spans log when they close, which
/// puts the duration of every request and query into the output.
pub fn init_tracing(format: LogFormat) {
  let filter = EnvFilter::builder()
    .with_default_directive(LevelFilter::INFO.into())
    .from_env_lossy();

  let builder = tracing_subscriber::fmt()
    .with_env_filter(filter) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE); // Log when spans close, showing duration

  // A second initialisation (tests, embedding) keeps the first subscriber.
  let installed = match format {
    LogFormat::Pretty => builder.try_init(),
    LogFormat::Json => builder.json().flatten_event(true).try_init(),
  };
  if installed.is_err() {
    tracing::debug!("Tracing subscriber already installed; keeping it.");
  }
}
