// service/src/main.rs

use anyhow::Context;
use order_service::config::AppConfig;
use order_service::logging::init_tracing;
use order_service::supervisor::{connect_database, wait_for_termination, ListenAddrs, RunningAdapters};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  // Configuration errors are reported before logging is configured, so print them plainly.
  let app_config = AppConfig::from_env().context("Failed to load application configuration")?;
  init_tracing(app_config.log_format);

  // Never log DB_PASSWORD.
  tracing::info!(
    db_host = %app_config.database.host,
    db_port = app_config.database.port,
    db_name = %app_config.database.name,
    rest_port = app_config.rest_port,
    grpc_port = app_config.grpc_port,
    graphql_port = app_config.graphql_port,
    grace = ?app_config.shutdown_grace,
    "Starting order service..."
  );

  let order_service = connect_database(&app_config.database)
    .await
    .context("Failed to connect to the database")?;

  let adapters = RunningAdapters::start(&ListenAddrs::from(&app_config), order_service, app_config.shutdown_grace)
    .await
    .context("Failed to start listeners")?;
  tracing::info!(
    rest = %adapters.rest.local_addr(),
    grpc = %adapters.grpc.local_addr(),
    graphql = %adapters.graphql.local_addr(),
    "Order service is up."
  );

  adapters
    .run_until(wait_for_termination(), app_config.shutdown_grace)
    .await
    .context("Failed to listen for termination signals")?;
  tracing::info!("Order service stopped.");
  Ok(())
}
