// service/src/supervisor.rs

//! Builds the store → service chain, runs the three protocol listeners side by side
//! and stops them together.
//!
//! A bind failure on any listener stops the ones already started and aborts startup,
//! so a port conflict never leaves a half-running process. The running listeners are kept
//! as owned [`StoppableAdapter`] handles inside [`RunningAdapters`], and a single
//! shutdown routine drains all of them within the same grace period.

use std::fmt;
use std::future::Future;
use std::net::SocketAddr;
use std::time::Duration;

use actix_web::dev::{Server, ServerHandle};
use actix_web::{web, App, HttpServer};
use order_core::{OrderService, PgOrderStore};
use sqlx::postgres::PgPoolOptions;
use futures_util::stream::Stream;
use tokio::net::TcpStream;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_stream::wrappers::TcpListenerStream;
use tokio_stream::StreamExt;
use tracing::{error, info, instrument, warn};
use tracing_actix_web::TracingLogger;

use crate::config::{AppConfig, DatabaseConfig};
use crate::errors::{AppError, Result};
use crate::graphql::{build_schema, configure_graphql_routes};
use crate::grpc::{build_router, OrderGrpcService};
use crate::state::AppState;
use crate::web::configure_rest_routes;

/// Opens the connection pool and proves the database answers.
#[instrument(name = "supervisor::connect_database", skip(config), fields(db_host = %config.host, db_name = %config.name))]
pub async fn connect_database(config: &DatabaseConfig) -> Result<OrderService> {
  let pool = PgPoolOptions::new()
    .max_connections(config.max_connections)
    .connect_with(config.connect_options())
    .await
    .map_err(|e| AppError::DataAccess(e.into()))?;

  let store = PgOrderStore::new(pool);
  store.ping().await?;
  info!("Successfully connected to the database.");

  Ok(OrderService::new(store))
}

/// Where each adapter listens.
#[derive(Debug, Clone)]
pub struct ListenAddrs {
  pub rest: String,
  pub grpc: String,
  pub graphql: String,
}

impl From<&AppConfig> for ListenAddrs {
  fn from(config: &AppConfig) -> Self {
    Self {
      rest: config.rest_addr(),
      grpc: config.grpc_addr(),
      graphql: config.graphql_addr(),
    }
  }
}

/// A running listener that can be told to stop within a grace period.
pub enum StoppableAdapter {
  /// An actix-web server (REST or GraphQL).
  Http {
    name: &'static str,
    local_addr: SocketAddr,
    handle: ServerHandle,
    task: JoinHandle<std::io::Result<()>>,
  },
  /// The tonic server.
  Grpc {
    name: &'static str,
    local_addr: SocketAddr,
    shutdown: watch::Sender<bool>,
    task: JoinHandle<std::result::Result<(), tonic::transport::Error>>,
  },
}

impl StoppableAdapter {
  pub fn name(&self) -> &'static str {
    match self {
      StoppableAdapter::Http { name, .. } | StoppableAdapter::Grpc { name, .. } => name,
    }
  }

  pub fn local_addr(&self) -> SocketAddr {
    match self {
      StoppableAdapter::Http { local_addr, .. } | StoppableAdapter::Grpc { local_addr, .. } => *local_addr,
    }
  }

  /// Closes the listening socket and lets in-flight requests finish, waiting at most
  /// `grace` before the listener is torn down regardless. Connections attempted after
  /// this starts are refused.
  pub async fn stop(self, grace: Duration) {
    match self {
      StoppableAdapter::Http { name, handle, task, .. } => {
        info!(adapter = name, "Shutting down listener...");
        if tokio::time::timeout(grace, handle.stop(true)).await.is_err() {
          warn!(adapter = name, ?grace, "Grace period elapsed, forcing listener down.");
          handle.stop(false).await;
        }
        match task.await {
          Ok(Ok(())) => info!(adapter = name, "Listener stopped."),
          Ok(Err(e)) => error!(adapter = name, error = %e, "Listener exited with an error."),
          Err(e) => error!(adapter = name, error = %e, "Listener task failed."),
        }
      }
      StoppableAdapter::Grpc {
        name,
        shutdown,
        mut task,
        ..
      } => {
        info!(adapter = name, "Shutting down listener...");
        // The receivers are gone only if the server already exited; the join below reports why.
        let _ = shutdown.send(true);
        match tokio::time::timeout(grace, &mut task).await {
          Ok(Ok(Ok(()))) => info!(adapter = name, "Listener stopped."),
          Ok(Ok(Err(e))) => error!(adapter = name, error = %e, "Listener exited with an error."),
          Ok(Err(e)) => error!(adapter = name, error = %e, "Listener task failed."),
          Err(_) => {
            warn!(adapter = name, ?grace, "Grace period elapsed, aborting in-flight calls.");
            task.abort();
          }
        }
      }
    }
  }
}

impl fmt::Debug for StoppableAdapter {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let kind = match self {
      StoppableAdapter::Http { .. } => "Http",
      StoppableAdapter::Grpc { .. } => "Grpc",
    };
    f.debug_struct(kind)
      .field("name", &self.name())
      .field("local_addr", &self.local_addr())
      .finish_non_exhaustive()
  }
}

/// The three listeners of a running process.
#[derive(Debug)]
pub struct RunningAdapters {
  pub rest: StoppableAdapter,
  pub grpc: StoppableAdapter,
  pub graphql: StoppableAdapter,
}

impl RunningAdapters {
  /// Binds and starts all three adapters over the same order service.
  ///
  /// Must be called from within an actix system (`#[actix_web::main]` or
  /// `#[actix_web::test]`), since the HTTP servers are driven on the local task set.
  pub async fn start(addrs: &ListenAddrs, order_service: OrderService, grace: Duration) -> Result<Self> {
    let rest = start_rest(&addrs.rest, order_service.clone(), grace)?;
    let graphql = match start_graphql(&addrs.graphql, order_service.clone(), grace) {
      Ok(adapter) => adapter,
      Err(e) => {
        rest.stop(grace).await;
        return Err(e);
      }
    };
    let grpc = match start_grpc(&addrs.grpc, order_service).await {
      Ok(adapter) => adapter,
      Err(e) => {
        futures_util::future::join(rest.stop(grace), graphql.stop(grace)).await;
        return Err(e);
      }
    };

    Ok(Self { rest, grpc, graphql })
  }

  /// Serves until `termination` resolves, then shuts every adapter down.
  ///
  /// The adapters are stopped even when waiting for the signal fails. That failure is
  /// returned afterwards so the caller exits non-zero.
  pub async fn run_until<F>(self, termination: F, grace: Duration) -> std::io::Result<&'static str>
  where
    F: Future<Output = std::io::Result<&'static str>>,
  {
    let outcome = termination.await;
    match &outcome {
      Ok(signal) => info!(signal, "Received termination signal."),
      Err(e) => error!(error = %e, "Failed to wait for a termination signal."),
    }
    self.shutdown(grace).await;
    outcome
  }

  /// Stops all three adapters concurrently, each bounded by `grace`.
  pub async fn shutdown(self, grace: Duration) {
    info!(?grace, "Shutting down all adapters...");
    futures_util::future::join3(self.rest.stop(grace), self.grpc.stop(grace), self.graphql.stop(grace)).await;
    info!("All adapters stopped.");
  }
}

fn bind_std(adapter: &'static str, addr: &str) -> Result<std::net::TcpListener> {
  std::net::TcpListener::bind(addr).map_err(|source| AppError::Bind {
    adapter,
    addr: addr.to_string(),
    source,
  })
}

/// actix only takes whole seconds; round up so a sub-second grace still drains.
fn shutdown_timeout_secs(grace: Duration) -> u64 {
  let secs = grace.as_secs() + u64::from(grace.subsec_nanos() > 0);
  secs.max(1)
}

fn spawn_http(name: &'static str, local_addr: SocketAddr, server: Server) -> StoppableAdapter {
  let handle = server.handle();
  let task = actix_web::rt::spawn(server);
  info!(adapter = name, address = %local_addr, "Listener started.");
  StoppableAdapter::Http {
    name,
    local_addr,
    handle,
    task,
  }
}

fn start_rest(addr: &str, order_service: OrderService, grace: Duration) -> Result<StoppableAdapter> {
  let listener = bind_std("REST", addr)?;
  let local_addr = listener.local_addr()?;
  let app_state = web::Data::new(AppState::new(order_service));

  let server = HttpServer::new(move || {
    App::new()
      .app_data(app_state.clone()) // Share AppState with handlers
      .wrap(TracingLogger::default()) // Actix middleware for tracing requests
      .configure(configure_rest_routes)
  })
  .shutdown_timeout(shutdown_timeout_secs(grace))
  .disable_signals()
  .listen(listener)?
  .run();

  Ok(spawn_http("REST", local_addr, server))
}

fn start_graphql(addr: &str, order_service: OrderService, grace: Duration) -> Result<StoppableAdapter> {
  let schema = build_schema(order_service).map_err(|e| AppError::Config(format!("Invalid GraphQL schema: {}", e)))?;
  let listener = bind_std("GraphQL", addr)?;
  let local_addr = listener.local_addr()?;
  let schema = web::Data::new(schema);

  let server = HttpServer::new(move || {
    App::new()
      .app_data(schema.clone())
      .wrap(TracingLogger::default())
      .configure(configure_graphql_routes)
  })
  .shutdown_timeout(shutdown_timeout_secs(grace))
  .disable_signals()
  .listen(listener)?
  .run();

  Ok(spawn_http("GraphQL", local_addr, server))
}

async fn start_grpc(addr: &str, order_service: OrderService) -> Result<StoppableAdapter> {
  let router = build_router(OrderGrpcService::new(order_service))?;
  let listener = tokio::net::TcpListener::bind(addr).await.map_err(|source| AppError::Bind {
    adapter: "gRPC",
    addr: addr.to_string(),
    source,
  })?;
  let local_addr = listener.local_addr()?;

  let (shutdown, mut shutdown_rx) = watch::channel(false);
  let incoming = closing_incoming(TcpListenerStream::new(listener), shutdown.subscribe());
  let task = tokio::spawn(router.serve_with_incoming_shutdown(incoming, async move {
    let _ = shutdown_rx.wait_for(|stopping| *stopping).await;
  }));
  info!(adapter = "gRPC", address = %local_addr, "Listener started.");

  Ok(StoppableAdapter::Grpc {
    name: "gRPC",
    local_addr,
    shutdown,
    task,
  })
}

/// Accepted connections until shutdown starts, at which point the listener is dropped.
///
/// tonic keeps its incoming stream alive while draining, so without this the socket
/// would stay bound and new clients would queue in the backlog instead of being refused.
fn closing_incoming(
  listener: TcpListenerStream,
  shutdown: watch::Receiver<bool>,
) -> impl Stream<Item = std::io::Result<TcpStream>> {
  futures_util::stream::unfold((listener, shutdown), |(mut listener, mut shutdown)| async move {
    let accepted = tokio::select! {
      biased;
      _ = shutdown.wait_for(|stopping| *stopping) => None,
      accepted = listener.next() => accepted,
    };
    accepted.map(|accepted| (accepted, (listener, shutdown)))
  })
}

/// Resolves once the process receives SIGINT or SIGTERM (Ctrl-C elsewhere).
pub async fn wait_for_termination() -> std::io::Result<&'static str> {
  #[cfg(unix)]
  {
    use tokio::signal::unix::{signal, SignalKind};

    let mut terminate = signal(SignalKind::terminate())?;
    tokio::select! {
      result = tokio::signal::ctrl_c() => result.map(|_| "SIGINT"),
      _ = terminate.recv() => Ok("SIGTERM"),
    }
  }
  #[cfg(not(unix))]
  {
    tokio::signal::ctrl_c().await?;
    Ok("ctrl-c")
  }
}
