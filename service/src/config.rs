// service/src/config.rs

use crate::errors::{AppError, Result}; // Use AppError specific Result
use dotenvy::dotenv;
use sqlx::postgres::{PgConnectOptions, PgSslMode};
use std::env;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
  #[default]
  Pretty,
  Json,
}

impl FromStr for LogFormat {
  type Err = AppError;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "pretty" | "text" => Ok(LogFormat::Pretty),
      "json" => Ok(LogFormat::Json),
      other => Err(AppError::Config(format!("Invalid LOG_FORMAT '{}': expected 'pretty' or 'json'", other))),
    }
  }
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
  pub host: String,
  pub port: u16,
  pub user: String,
  pub password: String,
  pub name: String,
  pub max_connections: u32,
}

impl DatabaseConfig {
  pub fn connect_options(&self) -> PgConnectOptions {
    PgConnectOptions::new()
      .host(&self.host)
      .port(self.port)
      .username(&self.user)
      .password(&self.password)
      .database(&self.name)
      .ssl_mode(PgSslMode::Disable)
  }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub database: DatabaseConfig,
  pub bind_host: String,
  pub rest_port: u16,
  pub grpc_port: u16,
  pub graphql_port: u16,
  pub shutdown_grace: Duration,
  pub log_format: LogFormat,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Builds the configuration from an arbitrary variable source.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let required = |var_name: &str| {
      lookup(var_name)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| AppError::Config(format!("Missing environment variable '{}'", var_name)))
    };
    let optional = |var_name: &str, default: &str| lookup(var_name).unwrap_or_else(|| default.to_string());

    let database = DatabaseConfig {
      host: required("DB_HOST")?,
      port: parse_var("DB_PORT", &optional("DB_PORT", "5432"))?,
      user: required("DB_USER")?,
      password: optional("DB_PASSWORD", ""),
      name: required("DB_NAME")?,
      max_connections: parse_var("DB_MAX_CONNECTIONS", &optional("DB_MAX_CONNECTIONS", "10"))?,
    };

    let bind_host = optional("BIND_HOST", "0.0.0.0");
    let rest_port = parse_var("REST_PORT", &required("REST_PORT")?)?;
    let grpc_port = parse_var("GRPC_PORT", &required("GRPC_PORT")?)?;
    let graphql_port = parse_var("GRAPHQL_PORT", &required("GRAPHQL_PORT")?)?;

    let shutdown_grace = Duration::from_secs(parse_var(
      "SHUTDOWN_GRACE_SECS",
      &optional("SHUTDOWN_GRACE_SECS", &DEFAULT_SHUTDOWN_GRACE.as_secs().to_string()),
    )?);
    let log_format = optional("LOG_FORMAT", "pretty").parse::<LogFormat>()?;

    Ok(Self {
      database,
      bind_host,
      rest_port,
      grpc_port,
      graphql_port,
      shutdown_grace,
      log_format,
    })
  }

  pub fn rest_addr(&self) -> String {
    format!("{}:{}", self.bind_host, self.rest_port)
  }

  pub fn grpc_addr(&self) -> String {
    format!("{}:{}", self.bind_host, self.grpc_port)
  }

  pub fn graphql_addr(&self) -> String {
    format!("{}:{}", self.bind_host, self.graphql_port)
  }
}

fn parse_var<T>(var_name: &str, raw: &str) -> Result<T>
where
  T: FromStr,
  T::Err: std::fmt::Display,
{
  raw
    .trim()
    .parse::<T>()
    .map_err(|e| AppError::Config(format!("Invalid {} '{}': {}", var_name, raw, e)))
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |name| vars.get(name).cloned()
  }

  const MINIMAL: &[(&str, &str)] = &[
    ("DB_HOST", "db.internal"),
    ("DB_USER", "orders"),
    ("DB_NAME", "shop"),
    ("REST_PORT", "8080"),
    ("GRPC_PORT", "50051"),
    ("GRAPHQL_PORT", "8081"),
  ];

  #[test]
  fn minimal_environment_uses_defaults() {
    let cfg = AppConfig::from_lookup(lookup_from(MINIMAL)).unwrap();
    assert_eq!(cfg.database.port, 5432);
    assert_eq!(cfg.database.password, "");
    assert_eq!(cfg.database.max_connections, 10);
    assert_eq!(cfg.shutdown_grace, Duration::from_secs(10));
    assert_eq!(cfg.log_format, LogFormat::Pretty);
    assert_eq!(cfg.rest_addr(), "0.0.0.0:8080");
    assert_eq!(cfg.grpc_addr(), "0.0.0.0:50051");
    assert_eq!(cfg.graphql_addr(), "0.0.0.0:8081");
  }

  #[test]
  fn overrides_are_honoured() {
    let mut pairs = MINIMAL.to_vec();
    pairs.extend([
      ("DB_PORT", "6543"),
      ("DB_PASSWORD", "s3cret"),
      ("BIND_HOST", "127.0.0.1"),
      ("SHUTDOWN_GRACE_SECS", "3"),
      ("LOG_FORMAT", "JSON"),
    ]);
    let cfg = AppConfig::from_lookup(lookup_from(&pairs)).unwrap();
    assert_eq!(cfg.database.port, 6543);
    assert_eq!(cfg.database.password, "s3cret");
    assert_eq!(cfg.rest_addr(), "127.0.0.1:8080");
    assert_eq!(cfg.shutdown_grace, Duration::from_secs(3));
    assert_eq!(cfg.log_format, LogFormat::Json);
  }

  #[test]
  fn missing_required_variable_is_a_config_error() {
    let pairs: Vec<_> = MINIMAL.iter().copied().filter(|(k, _)| *k != "GRPC_PORT").collect();
    let err = AppConfig::from_lookup(lookup_from(&pairs)).unwrap_err();
    assert!(matches!(&err, AppError::Config(m) if m.contains("GRPC_PORT")), "got {:?}", err);
  }

  #[test]
  fn malformed_port_is_a_config_error() {
    let mut pairs = MINIMAL.to_vec();
    pairs.retain(|(k, _)| *k != "REST_PORT");
    pairs.push(("REST_PORT", "eighty"));
    let err = AppConfig::from_lookup(lookup_from(&pairs)).unwrap_err();
    assert!(matches!(&err, AppError::Config(m) if m.contains("REST_PORT")), "got {:?}", err);
  }
}
