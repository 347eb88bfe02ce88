pub mod repository;

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::config::Config;

/// Builds the shared pool without opening a connection. Connections are
/// established on first use, so an unreachable store does not stop startup.
pub fn connect_lazy(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

    Ok(SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect_lazy_with(options))
}
