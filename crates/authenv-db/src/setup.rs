//! Pool setup for `SQLite` instance data sources.

use std::str::FromStr;

use authenv_core::DataSourceError;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Upper bound on pooled connections per instance. The environment manager
/// only ever borrows one at a time.
const DEFAULT_MAX_CONNECTIONS: u32 = 2;

/// Creates a lazily-connecting `SQLite` pool for `database_url`.
///
/// No connection is opened here, so an unreachable database surfaces as a
/// [`DataSourceError::Connect`] when a connection is first borrowed. Must be
/// called from within a Tokio runtime.
///
/// # Example
///
/// ```rust,no_run
/// use authenv_db::create_pool;
///
/// # async fn example() -> Result<(), authenv_core::DataSourceError> {
/// let pool = create_pool("sqlite:./ds_0.db")?;
/// # Ok(())
/// # }
/// ```
pub fn create_pool(database_url: &str) -> Result<SqlitePool, DataSourceError> {
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| {
            DataSourceError::Configuration(format!("Invalid database URL '{database_url}': {e}"))
        })?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(DEFAULT_MAX_CONNECTIONS)
        .connect_lazy_with(options);

    tracing::debug!(database_url, "lazy database pool created");
    Ok(pool)
}
