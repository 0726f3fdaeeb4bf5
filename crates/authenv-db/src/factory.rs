//! Composition utilities for building data source registries with `SQLite`
//! backends. Construction only, no domain logic.

use std::collections::HashMap;
use std::sync::Arc;

use authenv_core::{DataSourceError, DataSourceMap, InstanceDataSource};

use crate::data_source::SqliteInstanceDataSource;
use crate::setup::create_pool;

/// Factory for `SQLite` instance data sources.
pub struct DataSourceFactory;

impl DataSourceFactory {
    /// Create one data source for `database_url`.
    pub fn sqlite_data_source(database_url: &str) -> Result<SqliteInstanceDataSource, DataSourceError> {
        Ok(SqliteInstanceDataSource::new(create_pool(database_url)?))
    }

    /// Build a registry from `(instance name, database URL)` pairs.
    ///
    /// Pools connect lazily; an unreachable database is only reported when
    /// the environment manager first borrows a connection from it.
    pub fn sqlite_registry<I, N, U>(entries: I) -> Result<DataSourceMap, DataSourceError>
    where
        I: IntoIterator<Item = (N, U)>,
        N: Into<String>,
        U: AsRef<str>,
    {
        let mut registry: DataSourceMap = HashMap::new();
        for (name, url) in entries {
            let name = name.into();
            if name.trim().is_empty() {
                return Err(DataSourceError::Configuration(
                    "Instance name must not be empty".to_string(),
                ));
            }
            if registry.contains_key(&name) {
                return Err(DataSourceError::Configuration(format!(
                    "Duplicate instance name '{name}'"
                )));
            }

            let data_source: Arc<dyn InstanceDataSource> =
                Arc::new(Self::sqlite_data_source(url.as_ref())?);
            registry.insert(name, data_source);
        }
        Ok(registry)
    }
}

/// Test database helper for integration tests.
///
/// Backed by a file in a temporary directory so that every pooled
/// connection sees the same database. The directory is removed on drop.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    _dir: tempfile::TempDir,
    url: String,
    pool: sqlx::SqlitePool,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new empty test database. Must run inside a Tokio runtime.
    pub fn new() -> Result<Self, DataSourceError> {
        let dir = tempfile::tempdir()
            .map_err(|e| DataSourceError::Configuration(format!("Failed to create temp dir: {e}")))?;
        let url = format!("sqlite://{}", dir.path().join("instance.db").display());
        let pool = create_pool(&url)?;
        Ok(Self {
            _dir: dir,
            url,
            pool,
        })
    }

    /// Connection URL of this database.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get the underlying pool.
    pub const fn pool(&self) -> &sqlx::SqlitePool {
        &self.pool
    }

    /// Create an instance data source sharing this database's pool.
    pub fn data_source(&self) -> SqliteInstanceDataSource {
        SqliteInstanceDataSource::new(self.pool.clone())
    }

    /// Whether a table called `name` exists.
    pub async fn table_exists(&self, name: &str) -> Result<bool, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?")
                .bind(name)
                .fetch_one(&self.pool)
                .await?;
        Ok(count > 0)
    }

    /// Number of rows in `table`.
    pub async fn count_rows(&self, table: &str) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM \"{table}\""))
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
