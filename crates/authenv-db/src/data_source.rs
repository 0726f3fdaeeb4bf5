//! `SQLite` implementation of the `InstanceDataSource` port.

use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::{Sqlite, SqlitePool};

use authenv_core::{DataSourceError, InstanceConnection, InstanceDataSource, StatementError};

/// Instance data source backed by a `SQLite` pool.
///
/// Each borrowed connection goes back to the pool when dropped.
#[derive(Clone)]
pub struct SqliteInstanceDataSource {
    pool: SqlitePool,
}

impl SqliteInstanceDataSource {
    /// Create a data source over an existing pool.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get the underlying pool.
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl InstanceDataSource for SqliteInstanceDataSource {
    async fn connect(&self) -> Result<Box<dyn InstanceConnection>, DataSourceError> {
        let connection = self
            .pool
            .acquire()
            .await
            .map_err(|e| DataSourceError::Connect(e.to_string()))?;
        Ok(Box::new(SqliteInstanceConnection { connection }))
    }
}

struct SqliteInstanceConnection {
    connection: PoolConnection<Sqlite>,
}

#[async_trait]
impl InstanceConnection for SqliteInstanceConnection {
    async fn execute(&mut self, sql: &str) -> Result<(), StatementError> {
        sqlx::query(sql)
            .execute(&mut *self.connection)
            .await
            .map_err(|e| StatementError::Execution(e.to_string()))?;
        Ok(())
    }
}
