//! Instance data source port.
//!
//! An instance data source is one named database target that can hand out
//! connections. Implementations live in adapters (e.g. authenv-db).
//!
//! # Design Rules
//!
//! - No `sqlx` types in signatures
//! - A borrowed connection is an owned guard: dropping it releases the
//!   connection back to wherever it came from

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use super::{DataSourceError, StatementError};

/// Registry of instance data sources keyed by logical instance name.
///
/// Iteration order is unspecified.
pub type DataSourceMap = HashMap<String, Arc<dyn InstanceDataSource>>;

/// A database target capable of yielding connections.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InstanceDataSource: Send + Sync {
    /// Borrow one connection.
    ///
    /// The connection is released when the returned box is dropped.
    async fn connect(&self) -> Result<Box<dyn InstanceConnection>, DataSourceError>;
}

/// A borrowed connection able to run raw SQL statements.
#[async_trait]
pub trait InstanceConnection: Send {
    /// Execute one SQL statement, discarding any result rows.
    async fn execute(&mut self, sql: &str) -> Result<(), StatementError>;
}
