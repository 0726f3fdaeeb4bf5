//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core expects from infrastructure.
//! They contain no implementation details and use only domain types.

pub mod data_source;

use thiserror::Error;

pub use data_source::{DataSourceMap, InstanceConnection, InstanceDataSource};

/// Failure to obtain a connection from an instance data source.
///
/// This is the only execution-time error that escapes the environment
/// manager.
#[derive(Debug, Error)]
pub enum DataSourceError {
    /// The connection could not be established or borrowed.
    #[error("Failed to acquire connection: {0}")]
    Connect(String),

    /// The data source itself is misconfigured (bad URL, bad options).
    #[error("Data source configuration error: {0}")]
    Configuration(String),
}

/// Failure executing a single statement on an acquired connection.
#[derive(Debug, Error)]
pub enum StatementError {
    #[error("{0}")]
    Execution(String),
}
