//! Authority fixture environment for database integration tests.
//!
//! An authority document maps database dialects to ordered "init" and
//! "clean" SQL statement lists. [`AuthorityEnvironmentManager`] resolves the
//! lists for one dialect and runs them against every registered
//! [`InstanceDataSource`], logging statement failures instead of failing.
//!
//! This crate holds the domain types, the port traits and the manager.
//! Concrete data sources live in adapter crates.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    AuthorityDefinition, AuthorityLoadError, DatabaseType, DatabaseTypeError, DocumentFormat,
    SqlSet,
};
pub use ports::{
    DataSourceError, DataSourceMap, InstanceConnection, InstanceDataSource, StatementError,
};
pub use services::AuthorityEnvironmentManager;
