//! `SQLite` instance data sources for authority-env.
//!
//! Implements the `InstanceDataSource` port from `authenv-core` on top of
//! `sqlx` pools. All `sqlx` types stay inside this crate.

#![deny(unsafe_code)]

pub mod data_source;
pub mod factory;
pub mod setup;

// Re-export factory for convenient access
pub use factory::DataSourceFactory;

// Re-export TestDb for integration tests
#[cfg(any(test, feature = "test-utils"))]
pub use factory::TestDb;

pub use data_source::SqliteInstanceDataSource;
pub use setup::create_pool;
