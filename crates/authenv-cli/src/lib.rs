//! `authenv` command-line adapter.
//!
//! Wires an authority document, a dialect and named `SQLite` data sources
//! into an `AuthorityEnvironmentManager` and runs one operation on it.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by the main.rs binary
use anyhow as _;
use dotenvy as _;
use tokio as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, bootstrap};
pub use commands::Commands;
pub use error::CliError;
pub use parser::{Cli, DataSourceArg};
