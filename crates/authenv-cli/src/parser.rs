//! Main CLI parser and top-level argument handling.

use std::path::PathBuf;
use std::str::FromStr;

use authenv_core::DatabaseType;
use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for applying authority fixtures.
///
/// Every option can also come from the environment (or a `.env` file).
#[derive(Parser)]
#[command(name = "authenv")]
#[command(about = "Apply authority init/clean SQL to test databases")]
#[command(version)]
pub struct Cli {
    /// Authority document (YAML, or JSON with a .json extension)
    #[arg(long, env = "AUTHENV_DOCUMENT", value_name = "PATH")]
    pub document: PathBuf,

    /// Database dialect whose statements apply
    #[arg(
        long = "database-type",
        env = "AUTHENV_DATABASE_TYPE",
        default_value = "SQLite",
        value_name = "NAME"
    )]
    pub database_type: DatabaseType,

    /// Named SQLite data source, repeatable
    #[arg(
        long = "datasource",
        env = "AUTHENV_DATASOURCES",
        value_name = "NAME=URL",
        value_delimiter = ','
    )]
    pub datasources: Vec<DataSourceArg>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// A `NAME=URL` data source argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSourceArg {
    pub name: String,
    pub url: String,
}

impl FromStr for DataSourceArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, url) = s
            .split_once('=')
            .ok_or_else(|| format!("expected NAME=URL, got '{s}'"))?;
        let (name, url) = (name.trim(), url.trim());
        if name.is_empty() {
            return Err(format!("missing instance name in '{s}'"));
        }
        if url.is_empty() {
            return Err(format!("missing database URL in '{s}'"));
        }
        Ok(Self {
            name: name.to_string(),
            url: url.to_string(),
        })
    }
}
