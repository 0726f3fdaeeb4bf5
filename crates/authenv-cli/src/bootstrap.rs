//! CLI bootstrap - the composition root.
//!
//! The only place where the authority document, the dialect and the
//! concrete `SQLite` data sources are wired into an
//! `AuthorityEnvironmentManager`.

use std::path::PathBuf;
use std::sync::Arc;

use authenv_core::{AuthorityEnvironmentManager, DataSourceMap, DatabaseType};
use authenv_db::DataSourceFactory;

use crate::error::CliError;
use crate::parser::{Cli, DataSourceArg};

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Path to the authority document.
    pub document: PathBuf,
    /// Dialect whose statements apply.
    pub database_type: DatabaseType,
    /// Named data sources to run against.
    pub datasources: Vec<DataSourceArg>,
}

impl CliConfig {
    /// Take the configuration out of parsed arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            document: cli.document.clone(),
            database_type: cli.database_type,
            datasources: cli.datasources.clone(),
        }
    }
}

/// Build the manager described by `config`.
///
/// With `require_data_sources` set, an empty data source list is an
/// argument error. Must run inside a Tokio runtime.
pub fn bootstrap(
    config: &CliConfig,
    require_data_sources: bool,
) -> Result<AuthorityEnvironmentManager, CliError> {
    if require_data_sources && config.datasources.is_empty() {
        return Err(CliError::Arguments(
            "at least one --datasource NAME=URL is required".to_string(),
        ));
    }

    let registry: DataSourceMap = DataSourceFactory::sqlite_registry(
        config
            .datasources
            .iter()
            .map(|ds| (ds.name.as_str(), ds.url.as_str())),
    )?;

    tracing::debug!(
        document = %config.document.display(),
        database_type = %config.database_type,
        instances = registry.len(),
        "Bootstrapping authority environment"
    );

    let manager = AuthorityEnvironmentManager::new(
        &config.document,
        Arc::new(registry),
        config.database_type,
    )?;
    Ok(manager)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn document() -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(b"sql-sets:\n  - db-types: [SQLite]\n    init-sqls: [CREATE TABLE t (id INTEGER)]\n")
            .unwrap();
        file
    }

    fn config(document: PathBuf, datasources: Vec<DataSourceArg>) -> CliConfig {
        CliConfig {
            document,
            database_type: DatabaseType::SQLite,
            datasources,
        }
    }

    #[tokio::test]
    async fn test_bootstrap_requires_data_sources_for_execution() {
        let doc = document();
        let err = bootstrap(&config(doc.path().to_path_buf(), vec![]), true)
            .err()
            .unwrap();
        assert!(matches!(err, CliError::Arguments(_)));

        let manager = bootstrap(&config(doc.path().to_path_buf(), vec![]), false).unwrap();
        assert_eq!(manager.init_sqls(), vec!["CREATE TABLE t (id INTEGER)"]);
    }

    #[tokio::test]
    async fn test_bootstrap_reports_missing_document_as_io() {
        let dir = tempfile::tempdir().unwrap();
        let err = bootstrap(&config(dir.path().join("missing.yaml"), vec![]), false)
            .err()
            .unwrap();
        assert!(matches!(err, CliError::Io(_)));
    }

    #[tokio::test]
    async fn test_bootstrap_reports_directory_document_as_io() {
        let dir = tempfile::tempdir().unwrap();
        let err = bootstrap(&config(dir.path().to_path_buf(), vec![]), false)
            .err()
            .unwrap();
        assert!(matches!(err, CliError::Io(msg) if msg.contains("Failed to read")));
    }

    #[tokio::test]
    async fn test_bootstrap_reports_duplicate_names_as_config() {
        let doc = document();
        let db = authenv_db::TestDb::new().unwrap();
        let ds = DataSourceArg {
            name: "ds_0".to_string(),
            url: db.url().to_string(),
        };
        let err = bootstrap(&config(doc.path().to_path_buf(), vec![ds.clone(), ds]), true)
            .err()
            .unwrap();
        assert!(matches!(err, CliError::Config(_)));
    }
}
