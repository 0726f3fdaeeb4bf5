//! Authority environment manager - applies authority fixtures to every
//! registered instance data source.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::{AuthorityDefinition, AuthorityLoadError, DatabaseType};
use crate::ports::{DataSourceError, DataSourceMap, InstanceDataSource};

/// Loads an authority document and runs its init/clean statements for one
/// dialect against every instance data source.
///
/// Statement failures are logged and skipped; only a failure to acquire a
/// connection is returned to the caller. Data sources are visited one at a
/// time in unspecified order.
pub struct AuthorityEnvironmentManager {
    authority: AuthorityDefinition,
    data_sources: Arc<DataSourceMap>,
    database_type: DatabaseType,
}

impl AuthorityEnvironmentManager {
    /// Load the authority document at `path` and bind it to `data_sources`
    /// and `database_type`.
    pub fn new(
        path: impl AsRef<Path>,
        data_sources: Arc<DataSourceMap>,
        database_type: DatabaseType,
    ) -> Result<Self, AuthorityLoadError> {
        let authority = AuthorityDefinition::load(path)?;
        Ok(Self::from_definition(authority, data_sources, database_type))
    }

    /// Build a manager from an already-parsed definition.
    pub fn from_definition(
        authority: AuthorityDefinition,
        data_sources: Arc<DataSourceMap>,
        database_type: DatabaseType,
    ) -> Self {
        Self {
            authority,
            data_sources,
            database_type,
        }
    }

    pub fn database_type(&self) -> DatabaseType {
        self.database_type
    }

    pub fn definition(&self) -> &AuthorityDefinition {
        &self.authority
    }

    /// Init statements resolved for the configured dialect.
    pub fn init_sqls(&self) -> Vec<&str> {
        self.authority.init_sqls(self.database_type)
    }

    /// Clean statements resolved for the configured dialect.
    pub fn clean_sqls(&self) -> Vec<&str> {
        self.authority.clean_sqls(self.database_type)
    }

    /// Run the init statements against every data source.
    pub async fn initialize(&self) -> Result<(), DataSourceError> {
        self.execute_on_all("initialize", &self.init_sqls()).await
    }

    /// Run the clean statements against every data source.
    pub async fn clean(&self) -> Result<(), DataSourceError> {
        self.execute_on_all("clean", &self.clean_sqls()).await
    }

    /// Clean, then initialize.
    pub async fn reset(&self) -> Result<(), DataSourceError> {
        self.clean().await?;
        self.initialize().await
    }

    async fn execute_on_all(&self, operation: &str, sqls: &[&str]) -> Result<(), DataSourceError> {
        if sqls.is_empty() {
            debug!(
                operation,
                database_type = %self.database_type,
                "No authority SQL for database type, skipping"
            );
            return Ok(());
        }

        info!(
            operation,
            database_type = %self.database_type,
            statements = sqls.len(),
            instances = self.data_sources.len(),
            "Applying authority SQL"
        );

        for (name, data_source) in self.data_sources.iter() {
            execute_on_instance_data_source(name, data_source.as_ref(), sqls).await?;
        }
        Ok(())
    }
}

/// Run `sqls` in order on a single connection borrowed from `data_source`.
///
/// The connection guard is dropped on every path out of this function.
async fn execute_on_instance_data_source(
    name: &str,
    data_source: &dyn InstanceDataSource,
    sqls: &[&str],
) -> Result<(), DataSourceError> {
    let mut connection = data_source.connect().await.inspect_err(|e| {
        warn!(instance = name, error = %e, "Failed to acquire connection for authority SQL");
    })?;

    let mut failed = 0usize;
    for sql in sqls {
        if let Err(e) = connection.execute(sql).await {
            failed += 1;
            warn!(instance = name, sql, error = %e, "Authority SQL failed");
        }
    }

    debug!(
        instance = name,
        executed = sqls.len(),
        failed,
        "Authority SQL batch finished"
    );
    Ok(())
}
