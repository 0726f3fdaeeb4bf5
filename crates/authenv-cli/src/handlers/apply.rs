//! Handler for the `init`, `clean` and `reset` commands.

use authenv_core::AuthorityEnvironmentManager;
use tracing::info;

use crate::commands::Commands;
use crate::error::CliError;

/// Run `command` against every data source of `manager`.
///
/// Statement failures only show up in the log; the command still succeeds.
pub async fn execute(manager: &AuthorityEnvironmentManager, command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Init => manager.initialize().await?,
        Commands::Clean => manager.clean().await?,
        Commands::Reset => manager.reset().await?,
        Commands::Show => {
            return Err(CliError::Arguments(
                "show does not apply statements".to_string(),
            ));
        }
    }

    info!(
        command = ?command,
        database_type = %manager.database_type(),
        "Authority environment updated"
    );
    Ok(())
}
