//! CLI entry point - the composition root.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use authenv_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::from_cli(&cli);
    let manager = bootstrap(&config, cli.command.needs_data_sources())?;

    match cli.command {
        Commands::Show => handlers::show::execute(&manager),
        command => handlers::apply::execute(&manager, command).await?,
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    // Load .env before parsing so env-backed flags see it
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        tracing::error!("{err:#}");
        let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
        std::process::exit(code);
    }
}
