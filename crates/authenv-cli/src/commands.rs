//! Subcommand definitions.

use clap::Subcommand;

/// Operations the CLI can run.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Run the init statements on every data source
    Init,
    /// Run the clean statements on every data source
    Clean,
    /// Run clean, then init
    Reset,
    /// Print the resolved statements without connecting
    Show,
}

impl Commands {
    /// Whether the command talks to data sources.
    pub const fn needs_data_sources(self) -> bool {
        !matches!(self, Self::Show)
    }
}
