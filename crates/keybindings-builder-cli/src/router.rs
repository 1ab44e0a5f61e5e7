// Command routing and dispatch

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::*;
use crate::error::CliResult;
use crate::manifest::DEFAULT_MANIFEST;

/// kbb - build editor keybinding files from a declarative manifest
#[derive(Parser, Debug)]
#[command(name = "kbb")]
#[command(bin_name = "kbb")]
#[command(about = "Build editor keybinding files from a declarative manifest")]
#[command(
    long_about = "kbb reads a TOML manifest of key registrations, reconciles them with the editor's default keybindings and your manual keybindings, and writes the resulting keybindings file.\n\nQuick start:\n  • kbb init          Create a sample kbb.toml\n  • kbb check         Preview the generated keybindings\n  • kbb build         Write the keybindings file"
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only report errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to the manifest
    #[arg(short, long, global = true, value_name = "PATH", default_value = DEFAULT_MANIFEST)]
    pub manifest: PathBuf,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Generate the keybindings file
    #[command(about = "Register every manifest binding and write the keybindings file")]
    Build,

    /// Preview a build without writing anything
    #[command(about = "Run a build without writing the output file")]
    Check {
        /// Print the planned keybindings as JSON
        #[arg(long)]
        print: bool,
    },

    /// Create a sample manifest
    #[command(about = "Write a sample kbb.toml")]
    Init {
        /// Overwrite an existing manifest
        #[arg(long)]
        force: bool,
    },

    /// Validate key combinations
    #[command(about = "Validate key combinations and show their normalized form")]
    Keys {
        /// Key combinations, e.g. "ctrl+shift+p" or "ctrl+k ctrl+s"
        #[arg(value_name = "KEY", required = true)]
        keys: Vec<String>,
    },
}

/// Route and execute commands
pub struct CommandRouter;

impl CommandRouter {
    /// Parse CLI arguments and route to appropriate handler
    pub async fn route() -> CliResult<()> {
        let cli = Cli::parse();

        crate::logging::init_logging(cli.verbose, cli.quiet);

        Self::execute(&cli).await
    }

    /// Execute a command
    pub async fn execute(cli: &Cli) -> CliResult<()> {
        let manifest = cli.manifest.clone();

        match &cli.command {
            Commands::Build => BuildCommand::new(manifest).execute().await,
            Commands::Check { print } => {
                CheckCommand::new(manifest)
                    .with_print(*print)
                    .execute()
                    .await
            }
            Commands::Init { force } => InitCommand::new(manifest).with_force(*force).execute().await,
            Commands::Keys { keys } => KeysCommand::new(keys.clone()).execute().await,
        }
    }
}
