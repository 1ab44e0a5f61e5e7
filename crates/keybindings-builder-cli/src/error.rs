// CLI error types and their user-facing rendering

use std::path::PathBuf;

use keybindings_builder::{BuilderError, ConfigError};
use thiserror::Error;

/// Exit code for invalid configuration or manifests
pub const EXIT_CONFIG: i32 = 2;

/// Exit code for every other failure
pub const EXIT_FAILURE: i32 = 1;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Manifest not found: {}", .path.display())]
    ManifestNotFound { path: PathBuf },

    #[error("Manifest already exists: {}", .path.display())]
    ManifestExists { path: PathBuf },

    #[error("Invalid manifest {}: {message}", .path.display())]
    InvalidManifest { path: PathBuf, message: String },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error(transparent)]
    Build(#[from] BuilderError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::Config(err.to_string())
    }
}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        CliError::Config(err.to_string())
    }
}

impl CliError {
    /// Get a user-friendly error message with hints
    pub fn user_message(&self) -> String {
        match self {
            CliError::Config(msg) => {
                format!("Configuration error: {}\n\nCheck the [builder] table of your manifest.", msg)
            }
            CliError::ManifestNotFound { path } => {
                format!(
                    "Manifest not found: {}\n\nRun 'kbb init' to create one.",
                    path.display()
                )
            }
            CliError::ManifestExists { path } => {
                format!(
                    "Manifest already exists: {}\n\nUse 'kbb init --force' to overwrite it.",
                    path.display()
                )
            }
            CliError::InvalidManifest { path, message } => {
                format!("Invalid manifest {}:\n  {}", path.display(), message)
            }
            CliError::InvalidArgument { message } => {
                format!("Invalid argument: {}\n\nRun 'kbb --help' for usage information.", message)
            }
            CliError::Build(BuilderError::ConflictDetected { conflicts }) => {
                let mut msg = format!(
                    "Build aborted: {} conflict(s) with manual keybindings",
                    conflicts.len()
                );
                for conflict in conflicts {
                    msg.push_str(&format!("\n  • {}", conflict));
                }
                msg.push_str("\n\nRemove the manual bindings or change the registered keys.");
                msg
            }
            CliError::Build(err) => format!("Build failed: {}", err),
            CliError::Io(e) => format!("File operation failed: {}", e),
        }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Config(_)
            | CliError::ManifestNotFound { .. }
            | CliError::InvalidManifest { .. }
            | CliError::Build(BuilderError::ConfigInvalid(_)) => EXIT_CONFIG,
            _ => EXIT_FAILURE,
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
