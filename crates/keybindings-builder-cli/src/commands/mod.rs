// Command handlers for kbb

pub mod build;
pub mod check;
pub mod init;
pub mod keys;

pub use build::BuildCommand;
pub use check::CheckCommand;
pub use init::InitCommand;
pub use keys::KeysCommand;

use std::path::Path;

use keybindings_builder::{create_builder, KeybindingsBuilder};

use crate::error::CliResult;
use crate::manifest::Manifest;

/// Trait for command handlers
#[async_trait::async_trait]
pub trait Command: Send + Sync {
    /// Execute the command
    async fn execute(&self) -> CliResult<()>;
}

/// Load a manifest and register its bindings into a fresh builder
pub fn prepare_builder(manifest_path: &Path) -> CliResult<KeybindingsBuilder> {
    let manifest = Manifest::load(manifest_path)?;
    let mut builder = create_builder(manifest.builder.clone())?;
    manifest.register_into(&mut builder)?;
    Ok(builder)
}
