// Write a sample manifest

use std::path::PathBuf;

use async_trait::async_trait;

use super::Command;
use crate::error::{CliError, CliResult};
use crate::manifest::Manifest;
use crate::output::print_success;

/// Create a sample `kbb.toml`
pub struct InitCommand {
    pub manifest: PathBuf,
    pub force: bool,
}

impl InitCommand {
    pub fn new(manifest: PathBuf) -> Self {
        Self {
            manifest,
            force: false,
        }
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }
}

#[async_trait]
impl Command for InitCommand {
    async fn execute(&self) -> CliResult<()> {
        if self.manifest.exists() && !self.force {
            return Err(CliError::ManifestExists {
                path: self.manifest.clone(),
            });
        }

        let content = Manifest::sample().to_toml()?;
        tokio::fs::write(&self.manifest, content).await?;
        tracing::debug!("Wrote sample manifest to {}", self.manifest.display());

        print_success(&format!("Created {}", self.manifest.display()));
        Ok(())
    }
}
