// Build the keybindings file from a manifest

use std::path::PathBuf;

use async_trait::async_trait;

use super::{prepare_builder, Command};
use crate::error::CliResult;
use crate::output::{print_warnings, OutputStyle};

/// Register every manifest binding and write the output file
pub struct BuildCommand {
    pub manifest: PathBuf,
}

impl BuildCommand {
    pub fn new(manifest: PathBuf) -> Self {
        Self { manifest }
    }
}

#[async_trait]
impl Command for BuildCommand {
    async fn execute(&self) -> CliResult<()> {
        let builder = prepare_builder(&self.manifest)?;
        let summary = builder.build().await?;

        let style = OutputStyle::default();
        print_warnings(&summary.warnings);
        println!(
            "{}",
            style.success(&format!(
                "Generated {}",
                style.code(&summary.output_path.display().to_string())
            ))
        );
        println!(
            "{}",
            style.key_value("Registered keys", &summary.keybindings_count.to_string())
        );
        println!(
            "{}",
            style.key_value("Preserved manual bindings", &summary.preserved_count.to_string())
        );
        Ok(())
    }
}
