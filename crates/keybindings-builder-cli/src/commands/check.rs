// Dry-run a build without writing the output file

use std::path::PathBuf;

use async_trait::async_trait;
use keybindings_builder::persistence::render_keybindings;

use super::{prepare_builder, Command};
use crate::error::CliResult;
use crate::output::{print_warnings, OutputStyle};

/// Plan a build and report what would be written
pub struct CheckCommand {
    pub manifest: PathBuf,
    /// Dump the planned keybindings to stdout
    pub print: bool,
}

impl CheckCommand {
    pub fn new(manifest: PathBuf) -> Self {
        Self {
            manifest,
            print: false,
        }
    }

    pub fn with_print(mut self, print: bool) -> Self {
        self.print = print;
        self
    }
}

#[async_trait]
impl Command for CheckCommand {
    async fn execute(&self) -> CliResult<()> {
        let builder = prepare_builder(&self.manifest)?;
        let plan = builder.plan().await?;

        print_warnings(&plan.warnings);

        if self.print {
            print!("{}", render_keybindings(&plan.keybindings)?);
            return Ok(());
        }

        let style = OutputStyle::default();
        println!(
            "{}",
            style.success(&format!(
                "{} keybinding(s) would be written to {}",
                plan.keybindings.len(),
                style.code(&plan.output_path.display().to_string())
            ))
        );
        Ok(())
    }
}
