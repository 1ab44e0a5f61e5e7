// Validate key combinations and show their normalized form

use async_trait::async_trait;
use keybindings_builder::{normalize_key, validate_key_format, BuilderError};

use super::Command;
use crate::error::{CliError, CliResult};
use crate::output::OutputStyle;

/// Check each key and print its canonical comparison form
pub struct KeysCommand {
    pub keys: Vec<String>,
}

impl KeysCommand {
    pub fn new(keys: Vec<String>) -> Self {
        Self { keys }
    }

    /// One line per key, and the number of invalid keys
    pub fn report(&self, style: &OutputStyle) -> (Vec<String>, usize) {
        let mut invalid = 0;
        let lines: Vec<String> = self
            .keys
            .iter()
            .map(|key| match validate_key_format(key) {
                Ok(()) => style.success(&format!("{} → {}", key, style.code(&normalize_key(key)))),
                Err(BuilderError::InvalidKeyFormat { reason, .. }) => {
                    invalid += 1;
                    style.error(&format!("{}: {}", key, reason))
                }
                Err(other) => {
                    invalid += 1;
                    style.error(&format!("{}: {}", key, other))
                }
            })
            .collect();
        (lines, invalid)
    }
}

#[async_trait]
impl Command for KeysCommand {
    async fn execute(&self) -> CliResult<()> {
        let (lines, invalid) = self.report(&OutputStyle::default());
        for line in lines {
            println!("{}", line);
        }

        if invalid > 0 {
            return Err(CliError::InvalidArgument {
                message: format!("{} of {} key(s) are invalid", invalid, self.keys.len()),
            });
        }
        Ok(())
    }
}
