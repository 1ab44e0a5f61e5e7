//! Builder configuration

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name of the editor's default keybindings, relative to `dirname`
pub const DEFAULT_KEYBINDINGS_FILE: &str = "default-keybindings.jsonc";

/// File name of the generated keybindings, relative to `dirname`
pub const DEFAULT_OUTPUT_FILE: &str = "keybindings-generated.json";

fn default_keybindings_file() -> String {
    DEFAULT_KEYBINDINGS_FILE.to_string()
}

fn default_output_file() -> String {
    DEFAULT_OUTPUT_FILE.to_string()
}

/// Where the builder reads its inputs and writes its output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderConfig {
    /// Directory holding the default keybindings file and the output file
    pub dirname: PathBuf,
    /// The user's manual keybindings file; when set it must exist
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_keybinding_path: Option<PathBuf>,
    #[serde(default = "default_keybindings_file")]
    pub default_keybindings_file: String,
    #[serde(default = "default_output_file")]
    pub output_file: String,
}

impl BuilderConfig {
    /// Create a configuration with default file names
    pub fn new(dirname: impl Into<PathBuf>) -> Self {
        BuilderConfig {
            dirname: dirname.into(),
            current_keybinding_path: None,
            default_keybindings_file: default_keybindings_file(),
            output_file: default_output_file(),
        }
    }

    /// Set the manual keybindings file
    pub fn with_current_keybinding_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.current_keybinding_path = Some(path.into());
        self
    }

    /// Set the default keybindings file name
    pub fn with_default_keybindings_file(mut self, file: impl Into<String>) -> Self {
        self.default_keybindings_file = file.into();
        self
    }

    /// Set the output file name
    pub fn with_output_file(mut self, file: impl Into<String>) -> Self {
        self.output_file = file.into();
        self
    }

    /// Check that all required fields are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dirname.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "dirname cannot be empty".to_string(),
            ));
        }
        if self.default_keybindings_file.trim().is_empty() {
            return Err(ConfigError::Validation(
                "default_keybindings_file cannot be empty".to_string(),
            ));
        }
        if self.output_file.trim().is_empty() {
            return Err(ConfigError::Validation(
                "output_file cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Path of the default keybindings file
    pub fn default_keybindings_path(&self) -> PathBuf {
        self.dirname.join(&self.default_keybindings_file)
    }

    /// Path of the generated keybindings file
    pub fn output_path(&self) -> PathBuf {
        self.dirname.join(&self.output_file)
    }

    /// Path of the manual keybindings file, if one is configured
    ///
    /// An empty path counts as not configured.
    pub fn manual_keybindings_path(&self) -> Option<&Path> {
        self.current_keybinding_path
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }
}
