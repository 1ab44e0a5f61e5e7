//! Error types for keybinding generation

use std::path::PathBuf;

use thiserror::Error;

use crate::models::ConflictInfo;

/// Result type used throughout the builder
pub type Result<T> = std::result::Result<T, BuilderError>;

/// Errors that can occur while validating builder configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

/// Errors that can occur while registering keys or building the keybindings file
///
/// Every variant is terminal for the current build attempt. The one
/// recoverable case, a missing default keybindings file, is handled inside
/// the build and never surfaces as an error.
#[derive(Debug, Error)]
pub enum BuilderError {
    #[error("Configuration error: {0}")]
    ConfigInvalid(#[from] ConfigError),

    #[error("File not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSONC in {}: {message}", .path.display())]
    JsoncParse { path: PathBuf, message: String },

    #[error("Invalid JSON in {}: {source}", .path.display())]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid keybindings document {}: {details}", .path.display())]
    Validation { path: PathBuf, details: String },

    #[error("Key '{key}' ({normalized}) is already registered (registration #{existing_index})")]
    DuplicateKey {
        key: String,
        normalized: String,
        existing_index: usize,
    },

    #[error("{} conflict(s) with manual keybindings", .conflicts.len())]
    ConflictDetected { conflicts: Vec<ConflictInfo> },

    #[error("Invalid key format '{key}': {reason}")]
    InvalidKeyFormat { key: String, reason: String },

    #[error("Invalid command for key '{key}': {reason}")]
    InvalidCommand { key: String, reason: String },

    #[error("Invalid key handling mode: {mode}")]
    InvalidMode { mode: String },

    #[error("No active key for operation '{operation}'")]
    NoKeyActive { operation: &'static str },

    #[error("Failed to write {}: {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl BuilderError {
    /// Conflicts carried by a `ConflictDetected` error, empty otherwise
    pub fn conflicts(&self) -> &[ConflictInfo] {
        match self {
            BuilderError::ConflictDetected { conflicts } => conflicts,
            _ => &[],
        }
    }

    /// Whether this error reports a missing source file
    pub fn is_not_found(&self) -> bool {
        matches!(self, BuilderError::FileNotFound { .. })
    }
}
