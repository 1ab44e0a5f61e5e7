//! Loading and writing keybinding files
//!
//! # Files
//!
//! ```text
//! <dirname>/
//! ├── default-keybindings.jsonc     # Editor defaults (JSONC, optional)
//! └── keybindings-generated.json    # Generated output
//! <current_keybinding_path>         # User's manual keybindings (strict JSON, optional)
//! ```
//!
//! The generated file is a pretty-printed JSON array:
//!
//! ```json
//! [
//!   {
//!     "key": "ctrl+p",
//!     "command": "-workbench.action.quickOpen"
//!   },
//!   {
//!     "key": "ctrl+p",
//!     "command": "myExtension.quickOpen",
//!     "when": "editorTextFocus"
//!   }
//! ]
//! ```

use std::io::ErrorKind;
use std::path::Path;

use crate::error::{BuilderError, Result};
use crate::models::KeyBinding;
use crate::parser::{JsonKeybindingParser, JsoncKeybindingParser, KeybindingParser};

/// Read a source file, distinguishing a missing file from other failures
pub async fn read_source(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path).await.map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            BuilderError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            BuilderError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

/// Load the editor's default keybindings (JSONC)
pub async fn load_default_keybindings(path: &Path) -> Result<Vec<KeyBinding>> {
    let content = read_source(path).await?;
    let keybindings = JsoncKeybindingParser.parse(&content, path)?;
    tracing::debug!(
        "Loaded {} default keybinding(s) from {}",
        keybindings.len(),
        path.display()
    );
    Ok(keybindings)
}

/// Load the user's manual keybindings (strict JSON)
pub async fn load_current_keybindings(path: &Path) -> Result<Vec<KeyBinding>> {
    let content = read_source(path).await?;
    let keybindings = JsonKeybindingParser.parse(&content, path)?;
    tracing::debug!(
        "Loaded {} manual keybinding(s) from {}",
        keybindings.len(),
        path.display()
    );
    Ok(keybindings)
}

/// Render keybindings as the generated file's contents
pub fn render_keybindings(keybindings: &[KeyBinding]) -> Result<String> {
    let mut json = serde_json::to_string_pretty(keybindings).map_err(|e| {
        BuilderError::Serialization(format!("Failed to serialize keybindings: {}", e))
    })?;
    json.push('\n');
    Ok(json)
}

/// Write the generated keybindings file
pub async fn write_keybindings(path: &Path, keybindings: &[KeyBinding]) -> Result<()> {
    let json = render_keybindings(keybindings)?;

    tokio::fs::write(path, json)
        .await
        .map_err(|source| BuilderError::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!("Wrote {} keybinding(s) to {}", keybindings.len(), path.display());
    Ok(())
}
