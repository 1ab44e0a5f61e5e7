//! Keybinding document parsers for JSONC and strict JSON

use std::path::Path;

use jsonc_parser::ParseOptions;
use serde_json::Value;

use crate::error::{BuilderError, Result};
use crate::models::KeyBinding;

const INLINE_SOURCE: &str = "inline";

/// Trait for parsing keybinding documents
pub trait KeybindingParser: Send + Sync {
    /// Parse a document into generic JSON
    fn parse_value(&self, content: &str, path: &Path) -> Result<Value>;

    /// Parse a document and validate it as a keybinding list
    fn parse(&self, content: &str, path: &Path) -> Result<Vec<KeyBinding>> {
        let value = self.parse_value(content, path)?;
        validate_keybindings(value, path)
    }
}

/// Comment-tolerant parser; accepts `//` and `/* */` comments and trailing commas
pub struct JsoncKeybindingParser;

impl KeybindingParser for JsoncKeybindingParser {
    fn parse_value(&self, content: &str, path: &Path) -> Result<Value> {
        let parsed = jsonc_parser::parse_to_serde_value(content, &ParseOptions::default())
            .map_err(|e| BuilderError::JsoncParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        parsed.ok_or_else(|| BuilderError::JsoncParse {
            path: path.to_path_buf(),
            message: "Document is empty".to_string(),
        })
    }
}

/// Strict JSON parser
pub struct JsonKeybindingParser;

impl KeybindingParser for JsonKeybindingParser {
    fn parse_value(&self, content: &str, path: &Path) -> Result<Value> {
        serde_json::from_str(content).map_err(|source| BuilderError::JsonParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Parse JSONC content that did not come from a file
pub fn parse_jsonc(content: &str) -> Result<Value> {
    JsoncKeybindingParser.parse_value(content, Path::new(INLINE_SOURCE))
}

/// Check that a parsed document is a list of keybindings
pub fn validate_keybindings(value: Value, path: &Path) -> Result<Vec<KeyBinding>> {
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(BuilderError::Validation {
                path: path.to_path_buf(),
                details: format!("expected an array of keybindings, found {}", kind(&other)),
            })
        }
    };

    let mut keybindings = Vec::with_capacity(items.len());
    for (idx, item) in items.into_iter().enumerate() {
        let keybinding: KeyBinding =
            serde_json::from_value(item).map_err(|e| BuilderError::Validation {
                path: path.to_path_buf(),
                details: format!("entry {}: {}", idx, e),
            })?;
        keybindings.push(keybinding);
    }

    Ok(keybindings)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
