//! Core data models for keybinding generation

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::BuilderError;

/// How a registered key treats the editor's default bindings for the same key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KeyHandlingMode {
    /// Disable every default bound to the key, then add the custom commands
    ClearDefault,
    /// Add the custom commands alongside the defaults
    PreserveDefault,
    /// Disable the defaults because the custom commands replace them
    OverrideDefault,
}

impl KeyHandlingMode {
    /// Whether this mode emits disable records for default commands
    pub fn disables_defaults(&self) -> bool {
        matches!(
            self,
            KeyHandlingMode::ClearDefault | KeyHandlingMode::OverrideDefault
        )
    }
}

impl fmt::Display for KeyHandlingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyHandlingMode::ClearDefault => write!(f, "clearDefault"),
            KeyHandlingMode::PreserveDefault => write!(f, "preserveDefault"),
            KeyHandlingMode::OverrideDefault => write!(f, "overrideDefault"),
        }
    }
}

impl FromStr for KeyHandlingMode {
    type Err = BuilderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_'], "").as_str() {
            "cleardefault" | "clear" => Ok(KeyHandlingMode::ClearDefault),
            "preservedefault" | "preserve" => Ok(KeyHandlingMode::PreserveDefault),
            "overridedefault" | "override" => Ok(KeyHandlingMode::OverrideDefault),
            _ => Err(BuilderError::InvalidMode {
                mode: s.to_string(),
            }),
        }
    }
}

/// Keeps an explicit `null` as `Some(Value::Null)` so documents round-trip
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// A command registered for a key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub args: Option<Value>,
}

impl Command {
    /// Create a command with no guard and no arguments
    pub fn new(name: impl Into<String>) -> Self {
        Command {
            name: name.into(),
            when: None,
            args: None,
        }
    }

    /// Create a command from a name and its options
    pub fn with_options(name: impl Into<String>, options: CommandOptions) -> Self {
        Command {
            name: name.into(),
            when: options.when,
            args: options.args,
        }
    }

    /// Render the command name, annotated with its guard when present
    pub fn describe(&self) -> String {
        describe_command(&self.name, self.when.as_deref())
    }
}

pub(crate) fn describe_command(name: &str, when: Option<&str>) -> String {
    match when {
        Some(when) => format!("{} (when: {})", name, when),
        None => name.to_string(),
    }
}

/// Optional guard and arguments for a `command(..)` call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandOptions {
    pub when: Option<String>,
    pub args: Option<Value>,
}

impl CommandOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the guard ("when") expression
    pub fn when(mut self, when: impl Into<String>) -> Self {
        self.when = Some(when.into());
        self
    }

    /// Set the argument payload
    pub fn args(mut self, args: Value) -> Self {
        self.args = Some(args);
        self
    }
}

/// A key committed to the registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisteredKey {
    /// Key text as the caller wrote it
    pub key: String,
    pub mode: KeyHandlingMode,
    pub commands: Vec<Command>,
}

/// A single entry of an editor keybindings file
///
/// Used for the default bindings, the user's manual bindings, and the
/// generated output. A command prefixed with `-` disables that command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyBinding {
    pub key: String,
    pub command: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub args: Option<Value>,
}

impl KeyBinding {
    /// Create a binding with no guard and no arguments
    pub fn new(key: impl Into<String>, command: impl Into<String>) -> Self {
        KeyBinding {
            key: key.into(),
            command: command.into(),
            when: None,
            args: None,
        }
    }

    /// Set the guard expression
    pub fn with_when(mut self, when: impl Into<String>) -> Self {
        self.when = Some(when.into());
        self
    }

    /// Set the argument payload
    pub fn with_args(mut self, args: Value) -> Self {
        self.args = Some(args);
        self
    }

    /// Binding that removes `command` from `key`
    pub fn disable(key: impl Into<String>, command: &str) -> Self {
        KeyBinding::new(key, format!("-{}", command))
    }

    /// Binding that attaches a registered command to `key`
    pub fn from_command(key: impl Into<String>, command: &Command) -> Self {
        KeyBinding {
            key: key.into(),
            command: command.name.clone(),
            when: command.when.clone(),
            args: command.args.clone(),
        }
    }

    /// Whether this binding removes a command rather than adding one
    pub fn is_disable(&self) -> bool {
        self.command.starts_with('-')
    }
}

/// A true conflict between a registered key and a manual binding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictInfo {
    /// Key text as written in the manual binding
    pub key: String,
    pub manual_command: String,
    pub builder_command: String,
}

impl fmt::Display for ConflictInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: manual '{}' vs builder '{}'",
            self.key, self.manual_command, self.builder_command
        )
    }
}

/// Everything a build would write, computed without touching the output file
#[derive(Debug, Clone, PartialEq)]
pub struct BuildPlan {
    pub keybindings: Vec<KeyBinding>,
    pub keybindings_count: usize,
    pub preserved_count: usize,
    pub output_path: PathBuf,
    pub warnings: Vec<String>,
}

/// Summary of a successful build
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildSuccess {
    /// Number of registered keys
    pub keybindings_count: usize,
    /// Number of manual bindings carried into the output
    pub preserved_count: usize,
    pub output_path: PathBuf,
    pub warnings: Vec<String>,
}

impl From<BuildPlan> for BuildSuccess {
    fn from(plan: BuildPlan) -> Self {
        BuildSuccess {
            keybindings_count: plan.keybindings_count,
            preserved_count: plan.preserved_count,
            output_path: plan.output_path,
            warnings: plan.warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mode_from_str() {
        assert_eq!(
            "clearDefault".parse::<KeyHandlingMode>().unwrap(),
            KeyHandlingMode::ClearDefault
        );
        assert_eq!(
            "preserve-default".parse::<KeyHandlingMode>().unwrap(),
            KeyHandlingMode::PreserveDefault
        );
        assert_eq!(
            "override".parse::<KeyHandlingMode>().unwrap(),
            KeyHandlingMode::OverrideDefault
        );
        assert!(matches!(
            "replace".parse::<KeyHandlingMode>(),
            Err(BuilderError::InvalidMode { mode }) if mode == "replace"
        ));
    }

    #[test]
    fn test_mode_serde_camel_case() {
        let json = serde_json::to_string(&KeyHandlingMode::OverrideDefault).unwrap();
        assert_eq!(json, "\"overrideDefault\"");
        let mode: KeyHandlingMode = serde_json::from_str("\"clearDefault\"").unwrap();
        assert_eq!(mode, KeyHandlingMode::ClearDefault);
    }

    #[test]
    fn test_mode_disables_defaults() {
        assert!(KeyHandlingMode::ClearDefault.disables_defaults());
        assert!(KeyHandlingMode::OverrideDefault.disables_defaults());
        assert!(!KeyHandlingMode::PreserveDefault.disables_defaults());
    }

    #[test]
    fn test_command_describe() {
        assert_eq!(Command::new("editor.save").describe(), "editor.save");
        let cmd = Command::with_options("editor.save", CommandOptions::new().when("editorFocus"));
        assert_eq!(cmd.describe(), "editor.save (when: editorFocus)");
    }

    #[test]
    fn test_keybinding_skips_absent_fields() {
        let kb = KeyBinding::new("ctrl+p", "workbench.action.quickOpen");
        let json = serde_json::to_value(&kb).unwrap();
        assert_eq!(
            json,
            json!({"key": "ctrl+p", "command": "workbench.action.quickOpen"})
        );
    }

    #[test]
    fn test_keybinding_keeps_explicit_null_args() {
        let kb: KeyBinding =
            serde_json::from_value(json!({"key": "a", "command": "b", "args": null})).unwrap();
        assert_eq!(kb.args, Some(Value::Null));
        let back = serde_json::to_value(&kb).unwrap();
        assert_eq!(back, json!({"key": "a", "command": "b", "args": null}));
    }

    #[test]
    fn test_disable_binding() {
        let kb = KeyBinding::disable("ctrl+p", "workbench.action.quickOpen");
        assert_eq!(kb.command, "-workbench.action.quickOpen");
        assert!(kb.is_disable());
        assert!(kb.when.is_none());
        assert!(kb.args.is_none());
    }

    #[test]
    fn test_conflict_display() {
        let conflict = ConflictInfo {
            key: "ctrl+p".to_string(),
            manual_command: "Y".to_string(),
            builder_command: "X (when: a)".to_string(),
        };
        assert_eq!(conflict.to_string(), "ctrl+p: manual 'Y' vs builder 'X (when: a)'");
    }
}
