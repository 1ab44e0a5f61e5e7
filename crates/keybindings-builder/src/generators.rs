//! Binding generators for each key handling mode

use crate::models::{Command, KeyBinding, KeyHandlingMode};

/// Turns one registered key into the records written to the output file
pub trait BindingGenerator: Send + Sync {
    /// Generate output records for `key`
    ///
    /// `default_commands` are the default bindings' command names for the
    /// same key, in default-file order; `commands` are the registered ones.
    fn generate(
        &self,
        key: &str,
        default_commands: &[String],
        commands: &[Command],
    ) -> Vec<KeyBinding>;
}

/// Disables every default, then adds the custom commands
pub struct ClearDefaultGenerator;

/// Adds the custom commands and leaves the defaults active
pub struct PreserveDefaultGenerator;

/// Disables the defaults that the custom commands replace
///
/// Emits the same records as [`ClearDefaultGenerator`]; the two modes differ
/// only in intent.
pub struct OverrideDefaultGenerator;

fn disable_bindings<'a>(
    key: &'a str,
    default_commands: &'a [String],
) -> impl Iterator<Item = KeyBinding> + 'a {
    default_commands
        .iter()
        .map(move |cmd| KeyBinding::disable(key, cmd))
}

fn custom_bindings<'a>(
    key: &'a str,
    commands: &'a [Command],
) -> impl Iterator<Item = KeyBinding> + 'a {
    commands
        .iter()
        .map(move |cmd| KeyBinding::from_command(key, cmd))
}

impl BindingGenerator for ClearDefaultGenerator {
    fn generate(
        &self,
        key: &str,
        default_commands: &[String],
        commands: &[Command],
    ) -> Vec<KeyBinding> {
        disable_bindings(key, default_commands)
            .chain(custom_bindings(key, commands))
            .collect()
    }
}

impl BindingGenerator for PreserveDefaultGenerator {
    fn generate(
        &self,
        key: &str,
        _default_commands: &[String],
        commands: &[Command],
    ) -> Vec<KeyBinding> {
        custom_bindings(key, commands).collect()
    }
}

impl BindingGenerator for OverrideDefaultGenerator {
    fn generate(
        &self,
        key: &str,
        default_commands: &[String],
        commands: &[Command],
    ) -> Vec<KeyBinding> {
        disable_bindings(key, default_commands)
            .chain(custom_bindings(key, commands))
            .collect()
    }
}

impl KeyHandlingMode {
    /// Generator implementing this mode
    pub fn generator(&self) -> &'static dyn BindingGenerator {
        match self {
            KeyHandlingMode::ClearDefault => &ClearDefaultGenerator,
            KeyHandlingMode::PreserveDefault => &PreserveDefaultGenerator,
            KeyHandlingMode::OverrideDefault => &OverrideDefaultGenerator,
        }
    }
}
