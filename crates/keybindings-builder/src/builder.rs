//! Registration API
//!
//! Keys are registered in two phases: a [`PendingKey`] collects the key,
//! its mode and its commands, then `register` validates and commits it.
//!
//! ```no_run
//! use keybindings_builder::{create_builder, BuilderConfig, CommandOptions, KeyHandlingMode};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let mut builder = create_builder(BuilderConfig::new("."))?;
//! builder
//!     .key("ctrl+p", KeyHandlingMode::ClearDefault)?
//!     .command("myExtension.quickOpen", CommandOptions::new().when("editorTextFocus"))?
//!     .register()?;
//!
//! let summary = builder.build().await?;
//! println!("wrote {}", summary.output_path.display());
//! # Ok(())
//! # }
//! ```

use crate::config::BuilderConfig;
use crate::error::{BuilderError, ConfigError, Result};
use crate::models::{
    BuildPlan, BuildSuccess, Command, CommandOptions, KeyHandlingMode, RegisteredKey,
};
use crate::registry::KeyRegistry;

/// A key declared but not yet committed
#[derive(Debug, Clone, PartialEq)]
pub struct PendingKey {
    key: String,
    mode: KeyHandlingMode,
    commands: Vec<Command>,
}

impl PendingKey {
    /// Start collecting commands for `key`; nothing is validated yet
    pub fn new(key: impl Into<String>, mode: KeyHandlingMode) -> Self {
        PendingKey {
            key: key.into(),
            mode,
            commands: Vec::new(),
        }
    }

    /// Append a command
    pub fn command(mut self, name: impl Into<String>, options: CommandOptions) -> Self {
        self.push_command(name, options);
        self
    }

    fn push_command(&mut self, name: impl Into<String>, options: CommandOptions) {
        self.commands.push(Command::with_options(name, options));
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn mode(&self) -> KeyHandlingMode {
        self.mode
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }
}

impl From<PendingKey> for RegisteredKey {
    fn from(pending: PendingKey) -> Self {
        RegisteredKey {
            key: pending.key,
            mode: pending.mode,
            commands: pending.commands,
        }
    }
}

/// Validate configuration and create a builder
pub fn create_builder(
    config: BuilderConfig,
) -> std::result::Result<KeybindingsBuilder, ConfigError> {
    config.validate()?;
    Ok(KeybindingsBuilder::new(config))
}

/// Accumulates key registrations for one build
#[derive(Debug, Clone)]
pub struct KeybindingsBuilder {
    config: BuilderConfig,
    registry: KeyRegistry,
    active: Option<PendingKey>,
}

impl KeybindingsBuilder {
    /// Create a builder without validating the configuration
    ///
    /// Prefer [`create_builder`]; invalid configuration surfaces later as
    /// build errors.
    pub fn new(config: BuilderConfig) -> Self {
        KeybindingsBuilder {
            config,
            registry: KeyRegistry::new(),
            active: None,
        }
    }

    /// Declare the active key, discarding any key not yet registered
    pub fn key(
        &mut self,
        combination: impl Into<String>,
        mode: KeyHandlingMode,
    ) -> Result<&mut Self> {
        let pending = PendingKey::new(combination, mode);
        if let Some(discarded) = self.active.replace(pending) {
            tracing::debug!("Discarding unregistered key {}", discarded.key);
        }
        Ok(self)
    }

    /// Add a command to the active key
    pub fn command(
        &mut self,
        name: impl Into<String>,
        options: CommandOptions,
    ) -> Result<&mut Self> {
        let active = self
            .active
            .as_mut()
            .ok_or(BuilderError::NoKeyActive { operation: "command" })?;
        active.push_command(name, options);
        Ok(self)
    }

    /// Commit the active key
    ///
    /// On failure the active key stays in place and nothing is registered.
    pub fn register(&mut self) -> Result<&mut Self> {
        let pending = self
            .active
            .clone()
            .ok_or(BuilderError::NoKeyActive {
                operation: "register",
            })?;
        self.registry.register(pending.into())?;
        self.active = None;
        Ok(self)
    }

    /// Commit a key collected outside the builder
    pub fn register_pending(&mut self, pending: PendingKey) -> Result<&mut Self> {
        self.registry.register(pending.into())?;
        Ok(self)
    }

    /// The key declared with `key` and not yet registered
    pub fn active_key(&self) -> Option<&PendingKey> {
        self.active.as_ref()
    }

    /// Registered keys, in registration order
    pub fn registered_keys(&self) -> &KeyRegistry {
        &self.registry
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Compute the output without writing it
    pub async fn plan(&self) -> Result<BuildPlan> {
        crate::engine::plan_keybindings(&self.config, &self.registry).await
    }

    /// Compute and write the output file
    pub async fn build(&self) -> Result<BuildSuccess> {
        crate::engine::build_keybindings(&self.config, &self.registry).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> KeybindingsBuilder {
        create_builder(BuilderConfig::new(".")).unwrap()
    }

    #[test]
    fn test_create_builder_rejects_invalid_config() {
        assert!(matches!(
            create_builder(BuilderConfig::new("")),
            Err(ConfigError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_unvalidated_builder_fails_at_build() {
        let builder = KeybindingsBuilder::new(BuilderConfig::new(""));
        let err = builder.build().await.unwrap_err();
        assert!(matches!(err, BuilderError::ConfigInvalid(ConfigError::Validation(_))));
    }

    #[test]
    fn test_fluent_registration() {
        let mut builder = builder();
        builder
            .key("ctrl+p", KeyHandlingMode::ClearDefault)
            .unwrap()
            .command("a", CommandOptions::new())
            .unwrap()
            .command("b", CommandOptions::new().when("editorFocus"))
            .unwrap()
            .register()
            .unwrap();

        let entry = builder.registered_keys().get("ctrl+p").unwrap();
        assert_eq!(entry.commands.len(), 2);
        assert_eq!(entry.commands[1].when.as_deref(), Some("editorFocus"));
        assert!(builder.active_key().is_none());
    }

    #[test]
    fn test_command_without_key() {
        let mut builder = builder();
        assert!(matches!(
            builder.command("a", CommandOptions::new()),
            Err(BuilderError::NoKeyActive { operation: "command" })
        ));
    }

    #[test]
    fn test_register_without_key() {
        let mut builder = builder();
        assert!(matches!(
            builder.register(),
            Err(BuilderError::NoKeyActive { operation: "register" })
        ));
    }

    #[test]
    fn test_register_clears_active_key() {
        let mut builder = builder();
        builder
            .key("ctrl+a", KeyHandlingMode::PreserveDefault)
            .unwrap()
            .register()
            .unwrap();
        assert!(matches!(
            builder.register(),
            Err(BuilderError::NoKeyActive { .. })
        ));
    }

    #[test]
    fn test_invalid_key_rejected_at_commit() {
        let mut builder = builder();
        builder
            .key("ctrl+zzz", KeyHandlingMode::ClearDefault)
            .unwrap()
            .command("a", CommandOptions::new())
            .unwrap();
        assert!(builder.active_key().is_some());

        let err = builder.register().unwrap_err();
        assert!(matches!(
            err,
            BuilderError::InvalidKeyFormat { ref reason, .. } if reason == "Invalid key part: zzz"
        ));
        assert!(builder.registered_keys().is_empty());
        assert_eq!(builder.active_key().unwrap().key(), "ctrl+zzz");
    }

    #[test]
    fn test_duplicate_keeps_original() {
        let mut builder = builder();
        let first = PendingKey::new("ctrl+p", KeyHandlingMode::ClearDefault)
            .command("a", CommandOptions::new());
        builder.register_pending(first).unwrap();

        let second = PendingKey::new("P+CTRL", KeyHandlingMode::PreserveDefault)
            .command("b", CommandOptions::new());
        let err = builder.register_pending(second).unwrap_err();
        assert!(matches!(err, BuilderError::DuplicateKey { existing_index: 0, .. }));

        let entry = builder.registered_keys().get("ctrl+p").unwrap();
        assert_eq!(entry.mode, KeyHandlingMode::ClearDefault);
        assert_eq!(entry.commands[0].name, "a");
    }

    #[test]
    fn test_key_replaces_uncommitted_key() {
        let mut builder = builder();
        builder
            .key("ctrl+a", KeyHandlingMode::ClearDefault)
            .unwrap()
            .command("a", CommandOptions::new())
            .unwrap();
        builder
            .key("ctrl+b", KeyHandlingMode::ClearDefault)
            .unwrap()
            .register()
            .unwrap();

        assert_eq!(builder.registered_keys().len(), 1);
        let entry = builder.registered_keys().get("ctrl+b").unwrap();
        assert!(entry.commands.is_empty());
    }
}
