//! Conflict detection between registered keys and manual keybindings

use crate::models::{describe_command, ConflictInfo, KeyBinding, KeyHandlingMode, RegisteredKey};
use crate::normalize::normalize_key;
use crate::registry::KeyRegistry;

/// Detects manual keybindings that a registered key would silently displace
pub struct ConflictDetector;

impl ConflictDetector {
    /// Detect all true conflicts between the registry and the manual bindings
    ///
    /// A manual binding does not conflict with a registered key when a
    /// registered command has the same name (with the same or a different
    /// guard), or when the key clears defaults and the manual binding is
    /// itself a disable record.
    pub fn detect(registry: &KeyRegistry, manual: &[KeyBinding]) -> Vec<ConflictInfo> {
        let mut conflicts = Vec::new();

        for binding in manual {
            let normalized = normalize_key(&binding.key);

            for (registered_key, registered) in registry.iter() {
                if registered_key != normalized {
                    continue;
                }
                if Self::is_exempt(registered, binding) {
                    continue;
                }

                conflicts.push(ConflictInfo {
                    key: binding.key.clone(),
                    manual_command: describe_command(&binding.command, binding.when.as_deref()),
                    builder_command: Self::describe_registered(registered),
                });
            }
        }

        conflicts
    }

    /// Whether a manual binding may coexist with a registered key
    fn is_exempt(registered: &RegisteredKey, binding: &KeyBinding) -> bool {
        // Same name covers both the identical (name, guard) pair and a
        // disjoint activation context.
        if registered
            .commands
            .iter()
            .any(|cmd| cmd.name == binding.command)
        {
            return true;
        }

        registered.mode == KeyHandlingMode::ClearDefault && binding.is_disable()
    }

    /// Comma-joined registered commands, each annotated with its guard
    fn describe_registered(registered: &RegisteredKey) -> String {
        registered
            .commands
            .iter()
            .map(|cmd| cmd.describe())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
