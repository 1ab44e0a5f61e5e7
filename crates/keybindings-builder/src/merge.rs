//! Assembly of the final keybinding list
//!
//! Registered keys are emitted first, in registration order, each through the
//! generator for its mode. Manual bindings whose key was never registered
//! follow, in their original order.

use crate::models::KeyBinding;
use crate::normalize::normalize_key;
use crate::registry::KeyRegistry;

/// Merges registered keys with default and manual keybindings
pub struct KeybindingMerger;

impl KeybindingMerger {
    /// Default command names bound to a key equivalent to `normalized`
    pub fn default_commands_for(normalized: &str, defaults: &[KeyBinding]) -> Vec<String> {
        defaults
            .iter()
            .filter(|kb| normalize_key(&kb.key) == normalized)
            .map(|kb| kb.command.clone())
            .collect()
    }

    /// Manual bindings whose key no registered key claims, in original order
    pub fn unclaimed<'a>(registry: &KeyRegistry, manual: &'a [KeyBinding]) -> Vec<&'a KeyBinding> {
        manual
            .iter()
            .filter(|kb| !registry.contains(&kb.key))
            .collect()
    }

    /// One warning per manual binding carried over untouched
    pub fn preservation_warnings(registry: &KeyRegistry, manual: &[KeyBinding]) -> Vec<String> {
        Self::unclaimed(registry, manual)
            .into_iter()
            .map(|kb| format!("Preserving manual keybinding: {} -> {}", kb.key, kb.command))
            .collect()
    }

    /// Build the complete output list
    pub fn merge(
        registry: &KeyRegistry,
        defaults: &[KeyBinding],
        manual: &[KeyBinding],
    ) -> Vec<KeyBinding> {
        let mut merged = Vec::new();

        for (normalized, registered) in registry.iter() {
            let default_commands = Self::default_commands_for(normalized, defaults);
            let emitted = registered.mode.generator().generate(
                &registered.key,
                &default_commands,
                &registered.commands,
            );
            tracing::debug!(
                "Generated {} binding(s) for {} ({}, {} default(s))",
                emitted.len(),
                registered.key,
                registered.mode,
                default_commands.len()
            );
            merged.extend(emitted);
        }

        merged.extend(Self::unclaimed(registry, manual).into_iter().cloned());
        merged
    }
}
