//! Registration store for builder-declared keys

use std::collections::HashMap;

use crate::{
    error::BuilderError,
    models::RegisteredKey,
    normalize::normalize_key,
    validator::validate_key_format,
};

/// Insertion-ordered store of registered keys, indexed by normalized key
#[derive(Debug, Clone, Default)]
pub struct KeyRegistry {
    /// Entries in registration order, paired with their normalized key
    entries: Vec<(String, RegisteredKey)>,
    /// Map from normalized key to position in `entries`
    by_key: HashMap<String, usize>,
}

impl KeyRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit a key, returning its registration index
    ///
    /// The key format and command names are validated and the normalized key
    /// must not already be present. Nothing is stored when any check fails.
    pub fn register(&mut self, entry: RegisteredKey) -> Result<usize, BuilderError> {
        validate_key_format(&entry.key)?;

        if entry.commands.iter().any(|cmd| cmd.name.trim().is_empty()) {
            return Err(BuilderError::InvalidCommand {
                key: entry.key,
                reason: "Command name cannot be empty".to_string(),
            });
        }

        let normalized = normalize_key(&entry.key);
        if let Some(&existing_index) = self.by_key.get(&normalized) {
            return Err(BuilderError::DuplicateKey {
                key: entry.key,
                normalized,
                existing_index,
            });
        }

        let index = self.entries.len();
        tracing::debug!(
            "Registered key {} ({}) with {} command(s)",
            entry.key,
            entry.mode,
            entry.commands.len()
        );
        self.by_key.insert(normalized.clone(), index);
        self.entries.push((normalized, entry));
        Ok(index)
    }

    /// Lookup a registered key by any equivalent spelling
    pub fn get(&self, key: &str) -> Option<&RegisteredKey> {
        self.get_normalized(&normalize_key(key))
    }

    /// Lookup a registered key by its normalized form
    pub fn get_normalized(&self, normalized: &str) -> Option<&RegisteredKey> {
        self.by_key
            .get(normalized)
            .map(|&index| &self.entries[index].1)
    }

    /// Whether any registered key is equivalent to `key`
    pub fn contains(&self, key: &str) -> bool {
        self.by_key.contains_key(&normalize_key(key))
    }

    /// Registration index of the key equivalent to `key`
    pub fn position(&self, key: &str) -> Option<usize> {
        self.by_key.get(&normalize_key(key)).copied()
    }

    /// Iterate `(normalized key, entry)` pairs in registration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RegisteredKey)> {
        self.entries
            .iter()
            .map(|(normalized, entry)| (normalized.as_str(), entry))
    }

    /// Get number of registered keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
