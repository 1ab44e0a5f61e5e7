//! Key combination format validation

use crate::error::BuilderError;
use crate::normalize::split_chords;

const MODIFIERS: &[&str] = &["cmd", "ctrl", "alt", "shift", "meta", "win", "option"];

const SPECIAL_KEYS: &[&str] = &[
    "escape",
    "enter",
    "tab",
    "space",
    "backspace",
    "delete",
    "up",
    "down",
    "left",
    "right",
    "home",
    "end",
    "pageup",
    "pagedown",
    "insert",
    "pause",
    "capslock",
    "numlock",
    "scrolllock",
];

fn is_function_key(part: &str) -> bool {
    (1..=12).any(|n| part == format!("f{}", n))
}

/// Whether a single `+`-separated token is an accepted key name
fn is_valid_part(part: &str) -> bool {
    let lower = part.to_lowercase();
    MODIFIERS.contains(&lower.as_str())
        || SPECIAL_KEYS.contains(&lower.as_str())
        || is_function_key(&lower)
        || part.chars().count() == 1
        || lower.starts_with("numpad")
}

/// Validate a key combination, including space-separated chord sequences
pub fn validate_key_format(key: &str) -> Result<(), BuilderError> {
    if key.split('+').any(|part| part.trim().is_empty()) {
        return Err(BuilderError::InvalidKeyFormat {
            key: key.to_string(),
            reason: "Key parts cannot be empty".to_string(),
        });
    }

    for chord in split_chords(key) {
        if let Some(part) = chord.split('+').find(|part| !is_valid_part(part)) {
            return Err(BuilderError::InvalidKeyFormat {
                key: key.to_string(),
                reason: format!("Invalid key part: {}", part),
            });
        }
    }

    Ok(())
}
