//! Declarative editor keybinding generation
//!
//! This crate builds an editor keybindings file from programmatic
//! registrations with:
//! - Order- and case-insensitive key normalization and format validation
//! - Per-key policies for clearing, preserving or overriding default bindings
//! - Conflict detection against the user's existing manual bindings
//! - Preservation of manual bindings the builder does not claim
//! - JSONC defaults loading and JSON output

pub mod builder;
pub mod config;
pub mod conflict;
pub mod engine;
pub mod error;
pub mod generators;
pub mod merge;
pub mod models;
pub mod normalize;
pub mod parser;
pub mod persistence;
pub mod registry;
pub mod validator;

// Re-export public types
pub use builder::{create_builder, KeybindingsBuilder, PendingKey};
pub use config::{BuilderConfig, DEFAULT_KEYBINDINGS_FILE, DEFAULT_OUTPUT_FILE};
pub use conflict::ConflictDetector;
pub use engine::{build_keybindings, plan_keybindings};
pub use error::{BuilderError, ConfigError, Result};
pub use generators::{
    BindingGenerator, ClearDefaultGenerator, OverrideDefaultGenerator, PreserveDefaultGenerator,
};
pub use merge::KeybindingMerger;
pub use models::{
    BuildPlan, BuildSuccess, Command, CommandOptions, ConflictInfo, KeyBinding, KeyHandlingMode,
    RegisteredKey,
};
pub use normalize::{are_keys_equivalent, normalize_key};
pub use parser::{
    parse_jsonc, validate_keybindings, JsonKeybindingParser, JsoncKeybindingParser,
    KeybindingParser,
};
pub use persistence::{load_current_keybindings, load_default_keybindings, write_keybindings};
pub use registry::KeyRegistry;
pub use validator::validate_key_format;
