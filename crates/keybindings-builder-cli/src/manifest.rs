// Declarative keybinding manifest (kbb.toml)
//
// [builder]
// dirname = "."
// current_keybinding_path = "keybindings.json"
//
// [[bindings]]
// key = "ctrl+p"
// mode = "clearDefault"
// commands = [{ name = "workbench.action.quickOpen", when = "editorTextFocus" }]

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use keybindings_builder::{
    BuilderConfig, BuilderError, Command, CommandOptions, KeyHandlingMode, KeybindingsBuilder,
    PendingKey,
};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{CliError, CliResult};

/// Manifest file name used when `--manifest` is not given
pub const DEFAULT_MANIFEST: &str = "kbb.toml";

/// Environment prefix for `[builder]` overrides, e.g. `KBB__BUILDER__OUTPUT_FILE`
pub const ENV_PREFIX: &str = "KBB";

const ENV_SEPARATOR: &str = "__";

fn deserialize_mode<'de, D>(deserializer: D) -> Result<KeyHandlingMode, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
}

/// One key declared in the manifest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BindingSpec {
    pub key: String,
    #[serde(deserialize_with = "deserialize_mode")]
    pub mode: KeyHandlingMode,
    #[serde(default)]
    pub commands: Vec<Command>,
}

impl BindingSpec {
    /// Pending key carrying this binding's commands
    pub fn to_pending(&self) -> PendingKey {
        self.commands
            .iter()
            .fold(PendingKey::new(&self.key, self.mode), |pending, cmd| {
                pending.command(
                    &cmd.name,
                    CommandOptions {
                        when: cmd.when.clone(),
                        args: cmd.args.clone(),
                    },
                )
            })
    }
}

#[derive(Debug, Default, Deserialize)]
struct BindingsTable {
    #[serde(default)]
    bindings: Vec<BindingSpec>,
}

/// Parsed manifest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub builder: BuilderConfig,
    #[serde(default)]
    pub bindings: Vec<BindingSpec>,
}

impl Manifest {
    /// Load a manifest, apply environment overrides and resolve relative paths
    pub fn load(path: &Path) -> CliResult<Self> {
        if !path.is_file() {
            return Err(CliError::ManifestNotFound {
                path: path.to_path_buf(),
            });
        }

        let settings = Config::builder()
            .add_source(File::from(path.to_path_buf()).format(FileFormat::Toml))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR),
            )
            .build()?;
        let builder: BuilderConfig = settings.get("builder")?;

        // Read separately so argument tables keep their key case.
        let content = std::fs::read_to_string(path)?;
        let table: BindingsTable =
            toml::from_str(&content).map_err(|e| CliError::InvalidManifest {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        let manifest = Manifest {
            builder,
            bindings: table.bindings,
        }
        .resolve_paths(base);

        tracing::debug!(
            "Loaded manifest {} with {} binding(s)",
            path.display(),
            manifest.bindings.len()
        );
        Ok(manifest)
    }

    /// Make relative builder paths relative to `base`
    pub fn resolve_paths(mut self, base: &Path) -> Self {
        self.builder.dirname = resolve(base, &self.builder.dirname);
        if let Some(current) = self.builder.current_keybinding_path.take() {
            self.builder.current_keybinding_path = if current.as_os_str().is_empty() {
                Some(current)
            } else {
                Some(resolve(base, &current))
            };
        }
        self
    }

    /// Register every manifest binding, in manifest order
    pub fn register_into(&self, builder: &mut KeybindingsBuilder) -> Result<(), BuilderError> {
        for binding in &self.bindings {
            builder.register_pending(binding.to_pending())?;
        }
        Ok(())
    }

    /// Manifest written by `kbb init`
    pub fn sample() -> Self {
        Manifest {
            builder: BuilderConfig::new(".").with_current_keybinding_path("keybindings.json"),
            bindings: vec![
                BindingSpec {
                    key: "ctrl+p".to_string(),
                    mode: KeyHandlingMode::ClearDefault,
                    commands: vec![Command::with_options(
                        "workbench.action.quickOpen",
                        CommandOptions::new().when("editorTextFocus"),
                    )],
                },
                BindingSpec {
                    key: "ctrl+k ctrl+t".to_string(),
                    mode: KeyHandlingMode::PreserveDefault,
                    commands: vec![Command::new("workbench.action.selectTheme")],
                },
            ],
        }
    }

    /// Render as TOML
    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::InvalidArgument {
            message: format!("Failed to render manifest: {}", e),
        })
    }
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_relative() {
        base.join(path)
    } else {
        path.to_path_buf()
    }
}
