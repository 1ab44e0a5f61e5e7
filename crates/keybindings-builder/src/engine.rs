//! Build orchestration
//!
//! Loads the default and manual keybindings, refuses to continue on any
//! conflict, then merges and writes the output. The output file is only
//! written once every earlier step has succeeded.
//!
//! Warnings and conflicts are returned to the caller, which decides how to
//! show them; they are only logged at debug level here.

use crate::config::BuilderConfig;
use crate::conflict::ConflictDetector;
use crate::error::{BuilderError, Result};
use crate::merge::KeybindingMerger;
use crate::models::{BuildPlan, BuildSuccess, KeyBinding};
use crate::persistence::{load_current_keybindings, load_default_keybindings, write_keybindings};
use crate::registry::KeyRegistry;

/// Compute everything a build would write
pub async fn plan_keybindings(
    config: &BuilderConfig,
    registry: &KeyRegistry,
) -> Result<BuildPlan> {
    config.validate()?;

    let mut warnings = Vec::new();

    let defaults_path = config.default_keybindings_path();
    let defaults = match load_default_keybindings(&defaults_path).await {
        Ok(defaults) => defaults,
        Err(e) if e.is_not_found() => {
            let warning = format!(
                "Default keybindings file not found at {}, continuing with empty defaults",
                defaults_path.display()
            );
            tracing::debug!("{}", warning);
            warnings.push(warning);
            Vec::new()
        }
        Err(e) => return Err(e),
    };

    let manual: Vec<KeyBinding> = match config.manual_keybindings_path() {
        Some(path) => load_current_keybindings(path).await?,
        None => Vec::new(),
    };

    let conflicts = ConflictDetector::detect(registry, &manual);
    if !conflicts.is_empty() {
        for conflict in &conflicts {
            tracing::debug!("Keybinding conflict: {}", conflict);
        }
        return Err(BuilderError::ConflictDetected { conflicts });
    }

    let preservation = KeybindingMerger::preservation_warnings(registry, &manual);
    for warning in &preservation {
        tracing::debug!("{}", warning);
    }
    warnings.extend(preservation);

    let keybindings = KeybindingMerger::merge(registry, &defaults, &manual);

    Ok(BuildPlan {
        keybindings,
        keybindings_count: registry.len(),
        preserved_count: manual.len() - conflicts.len(),
        output_path: config.output_path(),
        warnings,
    })
}

/// Compute the keybindings and write them to the configured output file
pub async fn build_keybindings(
    config: &BuilderConfig,
    registry: &KeyRegistry,
) -> Result<BuildSuccess> {
    let plan = plan_keybindings(config, registry).await?;
    write_keybindings(&plan.output_path, &plan.keybindings).await?;

    tracing::info!(
        "Generated {} keybinding(s) for {} registered key(s) into {}",
        plan.keybindings.len(),
        plan.keybindings_count,
        plan.output_path.display()
    );

    Ok(plan.into())
}
