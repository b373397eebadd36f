//! Centralized cube options with TOML preset support.
//!
//! Perspective, lock, interaction, animation and loop settings are
//! consolidated here. Options serialize to/from TOML so a host can keep
//! presets on disk.

mod animation;
mod interaction;
mod render_loop;
mod view;

use std::path::Path;

pub use animation::AnimationOptions;
pub use interaction::InteractionOptions;
pub use render_loop::RenderLoopOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use view::{ViewOptions, DEFAULT_FOV, DEFAULT_ZOOM_FOV};

use crate::error::CubeError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[view]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct CubeOptions {
    /// Perspective and freeze settings.
    pub view: ViewOptions,
    /// Drag and touch tuning.
    pub interaction: InteractionOptions,
    /// Programmatic transition defaults.
    pub animation: AnimationOptions,
    /// Frame pacing.
    pub render_loop: RenderLoopOptions,
}

impl CubeOptions {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(CubeOptions)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, CubeError> {
        let content = std::fs::read_to_string(path).map_err(CubeError::Io)?;
        toml::from_str(&content)
            .map_err(|e| CubeError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), CubeError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CubeError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(CubeError::Io)?;
        }
        std::fs::write(path, content).map_err(CubeError::Io)
    }

    /// Load the preset called `name` from `dir`.
    ///
    /// Fails with [`CubeError::OptionsParse`] naming the available presets
    /// when `dir` has no `{name}.toml`.
    pub fn load_preset(dir: &Path, name: &str) -> Result<Self, CubeError> {
        let presets = Self::list_presets(dir);
        if presets.iter().any(|preset| preset == name) {
            Self::load(&dir.join(format!("{name}.toml")))
        } else {
            Err(CubeError::OptionsParse(format!(
                "no preset {name:?} in {} (available: {})",
                dir.display(),
                presets.join(", ")
            )))
        }
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
