use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default perspective distance.
pub const DEFAULT_FOV: &str = "40vmax";
/// Default perspective distance while zoomed in.
pub const DEFAULT_ZOOM_FOV: &str = "60vmax";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "View", inline)]
#[serde(default)]
/// Perspective and lock settings exposed to the host.
pub struct ViewOptions {
    /// Perspective distance as a CSS length.
    #[schemars(title = "Field of View")]
    pub fov: String,
    /// Perspective distance used while zoomed in.
    #[schemars(title = "Zoomed Field of View")]
    pub zoom_fov: String,
    /// Use `zoom_fov` instead of `fov`.
    #[schemars(title = "Zoomed In")]
    pub zoomed_in: bool,
    /// Ignore drag input.
    #[schemars(title = "Frozen")]
    pub frozen: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            fov: DEFAULT_FOV.to_owned(),
            zoom_fov: DEFAULT_ZOOM_FOV.to_owned(),
            zoomed_in: false,
            frozen: false,
        }
    }
}

impl ViewOptions {
    /// The perspective string in effect: `zoom_fov` when zoomed in,
    /// `fov` otherwise.
    #[must_use]
    pub fn active_fov(&self) -> &str {
        if self.zoomed_in {
            &self.zoom_fov
        } else {
            &self.fov
        }
    }
}
