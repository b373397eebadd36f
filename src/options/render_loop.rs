use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::scheduler::FALLBACK_FPS;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Render Loop", inline)]
#[serde(default)]
/// Frame pacing parameters.
pub struct RenderLoopOptions {
    /// Tick rate used when no display-refresh source is available.
    #[schemars(title = "Fallback FPS", range(min = 1, max = 240))]
    pub fallback_fps: u32,
}

impl Default for RenderLoopOptions {
    fn default() -> Self {
        Self {
            fallback_fps: FALLBACK_FPS,
        }
    }
}
