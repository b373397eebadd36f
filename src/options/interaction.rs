use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::input::drag::{DEFAULT_DRAGGING_MULTIPLIER, DEFAULT_TOUCH_SCROLL_PITCH_LIMIT};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Interaction", inline)]
#[serde(default)]
/// Drag and touch tuning.
pub struct InteractionOptions {
    /// Degrees of rotation per pixel of pointer travel.
    #[schemars(title = "Drag Speed", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub dragging_multiplier: f32,
    /// Touch moves suppress page scrolling while `|pitch|` is below this.
    #[schemars(skip)]
    pub touch_scroll_pitch_limit: f32,
}

impl Default for InteractionOptions {
    fn default() -> Self {
        Self {
            dragging_multiplier: DEFAULT_DRAGGING_MULTIPLIER,
            touch_scroll_pitch_limit: DEFAULT_TOUCH_SCROLL_PITCH_LIMIT,
        }
    }
}
