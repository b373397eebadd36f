use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::animation::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
/// Programmatic transition defaults.
pub struct AnimationOptions {
    /// Duration used when `animate_to` is called without one.
    #[schemars(title = "Duration (ms)", range(min = 0, max = 10000), extend("step" = 50))]
    pub duration_ms: u64,
    /// Progress curve.
    #[schemars(title = "Easing")]
    pub easing: EasingFunction,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            duration_ms: 1000,
            easing: EasingFunction::default(),
        }
    }
}

impl AnimationOptions {
    /// [`duration_ms`](Self::duration_ms) as a `Duration`.
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}
