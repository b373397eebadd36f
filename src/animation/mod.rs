//! Programmatic orientation transitions.
//!
//! [`AnimationController`] holds at most one [`AnimationJob`] and is
//! advanced once per render-loop tick; [`EasingFunction`] shapes its
//! progress curve.

/// Single-job animation state machine.
pub mod controller;
/// Easing curves and interpolation helpers.
pub mod easing;

pub use controller::{shortest_yaw, AnimationController, AnimationJob, AnimationStep};
pub use easing::EasingFunction;
