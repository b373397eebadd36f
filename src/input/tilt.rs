//! Contract for an external device-orientation source.
//!
//! The mapping from sensor angles to yaw/pitch/roll belongs to the
//! adapter. The view only drives its lifecycle and hands it the
//! orientation when the host reports a new reading.

use crate::error::CubeError;
use crate::orientation::OrientationState;

/// A sensor-driven source that mutates the cube orientation directly.
///
/// Tilt input is not gated by freeze or by a running animation.
pub trait TiltAdapter {
    /// Called when the view connects. Failure is logged and the adapter
    /// stays inactive until the next connect.
    fn init(&mut self) -> Result<(), CubeError> {
        Ok(())
    }

    /// Called when the view disconnects.
    fn deinit(&mut self) {}

    /// Whether readings should currently be applied.
    fn is_enabled(&self) -> bool {
        true
    }

    /// Apply the latest reading to `orientation`.
    fn apply(&mut self, orientation: &mut OrientationState);
}
