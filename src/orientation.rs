//! Cube orientation in degrees and the normalization pass that keeps it
//! in canonical ranges.

/// Pitch is clamped to `[-PITCH_LIMIT, PITCH_LIMIT]` on every tick.
pub const PITCH_LIMIT: f32 = 70.0;

const HALF_TURN: f32 = 180.0;
const FULL_TURN: f32 = 360.0;

/// Yaw, pitch and roll of the cube, in degrees.
///
/// Setters do not normalize: drag and animation may push values out of
/// range between ticks. [`normalize`](Self::normalize) is applied by the
/// render loop before every projection.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrientationState {
    /// Rotation about the vertical axis.
    pub yaw: f32,
    /// Rotation about the lateral axis.
    pub pitch: f32,
    /// Rotation about the depth axis.
    pub roll: f32,
}

impl OrientationState {
    /// Orientation with the given angles, not normalized.
    #[must_use]
    pub fn new(yaw: f32, pitch: f32, roll: f32) -> Self {
        Self { yaw, pitch, roll }
    }

    /// Clamp pitch and wrap yaw/roll back into their canonical ranges.
    ///
    /// - pitch: clamped to `[-70, 70]`
    /// - yaw: wrapped by whole turns into `[-180, 180]`
    /// - roll: only wrapped upwards while below `-180`; there is no upper
    ///   bound wrap for roll
    ///
    /// Non-finite fields are reset to `0`. Idempotent.
    pub fn normalize(&mut self) {
        self.pitch = finite_or_zero(self.pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.yaw = wrap_yaw(finite_or_zero(self.yaw));
        self.roll = wrap_roll(finite_or_zero(self.roll));
    }

    /// Copy of `self` after [`normalize`](Self::normalize).
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }
}

/// Which inputs may mutate the orientation right now.
///
/// Animation and freeze both suppress drag input; neither affects the
/// tilt adapter, and freeze does not stop a running animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct Modes {
    /// A programmatic transition is in flight.
    pub animating: bool,
    /// A drag/touch session is open.
    pub dragging: bool,
    /// Drag input is locked by the host.
    pub frozen: bool,
}

impl Modes {
    /// Whether a drag move should be applied under these modes.
    #[must_use]
    pub fn accepts_drag(self) -> bool {
        self.dragging && !self.animating && !self.frozen
    }
}

fn finite_or_zero(value: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

fn wrap_yaw(yaw: f32) -> f32 {
    lift_above_lower(drop_below_upper(yaw))
}

fn wrap_roll(roll: f32) -> f32 {
    lift_above_lower(roll)
}

/// Subtract whole turns until `value <= 180`.
fn drop_below_upper(value: f32) -> f32 {
    if value > HALF_TURN {
        let turns = ((value - HALF_TURN) / FULL_TURN).ceil();
        value - turns * FULL_TURN
    } else {
        value
    }
}

/// Add whole turns until `value >= -180`.
fn lift_above_lower(value: f32) -> f32 {
    if value < -HALF_TURN {
        let turns = ((-HALF_TURN - value) / FULL_TURN).ceil();
        value + turns * FULL_TURN
    } else {
        value
    }
}
