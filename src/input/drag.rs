//! Drag/touch interaction: converts pointer movement deltas into
//! yaw/pitch deltas.

use crate::orientation::{Modes, OrientationState};

/// Degrees of rotation per pixel of pointer travel.
pub const DEFAULT_DRAGGING_MULTIPLIER: f32 = 0.1;

/// Touch moves ask the host to suppress page scrolling while `|pitch|`
/// is below this limit.
pub const DEFAULT_TOUCH_SCROLL_PITCH_LIMIT: f32 = 69.0;

/// Transient state of one drag gesture, from press to release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Horizontal pointer position of the last applied move.
    pub last_x: f32,
    /// Vertical pointer position of the last applied move.
    pub last_y: f32,
}

/// Result of a touch move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TouchMove {
    /// Whether yaw/pitch were changed.
    pub applied: bool,
    /// Whether the host should cancel the browser's default scroll.
    pub suppress_scroll: bool,
}

/// Tracks the active [`DragSession`] and applies pointer deltas.
#[derive(Debug, Clone, PartialEq)]
pub struct DragController {
    multiplier: f32,
    touch_scroll_pitch_limit: f32,
    session: Option<DragSession>,
}

impl Default for DragController {
    fn default() -> Self {
        Self::new(DEFAULT_DRAGGING_MULTIPLIER, DEFAULT_TOUCH_SCROLL_PITCH_LIMIT)
    }
}

impl DragController {
    /// Controller with no open session.
    #[must_use]
    pub fn new(multiplier: f32, touch_scroll_pitch_limit: f32) -> Self {
        Self {
            multiplier,
            touch_scroll_pitch_limit,
            session: None,
        }
    }

    /// Whether a session is open.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// The open session, if any.
    #[must_use]
    pub fn session(&self) -> Option<DragSession> {
        self.session
    }

    /// Degrees per pixel.
    #[must_use]
    pub fn multiplier(&self) -> f32 {
        self.multiplier
    }

    /// Open a session at the pointer position. Replaces any open session.
    pub fn start(&mut self, x: f32, y: f32) {
        self.session = Some(DragSession { last_x: x, last_y: y });
    }

    /// Apply the movement since the last accepted position.
    ///
    /// No-op unless a session is open and `modes` accept drag input
    /// (not animating, not frozen). A suppressed move does not advance
    /// the session's last position.
    ///
    /// Returns whether yaw/pitch were changed.
    pub fn move_to(
        &mut self,
        state: &mut OrientationState,
        modes: Modes,
        x: f32,
        y: f32,
    ) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if !modes.accepts_drag() {
            return false;
        }

        state.yaw += (session.last_x - x) * self.multiplier;
        state.pitch -= (session.last_y - y) * self.multiplier;
        session.last_x = x;
        session.last_y = y;
        true
    }

    /// Touch variant of [`move_to`](Self::move_to).
    ///
    /// The scroll-suppression signal is decided from the pitch before the
    /// move and is raised even when the move itself is suppressed.
    pub fn touch_move(
        &mut self,
        state: &mut OrientationState,
        modes: Modes,
        x: f32,
        y: f32,
    ) -> TouchMove {
        let suppress_scroll = state.pitch.abs() < self.touch_scroll_pitch_limit;
        let applied = self.move_to(state, modes, x, y);
        TouchMove {
            applied,
            suppress_scroll,
        }
    }

    /// Close the session.
    pub fn end(&mut self) {
        self.session = None;
    }
}
