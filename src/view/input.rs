//! Drag/touch events and tilt readings for [`CubeView`].
//!
//! These run outside the tick; their changes are picked up (and
//! normalized) by the next tick.

use super::CubeView;
use crate::input::{InputEvent, InputResponse};
use crate::scheduler::FrameScheduler;

impl<S: FrameScheduler> CubeView<S> {
    /// Feed one pointer/touch event.
    ///
    /// Moves are ignored while an animation runs or the view is frozen.
    pub fn handle_input(&mut self, event: InputEvent) -> InputResponse {
        let modes = self.modes();
        match event {
            InputEvent::PointerDown { x, y } | InputEvent::TouchStart { x, y } => {
                self.drag.start(x, y);
                InputResponse::default()
            }
            InputEvent::PointerMove { x, y } => InputResponse {
                rotated: self.drag.move_to(&mut self.orientation, modes, x, y),
                suppress_scroll: false,
            },
            InputEvent::TouchMove { x, y } => {
                let moved =
                    self.drag.touch_move(&mut self.orientation, modes, x, y);
                InputResponse {
                    rotated: moved.applied,
                    suppress_scroll: moved.suppress_scroll,
                }
            }
            InputEvent::PointerUp | InputEvent::TouchEnd => {
                self.drag.end();
                InputResponse::default()
            }
        }
    }

    /// Let the tilt adapter apply its latest reading.
    ///
    /// Not gated by freeze or by a running animation. Returns whether the
    /// adapter ran.
    pub fn poll_tilt(&mut self) -> bool {
        if !self.tilt_active {
            return false;
        }
        match self.tilt.as_mut() {
            Some(tilt) if tilt.is_enabled() => {
                tilt.apply(&mut self.orientation);
                true
            }
            _ => false,
        }
    }
}
