//! Frame pacing for the render loop.
//!
//! The loop never calls a global frame API directly. It asks a
//! [`FrameScheduler`] for the next frame and the host fires that frame
//! by calling [`CubeView::handle_frame`](crate::CubeView::handle_frame)
//! with the returned [`FrameId`]. Tests drive the loop with
//! [`ManualScheduler`] and a fake clock; the demo binary uses
//! [`IntervalScheduler`] at a fixed rate.

/// Frame timing with FPS calculation and frame limiting.
pub mod frame_timing;
/// Fixed-rate scheduler on the real clock.
pub mod interval;
/// Host-stepped scheduler with a fake clock.
pub mod manual;

use std::fmt;

use web_time::Instant;

pub use frame_timing::FrameTiming;
pub use interval::IntervalScheduler;
pub use manual::ManualScheduler;

/// Frames per second used when no display-refresh source is available.
pub const FALLBACK_FPS: u32 = 30;

/// Handle for one requested frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(pub u64);

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "frame#{}", self.0)
    }
}

/// Source of time and of "next frame" opportunities.
pub trait FrameScheduler {
    /// Current time as seen by the render loop.
    fn now(&self) -> Instant;

    /// Request one callback on the next frame opportunity.
    fn request_frame(&mut self) -> FrameId;

    /// Withdraw a pending request. Unknown ids are ignored.
    fn cancel_frame(&mut self, id: FrameId);
}

/// Monotonic id source shared by the scheduler implementations.
#[derive(Debug, Default, Clone)]
pub(crate) struct FrameQueue {
    next_id: u64,
    pending: Vec<FrameId>,
}

impl FrameQueue {
    pub(crate) fn request(&mut self) -> FrameId {
        self.next_id += 1;
        let id = FrameId(self.next_id);
        self.pending.push(id);
        id
    }

    pub(crate) fn cancel(&mut self, id: FrameId) {
        self.pending.retain(|pending| *pending != id);
    }

    pub(crate) fn len(&self) -> usize {
        self.pending.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub(crate) fn take(&mut self) -> Vec<FrameId> {
        std::mem::take(&mut self.pending)
    }
}
