use web_time::Instant;

use super::{FrameId, FrameQueue, FrameScheduler, FrameTiming, FALLBACK_FPS};

/// Fixed-rate scheduler on the real clock.
///
/// Stands in for a display-refresh callback: frames requested during one
/// frame are all fired together once the next frame boundary is reached.
/// [`wait_for_frames`](Self::wait_for_frames) blocks the calling thread,
/// so this is for native hosts only.
#[derive(Debug, Clone)]
pub struct IntervalScheduler {
    timing: FrameTiming,
    queue: FrameQueue,
}

impl Default for IntervalScheduler {
    fn default() -> Self {
        Self::new(FALLBACK_FPS)
    }
}

impl IntervalScheduler {
    /// Scheduler firing at most `fps` frames per second (0 = unlimited).
    #[must_use]
    pub fn new(fps: u32) -> Self {
        Self {
            timing: FrameTiming::new(fps, Instant::now()),
            queue: FrameQueue::default(),
        }
    }

    /// Sleep until the next frame boundary and return the frames due on
    /// it. Returns immediately with an empty list when nothing is pending.
    pub fn wait_for_frames(&mut self) -> Vec<FrameId> {
        if self.queue.is_empty() {
            return Vec::new();
        }
        let wait = self.timing.time_until_next(Instant::now());
        if !wait.is_zero() {
            std::thread::sleep(wait);
        }
        self.timing.end_frame(Instant::now());
        self.queue.take()
    }

    /// Smoothed frame rate actually achieved.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.timing.fps()
    }

    /// Whether any frame is waiting to fire.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.queue.is_empty()
    }
}

impl FrameScheduler for IntervalScheduler {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn request_frame(&mut self) -> FrameId {
        self.queue.request()
    }

    fn cancel_frame(&mut self, id: FrameId) {
        self.queue.cancel(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_pending_returns_immediately() {
        let mut s = IntervalScheduler::new(30);
        assert!(s.wait_for_frames().is_empty());
    }

    #[test]
    fn test_waits_for_frame_boundary() {
        let mut s = IntervalScheduler::new(100);
        let id = s.request_frame();
        let start = Instant::now();
        assert_eq!(s.wait_for_frames(), vec![id]);
        // First boundary is counted from construction, so the wait is at
        // most one frame.
        assert!(start.elapsed() <= web_time::Duration::from_millis(50));
        assert!(!s.has_pending());
    }
}
