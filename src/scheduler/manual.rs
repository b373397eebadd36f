use web_time::{Duration, Instant};

use super::{FrameId, FrameQueue, FrameScheduler};

/// Scheduler stepped by the host, with its own fake clock.
///
/// ```ignore
/// let mut view = CubeViewBuilder::new()
///     .with_render_target(target)
///     .build(ManualScheduler::new())?;
/// view.connect();
/// view.scheduler_mut().advance(Duration::from_millis(16));
/// view.run_due_frames();
/// ```
#[derive(Debug, Clone)]
pub struct ManualScheduler {
    now: Instant,
    queue: FrameQueue,
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualScheduler {
    /// Scheduler whose clock starts at the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Scheduler whose clock starts at `now`.
    #[must_use]
    pub fn starting_at(now: Instant) -> Self {
        Self {
            now,
            queue: FrameQueue::default(),
        }
    }

    /// Move the fake clock forward.
    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }

    /// Number of frames requested and not yet taken or cancelled.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Take every pending request; they are all due on the next frame.
    pub fn take_due(&mut self) -> Vec<FrameId> {
        self.queue.take()
    }
}

impl FrameScheduler for ManualScheduler {
    fn now(&self) -> Instant {
        self.now
    }

    fn request_frame(&mut self) -> FrameId {
        self.queue.request()
    }

    fn cancel_frame(&mut self, id: FrameId) {
        self.queue.cancel(id);
    }
}
