//! Lifecycle and the per-frame loop body for [`CubeView`].

use super::{CubeView, FrameTask};
use crate::animation::AnimationStep;
use crate::error::CubeError;
use crate::projection::{project, Length};
use crate::scheduler::{FrameId, FrameScheduler, IntervalScheduler, ManualScheduler};

impl<S: FrameScheduler> CubeView<S> {
    /// Start the loop: render the first frame now, schedule the next one,
    /// then bring up the tilt adapter.
    ///
    /// Calling this on a connected view does nothing.
    pub fn connect(&mut self) {
        if self.connected {
            log::warn!("connect() on an already connected cube view");
            return;
        }
        self.connected = true;
        log::debug!("cube view connected");

        self.tick();

        if let Some(tilt) = self.tilt.as_mut() {
            match tilt.init() {
                Ok(()) => self.tilt_active = true,
                Err(e) => {
                    log::error!("tilt adapter stays inactive: {e}");
                    self.tilt_active = false;
                }
            }
        }
    }

    /// Stop the loop: cancel the pending tick and any pending completion
    /// callbacks, close an open drag session, and tear down the tilt
    /// adapter. Idempotent.
    pub fn disconnect(&mut self) {
        if !self.connected {
            return;
        }
        self.connected = false;

        if let Some(id) = self.tick_frame.take() {
            log::debug!("cancelling pending tick {id}");
        }
        for (id, _) in self.tasks.drain() {
            self.scheduler.cancel_frame(id);
        }
        self.drag.end();

        if self.tilt_active {
            if let Some(tilt) = self.tilt.as_mut() {
                tilt.deinit();
            }
            self.tilt_active = false;
        }
        log::debug!("cube view disconnected");
    }

    /// Whether the loop is running.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Frame the next tick is waiting on, if the loop is running.
    #[must_use]
    pub fn pending_tick(&self) -> Option<FrameId> {
        self.tick_frame
    }

    /// Fire frame `id`, previously returned by the scheduler.
    ///
    /// Runs either the next loop tick or a deferred completion callback.
    /// Cancelled or unknown ids are ignored.
    pub fn handle_frame(&mut self, id: FrameId) {
        match self.tasks.remove(&id) {
            Some(FrameTask::Tick) => {
                self.tick_frame = None;
                self.tick();
            }
            Some(FrameTask::Callback(callback)) => {
                log::trace!("{id}: animation callback");
                callback(self);
            }
            None => log::debug!("ignoring stale {id}"),
        }
    }

    /// One loop iteration: advance the animation, normalize, project,
    /// deliver to the render target, reschedule.
    ///
    /// A failure in projection or delivery is logged and the loop still
    /// reschedules. An unparseable perspective is logged once until it
    /// changes.
    fn tick(&mut self) {
        let now = self.scheduler.now();

        if let AnimationStep::Finished(Some(callback)) =
            self.animation.update(&mut self.orientation, now)
        {
            let id = self.scheduler.request_frame();
            let _ = self.tasks.insert(id, FrameTask::Callback(callback));
        }

        self.orientation.normalize();

        match self.render() {
            Ok(()) => {}
            Err(CubeError::InvalidLength(fov)) => {
                // Reported once per distinct value; the frame is skipped
                // until the setting changes.
                if self.rejected_fov.as_deref() == Some(fov.as_str()) {
                    log::trace!("skipping frame: {fov:?} is not a length");
                } else {
                    log::error!("cube frames skipped: invalid perspective length {fov:?}");
                    self.rejected_fov = Some(fov);
                }
            }
            Err(e) => log::error!("cube frame failed: {e}"),
        }

        self.schedule_tick();
    }

    fn render(&mut self) -> Result<(), CubeError> {
        let perspective: Length = self.options.view.active_fov().parse()?;
        self.rejected_fov = None;
        let instruction = project(&self.orientation, perspective);
        log::trace!("{instruction}");

        self.target.apply_transform(&instruction)?;
        self.last_instruction = Some(instruction);
        self.frames_rendered += 1;
        Ok(())
    }

    fn schedule_tick(&mut self) {
        if !self.connected {
            return;
        }
        let id = self.scheduler.request_frame();
        let _ = self.tasks.insert(id, FrameTask::Tick);
        self.tick_frame = Some(id);
    }
}

impl CubeView<ManualScheduler> {
    /// Fire every frame currently pending on the manual scheduler.
    ///
    /// Frames requested while these run are left for the next call.
    pub fn run_due_frames(&mut self) {
        for id in self.scheduler.take_due() {
            self.handle_frame(id);
        }
    }
}

impl CubeView<IntervalScheduler> {
    /// Wait for the next frame boundary and fire the frames due on it.
    ///
    /// Returns `false` once nothing is pending, i.e. after
    /// [`disconnect`](Self::disconnect).
    pub fn run_next_frame(&mut self) -> bool {
        let due = self.scheduler.wait_for_frames();
        if due.is_empty() {
            return false;
        }
        for id in due {
            self.handle_frame(id);
        }
        true
    }
}
