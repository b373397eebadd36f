//! Single-job animation state machine: Idle → Animating → Idle.
//!
//! A job interpolates yaw and pitch from the pose at the time of the
//! request to a target pose over a fixed duration. Issuing a new request
//! while one is in flight replaces it; the replaced job's callback is
//! dropped without running.

use std::fmt;
use std::time::Duration;

use web_time::Instant;

use super::easing::{lerp, EasingFunction};
use crate::orientation::OrientationState;

/// Longest transition the controller schedules; longer requests are
/// clamped so the end instant stays representable.
pub const MAX_DURATION: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

/// One programmatic transition from a start pose to an end pose.
pub struct AnimationJob<C> {
    start_yaw: f32,
    start_pitch: f32,
    target_yaw: f32,
    target_pitch: f32,
    start_time: Instant,
    end_time: Instant,
    callback: Option<C>,
}

impl<C> AnimationJob<C> {
    /// Yaw the job ends on, after the shortest-path adjustment.
    #[must_use]
    pub fn target_yaw(&self) -> f32 {
        self.target_yaw
    }

    /// Pitch the job ends on.
    #[must_use]
    pub fn target_pitch(&self) -> f32 {
        self.target_pitch
    }

    /// Pose the job started from.
    #[must_use]
    pub fn start(&self) -> (f32, f32) {
        (self.start_yaw, self.start_pitch)
    }

    /// Instant at which the job completes.
    #[must_use]
    pub fn end_time(&self) -> Instant {
        self.end_time
    }

    /// Linear progress in `[0, 1]` at `now`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        let total = self.end_time.saturating_duration_since(self.start_time);
        if total.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start_time);
        (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
    }
}

impl<C> fmt::Debug for AnimationJob<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationJob")
            .field("start_yaw", &self.start_yaw)
            .field("start_pitch", &self.start_pitch)
            .field("target_yaw", &self.target_yaw)
            .field("target_pitch", &self.target_pitch)
            .field("start_time", &self.start_time)
            .field("end_time", &self.end_time)
            .field("has_callback", &self.callback.is_some())
            .finish()
    }
}

/// Outcome of advancing the controller by one tick.
pub enum AnimationStep<C> {
    /// No job was in flight; orientation untouched.
    Idle,
    /// The job is still running; yaw/pitch were interpolated.
    Running,
    /// The job completed on this tick; yaw/pitch were snapped to the
    /// exact target. The callback, if any, must be dispatched outside
    /// the current tick.
    Finished(Option<C>),
}

impl<C> AnimationStep<C> {
    /// Whether this step completed a job.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished(_))
    }
}

impl<C> fmt::Debug for AnimationStep<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Running => write!(f, "Running"),
            Self::Finished(cb) => {
                write!(f, "Finished(has_callback: {})", cb.is_some())
            }
        }
    }
}

/// Owns at most one live [`AnimationJob`] and advances it per tick.
pub struct AnimationController<C> {
    job: Option<AnimationJob<C>>,
    easing: EasingFunction,
}

impl<C> Default for AnimationController<C> {
    fn default() -> Self {
        Self::new(EasingFunction::default())
    }
}

impl<C> AnimationController<C> {
    /// Idle controller using `easing` for every job.
    #[must_use]
    pub fn new(easing: EasingFunction) -> Self {
        Self { job: None, easing }
    }

    /// Whether a job is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.job.is_some()
    }

    /// The in-flight job, if any.
    #[must_use]
    pub fn job(&self) -> Option<&AnimationJob<C>> {
        self.job.as_ref()
    }

    /// Easing applied to progress.
    #[must_use]
    pub fn easing(&self) -> EasingFunction {
        self.easing
    }

    /// Change the easing used from the next tick on.
    pub fn set_easing(&mut self, easing: EasingFunction) {
        self.easing = easing;
    }

    /// Start a transition from `current` toward `(yaw, pitch)`.
    ///
    /// Non-finite targets are coerced to `0`. The yaw target is swapped
    /// for its ±360° twin when that one is closer to the current yaw.
    /// Any in-flight job is replaced and its callback dropped. Durations
    /// beyond [`MAX_DURATION`] are clamped to it.
    ///
    /// Returns the effective target yaw.
    pub fn animate_to(
        &mut self,
        current: &OrientationState,
        yaw: f32,
        pitch: f32,
        duration: Duration,
        callback: Option<C>,
        now: Instant,
    ) -> f32 {
        let yaw = if yaw.is_finite() { yaw } else { 0.0 };
        let pitch = if pitch.is_finite() { pitch } else { 0.0 };
        let target_yaw = shortest_yaw(current.yaw, yaw);

        if self.job.is_some() {
            log::debug!("replacing in-flight animation");
        }
        log::debug!(
            "animate from ({}, {}) to ({target_yaw}, {pitch}) over {duration:?}",
            current.yaw,
            current.pitch
        );

        let end_time = now
            .checked_add(duration.min(MAX_DURATION))
            .unwrap_or(now);

        self.job = Some(AnimationJob {
            start_yaw: current.yaw,
            start_pitch: current.pitch,
            target_yaw,
            target_pitch: pitch,
            start_time: now,
            end_time,
            callback,
        });
        target_yaw
    }

    /// Advance the in-flight job to `now`, writing yaw/pitch into `state`.
    pub fn update(
        &mut self,
        state: &mut OrientationState,
        now: Instant,
    ) -> AnimationStep<C> {
        let Some(job) = self.job.take() else {
            return AnimationStep::Idle;
        };

        if now >= job.end_time {
            state.yaw = job.target_yaw;
            state.pitch = job.target_pitch;
            log::debug!(
                "animation finished at ({}, {})",
                job.target_yaw,
                job.target_pitch
            );
            return AnimationStep::Finished(job.callback);
        }

        let e = self.easing.evaluate(job.progress(now));
        state.yaw = lerp(job.start_yaw, job.target_yaw, e);
        state.pitch = lerp(job.start_pitch, job.target_pitch, e);
        self.job = Some(job);
        AnimationStep::Running
    }
}

impl<C> fmt::Debug for AnimationController<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationController")
            .field("job", &self.job)
            .field("easing", &self.easing)
            .finish()
    }
}

/// Pick whichever of `target` and its ±360° twin is closer to `current`.
#[must_use]
pub fn shortest_yaw(current: f32, target: f32) -> f32 {
    let alt = if target > 0.0 {
        target - 360.0
    } else {
        target + 360.0
    };
    if (alt - current).abs() < (target - current).abs() {
        alt
    } else {
        target
    }
}
