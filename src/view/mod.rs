//! The cube view: owns the orientation and runs the render loop.
//!
//! `CubeView` is the single owner of [`OrientationState`]. Drag input,
//! the tilt adapter and the animation controller all mutate it; the
//! render loop normalizes it and hands a [`RenderInstruction`] to the
//! render target once per tick.
//!
//! The impl is split by concern:
//!
//! - `builder` - construction and the fatal missing-target check
//! - `render_loop` - connect/disconnect, frame dispatch, the tick body
//! - `input` - drag/touch events and tilt readings

mod builder;
mod input;
mod render_loop;

use std::time::Duration;

pub use builder::CubeViewBuilder;
use rustc_hash::FxHashMap;

use crate::animation::{AnimationController, EasingFunction};
use crate::input::{DragController, TiltAdapter};
use crate::options::CubeOptions;
use crate::orientation::{Modes, OrientationState};
use crate::projection::RenderInstruction;
use crate::scheduler::{FrameId, FrameScheduler};
use crate::target::RenderTarget;

/// Callback run once after an animation completes.
///
/// It is dispatched on its own frame, after the tick that finished the
/// animation, and may start another animation.
pub type AnimationCallback<S> = Box<dyn FnOnce(&mut CubeView<S>)>;

/// Work bound to a requested frame.
enum FrameTask<S: FrameScheduler> {
    /// Run the next render-loop tick.
    Tick,
    /// Run a deferred animation-completion callback.
    Callback(AnimationCallback<S>),
}

/// A rotatable cube bound to a render target and a frame scheduler.
///
/// Build with [`CubeViewBuilder`], then [`connect`](Self::connect) to
/// start the loop.
pub struct CubeView<S: FrameScheduler> {
    orientation: OrientationState,
    options: CubeOptions,
    drag: DragController,
    animation: AnimationController<AnimationCallback<S>>,
    scheduler: S,
    target: Box<dyn RenderTarget>,
    tilt: Option<Box<dyn TiltAdapter>>,
    tilt_active: bool,
    tasks: FxHashMap<FrameId, FrameTask<S>>,
    tick_frame: Option<FrameId>,
    connected: bool,
    last_instruction: Option<RenderInstruction>,
    frames_rendered: u64,
    /// Perspective string already reported as unparseable.
    rejected_fov: Option<String>,
}

impl<S: FrameScheduler> CubeView<S> {
    // ── Orientation ─────────────────────────────────────────────────

    /// Current orientation. Between ticks it may be out of range.
    #[must_use]
    pub fn orientation(&self) -> OrientationState {
        self.orientation
    }

    /// Overwrite the orientation. Normalized on the next tick.
    pub fn set_orientation(&mut self, orientation: OrientationState) {
        self.orientation = orientation;
    }

    /// Snapshot of the animating/dragging/frozen flags.
    #[must_use]
    pub fn modes(&self) -> Modes {
        Modes {
            animating: self.animation.is_animating(),
            dragging: self.drag.is_dragging(),
            frozen: self.options.view.frozen,
        }
    }

    /// Whether a programmatic transition is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// Whether a drag/touch session is open.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    // ── Animation ───────────────────────────────────────────────────

    /// Animate to `(yaw, pitch)` along the shorter yaw path.
    ///
    /// `duration` defaults to the configured animation duration. Any
    /// in-flight animation is replaced and its callback never runs.
    /// Non-finite targets are treated as `0`.
    ///
    /// Returns the effective target yaw.
    pub fn animate_to(
        &mut self,
        yaw: f32,
        pitch: f32,
        duration: Option<Duration>,
        callback: Option<AnimationCallback<S>>,
    ) -> f32 {
        let duration =
            duration.unwrap_or_else(|| self.options.animation.duration());
        let now = self.scheduler.now();
        self.animation.animate_to(
            &self.orientation,
            yaw,
            pitch,
            duration,
            callback,
            now,
        )
    }

    /// Easing applied to programmatic transitions.
    #[must_use]
    pub fn easing(&self) -> EasingFunction {
        self.animation.easing()
    }

    /// Change the easing; an in-flight transition picks it up on the
    /// next tick.
    pub fn set_easing(&mut self, easing: EasingFunction) {
        self.options.animation.easing = easing;
        self.animation.set_easing(easing);
    }

    // ── Freezing ────────────────────────────────────────────────────

    /// Ignore drag input until [`unfreeze`](Self::unfreeze).
    ///
    /// Animations and tilt input keep working while frozen.
    pub fn freeze(&mut self) {
        self.set_frozen(true);
    }

    /// Accept drag input again.
    pub fn unfreeze(&mut self) {
        self.set_frozen(false);
    }

    /// Whether drag input is locked.
    #[must_use]
    pub fn is_frozen(&self) -> bool {
        self.options.view.frozen
    }

    /// Set the drag lock.
    pub fn set_frozen(&mut self, frozen: bool) {
        if self.options.view.frozen != frozen {
            log::debug!("frozen = {frozen}");
        }
        self.options.view.frozen = frozen;
    }

    // ── Zooming ─────────────────────────────────────────────────────

    /// Switch to the zoomed perspective.
    pub fn zoom_in(&mut self) {
        self.set_zoomed_in(true);
    }

    /// Switch to the normal perspective.
    pub fn zoom_out(&mut self) {
        self.set_zoomed_in(false);
    }

    /// Flip between the normal and zoomed perspective.
    pub fn toggle_zoom(&mut self) {
        self.set_zoomed_in(!self.options.view.zoomed_in);
    }

    /// Whether the zoomed perspective is active.
    #[must_use]
    pub fn zoomed_in(&self) -> bool {
        self.options.view.zoomed_in
    }

    /// Select the perspective; the next tick uses it, with no easing
    /// between the two distances.
    pub fn set_zoomed_in(&mut self, zoomed_in: bool) {
        if self.options.view.zoomed_in != zoomed_in {
            log::debug!("zoomed_in = {zoomed_in}");
        }
        self.options.view.zoomed_in = zoomed_in;
    }

    /// Normal perspective distance (CSS length).
    #[must_use]
    pub fn fov(&self) -> &str {
        &self.options.view.fov
    }

    /// Set the normal perspective distance (CSS length).
    pub fn set_fov(&mut self, fov: impl Into<String>) {
        self.options.view.fov = fov.into();
    }

    /// Zoomed perspective distance (CSS length).
    #[must_use]
    pub fn zoom_fov(&self) -> &str {
        &self.options.view.zoom_fov
    }

    /// Set the zoomed perspective distance (CSS length).
    pub fn set_zoom_fov(&mut self, zoom_fov: impl Into<String>) {
        self.options.view.zoom_fov = zoom_fov.into();
    }

    // ── Accessors ───────────────────────────────────────────────────

    /// Options in effect, including the live freeze/zoom state.
    #[must_use]
    pub fn options(&self) -> &CubeOptions {
        &self.options
    }

    /// The frame scheduler.
    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Mutable access to the frame scheduler, e.g. to step a fake clock.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// The instruction most recently accepted by the render target.
    #[must_use]
    pub fn last_instruction(&self) -> Option<&RenderInstruction> {
        self.last_instruction.as_ref()
    }

    /// Number of ticks whose instruction reached the render target.
    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;
    use crate::error::CubeError;
    use crate::input::InputEvent;
    use crate::projection::Length;
    use crate::scheduler::ManualScheduler;

    type Frames = Rc<RefCell<Vec<RenderInstruction>>>;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn recording_view(builder: CubeViewBuilder) -> (CubeView<ManualScheduler>, Frames) {
        let frames: Frames = Rc::default();
        let sink = Rc::clone(&frames);
        let view = builder
            .with_render_target(move |i: &RenderInstruction| -> Result<(), CubeError> {
                sink.borrow_mut().push(*i);
                Ok(())
            })
            .build(ManualScheduler::new())
            .unwrap();
        (view, frames)
    }

    fn connected_view() -> (CubeView<ManualScheduler>, Frames) {
        let (mut view, frames) = recording_view(CubeViewBuilder::new());
        view.connect();
        (view, frames)
    }

    /// Advance the fake clock and fire one frame.
    fn step(view: &mut CubeView<ManualScheduler>, by: Duration) {
        view.scheduler_mut().advance(by);
        view.run_due_frames();
    }

    struct ScriptedTilt {
        fail_init: bool,
        deinits: Rc<Cell<u32>>,
    }

    impl TiltAdapter for ScriptedTilt {
        fn init(&mut self) -> Result<(), CubeError> {
            if self.fail_init {
                Err(CubeError::TiltInit("no sensor".to_owned()))
            } else {
                Ok(())
            }
        }

        fn deinit(&mut self) {
            self.deinits.set(self.deinits.get() + 1);
        }

        fn apply(&mut self, orientation: &mut OrientationState) {
            orientation.yaw += 5.0;
            orientation.roll -= 200.0;
        }
    }

    #[test]
    fn test_build_without_target_fails() {
        let result = CubeViewBuilder::new().build(ManualScheduler::new());
        assert!(matches!(result, Err(CubeError::MissingRenderTarget)));
    }

    #[test]
    fn test_connect_renders_immediately_and_schedules_next_tick() {
        let (view, frames) = connected_view();
        assert!(view.is_connected());
        assert_eq!(frames.borrow().len(), 1);
        assert_eq!(view.scheduler().pending(), 1);
        assert!(view.pending_tick().is_some());
        assert_eq!(
            frames.borrow()[0].to_string(),
            "translateZ(40vmax) rotateZ(0deg) rotateX(0deg) rotateY(0deg)"
        );
    }

    #[test]
    fn test_each_frame_renders_once_and_reschedules() {
        let (mut view, frames) = connected_view();
        for _ in 0..5 {
            step(&mut view, ms(16));
        }
        assert_eq!(frames.borrow().len(), 6);
        assert_eq!(view.frames_rendered(), 6);
        assert_eq!(view.scheduler().pending(), 1);
    }

    #[test]
    fn test_disconnect_cancels_pending_tick() {
        let (mut view, frames) = connected_view();
        let stale = view.pending_tick().unwrap();
        view.disconnect();
        assert!(!view.is_connected());
        assert_eq!(view.scheduler().pending(), 0);
        assert!(view.pending_tick().is_none());

        view.handle_frame(stale);
        step(&mut view, ms(16));
        assert_eq!(frames.borrow().len(), 1);

        // Idempotent.
        view.disconnect();
    }

    #[test]
    fn test_reconnect_restarts_loop() {
        let (mut view, frames) = connected_view();
        view.disconnect();
        view.connect();
        step(&mut view, ms(16));
        assert_eq!(frames.borrow().len(), 3);
        assert_eq!(view.scheduler().pending(), 1);
    }

    #[test]
    fn test_tick_normalizes_before_projecting() {
        let (mut view, frames) = connected_view();
        view.set_orientation(OrientationState::new(190.0, 95.0, -190.0));
        step(&mut view, ms(16));
        let last = *frames.borrow().last().unwrap();
        assert_eq!((last.yaw, last.pitch, last.roll), (-170.0, 70.0, 170.0));
        assert_eq!(view.orientation(), OrientationState::new(-170.0, 70.0, 170.0));
    }

    #[test]
    fn test_animation_completes_exactly_and_callback_fires_once_after() {
        let (mut view, _frames) = connected_view();
        let calls = Rc::new(Cell::new(0));
        let seen = Rc::new(Cell::new(None));
        let (c, s) = (Rc::clone(&calls), Rc::clone(&seen));

        let target = view.animate_to(
            90.0,
            20.0,
            Some(ms(1000)),
            Some(Box::new(move |v: &mut CubeView<ManualScheduler>| {
                c.set(c.get() + 1);
                s.set(Some((v.orientation(), v.is_animating())));
            })),
        );
        assert_eq!(target, 90.0);
        assert!(view.is_animating());

        step(&mut view, ms(500));
        let mid = view.orientation();
        assert!((mid.yaw - 45.0).abs() < 1e-3);
        assert!((mid.pitch - 10.0).abs() < 1e-3);

        // Completing tick: state is exact, callback only queued.
        step(&mut view, ms(500));
        assert_eq!(view.orientation(), OrientationState::new(90.0, 20.0, 0.0));
        assert!(!view.is_animating());
        assert_eq!(calls.get(), 0);
        assert_eq!(view.scheduler().pending(), 2);

        step(&mut view, ms(16));
        assert_eq!(calls.get(), 1);
        assert_eq!(
            seen.get(),
            Some((OrientationState::new(90.0, 20.0, 0.0), false))
        );

        for _ in 0..5 {
            step(&mut view, ms(16));
        }
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_shortest_path_goes_through_negative_yaw() {
        let (mut view, _frames) = connected_view();
        let target = view.animate_to(350.0, 0.0, None, None);
        assert_eq!(target, -10.0);
        step(&mut view, ms(250));
        let yaw = view.orientation().yaw;
        assert!(yaw < 0.0 && yaw > -10.0, "yaw = {yaw}");
        step(&mut view, ms(1000));
        assert_eq!(view.orientation().yaw, -10.0);
    }

    #[test]
    fn test_second_animation_discards_first_callback() {
        let (mut view, _frames) = connected_view();
        let fired = Rc::new(RefCell::new(Vec::new()));
        let (a, b) = (Rc::clone(&fired), Rc::clone(&fired));

        let _ = view.animate_to(
            90.0,
            0.0,
            Some(ms(1000)),
            Some(Box::new(move |_: &mut CubeView<ManualScheduler>| {
                a.borrow_mut().push("first");
            })),
        );
        step(&mut view, ms(200));
        let _ = view.animate_to(
            -30.0,
            15.0,
            Some(ms(400)),
            Some(Box::new(move |_: &mut CubeView<ManualScheduler>| {
                b.borrow_mut().push("second");
            })),
        );
        for _ in 0..20 {
            step(&mut view, ms(100));
        }
        assert_eq!(*fired.borrow(), vec!["second"]);
        assert_eq!(view.orientation(), OrientationState::new(-30.0, 15.0, 0.0));
    }

    #[test]
    fn test_callback_can_chain_animation() {
        let (mut view, _frames) = connected_view();
        let _ = view.animate_to(
            45.0,
            0.0,
            Some(ms(100)),
            Some(Box::new(|v: &mut CubeView<ManualScheduler>| {
                let _ = v.animate_to(-45.0, 30.0, Some(ms(100)), None);
            })),
        );
        step(&mut view, ms(100)); // finishes first
        step(&mut view, ms(0)); // callback starts second
        assert!(view.is_animating());
        step(&mut view, ms(100));
        assert_eq!(view.orientation(), OrientationState::new(-45.0, 30.0, 0.0));
    }

    #[test]
    fn test_disconnect_drops_queued_callback() {
        let (mut view, _frames) = connected_view();
        let calls = Rc::new(Cell::new(0));
        let c = Rc::clone(&calls);
        let _ = view.animate_to(
            10.0,
            0.0,
            Some(ms(10)),
            Some(Box::new(move |_: &mut CubeView<ManualScheduler>| {
                c.set(c.get() + 1);
            })),
        );
        step(&mut view, ms(10));
        view.disconnect();
        step(&mut view, ms(16));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_drag_rotates_and_is_normalized_next_tick() {
        let (mut view, _frames) = connected_view();
        let _ = view.handle_input(InputEvent::PointerDown { x: 500.0, y: 500.0 });
        let r = view.handle_input(InputEvent::PointerMove { x: 400.0, y: 1500.0 });
        assert!(r.rotated);
        assert!(!r.suppress_scroll);
        // yaw += 100 * 0.1, pitch -= -1000 * 0.1
        assert!((view.orientation().yaw - 10.0).abs() < 1e-4);
        assert!((view.orientation().pitch - 100.0).abs() < 1e-3);

        step(&mut view, ms(16));
        assert_eq!(view.orientation().pitch, 70.0);

        let _ = view.handle_input(InputEvent::PointerUp);
        assert!(!view.is_dragging());
        let r = view.handle_input(InputEvent::PointerMove { x: 0.0, y: 0.0 });
        assert!(!r.rotated);
    }

    #[test]
    fn test_drag_suppressed_while_animating() {
        let (mut view, _frames) = connected_view();
        let _ = view.animate_to(60.0, 0.0, Some(ms(1000)), None);
        let _ = view.handle_input(InputEvent::PointerDown { x: 0.0, y: 0.0 });
        let before = view.orientation();
        for i in 1..20 {
            let p = i as f32 * 10.0;
            let r = view.handle_input(InputEvent::PointerMove { x: p, y: p });
            assert!(!r.rotated);
        }
        assert_eq!(view.orientation(), before);
    }

    #[test]
    fn test_freeze_blocks_drag_but_not_animation_or_tilt() {
        let deinits = Rc::new(Cell::new(0));
        let (mut view, _frames) = recording_view(
            CubeViewBuilder::new().with_tilt_adapter(ScriptedTilt {
                fail_init: false,
                deinits: Rc::clone(&deinits),
            }),
        );
        view.connect();
        view.freeze();
        assert!(view.is_frozen());

        let _ = view.handle_input(InputEvent::TouchStart { x: 0.0, y: 0.0 });
        let r = view.handle_input(InputEvent::TouchMove { x: 300.0, y: 300.0 });
        assert!(!r.rotated);
        assert!(r.suppress_scroll);
        assert_eq!(view.orientation(), OrientationState::default());

        assert!(view.poll_tilt());
        assert_eq!(view.orientation().yaw, 5.0);

        let _ = view.animate_to(20.0, 0.0, Some(ms(100)), None);
        step(&mut view, ms(100));
        assert_eq!(view.orientation().yaw, 20.0);
        // Tilt roll of -200 wrapped on the tick.
        assert_eq!(view.orientation().roll, 160.0);

        view.unfreeze();
        let _ = view.handle_input(InputEvent::TouchStart { x: 0.0, y: 0.0 });
        let r = view.handle_input(InputEvent::TouchMove { x: -10.0, y: 0.0 });
        assert!(r.rotated);

        view.disconnect();
        assert_eq!(deinits.get(), 1);
        assert!(!view.poll_tilt());
    }

    #[test]
    fn test_tilt_init_failure_leaves_adapter_inactive() {
        let deinits = Rc::new(Cell::new(0));
        let (mut view, frames) = recording_view(
            CubeViewBuilder::new().with_tilt_adapter(ScriptedTilt {
                fail_init: true,
                deinits: Rc::clone(&deinits),
            }),
        );
        view.connect();
        assert_eq!(frames.borrow().len(), 1);
        assert!(!view.poll_tilt());
        view.disconnect();
        assert_eq!(deinits.get(), 0);
    }

    #[test]
    fn test_zoom_switches_perspective_on_next_tick() {
        let (mut view, frames) = connected_view();
        view.zoom_in();
        assert!(view.zoomed_in());
        step(&mut view, ms(16));
        assert_eq!(
            frames.borrow().last().unwrap().translate_z,
            "60vmax".parse::<Length>().unwrap()
        );

        view.toggle_zoom();
        step(&mut view, ms(16));
        assert_eq!(
            frames.borrow().last().unwrap().translate_z,
            "40vmax".parse::<Length>().unwrap()
        );

        view.set_fov("700px");
        view.zoom_out();
        step(&mut view, ms(16));
        assert_eq!(view.fov(), "700px");
        assert_eq!(
            view.last_instruction().unwrap().translate_z,
            Length::px(700.0)
        );
    }

    #[test]
    fn test_bad_fov_skips_frame_but_keeps_looping() {
        let (mut view, frames) = connected_view();
        view.set_zoom_fov("wide");
        view.zoom_in();
        step(&mut view, ms(16));
        step(&mut view, ms(16));
        assert_eq!(frames.borrow().len(), 1);
        assert_eq!(view.scheduler().pending(), 1);
        assert_eq!(view.rejected_fov.as_deref(), Some("wide"));

        view.set_zoom_fov("55vmin");
        step(&mut view, ms(16));
        assert_eq!(frames.borrow().len(), 2);
        assert_eq!(view.zoom_fov(), "55vmin");
        assert!(view.rejected_fov.is_none());
    }

    #[test]
    fn test_unsupported_unit_is_remembered_per_value() {
        let (mut view, frames) = connected_view();
        view.set_fov("50em");
        for _ in 0..30 {
            step(&mut view, ms(16));
        }
        assert_eq!(frames.borrow().len(), 1);
        assert_eq!(view.rejected_fov.as_deref(), Some("50em"));

        view.set_fov("3rem");
        step(&mut view, ms(16));
        assert_eq!(view.rejected_fov.as_deref(), Some("3rem"));

        view.set_fov("1e3px");
        step(&mut view, ms(16));
        assert_eq!(frames.borrow().len(), 2);
        assert_eq!(
            view.last_instruction().unwrap().translate_z,
            Length::px(1000.0)
        );
    }

    #[test]
    fn test_unbounded_duration_does_not_stop_loop() {
        let (mut view, frames) = connected_view();
        let target = view.animate_to(90.0, 0.0, Some(Duration::MAX), None);
        assert_eq!(target, 90.0);
        for _ in 0..10 {
            step(&mut view, ms(1000));
        }
        assert!(view.is_animating());
        assert_eq!(frames.borrow().len(), 11);
        assert!(view.orientation().yaw < 1e-3);
    }

    #[test]
    fn test_set_easing_changes_curve() {
        let (mut view, _frames) = connected_view();
        assert_eq!(view.easing(), EasingFunction::QuadraticInOut);
        view.set_easing(EasingFunction::Linear);
        assert_eq!(view.options().animation.easing, EasingFunction::Linear);

        let _ = view.animate_to(40.0, 0.0, Some(ms(1000)), None);
        step(&mut view, ms(250));
        assert!((view.orientation().yaw - 10.0).abs() < 1e-3);
    }

    #[test]
    fn test_render_target_error_keeps_looping() {
        let attempts = Rc::new(Cell::new(0));
        let a = Rc::clone(&attempts);
        let mut view = CubeViewBuilder::new()
            .with_render_target(move |_: &RenderInstruction| -> Result<(), CubeError> {
                a.set(a.get() + 1);
                if a.get() % 2 == 0 {
                    Err(CubeError::Render("pivot detached".to_owned()))
                } else {
                    Ok(())
                }
            })
            .build(ManualScheduler::new())
            .unwrap();
        view.connect();
        for _ in 0..3 {
            step(&mut view, ms(16));
        }
        assert_eq!(attempts.get(), 4);
        assert_eq!(view.frames_rendered(), 2);
        assert_eq!(view.scheduler().pending(), 1);
    }

    #[test]
    fn test_options_seed_initial_state() {
        let mut options = CubeOptions::default();
        options.view.frozen = true;
        options.view.zoomed_in = true;
        options.animation.duration_ms = 200;
        let (mut view, frames) = recording_view(
            CubeViewBuilder::new()
                .with_options(options)
                .with_orientation(OrientationState::new(0.0, 0.0, 15.0)),
        );
        view.connect();
        assert!(view.modes().frozen);
        assert_eq!(frames.borrow()[0].translate_z.to_string(), "60vmax");
        assert_eq!(frames.borrow()[0].roll, 15.0);

        let _ = view.animate_to(30.0, 0.0, None, None);
        step(&mut view, ms(200));
        assert!(!view.is_animating());
    }
}
