//! Construction of [`CubeView`] from options, a render target and an
//! optional tilt adapter.

use rustc_hash::FxHashMap;

use super::CubeView;
use crate::animation::AnimationController;
use crate::error::CubeError;
use crate::input::{DragController, TiltAdapter};
use crate::options::CubeOptions;
use crate::orientation::OrientationState;
use crate::scheduler::FrameScheduler;
use crate::target::RenderTarget;

/// Fluent builder for [`CubeView`].
///
/// ```ignore
/// let view = CubeViewBuilder::new()
///     .with_options(options)
///     .with_render_target(pivot)
///     .build(IntervalScheduler::default())?;
/// ```
#[derive(Default)]
pub struct CubeViewBuilder {
    options: Option<CubeOptions>,
    target: Option<Box<dyn RenderTarget>>,
    tilt: Option<Box<dyn TiltAdapter>>,
    orientation: OrientationState,
}

impl CubeViewBuilder {
    /// Builder with default options, zero orientation and no target.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: CubeOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the pivot handle that receives one transform per tick.
    #[must_use]
    pub fn with_render_target(
        mut self,
        target: impl RenderTarget + 'static,
    ) -> Self {
        self.target = Some(Box::new(target));
        self
    }

    /// Attach a device-tilt source, initialized on connect.
    #[must_use]
    pub fn with_tilt_adapter(
        mut self,
        adapter: impl TiltAdapter + 'static,
    ) -> Self {
        self.tilt = Some(Box::new(adapter));
        self
    }

    /// Start from a given orientation instead of all zeros.
    #[must_use]
    pub fn with_orientation(mut self, orientation: OrientationState) -> Self {
        self.orientation = orientation;
        self
    }

    /// Consume the builder and produce a [`CubeView`] driven by
    /// `scheduler`.
    ///
    /// Fails with [`CubeError::MissingRenderTarget`] when no render
    /// target was supplied; the loop never starts in that case.
    pub fn build<S: FrameScheduler>(
        self,
        scheduler: S,
    ) -> Result<CubeView<S>, CubeError> {
        let target = self.target.ok_or(CubeError::MissingRenderTarget)?;
        let options = self.options.unwrap_or_default();

        let drag = DragController::new(
            options.interaction.dragging_multiplier,
            options.interaction.touch_scroll_pitch_limit,
        );
        let animation = AnimationController::new(options.animation.easing);

        Ok(CubeView {
            orientation: self.orientation,
            options,
            drag,
            animation,
            scheduler,
            target,
            tilt: self.tilt,
            tilt_active: false,
            tasks: FxHashMap::default(),
            tick_frame: None,
            connected: false,
            last_instruction: None,
            frames_rendered: 0,
            rejected_fov: None,
        })
    }
}
