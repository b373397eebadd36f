/// Platform-agnostic pointer/touch events.
///
/// The host's input-capture layer translates raw events into these and
/// feeds them to [`CubeView::handle_input`](crate::CubeView::handle_input).
///
/// # Example
///
/// ```ignore
/// let response = view.handle_input(InputEvent::PointerMove { x: 100.0, y: 200.0 });
/// if response.suppress_scroll {
///     event.prevent_default();
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary pointer pressed.
    PointerDown {
        /// Horizontal page position.
        x: f32,
        /// Vertical page position.
        y: f32,
    },
    /// Pointer moved.
    PointerMove {
        /// Horizontal page position.
        x: f32,
        /// Vertical page position.
        y: f32,
    },
    /// Primary pointer released.
    PointerUp,
    /// First touch point went down.
    TouchStart {
        /// Horizontal page position of the first touch.
        x: f32,
        /// Vertical page position of the first touch.
        y: f32,
    },
    /// First touch point moved.
    TouchMove {
        /// Horizontal page position of the first touch.
        x: f32,
        /// Vertical page position of the first touch.
        y: f32,
    },
    /// Touch ended or was cancelled.
    TouchEnd,
}

/// What the view did with an [`InputEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputResponse {
    /// The orientation changed.
    pub rotated: bool,
    /// The host should suppress the default page scroll for this event.
    pub suppress_scroll: bool,
}
