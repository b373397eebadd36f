//! Input handling: event types, the drag state machine, and the
//! device-tilt adapter contract.

/// Drag/touch session tracking.
pub mod drag;
/// Platform-agnostic input events.
pub mod event;
/// Device-orientation adapter contract.
pub mod tilt;

pub use drag::{DragController, DragSession, TouchMove};
pub use event::{InputEvent, InputResponse};
pub use tilt::TiltAdapter;
