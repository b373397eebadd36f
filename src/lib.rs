// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Test modules use unwrap/panic freely
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::panic))]

//! Orientation state machine and render loop for a rotatable cube view.
//!
//! The cube is turned by dragging, by a device-tilt source, or by a
//! programmatic eased transition. Once per frame the loop advances the
//! transition, normalizes yaw/pitch/roll and hands a perspective
//! transform to the render target.
//!
//! # Key entry points
//!
//! - [`CubeView`] - owns the orientation and runs the loop
//! - [`CubeViewBuilder`] - wires options, render target and tilt adapter
//! - [`FrameScheduler`] - injectable frame pacing ([`ManualScheduler`] for
//!   hosts that step frames themselves, [`IntervalScheduler`] for a fixed
//!   rate on the real clock)
//! - [`CubeOptions`] - perspective, freeze and tuning settings with TOML
//!   presets
//!
//! # Frame order
//!
//! Each tick runs, in order: animation step → normalize → projection →
//! render target → reschedule. Drag and tilt input mutate the orientation
//! between ticks and are picked up by the next one. Animation-completion
//! callbacks run on their own frame, never inside a tick.
//!
//! ```ignore
//! let mut view = CubeViewBuilder::new()
//!     .with_render_target(|i: &RenderInstruction| -> Result<(), CubeError> {
//!         pivot.set_transform(&i.to_string());
//!         Ok(())
//!     })
//!     .build(IntervalScheduler::default())?;
//! view.connect();
//! view.animate_to(90.0, 20.0, None, None);
//! while view.run_next_frame() {}
//! ```

pub mod animation;
pub mod error;
pub mod input;
pub mod options;
pub mod orientation;
pub mod projection;
pub mod scheduler;
pub mod target;
pub mod view;

pub use animation::EasingFunction;
pub use error::CubeError;
pub use input::{InputEvent, InputResponse, TiltAdapter};
pub use options::CubeOptions;
pub use orientation::{Modes, OrientationState};
pub use projection::{Length, LengthUnit, RenderInstruction, Viewport};
pub use scheduler::{FrameId, FrameScheduler, IntervalScheduler, ManualScheduler};
pub use target::RenderTarget;
pub use view::{AnimationCallback, CubeView, CubeViewBuilder};
