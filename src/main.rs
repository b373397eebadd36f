//! Headless cube view demo.
//!
//! Runs the render loop on the real clock, logging each transform the
//! pivot would receive. Pass a TOML preset path, or the name of a preset
//! in `./presets`, to override the defaults:
//!
//! ```text
//! RUST_LOG=vz_cube=trace vz-cube presets/wide.toml
//! RUST_LOG=vz_cube=trace vz-cube wide
//! ```

use std::path::Path;
use std::time::Duration;

use vz_cube::{
    CubeError, CubeOptions, CubeView, CubeViewBuilder, IntervalScheduler,
    RenderInstruction,
};

/// Hard stop in case the scripted sequence never disconnects.
const MAX_FRAMES: u32 = 600;

/// Directory searched for presets given by name.
const PRESET_DIR: &str = "presets";

/// Resolve `arg` as a preset file, falling back to a preset name under
/// [`PRESET_DIR`].
fn load_options(arg: &str) -> Result<CubeOptions, CubeError> {
    let path = Path::new(arg);
    if path.is_file() {
        CubeOptions::load(path)
    } else {
        CubeOptions::load_preset(Path::new(PRESET_DIR), arg)
    }
}

fn main() {
    env_logger::init();

    let options = match std::env::args().nth(1) {
        Some(arg) => match load_options(&arg) {
            Ok(options) => options,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        None => CubeOptions::default(),
    };
    let fps = options.render_loop.fallback_fps;

    let pivot = |instruction: &RenderInstruction| -> Result<(), CubeError> {
        log::info!("pivot transform: {instruction}");
        Ok(())
    };

    let mut view = match CubeViewBuilder::new()
        .with_options(options)
        .with_render_target(pivot)
        .build(IntervalScheduler::new(fps))
    {
        Ok(view) => view,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    view.connect();

    // 350° from rest goes the short way round, ending at -10.
    let target = view.animate_to(
        350.0,
        20.0,
        None,
        Some(Box::new(|view: &mut CubeView<IntervalScheduler>| {
            log::info!("first leg done at {:?}", view.orientation());
            view.toggle_zoom();
            let _ = view.animate_to(
                -135.0,
                -35.0,
                Some(Duration::from_millis(600)),
                Some(Box::new(|view: &mut CubeView<IntervalScheduler>| {
                    log::info!(
                        "second leg done at {:?}",
                        view.orientation()
                    );
                    view.disconnect();
                })),
            );
        })),
    );
    log::info!("animating to yaw {target}");

    let mut frames = 0;
    while frames < MAX_FRAMES && view.run_next_frame() {
        frames += 1;
    }
    view.disconnect();

    log::info!(
        "rendered {} frames, final orientation {:?}",
        view.frames_rendered(),
        view.orientation()
    );
}
