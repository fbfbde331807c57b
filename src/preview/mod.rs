pub mod engine;
pub mod texture_loader;
pub mod widgets;

use std::path::Path;

use anyhow::{Result, bail};
use raylib::prelude::*;
use tracing::info;

use showcase::{Deck, FrameClock};

use crate::preview::engine::{Engine, PageEngine};

pub struct WindowOptions {
    pub width: i32,
    pub height: i32,
    pub fps: u32,
}

pub fn run(deck: &Deck, base_dir: &Path, options: &WindowOptions) -> Result<()> {
    let (mut rl, thread) = raylib::init()
        .size(options.width, options.height)
        .title("Showcase")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(options.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let clock = FrameClock::new();
    let mut engine = PageEngine::new(clock.clone());
    if !engine.initialize(&mut rl, &thread, deck, base_dir) {
        bail!("deck has no widgets to show");
    }
    info!(widgets = deck.carousels.len(), "preview started");

    // --- Main Loop ---
    while !rl.window_should_close() {
        clock.advance(rl.get_frame_time());
        if !engine.render_frame(&mut rl, &thread) {
            break;
        }
    }

    engine.shutdown();
    info!("preview closed");
    Ok(())
}
