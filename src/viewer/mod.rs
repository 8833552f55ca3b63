//! raylib window adapter: the screen surface, the lazy texture gallery and
//! keyboard/mouse input wired to a [`Slider`].

pub mod input;
pub mod slide;
pub mod surface;
pub mod texture_loader;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use raylib::prelude::*;
use tracing::info;

use crate::config::SliderConfig;
use crate::constants::{FPS, RENDER_HEIGHT, RENDER_WIDTH};
use crate::input::InputBus;
use crate::slider::Slider;
use crate::viewer::slide::Gallery;
use crate::viewer::surface::ScreenSurface;

/// Opens the window and runs the frame loop until it is closed.
pub fn run(paths: Vec<PathBuf>, config: SliderConfig) -> Result<()> {
    // --- Window ---
    let (mut rl, thread) = raylib::init()
        .size(RENDER_WIDTH, RENDER_HEIGHT)
        .title("Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Wire the slider to the screen, the gallery and the input bus ---
    let slide_count = paths.len();
    let start_autoplay = config.autoplay;
    let mut bus = InputBus::new();
    let slider = Slider::shared(
        config,
        slide_count,
        ScreenSurface::new(slide_count),
        Gallery::new(paths),
        &mut bus,
    );
    if start_autoplay {
        slider.borrow_mut().autoplay();
    }

    // --- Main Loop ---
    while !rl.window_should_close() {
        // 1. Manual input: every intent runs to completion before the next one
        let bar_len = slider.borrow().surface().bar_len();
        let frame = input::poll(&rl, bar_len);
        for intent in frame.intents {
            bus.emit(intent);
        }
        if frame.toggle_autoplay {
            let mut slider = slider.borrow_mut();
            if slider.is_autoplay_running() {
                slider.stop_autoplay();
            } else {
                slider.autoplay();
            }
        }

        // 2. Autoplay, then fetch whatever the transitions asked for
        let dt = Duration::try_from_secs_f32(rl.get_frame_time()).unwrap_or_default();
        {
            let mut slider = slider.borrow_mut();
            slider.tick(dt);
            slider.images_mut().load_pending(&mut rl, &thread);
        }

        // 3. Render current slide + bar
        let slider = slider.borrow();
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        if let Some(index) = slider.current_index() {
            slider.images().draw(index, &mut d);
        } else {
            d.draw_text("No slides.", 20, 20, 20, Color::GRAY);
        }
        slider.surface().draw_bar(&mut d);
        if !slider.is_autoplay_running() {
            let height = d.get_screen_height();
            d.draw_text("paused", 20, height - 30, 16, Color::DARKGRAY);
        }
    }

    info!("window closed");
    Ok(())
}
