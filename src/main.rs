//! Doodle Copy: an endless vertical platformer
//!
//! Bounce a circle up a never-ending stream of scrolling platforms. Score is
//! the number of frames survived since last touching the floor.
//!
//! Controls: A/D or arrows to move, Space/W/Up to jump, F3 for debug info,
//! Escape to quit.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod game;
mod input;
mod pacing;
mod tuning;

use std::sync::OnceLock;
use macroquad::logging::info;
use macroquad::prelude::*;
use ::rand::rngs::StdRng;
use ::rand::SeedableRng;
use game::{draw_game, FrameEvent, GameState};
use input::{Action, InputState};
use tuning::Tuning;

/// Loaded once: the window size comes from it before `main` runs
fn tuning() -> &'static Tuning {
    static TUNING: OnceLock<Tuning> = OnceLock::new();
    TUNING.get_or_init(Tuning::load_or_default)
}

fn window_conf() -> Conf {
    let tuning = tuning();
    Conf {
        window_title: "Doodle copy".to_string(),
        window_width: tuning.screen_width as i32,
        window_height: tuning.screen_height as i32,
        window_resizable: false,
        high_dpi: false,
        ..Default::default()
    }
}

/// Seed for platform placement; any varying value will do
fn clock_seed() -> u64 {
    (macroquad::miniquad::date::now() * 1000.0) as u64
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    info!("=== Doodle copy v{} ===", VERSION);

    // Handle window close ourselves so the loop can exit cleanly
    prevent_quit();

    let tuning = tuning().clone();
    let fps_limit = tuning.fps_limit;
    info!("FPS limit: {}", fps_limit.label());

    let mut rng = StdRng::seed_from_u64(clock_seed());
    let mut state = GameState::new(tuning);
    let mut input = InputState::new();
    let mut show_debug = false;
    let mut had_gamepad = false;

    loop {
        let frame_start = get_time();

        input.poll();
        if input.has_gamepad() != had_gamepad {
            had_gamepad = !had_gamepad;
            match input.gamepad_name() {
                Some(name) if had_gamepad => info!("Gamepad connected: {}", name),
                _ => info!("Gamepad disconnected"),
            }
        }

        if is_quit_requested() || input.action_pressed(Action::Quit) {
            break;
        }
        if input.action_pressed(Action::ToggleDebug) {
            show_debug = !show_debug;
        }

        state.step(input.sample(), &mut rng);
        for event in state.events.iter() {
            match event {
                // Resting on the floor ends a one-frame "run" every frame
                FrameEvent::FloorHit { score } if *score > 1 => info!("Run over: {}", score),
                FrameEvent::NewBest { best } => info!("New best: {}", best),
                _ => {}
            }
        }

        draw_game(&state, show_debug);

        pacing::wait_for_frame_end(frame_start, fps_limit);
        next_frame().await;
    }

    info!("Quit after {} frames (best {})", state.frame, state.score.best);
}
