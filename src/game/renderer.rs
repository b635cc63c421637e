//! Frame rendering with macroquad's immediate-mode 2D calls

use macroquad::prelude::*;
use super::state::GameState;

const PLAYER_COLOR: Color = Color::new(100.0 / 255.0, 100.0 / 255.0, 1.0, 1.0);
const PLATFORM_COLOR: Color = Color::new(200.0 / 255.0, 100.0 / 255.0, 100.0 / 255.0, 1.0);
const PLAYER_OUTLINE: f32 = 3.0;
const HUD_FONT_SIZE: f32 = 20.0;
const HUD_MARGIN: f32 = 10.0;

/// Score line shown in the top-left corner
pub fn score_text(state: &GameState) -> String {
    format!("Best: {}, Score: {}", state.score.best, state.score.current)
}

/// Debug overlay lines
pub fn debug_lines(state: &GameState, fps: i32) -> [String; 2] {
    [
        format!(
            "FPS: {} x: {} y: {}",
            fps, state.player.position.x as i32, state.player.position.y as i32
        ),
        format!(
            "Platforms: {} vy: {:.1}",
            state.platforms.len(),
            state.player.velocity().y
        ),
    ]
}

/// Draw one frame of the game
pub fn draw_game(state: &GameState, show_debug: bool) {
    let shade = state.background_shade();
    clear_background(Color::from_rgba(shade, shade, shade, 255));

    let player = &state.player;
    draw_circle_lines(
        player.position.x,
        player.position.y,
        player.radius,
        PLAYER_OUTLINE,
        PLAYER_COLOR,
    );

    for platform in state.platforms.iter() {
        let r = platform.rect;
        draw_rectangle(r.x, r.y, r.w, r.h, PLATFORM_COLOR);
    }

    // draw_text positions the baseline, not the top
    let mut y = HUD_MARGIN + HUD_FONT_SIZE * 0.75;
    draw_text(&score_text(state), HUD_MARGIN, y, HUD_FONT_SIZE, WHITE);

    if show_debug {
        for line in debug_lines(state, get_fps()) {
            y += HUD_FONT_SIZE;
            draw_text(&line, HUD_MARGIN, y, HUD_FONT_SIZE, WHITE);
        }
    }
}
