//! Input state management
//!
//! Polls both keyboard (macroquad) and gamepad input, combining them into a
//! unified action-based API.

use macroquad::prelude::*;
use crate::game::FrameInput;
use super::gamepad::{button, Gamepad};
use super::Action;

/// Stick deflection (after deadzone) that counts as a held direction
const STICK_THRESHOLD: f32 = 0.3;

/// Unified input state that handles both keyboard and gamepad
pub struct InputState {
    gamepad: Gamepad,
}

impl InputState {
    pub fn new() -> Self {
        Self { gamepad: Gamepad::new() }
    }

    /// Call once per frame before checking actions
    pub fn poll(&mut self) {
        self.gamepad.poll();
    }

    /// Check if action is currently held down
    pub fn action_down(&self, action: Action) -> bool {
        keyboard_down(action) || self.gamepad_down(action)
    }

    /// Check if an edge-triggered action was just pressed this frame.
    /// Held actions (move, jump) always report false; use `action_down`.
    pub fn action_pressed(&self, action: Action) -> bool {
        keyboard_pressed(action) || self.gamepad_pressed(action)
    }

    /// Held controls for the simulation step
    pub fn sample(&self) -> FrameInput {
        FrameInput {
            left: self.action_down(Action::MoveLeft),
            right: self.action_down(Action::MoveRight),
            jump: self.action_down(Action::Jump),
        }
    }

    fn gamepad_down(&self, action: Action) -> bool {
        let stick_x = self.gamepad.left_stick().x;
        let stick = match action {
            Action::MoveLeft => stick_x < -STICK_THRESHOLD,
            Action::MoveRight => stick_x > STICK_THRESHOLD,
            _ => false,
        };
        stick || self.gamepad.is_button_down(gamepad_button(action))
    }

    fn gamepad_pressed(&self, action: Action) -> bool {
        action.is_edge_triggered() && self.gamepad.is_button_pressed(gamepad_button(action))
    }

    /// Check if any gamepad is connected
    pub fn has_gamepad(&self) -> bool {
        self.gamepad.has_gamepad()
    }

    /// Name of the connected gamepad, if any
    pub fn gamepad_name(&self) -> Option<String> {
        self.gamepad.name()
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

/// Keys bound to each action; held and pressed checks share this table
fn keyboard_keys(action: Action) -> &'static [KeyCode] {
    match action {
        Action::MoveLeft => &[KeyCode::A, KeyCode::Left],
        Action::MoveRight => &[KeyCode::D, KeyCode::Right],
        Action::Jump => &[KeyCode::Space, KeyCode::W, KeyCode::Up],
        Action::ToggleDebug => &[KeyCode::F3],
        Action::Quit => &[KeyCode::Escape],
    }
}

fn gamepad_button(action: Action) -> u32 {
    match action {
        Action::MoveLeft => button::DPAD_LEFT,
        Action::MoveRight => button::DPAD_RIGHT,
        Action::Jump => button::A,
        Action::ToggleDebug => button::SELECT,
        Action::Quit => button::START,
    }
}

fn keyboard_down(action: Action) -> bool {
    keyboard_keys(action).iter().any(|&key| is_key_down(key))
}

fn keyboard_pressed(action: Action) -> bool {
    action.is_edge_triggered() && keyboard_keys(action).iter().any(|&key| is_key_pressed(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jump_keys_match_controls() {
        let keys = keyboard_keys(Action::Jump);
        for key in [KeyCode::Space, KeyCode::W, KeyCode::Up] {
            assert!(keys.contains(&key), "{:?}", key);
        }
        assert_eq!(keyboard_keys(Action::MoveLeft), &[KeyCode::A, KeyCode::Left]);
        assert_eq!(keyboard_keys(Action::MoveRight), &[KeyCode::D, KeyCode::Right]);
        assert_eq!(keyboard_keys(Action::Quit), &[KeyCode::Escape]);
    }

    #[test]
    fn test_gamepad_buttons() {
        assert_eq!(gamepad_button(Action::Jump), button::A);
        assert_eq!(gamepad_button(Action::MoveLeft), button::DPAD_LEFT);
        assert_eq!(gamepad_button(Action::MoveRight), button::DPAD_RIGHT);
        assert_eq!(gamepad_button(Action::ToggleDebug), button::SELECT);
        assert_eq!(gamepad_button(Action::Quit), button::START);
    }

    #[test]
    fn test_held_actions_have_no_press_edge() {
        // Rejected before macroquad's key state is queried
        for action in [Action::MoveLeft, Action::MoveRight, Action::Jump] {
            assert!(!action.is_edge_triggered());
            assert!(!keyboard_pressed(action));
        }
    }
}
