//! Player Body
//!
//! A single circle moved by position-based (Verlet-style) integration:
//! velocity is never stored, it is implied by the distance between the
//! current and previous positions.
//!
//! Forces use replacement semantics. `apply_force` overwrites the pending
//! acceleration rather than adding to it, so each force must be followed by
//! its own `integrate` call. Two forces applied back to back without an
//! integration in between means only the second one acts.

use macroquad::math::Vec2;
use crate::tuning::Tuning;

/// The player-controlled circle
#[derive(Debug, Clone)]
pub struct Player {
    pub position: Vec2,
    pub previous_position: Vec2,
    /// Pending force, consumed by the next `integrate`
    pub acceleration: Vec2,
    pub radius: f32,
    pub gravity: f32,
    pub damping: f32,
    pub move_speed: f32,
    pub jump_impulse: f32,
    /// Single-use jump permission, granted by standing on something
    pub can_jump: bool,
    /// Horizontal wrap distance (screen width)
    wrap_width: f32,
}

impl Player {
    /// Create a player at rest with its center at `position`
    pub fn new(position: Vec2, tuning: &Tuning) -> Self {
        Self {
            position,
            previous_position: position,
            acceleration: Vec2::ZERO,
            radius: tuning.player_radius,
            gravity: tuning.gravity,
            damping: tuning.damping,
            move_speed: tuning.move_speed,
            jump_impulse: tuning.jump_impulse,
            can_jump: true,
            wrap_width: tuning.screen_width,
        }
    }

    /// Velocity implied by the last integration step, before damping
    pub fn velocity(&self) -> Vec2 {
        self.position - self.previous_position
    }

    /// Y coordinate of the bottom of the circle
    pub fn bottom(&self) -> f32 {
        self.position.y + self.radius
    }

    /// Move the circle so its bottom edge sits at `y`.
    ///
    /// Only the current position changes, so any downward velocity is
    /// cancelled by the next integration's position delta.
    pub fn set_bottom(&mut self, y: f32) {
        self.position.y = y - self.radius;
    }

    /// Replace the pending acceleration with `force`
    pub fn apply_force(&mut self, force: Vec2) {
        self.acceleration = force;
    }

    /// Advance one step and wrap horizontally
    pub fn integrate(&mut self) {
        let velocity = (self.position - self.previous_position) * self.damping;
        self.previous_position = self.position;
        self.position += velocity + self.acceleration;
        self.acceleration = Vec2::ZERO;
        self.wrap_horizontal();
    }

    /// Keep x within [0, wrap_width), shifting the previous position by the
    /// same amount so the implied velocity survives the wrap.
    pub fn wrap_horizontal(&mut self) {
        let x = self.position.x;
        if (0.0..self.wrap_width).contains(&x) {
            return;
        }
        let mut wrapped = x.rem_euclid(self.wrap_width);
        // A tiny negative x can round up to exactly the width
        if wrapped >= self.wrap_width {
            wrapped = 0.0;
        }
        self.position.x = wrapped;
        self.previous_position.x += wrapped - x;
    }

    /// Force for one step of held horizontal input (`direction` is -1 or 1)
    pub fn move_force(&self, direction: f32) -> Vec2 {
        Vec2::new(direction * self.move_speed, 0.0)
    }

    /// Upward jump force
    pub fn jump_force(&self) -> Vec2 {
        Vec2::new(0.0, -self.jump_impulse)
    }

    /// Constant downward pull
    pub fn gravity_force(&self) -> Vec2 {
        Vec2::new(0.0, self.gravity)
    }
}
