//! Platforms
//!
//! A platform only catches the player from above. The `collidable` latch is
//! set while the player hovers over it and cleared once the player's center
//! leaves its horizontal span, so jumping up through a platform from below
//! never snaps the player onto it.

use super::player::Player;
use super::rect::Rect;

#[derive(Debug, Clone)]
pub struct Platform {
    pub rect: Rect,
    /// Downward scroll per frame
    pub speed: f32,
    /// Player was seen above this platform and has not left its span since
    pub collidable: bool,
}

impl Platform {
    pub fn new(rect: Rect, speed: f32) -> Self {
        Self { rect, speed, collidable: false }
    }

    pub fn top(&self) -> f32 {
        self.rect.top()
    }

    /// Scroll down by one frame
    pub fn advance(&mut self) {
        self.rect.translate_y(self.speed);
    }

    /// Player center is over the platform and its bottom edge is above the top
    pub fn is_under_player(&self, player: &Player) -> bool {
        self.rect.spans_x(player.position.x) && player.bottom() < self.rect.top()
    }

    /// Clamp the player onto the top edge if it has sunk into the platform.
    ///
    /// Returns true when the player was clamped (and given a jump). If the
    /// player's center has left the span the latch is released instead.
    pub fn rest_player_on_top(&mut self, player: &mut Player) -> bool {
        if !self.rect.spans_x(player.position.x) {
            self.collidable = false;
            return false;
        }
        if player.bottom() >= self.rect.top() {
            player.set_bottom(self.rect.top());
            player.can_jump = true;
            return true;
        }
        false
    }

    /// Latch if the player is above, then rest it if latched.
    /// Returns true when the player is standing on this platform.
    pub fn update_contact(&mut self, player: &mut Player) -> bool {
        if self.is_under_player(player) {
            self.collidable = true;
        }
        self.collidable && self.rest_player_on_top(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;
    use macroquad::math::Vec2;

    fn platform(x: f32, y: f32) -> Platform {
        Platform::new(Rect::new(x, y, 100.0, 10.0), 1.0)
    }

    fn player_with_bottom(x: f32, bottom: f32) -> Player {
        let tuning = Tuning::default();
        Player::new(Vec2::new(x, bottom - tuning.player_radius), &tuning)
    }

    #[test]
    fn test_advance_scrolls_down() {
        let mut p = platform(200.0, 650.0);
        p.advance();
        assert!((p.top() - 651.0).abs() < 0.001);
    }

    #[test]
    fn test_under_player_requires_span_and_height() {
        let p = platform(200.0, 600.0);
        assert!(p.is_under_player(&player_with_bottom(250.0, 590.0)));
        // Outside the span
        assert!(!p.is_under_player(&player_with_bottom(310.0, 590.0)));
        // Exactly on the left edge is not inside
        assert!(!p.is_under_player(&player_with_bottom(200.0, 590.0)));
        // Touching the top is no longer "above"
        assert!(!p.is_under_player(&player_with_bottom(250.0, 600.0)));
    }

    #[test]
    fn test_rest_clamps_onto_top_edge() {
        let mut p = platform(200.0, 600.0);
        let mut player = player_with_bottom(240.0, 600.0);
        player.previous_position.y -= 3.0; // descending
        player.can_jump = false;

        assert!(p.rest_player_on_top(&mut player));
        assert!((player.bottom() - 600.0).abs() < 0.001);
        assert!(player.can_jump);
    }

    #[test]
    fn test_rest_lifts_player_that_sank_in() {
        let mut p = platform(200.0, 600.0);
        let mut player = player_with_bottom(240.0, 606.0);
        player.can_jump = false;

        p.rest_player_on_top(&mut player);
        assert!((player.bottom() - 600.0).abs() < 0.001);
        assert!(player.can_jump);
    }

    #[test]
    fn test_rest_never_pushes_down() {
        let mut p = platform(200.0, 600.0);
        let mut player = player_with_bottom(240.0, 550.0);
        player.can_jump = false;

        assert!(!p.rest_player_on_top(&mut player));
        assert!((player.bottom() - 550.0).abs() < 0.001);
        assert!(!player.can_jump);
    }

    #[test]
    fn test_leaving_span_releases_latch() {
        let mut p = platform(200.0, 600.0);
        p.collidable = true;
        let mut player = player_with_bottom(320.0, 620.0);

        assert!(!p.rest_player_on_top(&mut player));
        assert!(!p.collidable);
        // Player is left where it was
        assert!((player.bottom() - 620.0).abs() < 0.001);
    }

    #[test]
    fn test_contact_from_below_does_not_latch() {
        let mut p = platform(200.0, 600.0);
        // Jumping up through the platform
        let mut player = player_with_bottom(250.0, 605.0);
        assert!(!p.update_contact(&mut player));
        assert!(!p.collidable);
        assert!((player.bottom() - 605.0).abs() < 0.001);
    }

    #[test]
    fn test_latched_platform_catches_fast_fall() {
        let mut p = platform(200.0, 600.0);
        let mut player = player_with_bottom(250.0, 500.0);
        assert!(!p.update_contact(&mut player));
        assert!(p.collidable);

        // One big step lands well past the platform
        player.set_bottom(700.0);
        assert!(p.update_contact(&mut player));
        assert!((player.bottom() - 600.0).abs() < 0.001);
    }
}
