//! Game State
//!
//! Everything that changes from frame to frame, stepped once per frame by the
//! main loop. Rendering and input polling live elsewhere so the whole
//! simulation runs headless in tests.

use macroquad::math::Vec2;
use rand::Rng;
use crate::tuning::Tuning;
use super::event::{EventQueue, FrameEvent};
use super::player::Player;
use super::score::Score;
use super::stream::PlatformStream;

/// Controls held during one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

pub struct GameState {
    pub tuning: Tuning,
    pub player: Player,
    pub platforms: PlatformStream,
    pub score: Score,
    /// Events recorded by the most recent `step`
    pub events: EventQueue<FrameEvent>,
    /// Frames simulated since startup
    pub frame: u64,
    /// Player ended the previous frame standing on a platform
    was_resting: bool,
}

impl GameState {
    /// Player centered horizontally just above a single starting platform
    pub fn new(tuning: Tuning) -> Self {
        let start = Vec2::new(
            tuning.screen_width / 2.0,
            tuning.player_start_bottom - tuning.player_radius,
        );
        let player = Player::new(start, &tuning);
        let first_x = tuning.screen_width / 2.0 - tuning.platform_width / 2.0;
        let platforms = PlatformStream::new(&tuning, first_x, tuning.first_platform_top);

        Self {
            tuning,
            player,
            platforms,
            score: Score::default(),
            events: EventQueue::new(),
            frame: 0,
            was_resting: false,
        }
    }

    /// Simulate one frame.
    ///
    /// Order matters: held controls each get their own integration step, then
    /// gravity, then the floor, then platform contact against this frame's
    /// platform positions. Platforms scroll last, so what the player landed on
    /// is drawn one pixel lower than where the contact was resolved.
    pub fn step<R: Rng>(&mut self, input: FrameInput, rng: &mut R) {
        self.events.clear();
        let player = &mut self.player;

        if input.left {
            player.apply_force(player.move_force(-1.0));
            player.integrate();
        }
        if input.right {
            player.apply_force(player.move_force(1.0));
            player.integrate();
        }
        if input.jump && player.can_jump {
            player.apply_force(player.jump_force());
            player.integrate();
            self.events.send(FrameEvent::Jumped);
        }

        player.apply_force(player.gravity_force());
        player.integrate();
        player.can_jump = false;

        self.score.tick();
        let floor = self.tuning.screen_height;
        if player.bottom() >= floor {
            player.set_bottom(floor);
            player.can_jump = true;

            let previous_best = self.score.best;
            let ended = self.score.end_run();
            self.events.send(FrameEvent::FloorHit { score: ended });
            if self.score.best > previous_best {
                self.events.send(FrameEvent::NewBest { best: self.score.best });
            }
        }

        let mut resting = false;
        for platform in self.platforms.iter_mut() {
            resting |= platform.update_contact(player);
        }
        if resting && !self.was_resting {
            self.events.send(FrameEvent::Landed);
        }
        self.was_resting = resting;

        let maintenance = self.platforms.maintain(rng);
        if maintenance.spawned {
            self.events.send(FrameEvent::PlatformSpawned);
        }
        if maintenance.retired {
            self.events.send(FrameEvent::PlatformRetired);
        }

        self.platforms.advance_all();
        self.frame += 1;
    }

    /// Background gray level for the current score
    pub fn background_shade(&self) -> u8 {
        let progress = self.score.progress(self.tuning.brighten_score);
        (30.0 + 170.0 * progress) as u8
    }
}
