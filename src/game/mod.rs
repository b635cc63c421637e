//! Game Simulation
//!
//! One player circle bouncing up an endless stream of scrolling platforms.
//!
//! - Player: position-based integration with horizontal wraparound
//! - Platform: scrolling rectangle that catches the player from above
//! - PlatformStream: spawns platforms above, retires them below
//! - GameState: the per-frame step tying it together
//!
//! Nothing here touches the window except `renderer`, so the simulation
//! is fully testable headless.

pub mod rect;
pub mod player;
pub mod platform;
pub mod stream;
pub mod score;
pub mod event;
pub mod state;
pub mod renderer;

// Re-export main types
pub use event::FrameEvent;
pub use state::{FrameInput, GameState};
pub use renderer::draw_game;
