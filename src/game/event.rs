//! Frame Events
//!
//! The simulation records what happened during a frame instead of acting on
//! it directly. The queue is cleared at the start of every step, so between
//! steps it holds exactly the last frame's events.

/// A queue for events of a single type.
/// Events are collected during a step and read until the next one.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Send an event (add to queue)
    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    /// Iterate over events without clearing
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.events.iter()
    }

    /// Clear all events without processing
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Something noteworthy that happened during one simulation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameEvent {
    /// Jump impulse was applied
    Jumped,
    /// Player came to rest on a platform after being airborne
    Landed,
    /// Player touched the floor, ending a run worth `score`
    FloorHit { score: u64 },
    /// The run that just ended beat the previous best
    NewBest { best: u64 },
    PlatformSpawned,
    PlatformRetired,
}
