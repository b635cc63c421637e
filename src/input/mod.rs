//! Input handling with gamepad support
//!
//! Provides an action-based input system that works with both the keyboard
//! and a gamepad controller.
//!
//! Native: Uses gilrs crate for cross-platform gamepad input
//! WASM: Keyboard only

mod actions;
mod gamepad;
mod state;

pub use actions::*;
pub use state::*;
