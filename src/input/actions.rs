//! Game action definitions

/// Everything the player can ask the game to do
///
/// Button mappings (Xbox/PlayStation):
/// - D-pad / left stick = Move
/// - A/X = Jump
/// - Select = Toggle debug overlay
/// - Start = Quit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Held every frame
    MoveLeft,
    MoveRight,
    Jump,

    // Edge-triggered
    ToggleDebug,
    Quit,
}

impl Action {
    /// Fires once per press rather than every frame it is held
    pub fn is_edge_triggered(self) -> bool {
        matches!(self, Action::ToggleDebug | Action::Quit)
    }
}
