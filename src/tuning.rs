//! Gameplay tuning
//!
//! Every constant the simulation uses lives in `Tuning`. The defaults are the
//! shipped game; a RON file can override any subset of fields on native builds.

use serde::{Deserialize, Serialize};
#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};
use crate::pacing::FpsLimit;

/// File name looked up next to the executable's working directory and in the
/// user config directory
pub const TUNING_FILE: &str = "tuning.ron";

/// Error type for tuning loading
#[derive(Debug)]
pub enum TuningError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    ValidationError(String),
}

impl From<std::io::Error> for TuningError {
    fn from(e: std::io::Error) -> Self {
        TuningError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for TuningError {
    fn from(e: ron::error::SpannedError) -> Self {
        TuningError::ParseError(e)
    }
}

impl std::fmt::Display for TuningError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TuningError::IoError(e) => write!(f, "IO error: {}", e),
            TuningError::ParseError(e) => write!(f, "Parse error: {}", e),
            TuningError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for TuningError {}

/// Gameplay constants
///
/// Distances are in logical pixels, forces in pixels per integration step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Canvas width; the player wraps around at this edge
    pub screen_width: f32,
    /// Canvas height; the floor sits here
    pub screen_height: f32,

    /// Player circle radius
    pub player_radius: f32,
    /// Downward force applied every frame
    pub gravity: f32,
    /// Fraction of the implied velocity kept per integration step
    pub damping: f32,
    /// Horizontal force while a move key is held
    pub move_speed: f32,
    /// Upward force of a jump (applied as negative y)
    pub jump_impulse: f32,
    /// Y coordinate of the player's bottom edge at startup
    pub player_start_bottom: f32,

    pub platform_width: f32,
    pub platform_height: f32,
    /// Downward scroll per frame
    pub scroll_speed: f32,
    /// Top edge of the pre-seeded platform under the player
    pub first_platform_top: f32,
    /// Smallest vertical gap between consecutive platform tops
    pub spawn_gap_min: f32,
    /// Largest vertical gap between consecutive platform tops
    pub spawn_gap_max: f32,

    /// Score at which the background reaches full brightness
    pub brighten_score: u64,

    pub fps_limit: FpsLimit,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: 500.0,
            screen_height: 800.0,
            player_radius: 20.0,
            gravity: 1.0,
            damping: 0.9,
            move_speed: 1.0,
            jump_impulse: 35.0,
            player_start_bottom: 600.0,
            platform_width: 100.0,
            platform_height: 10.0,
            scroll_speed: 1.0,
            first_platform_top: 650.0,
            spawn_gap_min: 20.0,   // one player radius
            spawn_gap_max: 200.0,
            brighten_score: 17_000,
            fps_limit: FpsLimit::Fps60,
        }
    }
}

fn require_positive(name: &str, value: f32) -> Result<(), String> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(format!("{} must be a positive number (got {})", name, value))
    }
}

fn require_finite(name: &str, value: f32) -> Result<(), String> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(format!("{} must be finite (got {})", name, value))
    }
}

impl Tuning {
    /// Check that the values describe a playable game
    pub fn validate(&self) -> Result<(), TuningError> {
        self.check().map_err(TuningError::ValidationError)
    }

    fn check(&self) -> Result<(), String> {
        require_positive("screen_width", self.screen_width)?;
        require_positive("screen_height", self.screen_height)?;
        require_positive("player_radius", self.player_radius)?;
        require_positive("platform_width", self.platform_width)?;
        require_positive("platform_height", self.platform_height)?;
        require_positive("scroll_speed", self.scroll_speed)?;
        require_positive("spawn_gap_min", self.spawn_gap_min)?;
        require_positive("spawn_gap_max", self.spawn_gap_max)?;
        require_finite("gravity", self.gravity)?;
        require_finite("move_speed", self.move_speed)?;
        require_finite("jump_impulse", self.jump_impulse)?;
        require_finite("player_start_bottom", self.player_start_bottom)?;
        require_finite("first_platform_top", self.first_platform_top)?;

        if !(self.damping.is_finite() && (0.0..=1.0).contains(&self.damping)) {
            return Err(format!("damping must be within 0..=1 (got {})", self.damping));
        }
        // Platform tops are whole pixels
        if self.spawn_gap_min < 1.0 {
            return Err(format!("spawn_gap_min must be at least 1 (got {})", self.spawn_gap_min));
        }
        if self.spawn_gap_min > self.spawn_gap_max {
            return Err(format!(
                "spawn_gap_min ({}) exceeds spawn_gap_max ({})",
                self.spawn_gap_min, self.spawn_gap_max
            ));
        }
        if self.platform_width > self.screen_width {
            return Err(format!(
                "platform_width ({}) is wider than the screen ({})",
                self.platform_width, self.screen_width
            ));
        }
        if self.brighten_score == 0 {
            return Err("brighten_score must be at least 1".to_string());
        }
        Ok(())
    }

    /// Parse and validate tuning from RON text
    pub fn from_ron(text: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = ron::from_str(text)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a RON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &Path) -> Result<Self, TuningError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_ron(&text)
    }

    /// Candidate override files, most specific first
    #[cfg(not(target_arch = "wasm32"))]
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(TUNING_FILE)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("doodle-copy").join(TUNING_FILE));
        }
        paths
    }

    /// Load the first override file that exists, falling back to defaults.
    ///
    /// A file that exists but cannot be read or is invalid is reported and
    /// skipped; the game always starts.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_or_default() -> Self {
        Self::load_first_of(&Self::search_paths())
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn load_first_of(paths: &[PathBuf]) -> Self {
        use macroquad::logging::{info, warn};

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load(path) {
                Ok(tuning) => {
                    info!("Loaded tuning from {}", path.display());
                    return tuning;
                }
                Err(e) => warn!("Ignoring {}: {}", path.display(), e),
            }
        }
        Self::default()
    }

    /// WASM has no filesystem to read overrides from
    #[cfg(target_arch = "wasm32")]
    pub fn load_or_default() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let tuning = Tuning::from_ron("(gravity: 2.0, fps_limit: Fps30)").unwrap();
        assert!((tuning.gravity - 2.0).abs() < 0.001);
        assert_eq!(tuning.fps_limit, FpsLimit::Fps30);
        assert!((tuning.screen_width - 500.0).abs() < 0.001);
        assert_eq!(tuning.brighten_score, 17_000);
    }

    #[test]
    fn test_inverted_gap_range_rejected() {
        let err = Tuning::from_ron("(spawn_gap_min: 300.0, spawn_gap_max: 200.0)").unwrap_err();
        assert!(matches!(err, TuningError::ValidationError(_)));
    }

    #[test]
    fn test_sub_pixel_gap_rejected() {
        let err = Tuning::from_ron("(spawn_gap_min: 0.4, spawn_gap_max: 0.4)").unwrap_err();
        assert!(matches!(err, TuningError::ValidationError(_)));

        assert!(Tuning::from_ron("(spawn_gap_min: 1.0, spawn_gap_max: 1.0)").is_ok());
    }

    #[test]
    fn test_platform_wider_than_screen_rejected() {
        let err = Tuning::from_ron("(platform_width: 600.0)").unwrap_err();
        assert!(matches!(err, TuningError::ValidationError(_)));
    }

    #[test]
    fn test_malformed_ron_is_parse_error() {
        let err = Tuning::from_ron("(gravity: ").unwrap_err();
        assert!(matches!(err, TuningError::ParseError(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "(scroll_speed: 2.0)").unwrap();

        let tuning = Tuning::load(file.path()).unwrap();
        assert!((tuning.scroll_speed - 2.0).abs() < 0.001);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Tuning::load(&dir.path().join("missing.ron")).unwrap_err();
        assert!(matches!(err, TuningError::IoError(_)));
    }

    #[test]
    fn test_invalid_file_falls_back_to_next_candidate() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("bad.ron");
        let good = dir.path().join("good.ron");
        std::fs::write(&bad, "(damping: 4.0)").unwrap();
        std::fs::write(&good, "(move_speed: 3.0)").unwrap();

        let tuning = Tuning::load_first_of(&[bad, good]);
        assert!((tuning.move_speed - 3.0).abs() < 0.001);
    }

    #[test]
    fn test_no_candidates_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let tuning = Tuning::load_first_of(&[dir.path().join("nope.ron")]);
        assert_eq!(tuning, Tuning::default());
    }
}
