//! Gopher Shooter - a small top-down arcade shooter
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (movement, collisions, scoring, spawning)
//! - `renderer`: Render snapshots and CPU-side sprite batching
//! - `platform`: Frame clock and demo input source
//! - `settings`: Runtime configuration loaded from JSON

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Window title shown by the frontend and drawn as the static HUD line
    pub const TITLE: &str = "Gopher Shooter";
    /// Initial playfield dimensions
    pub const DEFAULT_WIDTH: f32 = 800.0;
    pub const DEFAULT_HEIGHT: f32 = 450.0;

    /// Conceptual sprite box shared by the player and enemies
    pub const SPRITE_WIDTH: f32 = 60.0;
    pub const SPRITE_HEIGHT: f32 = 70.0;
    /// The player may not climb above this row
    pub const PLAYER_MIN_Y: f32 = 5.0;
    /// Player start offsets relative to the playfield size
    pub const PLAYER_START_INSET_X: f32 = 50.0;
    pub const PLAYER_START_INSET_Y: f32 = 100.0;

    /// Velocity added per held direction key (pixels/s)
    pub const PLAYER_SPEED: f32 = 350.0;
    /// Fire is accepted only when more than this many ticks passed since the last shot
    pub const FIRE_COOLDOWN_TICKS: u64 = 20;
    /// Upward projectile speed (pixels/s)
    pub const PROJECTILE_SPEED: f32 = 300.0;
    /// Glyph drawn for each projectile
    pub const PROJECTILE_GLYPH: &str = "Go";

    /// Enemies are dropped once they sink this far below the playfield
    pub const OFFSCREEN_MARGIN: f32 = 10.0;
    /// Spawn row (above the visible playfield)
    pub const SPAWN_Y: f32 = -50.0;
    /// Spawn countdown is drawn from `SPAWN_COUNTDOWN_MIN..SPAWN_COUNTDOWN_MIN + SPAWN_COUNTDOWN_SPREAD`
    pub const SPAWN_COUNTDOWN_MIN: i32 = 30;
    pub const SPAWN_COUNTDOWN_SPREAD: i32 = 50;

    /// Enemy hit box grows this far beyond the sprite anchor on the top/left
    pub const HITBOX_PAD: f32 = 10.0;
    /// Enemy hit box reaches this far right/down from the sprite anchor
    pub const HITBOX_REACH: f32 = 70.0;
    /// Offset from a projectile's position to its collision probe point
    pub const PROBE_OFFSET_X: f32 = -20.0;
    pub const PROBE_OFFSET_Y: f32 = 20.0;

    /// Per-tick enemy displacement
    pub const RED_FALL: f32 = 4.0;
    pub const BLUE_FALL: f32 = 6.0;
    pub const BLUE_SWAY_PERIOD_TICKS: u64 = 5;
    pub const BLUE_SWAY_AMPLITUDE: f32 = 5.0;
    pub const BLUE_SWAY_GAIN: f32 = 5.0;
    pub const GREEN_FALL: f32 = 8.0;
    pub const GREEN_DRIFT: f32 = 6.0;

    /// Points per destroyed enemy
    pub const RED_POINTS: u64 = 10;
    pub const BLUE_POINTS: u64 = 20;
    pub const GREEN_POINTS: u64 = 30;

    /// HUD text anchors
    pub const TITLE_POS: (f32, f32) = (20.0, 20.0);
    pub const SCORE_POS: (f32, f32) = (20.0, 60.0);

    /// Largest frame step the platform clock hands to the simulation (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
}

/// Clamp a frame delta to a usable value.
///
/// Negative and non-finite deltas are precondition violations; they become zero
/// so they never feed backwards or NaN motion into the world.
#[inline]
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 { dt } else { 0.0 }
}

/// Format the HUD score line
#[inline]
pub fn score_line(score: u64) -> String {
    format!("score: {}", score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_dt() {
        assert_eq!(sanitize_dt(0.016), 0.016);
        assert_eq!(sanitize_dt(0.0), 0.0);
        assert_eq!(sanitize_dt(-1.0), 0.0);
        assert_eq!(sanitize_dt(f32::NAN), 0.0);
        assert_eq!(sanitize_dt(f32::INFINITY), 0.0);
    }

    #[test]
    fn test_score_line() {
        assert_eq!(score_line(0), "score: 0");
        assert_eq!(score_line(130), "score: 130");
    }
}
