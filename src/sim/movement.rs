//! Per-variant enemy trajectories
//!
//! Enemies move a fixed amount per update, independent of `dt`. Player and
//! projectile motion is dt-scaled, so enemy speed scales with frame rate.

use glam::Vec2;

use super::state::{Entity, Variant};
use crate::consts::*;

/// Horizontal Blue sway for a given tick.
///
/// `tick / 5` is integer division, so the sine is sampled in steps and the
/// sway changes only every fifth tick.
pub fn blue_sway(tick: u64) -> f32 {
    let phase = (tick / BLUE_SWAY_PERIOD_TICKS) as f64;
    (phase.sin() * BLUE_SWAY_AMPLITUDE as f64) as f32 * BLUE_SWAY_GAIN
}

/// Displacement an enemy makes during one update
pub fn step(variant: Variant, facing_left: bool, tick: u64) -> Vec2 {
    match variant {
        Variant::Red => Vec2::new(0.0, RED_FALL),
        Variant::Blue => Vec2::new(blue_sway(tick), BLUE_FALL),
        Variant::Green => {
            // facing_left drifts toward +x
            let dx = if facing_left { GREEN_DRIFT } else { -GREEN_DRIFT };
            Vec2::new(dx, GREEN_FALL)
        }
        Variant::Player => Vec2::ZERO,
    }
}

/// Advance an enemy by one update
pub fn advance(enemy: &mut Entity, tick: u64) {
    enemy.position += step(enemy.variant, enemy.facing_left, tick);
}
