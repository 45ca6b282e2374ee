//! Randomized enemy creation
//!
//! All randomness comes through the caller's `Rng` so tests can seed it.

use glam::Vec2;
use rand::Rng;

use super::state::{Entity, Playfield, Variant};
use crate::consts::*;

/// Pick an enemy variant, one third each
pub fn roll_variant<R: Rng + ?Sized>(rng: &mut R) -> Variant {
    match rng.random_range(0..3) {
        0 => Variant::Red,
        1 => Variant::Blue,
        _ => Variant::Green,
    }
}

/// Pick a spawn column in `[0, W-60)`
pub fn roll_column<R: Rng + ?Sized>(rng: &mut R, playfield: &Playfield) -> f32 {
    let span = (playfield.width - SPRITE_WIDTH) as i32;
    if span <= 0 {
        // Playfield narrower than a sprite: only column 0 is valid
        return 0.0;
    }
    rng.random_range(0..span) as f32
}

/// Ticks until the next spawn, in `[30, 79]`
pub fn next_countdown<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    rng.random_range(0..SPAWN_COUNTDOWN_SPREAD) + SPAWN_COUNTDOWN_MIN
}

/// Create one enemy above the playfield
pub fn spawn_enemy<R: Rng + ?Sized>(rng: &mut R, id: u32, playfield: &Playfield) -> Entity {
    let variant = roll_variant(rng);
    let facing_left = variant == Variant::Green && rng.random_bool(0.5);
    let x = roll_column(rng, playfield);

    let mut enemy = Entity::new(id, variant, Vec2::new(x, SPAWN_Y));
    enemy.facing_left = facing_left;
    enemy
}
