//! Frame-driven simulation module
//!
//! All gameplay logic lives here. This module stays free of rendering and
//! platform concerns:
//! - One owned `World`, no globals
//! - Seeded RNG only
//! - Input is applied between ticks, never during one

pub mod collision;
pub mod input;
pub mod movement;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{Aabb, enemy_hitbox, intersects, projectile_probe};
pub use input::{Key, KeyEvent, Phase, Steering, apply_input, apply_inputs, try_fire};
pub use state::{Entity, GameEvent, Playfield, Projectile, Variant, World};
pub use tick::tick;
