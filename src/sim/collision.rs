//! Collision detection between projectiles and enemies
//!
//! Only a single probe corner of the projectile is tested against the enemy's
//! padded box; this is not a box-box overlap.

use glam::Vec2;

use crate::consts::*;

/// Axis-aligned box with inclusive edges
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Inclusive point test
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

/// Hit box for an enemy anchored at `position`
pub fn enemy_hitbox(position: Vec2) -> Aabb {
    Aabb::new(
        position - Vec2::splat(HITBOX_PAD),
        position + Vec2::splat(HITBOX_REACH),
    )
}

/// The point of a projectile that is tested for hits
pub fn projectile_probe(position: Vec2) -> Vec2 {
    position + Vec2::new(PROBE_OFFSET_X, PROBE_OFFSET_Y)
}

/// Check whether a projectile at `projectile` hits an enemy at `enemy`
pub fn intersects(enemy: Vec2, projectile: Vec2) -> bool {
    enemy_hitbox(enemy).contains(projectile_probe(projectile))
}
