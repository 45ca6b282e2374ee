//! Per-frame simulation tick
//!
//! Advances the player, projectiles and enemies, resolves hits, scores, and
//! runs the spawn countdown.

use super::collision::intersects;
use super::movement;
use super::spawner;
use super::state::{GameEvent, World};
use crate::consts::*;

/// Advance the world by one frame of `dt` seconds
pub fn tick(world: &mut World, dt: f32) {
    let dt = crate::sanitize_dt(dt);
    world.tick += 1;

    // Player: integrate and clamp against the current playfield
    let moved = world.player.position + world.player.velocity * dt;
    world.player.position = world.playfield.clamp_player(moved);

    // Projectiles rise and are kept for the rest of the game
    for projectile in &mut world.projectiles {
        projectile.position.y -= PROJECTILE_SPEED * dt;
    }

    // Enemies move a fixed step per tick
    for enemy in &mut world.enemies {
        movement::advance(enemy, world.tick);
    }

    // Drop enemies that sank past the bottom edge
    let exit_line = world.playfield.exit_line();
    let events = &mut world.events;
    world.enemies.retain(|enemy| {
        let on_screen = enemy.position.y < exit_line;
        if !on_screen {
            events.push(GameEvent::EnemyEscaped {
                id: enemy.id,
                variant: enemy.variant,
            });
        }
        on_screen
    });

    resolve_hits(world);

    world.score_text = crate::score_line(world.score);

    world.spawn_countdown -= 1;
    if world.spawn_countdown < 0 {
        world.spawn_enemy();
        world.spawn_countdown = spawner::next_countdown(&mut world.rng);
    }
}

/// Remove every enemy hit by any projectile and award its points.
///
/// Hits are collected first and removed in a second pass, so each enemy is
/// scored at most once and no other enemy is disturbed. Projectiles are not
/// consumed.
fn resolve_hits(world: &mut World) {
    if world.projectiles.is_empty() {
        return;
    }

    let hit: Vec<bool> = world
        .enemies
        .iter()
        .map(|enemy| {
            world
                .projectiles
                .iter()
                .any(|p| intersects(enemy.position, p.position))
        })
        .collect();

    if !hit.contains(&true) {
        return;
    }

    let mut flags = hit.into_iter();
    let mut destroyed = Vec::new();
    world.enemies.retain(|enemy| {
        let was_hit = flags.next().unwrap_or(false);
        if was_hit {
            destroyed.push((enemy.id, enemy.variant));
        }
        !was_hit
    });

    for (id, variant) in destroyed {
        let points = variant.points();
        world.score += points;
        log::debug!("Destroyed {} enemy {} (+{})", variant.as_str(), id, points);
        world.events.push(GameEvent::EnemyDestroyed {
            id,
            variant,
            points,
        });
    }
}
