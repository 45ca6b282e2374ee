//! Demo input source: plays the game by emitting key events
//!
//! The autopilot only sees the world read-only and speaks the same
//! press/release protocol as a keyboard, so the simulation cannot tell it
//! apart from a player.

use crate::consts::*;
use crate::sim::{Key, KeyEvent, World};

/// Horizontal offset from an enemy anchor that lands shots mid-hit-box
const AIM_OFFSET: f32 = (HITBOX_REACH - HITBOX_PAD) / 2.0 - PROBE_OFFSET_X;
/// Close enough to the aim point to stop steering
const AIM_TOLERANCE: f32 = 8.0;

/// Keyboard-equivalent bot
#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    /// Direction key currently held down, if any
    held: Option<Key>,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently held direction key
    pub fn held(&self) -> Option<Key> {
        self.held
    }

    /// Decide this frame's key events
    pub fn poll(&mut self, world: &World) -> Vec<KeyEvent> {
        let mut events = Vec::new();

        // The lowest enemy still above the player is the most urgent one
        let target = world
            .enemies
            .iter()
            .filter(|e| e.position.y > SPAWN_Y && e.position.y < world.player.position.y)
            .max_by(|a, b| a.position.y.total_cmp(&b.position.y));

        let want = match target {
            Some(enemy) => {
                let aim = enemy.position.x + AIM_OFFSET;
                let dx = aim - world.player.position.x;
                if dx > AIM_TOLERANCE {
                    Some(Key::Right)
                } else if dx < -AIM_TOLERANCE {
                    Some(Key::Left)
                } else {
                    None
                }
            }
            None => None,
        };

        if want != self.held {
            if let Some(key) = self.held.take() {
                events.push(KeyEvent::release(key));
            }
            if let Some(key) = want {
                events.push(KeyEvent::press(key));
                self.held = Some(key);
            }
        }

        // Tap fire while lined up; the world enforces the cooldown
        if target.is_some() && want.is_none() {
            events.push(KeyEvent::press(Key::Fire));
            events.push(KeyEvent::release(Key::Fire));
        }

        events
    }

    /// Release whatever is held (end of session)
    pub fn release_all(&mut self) -> Vec<KeyEvent> {
        self.held.take().map(KeyEvent::release).into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Entity, Playfield, Variant, apply_inputs, tick};
    use glam::Vec2;

    fn world_with_enemy_at(x: f32) -> World {
        let mut world = World::new(8, Playfield::default());
        world.spawn_countdown = i32::MAX;
        let id = world.next_entity_id();
        world
            .enemies
            .push(Entity::new(id, Variant::Red, Vec2::new(x, 40.0)));
        world
    }

    #[test]
    fn test_idle_without_enemies() {
        let world = World::new(8, Playfield::default());
        let mut bot = Autopilot::new();
        assert!(bot.poll(&world).is_empty());
        assert_eq!(bot.held(), None);
    }

    #[test]
    fn test_steers_toward_target() {
        let world = world_with_enemy_at(600.0);
        let mut bot = Autopilot::new();
        assert_eq!(bot.poll(&world), vec![KeyEvent::press(Key::Right)]);
        // Holding: no repeated press
        assert!(bot.poll(&world).is_empty());
    }

    #[test]
    fn test_switches_direction_with_release() {
        let mut world = world_with_enemy_at(600.0);
        let mut bot = Autopilot::new();
        bot.poll(&world);
        world.enemies[0].position.x = 0.0;
        assert_eq!(
            bot.poll(&world),
            vec![KeyEvent::release(Key::Right), KeyEvent::press(Key::Left)]
        );
        assert_eq!(bot.release_all(), vec![KeyEvent::release(Key::Left)]);
        assert!(bot.release_all().is_empty());
    }

    #[test]
    fn test_fires_when_aligned() {
        let world = world_with_enemy_at(350.0 - AIM_OFFSET);
        let mut bot = Autopilot::new();
        let events = bot.poll(&world);
        assert!(events.contains(&KeyEvent::press(Key::Fire)));
    }

    #[test]
    fn test_aim_offset_lands_shots() {
        let enemy = Vec2::new(200.0, 100.0);
        let shot = Vec2::new(enemy.x + AIM_OFFSET, enemy.y);
        assert!(crate::sim::intersects(enemy, shot));
    }

    #[test]
    fn test_autopilot_scores() {
        let mut world = World::new(2024, Playfield::default());
        let mut bot = Autopilot::new();
        for _ in 0..3000 {
            let events = bot.poll(&world);
            apply_inputs(&mut world, events);
            tick(&mut world, 1.0 / 60.0);
        }
        assert!(world.score > 0);
    }
}
