//! Key events to player steering and fire
//!
//! Each held direction contributes one `PLAYER_SPEED` step to the player's
//! velocity. The velocity is rebuilt from the integer net-held counter and the
//! velocity it was last anchored at, so a press followed by its release
//! restores the prior velocity exactly, even one set directly on the player.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use super::state::{GameEvent, Projectile, World};
use crate::consts::*;

/// Logical game keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Fire,
}

impl Key {
    /// Steering step for a direction key, `None` for fire
    pub fn direction(&self) -> Option<IVec2> {
        match self {
            Key::Left => Some(IVec2::NEG_X),
            Key::Right => Some(IVec2::X),
            Key::Up => Some(IVec2::NEG_Y),
            Key::Down => Some(IVec2::Y),
            Key::Fire => None,
        }
    }
}

/// Press or release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Press,
    Release,
}

/// One discrete input event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: Key,
    pub phase: Phase,
}

impl KeyEvent {
    pub fn press(key: Key) -> Self {
        Self {
            key,
            phase: Phase::Press,
        }
    }

    pub fn release(key: Key) -> Self {
        Self {
            key,
            phase: Phase::Release,
        }
    }
}

/// Net held directions plus the velocity they are counted from
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Steering {
    /// Net held directions (+1 per right/down key, -1 per left/up key)
    held: IVec2,
    /// Velocity observed when `held` was `anchor_held`
    anchor: Vec2,
    anchor_held: IVec2,
}

impl Steering {
    pub fn held(&self) -> IVec2 {
        self.held
    }

    /// Velocity implied by the held keys
    pub fn velocity(&self) -> Vec2 {
        if self.held == self.anchor_held {
            self.anchor
        } else {
            self.anchor + (self.held - self.anchor_held).as_vec2() * PLAYER_SPEED
        }
    }

    /// Step the held keys by `delta` and return the new velocity.
    ///
    /// `current` is the player's velocity right now; if something other than
    /// steering changed it, it becomes the new anchor.
    pub fn apply(&mut self, current: Vec2, delta: IVec2) -> Vec2 {
        if !same_bits(current, self.velocity()) {
            self.anchor = current;
            self.anchor_held = self.held;
        }
        self.held += delta;
        self.velocity()
    }
}

fn same_bits(a: Vec2, b: Vec2) -> bool {
    a.x.to_bits() == b.x.to_bits() && a.y.to_bits() == b.y.to_bits()
}

/// Apply one input event to the world
pub fn apply_input(world: &mut World, event: KeyEvent) {
    match (event.key.direction(), event.phase) {
        (Some(dir), Phase::Press) => steer(world, dir),
        (Some(dir), Phase::Release) => steer(world, -dir),
        (None, Phase::Press) => {
            try_fire(world);
        }
        (None, Phase::Release) => {}
    }
}

/// Apply a batch of queued events in order
pub fn apply_inputs<I>(world: &mut World, events: I)
where
    I: IntoIterator<Item = KeyEvent>,
{
    for event in events {
        apply_input(world, event);
    }
}

fn steer(world: &mut World, delta: IVec2) {
    world.player.velocity = world.steer.apply(world.player.velocity, delta);
}

/// Fire a projectile from the player if the cooldown has elapsed.
///
/// Returns true when a shot was fired.
pub fn try_fire(world: &mut World) -> bool {
    if world.tick.saturating_sub(world.last_shot_tick) <= FIRE_COOLDOWN_TICKS {
        return false;
    }

    world.projectiles.push(Projectile {
        position: world.player.position,
    });
    world.last_shot_tick = world.tick;
    world.events.push(GameEvent::ShotFired { tick: world.tick });
    true
}
