//! World state and core simulation types
//!
//! Everything the update loop reads or writes lives in one owned `World`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::input::Steering;
use super::spawner;
use crate::consts::*;

/// Entity sub-type: selects sprite, movement policy and point value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    Player,
    Red,
    Blue,
    Green,
}

impl Variant {
    /// Points awarded for destroying an entity of this variant
    pub fn points(&self) -> u64 {
        match self {
            Variant::Player => 0,
            Variant::Red => RED_POINTS,
            Variant::Blue => BLUE_POINTS,
            Variant::Green => GREEN_POINTS,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Player => "player",
            Variant::Red => "red",
            Variant::Blue => "blue",
            Variant::Green => "green",
        }
    }
}

/// The player or an enemy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: u32,
    /// Top-left anchor of the sprite box
    pub position: Vec2,
    /// Only driven for the player; enemies move by policy
    pub velocity: Vec2,
    pub variant: Variant,
    /// Green heading, fixed at spawn (true drifts toward +x)
    pub facing_left: bool,
}

impl Entity {
    pub fn new(id: u32, variant: Variant, position: Vec2) -> Self {
        Self {
            id,
            position,
            velocity: Vec2::ZERO,
            variant,
            facing_left: false,
        }
    }
}

/// A shot travelling straight up
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub position: Vec2,
}

/// Playfield bounds in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Lowest allowed player anchor
    pub fn player_min(&self) -> Vec2 {
        Vec2::new(0.0, PLAYER_MIN_Y)
    }

    /// Highest allowed player anchor.
    ///
    /// Never below `player_min`, so a playfield smaller than a sprite pins the
    /// player to the top-left corner instead of producing an inverted range.
    pub fn player_max(&self) -> Vec2 {
        Vec2::new(self.width - SPRITE_WIDTH, self.height - SPRITE_HEIGHT).max(self.player_min())
    }

    /// Clamp a player anchor into the allowed box
    pub fn clamp_player(&self, position: Vec2) -> Vec2 {
        position.clamp(self.player_min(), self.player_max())
    }

    /// Enemies at or below this row are off-screen
    pub fn exit_line(&self) -> f32 {
        self.height + OFFSCREEN_MARGIN
    }
}

/// Simulation events for the frontend (logging, effects)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ShotFired { tick: u64 },
    EnemySpawned { id: u32, variant: Variant },
    EnemyDestroyed { id: u32, variant: Variant, points: u64 },
    EnemyEscaped { id: u32, variant: Variant },
}

/// Complete game world
#[derive(Debug, Clone)]
pub struct World {
    /// Seed the RNG was created from
    pub seed: u64,
    pub rng: Pcg32,
    pub playfield: Playfield,
    pub player: Entity,
    /// Held direction keys driving the player's velocity
    pub steer: Steering,
    pub enemies: Vec<Entity>,
    pub projectiles: Vec<Projectile>,
    /// Update counter
    pub tick: u64,
    pub last_shot_tick: u64,
    pub score: u64,
    pub score_text: String,
    /// Ticks until the next spawn; a spawn happens when it drops below zero
    pub spawn_countdown: i32,
    /// Pending events, drained by the frontend
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl World {
    /// Create a new world with the given seed
    pub fn new(seed: u64, playfield: Playfield) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let spawn_countdown = spawner::next_countdown(&mut rng);

        let start = Vec2::new(
            playfield.width / 2.0 - PLAYER_START_INSET_X,
            playfield.height - PLAYER_START_INSET_Y,
        );

        Self {
            seed,
            rng,
            playfield,
            player: Entity::new(0, Variant::Player, start),
            steer: Steering::default(),
            enemies: Vec::new(),
            projectiles: Vec::new(),
            tick: 0,
            last_shot_tick: 0,
            score: 0,
            score_text: crate::score_line(0),
            spawn_countdown,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Change the playfield size; later updates clamp and spawn against it
    pub fn resize(&mut self, width: f32, height: f32) {
        log::debug!("Playfield resized to {}x{}", width, height);
        self.playfield = Playfield::new(width, height);
    }

    /// Spawn one enemy from the world's RNG
    pub fn spawn_enemy(&mut self) -> u32 {
        let id = self.next_entity_id();
        let enemy = spawner::spawn_enemy(&mut self.rng, id, &self.playfield);
        log::trace!(
            "Spawned {} enemy {} at x={}",
            enemy.variant.as_str(),
            id,
            enemy.position.x
        );
        self.events.push(GameEvent::EnemySpawned {
            id,
            variant: enemy.variant,
        });
        self.enemies.push(enemy);
        id
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
