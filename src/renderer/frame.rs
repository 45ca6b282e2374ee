//! Render snapshot handed to the rendering collaborator after each update

use glam::Vec2;
use serde::Serialize;

use crate::consts::*;
use crate::sim::{Entity, Variant, World};

/// A sprite to draw, keyed by entity identity
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sprite {
    pub id: u32,
    pub kind: Variant,
    pub position: Vec2,
    pub size: Vec2,
}

impl Sprite {
    fn from_entity(entity: &Entity) -> Self {
        Self {
            id: entity.id,
            kind: entity.variant,
            position: entity.position,
            size: Vec2::new(SPRITE_WIDTH, SPRITE_HEIGHT),
        }
    }
}

/// A text string anchored at a playfield position
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Text {
    pub text: String,
    pub position: Vec2,
}

impl Text {
    fn at(text: impl Into<String>, (x, y): (f32, f32)) -> Self {
        Self {
            text: text.into(),
            position: Vec2::new(x, y),
        }
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderFrame {
    pub viewport: Vec2,
    pub player: Sprite,
    pub enemies: Vec<Sprite>,
    /// Projectile glyphs
    pub glyphs: Vec<Text>,
    /// HUD lines: title then score
    pub hud: Vec<Text>,
}

impl RenderFrame {
    /// Snapshot the world after an update
    pub fn capture(world: &World) -> Self {
        Self {
            viewport: Vec2::new(world.playfield.width, world.playfield.height),
            player: Sprite::from_entity(&world.player),
            enemies: world.enemies.iter().map(Sprite::from_entity).collect(),
            glyphs: world
                .projectiles
                .iter()
                .map(|p| Text::at(PROJECTILE_GLYPH, p.position.into()))
                .collect(),
            hud: vec![
                Text::at(TITLE, TITLE_POS),
                Text::at(world.score_text.clone(), SCORE_POS),
            ],
        }
    }

    /// All sprites, player first
    pub fn sprites(&self) -> impl Iterator<Item = &Sprite> {
        std::iter::once(&self.player).chain(self.enemies.iter())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Playfield, Projectile};

    #[test]
    fn test_capture() {
        let mut world = World::new(5, Playfield::default());
        world.spawn_enemy();
        world.projectiles.push(Projectile {
            position: Vec2::new(40.0, 80.0),
        });
        world.score = 30;
        world.score_text = crate::score_line(30);

        let frame = RenderFrame::capture(&world);
        assert_eq!(frame.viewport, Vec2::new(800.0, 450.0));
        assert_eq!(frame.player.kind, Variant::Player);
        assert_eq!(frame.enemies.len(), 1);
        assert_eq!(frame.enemies[0].id, world.enemies[0].id);
        assert_eq!(frame.glyphs[0].text, "Go");
        assert_eq!(frame.glyphs[0].position, Vec2::new(40.0, 80.0));
        assert_eq!(frame.hud[0].text, "Gopher Shooter");
        assert_eq!(frame.hud[0].position, Vec2::new(20.0, 20.0));
        assert_eq!(frame.hud[1].text, "score: 30");
        assert_eq!(frame.hud[1].position, Vec2::new(20.0, 60.0));
        assert_eq!(frame.sprites().count(), 2);
    }

    #[test]
    fn test_json_snapshot() {
        let world = World::new(5, Playfield::default());
        let json = RenderFrame::capture(&world).to_json().unwrap();
        assert!(json.contains("\"kind\":\"Player\""));
        assert!(json.contains("score: 0"));
    }
}
