//! CPU-side sprite batching
//!
//! Turns a `RenderFrame` into one triangle list in normalized device
//! coordinates. Drawable handles live here, keyed by entity id, so the
//! simulation's entities stay plain data.

use std::collections::{HashMap, HashSet};

use glam::Vec2;

use super::frame::{RenderFrame, Sprite};
use super::shapes::{outline, quad, to_ndc};
use super::vertex::{Vertex, colors};
use super::Renderer;
use crate::sim::Variant;

/// Approximate glyph cell size for the projectile label and HUD text
const GLYPH_CELL: Vec2 = Vec2::new(10.0, 10.0);
/// Hit box outline thickness when debug outlines are enabled
const OUTLINE_THICKNESS: f32 = 1.0;

/// Per-entity drawable handle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteHandle {
    /// Palette entry chosen from the variant when the entity is first seen
    pub color: [f32; 4],
    /// Frame the entity first appeared in
    pub first_frame: u64,
}

/// Entity id -> drawable handle
#[derive(Debug, Default)]
pub struct SpriteTable {
    handles: HashMap<u32, SpriteHandle>,
}

impl SpriteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create handles for new sprites and drop handles for vanished ones
    pub fn sync<'a, I>(&mut self, sprites: I, frame: u64)
    where
        I: IntoIterator<Item = &'a Sprite>,
    {
        let mut live = HashSet::new();
        for sprite in sprites {
            live.insert(sprite.id);
            self.handles.entry(sprite.id).or_insert_with(|| SpriteHandle {
                color: palette(sprite.kind),
                first_frame: frame,
            });
        }
        self.handles.retain(|id, _| live.contains(id));
    }

    pub fn get(&self, id: u32) -> Option<&SpriteHandle> {
        self.handles.get(&id)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

/// Palette lookup by variant
pub fn palette(kind: Variant) -> [f32; 4] {
    match kind {
        Variant::Player => colors::PLAYER,
        Variant::Red => colors::RED,
        Variant::Blue => colors::BLUE,
        Variant::Green => colors::GREEN,
    }
}

/// Renderer that tessellates frames into a vertex list for a GPU backend
#[derive(Debug)]
pub struct SpriteBatch {
    viewport: Vec2,
    table: SpriteTable,
    vertices: Vec<Vertex>,
    frames: u64,
    /// Draw enemy hit boxes as outlines
    pub debug_hitboxes: bool,
}

impl SpriteBatch {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            viewport: Vec2::new(width, height),
            table: SpriteTable::new(),
            vertices: Vec::new(),
            frames: 0,
            debug_hitboxes: false,
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Vertex data ready for a buffer upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn sprites(&self) -> &SpriteTable {
        &self.table
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames
    }

    fn push_rect(&mut self, min: Vec2, size: Vec2, color: [f32; 4]) {
        let viewport = self.viewport;
        self.vertices.extend(quad(min, size, color).map(|v| ndc(v, viewport)));
    }

    fn push_text(&mut self, text: &str, origin: Vec2, color: [f32; 4]) {
        // One block per visible character; real glyph rendering belongs to the backend
        for (i, ch) in text.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            let min = origin + Vec2::new(i as f32 * GLYPH_CELL.x, 0.0);
            self.push_rect(min, GLYPH_CELL * 0.8, color);
        }
    }
}

fn ndc(v: Vertex, viewport: Vec2) -> Vertex {
    let p = to_ndc(Vec2::from(v.position), viewport);
    Vertex::new(p.x, p.y, v.color)
}

impl Renderer for SpriteBatch {
    fn resize(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.viewport = Vec2::new(width, height);
        }
    }

    fn draw(&mut self, frame: &RenderFrame) {
        self.frames += 1;
        self.vertices.clear();
        self.table.sync(frame.sprites(), self.frames);

        for sprite in frame.sprites() {
            let color = self
                .table
                .get(sprite.id)
                .map(|h| h.color)
                .unwrap_or(colors::GLYPH);
            self.push_rect(sprite.position, sprite.size, color);

            if self.debug_hitboxes && sprite.kind != Variant::Player {
                let hitbox = crate::sim::enemy_hitbox(sprite.position);
                let viewport = self.viewport;
                let lines = outline(hitbox.min, hitbox.max - hitbox.min, OUTLINE_THICKNESS, color);
                self.vertices.extend(lines.into_iter().map(|v| ndc(v, viewport)));
            }
        }

        for glyph in &frame.glyphs {
            self.push_text(&glyph.text, glyph.position, colors::GLYPH);
        }
        for line in &frame.hud {
            self.push_text(&line.text, line.position, colors::TEXT);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Playfield, Projectile, World};

    fn frame_with(enemies: usize) -> (World, RenderFrame) {
        let mut world = World::new(21, Playfield::default());
        for _ in 0..enemies {
            world.spawn_enemy();
        }
        let frame = RenderFrame::capture(&world);
        (world, frame)
    }

    #[test]
    fn test_table_tracks_entities() {
        let (mut world, frame) = frame_with(3);
        let mut batch = SpriteBatch::new(800.0, 450.0);
        batch.draw(&frame);
        assert_eq!(batch.sprites().len(), 4);

        let gone = world.enemies.remove(1).id;
        batch.draw(&RenderFrame::capture(&world));
        assert_eq!(batch.sprites().len(), 3);
        assert!(batch.sprites().get(gone).is_none());

        // Surviving handles keep the frame they were created in
        let kept = world.enemies[0].id;
        assert_eq!(batch.sprites().get(kept).map(|h| h.first_frame), Some(1));
        assert_eq!(batch.frames_drawn(), 2);
    }

    #[test]
    fn test_handle_color_follows_variant() {
        let (world, frame) = frame_with(5);
        let mut batch = SpriteBatch::new(800.0, 450.0);
        batch.draw(&frame);
        for enemy in &world.enemies {
            let handle = batch.sprites().get(enemy.id).unwrap();
            assert_eq!(handle.color, palette(enemy.variant));
        }
    }

    #[test]
    fn test_vertex_output() {
        let (mut world, _) = frame_with(0);
        world.projectiles.push(Projectile {
            position: Vec2::new(100.0, 100.0),
        });
        let frame = RenderFrame::capture(&world);
        let mut batch = SpriteBatch::new(800.0, 450.0);
        batch.draw(&frame);

        // Player quad + "Go" + "GopherShooter" + "score:0"
        let blocks = 1 + 2 + 13 + 7;
        assert_eq!(batch.vertices().len(), blocks * 6);
        assert_eq!(batch.vertex_bytes().len(), blocks * 6 * Vertex::STRIDE);
        for v in batch.vertices() {
            assert!(v.position[0] >= -1.0 && v.position[0] <= 1.0);
            assert!(v.position[1] >= -1.0 && v.position[1] <= 1.0);
        }
    }

    #[test]
    fn test_debug_hitboxes_add_outlines() {
        let (_, frame) = frame_with(2);
        let mut plain = SpriteBatch::new(800.0, 450.0);
        let mut debug = SpriteBatch::new(800.0, 450.0);
        debug.debug_hitboxes = true;
        plain.draw(&frame);
        debug.draw(&frame);
        assert_eq!(debug.vertices().len(), plain.vertices().len() + 2 * 24);
    }

    #[test]
    fn test_resize_ignores_empty_viewport() {
        let mut batch = SpriteBatch::new(800.0, 450.0);
        batch.resize(0.0, 100.0);
        assert_eq!(batch.viewport, Vec2::new(800.0, 450.0));
        batch.resize(1024.0, 576.0);
        assert_eq!(batch.viewport, Vec2::new(1024.0, 576.0));
    }
}
