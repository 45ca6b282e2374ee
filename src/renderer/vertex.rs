//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Byte stride of one vertex in an upload buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// Colors for game elements
pub mod colors {
    pub const PLAYER: [f32; 4] = [0.45, 0.8, 0.95, 1.0];
    pub const RED: [f32; 4] = [0.95, 0.3, 0.3, 1.0];
    pub const BLUE: [f32; 4] = [0.3, 0.5, 1.0, 1.0];
    pub const GREEN: [f32; 4] = [0.3, 0.9, 0.4, 1.0];
    pub const GLYPH: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const TEXT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout() {
        assert_eq!(Vertex::STRIDE, 24);
        let v = [Vertex::new(1.0, 2.0, colors::GLYPH)];
        assert_eq!(bytemuck::cast_slice::<Vertex, u8>(&v).len(), 24);
    }
}
