//! Rendering seam
//!
//! The simulation hands a `RenderFrame` to a `Renderer` after every update.
//! `SpriteBatch` tessellates frames into vertices; uploading and presenting
//! them is left to a graphics backend.

pub mod batch;
pub mod frame;
pub mod shapes;
pub mod vertex;

pub use batch::{SpriteBatch, SpriteTable};
pub use frame::RenderFrame;

/// A rendering collaborator
pub trait Renderer {
    /// The window or surface changed size
    fn resize(&mut self, width: f32, height: f32);
    /// Draw one snapshot; never called while the world is being updated
    fn draw(&mut self, frame: &RenderFrame);
}
