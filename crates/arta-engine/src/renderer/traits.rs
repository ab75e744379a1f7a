//! Renderer contract implemented by the host.
//!
//! The engine describes what to draw with [`DrawCommand`]s grouped into
//! batches. How batches become GPU work (sprite batch, instanced quads,
//! Canvas2D) is entirely up to the implementor.

use glam::Vec2;

use crate::assets::texture::Texture;
use crate::core::color::Color;
use crate::core::math::Rect;

/// Blend mode for a batch of draw commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Standard alpha blending (src-alpha, one-minus-src-alpha).
    #[default]
    Alpha,
    /// Additive blending for glow effects (src-alpha, one).
    Additive,
}

/// Where a draw command lands in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Destination {
    /// Anchor point; the source region is placed relative to `origin` and scaled.
    Position(Vec2),
    /// Exact destination rectangle; `scale` is ignored.
    Rect(Rect),
}

/// One textured quad.
#[derive(Debug, Clone, Copy)]
pub struct DrawCommand<'a> {
    pub texture: &'a dyn Texture,
    pub destination: Destination,
    /// Region of the texture to sample, in pixels.
    pub source: Rect,
    pub tint: Color,
    /// Rotation in radians around `origin`.
    pub rotation: f32,
    /// Pivot point in source-pixel space.
    pub origin: Vec2,
    /// Uniform scale factor.
    pub scale: f32,
    /// Layer depth, 0.0 = front, 1.0 = back.
    pub depth: f32,
}

/// Renderer backend driven by the engine's draw calls.
///
/// Calls arrive as `begin_batch`, any number of `draw`, then `end_batch`.
/// Batches do not nest: opening a batch while another is open is a
/// caller error.
pub trait Renderer {
    fn begin_batch(&mut self, blend: BlendMode);

    fn draw(&mut self, command: &DrawCommand<'_>);

    fn end_batch(&mut self);
}
