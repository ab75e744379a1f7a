use glam::Vec2;

use crate::assets::texture::Texture;
use crate::core::color::Color;
use crate::core::math::{Circle, Rect};
use crate::renderer::traits::{Destination, DrawCommand, Renderer};

/// A static textured object with bounding volumes for simple collision.
#[derive(Debug, Clone)]
pub struct Sprite<'t> {
    pub texture: &'t dyn Texture,
    /// Top-left when unrotated; pivot point when rotated.
    pub position: Vec2,
    /// Rotation in radians.
    pub rotation: f32,
    /// Uniform scale factor.
    pub scale: f32,
}

impl<'t> Sprite<'t> {
    pub fn new(texture: &'t dyn Texture, position: Vec2) -> Self {
        Self {
            texture,
            position,
            rotation: 0.0,
            scale: 1.0,
        }
    }

    // -- Builder pattern --

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Texture center, in whole pixels.
    pub fn origin(&self) -> Vec2 {
        Vec2::new(
            (self.texture.width() / 2) as f32,
            (self.texture.height() / 2) as f32,
        )
    }

    pub fn source_rect(&self) -> Rect {
        Rect::new(0, 0, self.texture.width() as i32, self.texture.height() as i32)
    }

    /// Unscaled texture bounds at the truncated position.
    pub fn bounding_box(&self) -> Rect {
        Rect::new(
            self.position.x as i32,
            self.position.y as i32,
            self.texture.width() as i32,
            self.texture.height() as i32,
        )
    }

    /// Circle centered on the texture with radius half its width.
    pub fn bounding_circle(&self) -> Circle {
        let half_w = (self.texture.width() / 2) as i32;
        let half_h = (self.texture.height() / 2) as i32;
        let center = Vec2::new(
            (self.position.x as i32 + half_w) as f32,
            (self.position.y as i32 + half_h) as f32,
        );
        Circle::new(center, half_w as f32)
    }

    /// Rotated sprites pivot on the texture center; unrotated ones are
    /// anchored at their top-left corner.
    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        let origin = if self.rotation != 0.0 {
            self.origin()
        } else {
            Vec2::ZERO
        };
        renderer.draw(&DrawCommand {
            texture: self.texture,
            destination: Destination::Position(self.position),
            source: self.source_rect(),
            tint: Color::WHITE,
            rotation: self.rotation,
            origin,
            scale: self.scale,
            depth: 1.0,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::texture::TextureInfo;
    use crate::renderer::{BlendMode, DrawBuffer};

    #[test]
    fn bounding_volumes() {
        let tex = TextureInfo::new(1, 32, 16);
        let sprite = Sprite::new(&tex, Vec2::new(10.9, 20.1));
        assert_eq!(sprite.bounding_box(), Rect::new(10, 20, 32, 16));

        let circle = sprite.bounding_circle();
        assert_eq!(circle.center, Vec2::new(26.0, 28.0));
        assert_eq!(circle.radius, 16.0);
    }

    #[test]
    fn overlapping_sprites_collide() {
        let tex = TextureInfo::new(1, 20, 20);
        let a = Sprite::new(&tex, Vec2::ZERO);
        let b = Sprite::new(&tex, Vec2::new(15.0, 0.0));
        let c = Sprite::new(&tex, Vec2::new(100.0, 0.0));
        assert!(a.bounding_box().intersects(&b.bounding_box()));
        assert!(a.bounding_circle().intersects(&b.bounding_circle()));
        assert!(!a.bounding_circle().intersects(&c.bounding_circle()));
    }

    #[test]
    fn origin_depends_on_rotation() {
        let tex = TextureInfo::new(1, 10, 10);
        let mut buf = DrawBuffer::new();
        buf.begin_batch(BlendMode::Alpha);
        Sprite::new(&tex, Vec2::ZERO).draw(&mut buf);
        Sprite::new(&tex, Vec2::ZERO).with_rotation(0.5).draw(&mut buf);
        buf.end_batch();

        let plain = buf.instances()[0];
        let rotated = buf.instances()[1];
        assert_eq!((plain.origin_x, plain.origin_y), (0.0, 0.0));
        assert_eq!((rotated.origin_x, rotated.origin_y), (5.0, 5.0));
        assert_eq!(plain.depth, 1.0);
    }
}
