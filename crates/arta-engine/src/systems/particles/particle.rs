//! A single transient particle.

use glam::Vec2;

use crate::assets::texture::Texture;
use crate::core::color::Color;
use crate::core::math::Rect;
use crate::renderer::traits::{Destination, DrawCommand, Renderer};

/// A simulated point with kinematics, visual attributes and a frame countdown.
///
/// The texture is borrowed from the host; particles never own it.
#[derive(Debug, Clone)]
pub struct Particle<'t> {
    pub texture: &'t dyn Texture,
    pub position: Vec2,
    /// Displacement per update, in world units.
    pub velocity: Vec2,
    /// Rotation in radians.
    pub angle: f32,
    /// Rotation added per update, in radians.
    pub angular_velocity: f32,
    pub color: Color,
    /// Uniform scale factor.
    pub size: f32,
    /// Updates remaining before the particle is culled.
    pub ttl: i32,
}

impl<'t> Particle<'t> {
    /// Unrotated, white, unit-scale particle.
    pub fn new(texture: &'t dyn Texture, position: Vec2, velocity: Vec2, ttl: i32) -> Self {
        Particle {
            texture,
            position,
            velocity,
            angle: 0.0,
            angular_velocity: 0.0,
            color: Color::WHITE,
            size: 1.0,
            ttl,
        }
    }

    /// Advance one frame: count down, move, spin.
    pub fn update(&mut self) {
        self.ttl -= 1;
        self.position += self.velocity;
        self.angle += self.angular_velocity;
    }

    pub fn is_alive(&self) -> bool {
        self.ttl > 0
    }

    /// Full texture, centered on `position`, scaled by `size`, at the front.
    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        let (width, height) = (self.texture.width(), self.texture.height());
        renderer.draw(&DrawCommand {
            texture: self.texture,
            destination: Destination::Position(self.position),
            source: Rect::new(0, 0, width as i32, height as i32),
            tint: self.color,
            rotation: self.angle,
            origin: Vec2::new((width / 2) as f32, (height / 2) as f32),
            scale: self.size,
            depth: 0.0,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::texture::TextureInfo;
    use crate::renderer::{BlendMode, DrawBuffer};

    #[test]
    fn update_advances_kinematics() {
        let tex = TextureInfo::new(1, 8, 8);
        let mut p = Particle::new(&tex, Vec2::new(10.0, 10.0), Vec2::new(1.5, -0.5), 30);
        p.angular_velocity = 0.1;

        let n = 12;
        for _ in 0..n {
            p.update();
        }
        assert_eq!(p.ttl, 30 - n);
        assert!((p.position - Vec2::new(28.0, 4.0)).length() < 1e-4);
        assert!((p.angle - 1.2).abs() < 1e-4);
    }

    #[test]
    fn particle_expires_at_zero() {
        let tex = TextureInfo::new(1, 8, 8);
        let mut p = Particle::new(&tex, Vec2::ZERO, Vec2::ZERO, 1);
        assert!(p.is_alive());
        p.update();
        assert!(!p.is_alive());
    }

    #[test]
    fn draw_centers_origin_on_texture() {
        let tex = TextureInfo::new(4, 9, 6);
        let mut p = Particle::new(&tex, Vec2::new(5.0, 5.0), Vec2::ZERO, 10);
        p.size = 0.5;
        p.color = Color::rgb(0.2, 0.4, 0.6);

        let mut buf = DrawBuffer::new();
        buf.begin_batch(BlendMode::Additive);
        p.draw(&mut buf);
        buf.end_batch();

        let inst = buf.instances()[0];
        // Integer halves: 9 / 2 = 4
        assert_eq!((inst.origin_x, inst.origin_y), (4.0, 3.0));
        assert_eq!((inst.src_width, inst.src_height), (9.0, 6.0));
        assert_eq!((inst.width, inst.height), (4.5, 3.0));
        assert_eq!(inst.depth, 0.0);
        assert_eq!((inst.r, inst.g, inst.b), (0.2, 0.4, 0.6));
    }
}
