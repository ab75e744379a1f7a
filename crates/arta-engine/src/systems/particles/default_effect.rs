use glam::Vec2;

use super::effect::{EmitterContext, ParticleEffect};
use super::particle::Particle;
use super::rng::RandomSource;
use crate::core::color::Color;
use crate::error::Result;

/// Sparkle effect: random drift, random color, slow random spin.
///
/// | field            | range                    |
/// |------------------|--------------------------|
/// | velocity x, y    | [-1, 1]                  |
/// | angular velocity | [-0.1, 0.1]              |
/// | color channels   | [0, 1]                   |
/// | size             | [0, starting_scale]      |
/// | ttl              | [20, 59]                 |
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultParticleEffect {
    particles: usize,
    starting_scale: f32,
}

impl DefaultParticleEffect {
    pub const MIN_TTL: i32 = 20;
    pub const TTL_SPAN: u32 = 40;
    pub const MAX_SPIN: f32 = 0.1;

    pub fn new(particles: usize, starting_scale: f32) -> Self {
        Self {
            particles,
            starting_scale,
        }
    }

    pub fn with_particles(mut self, particles: usize) -> Self {
        self.particles = particles;
        self
    }

    pub fn with_starting_scale(mut self, scale: f32) -> Self {
        self.starting_scale = scale;
        self
    }

    pub fn particles(&self) -> usize {
        self.particles
    }

    pub fn starting_scale(&self) -> f32 {
        self.starting_scale
    }
}

impl Default for DefaultParticleEffect {
    fn default() -> Self {
        Self::new(1, 1.0)
    }
}

impl ParticleEffect for DefaultParticleEffect {
    fn generate<'t>(
        &mut self,
        ctx: &mut EmitterContext<'t>,
        rng: &mut dyn RandomSource,
    ) -> Result<Particle<'t>> {
        let texture = ctx.choose_texture(rng)?;
        let velocity = Vec2::new(rng.range_f32(-1.0, 1.0), rng.range_f32(-1.0, 1.0));
        let angular_velocity = rng.range_f32(-Self::MAX_SPIN, Self::MAX_SPIN);
        let color = Color::rgb(rng.next_f32(), rng.next_f32(), rng.next_f32());
        let size = rng.next_f32() * self.starting_scale;
        let ttl = Self::MIN_TTL + rng.next_int(Self::TTL_SPAN) as i32;

        ctx.set_target_population(self.particles);

        Ok(Particle {
            texture,
            position: ctx.emitter_location(),
            velocity,
            angle: 0.0,
            angular_velocity,
            color,
            size,
            ttl,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::texture::{Texture, TextureInfo};
    use crate::error::EngineError;
    use crate::systems::particles::rng::{Rng, ScriptedRandom};

    #[test]
    fn exact_values_from_scripted_source() {
        let tex = TextureInfo::new(1, 16, 16);
        let mut ctx = EmitterContext::new(Vec2::new(100.0, 50.0), vec![&tex as &dyn Texture], 0);
        // vx, vy, spin, r, g, b, size
        let mut rng = ScriptedRandom::new(vec![0.0, 0.75, 0.5, 0.1, 0.2, 0.3, 0.5], vec![0, 39]);
        let mut effect = DefaultParticleEffect::new(5, 2.0);

        let p = effect.generate(&mut ctx, &mut rng).unwrap();
        assert_eq!(p.position, Vec2::new(100.0, 50.0));
        assert_eq!(p.velocity, Vec2::new(-1.0, 0.5));
        assert_eq!(p.angular_velocity, 0.0);
        assert_eq!(p.color, Color::rgb(0.1, 0.2, 0.3));
        assert_eq!(p.size, 1.0);
        assert_eq!(p.ttl, 59);
        assert_eq!(p.angle, 0.0);
    }

    #[test]
    fn generated_fields_stay_in_range() {
        let tex = TextureInfo::new(1, 16, 16);
        let mut ctx = EmitterContext::new(Vec2::ZERO, vec![&tex as &dyn Texture], 0);
        let mut rng = Rng::new(42);
        let mut effect = DefaultParticleEffect::new(1, 3.0);
        for _ in 0..500 {
            let p = effect.generate(&mut ctx, &mut rng).unwrap();
            assert!(p.velocity.x >= -1.0 && p.velocity.x <= 1.0);
            assert!(p.velocity.y >= -1.0 && p.velocity.y <= 1.0);
            assert!(p.angular_velocity.abs() <= 0.1);
            assert!(p.size >= 0.0 && p.size <= 3.0);
            assert!((20..=59).contains(&p.ttl), "ttl out of range: {}", p.ttl);
            for ch in [p.color.r, p.color.g, p.color.b] {
                assert!((0.0..=1.0).contains(&ch));
            }
        }
    }

    #[test]
    fn generate_reasserts_target_population() {
        let tex = TextureInfo::new(1, 16, 16);
        let mut ctx = EmitterContext::new(Vec2::ZERO, vec![&tex as &dyn Texture], 99);
        let mut effect = DefaultParticleEffect::default().with_particles(4);
        effect.generate(&mut ctx, &mut Rng::new(1)).unwrap();
        assert_eq!(ctx.target_population(), 4);
    }

    #[test]
    fn empty_texture_set_fails_without_side_effects() {
        let mut ctx = EmitterContext::new(Vec2::ZERO, Vec::new(), 99);
        let mut effect = DefaultParticleEffect::new(4, 1.0);
        let err = effect.generate(&mut ctx, &mut Rng::new(1)).unwrap_err();
        assert!(matches!(err, EngineError::EmptyTextureSet));
        assert_eq!(ctx.target_population(), 99);
    }
}
