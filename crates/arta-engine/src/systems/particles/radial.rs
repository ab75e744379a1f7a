//! Radial burst effect: particles fly out from the emitter in every direction.

use glam::Vec2;

use super::effect::{EmitterContext, ParticleEffect};
use super::particle::Particle;
use super::rng::RandomSource;
use crate::components::emitter::ParticleColorMode;
use crate::error::{EngineError, Result};

/// Configurable radial effect.
///
/// Direction is uniform over a full turn and speed uniform over
/// `speed_range`, so the burst is round rather than the square spread of
/// [`DefaultParticleEffect`](super::DefaultParticleEffect).
#[derive(Debug, Clone, PartialEq)]
pub struct RadialEffect {
    pub particles: usize,
    /// Min/max speed in world units per update.
    pub speed_range: (f32, f32),
    /// Angular velocity drawn from [-spin, spin].
    pub spin: f32,
    /// Min/max uniform scale.
    pub size_range: (f32, f32),
    /// Lifetime in updates, drawn from [min, max).
    pub ttl_range: (u32, u32),
    pub color_mode: ParticleColorMode,
}

impl Default for RadialEffect {
    fn default() -> Self {
        Self {
            particles: 8,
            speed_range: (1.0, 4.0),
            spin: 0.1,
            size_range: (0.5, 1.0),
            ttl_range: (20, 60),
            color_mode: ParticleColorMode::Random,
        }
    }
}

impl RadialEffect {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Builder pattern --

    pub fn with_particles(mut self, particles: usize) -> Self {
        self.particles = particles;
        self
    }

    pub fn with_speed_range(mut self, min: f32, max: f32) -> Self {
        self.speed_range = (min, max);
        self
    }

    pub fn with_spin(mut self, spin: f32) -> Self {
        self.spin = spin;
        self
    }

    pub fn with_size_range(mut self, min: f32, max: f32) -> Self {
        self.size_range = (min, max);
        self
    }

    pub fn with_ttl_range(mut self, min: u32, max: u32) -> Self {
        self.ttl_range = (min, max);
        self
    }

    pub fn with_color_mode(mut self, mode: ParticleColorMode) -> Self {
        self.color_mode = mode;
        self
    }

    /// Reject parameter combinations that cannot produce particles.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: &str| Err(EngineError::InvalidEffectConfig(msg.to_string()));
        if self.speed_range.0 > self.speed_range.1 {
            return invalid("speed_range min exceeds max");
        }
        if self.size_range.0 < 0.0 || self.size_range.0 > self.size_range.1 {
            return invalid("size_range must be non-negative with min <= max");
        }
        if self.ttl_range.0 > self.ttl_range.1 {
            return invalid("ttl_range min exceeds max");
        }
        if self.spin < 0.0 {
            return invalid("spin must be non-negative");
        }
        if matches!(&self.color_mode, ParticleColorMode::Palette(c) if c.is_empty()) {
            return invalid("palette is empty");
        }
        Ok(())
    }
}

impl ParticleEffect for RadialEffect {
    fn generate<'t>(
        &mut self,
        ctx: &mut EmitterContext<'t>,
        rng: &mut dyn RandomSource,
    ) -> Result<Particle<'t>> {
        let texture = ctx.choose_texture(rng)?;

        let heading = rng.next_f32() * std::f32::consts::TAU;
        let speed = rng.range_f32(self.speed_range.0, self.speed_range.1);
        let velocity = Vec2::from_angle(heading) * speed;
        let angular_velocity = rng.range_f32(-self.spin, self.spin);
        let size = rng.range_f32(self.size_range.0, self.size_range.1);
        let (min_ttl, max_ttl) = self.ttl_range;
        let ttl = if max_ttl > min_ttl {
            min_ttl + rng.next_int(max_ttl - min_ttl)
        } else {
            min_ttl
        };
        let color = self
            .color_mode
            .pick(rng)
            .ok_or_else(|| EngineError::InvalidEffectConfig("palette is empty".to_string()))?;

        ctx.set_target_population(self.particles);

        Ok(Particle {
            texture,
            position: ctx.emitter_location(),
            velocity,
            angle: heading,
            angular_velocity,
            color,
            size,
            ttl: ttl.min(i32::MAX as u32) as i32,
        })
    }
}
