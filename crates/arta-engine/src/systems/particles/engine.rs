//! Particle engine: owns the live particles of one emitter and drives
//! generation, simulation, culling and drawing each tick.
//!
//! # Population growth
//!
//! In [`EmissionMode::Continuous`] the engine generates its whole target
//! population on *every* update, without capping the total. Steady state is
//! roughly `target_population * average_ttl` live particles, and a large
//! target with long lifetimes grows the collection quickly. Hosts that need
//! a hard cap should lower the target population (or switch to one-shot
//! mode) rather than rely on the engine to bound memory.

use glam::Vec2;

use super::default_effect::DefaultParticleEffect;
use super::effect::{EmitterContext, ParticleEffect};
use super::particle::Particle;
use super::rng::{RandomSource, Rng};
use crate::assets::texture::Texture;
use crate::components::emitter::EmissionMode;
use crate::error::Result;
use crate::renderer::traits::{BlendMode, Renderer};

/// Owns a particle collection and the effect that feeds it.
pub struct ParticleEngine<'t> {
    context: EmitterContext<'t>,
    particles: Vec<Particle<'t>>,
    effect: Box<dyn ParticleEffect>,
    rng: Box<dyn RandomSource>,
    mode: EmissionMode,
    /// One-shot latch.
    fired: bool,
    spawned: u64,
}

impl<'t> ParticleEngine<'t> {
    pub const DEFAULT_TARGET_POPULATION: usize = 1;
    /// Upper bound on the per-tick staging reservation.
    const MAX_STAGING_RESERVE: usize = 1024;

    /// Continuous engine with the default effect and an entropy-seeded rng.
    pub fn new(textures: Vec<&'t dyn Texture>, emitter_location: Vec2) -> Self {
        Self {
            context: EmitterContext::new(emitter_location, textures, Self::DEFAULT_TARGET_POPULATION),
            particles: Vec::with_capacity(256),
            effect: Box::new(DefaultParticleEffect::default()),
            rng: Box::new(Rng::from_entropy()),
            mode: EmissionMode::Continuous,
            fired: false,
            spawned: 0,
        }
    }

    // -- Builder pattern --

    pub fn with_effect(mut self, effect: impl ParticleEffect + 'static) -> Self {
        self.effect = Box::new(effect);
        self
    }

    pub fn with_boxed_effect(mut self, effect: Box<dyn ParticleEffect>) -> Self {
        self.effect = effect;
        self
    }

    pub fn with_random_source(mut self, rng: impl RandomSource + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    pub fn with_mode(mut self, mode: EmissionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_target_population(mut self, target: usize) -> Self {
        self.context.target_population = target;
        self
    }

    /// Advance one tick: seed, update every particle, cull the expired.
    ///
    /// `_dt` is accepted for host-loop symmetry; particles move a fixed step
    /// per call regardless of elapsed time.
    ///
    /// A seeding failure (e.g. an empty texture set) adds no particles this
    /// tick but does not stop existing particles from advancing and being
    /// culled. The failure is returned after that work is done.
    pub fn update(&mut self, _dt: f32) -> Result<()> {
        let seeded = self.seed();

        for particle in &mut self.particles {
            particle.update();
        }
        self.particles.retain(Particle::is_alive);

        log::trace!("particle engine: {} live", self.particles.len());
        seeded
    }

    /// Generate this tick's particles. All-or-nothing: nothing is committed
    /// unless every generate call succeeds.
    fn seed(&mut self) -> Result<()> {
        let count = match self.mode {
            EmissionMode::Continuous => self.context.target_population,
            EmissionMode::OneShot if !self.fired => self.context.target_population,
            EmissionMode::OneShot => return Ok(()),
        };

        let mut staged = Vec::with_capacity(count.min(Self::MAX_STAGING_RESERVE));
        for _ in 0..count {
            match self.effect.generate(&mut self.context, self.rng.as_mut()) {
                Ok(particle) => staged.push(particle),
                Err(err) => {
                    log::warn!("particle seeding skipped: {}", err);
                    return Err(err);
                }
            }
        }

        self.spawned += staged.len() as u64;
        self.particles.append(&mut staged);

        if self.mode == EmissionMode::OneShot {
            self.fired = true;
            log::debug!("one-shot emitter fired {} particles", count);
        }
        Ok(())
    }

    /// Draw every live particle in collection order, inside one additive
    /// batch. Must not be called while another batch is open on `renderer`.
    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        renderer.begin_batch(BlendMode::Additive);
        for particle in &self.particles {
            particle.draw(renderer);
        }
        renderer.end_batch();
    }

    /// Drop all particles and re-arm the one-shot latch.
    pub fn reset(&mut self) {
        log::debug!("particle engine reset ({} particles dropped)", self.particles.len());
        self.particles.clear();
        self.fired = false;
    }

    pub fn particles(&self) -> &[Particle<'t>] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Particles created since construction (not reduced by culling or reset).
    pub fn total_spawned(&self) -> u64 {
        self.spawned
    }

    pub fn emitter_location(&self) -> Vec2 {
        self.context.emitter_location
    }

    pub fn set_emitter_location(&mut self, location: Vec2) {
        self.context.emitter_location = location;
    }

    pub fn textures(&self) -> &[&'t dyn Texture] {
        self.context.textures()
    }

    pub fn set_textures(&mut self, textures: Vec<&'t dyn Texture>) {
        self.context.textures = textures;
    }

    pub fn target_population(&self) -> usize {
        self.context.target_population
    }

    pub fn set_target_population(&mut self, target: usize) {
        self.context.target_population = target;
    }

    pub fn mode(&self) -> EmissionMode {
        self.mode
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}
