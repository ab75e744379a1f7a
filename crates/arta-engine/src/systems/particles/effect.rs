//! Particle effect strategy and the emitter state it reads.

use glam::Vec2;

use super::particle::Particle;
use super::rng::RandomSource;
use crate::assets::texture::Texture;
use crate::error::{EngineError, Result};

/// Emitter state handed to an effect while generating.
///
/// Effects may read the emitter location and texture set, and may write the
/// target population (effects use this to keep the engine's per-tick count
/// in sync with their own configured particle count).
#[derive(Debug, Clone)]
pub struct EmitterContext<'t> {
    pub(crate) emitter_location: Vec2,
    pub(crate) textures: Vec<&'t dyn Texture>,
    pub(crate) target_population: usize,
}

impl<'t> EmitterContext<'t> {
    pub fn new(emitter_location: Vec2, textures: Vec<&'t dyn Texture>, target_population: usize) -> Self {
        Self {
            emitter_location,
            textures,
            target_population,
        }
    }

    pub fn emitter_location(&self) -> Vec2 {
        self.emitter_location
    }

    pub fn textures(&self) -> &[&'t dyn Texture] {
        &self.textures
    }

    pub fn target_population(&self) -> usize {
        self.target_population
    }

    pub fn set_target_population(&mut self, target: usize) {
        self.target_population = target;
    }

    /// Pick one texture uniformly at random. Out-of-range draws from a
    /// misbehaving source are folded back into the set.
    pub fn choose_texture(&self, rng: &mut dyn RandomSource) -> Result<&'t dyn Texture> {
        if self.textures.is_empty() {
            return Err(EngineError::EmptyTextureSet);
        }
        let len = self.textures.len();
        let idx = rng.next_int(len as u32) as usize % len;
        Ok(self.textures[idx])
    }
}

/// Strategy that manufactures one particle per call.
///
/// Implementors hold their own tunables but never store particles.
pub trait ParticleEffect {
    fn generate<'t>(
        &mut self,
        ctx: &mut EmitterContext<'t>,
        rng: &mut dyn RandomSource,
    ) -> Result<Particle<'t>>;
}
