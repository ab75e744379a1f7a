//! Particle simulation: particles, pluggable effects and the engine that
//! drives them.

pub mod rng;
mod particle;
mod effect;
mod default_effect;
mod radial;
mod engine;

// Re-export public types
pub use rng::{RandomSource, Rng};
pub use particle::Particle;
pub use effect::{EmitterContext, ParticleEffect};
pub use default_effect::DefaultParticleEffect;
pub use radial::RadialEffect;
pub use engine::ParticleEngine;
