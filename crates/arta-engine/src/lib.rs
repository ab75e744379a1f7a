//! Sprite-sheet animation and particle effects for tick-driven 2D games.
//!
//! The host owns textures, the renderer and the game loop. Each tick it
//! calls `update` on its [`ParticleEngine`]s and [`AnimatedSprite`]s, then
//! `draw` with a [`Renderer`]. Everything runs on the caller's thread.
//!
//! Note that a continuous [`ParticleEngine`] adds its full target
//! population on every update without an overall cap; see
//! [`systems::particles::ParticleEngine`] for details.

pub mod assets;
pub mod components;
pub mod core;
pub mod error;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use assets::manifest::{AssetManifest, AtlasDescriptor, EffectDescriptor};
pub use assets::texture::{Texture, TextureId, TextureInfo};
pub use components::animation::AnimatedSprite;
pub use components::emitter::{EmissionMode, ParticleColorMode};
pub use components::sprite::Sprite;
pub use crate::core::color::Color;
pub use crate::core::math::{Circle, Rect};
pub use error::{EngineError, Result};
pub use renderer::instance::{DrawBatch, DrawBuffer, SpriteInstance};
pub use renderer::traits::{BlendMode, Destination, DrawCommand, Renderer};
pub use systems::particles::{
    DefaultParticleEffect, EmitterContext, Particle, ParticleEffect, ParticleEngine,
    RadialEffect, RandomSource, Rng,
};

pub use glam::Vec2;
