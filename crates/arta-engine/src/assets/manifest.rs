use std::collections::HashMap;
use serde::{Deserialize, Serialize};

use crate::assets::texture::TextureInfo;
use crate::components::emitter::ParticleColorMode;
use crate::error::{EngineError, Result};
use crate::systems::particles::{DefaultParticleEffect, ParticleEffect, RadialEffect};

/// Asset manifest describing sprite-sheet atlases and named particle effects.
/// Loaded from a JSON file at runtime.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Named atlases: name → image path, size and grid layout.
    #[serde(default)]
    pub atlases: HashMap<String, AtlasDescriptor>,
    /// Named particle effects.
    #[serde(default)]
    pub effects: HashMap<String, EffectDescriptor>,
}

/// Describes a single texture atlas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtlasDescriptor {
    /// Relative path to the image file (e.g., "explosion.png").
    pub path: String,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Number of rows in the atlas grid (default: 1).
    #[serde(default = "default_cells")]
    pub rows: u32,
    /// Number of columns in the atlas grid (default: 1).
    #[serde(default = "default_cells")]
    pub columns: u32,
}

fn default_cells() -> u32 {
    1
}

impl AtlasDescriptor {
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.columns == 0 {
            return Err(EngineError::InvalidAtlasLayout {
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(())
    }

    pub fn frame_count(&self) -> u32 {
        self.rows.saturating_mul(self.columns)
    }

    /// Texture handle for hosts that register this atlas under `id`.
    pub fn texture_info(&self, id: u32) -> TextureInfo {
        TextureInfo::new(id, self.width, self.height)
    }
}

/// Serialized form of a particle effect, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EffectDescriptor {
    Default {
        #[serde(default = "default_particles")]
        particles: usize,
        #[serde(default = "default_scale")]
        starting_scale: f32,
    },
    Radial {
        #[serde(default = "default_radial_particles")]
        particles: usize,
        #[serde(default = "default_speed")]
        speed: (f32, f32),
        #[serde(default = "default_spin")]
        spin: f32,
        #[serde(default = "default_size")]
        size: (f32, f32),
        #[serde(default = "default_ttl")]
        ttl: (u32, u32),
        #[serde(default)]
        color: ParticleColorMode,
    },
}

fn default_particles() -> usize {
    1
}

fn default_scale() -> f32 {
    1.0
}

fn default_radial_particles() -> usize {
    RadialEffect::default().particles
}

fn default_speed() -> (f32, f32) {
    RadialEffect::default().speed_range
}

fn default_spin() -> f32 {
    RadialEffect::default().spin
}

fn default_size() -> (f32, f32) {
    RadialEffect::default().size_range
}

fn default_ttl() -> (u32, u32) {
    RadialEffect::default().ttl_range
}

impl EffectDescriptor {
    /// Instantiate the effect, validating its parameters.
    pub fn build(&self) -> Result<Box<dyn ParticleEffect>> {
        match self {
            EffectDescriptor::Default { particles, starting_scale } => {
                if *starting_scale < 0.0 {
                    return Err(EngineError::InvalidEffectConfig(
                        "starting_scale must be non-negative".to_string(),
                    ));
                }
                Ok(Box::new(DefaultParticleEffect::new(*particles, *starting_scale)))
            }
            EffectDescriptor::Radial { particles, speed, spin, size, ttl, color } => {
                let effect = RadialEffect {
                    particles: *particles,
                    speed_range: *speed,
                    spin: *spin,
                    size_range: *size,
                    ttl_range: *ttl,
                    color_mode: color.clone(),
                };
                effect.validate()?;
                Ok(Box::new(effect))
            }
        }
    }

    /// Particle count the effect keeps the engine's target population at.
    pub fn particles(&self) -> usize {
        match self {
            EffectDescriptor::Default { particles, .. } | EffectDescriptor::Radial { particles, .. } => *particles,
        }
    }
}

impl AssetManifest {
    /// Parse a manifest from a JSON string. Every atlas layout is validated.
    pub fn from_json(json: &str) -> Result<Self> {
        let manifest: AssetManifest = serde_json::from_str(json)?;
        for desc in manifest.atlases.values() {
            desc.validate()?;
        }
        log::debug!(
            "manifest loaded: {} atlases, {} effects",
            manifest.atlases.len(),
            manifest.effects.len()
        );
        Ok(manifest)
    }

    pub fn atlas(&self, name: &str) -> Result<&AtlasDescriptor> {
        self.atlases
            .get(name)
            .ok_or_else(|| EngineError::UnknownAtlas(name.to_string()))
    }

    pub fn effect_descriptor(&self, name: &str) -> Result<&EffectDescriptor> {
        self.effects
            .get(name)
            .ok_or_else(|| EngineError::UnknownEffect(name.to_string()))
    }

    /// Build a fresh instance of a named effect.
    pub fn effect(&self, name: &str) -> Result<Box<dyn ParticleEffect>> {
        self.effect_descriptor(name)?.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::Color;

    const MANIFEST: &str = r#"{
        "atlases": {
            "explosion": { "path": "explosion.png", "width": 300, "height": 200, "rows": 2, "columns": 3 },
            "star": { "path": "star.png", "width": 16, "height": 16 }
        },
        "effects": {
            "sparkle": { "kind": "default", "particles": 10, "starting_scale": 0.5 },
            "burst": {
                "kind": "radial",
                "particles": 32,
                "speed": [2.0, 6.0],
                "color": { "palette": [ { "r": 1.0, "g": 0.5, "b": 0.0 } ] }
            }
        }
    }"#;

    #[test]
    fn parse_atlases_with_defaults() {
        let manifest = AssetManifest::from_json(MANIFEST).unwrap();
        let explosion = manifest.atlas("explosion").unwrap();
        assert_eq!((explosion.rows, explosion.columns), (2, 3));
        assert_eq!(explosion.frame_count(), 6);

        let star = manifest.atlas("star").unwrap();
        assert_eq!((star.rows, star.columns), (1, 1));
        assert_eq!(star.texture_info(9), TextureInfo::new(9, 16, 16));
    }

    #[test]
    fn parse_effects() {
        let manifest = AssetManifest::from_json(MANIFEST).unwrap();
        assert_eq!(
            manifest.effect_descriptor("sparkle").unwrap(),
            &EffectDescriptor::Default { particles: 10, starting_scale: 0.5 }
        );
        match manifest.effect_descriptor("burst").unwrap() {
            EffectDescriptor::Radial { particles, speed, ttl, color, .. } => {
                assert_eq!(*particles, 32);
                assert_eq!(*speed, (2.0, 6.0));
                assert_eq!(*ttl, RadialEffect::default().ttl_range);
                assert_eq!(color, &ParticleColorMode::Palette(vec![Color::rgb(1.0, 0.5, 0.0)]));
            }
            other => panic!("unexpected descriptor {:?}", other),
        }
        assert!(manifest.effect("burst").is_ok());
    }

    #[test]
    fn unknown_names_are_errors() {
        let manifest = AssetManifest::from_json(MANIFEST).unwrap();
        assert!(matches!(manifest.atlas("nope"), Err(EngineError::UnknownAtlas(_))));
        assert!(matches!(manifest.effect("nope"), Err(EngineError::UnknownEffect(_))));
    }

    #[test]
    fn zero_column_atlas_fails_to_load() {
        let json = r#"{ "atlases": { "bad": { "path": "bad.png", "width": 10, "height": 10, "columns": 0 } } }"#;
        let err = AssetManifest::from_json(json).unwrap_err();
        assert!(matches!(err, EngineError::InvalidAtlasLayout { rows: 1, columns: 0 }));
    }

    #[test]
    fn invalid_effect_params_fail_to_build() {
        let json = r#"{ "effects": { "bad": { "kind": "radial", "ttl": [30, 10] } } }"#;
        let manifest = AssetManifest::from_json(json).unwrap();
        assert!(matches!(manifest.effect("bad"), Err(EngineError::InvalidEffectConfig(_))));
    }

    #[test]
    fn malformed_json_is_a_manifest_error() {
        assert!(matches!(AssetManifest::from_json("{"), Err(EngineError::Manifest(_))));
    }
}
