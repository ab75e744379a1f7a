use serde::{Deserialize, Serialize};

use crate::core::color::Color;
use crate::systems::particles::rng::RandomSource;

/// How a particle engine releases particles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmissionMode {
    /// Generate the target population on every update.
    #[default]
    Continuous,
    /// Generate the target population once, on the first update after
    /// construction or reset.
    OneShot,
}

/// How particle colors are chosen.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticleColorMode {
    /// Each channel drawn uniformly from [0, 1].
    #[default]
    Random,
    /// All particles use the same color.
    Fixed(Color),
    /// Pick randomly from a palette of colors.
    Palette(Vec<Color>),
}

impl ParticleColorMode {
    /// Draw a color. Returns `None` for an empty palette.
    pub fn pick(&self, rng: &mut dyn RandomSource) -> Option<Color> {
        match self {
            ParticleColorMode::Random => Some(Color::rgb(rng.next_f32(), rng.next_f32(), rng.next_f32())),
            ParticleColorMode::Fixed(c) => Some(*c),
            ParticleColorMode::Palette(colors) if colors.is_empty() => None,
            ParticleColorMode::Palette(colors) => {
                let idx = rng.next_int(colors.len() as u32) as usize;
                Some(colors[idx])
            }
        }
    }
}
