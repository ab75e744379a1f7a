//! Random sources for particle generation.
//! Injected into the engine so tests can run with a fixed seed.

use rand::{Rng as _, SeedableRng};
use rand_pcg::Pcg32;

/// Uniform random numbers consumed by particle effects.
pub trait RandomSource {
    /// Uniform float in [0, 1).
    fn next_f32(&mut self) -> f32;

    /// Uniform integer in [0, bound). `bound` must be non-zero.
    fn next_int(&mut self, bound: u32) -> u32;

    /// Uniform float in [min, max).
    fn range_f32(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }
}

/// Default seedable generator (PCG32).
#[derive(Debug, Clone)]
pub struct Rng {
    inner: Pcg32,
}

impl Rng {
    /// Deterministic generator: equal seeds yield equal sequences.
    pub fn new(seed: u64) -> Self {
        Rng {
            inner: Pcg32::seed_from_u64(seed),
        }
    }

    /// Generator seeded from the operating system.
    pub fn from_entropy() -> Self {
        Rng {
            inner: Pcg32::from_entropy(),
        }
    }
}

impl RandomSource for Rng {
    fn next_f32(&mut self) -> f32 {
        self.inner.gen::<f32>()
    }

    fn next_int(&mut self, bound: u32) -> u32 {
        self.inner.gen_range(0..bound)
    }
}

/// Scripted source returning fixed values in a cycle, for exact-value tests.
#[cfg(test)]
#[derive(Debug, Clone)]
pub(crate) struct ScriptedRandom {
    floats: Vec<f32>,
    ints: Vec<u32>,
    next_float: usize,
    next_int: usize,
}

#[cfg(test)]
impl ScriptedRandom {
    pub(crate) fn new(floats: Vec<f32>, ints: Vec<u32>) -> Self {
        Self {
            floats,
            ints,
            next_float: 0,
            next_int: 0,
        }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn next_f32(&mut self) -> f32 {
        let value = self.floats[self.next_float % self.floats.len()];
        self.next_float += 1;
        value
    }

    fn next_int(&mut self, bound: u32) -> u32 {
        let value = self.ints[self.next_int % self.ints.len()];
        self.next_int += 1;
        value % bound
    }
}
