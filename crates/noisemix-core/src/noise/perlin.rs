//! Bridge from `noise` crate generators to [`Noise`].
use noise::{NoiseFn, Perlin};

use super::Noise;

/// Samples a `noise::NoiseFn<f64, 2>` at `(x * frequency, y * frequency)`.
///
/// With `unit` set the generator's [-1, 1] output is remapped (and clamped) to
/// [0, 1], which is the domain the logical blends expect.
#[derive(Debug, Clone)]
pub struct NoiseFnAdapter<N> {
    source: N,
    pub frequency: f64,
    pub unit: bool,
}

impl<N> NoiseFnAdapter<N> {
    pub fn new(source: N) -> Self {
        Self { source, frequency: 1.0, unit: false }
    }

    pub fn with_frequency(mut self, frequency: f64) -> Self {
        self.frequency = frequency;
        self
    }

    /// Remap output to [0, 1].
    pub fn unit(mut self) -> Self {
        self.unit = true;
        self
    }

    pub fn source(&self) -> &N {
        &self.source
    }
}

impl NoiseFnAdapter<Perlin> {
    /// Seeded Perlin gradient noise.
    pub fn perlin(seed: u32) -> Self {
        Self::new(Perlin::new(seed))
    }
}

impl<N: NoiseFn<f64, 2>> Noise for NoiseFnAdapter<N> {
    #[inline]
    fn get(&self, x: f64, y: f64) -> f64 {
        let v = self.source.get([x * self.frequency, y * self.frequency]);
        if self.unit {
            ((v + 1.0) * 0.5).clamp(0.0, 1.0)
        } else {
            v
        }
    }
}
