//! Dense row-major sampling of a producer over the unit square.
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::NoiseError;
use crate::noise::Noise;

#[cfg(feature = "threading")]
use rayon::prelude::*;

/// Producers [`sample_grid`] accepts. With `threading` enabled rows are
/// sampled in parallel, so the producer must also be `Sync`.
#[cfg(feature = "threading")]
pub trait GridSource: Noise + Sync {}
#[cfg(feature = "threading")]
impl<T: Noise + Sync + ?Sized> GridSource for T {}

#[cfg(not(feature = "threading"))]
pub trait GridSource: Noise {}
#[cfg(not(feature = "threading"))]
impl<T: Noise + ?Sized> GridSource for T {}

/// Sampled values, row-major. Sample `(row, col)` was taken at
/// `(col / width, row / height)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoiseGrid {
    pub data: Vec<f32>,
    pub width: usize,
    pub height: usize,
}

impl NoiseGrid {
    /// # Panics
    /// If `row >= height` or `col >= width`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        assert!(
            row < self.height && col < self.width,
            "({row}, {col}) outside {}x{} grid", self.width, self.height
        );
        self.data[row * self.width + col]
    }

    pub fn min_value(&self) -> f32 {
        self.data.iter().cloned().fold(f32::INFINITY, f32::min)
    }

    pub fn max_value(&self) -> f32 {
        self.data.iter().cloned().fold(f32::NEG_INFINITY, f32::max)
    }
}

/// Sample `noise` on a `width × height` lattice covering [0, 1)².
pub fn sample_grid<N: GridSource + ?Sized>(
    noise: &N,
    width: usize,
    height: usize,
) -> Result<NoiseGrid, NoiseError> {
    if width == 0 || height == 0 {
        return Err(NoiseError::EmptyGrid { width, height });
    }
    let len = width
        .checked_mul(height)
        .ok_or(NoiseError::GridTooLarge { width, height })?;
    debug!("sampling {width}x{height} grid");

    let (w, h) = (width as f64, height as f64);
    let sample = |idx: usize| {
        let (r, c) = (idx / width, idx % width);
        noise.get(c as f64 / w, r as f64 / h) as f32
    };

    #[cfg(feature = "threading")]
    let data: Vec<f32> = (0..len).into_par_iter().map(sample).collect();
    #[cfg(not(feature = "threading"))]
    let data: Vec<f32> = (0..len).map(sample).collect();

    Ok(NoiseGrid { data, width, height })
}
