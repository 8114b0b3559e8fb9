//! Composable 2D noise: producers, blends, and the composites that join them.
//!
//! ```
//! use noisemix_core::blend::XNOR_BLENDING;
//! use noisemix_core::noise::{CompositeNoise, Constant, Noise};
//!
//! let mixed = CompositeNoise::new(Constant(0.5), Constant(0.5), XNOR_BLENDING);
//! assert_eq!(mixed.get(0.5, 0.5), 1.0);
//! ```
pub mod blend;
pub mod config;
pub mod error;
pub mod grid;
pub mod noise;

pub use blend::{Blend, SharedBlend};
pub use config::{BlendRegistry, NoiseConfig};
pub use error::NoiseError;
pub use grid::{sample_grid, NoiseGrid};
pub use crate::noise::{CompositeNoise, Noise, SharedNoise};
