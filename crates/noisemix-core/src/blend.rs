//! Blending rules that fold two noise samples into one.
//!
//! The logical blends treat inputs in [0, 1] as fuzzy booleans: 1 is "true",
//! 0 is "false", and everything in between interpolates continuously. They are
//! plain functions, so any `fn(f64, f64) -> f64` or closure can stand next to
//! them as a [`Blend`].
use std::fmt;
use std::sync::Arc;

/// A pure, total combination of two samples.
pub trait Blend {
    fn blend(&self, first: f64, second: f64) -> f64;
}

impl<F: Fn(f64, f64) -> f64> Blend for F {
    #[inline]
    fn blend(&self, first: f64, second: f64) -> f64 {
        self(first, second)
    }
}

/// Signature shared by every named blend in this module.
pub type BlendFn = fn(f64, f64) -> f64;

/// Reference-counted, type-erased blend used by configuration-built trees.
#[derive(Clone)]
pub struct SharedBlend(Arc<dyn Blend + Send + Sync>);

impl SharedBlend {
    pub fn new<B: Blend + Send + Sync + 'static>(blend: B) -> Self {
        Self(Arc::new(blend))
    }
}

impl Blend for SharedBlend {
    #[inline]
    fn blend(&self, first: f64, second: f64) -> f64 {
        self.0.blend(first, second)
    }
}

impl fmt::Debug for SharedBlend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedBlend(..)")
    }
}

/// Agreement → 1, disagreement → 0: `1 − |a − b|`.
#[inline]
pub fn xnor(a: f64, b: f64) -> f64 {
    1.0 - (a - b).abs()
}

/// Disagreement → 1: `|a − b|`.
#[inline]
pub fn xor(a: f64, b: f64) -> f64 {
    (a - b).abs()
}

/// Product t-norm.
#[inline]
pub fn and(a: f64, b: f64) -> f64 {
    a * b
}

/// Probabilistic sum, the dual of [`and`].
#[inline]
pub fn or(a: f64, b: f64) -> f64 {
    a + b - a * b
}

#[inline]
pub fn average(a: f64, b: f64) -> f64 {
    (a + b) * 0.5
}

#[inline]
pub fn min(a: f64, b: f64) -> f64 {
    a.min(b)
}

#[inline]
pub fn max(a: f64, b: f64) -> f64 {
    a.max(b)
}

/// Fixed-point resolution of the bitwise blends.
const BITWISE_SCALE: i32 = 1_000_000;

/// Scale to millionths and truncate toward zero. Values above 1 saturate at
/// the scale; NaN maps to 0.
#[inline]
fn quantize(v: f64) -> i32 {
    ((v * f64::from(BITWISE_SCALE)) as i32).min(BITWISE_SCALE)
}

/// XOR of the fixed-point bit patterns of both inputs, capped at 1.
///
/// Unlike [`xor`] this is discontinuous: neighbouring inputs flip unrelated
/// low bits, which gives a fine striated texture.
#[inline]
pub fn bitwise_xor(a: f64, b: f64) -> f64 {
    let bits = (quantize(a) ^ quantize(b)).min(BITWISE_SCALE);
    f64::from(bits) / f64::from(BITWISE_SCALE)
}

#[inline]
pub fn bitwise_xnor(a: f64, b: f64) -> f64 {
    1.0 - bitwise_xor(a, b)
}

pub const XNOR_BLENDING: BlendFn = xnor;
pub const XOR_BLENDING: BlendFn = xor;
pub const AND_BLENDING: BlendFn = and;
pub const OR_BLENDING: BlendFn = or;
pub const AVERAGE_BLENDING: BlendFn = average;
pub const MIN_BLENDING: BlendFn = min;
pub const MAX_BLENDING: BlendFn = max;
pub const BITWISE_XOR_BLENDING: BlendFn = bitwise_xor;
pub const BITWISE_XNOR_BLENDING: BlendFn = bitwise_xnor;

/// Every named blend with the name configuration files use for it.
pub const BUILTIN_BLENDS: [(&str, BlendFn); 9] = [
    ("xnor", XNOR_BLENDING),
    ("xor", XOR_BLENDING),
    ("and", AND_BLENDING),
    ("or", OR_BLENDING),
    ("average", AVERAGE_BLENDING),
    ("min", MIN_BLENDING),
    ("max", MAX_BLENDING),
    ("bitwise_xor", BITWISE_XOR_BLENDING),
    ("bitwise_xnor", BITWISE_XNOR_BLENDING),
];
