pub mod composite;
pub mod perlin;

use std::rc::Rc;
use std::sync::Arc;

pub use composite::{fold, CompositeNoise};
pub use perlin::NoiseFnAdapter;

/// A scalar field over 2D noise-space.
///
/// Repeated queries at the same `(x, y)` must return the same value. The
/// output range is a convention between a producer and whatever blends it
/// (usually [0, 1]); nothing here checks it.
pub trait Noise {
    fn get(&self, x: f64, y: f64) -> f64;
}

/// Owned, thread-safe producer as built from configuration.
pub type SharedNoise = Box<dyn Noise + Send + Sync>;

impl<T: Noise + ?Sized> Noise for &T {
    #[inline]
    fn get(&self, x: f64, y: f64) -> f64 {
        (**self).get(x, y)
    }
}

impl<T: Noise + ?Sized> Noise for Box<T> {
    #[inline]
    fn get(&self, x: f64, y: f64) -> f64 {
        (**self).get(x, y)
    }
}

impl<T: Noise + ?Sized> Noise for Rc<T> {
    #[inline]
    fn get(&self, x: f64, y: f64) -> f64 {
        (**self).get(x, y)
    }
}

impl<T: Noise + ?Sized> Noise for Arc<T> {
    #[inline]
    fn get(&self, x: f64, y: f64) -> f64 {
        (**self).get(x, y)
    }
}

/// The same value at every coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constant(pub f64);

impl Noise for Constant {
    #[inline]
    fn get(&self, _x: f64, _y: f64) -> f64 {
        self.0
    }
}

/// Closure-backed producer; see [`from_fn`].
#[derive(Clone, Copy)]
pub struct FnNoise<F>(F);

impl<F: Fn(f64, f64) -> f64> Noise for FnNoise<F> {
    #[inline]
    fn get(&self, x: f64, y: f64) -> f64 {
        (self.0)(x, y)
    }
}

/// Wrap a closure `(x, y) -> value` as a [`Noise`].
pub fn from_fn<F: Fn(f64, f64) -> f64>(f: F) -> FnNoise<F> {
    FnNoise(f)
}
