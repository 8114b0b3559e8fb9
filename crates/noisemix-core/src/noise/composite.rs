//! Composite noise: two producers sampled at the same point and blended.
use super::{Noise, SharedNoise};
use crate::blend::Blend;
use crate::error::NoiseError;

/// Evaluates `blend(first.get(x, y), second.get(x, y))`.
///
/// Nothing is cached and no coordinate is transformed: each call queries
/// `first` then `second` at exactly `(x, y)`. Children are held by value; pass
/// `&N`, `Rc<N>` or `Arc<N>` to share one producer between several
/// composites. A composite is itself a [`Noise`], so trees nest freely.
#[derive(Debug, Clone, Copy)]
pub struct CompositeNoise<A, B, F> {
    first: A,
    second: B,
    blending: F,
}

impl<A, B, F> CompositeNoise<A, B, F> {
    pub fn new(first: A, second: B, blending: F) -> Self {
        Self { first, second, blending }
    }

    pub fn first(&self) -> &A {
        &self.first
    }

    pub fn second(&self) -> &B {
        &self.second
    }

    pub fn blending(&self) -> &F {
        &self.blending
    }
}

impl<A: Noise, B: Noise, F: Blend> Noise for CompositeNoise<A, B, F> {
    #[inline]
    fn get(&self, x: f64, y: f64) -> f64 {
        let a = self.first.get(x, y);
        let b = self.second.get(x, y);
        self.blending.blend(a, b)
    }
}

/// Left-fold `children` into nested binary composites:
/// `[n0, n1, n2]` → `blend(blend(n0, n1), n2)`. A single child is returned
/// unchanged.
pub fn fold<F>(
    children: impl IntoIterator<Item = SharedNoise>,
    blending: F,
) -> Result<SharedNoise, NoiseError>
where
    F: Blend + Clone + Send + Sync + 'static,
{
    let mut iter = children.into_iter();
    let first = iter.next().ok_or(NoiseError::EmptyFold)?;
    Ok(iter.fold(first, |acc, next| {
        let node: SharedNoise = Box::new(CompositeNoise::new(acc, next, blending.clone()));
        node
    }))
}
