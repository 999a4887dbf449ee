// src/walk.rs
//! Binomial Random Walk Sequences
//!
//! # Mathematical Framework
//!
//! The raw walk counts successes of `size` independent fair coin flips:
//! ```text
//! X_n(t) = sum of B_1, ..., B_{tn},   B_i ~ Bernoulli(1/2)
//! ```
//! sampled at t = 0, 1/n, 2/n, ..., 1. Two pointwise rescalings of the same
//! path are derived from it:
//! ```text
//! centered:    X_n(t) - nt/2                     (remove the deterministic drift)
//! normalized:  (X_n(t) - nt/2) / sqrt(n/4)       (unit terminal variance)
//! ```
//! By the De Moivre-Laplace theorem the normalized walk converges in
//! distribution to a standard Wiener process as n grows, which is what the
//! rendered figures illustrate.
//!
//! # Iteration Contract
//!
//! A walk is a lazy, finite, non-restartable iterator over exactly `size + 1`
//! (t, x) pairs. The pair yielded at index n carries the pre-increment value;
//! the coin draw taken after it affects the value reported at index n + 1.

use crate::error::{validation::validate_size, WalkResult};
use crate::rng;
use rand::Rng;

/// Pointwise rescaling applied to a raw walk value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scaling {
    /// The running success count itself
    Raw,
    /// Drift removed: x - size*t/2
    Centered,
    /// Drift removed and variance normalized: (x - size*t/2) / sqrt(size/4)
    Normalized,
}

impl Scaling {
    /// Apply the transform to one sample point
    ///
    /// Pure and deterministic; preserves point count and ordering when mapped
    /// over a path.
    pub fn apply(self, size: usize, t: f64, x: f64) -> f64 {
        let drift = size as f64 * t / 2.0;
        match self {
            Scaling::Raw => x,
            Scaling::Centered => x - drift,
            Scaling::Normalized => (x - drift) / (size as f64 / 4.0).sqrt(),
        }
    }
}

/// Lazy sample path of the raw binomial walk
///
/// Yields exactly `size + 1` points (t, x) with t = n/size and x the
/// cumulative coin-flip count before step n.
pub struct RawWalk<R> {
    size: usize,
    n: usize,
    x: u64,
    rng: R,
}

impl<R: Rng> RawWalk<R> {
    /// Start a walk of `size` steps drawing from `rng`
    ///
    /// # Errors
    ///
    /// Returns `WalkError::InvalidParameters` when `size` is 0 (the first
    /// time point would be 0/0) or above the supported maximum.
    pub fn new(size: usize, rng: R) -> WalkResult<Self> {
        validate_size(size)?;
        Ok(RawWalk {
            size,
            n: 0,
            x: 0,
            rng,
        })
    }
}

impl<R: Rng> Iterator for RawWalk<R> {
    type Item = (f64, f64);

    fn next(&mut self) -> Option<(f64, f64)> {
        if self.n > self.size {
            return None;
        }
        let t = self.n as f64 / self.size as f64;
        let x = self.x as f64;
        // The draw taken here is reported at the next index.
        if self.n < self.size {
            self.x += rng::get_coin_draw(&mut self.rng);
        }
        self.n += 1;
        Some((t, x))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.size + 1 - self.n;
        (remaining, Some(remaining))
    }
}

impl<R: Rng> ExactSizeIterator for RawWalk<R> {}

/// Lazy sample path of a rescaled binomial walk
///
/// Same iteration contract as [`RawWalk`], with the scaling applied to each
/// yielded point.
pub struct ScaledWalk<R> {
    inner: RawWalk<R>,
    scaling: Scaling,
}

impl<R: Rng> ScaledWalk<R> {
    pub fn new(scaling: Scaling, size: usize, rng: R) -> WalkResult<Self> {
        Ok(ScaledWalk {
            inner: RawWalk::new(size, rng)?,
            scaling,
        })
    }
}

impl<R: Rng> Iterator for ScaledWalk<R> {
    type Item = (f64, f64);

    fn next(&mut self) -> Option<(f64, f64)> {
        let size = self.inner.size;
        self.inner
            .next()
            .map(|(t, x)| (t, self.scaling.apply(size, t, x)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<R: Rng> ExactSizeIterator for ScaledWalk<R> {}
