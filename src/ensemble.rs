// src/ensemble.rs
//! Ensembles of independently sampled walk paths
//!
//! All paths of an ensemble share one `size` and draw sequentially from a
//! single generator: path k consumes the draws after path k-1. Figures that
//! should be comparable reseed the generator before sampling.

use crate::error::{validation, WalkResult};
use crate::walk::{ScaledWalk, Scaling};
use rand::Rng;

/// A fixed-size collection of sample paths sharing one `size` parameter
#[derive(Debug, Clone)]
pub struct Ensemble {
    pub size: usize,
    pub scaling: Scaling,
    pub paths: Vec<Vec<(f64, f64)>>,
}

impl Ensemble {
    /// Sample `count` independent paths of `size` steps
    ///
    /// # Errors
    ///
    /// Returns `WalkError` when `size` or `count` is out of range.
    pub fn sample<R: Rng + ?Sized>(
        scaling: Scaling,
        size: usize,
        count: usize,
        rng: &mut R,
    ) -> WalkResult<Ensemble> {
        validation::validate_count(count)?;

        let mut paths = Vec::with_capacity(count);
        for _ in 0..count {
            let path: Vec<(f64, f64)> = ScaledWalk::new(scaling, size, &mut *rng)?.collect();
            paths.push(path);
        }

        Ok(Ensemble {
            size,
            scaling,
            paths,
        })
    }

    /// Number of paths in the ensemble
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
