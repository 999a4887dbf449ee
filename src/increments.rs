// src/increments.rs
//! Half-Interval Increments of a Sample Path
//!
//! The increment figures look at a path over the two half-intervals
//! t ∈ [0, 0.5] and t ∈ [0.5, 1]. For a Wiener process the increments over
//! disjoint intervals are independent N(0, Δt) variables; the figures show
//! the discrete walk approaching that behavior. The point at t = 0.5 belongs
//! to both halves, so each half carries its own copy of the boundary.

use crate::error::{validation, WalkResult};
use bitflags::bitflags;
use ndarray::Array2;

bitflags! {
    /// Variant switches for the increment figures
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct IncrementOptions: u32 {
        const NONE           = 0;
        /// Collapse each half to its two endpoints (straight-line approximation)
        const ENDPOINTS_ONLY = 1 << 0;
        /// Subtract each half's starting value so both halves start at 0
        const REZERO         = 1 << 1;
    }
}

/// Restrict a path to its two half-intervals
///
/// Returns the sub-paths over t ∈ [0, 0.5] and t ∈ [0.5, 1]. Both bounds are
/// inclusive: when the path has a point at exactly t = 0.5 (even `size`), it
/// appears in both halves.
pub fn split_halves(path: &[(f64, f64)]) -> (Vec<(f64, f64)>, Vec<(f64, f64)>) {
    let first: Vec<(f64, f64)> = path.iter().copied().filter(|&(t, _)| t <= 0.5).collect();
    let second: Vec<(f64, f64)> = path.iter().copied().filter(|&(t, _)| t >= 0.5).collect();
    (first, second)
}

/// Apply increment-figure options to one half-interval sub-path
pub fn apply_options(half: &[(f64, f64)], options: IncrementOptions) -> Vec<(f64, f64)> {
    let mut points: Vec<(f64, f64)> =
        if options.contains(IncrementOptions::ENDPOINTS_ONLY) && half.len() > 2 {
            vec![half[0], half[half.len() - 1]]
        } else {
            half.to_vec()
        };

    if options.contains(IncrementOptions::REZERO) {
        if let Some(&(_, x0)) = points.first() {
            for point in &mut points {
                point.1 -= x0;
            }
        }
    }

    points
}

/// Terminal increment of each half-interval
///
/// Returns (x(0.5) - x(0), x(1) - x(0.5)), taking each half's last and first
/// points as its endpoints. An empty path yields (0, 0).
pub fn terminal_increments(path: &[(f64, f64)]) -> (f64, f64) {
    let (first, second) = split_halves(path);
    let delta = |half: &[(f64, f64)]| match (half.first(), half.last()) {
        (Some(&(_, start)), Some(&(_, end))) => end - start,
        _ => 0.0,
    };
    (delta(&first), delta(&second))
}

/// Bucket 2D increment samples into a square grid of counts
///
/// Samples outside the half-open square [lo, hi) x [lo, hi) are dropped.
/// Row index follows the first coordinate, column index the second.
///
/// # Errors
///
/// Returns `WalkError` when the range is not a valid interval or `bins` is
/// out of range.
pub fn hist2d(
    samples: &[(f64, f64)],
    range: (f64, f64),
    bins: usize,
) -> WalkResult<Array2<usize>> {
    validation::validate_limits("range", range)?;
    validation::validate_bins(bins)?;

    let (lo, hi) = range;
    let width = (hi - lo) / bins as f64;
    let mut counts = Array2::<usize>::zeros((bins, bins));

    for &(a, b) in samples {
        if a < lo || a >= hi || b < lo || b >= hi {
            continue;
        }
        let i = (((a - lo) / width) as usize).min(bins - 1);
        let j = (((b - lo) / width) as usize).min(bins - 1);
        counts[[i, j]] += 1;
    }

    Ok(counts)
}
