//! # binom-walk: Binomial Random Walks Approaching the Wiener Process
//!
//! A small Rust library plus a figure binary that renders illustrative plots
//! of a discrete binomial walk and its centered/rescaled forms, for
//! pedagogical use.
//!
//! ## Key Features
//!
//! - **Lazy path generation**: Walks are finite iterators over (t, x) pairs
//! - **Pointwise rescaling**: Raw, centered and variance-normalized forms of
//!   the same path
//! - **Reproducible figures**: One seeded generator per figure, reseeded
//!   immediately before each render call
//! - **Three figure families**: Size-comparison grids, half-interval
//!   increment plots, and terminal-increment scatter/histogram plots
//!
//! ## Quick Start
//!
//! ```rust
//! use binom_walk::rng;
//! use binom_walk::{Ensemble, Scaling};
//!
//! // Sample 20 normalized walks of 100 steps
//! let mut rng = rng::seed_rng_from_u64(5);
//! let ensemble =
//!     Ensemble::sample(Scaling::Normalized, 100, 20, &mut rng).expect("valid parameters");
//!
//! assert_eq!(ensemble.len(), 20);
//! assert_eq!(ensemble.paths[0].len(), 101);
//! ```
//!
//! ## Mathematical Foundation
//!
//! The raw walk is a running count of fair coin flips sampled at
//! t = 0, 1/n, ..., 1. Subtracting the drift nt/2 and dividing by √(n/4)
//! yields a process whose distribution approaches a standard Wiener process
//! as n grows (De Moivre-Laplace / CLT), which the figures illustrate.

// Module declarations
pub mod ensemble;
pub mod error;
pub mod figures;
pub mod increments;
pub mod math_utils;
pub mod output;
pub mod rng;
pub mod walk;

// Re-export commonly used types for convenience
pub use ensemble::Ensemble;
pub use error::{WalkError, WalkResult};
pub use walk::{RawWalk, ScaledWalk, Scaling};
