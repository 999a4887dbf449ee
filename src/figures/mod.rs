// src/figures/mod.rs
//! Figure Rendering
//!
//! Each renderer samples fresh paths from a caller-seeded generator and
//! writes one PNG. Rendering is deterministic given the seed set immediately
//! before the call, so figures of different scalings are directly comparable.
//!
//! The bitmap backend carries no alpha channel, so figures render on a white
//! background.

pub mod grid;
pub mod increment;
pub mod scatter;

pub use grid::render_grid;
pub use increment::render_increments;
pub use scatter::{render_hist, render_scatter};

use crate::increments::IncrementOptions;
use crate::walk::Scaling;

/// Panel sizes of the grid comparison figures
pub const GRID_SIZES: [usize; 4] = [10, 100, 1000, 10000];

/// Sample paths overlaid per grid panel
pub const PATHS_PER_PANEL: usize = 20;

/// Parameters of one grid comparison figure
pub struct GridSpec<'a> {
    pub scaling: Scaling,
    pub y_label: &'a str,
    pub filename: &'a str,
    pub y_lim: (f64, f64),
    /// Confidence level of the theoretical ±q·√t band, if drawn
    pub band: Option<f64>,
}

/// Parameters of one half-interval increment figure
pub struct IncrementSpec<'a> {
    pub scaling: Scaling,
    pub size: usize,
    pub count: usize,
    pub y_label: &'a str,
    pub filename: &'a str,
    pub y_lim: (f64, f64),
    pub options: IncrementOptions,
}

/// Parameters of the terminal-increment scatter figure
pub struct ScatterSpec<'a> {
    pub scaling: Scaling,
    pub size: usize,
    pub count: usize,
    pub filename: &'a str,
    /// Symmetric axis limit: both axes span [-axis_lim, axis_lim]
    pub axis_lim: f64,
    /// Confidence level of the ±q·√0.5 reference lines, if drawn
    pub guides: Option<f64>,
}

/// Parameters of the terminal-increment 3D histogram figure
pub struct HistSpec<'a> {
    pub scaling: Scaling,
    pub size: usize,
    pub count: usize,
    pub filename: &'a str,
    pub range: (f64, f64),
    pub bins: usize,
}

/// The curve q·√t sampled at 101 evenly spaced points of [0, 1]
pub(crate) fn band_curve(q: f64) -> Vec<(f64, f64)> {
    (0..=100)
        .map(|i| {
            let t = i as f64 / 100.0;
            (t, q * t.sqrt())
        })
        .collect()
}
