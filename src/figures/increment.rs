// src/figures/increment.rs
//! Half-Interval Increment Figure
//!
//! One subplot per half-interval of t, each showing the same ensemble's
//! paths restricted to that half. Options collapse each half to a straight
//! line between its endpoints and/or re-zero each half's starting value, so
//! the figure variants move step by step from "one path cut in two" to "two
//! independent increments".

use crate::ensemble::Ensemble;
use crate::error::{validation, WalkError, WalkResult};
use crate::figures::IncrementSpec;
use crate::increments::{apply_options, split_halves};
use plotters::prelude::*;
use rand::Rng;
use std::error::Error;

const HALF_RANGES: [(f64, f64); 2] = [(0.0, 0.5), (0.5, 1.0)];

/// Render one increment figure
///
/// # Errors
///
/// Returns `WalkError` for invalid parameters and `WalkError::Render` when
/// the plotting backend fails.
pub fn render_increments<R: Rng + ?Sized>(
    spec: &IncrementSpec<'_>,
    rng: &mut R,
) -> WalkResult<()> {
    validation::validate_limits("y_lim", spec.y_lim)?;
    draw(spec, rng).map_err(|e| WalkError::render(spec.filename, e))
}

fn draw<R: Rng + ?Sized>(spec: &IncrementSpec<'_>, rng: &mut R) -> Result<(), Box<dyn Error>> {
    let ensemble = Ensemble::sample(spec.scaling, spec.size, spec.count, rng)?;
    let halves: Vec<(Vec<(f64, f64)>, Vec<(f64, f64)>)> = ensemble
        .paths
        .iter()
        .map(|path| split_halves(path))
        .collect();

    let root = BitMapBackend::new(spec.filename, (1000, 500)).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((1, 2));

    for (panel_idx, panel) in panels.iter().enumerate() {
        let (t_lo, t_hi) = HALF_RANGES[panel_idx];

        let mut chart = ChartBuilder::on(panel)
            .caption(
                format!("t in [{}, {}]", t_lo, t_hi),
                ("sans-serif", 18),
            )
            .margin(8)
            .x_label_area_size(28)
            .y_label_area_size(44)
            .build_cartesian_2d(t_lo..t_hi, spec.y_lim.0..spec.y_lim.1)?;

        chart
            .configure_mesh()
            .x_desc("t")
            .y_desc(spec.y_label)
            .draw()?;

        for (i, (first, second)) in halves.iter().enumerate() {
            let half = if panel_idx == 0 { first } else { second };
            let points = apply_options(half, spec.options);
            let color = Palette99::pick(i).mix(0.9);
            chart.draw_series(LineSeries::new(points, &color))?;
        }
    }

    root.present()?;
    Ok(())
}
