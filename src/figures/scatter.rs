// src/figures/scatter.rs
//! Terminal-Increment Scatter and Histogram Figures
//!
//! Both figures reduce each path of a large ensemble to the pair of
//! half-interval terminal increments (ΔX1, ΔX2). For the normalized walk the
//! limiting pair is two independent N(0, 1/2) variables; the scatter shows
//! the cloud against ±q·√0.5 reference lines, and the histogram buckets the
//! cloud into a 2D grid rendered as a 3D bar chart.

use crate::ensemble::Ensemble;
use crate::error::{validation, WalkError, WalkResult};
use crate::figures::{HistSpec, ScatterSpec};
use crate::increments::{hist2d, terminal_increments};
use crate::math_utils;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use rand::Rng;
use std::error::Error;

/// Render the terminal-increment scatter figure
///
/// # Errors
///
/// Returns `WalkError` for invalid parameters and `WalkError::Render` when
/// the plotting backend fails.
pub fn render_scatter<R: Rng + ?Sized>(spec: &ScatterSpec<'_>, rng: &mut R) -> WalkResult<()> {
    validation::validate_positive("axis_lim", spec.axis_lim)?;
    if let Some(level) = spec.guides {
        validation::validate_confidence("guides", level)?;
    }
    draw_scatter(spec, rng).map_err(|e| WalkError::render(spec.filename, e))
}

fn draw_scatter<R: Rng + ?Sized>(
    spec: &ScatterSpec<'_>,
    rng: &mut R,
) -> Result<(), Box<dyn Error>> {
    let ensemble = Ensemble::sample(spec.scaling, spec.size, spec.count, rng)?;
    let samples: Vec<(f64, f64)> = ensemble
        .paths
        .iter()
        .map(|path| terminal_increments(path))
        .collect();

    let lim = spec.axis_lim;
    let root = BitMapBackend::new(spec.filename, (700, 700)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Half-interval increments, {} paths", spec.count),
            ("sans-serif", 20),
        )
        .margin(10)
        .x_label_area_size(36)
        .y_label_area_size(48)
        .build_cartesian_2d(-lim..lim, -lim..lim)?;

    chart
        .configure_mesh()
        .x_desc("X(0.5) - X(0)")
        .y_desc("X(1) - X(0.5)")
        .draw()?;

    chart.draw_series(
        samples
            .iter()
            .map(|&(a, b)| Circle::new((a, b), 2, BLUE.mix(0.5).filled())),
    )?;

    if let Some(level) = spec.guides {
        let g = math_utils::band_quantile(level) * 0.5f64.sqrt();
        for &v in &[g, -g] {
            chart.draw_series(DashedLineSeries::new(
                vec![(v, -lim), (v, lim)],
                4,
                3,
                ShapeStyle::from(&BLACK),
            ))?;
            chart.draw_series(DashedLineSeries::new(
                vec![(-lim, v), (lim, v)],
                4,
                3,
                ShapeStyle::from(&BLACK),
            ))?;
        }
    }

    root.present()?;
    Ok(())
}

/// Render the terminal-increment 3D histogram figure
///
/// Buckets the increment pairs of a very large ensemble into a square grid
/// and draws one cuboid per non-empty bin.
///
/// # Errors
///
/// Returns `WalkError` for invalid parameters and `WalkError::Render` when
/// the plotting backend fails.
pub fn render_hist<R: Rng + ?Sized>(spec: &HistSpec<'_>, rng: &mut R) -> WalkResult<()> {
    validation::validate_limits("range", spec.range)?;
    validation::validate_bins(spec.bins)?;
    draw_hist(spec, rng).map_err(|e| WalkError::render(spec.filename, e))
}

fn draw_hist<R: Rng + ?Sized>(spec: &HistSpec<'_>, rng: &mut R) -> Result<(), Box<dyn Error>> {
    let ensemble = Ensemble::sample(spec.scaling, spec.size, spec.count, rng)?;
    let samples: Vec<(f64, f64)> = ensemble
        .paths
        .iter()
        .map(|path| terminal_increments(path))
        .collect();
    let counts = hist2d(&samples, spec.range, spec.bins)?;

    let (lo, hi) = spec.range;
    let width = (hi - lo) / spec.bins as f64;
    let max_count = counts.iter().copied().max().unwrap_or(0).max(1);

    let root = BitMapBackend::new(spec.filename, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Half-interval increments, {} paths", spec.count),
            ("sans-serif", 20),
        )
        .margin(16)
        .build_cartesian_3d(lo..hi, 0.0..(max_count as f64 * 1.1), lo..hi)?;

    chart.with_projection(|mut pb| {
        pb.pitch = 0.7;
        pb.yaw = 0.7;
        pb.scale = 0.8;
        pb.into_matrix()
    });

    chart.configure_axes().draw()?;

    chart.draw_series(
        counts
            .indexed_iter()
            .filter(|&(_, &count)| count > 0)
            .map(|((i, j), &count)| {
                let x0 = lo + i as f64 * width;
                let z0 = lo + j as f64 * width;
                Cubiod::new(
                    [(x0, 0.0, z0), (x0 + width, count as f64, z0 + width)],
                    BLUE.filled(),
                    &BLACK.mix(0.2),
                )
            }),
    )?;

    root.present()?;
    Ok(())
}
