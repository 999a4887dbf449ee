// src/figures/grid.rs
//! Grid Comparison Figure
//!
//! A 2x2 grid with one panel per walk size, 20 sample paths overlaid per
//! panel, fixed per-figure y-limits so panels of the same figure share a
//! scale. For the normalized scaling a theoretical ±q·√t band is drawn
//! dashed in black; the De Moivre-Laplace approximation puts about 95% of
//! the limiting process inside ±1.96√t at every t.

use crate::ensemble::Ensemble;
use crate::error::{validation, WalkError, WalkResult};
use crate::figures::{band_curve, GridSpec, GRID_SIZES, PATHS_PER_PANEL};
use crate::math_utils;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use rand::Rng;
use std::error::Error;

/// Render one grid comparison figure
///
/// Samples `PATHS_PER_PANEL` fresh paths per panel from `rng`, one panel per
/// entry of `GRID_SIZES`.
///
/// # Errors
///
/// Returns `WalkError` for invalid y-limits or band level, and
/// `WalkError::Render` when the plotting backend fails.
pub fn render_grid<R: Rng + ?Sized>(spec: &GridSpec<'_>, rng: &mut R) -> WalkResult<()> {
    validation::validate_limits("y_lim", spec.y_lim)?;
    if let Some(level) = spec.band {
        validation::validate_confidence("band", level)?;
    }
    draw(spec, rng).map_err(|e| WalkError::render(spec.filename, e))
}

fn draw<R: Rng + ?Sized>(spec: &GridSpec<'_>, rng: &mut R) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(spec.filename, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((2, 2));

    for (panel, &size) in panels.iter().zip(GRID_SIZES.iter()) {
        let ensemble = Ensemble::sample(spec.scaling, size, PATHS_PER_PANEL, rng)?;

        let mut chart = ChartBuilder::on(panel)
            .caption(format!("n = {}", size), ("sans-serif", 18))
            .margin(8)
            .x_label_area_size(28)
            .y_label_area_size(44)
            .build_cartesian_2d(0.0f64..1.0f64, spec.y_lim.0..spec.y_lim.1)?;

        chart
            .configure_mesh()
            .x_desc("t")
            .y_desc(spec.y_label)
            .draw()?;

        for (i, path) in ensemble.paths.iter().enumerate() {
            let color = Palette99::pick(i).mix(0.9);
            chart.draw_series(LineSeries::new(path.iter().copied(), &color))?;
        }

        if let Some(level) = spec.band {
            let q = math_utils::band_quantile(level);
            let band = band_curve(q);
            chart
                .draw_series(DashedLineSeries::new(
                    band.iter().copied(),
                    4,
                    3,
                    ShapeStyle::from(&BLACK),
                ))?
                .label(format!("±{:.2}√t", q))
                .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], BLACK));
            chart.draw_series(DashedLineSeries::new(
                band.iter().map(|&(t, y)| (t, -y)),
                4,
                3,
                ShapeStyle::from(&BLACK),
            ))?;
            chart
                .configure_series_labels()
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .draw()?;
        }
    }

    root.present()?;
    Ok(())
}
