// scripts/figures.rs
use binom_walk::figures::{
    render_grid, render_hist, render_increments, render_scatter, GridSpec, HistSpec,
    IncrementSpec, ScatterSpec, GRID_SIZES, PATHS_PER_PANEL,
};
use binom_walk::increments::IncrementOptions;
use binom_walk::math_utils::Timer;
use binom_walk::output::{self, ManifestRow};
use binom_walk::rng;
use binom_walk::walk::Scaling;
use std::error::Error;

// Every figure reseeds from the same constant, so figures of different
// scalings show the same underlying coin flips.
const SEED: u64 = 5;
const BAND_CONFIDENCE: f64 = 0.95;

const INCREMENT_SIZE: usize = 1000;
const INCREMENT_COUNT: usize = 20;
const SCATTER_COUNT: usize = 1000;
const HIST_COUNT: usize = 10000;
const HIST_BINS: usize = 24;

const MANIFEST_FILE: &str = "figures_manifest.csv";

fn main() -> Result<(), Box<dyn Error>> {
    let mut manifest: Vec<ManifestRow> = Vec::new();
    let mut timer = Timer::new();

    let grids = [
        GridSpec {
            scaling: Scaling::Raw,
            y_label: "X_n(t)",
            filename: "binom1.png",
            y_lim: (-0.5, 20.5),
            band: None,
        },
        GridSpec {
            scaling: Scaling::Centered,
            y_label: "X_n(t) - nt/2",
            filename: "binom2.png",
            y_lim: (-10.5, 10.5),
            band: None,
        },
        GridSpec {
            scaling: Scaling::Normalized,
            y_label: "(X_n(t) - nt/2) / sqrt(n/4)",
            filename: "binom3.png",
            y_lim: (-3.5, 3.5),
            band: Some(BAND_CONFIDENCE),
        },
    ];

    for spec in &grids {
        timer.start();
        let mut rng = rng::seed_rng_from_u64(SEED);
        render_grid(spec, &mut rng)?;
        record(
            &mut manifest,
            "grid",
            spec.filename,
            GRID_SIZES.len() * PATHS_PER_PANEL,
            timer.elapsed_ms(),
        );
    }

    let increment_variants = [
        (
            "increment1.png",
            IncrementOptions::NONE,
            "(X_n(t) - nt/2) / sqrt(n/4)",
            (-3.5, 3.5),
        ),
        (
            "increment2.png",
            IncrementOptions::ENDPOINTS_ONLY,
            "(X_n(t) - nt/2) / sqrt(n/4)",
            (-3.5, 3.5),
        ),
        (
            "increment3.png",
            IncrementOptions::REZERO,
            "increment since half start",
            (-2.5, 2.5),
        ),
        (
            "increment4.png",
            IncrementOptions::ENDPOINTS_ONLY | IncrementOptions::REZERO,
            "increment since half start",
            (-2.5, 2.5),
        ),
    ];

    for &(filename, options, y_label, y_lim) in &increment_variants {
        timer.start();
        let mut rng = rng::seed_rng_from_u64(SEED);
        render_increments(
            &IncrementSpec {
                scaling: Scaling::Normalized,
                size: INCREMENT_SIZE,
                count: INCREMENT_COUNT,
                y_label,
                filename,
                y_lim,
                options,
            },
            &mut rng,
        )?;
        record(
            &mut manifest,
            "increment",
            filename,
            INCREMENT_COUNT,
            timer.elapsed_ms(),
        );
    }

    timer.start();
    let mut rng = rng::seed_rng_from_u64(SEED);
    render_scatter(
        &ScatterSpec {
            scaling: Scaling::Normalized,
            size: INCREMENT_SIZE,
            count: SCATTER_COUNT,
            filename: "scatter1.png",
            axis_lim: 3.0,
            guides: Some(BAND_CONFIDENCE),
        },
        &mut rng,
    )?;
    record(
        &mut manifest,
        "scatter",
        "scatter1.png",
        SCATTER_COUNT,
        timer.elapsed_ms(),
    );

    timer.start();
    let mut rng = rng::seed_rng_from_u64(SEED);
    render_hist(
        &HistSpec {
            scaling: Scaling::Normalized,
            size: INCREMENT_SIZE,
            count: HIST_COUNT,
            filename: "hist1.png",
            range: (-3.0, 3.0),
            bins: HIST_BINS,
        },
        &mut rng,
    )?;
    record(
        &mut manifest,
        "hist",
        "hist1.png",
        HIST_COUNT,
        timer.elapsed_ms(),
    );

    output::write_manifest_csv(MANIFEST_FILE, &manifest)?;
    println!("Wrote {} figures; manifest at {}", manifest.len(), MANIFEST_FILE);

    Ok(())
}

fn record(
    manifest: &mut Vec<ManifestRow>,
    figure: &str,
    file: &str,
    paths: usize,
    elapsed_ms: f64,
) {
    println!("wrote {} ({:.0} ms)", file, elapsed_ms);
    manifest.push(ManifestRow {
        figure: figure.to_string(),
        file: file.to_string(),
        seed: SEED,
        paths,
        elapsed_ms,
    });
}
