// demos/demo.rs
use binom_walk::increments::terminal_increments;
use binom_walk::rng;
use binom_walk::{Ensemble, Scaling};

fn main() {
    println!("Running binom-walk demo\n");

    let size = 1000;
    let count = 2000;
    let seed = 5;

    let mut rng = rng::seed_rng_from_u64(seed);
    let ensemble = Ensemble::sample(Scaling::Normalized, size, count, &mut rng)
        .expect("valid parameters");

    // Terminal values of the normalized walk approach N(0, 1).
    let terminals: Vec<f64> = ensemble
        .paths
        .iter()
        .map(|path| path.last().map(|&(_, x)| x).unwrap_or(0.0))
        .collect();
    let (mean, var) = mean_and_variance(&terminals);
    println!("Normalized walk, n = {}, {} paths:", size, count);
    println!("  terminal mean     = {:>8.4}  (theory 0)", mean);
    println!("  terminal variance = {:>8.4}  (theory 1)", var);

    // Half-interval increments approach independent N(0, 1/2).
    let increments: Vec<(f64, f64)> = ensemble
        .paths
        .iter()
        .map(|path| terminal_increments(path))
        .collect();
    let first: Vec<f64> = increments.iter().map(|&(a, _)| a).collect();
    let second: Vec<f64> = increments.iter().map(|&(_, b)| b).collect();
    let (mean1, var1) = mean_and_variance(&first);
    let (mean2, var2) = mean_and_variance(&second);
    println!("  first-half increment:  mean = {:>8.4}, variance = {:.4} (theory 0, 0.5)", mean1, var1);
    println!("  second-half increment: mean = {:>8.4}, variance = {:.4} (theory 0, 0.5)", mean2, var2);
}

fn mean_and_variance(samples: &[f64]) -> (f64, f64) {
    let n = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / n;
    let variance = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    (mean, variance)
}
