// tests/walk_properties_test.rs
use binom_walk::increments::{
    apply_options, hist2d, split_halves, terminal_increments, IncrementOptions,
};
use binom_walk::rng;
use binom_walk::walk::{RawWalk, ScaledWalk, Scaling};
use binom_walk::Ensemble;

#[test]
fn test_raw_path_shape() {
    for &size in &[1usize, 2, 10, 100, 1000] {
        let mut rng = rng::seed_rng_from_u64(42);
        let path: Vec<(f64, f64)> = RawWalk::new(size, &mut rng).expect("valid size").collect();

        assert_eq!(path.len(), size + 1, "size {} must yield size+1 points", size);
        assert_eq!(path[0], (0.0, 0.0));
        assert_eq!(path[size].0, 1.0);

        for (n, &(t, _)) in path.iter().enumerate() {
            assert_eq!(t, n as f64 / size as f64, "t must be an exact multiple of 1/size");
        }

        for window in path.windows(2) {
            assert!(window[1].0 > window[0].0, "t must be strictly increasing");
            let step = window[1].1 - window[0].1;
            assert!(
                step == 0.0 || step == 1.0,
                "x must change by 0 or 1 per step, got {}",
                step
            );
        }
    }
}

#[test]
fn test_size_zero_is_rejected() {
    let mut rng = rng::seed_rng_from_u64(42);
    assert!(RawWalk::new(0, &mut rng).is_err());

    let mut rng = rng::seed_rng_from_u64(42);
    assert!(Ensemble::sample(Scaling::Raw, 0, 20, &mut rng).is_err());
}

#[test]
fn test_centered_is_exact_pointwise_transform() {
    let size = 200;

    let mut rng = rng::seed_rng_from_u64(7);
    let raw: Vec<(f64, f64)> = RawWalk::new(size, &mut rng).expect("valid size").collect();

    let mut rng = rng::seed_rng_from_u64(7);
    let centered: Vec<(f64, f64)> = ScaledWalk::new(Scaling::Centered, size, &mut rng)
        .expect("valid size")
        .collect();

    assert_eq!(raw.len(), centered.len());
    for (&(t_raw, x_raw), &(t_c, x_c)) in raw.iter().zip(centered.iter()) {
        assert_eq!(t_raw, t_c);
        assert_eq!(x_c, x_raw - size as f64 * t_raw / 2.0);
    }
}

#[test]
fn test_normalized_is_exact_pointwise_transform() {
    let size = 200;

    let mut rng = rng::seed_rng_from_u64(7);
    let centered: Vec<(f64, f64)> = ScaledWalk::new(Scaling::Centered, size, &mut rng)
        .expect("valid size")
        .collect();

    let mut rng = rng::seed_rng_from_u64(7);
    let normalized: Vec<(f64, f64)> = ScaledWalk::new(Scaling::Normalized, size, &mut rng)
        .expect("valid size")
        .collect();

    let scale = (size as f64 / 4.0).sqrt();
    for (&(_, x_c), &(_, x_n)) in centered.iter().zip(normalized.iter()) {
        assert_eq!(x_n, x_c / scale);
    }
}

#[test]
fn test_same_seed_reproduces_path_bit_identically() {
    for &scaling in &[Scaling::Raw, Scaling::Centered, Scaling::Normalized] {
        let mut rng1 = rng::seed_rng_from_u64(99);
        let path1: Vec<(f64, f64)> = ScaledWalk::new(scaling, 500, &mut rng1)
            .expect("valid size")
            .collect();

        let mut rng2 = rng::seed_rng_from_u64(99);
        let path2: Vec<(f64, f64)> = ScaledWalk::new(scaling, 500, &mut rng2)
            .expect("valid size")
            .collect();

        assert_eq!(path1, path2);
    }
}

#[test]
fn test_first_points_of_size_ten_walk() {
    let mut rng = rng::seed_rng_from_u64(5);
    let path: Vec<(f64, f64)> = RawWalk::new(10, &mut rng).expect("valid size").collect();

    assert_eq!(path[0], (0.0, 0.0));
    assert_eq!(path[1].0, 0.1);
    assert!(path[1].1 == 0.0 || path[1].1 == 1.0);
}

#[test]
fn test_ensemble_draws_sequentially_from_one_generator() {
    let mut rng = rng::seed_rng_from_u64(11);
    let ensemble =
        Ensemble::sample(Scaling::Raw, 50, 2, &mut rng).expect("valid parameters");

    let mut rng = rng::seed_rng_from_u64(11);
    let first: Vec<(f64, f64)> = RawWalk::new(50, &mut rng).expect("valid size").collect();
    let second: Vec<(f64, f64)> = RawWalk::new(50, &mut rng).expect("valid size").collect();

    assert_eq!(ensemble.len(), 2);
    assert_eq!(ensemble.paths[0], first);
    assert_eq!(ensemble.paths[1], second);
    assert_ne!(ensemble.paths[0], ensemble.paths[1]);
}

#[test]
fn test_half_split_shares_midpoint_for_even_size() {
    let mut rng = rng::seed_rng_from_u64(3);
    let path: Vec<(f64, f64)> = ScaledWalk::new(Scaling::Normalized, 10, &mut rng)
        .expect("valid size")
        .collect();

    let (first, second) = split_halves(&path);

    assert_eq!(first.len(), 6);
    assert_eq!(second.len(), 6);
    assert_eq!(first.last(), second.first());
    assert_eq!(first.last().expect("non-empty half").0, 0.5);
}

#[test]
fn test_half_split_covers_path_for_odd_size() {
    let mut rng = rng::seed_rng_from_u64(3);
    let path: Vec<(f64, f64)> = RawWalk::new(11, &mut rng).expect("valid size").collect();

    let (first, second) = split_halves(&path);

    // No point at exactly t = 0.5, so the halves partition the path.
    assert_eq!(first.len() + second.len(), path.len());
    assert!(first.iter().all(|&(t, _)| t <= 0.5));
    assert!(second.iter().all(|&(t, _)| t >= 0.5));
}

#[test]
fn test_endpoint_collapse_and_rezero() {
    let half = [(0.0, 1.0), (0.1, 2.0), (0.2, 2.0), (0.3, 3.0)];

    let collapsed = apply_options(&half, IncrementOptions::ENDPOINTS_ONLY);
    assert_eq!(collapsed, vec![(0.0, 1.0), (0.3, 3.0)]);

    let rezeroed = apply_options(&half, IncrementOptions::REZERO);
    assert_eq!(rezeroed[0], (0.0, 0.0));
    assert_eq!(rezeroed[3], (0.3, 2.0));

    let both = apply_options(
        &half,
        IncrementOptions::ENDPOINTS_ONLY | IncrementOptions::REZERO,
    );
    assert_eq!(both, vec![(0.0, 0.0), (0.3, 2.0)]);

    let unchanged = apply_options(&half, IncrementOptions::NONE);
    assert_eq!(unchanged, half.to_vec());
}

#[test]
fn test_terminal_increments_sum_to_full_change() {
    let mut rng = rng::seed_rng_from_u64(21);
    let path: Vec<(f64, f64)> = ScaledWalk::new(Scaling::Normalized, 100, &mut rng)
        .expect("valid size")
        .collect();

    let (d1, d2) = terminal_increments(&path);
    let total = path.last().expect("non-empty path").1 - path[0].1;
    assert!((d1 + d2 - total).abs() < 1e-12);
}

#[test]
fn test_hist2d_counts_in_range_samples() {
    let samples = [
        (-0.5, -0.5),
        (0.5, 0.5),
        (0.5, 0.6),
        (5.0, 0.0),  // outside range, dropped
        (0.0, -5.0), // outside range, dropped
    ];

    let counts = hist2d(&samples, (-1.0, 1.0), 2).expect("valid histogram parameters");

    assert_eq!(counts.shape(), &[2, 2]);
    assert_eq!(counts.iter().sum::<usize>(), 3);
    assert_eq!(counts[[0, 0]], 1);
    assert_eq!(counts[[1, 1]], 2);
}

#[test]
fn test_hist2d_rejects_bad_parameters() {
    let samples = [(0.0, 0.0)];
    assert!(hist2d(&samples, (1.0, -1.0), 10).is_err());
    assert!(hist2d(&samples, (-1.0, 1.0), 0).is_err());
}

#[test]
fn test_normalized_terminal_distribution_is_standard() {
    // CLT sanity check: terminal values of the normalized walk should be
    // roughly N(0, 1) for a large ensemble.
    let mut rng = rng::seed_rng_from_u64(123);
    let ensemble =
        Ensemble::sample(Scaling::Normalized, 400, 2000, &mut rng).expect("valid parameters");

    let terminals: Vec<f64> = ensemble
        .paths
        .iter()
        .map(|path| path.last().expect("non-empty path").1)
        .collect();

    let n = terminals.len() as f64;
    let mean = terminals.iter().sum::<f64>() / n;
    let variance = terminals.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;

    assert!(mean.abs() < 0.1, "Mean should be close to 0, got {}", mean);
    assert!(
        (variance - 1.0).abs() < 0.15,
        "Variance should be close to 1, got {}",
        variance
    );
}
