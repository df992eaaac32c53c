use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

use live_lin_reg::config::FitConfig;
use live_lin_reg::mapper::{CoordinateMapper, SurfaceGeometry};
use live_lin_reg::normalize::normalize;
use live_lin_reg::regression::{RegressionEngine, RegressionParameters};

/// 20 px of usable extent on both axes: normalized values map to `v * 10_000`.
fn small_mapper() -> CoordinateMapper {
    CoordinateMapper::new(SurfaceGeometry::new(80., 80., 30.), 500.)
}

#[test]
fn test_step_on_empty_dataset_is_noop() {
    let config = FitConfig::default();
    let start = RegressionParameters::new(0.3, 42.);
    let mut engine = RegressionEngine::new(&config, start);

    let empty = normalize(&[]);
    let params = engine.step(&empty, &empty, &small_mapper());

    assert_eq!(params, start);
    assert_eq!(engine.parameters(), start);
    assert_eq!(engine.last_mse(), None);
}

#[test]
fn test_step_on_mismatched_series_is_noop() {
    let config = FitConfig::default();
    let start = RegressionParameters::new(0.3, 42.);
    let mut engine = RegressionEngine::new(&config, start);

    let xs = normalize(&[1., 2., 3.]);
    let ys = normalize(&[1., 2.]);

    assert_eq!(engine.step(&xs, &ys, &small_mapper()), start);
}

#[test]
fn test_single_step_matches_hand_computed_gradient() {
    let config = FitConfig::default();
    let mut engine = RegressionEngine::new(&config, RegressionParameters::new(0., 0.));

    // One point at (10_000, 10_000) in scaled space.
    let xs = normalize(&[5.]);
    let ys = normalize(&[7.]);

    let params = engine.step(&xs, &ys, &small_mapper());

    // grad_slope = 2 * (-1e4 * 1e4), grad_intercept = 2 * -1e4
    assert_relative_eq!(params.slope, 5e-8 * 2e8, epsilon = 1e-9);
    assert_relative_eq!(params.intercept, 2.5e-2 * 2e4, epsilon = 1e-9);
    assert_relative_eq!(engine.last_mse().unwrap(), 1e8, epsilon = 1e-3);
}

#[test]
fn test_exact_line_error_never_increases() {
    let config = FitConfig::default();
    let mapper = small_mapper();

    // Scaled space: y = (10 * x + 20_000) / 18
    let xs = normalize(&[1., 2., 3., 4.]);
    let ys = normalize(&[3., 4., 5., 6.]);

    let mut engine = RegressionEngine::new(&config, RegressionParameters::new(0.9, 12.));
    let mut previous = engine.mean_squared_error(&xs, &ys, &mapper).unwrap();

    for _ in 0..5_000 {
        engine.step(&xs, &ys, &mapper);

        let current = engine.mean_squared_error(&xs, &ys, &mapper).unwrap();
        assert!(
            current <= previous * (1. + 1e-9) + 1e-12,
            "error went up: {previous} -> {current}"
        );
        previous = current;
    }

    let params = engine.parameters();
    assert_relative_eq!(params.slope, 10. / 18., epsilon = 1e-6);
    assert_relative_eq!(params.intercept, 20_000. / 18., epsilon = 1e-3);
}

#[test]
fn test_last_mse_lags_one_step() {
    let config = FitConfig::default();
    let mapper = small_mapper();
    let xs = normalize(&[1., 2., 3., 4.]);
    let ys = normalize(&[2., 4., 6., 8.]);

    let mut engine = RegressionEngine::new(&config, RegressionParameters::new(0.5, 3.));
    let before = engine.mean_squared_error(&xs, &ys, &mapper);

    engine.step(&xs, &ys, &mapper);

    assert_relative_eq!(engine.last_mse().unwrap(), before.unwrap(), max_relative = 1e-12);
}

#[test]
fn test_seeded_runs_are_identical() {
    let config = FitConfig::default();
    let mapper = small_mapper();
    let xs = normalize(&[1., 2., 3., 4., 5.]);
    let ys = normalize(&[2., 3., 5., 4., 6.]);

    let trajectory = |seed: u64| {
        let mut rng = StdRng::seed_from_u64(seed);
        let start = RegressionParameters::random(&mut rng, 80.);
        let mut engine = RegressionEngine::new(&config, start);

        (0..500)
            .map(|_| engine.step(&xs, &ys, &mapper))
            .collect::<Vec<_>>()
    };

    assert_eq!(trajectory(7), trajectory(7));
    assert_ne!(trajectory(7)[0], trajectory(8)[0]);
}

#[test]
fn test_random_parameters_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..1_000 {
        let params = RegressionParameters::random(&mut rng, 720.);

        assert!((0. ..1.).contains(&params.slope));
        assert!((0. ..720.).contains(&params.intercept));
    }
}

#[test]
fn test_proportional_dataset_converges() {
    let config = FitConfig::default();
    let mapper = small_mapper();

    let xs = normalize(&[1., 2., 3., 4.]);
    let ys = normalize(&[2., 4., 6., 8.]);

    let mut rng = StdRng::seed_from_u64(2024);
    let mut engine = RegressionEngine::new(&config, RegressionParameters::random(&mut rng, 80.));

    for _ in 0..10_000 {
        engine.step(&xs, &ys, &mapper);
    }

    let params = engine.parameters();
    let mse = engine.mean_squared_error(&xs, &ys, &mapper).unwrap();

    assert!(params.slope.is_finite() && params.intercept.is_finite());
    assert_relative_eq!(params.slope, 1.0, epsilon = 1e-6);
    assert_relative_eq!(params.intercept, 0.0, epsilon = 1e-3);
    assert!(mse < 1e-6, "mse did not settle: {mse}");
}
