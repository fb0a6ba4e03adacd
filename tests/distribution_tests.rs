//! Tests for service-time distributions and roulette selection
//!
//! Sample means are compared with the analytic means of each family over a
//! large seeded sample, with a tolerance wide enough to be stable.

use emergency_care_simulator::random::{
    roulette, DistributionError, RandomDistribution, StageDistributions,
};
use emergency_care_simulator::types::{
    DistributionFamily, DistributionSpec, SimulationConfig, Stage,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

const SAMPLES: usize = 20_000;

fn sample_mean(distribution: &RandomDistribution, seed: u64) -> f64 {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..SAMPLES).map(|_| distribution.sample(&mut rng)).sum::<f64>() / SAMPLES as f64
}

/// Test that every family's sample mean is close to its analytic mean
#[test]
fn test_sample_means_match_families() {
    let cases: [(DistributionFamily, &[f64], f64); 9] = [
        (DistributionFamily::Beta, &[2.0, 5.0], 2.0 / 7.0),
        (DistributionFamily::Exponential, &[0.5], 2.0),
        (DistributionFamily::Gamma, &[2.0, 3.0], 6.0),
        (DistributionFamily::LogNormal, &[0.0, 0.25], (0.25f64 * 0.25 / 2.0).exp()),
        (DistributionFamily::Normal, &[10.0, 1.0], 10.0),
        (DistributionFamily::Pareto, &[3.0], 1.5),
        (DistributionFamily::Triangular, &[1.0, 5.0, 2.0], 8.0 / 3.0),
        (DistributionFamily::Uniform, &[4.0, 6.0], 5.0),
        // scale * gamma(1 + 1/shape) with shape 1.5
        (DistributionFamily::Weibull, &[2.0, 1.5], 2.0 * 0.902_745),
    ];

    for (seed, (family, params, expected)) in cases.into_iter().enumerate() {
        let distribution = RandomDistribution::new(family, params).unwrap();
        let mean = sample_mean(&distribution, seed as u64);
        let relative = (mean - expected).abs() / expected;
        assert!(
            relative < 0.05,
            "{}: mean {} expected {}",
            family,
            mean,
            expected
        );
    }
}

/// Test that surplus parameters are ignored
#[test]
fn test_surplus_parameters_are_ignored() {
    let exact = RandomDistribution::new(DistributionFamily::Exponential, &[0.2]).unwrap();
    let surplus =
        RandomDistribution::new(DistributionFamily::Exponential, &[0.2, 9.0, 9.0]).unwrap();
    assert_eq!(sample_mean(&exact, 5), sample_mean(&surplus, 5));
}

/// Test construction failures
#[test]
fn test_invalid_parameters_are_rejected() {
    let rejected = [
        (DistributionFamily::Beta, vec![0.0, 1.0]),
        (DistributionFamily::Gamma, vec![-2.0, 1.0]),
        (DistributionFamily::Normal, vec![0.0, -1.0]),
        (DistributionFamily::Pareto, vec![0.0]),
        (DistributionFamily::Triangular, vec![5.0, 1.0, 3.0]),
        (DistributionFamily::Weibull, vec![1.0, 0.0]),
    ];
    for (family, params) in rejected {
        assert!(
            matches!(
                RandomDistribution::new(family, &params),
                Err(DistributionError::InvalidParameters { .. })
            ),
            "{} {:?} should be rejected",
            family,
            params
        );
    }

    let error = DistributionSpec::new(DistributionFamily::Triangular, &[1.0]).unwrap_err();
    assert_eq!(
        error,
        DistributionError::MissingParameters {
            family: DistributionFamily::Triangular,
            expected: 3,
            got: 1
        }
    );
}

/// Test that stage distributions follow the configuration entries
#[test]
fn test_stage_distributions_from_config() {
    let constant = |value: f64| {
        DistributionSpec::new(DistributionFamily::Uniform, &[value, value]).unwrap()
    };
    let config = SimulationConfig {
        arrival: constant(1.0),
        registration: constant(2.0),
        screening: constant(3.0),
        consultation: constant(4.0),
        exams: constant(5.0),
        ..Default::default()
    };

    let distributions = StageDistributions::from_config(&config).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(distributions.arrival().sample(&mut rng), 1.0);
    for (stage, expected) in Stage::ALL.into_iter().zip([2.0, 3.0, 4.0, 5.0]) {
        assert_eq!(
            distributions.stage(stage).sample(&mut rng),
            expected,
            "{}",
            stage
        );
    }
}

/// Test that roulette frequencies follow the weights
#[test]
fn test_roulette_frequencies() {
    let mut rng = StdRng::seed_from_u64(17);
    let weights = [1.0, 0.0, 3.0, 6.0];
    let mut counts = [0usize; 4];
    for _ in 0..SAMPLES {
        counts[roulette(&weights, &mut rng).unwrap()] += 1;
    }

    assert_eq!(counts[1], 0);
    let share = |index: usize| counts[index] as f64 / SAMPLES as f64;
    assert!((share(0) - 0.1).abs() < 0.02);
    assert!((share(2) - 0.3).abs() < 0.02);
    assert!((share(3) - 0.6).abs() < 0.02);
}

/// Test the degenerate roulette inputs
#[test]
fn test_roulette_edge_cases() {
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(roulette(&[], &mut rng), None);
    assert_eq!(roulette(&[0.0, 0.0], &mut rng), Some(0));
    assert_eq!(roulette(&[0.0, f64::NAN, 2.0], &mut rng), Some(2));
}
