use shuffle_bench::{
    expected_brute_force_draws, harmonic_number, DrawCounter, LowEntropySource, ShuffleAlgorithm,
    UniformIndexGenerator,
};

fn mean_brute_force_draws(n: usize, trials: u64, seed: u64) -> f64 {
    let mut generator = UniformIndexGenerator::new(LowEntropySource::seeded(seed)).unwrap();
    let mut counter = DrawCounter::new();
    for _ in 0..trials {
        ShuffleAlgorithm::BruteForce
            .shuffle(n, &mut generator, &mut counter)
            .unwrap();
    }
    counter.total() as f64 / trials as f64
}

#[test]
fn harmonic_numbers_match_hand_sums() {
    assert!((harmonic_number(1) - 1.0).abs() < 1e-12);
    assert!((harmonic_number(2) - 1.5).abs() < 1e-12);
    assert!((harmonic_number(4) - (1.0 + 0.5 + 1.0 / 3.0 + 0.25)).abs() < 1e-12);
}

#[test]
fn expected_draws_for_a_card_deck() {
    // 52 cards: 52 · H(52) ≈ 235.98.
    let expected = expected_brute_force_draws(52);
    assert!(
        (expected - 235.978).abs() < 5e-3,
        "expectation drifted: {expected}"
    );
}

#[test]
fn brute_force_mean_tracks_expectation() {
    let trials = 20_000;
    let mean = mean_brute_force_draws(52, trials, 0x5EED);
    let expected = expected_brute_force_draws(52);
    let relative = (mean - expected).abs() / expected;
    assert!(
        relative < 0.05,
        "mean {mean:.2} vs expected {expected:.2} ({relative:.4} relative)"
    );
}

#[cfg_attr(
    not(feature = "stress-tests"),
    ignore = "set --features stress-tests to enable large-trial runs"
)]
#[cfg_attr(
    feature = "stress-tests",
    ignore = "pass -- --ignored to execute heavy stress scenarios"
)]
#[test]
fn brute_force_mean_converges_over_five_million_trials() {
    let trials = 5_000_000;
    let mean = mean_brute_force_draws(52, trials, 0xC0FFEE);
    let expected = expected_brute_force_draws(52);
    let relative = (mean - expected).abs() / expected;
    assert!(
        relative < 0.01,
        "mean {mean:.3} vs expected {expected:.3} ({relative:.5} relative)"
    );
}
