use shuffle_bench::{
    expected_brute_force_draws, next_size, SweepHarness, SweepRecord, CSV_HEADER, DEFAULT_SEED,
    MAX_DRAW_VALUE, SWEEP_START,
};

fn run_capped(seed: u64, repetitions: u32, max_size: usize) -> (Vec<SweepRecord>, String) {
    let harness = SweepHarness {
        seed,
        repetitions,
        start: SWEEP_START,
        max_size,
    };
    let mut buffer = Vec::new();
    let records = harness.run(&mut buffer).unwrap();
    (records, String::from_utf8(buffer).unwrap())
}

#[test]
fn sweep_emits_header_and_six_field_rows() {
    let (records, output) = run_capped(11, 2, 100);
    let mut lines = output.lines();
    assert_eq!(lines.next(), Some(CSV_HEADER));

    let rows: Vec<&str> = lines.collect();
    assert_eq!(rows.len(), records.len());
    for (row, record) in rows.iter().zip(&records) {
        let fields: Vec<&str> = row.split(',').collect();
        assert_eq!(fields.len(), 6, "malformed row {row:?}");
        assert_eq!(fields[0].parse::<usize>().unwrap(), record.n);
        for field in &fields[1..] {
            field.parse::<f64>().unwrap();
        }
    }
}

#[test]
fn sweep_schedule_starts_low_and_grows_strictly() {
    let (records, _) = run_capped(3, 1, 500);
    assert_eq!(records.first().map(|record| record.n), Some(SWEEP_START));
    for pair in records.windows(2) {
        assert!(pair[1].n > pair[0].n);
        assert_eq!(pair[1].n, next_size(pair[0].n));
    }
    let last = records.last().unwrap().n;
    assert!(last <= 500);
    assert!(next_size(last) > 500);
}

#[test]
fn fisher_yates_column_is_always_n_minus_one() {
    let (records, _) = run_capped(21, 4, 200);
    for record in &records {
        assert_eq!(
            record.fisher_yates.avg_draws,
            (record.n - 1) as f64,
            "n = {}",
            record.n
        );
    }
}

#[test]
fn brute_force_column_meets_its_lower_bound() {
    let (records, _) = run_capped(8, 2, 150);
    for record in &records {
        assert!(record.brute_force.avg_draws >= record.n as f64);
        assert_eq!(
            record.expected_brute_force_draws,
            expected_brute_force_draws(record.n)
        );
    }
}

#[test]
fn seeded_sweeps_agree_on_every_seed_derived_column() {
    let (first, first_csv) = run_capped(0xD5, 2, 120);
    let (second, second_csv) = run_capped(0xD5, 2, 120);

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.n, b.n);
        assert_eq!(a.fisher_yates.avg_draws, b.fisher_yates.avg_draws);
        assert_eq!(a.brute_force.avg_draws, b.brute_force.avg_draws);
        assert_eq!(a.expected_brute_force_draws, b.expected_brute_force_draws);
    }

    // The formatted draw and expectation fields must match byte for byte;
    // only the two wall-clock fields may differ between runs.
    for (row_a, row_b) in first_csv.lines().skip(1).zip(second_csv.lines().skip(1)) {
        let a: Vec<&str> = row_a.split(',').collect();
        let b: Vec<&str> = row_b.split(',').collect();
        assert_eq!(a[0], b[0]);
        assert_eq!(a[3], b[3]);
        assert_eq!(a[4], b[4]);
        assert_eq!(a[5], b[5]);
    }
}

#[cfg_attr(
    not(feature = "stress-tests"),
    ignore = "set --features stress-tests to enable wall-clock comparisons"
)]
#[cfg_attr(
    feature = "stress-tests",
    ignore = "pass -- --ignored to execute heavy stress scenarios"
)]
#[test]
fn brute_force_wall_clock_dominates_beyond_small_sizes() {
    let (records, _) = run_capped(DEFAULT_SEED, 100, 300);
    for record in records.iter().filter(|record| record.n >= 20) {
        assert!(
            record.brute_force.avg_time_ms >= record.fisher_yates.avg_time_ms,
            "brute force beat fisher-yates at n = {}",
            record.n
        );
    }
}

#[cfg_attr(
    not(feature = "stress-tests"),
    ignore = "set --features stress-tests to enable full-range sweeps"
)]
#[cfg_attr(
    feature = "stress-tests",
    ignore = "pass -- --ignored to execute heavy stress scenarios"
)]
#[test]
fn full_sweep_covers_the_source_range() {
    let harness = SweepHarness::default();
    let mut sink = Vec::new();
    let records = harness.run(&mut sink).unwrap();

    let last = records.last().unwrap().n;
    assert!(last <= MAX_DRAW_VALUE as usize);
    assert!(next_size(last) > MAX_DRAW_VALUE as usize);
    assert!(records.len() > 50);
}
