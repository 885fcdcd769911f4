use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io;

use shuffle_bench::{
    expected_brute_force_draws, BenchmarkRunner, LowEntropySource, ShuffleAlgorithm, SweepHarness,
    TrialStats, UniformIndexGenerator, DEFAULT_REPETITIONS, DEFAULT_SEED,
};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Shuffle cost harness: rejection sampling vs Fisher-Yates",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sweep deck sizes geometrically and emit one CSV row per size
    Sweep {
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,
        #[arg(long, default_value_t = DEFAULT_REPETITIONS)]
        repetitions: u32,
        /// First deck size of the sweep
        #[arg(long)]
        start: Option<usize>,
        /// Stop once the deck size exceeds this bound
        #[arg(long)]
        max_size: Option<usize>,
    },
    /// Benchmark both algorithms at a single deck size and print a report
    Single {
        #[arg(long, default_value_t = 52)]
        size: usize,
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,
        #[arg(long, default_value_t = DEFAULT_REPETITIONS)]
        repetitions: u32,
        #[arg(long, help = "Emit the report as JSON instead of text")]
        json: bool,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    match cli.command {
        // Bare invocation: the full sweep on the default seed.
        None => run_sweep(DEFAULT_SEED, DEFAULT_REPETITIONS, None, None)?,
        Some(Commands::Sweep {
            seed,
            repetitions,
            start,
            max_size,
        }) => run_sweep(seed, repetitions, start, max_size)?,
        Some(Commands::Single {
            size,
            seed,
            repetitions,
            json,
        }) => run_single(size, seed, repetitions, json)?,
    }
    Ok(())
}

fn run_sweep(
    seed: u64,
    repetitions: u32,
    start: Option<usize>,
    max_size: Option<usize>,
) -> CliResult<()> {
    if repetitions == 0 {
        return Err("repetitions must be greater than zero".into());
    }
    let mut harness = SweepHarness::new(seed, repetitions);
    if let Some(start) = start {
        if start == 0 {
            return Err("start must be greater than zero".into());
        }
        harness.start = start;
    }
    if let Some(max_size) = max_size {
        harness.max_size = max_size;
    }
    let stdout = io::stdout();
    let mut out = stdout.lock();
    harness.run(&mut out)?;
    Ok(())
}

#[derive(Serialize)]
struct SingleReport {
    n: usize,
    seed: u64,
    repetitions: u32,
    fisher_yates: TrialStats,
    brute_force: TrialStats,
    expected_brute_force_draws: f64,
}

fn run_single(size: usize, seed: u64, repetitions: u32, json: bool) -> CliResult<()> {
    if size == 0 {
        return Err("size must be greater than zero".into());
    }
    if repetitions == 0 {
        return Err("repetitions must be greater than zero".into());
    }

    let mut generator = UniformIndexGenerator::new(LowEntropySource::seeded(seed))?;
    let mut runner = BenchmarkRunner::new(repetitions);
    let fisher_yates = runner.measure(size, ShuffleAlgorithm::FisherYates, &mut generator)?;
    let brute_force = runner.measure(size, ShuffleAlgorithm::BruteForce, &mut generator)?;
    let expected = expected_brute_force_draws(size);

    if json {
        let report = SingleReport {
            n: size,
            seed,
            repetitions,
            fisher_yates,
            brute_force,
            expected_brute_force_draws: expected,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "Shuffling {} cards, {} repetitions per batch (seed {:#x})",
        size, repetitions, seed
    );
    println!(
        "  {:<12} → {:>10.6} ms | {:>12.2} draws/call",
        ShuffleAlgorithm::FisherYates.to_string(),
        fisher_yates.avg_time_ms,
        fisher_yates.avg_draws
    );
    println!(
        "  {:<12} → {:>10.6} ms | {:>12.2} draws/call (expected {:.2})",
        ShuffleAlgorithm::BruteForce.to_string(),
        brute_force.avg_time_ms,
        brute_force.avg_draws,
        expected
    );
    println!(
        "  Slowdown    → {:.2}x time | {:.2}x draws",
        brute_force.avg_time_ms / fisher_yates.avg_time_ms,
        brute_force.avg_draws / fisher_yates.avg_draws
    );
    Ok(())
}
