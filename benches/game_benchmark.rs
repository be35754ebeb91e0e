//! Performance benchmarks for the drive simulation engine
//!
//! Measures full-game execution with Criterion.rs in two modes:
//!
//! 1. **Fresh** - generate a bank and start a new engine each iteration
//! 2. **Snapshot** - clone a prepared engine each iteration
//!
//! Games are played by a seeded RandomController against the auto caller.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gridiron_sim::{
    bank::generate_bank,
    config::GamePolicy,
    core::{Matchup, Team},
    game::{GameEngine, GameLoop, RandomController, VerbosityLevel},
    Result,
};
use stats_alloc::{Region, StatsAlloc, INSTRUMENTED_SYSTEM};
use std::alloc::System;
use std::time::Duration;

#[global_allocator]
static GLOBAL: &StatsAlloc<System> = &INSTRUMENTED_SYSTEM;

const BUCKET_SIZE: usize = 24;

/// Metrics collected during game execution
#[derive(Debug, Clone)]
struct GameMetrics {
    drives: usize,
    plays: usize,
    duration: Duration,
    /// Bytes allocated during game execution
    bytes_allocated: usize,
    /// Bytes deallocated during game execution
    bytes_deallocated: usize,
}

impl GameMetrics {
    fn games_per_sec(&self) -> f64 {
        1.0 / self.duration.as_secs_f64()
    }

    fn plays_per_sec(&self) -> f64 {
        self.plays as f64 / self.duration.as_secs_f64()
    }

    fn net_bytes_allocated(&self) -> i64 {
        self.bytes_allocated as i64 - self.bytes_deallocated as i64
    }

    fn bytes_per_play(&self) -> f64 {
        if self.plays == 0 {
            0.0
        } else {
            self.bytes_allocated as f64 / self.plays as f64
        }
    }
}

fn matchup() -> Matchup {
    Matchup::new(Team::new(1, "Home"), Team::new(2, "Away"))
}

fn new_engine(seed: u64) -> Result<GameEngine> {
    let matchup = matchup();
    let bank = generate_bank(&matchup, seed, BUCKET_SIZE);
    let mut engine = GameEngine::start(bank, matchup, GamePolicy::default())?;
    engine.logger.set_verbosity(VerbosityLevel::Silent);
    Ok(engine)
}

/// Run a single game and collect metrics
fn run_game_with_metrics(seed: u64) -> Result<GameMetrics> {
    let reg = Region::new(GLOBAL);
    let start = std::time::Instant::now();

    let mut engine = new_engine(seed)?;
    let mut controller = RandomController::with_seed(seed);
    let result = GameLoop::new(&mut engine).run_game(&mut controller)?;

    let duration = start.elapsed();
    let stats = reg.change();

    Ok(GameMetrics {
        drives: result.drives_played,
        plays: result.plays_played,
        duration,
        bytes_allocated: stats.bytes_allocated,
        bytes_deallocated: stats.bytes_deallocated,
    })
}

/// Benchmark: Fresh mode - build a new engine each iteration
fn bench_game_fresh(c: &mut Criterion) {
    let mut group = c.benchmark_group("game_execution");
    group.measurement_time(Duration::from_secs(10));

    let seed = 42u64;
    {
        println!("\nWarmup game (seed {}):", seed);
        if let Ok(metrics) = run_game_with_metrics(seed) {
            println!("  Drives: {}", metrics.drives);
            println!("  Plays: {}", metrics.plays);
            println!("  Duration: {:?}", metrics.duration);
            println!("  Games/sec: {:.2}", metrics.games_per_sec());
            println!("  Plays/sec: {:.2}", metrics.plays_per_sec());
            println!("  Bytes allocated: {}", metrics.bytes_allocated);
            println!("  Net bytes: {}", metrics.net_bytes_allocated());
            println!("  Bytes/play: {:.2}", metrics.bytes_per_play());
        }

        group.bench_with_input(BenchmarkId::new("fresh", seed), &seed, |b, &seed| {
            b.iter(|| run_game_with_metrics(black_box(seed)).expect("Game should complete"));
        });
    }

    group.finish();
}

/// Benchmark: Snapshot mode - clone a prepared engine each iteration
fn bench_game_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("game_execution");
    group.measurement_time(Duration::from_secs(10));

    let seed = 42u64;
    let initial = new_engine(seed).expect("Failed to start engine");

    group.bench_function(BenchmarkId::new("snapshot", seed), |b| {
        b.iter(|| {
            let mut engine = initial.clone();
            let mut controller = RandomController::with_seed(seed);
            GameLoop::new(&mut engine)
                .run_game(&mut controller)
                .expect("Game should complete")
        });
    });

    group.finish();
}

criterion_group!(benches, bench_game_fresh, bench_game_snapshot);
criterion_main!(benches);
