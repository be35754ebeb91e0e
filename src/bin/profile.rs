//! Profiling binary for game execution
//!
//! This binary runs games in a tight loop for profiling with cargo-flamegraph.
//! Unlike the Criterion benchmarks, this has minimal overhead and produces
//! cleaner flamegraphs.
//!
//! Usage:
//!   cargo flamegraph --bin profile

use gridiron_sim::{
    bank::generate_bank,
    config::GamePolicy,
    core::{Matchup, Team},
    game::{GameEngine, GameLoop, RandomController, VerbosityLevel},
};

fn main() {
    env_logger::init();

    // Allow overriding iterations via environment variable
    let iterations = std::env::var("PROFILE_ITERATIONS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(10_000);

    let seed = 42u64;
    println!("Profiling game execution...");
    println!("Running {} games with seed {}", iterations, seed);
    println!();

    let matchup = Matchup::new(Team::new(1, "Home"), Team::new(2, "Away"));
    let bank = generate_bank(&matchup, seed, 24);
    let mut total_plays = 0usize;

    for i in 0..iterations {
        let mut engine = GameEngine::start(bank.clone(), matchup.clone(), GamePolicy::default())
            .expect("Failed to start game");
        engine.logger.set_verbosity(VerbosityLevel::Silent);

        let mut controller = RandomController::with_seed(seed.wrapping_add(i as u64));
        let result = GameLoop::new(&mut engine)
            .run_game(&mut controller)
            .expect("Game execution failed");
        total_plays += result.plays_played;

        if (i + 1) % 1000 == 0 {
            println!("Completed {} games", i + 1);
        }
    }

    println!();
    println!(
        "Profiling complete! {} games, {} plays executed.",
        iterations, total_plays
    );
}
