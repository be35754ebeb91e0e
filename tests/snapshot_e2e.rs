//! Snapshot stop-and-resume tests
//!
//! Stopping a game at any play, saving it, and resuming from the file must
//! finish with exactly the game an uninterrupted run produces.

use gridiron_sim::bank::generate_bank;
use gridiron_sim::config::GamePolicy;
use gridiron_sim::core::{Matchup, Team};
use gridiron_sim::game::{
    CompletedGame, GameEndReason, GameEngine, GameLoop, GameSnapshot, RandomController,
    VerbosityLevel,
};
use gridiron_sim::service::{InMemoryGameService, SimulationSession};
use similar_asserts::assert_eq;
use std::sync::Arc;
use tempfile::TempDir;

fn matchup() -> Matchup {
    Matchup::new(Team::new(1, "Home"), Team::new(2, "Away"))
}

fn new_engine(seed: u64) -> GameEngine {
    let bank = generate_bank(&matchup(), seed, 20);
    let mut engine = GameEngine::start(bank, matchup(), GamePolicy::default()).unwrap();
    engine.logger.set_verbosity(VerbosityLevel::Silent);
    engine
}

fn play_through(seed: u64) -> CompletedGame {
    let mut engine = new_engine(seed);
    let mut controller = RandomController::with_seed(seed);
    GameLoop::new(&mut engine).run_game(&mut controller).unwrap();
    engine.complete().unwrap()
}

/// Play `stop_after` plays, snapshot, resume from disk, finish
fn play_with_stop(seed: u64, stop_after: usize) -> CompletedGame {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("game.snapshot.json");

    // The controller survives the stop; only the engine goes through the file
    let mut controller = RandomController::with_seed(seed);
    let mut engine = new_engine(seed);
    let result = GameLoop::new(&mut engine)
        .run_plays(&mut controller, stop_after)
        .unwrap();
    assert_eq!(result.end_reason, GameEndReason::Manual);
    GameSnapshot::capture(&engine).save_to_file(&path).unwrap();
    drop(engine);

    let mut resumed = GameSnapshot::load_from_file(&path)
        .unwrap()
        .into_engine()
        .unwrap();
    resumed.logger.set_verbosity(VerbosityLevel::Silent);
    assert_eq!(resumed.state().used_plays().len(), stop_after);

    GameLoop::new(&mut resumed).run_game(&mut controller).unwrap();
    resumed.complete().unwrap()
}

#[test]
fn test_resume_matches_uninterrupted_game() {
    for seed in [1u64, 17, 404] {
        let expected = play_through(seed);
        for stop_after in [1usize, 4, 7] {
            let resumed = play_with_stop(seed, stop_after);
            assert_eq!(
                expected, resumed,
                "seed {seed} diverged after stopping at play {stop_after}"
            );
        }
    }
}

#[test]
fn test_snapshot_of_finished_game_stays_finished() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("done.json");

    let mut engine = new_engine(3);
    let mut controller = RandomController::with_seed(3);
    GameLoop::new(&mut engine).run_game(&mut controller).unwrap();
    GameSnapshot::capture(&engine).save_to_file(&path).unwrap();

    let mut resumed = GameSnapshot::load_from_file(&path)
        .unwrap()
        .into_engine()
        .unwrap();
    assert!(resumed.is_complete());
    assert_eq!(resumed.resolve(gridiron_sim::game::Decision::Auto).unwrap(), None);
    assert_eq!(resumed.complete().unwrap(), engine.complete().unwrap());
}

#[tokio::test]
async fn test_resumed_game_persists_through_session() {
    let seed = 17;
    let expected = play_through(seed);

    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("week3.snapshot.json");
    let mut controller = RandomController::with_seed(seed);
    let mut engine = new_engine(seed);
    GameLoop::new(&mut engine)
        .run_plays(&mut controller, 5)
        .unwrap();
    GameSnapshot::capture(&engine).save_to_file(&path).unwrap();

    let resumed = GameSnapshot::load_from_file(&path)
        .unwrap()
        .into_engine()
        .unwrap();
    let service = Arc::new(InMemoryGameService::new());
    let mut session = SimulationSession::from_engine(Arc::clone(&service), "week3", resumed);
    assert_eq!(session.game_id(), "week3");
    assert!(!session.is_persisted());

    session.engine_mut().logger.set_verbosity(VerbosityLevel::Silent);
    GameLoop::new(session.engine_mut())
        .run_game(&mut controller)
        .unwrap();

    let payload = session.complete().await.unwrap();
    assert_eq!(payload, expected);
    assert!(session.is_persisted());
    session.complete().await.unwrap();
    assert_eq!(service.results("week3").await, vec![expected]);
}
