//! End-to-end session tests against a directory-backed game service
//!
//! A season-management service would drop `<id>.bank.json` files into a
//! directory; these tests play whole games through `SimulationSession` and
//! check what ends up on disk.

use gridiron_sim::bank::{generate_bank, save_bank};
use gridiron_sim::config::GamePolicy;
use gridiron_sim::core::{Matchup, Team};
use gridiron_sim::game::{CompletedGame, Decision, GameLoop, VerbosityLevel, ZeroController};
use gridiron_sim::service::{FileGameService, GameService, SimulationSession};
use gridiron_sim::SimError;
use std::sync::Arc;
use tempfile::TempDir;

fn matchup() -> Matchup {
    Matchup::new(Team::new(7, "Harbor City"), Team::new(12, "Ridgeview"))
}

async fn service_with_bank(game_id: &str, seed: u64) -> (TempDir, Arc<FileGameService>) {
    let temp_dir = TempDir::new().unwrap();
    let service = Arc::new(FileGameService::new(temp_dir.path()));
    save_bank(&generate_bank(&matchup(), seed, 16), service.bank_path(game_id))
        .await
        .unwrap();
    (temp_dir, service)
}

#[tokio::test]
async fn test_full_game_is_persisted_once() {
    let (_temp_dir, service) = service_with_bank("game-1", 31).await;
    let mut session =
        SimulationSession::start(service.clone(), "game-1", matchup(), GamePolicy::default())
            .await
            .unwrap();

    {
        let engine = session.engine_mut();
        engine.logger.set_verbosity(VerbosityLevel::Silent);
        let mut controller = ZeroController::new();
        GameLoop::new(engine).run_game(&mut controller).unwrap();
    }
    assert!(session.engine().is_complete());

    let payload = session.complete().await.unwrap();
    let on_disk: CompletedGame =
        serde_json::from_str(&std::fs::read_to_string(service.result_path("game-1")).unwrap())
            .unwrap();
    assert_eq!(on_disk, payload);
    assert_eq!(payload.matchup, matchup());

    // Remove the result; a second complete must not write it again
    std::fs::remove_file(service.result_path("game-1")).unwrap();
    let again = session.complete().await.unwrap();
    assert_eq!(again, payload);
    assert!(!service.result_path("game-1").exists());

    let signal = session.exit().await.unwrap();
    assert!(signal.was_complete);
}

#[tokio::test]
async fn test_exit_mid_game_writes_nothing() {
    let (_temp_dir, service) = service_with_bank("game-2", 8).await;
    let mut session =
        SimulationSession::start(service.clone(), "game-2", matchup(), GamePolicy::default())
            .await
            .unwrap();

    for _ in 0..5 {
        session.resolve(Decision::Auto).unwrap();
    }
    assert!(matches!(session.complete().await, Err(SimError::GameInProgress)));

    let signal = session.exit().await.unwrap();
    assert_eq!(signal.plays_played, 5);
    assert!(!signal.was_complete);
    assert!(!service.result_path("game-2").exists());
}

#[tokio::test]
async fn test_bank_for_wrong_teams_is_rejected() {
    let (_temp_dir, service) = service_with_bank("game-3", 2).await;
    let other = Matchup::new(Team::new(1, "Home"), Team::new(2, "Away"));
    let result = SimulationSession::start(service, "game-3", other, GamePolicy::default()).await;
    assert!(matches!(result, Err(SimError::UnknownTeam(_))));
}

#[tokio::test]
async fn test_fetch_reports_malformed_bank() {
    let temp_dir = TempDir::new().unwrap();
    let service = FileGameService::new(temp_dir.path());
    std::fs::write(service.bank_path("broken"), "{ not json").unwrap();

    let result = service.fetch_play_bank("broken").await;
    assert!(matches!(result, Err(SimError::SerializationError(_))));
}
