//! Game snapshots for stop-and-resume play
//!
//! A snapshot carries everything an engine needs to continue: the full
//! state (cursors, used plays and drives included), the play bank and the
//! policy. The decision prompt is never stored; it is recomputed from the
//! restored state.

use crate::bank::PlayBank;
use crate::config::GamePolicy;
use crate::game::{GameEngine, GameState};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Format version written into every snapshot
pub const SNAPSHOT_VERSION: u32 = 1;

/// A saved in-progress (or finished) game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub version: u32,
    pub game_state: GameState,
    pub bank: PlayBank,
    pub policy: GamePolicy,
}

impl GameSnapshot {
    /// Capture the current state of an engine
    pub fn capture(engine: &GameEngine) -> Self {
        GameSnapshot {
            version: SNAPSHOT_VERSION,
            game_state: engine.state().clone(),
            bank: engine.bank().clone(),
            policy: *engine.policy(),
        }
    }

    /// Save this snapshot to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), SnapshotError> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| SnapshotError::Serialization(e.to_string()))?;
        std::fs::write(path.as_ref(), json).map_err(|e| SnapshotError::Io(e.to_string()))?;
        log::debug!("snapshot saved to {}", path.as_ref().display());
        Ok(())
    }

    /// Load a snapshot from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, SnapshotError> {
        let json =
            std::fs::read_to_string(path.as_ref()).map_err(|e| SnapshotError::Io(e.to_string()))?;
        let snapshot: GameSnapshot = serde_json::from_str(&json)
            .map_err(|e| SnapshotError::Deserialization(e.to_string()))?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::InvalidState(format!(
                "unsupported snapshot version {} (expected {SNAPSHOT_VERSION})",
                snapshot.version
            )));
        }
        Ok(snapshot)
    }

    /// Plays already resolved in the saved game
    pub fn plays_played(&self) -> usize {
        self.game_state.used_plays().len()
    }

    /// Check the saved state against its own policy and bank
    pub fn validate(&self) -> Result<(), SnapshotError> {
        let invalid = |e: crate::SimError| SnapshotError::InvalidState(e.to_string());
        self.policy.validate().map_err(invalid)?;
        self.bank
            .validate(self.game_state.matchup())
            .map_err(invalid)?;

        let state = &self.game_state;
        if !(1..=4).contains(&state.down()) {
            return Err(SnapshotError::InvalidState(format!("down {} out of range", state.down())));
        }
        if !(1..=99).contains(&state.field_position()) {
            return Err(SnapshotError::InvalidState(format!(
                "field position {} out of range",
                state.field_position()
            )));
        }
        if !(1..=100 - state.field_position()).contains(&state.yards_to_go()) {
            return Err(SnapshotError::InvalidState(format!(
                "{} yards to go from {}",
                state.yards_to_go(),
                state.field_position()
            )));
        }
        let expected_over = self.policy.is_game_over(
            state.current_drive_number(),
            state.score_a(),
            state.score_b(),
        );
        if expected_over != state.is_game_over() {
            return Err(SnapshotError::InvalidState(
                "game-over flag disagrees with the terminal check".to_string(),
            ));
        }
        if state.drive_recorder().plays_recorded() > state.used_plays().len() {
            return Err(SnapshotError::InvalidState(
                "drives cover more plays than were played".to_string(),
            ));
        }
        Ok(())
    }

    /// Rebuild an engine that continues exactly where the snapshot left off
    pub fn into_engine(self) -> Result<GameEngine, SnapshotError> {
        self.validate()?;
        Ok(GameEngine::from_parts(self.game_state, self.bank, self.policy))
    }
}

/// Errors that can occur during snapshot operations
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Failed to serialize snapshot: {0}")]
    Serialization(String),

    #[error("Failed to deserialize snapshot: {0}")]
    Deserialization(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Invalid snapshot state: {0}")]
    InvalidState(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::generate_bank;
    use crate::core::{Matchup, Team};
    use crate::game::Decision;
    use tempfile::TempDir;

    fn engine() -> GameEngine {
        let matchup = Matchup::new(Team::new(1, "Home"), Team::new(2, "Away"));
        let bank = generate_bank(&matchup, 9, 12);
        GameEngine::start(bank, matchup, GamePolicy::default()).unwrap()
    }

    #[test]
    fn test_resume_continues_identically() {
        let mut original = engine();
        for _ in 0..10 {
            original.resolve(Decision::Auto).unwrap();
        }

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("game.snapshot.json");
        GameSnapshot::capture(&original).save_to_file(&path).unwrap();

        let loaded = GameSnapshot::load_from_file(&path).unwrap();
        assert_eq!(loaded.plays_played(), 10);
        let mut resumed = loaded.into_engine().unwrap();
        assert_eq!(resumed.state(), original.state());
        assert_eq!(resumed.prompt(), original.prompt());

        for _ in 0..10 {
            let a = original.resolve(Decision::Auto).unwrap();
            let b = resumed.resolve(Decision::Auto).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_rejects_inconsistent_state() {
        let mut snapshot = GameSnapshot::capture(&engine());
        snapshot.game_state.game_over = true;
        assert!(matches!(
            snapshot.into_engine(),
            Err(SnapshotError::InvalidState(_))
        ));
    }

    #[test]
    fn test_rejects_impossible_situation() {
        let mut snapshot = GameSnapshot::capture(&engine());
        snapshot.game_state.field_position = 100;
        assert!(matches!(
            snapshot.validate(),
            Err(SnapshotError::InvalidState(msg)) if msg.contains("field position")
        ));

        let mut snapshot = GameSnapshot::capture(&engine());
        snapshot.game_state.yards_to_go = 0;
        assert!(matches!(
            snapshot.validate(),
            Err(SnapshotError::InvalidState(msg)) if msg.contains("yards to go")
        ));

        let mut snapshot = GameSnapshot::capture(&engine());
        snapshot.game_state.field_position = 95;
        snapshot.game_state.yards_to_go = 10;
        assert!(snapshot.validate().is_err());
    }

    #[test]
    fn test_rejects_unknown_version() {
        let mut snapshot = GameSnapshot::capture(&engine());
        snapshot.version = 99;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("old.json");
        snapshot.save_to_file(&path).unwrap();
        assert!(matches!(
            GameSnapshot::load_from_file(&path),
            Err(SnapshotError::InvalidState(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = GameSnapshot::load_from_file("/nonexistent/snapshot.json");
        assert!(matches!(result, Err(SnapshotError::Io(_))));
    }
}
