//! Coach controller trait and game state view
//!
//! This module defines the interface between the engine and whoever calls
//! plays for the controlled team (AI or human). The game loop asks the
//! controller for a decision whenever the engine issues a prompt, and the
//! controller inspects a read-only view of the game to make its choice.

use crate::config::GamePolicy;
use crate::core::{Drive, Play, Side, Team};
use crate::game::{Decision, DecisionPrompt, GameEngine, GameLogger};

/// How the game ended from the controlled team's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Win,
    Loss,
    Tie,
}

/// Read-only view of a game for controllers
pub struct GameStateView<'a> {
    engine: &'a GameEngine,
}

impl<'a> GameStateView<'a> {
    pub fn new(engine: &'a GameEngine) -> Self {
        GameStateView { engine }
    }

    /// The controlled team
    pub fn team(&self) -> &Team {
        self.engine.state().matchup().team(Side::A)
    }

    pub fn opponent(&self) -> &Team {
        self.engine.state().matchup().team(Side::B)
    }

    pub fn own_score(&self) -> u32 {
        self.engine.state().score_a()
    }

    pub fn opponent_score(&self) -> u32 {
        self.engine.state().score_b()
    }

    /// Own score minus opponent score
    pub fn score_margin(&self) -> i64 {
        i64::from(self.own_score()) - i64::from(self.opponent_score())
    }

    pub fn field_position(&self) -> i32 {
        self.engine.state().field_position()
    }

    pub fn down(&self) -> u8 {
        self.engine.state().down()
    }

    pub fn yards_to_go(&self) -> i32 {
        self.engine.state().yards_to_go()
    }

    pub fn drive_number(&self) -> u32 {
        self.engine.state().current_drive_number()
    }

    /// Drives left before the drive cap ends the game
    pub fn drives_remaining(&self) -> u32 {
        self.engine
            .policy()
            .max_drives
            .saturating_sub(self.drive_number())
    }

    pub fn prompt(&self) -> DecisionPrompt {
        self.engine.prompt()
    }

    pub fn policy(&self) -> &GamePolicy {
        self.engine.policy()
    }

    /// The most recently resolved play
    pub fn last_play(&self) -> Option<&Play> {
        self.engine.state().current_play()
    }

    pub fn current_drive_plays(&self) -> &[Play] {
        self.engine.state().current_drive_plays()
    }

    pub fn drives(&self) -> &[Drive] {
        self.engine.state().drives()
    }

    pub fn logger(&self) -> &GameLogger {
        &self.engine.logger
    }
}

/// Coach controller trait
///
/// Implement this to call plays for the controlled team, from an AI or a UI.
/// The game loop only calls `choose_decision` when the prompt requires a
/// decision; opponent possessions resolve automatically.
pub trait CoachController {
    /// Short name used in diagnostics
    fn name(&self) -> &str;

    /// Choose a decision for the prompt
    ///
    /// Returning a decision the prompt does not accept is an error reported
    /// by the engine; `Decision::Auto` is always accepted.
    fn choose_decision(&mut self, view: &GameStateView, prompt: DecisionPrompt) -> Decision;

    /// Called when the game ends (for cleanup/logging)
    fn on_game_end(&mut self, _view: &GameStateView, _outcome: GameOutcome) {}
}
