//! Main game state structure

use crate::bank::BankCursors;
use crate::config::GamePolicy;
use crate::core::{Drive, Matchup, Play, Side, TeamId};
use crate::game::DriveRecorder;
use serde::{Deserialize, Serialize};

/// Down, distance, field position and score to start a game from
///
/// Used by snapshots and tests to begin somewhere other than kickoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Situation {
    pub drive_number: u32,
    pub field_position: i32,
    pub down: u8,
    pub yards_to_go: i32,
    pub score_a: u32,
    pub score_b: u32,
}

impl Situation {
    pub fn kickoff(policy: &GamePolicy) -> Self {
        Situation {
            drive_number: 1,
            field_position: policy.touchback_spot,
            down: 1,
            yards_to_go: 10,
            score_a: 0,
            score_b: 0,
        }
    }
}

/// Complete state of one simulated game
///
/// Field position is always measured from the offense's own goal line
/// (0) to the opponent's goal line (100). Only the engine mutates this
/// structure; everything outside the crate reads it through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) matchup: Matchup,
    pub(crate) score_a: u32,
    pub(crate) score_b: u32,
    pub(crate) field_position: i32,
    pub(crate) down: u8,
    pub(crate) yards_to_go: i32,
    pub(crate) current_drive_number: u32,
    pub(crate) is_controlled_team_on_offense: bool,
    /// Set when a drive begins, untouched until the next one begins
    pub(crate) drive_start_field_position: i32,
    /// Per-bucket draw cursors into the play bank
    pub(crate) cursors: BankCursors,
    pub(crate) used_plays: Vec<Play>,
    pub(crate) drives: DriveRecorder,
    pub(crate) game_over: bool,
}

impl GameState {
    /// Create the state for a fresh game at the opening kickoff
    pub fn new(matchup: Matchup, policy: &GamePolicy) -> Self {
        Self::at_situation(matchup, policy, Situation::kickoff(policy))
    }

    /// Create a state starting from an arbitrary situation
    ///
    /// Possession follows the drive-number parity rule.
    pub fn at_situation(matchup: Matchup, policy: &GamePolicy, situation: Situation) -> Self {
        let mut state = GameState {
            matchup,
            score_a: situation.score_a,
            score_b: situation.score_b,
            field_position: situation.field_position.clamp(1, 99),
            down: situation.down.clamp(1, 4),
            yards_to_go: situation.yards_to_go.max(1),
            current_drive_number: situation.drive_number.max(1),
            is_controlled_team_on_offense: true,
            drive_start_field_position: 0,
            cursors: BankCursors::new(),
            used_plays: Vec::new(),
            drives: DriveRecorder::new(),
            game_over: false,
        };
        state.drive_start_field_position = state.field_position;
        state.is_controlled_team_on_offense =
            controlled_on_offense_for(state.current_drive_number, policy);
        state.game_over =
            policy.is_game_over(state.current_drive_number, state.score_a, state.score_b);
        state
    }

    pub fn matchup(&self) -> &Matchup {
        &self.matchup
    }

    pub fn score_a(&self) -> u32 {
        self.score_a
    }

    pub fn score_b(&self) -> u32 {
        self.score_b
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::A => self.score_a,
            Side::B => self.score_b,
        }
    }

    pub fn field_position(&self) -> i32 {
        self.field_position
    }

    pub fn down(&self) -> u8 {
        self.down
    }

    pub fn yards_to_go(&self) -> i32 {
        self.yards_to_go
    }

    pub fn current_drive_number(&self) -> u32 {
        self.current_drive_number
    }

    pub fn is_controlled_team_on_offense(&self) -> bool {
        self.is_controlled_team_on_offense
    }

    pub fn drive_start_field_position(&self) -> i32 {
        self.drive_start_field_position
    }

    pub fn cursors(&self) -> &BankCursors {
        &self.cursors
    }

    /// Every resolved play, in order
    pub fn used_plays(&self) -> &[Play] {
        &self.used_plays
    }

    /// The most recently resolved play
    pub fn current_play(&self) -> Option<&Play> {
        self.used_plays.last()
    }

    pub fn drives(&self) -> &[Drive] {
        self.drives.drives()
    }

    pub fn drive_recorder(&self) -> &DriveRecorder {
        &self.drives
    }

    /// Plays run so far in the drive in progress
    pub fn current_drive_plays(&self) -> &[Play] {
        &self.used_plays[self.drives.plays_recorded()..]
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn offense_side(&self) -> Side {
        if self.is_controlled_team_on_offense {
            Side::A
        } else {
            Side::B
        }
    }

    pub fn defense_side(&self) -> Side {
        self.offense_side().other()
    }

    pub fn offense_team(&self) -> TeamId {
        self.matchup.team_id(self.offense_side())
    }

    pub fn defense_team(&self) -> TeamId {
        self.matchup.team_id(self.defense_side())
    }

    pub(crate) fn add_points(&mut self, side: Side, points: u32) {
        match side {
            Side::A => self.score_a += points,
            Side::B => self.score_b += points,
        }
    }
}

/// Possession rule: the opening receiver has the ball on odd drives
pub fn controlled_on_offense_for(drive_number: u32, policy: &GamePolicy) -> bool {
    (drive_number % 2 == 1) == policy.controlled_receives_opening
}
