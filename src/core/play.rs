//! Play outcomes drawn from the bank and the plays built from them

use crate::core::TeamId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of play a team can call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayType {
    Run,
    Pass,
    Punt,
    FieldGoal,
}

impl PlayType {
    pub const ALL: [PlayType; 4] = [PlayType::Run, PlayType::Pass, PlayType::Punt, PlayType::FieldGoal];

    /// Stable index for per-type arrays
    pub fn index(self) -> usize {
        match self {
            PlayType::Run => 0,
            PlayType::Pass => 1,
            PlayType::Punt => 2,
            PlayType::FieldGoal => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PlayType::Run => "run",
            PlayType::Pass => "pass",
            PlayType::Punt => "punt",
            PlayType::FieldGoal => "field_goal",
        }
    }
}

impl fmt::Display for PlayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Categorical result tag carried by a play outcome
///
/// The vocabulary is closed per play type, see [`PlayResult::allowed_for`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayResult {
    #[serde(rename = "run")]
    Run,
    #[serde(rename = "pass")]
    Pass,
    #[serde(rename = "touchdown")]
    Touchdown,
    #[serde(rename = "fumble")]
    Fumble,
    #[serde(rename = "interception")]
    Interception,
    #[serde(rename = "incomplete pass")]
    IncompletePass,
    #[serde(rename = "punt")]
    Punt,
    #[serde(rename = "field_goal_good")]
    FieldGoalGood,
    #[serde(rename = "field_goal_no_good")]
    FieldGoalNoGood,
}

impl PlayResult {
    /// Check whether this tag belongs to the vocabulary of a play type
    pub fn allowed_for(self, play_type: PlayType) -> bool {
        match play_type {
            PlayType::Run => matches!(self, PlayResult::Run | PlayResult::Touchdown | PlayResult::Fumble),
            PlayType::Pass => matches!(
                self,
                PlayResult::Pass
                    | PlayResult::Touchdown
                    | PlayResult::Interception
                    | PlayResult::IncompletePass
            ),
            PlayType::Punt => matches!(self, PlayResult::Punt),
            PlayType::FieldGoal => {
                matches!(self, PlayResult::FieldGoalGood | PlayResult::FieldGoalNoGood)
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PlayResult::Run => "run",
            PlayResult::Pass => "pass",
            PlayResult::Touchdown => "touchdown",
            PlayResult::Fumble => "fumble",
            PlayResult::Interception => "interception",
            PlayResult::IncompletePass => "incomplete pass",
            PlayResult::Punt => "punt",
            PlayResult::FieldGoalGood => "field_goal_good",
            PlayResult::FieldGoalNoGood => "field_goal_no_good",
        }
    }
}

impl fmt::Display for PlayResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A candidate outcome supplied by the play bank (read-only input)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayOutcome {
    pub play_type: PlayType,
    /// Yards gained; punt distance for punts, ignored for field goals
    pub yards_gained: i32,
    pub result: PlayResult,
}

impl PlayOutcome {
    pub fn new(play_type: PlayType, yards_gained: i32, result: PlayResult) -> Self {
        PlayOutcome {
            play_type,
            yards_gained,
            result,
        }
    }

    pub fn is_well_formed(&self) -> bool {
        self.result.allowed_for(self.play_type)
    }
}

/// A resolved play: the drawn outcome stamped with the situation it was called in
///
/// Plays are created once by the resolver and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    #[serde(flatten)]
    pub outcome: PlayOutcome,
    pub drive_number: u32,
    pub starting_field_position: i32,
    pub down: u8,
    pub yards_to_go: i32,
    pub score_a: u32,
    pub score_b: u32,
    pub offense_team: TeamId,
    pub defense_team: TeamId,
    pub narration: String,
}

impl Play {
    pub fn play_type(&self) -> PlayType {
        self.outcome.play_type
    }

    pub fn result(&self) -> PlayResult {
        self.outcome.result
    }

    pub fn yards_gained(&self) -> i32 {
        self.outcome.yards_gained
    }

    /// Yards the ball actually moved from the snap
    ///
    /// A touchdown always reaches the goal line; any other run or pass stops
    /// inside the field of play. Kicks report the bank yardage unchanged.
    pub fn effective_yards(&self) -> i32 {
        let start = self.starting_field_position;
        match (self.play_type(), self.result()) {
            (PlayType::Run | PlayType::Pass, PlayResult::Touchdown) => 100 - start,
            (PlayType::Run | PlayType::Pass, _) => {
                start.saturating_add(self.yards_gained()).clamp(1, 99) - start
            }
            _ => self.yards_gained(),
        }
    }
}
