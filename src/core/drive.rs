//! Completed drive records

use crate::core::{PlayResult, TeamId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a drive ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriveResult {
    Touchdown,
    /// Interception or fumble
    Turnover,
    TurnoverOnDowns,
    Punt,
    FieldGoal,
    MissedFieldGoal,
}

impl DriveResult {
    /// Map a drive-ending play result to the drive result it produces
    pub fn from_play_result(result: PlayResult) -> Option<DriveResult> {
        match result {
            PlayResult::Touchdown => Some(DriveResult::Touchdown),
            PlayResult::Interception | PlayResult::Fumble => Some(DriveResult::Turnover),
            PlayResult::Punt => Some(DriveResult::Punt),
            PlayResult::FieldGoalGood => Some(DriveResult::FieldGoal),
            PlayResult::FieldGoalNoGood => Some(DriveResult::MissedFieldGoal),
            PlayResult::Run | PlayResult::Pass | PlayResult::IncompletePass => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DriveResult::Touchdown => "touchdown",
            DriveResult::Turnover => "turnover",
            DriveResult::TurnoverOnDowns => "turnover_on_downs",
            DriveResult::Punt => "punt",
            DriveResult::FieldGoal => "field_goal",
            DriveResult::MissedFieldGoal => "missed_field_goal",
        }
    }
}

impl fmt::Display for DriveResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One finished possession
///
/// Created exactly once when the drive ends and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drive {
    pub drive_number: u32,
    pub offense_team: TeamId,
    pub defense_team: TeamId,
    /// Field position of the drive's first snap
    pub starting_field_position: i32,
    pub result: DriveResult,
    pub points: u32,
    /// Number of plays run in the drive
    pub play_count: usize,
    pub score_a_after: u32,
    pub score_b_after: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_play_result() {
        assert_eq!(DriveResult::from_play_result(PlayResult::Touchdown), Some(DriveResult::Touchdown));
        assert_eq!(DriveResult::from_play_result(PlayResult::Fumble), Some(DriveResult::Turnover));
        assert_eq!(
            DriveResult::from_play_result(PlayResult::Interception),
            Some(DriveResult::Turnover)
        );
        assert_eq!(DriveResult::from_play_result(PlayResult::IncompletePass), None);
        assert_eq!(
            DriveResult::from_play_result(PlayResult::FieldGoalNoGood),
            Some(DriveResult::MissedFieldGoal)
        );
    }

    #[test]
    fn test_drive_result_json() {
        let json = serde_json::to_string(&DriveResult::TurnoverOnDowns).unwrap();
        assert_eq!(json, "\"turnover_on_downs\"");
    }
}
