//! Play-calling decisions and the prompts that ask for them

use crate::core::PlayType;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// A play call submitted to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Run,
    Pass,
    Punt,
    FieldGoal,
    /// Fourth down: go for it with a run
    GoRun,
    /// Fourth down: go for it with a pass
    GoPass,
    /// Let the engine call the play
    Auto,
}

impl Decision {
    /// The play type this decision calls, or `None` for `Auto`
    pub fn play_type(self) -> Option<PlayType> {
        match self {
            Decision::Run | Decision::GoRun => Some(PlayType::Run),
            Decision::Pass | Decision::GoPass => Some(PlayType::Pass),
            Decision::Punt => Some(PlayType::Punt),
            Decision::FieldGoal => Some(PlayType::FieldGoal),
            Decision::Auto => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Decision::Run => "run",
            Decision::Pass => "pass",
            Decision::Punt => "punt",
            Decision::FieldGoal => "field_goal",
            Decision::GoRun => "go_run",
            Decision::GoPass => "go_pass",
            Decision::Auto => "auto",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Decision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "run" => Ok(Decision::Run),
            "pass" => Ok(Decision::Pass),
            "punt" => Ok(Decision::Punt),
            "field_goal" | "fg" => Ok(Decision::FieldGoal),
            "go_run" => Ok(Decision::GoRun),
            "go_pass" => Ok(Decision::GoPass),
            "auto" => Ok(Decision::Auto),
            other => Err(format!(
                "invalid decision '{other}' (expected: run, pass, punt, field_goal, go_run, go_pass, auto)"
            )),
        }
    }
}

/// What the engine needs before it can resolve the next play
///
/// Recomputed after every play and never stored in snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionPrompt {
    /// No choice needed; submit `Auto`
    None,
    /// Downs 1-3 with the controlled team on offense
    RunOrPass,
    /// Fourth down with the controlled team on offense
    FourthDown,
}

impl DecisionPrompt {
    pub fn for_situation(controlled_on_offense: bool, down: u8) -> Self {
        match (controlled_on_offense, down) {
            (false, _) => DecisionPrompt::None,
            (true, 1..=3) => DecisionPrompt::RunOrPass,
            (true, _) => DecisionPrompt::FourthDown,
        }
    }

    /// Explicit choices offered by this prompt (`Auto` is always accepted too)
    pub fn options(self) -> SmallVec<[Decision; 4]> {
        match self {
            DecisionPrompt::None => SmallVec::from_slice(&[Decision::Auto]),
            DecisionPrompt::RunOrPass => SmallVec::from_slice(&[Decision::Run, Decision::Pass]),
            DecisionPrompt::FourthDown => SmallVec::from_slice(&[
                Decision::GoRun,
                Decision::GoPass,
                Decision::Punt,
                Decision::FieldGoal,
            ]),
        }
    }

    pub fn accepts(self, decision: Decision) -> bool {
        decision == Decision::Auto || self.options().contains(&decision)
    }

    pub fn requires_decision(self) -> bool {
        self != DecisionPrompt::None
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DecisionPrompt::None => "none",
            DecisionPrompt::RunOrPass => "run_or_pass",
            DecisionPrompt::FourthDown => "fourth_down",
        }
    }
}

impl fmt::Display for DecisionPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_for_situation() {
        assert_eq!(DecisionPrompt::for_situation(true, 1), DecisionPrompt::RunOrPass);
        assert_eq!(DecisionPrompt::for_situation(true, 3), DecisionPrompt::RunOrPass);
        assert_eq!(DecisionPrompt::for_situation(true, 4), DecisionPrompt::FourthDown);
        assert_eq!(DecisionPrompt::for_situation(false, 4), DecisionPrompt::None);
        assert_eq!(DecisionPrompt::for_situation(false, 1), DecisionPrompt::None);
    }

    #[test]
    fn test_prompt_accepts() {
        assert!(DecisionPrompt::RunOrPass.accepts(Decision::Run));
        assert!(DecisionPrompt::RunOrPass.accepts(Decision::Auto));
        assert!(!DecisionPrompt::RunOrPass.accepts(Decision::Punt));
        assert!(!DecisionPrompt::RunOrPass.accepts(Decision::GoRun));

        assert!(DecisionPrompt::FourthDown.accepts(Decision::GoPass));
        assert!(DecisionPrompt::FourthDown.accepts(Decision::FieldGoal));
        assert!(!DecisionPrompt::FourthDown.accepts(Decision::Run));

        assert!(DecisionPrompt::None.accepts(Decision::Auto));
        assert!(!DecisionPrompt::None.accepts(Decision::Punt));
    }

    #[test]
    fn test_go_for_it_maps_to_base_play_types() {
        assert_eq!(Decision::GoRun.play_type(), Decision::Run.play_type());
        assert_eq!(Decision::GoPass.play_type(), Some(PlayType::Pass));
        assert_eq!(Decision::Auto.play_type(), None);
    }

    #[test]
    fn test_parse_decision() {
        assert_eq!("FG".parse::<Decision>(), Ok(Decision::FieldGoal));
        assert_eq!(" go_run ".parse::<Decision>(), Ok(Decision::GoRun));
        assert!("kneel".parse::<Decision>().is_err());
    }
}
