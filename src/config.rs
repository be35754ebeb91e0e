//! Simulation configuration
//!
//! `GamePolicy` collects the constants the engine treats as policy rather
//! than as rules of the sport: the drive cap standing in for a game clock,
//! point values, the touchback spot, and the thresholds used when a play
//! is called automatically.

use crate::game::VerbosityLevel;
use crate::{Result, SimError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Policy constants for one simulated game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GamePolicy {
    /// The game always ends once this many drives have been played
    pub max_drives: u32,
    /// After this many drives, the game ends as soon as the score is not tied
    pub decided_after_drive: u32,
    /// Touchdown including the automatic extra point
    pub touchdown_points: u32,
    pub field_goal_points: u32,
    /// Where a new drive starts after a score, turnover or touchback
    pub touchback_spot: i32,
    /// The controlled team (side A) takes the opening possession
    pub controlled_receives_opening: bool,
    /// Auto play-calling: pass on downs 1-3 when yards to go is at least this
    pub pass_threshold: i32,
    /// Auto play-calling: attempt a field goal from this field position on
    pub field_goal_range: i32,
    /// Auto play-calling: go for it on fourth and this many or fewer
    pub go_for_it_distance: i32,
}

impl Default for GamePolicy {
    fn default() -> Self {
        GamePolicy {
            max_drives: 20,
            decided_after_drive: 8,
            touchdown_points: 7,
            field_goal_points: 3,
            touchback_spot: 20,
            controlled_receives_opening: true,
            pass_threshold: 7,
            field_goal_range: 63,
            go_for_it_distance: 2,
        }
    }
}

impl GamePolicy {
    /// Reject policies the engine cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.max_drives == 0 {
            return Err(SimError::Config("max_drives must be at least 1".to_string()));
        }
        if self.decided_after_drive > self.max_drives {
            return Err(SimError::Config(format!(
                "decided_after_drive ({}) exceeds max_drives ({})",
                self.decided_after_drive, self.max_drives
            )));
        }
        if !(1..=99).contains(&self.touchback_spot) {
            return Err(SimError::Config(format!(
                "touchback_spot must be between 1 and 99, got {}",
                self.touchback_spot
            )));
        }
        Ok(())
    }

    /// Terminal check, evaluated with the drive number of the next drive to play
    pub fn is_game_over(&self, current_drive_number: u32, score_a: u32, score_b: u32) -> bool {
        current_drive_number > self.max_drives
            || (score_a != score_b && current_drive_number > self.decided_after_drive)
    }
}

/// Top-level configuration for running simulations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub policy: GamePolicy,
    pub verbosity: VerbosityLevel,
}

impl SimConfig {
    /// Load a configuration from a JSON file; missing fields take their defaults
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config: SimConfig = serde_json::from_str(&json)
            .map_err(|e| SimError::Config(format!("{}: {e}", path.as_ref().display())))?;
        config.policy.validate()?;
        Ok(config)
    }
}
