//! Per-team, per-play-type banks of candidate play outcomes
//!
//! A bank is finite; draws walk each bucket with an independent cursor and
//! wrap around, so a bank of any size can supply a game of any length.
//! Cursors are kept outside the bank (in `GameState`) so the bank itself
//! stays immutable for the whole game.

use crate::core::{Matchup, PlayOutcome, PlayType, Side, TeamId};
use crate::{Result, SimError};
use serde::{Deserialize, Serialize};

/// Largest gain or loss a bank outcome may carry, in either direction
pub const MAX_YARDS: i32 = 100;

/// All outcomes available to one team
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamPlays {
    pub team: TeamId,
    #[serde(default)]
    pub run: Vec<PlayOutcome>,
    #[serde(default)]
    pub pass: Vec<PlayOutcome>,
    #[serde(default)]
    pub punt: Vec<PlayOutcome>,
    #[serde(default)]
    pub field_goal: Vec<PlayOutcome>,
}

impl TeamPlays {
    pub fn new(team: TeamId) -> Self {
        TeamPlays {
            team,
            run: Vec::new(),
            pass: Vec::new(),
            punt: Vec::new(),
            field_goal: Vec::new(),
        }
    }

    pub fn bucket(&self, play_type: PlayType) -> &[PlayOutcome] {
        match play_type {
            PlayType::Run => &self.run,
            PlayType::Pass => &self.pass,
            PlayType::Punt => &self.punt,
            PlayType::FieldGoal => &self.field_goal,
        }
    }

    pub fn bucket_mut(&mut self, play_type: PlayType) -> &mut Vec<PlayOutcome> {
        match play_type {
            PlayType::Run => &mut self.run,
            PlayType::Pass => &mut self.pass,
            PlayType::Punt => &mut self.punt,
            PlayType::FieldGoal => &mut self.field_goal,
        }
    }
}

/// Play bank for one game (read-only once the game starts)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayBank {
    /// One entry per team (Vec for stable ordering, small count)
    pub teams: Vec<TeamPlays>,
}

impl PlayBank {
    pub fn new(teams: Vec<TeamPlays>) -> Self {
        PlayBank { teams }
    }

    pub fn team(&self, team: TeamId) -> Result<&TeamPlays> {
        self.teams
            .iter()
            .find(|t| t.team == team)
            .ok_or(SimError::UnknownTeam(team))
    }

    pub fn bucket(&self, team: TeamId, play_type: PlayType) -> Result<&[PlayOutcome]> {
        Ok(self.team(team)?.bucket(play_type))
    }

    /// Structural check run at game start
    ///
    /// Both teams must be present and every outcome must carry a tag from its
    /// play type's vocabulary and yardage within `±MAX_YARDS`. Empty buckets are allowed here; drawing from
    /// one is reported as [`SimError::EmptyBucket`].
    pub fn validate(&self, matchup: &Matchup) -> Result<()> {
        for side in [Side::A, Side::B] {
            let team_plays = self.team(matchup.team_id(side))?;
            for play_type in PlayType::ALL {
                for (idx, outcome) in team_plays.bucket(play_type).iter().enumerate() {
                    if outcome.play_type != play_type {
                        return Err(SimError::InvalidPlayBank(format!(
                            "team {} {} bucket entry {idx} has play type {}",
                            team_plays.team, play_type, outcome.play_type
                        )));
                    }
                    if !outcome.is_well_formed() {
                        return Err(SimError::InvalidPlayBank(format!(
                            "team {} {} bucket entry {idx} has result '{}'",
                            team_plays.team, play_type, outcome.result
                        )));
                    }
                    if !(-MAX_YARDS..=MAX_YARDS).contains(&outcome.yards_gained) {
                        return Err(SimError::InvalidPlayBank(format!(
                            "team {} {} bucket entry {idx} has {} yards",
                            team_plays.team, play_type, outcome.yards_gained
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    /// Draw the outcome under a bucket's cursor and advance the cursor cyclically
    ///
    /// On error the cursor is left untouched.
    pub fn draw(
        &self,
        team: TeamId,
        side: Side,
        play_type: PlayType,
        cursors: &mut BankCursors,
    ) -> Result<PlayOutcome> {
        let bucket = self.bucket(team, play_type)?;
        if bucket.is_empty() {
            return Err(SimError::EmptyBucket { team, play_type });
        }

        let idx = cursors.get(side, play_type) % bucket.len();
        let outcome = bucket[idx];
        cursors.set(side, play_type, (idx + 1) % bucket.len());

        log::trace!("drew {play_type} outcome {idx}/{} for team {team}", bucket.len());
        Ok(outcome)
    }
}

/// Draw cursors, one per side and play type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BankCursors {
    cursors: [[usize; 4]; 2],
}

impl BankCursors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, side: Side, play_type: PlayType) -> usize {
        self.cursors[side.index()][play_type.index()]
    }

    pub fn set(&mut self, side: Side, play_type: PlayType, value: usize) {
        self.cursors[side.index()][play_type.index()] = value;
    }
}
