//! Box score accumulation from a finished (or in-progress) game

use crate::core::{Drive, Matchup, Play, PlayResult, PlayType, Side, TeamId};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Offensive totals for one team
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStats {
    pub rush_attempts: u32,
    pub rush_yards: i32,
    pub rush_touchdowns: u32,
    pub pass_attempts: u32,
    pub completions: u32,
    pub pass_yards: i32,
    pub pass_touchdowns: u32,
    pub interceptions: u32,
    pub fumbles: u32,
    pub punts: u32,
    pub punt_yards: i32,
    pub field_goals_made: u32,
    pub field_goals_attempted: u32,
    pub drives: u32,
    pub points: u32,
}

impl TeamStats {
    pub fn total_yards(&self) -> i32 {
        self.rush_yards + self.pass_yards
    }

    pub fn turnovers(&self) -> u32 {
        self.interceptions + self.fumbles
    }

    /// NFL passer rating, `None` without pass attempts
    pub fn passer_rating(&self) -> Option<f64> {
        if self.pass_attempts == 0 {
            return None;
        }
        let att = f64::from(self.pass_attempts);
        let clamp = |v: f64| v.clamp(0.0, 2.375);

        let a = clamp((f64::from(self.completions) / att - 0.3) * 5.0);
        let b = clamp((f64::from(self.pass_yards) / att - 3.0) * 0.25);
        let c = clamp(f64::from(self.pass_touchdowns) / att * 20.0);
        let d = clamp(2.375 - f64::from(self.interceptions) / att * 25.0);
        Some((a + b + c + d) / 6.0 * 100.0)
    }

    fn record(&mut self, play: &Play) {
        let yards = play.effective_yards();
        match (play.play_type(), play.result()) {
            (PlayType::Run, result) => {
                self.rush_attempts += 1;
                self.rush_yards += yards;
                match result {
                    PlayResult::Touchdown => self.rush_touchdowns += 1,
                    PlayResult::Fumble => self.fumbles += 1,
                    _ => {}
                }
            }
            (PlayType::Pass, PlayResult::IncompletePass) => self.pass_attempts += 1,
            (PlayType::Pass, PlayResult::Interception) => {
                self.pass_attempts += 1;
                self.interceptions += 1;
            }
            (PlayType::Pass, result) => {
                self.pass_attempts += 1;
                self.completions += 1;
                self.pass_yards += yards;
                match result {
                    PlayResult::Touchdown => self.pass_touchdowns += 1,
                    PlayResult::Fumble => self.fumbles += 1,
                    _ => {}
                }
            }
            (PlayType::Punt, _) => {
                self.punts += 1;
                self.punt_yards += yards;
            }
            (PlayType::FieldGoal, result) => {
                self.field_goals_attempted += 1;
                if result == PlayResult::FieldGoalGood {
                    self.field_goals_made += 1;
                }
            }
        }
    }
}

/// Per-team statistics for one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxScore {
    matchup: Matchup,
    teams: FxHashMap<TeamId, TeamStats>,
}

impl BoxScore {
    /// Accumulate stats from the played plays and closed drives
    pub fn from_plays(matchup: &Matchup, plays: &[Play], drives: &[Drive]) -> Self {
        let mut teams: FxHashMap<TeamId, TeamStats> = FxHashMap::default();
        teams.insert(matchup.team_a.id, TeamStats::default());
        teams.insert(matchup.team_b.id, TeamStats::default());

        for play in plays {
            teams.entry(play.offense_team).or_default().record(play);
        }
        for drive in drives {
            let stats = teams.entry(drive.offense_team).or_default();
            stats.drives += 1;
            stats.points += drive.points;
        }

        BoxScore {
            matchup: matchup.clone(),
            teams,
        }
    }

    pub fn team(&self, team: TeamId) -> Option<&TeamStats> {
        self.teams.get(&team)
    }

    pub fn side(&self, side: Side) -> Option<&TeamStats> {
        self.team(self.matchup.team_id(side))
    }
}

impl fmt::Display for BoxScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<16} {:>4} {:>6} {:>10} {:>10} {:>4} {:>6}",
            "Team", "Pts", "Yards", "Rush", "Pass", "TO", "Rating"
        )?;
        for side in [Side::A, Side::B] {
            let team = self.matchup.team(side);
            let Some(stats) = self.team(team.id) else {
                continue;
            };
            let rating = stats
                .passer_rating()
                .map(|r| format!("{r:.1}"))
                .unwrap_or_else(|| "-".to_string());
            writeln!(
                f,
                "{:<16} {:>4} {:>6} {:>10} {:>10} {:>4} {:>6}",
                team.name.as_str(),
                stats.points,
                stats.total_yards(),
                format!("{}-{}", stats.rush_attempts, stats.rush_yards),
                format!("{}/{}-{}", stats.completions, stats.pass_attempts, stats.pass_yards),
                stats.turnovers(),
                rating
            )?;
        }
        Ok(())
    }
}
