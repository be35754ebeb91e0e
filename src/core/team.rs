//! Team identity and the two sides of a simulated game

use serde::{Deserialize, Serialize};
use std::fmt;

/// Simple integer ID for a team
///
/// IDs come from the season-management layer and are stable for the
/// lifetime of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(u32);

impl TeamId {
    pub fn new(id: u32) -> Self {
        TeamId(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Team name (distinct from other string types)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamName(String);

impl TeamName {
    pub fn new(s: impl Into<String>) -> Self {
        TeamName(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TeamName {
    fn from(s: &str) -> Self {
        TeamName(s.to_string())
    }
}

/// One of the two sides in a game
///
/// Side `A` is always the controlled (human or coach-driven) team and owns
/// `score_a`; side `B` is the opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Stable index for per-side arrays
    pub fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: TeamName,
}

impl Team {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Team {
            id: TeamId::new(id),
            name: TeamName::new(name),
        }
    }
}

/// The two teams taking part in a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matchup {
    /// Controlled team
    pub team_a: Team,
    /// Opponent
    pub team_b: Team,
}

impl Matchup {
    pub fn new(team_a: Team, team_b: Team) -> Self {
        Matchup { team_a, team_b }
    }

    pub fn team(&self, side: Side) -> &Team {
        match side {
            Side::A => &self.team_a,
            Side::B => &self.team_b,
        }
    }

    pub fn team_id(&self, side: Side) -> TeamId {
        self.team(side).id
    }

    /// Find which side a team plays on
    pub fn side_of(&self, team: TeamId) -> Option<Side> {
        if self.team_a.id == team {
            Some(Side::A)
        } else if self.team_b.id == team {
            Some(Side::B)
        } else {
            None
        }
    }
}
