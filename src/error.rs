//! Error types for the gridiron simulator

use crate::core::{PlayType, TeamId};
use crate::game::{Decision, DecisionPrompt};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Play bank has no {play_type} outcomes for team {team}")]
    EmptyBucket { team: TeamId, play_type: PlayType },

    #[error("Team not found in play bank: {0}")]
    UnknownTeam(TeamId),

    #[error("Decision '{decision}' is not valid for prompt '{prompt}'")]
    InvalidDecision { decision: Decision, prompt: DecisionPrompt },

    #[error("Invalid play bank: {0}")]
    InvalidPlayBank(String),

    #[error("No game with id '{0}'")]
    UnknownGame(String),

    #[error("Game is still in progress")]
    GameInProgress,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        SimError::SerializationError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SimError>;
