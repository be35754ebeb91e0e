//! Decision controller: the engine's public state machine
//!
//! The engine does nothing until a decision is submitted, and each decision
//! resolves at most one play. After every play it recomputes the prompt the
//! caller must answer next:
//!
//! - `AwaitingDecision`: the controlled team has the ball; answer the prompt
//!   (`RunOrPass` on downs 1-3, `FourthDown` on fourth down).
//! - `Resolving`: the opponent has the ball; submit `Decision::Auto`.
//! - `Complete`: the terminal check fired; no further plays are resolved.

use crate::bank::PlayBank;
use crate::config::GamePolicy;
use crate::core::{Drive, Matchup, Play};
use crate::game::{resolver, transition, Decision, DecisionPrompt, GameLogger, GameState, Situation};
use crate::{Result, SimError};
use serde::{Deserialize, Serialize};

/// Phase of the decision state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimPhase {
    AwaitingDecision,
    Resolving,
    Complete,
}

/// Everything one successful `resolve` produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub play: Play,
    /// The drive this play closed, if any
    pub drive: Option<Drive>,
    /// Prompt for the next play (`None` once complete)
    pub prompt: DecisionPrompt,
    pub phase: SimPhase,
}

/// Payload handed to persistence when a game finishes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedGame {
    pub matchup: Matchup,
    pub used_plays: Vec<Play>,
    pub drives: Vec<Drive>,
    pub score_a: u32,
    pub score_b: u32,
}

/// Returned by [`GameEngine::exit`]: the game was released without a result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitSignal {
    pub plays_played: usize,
    pub was_complete: bool,
}

/// One in-progress simulated game
///
/// Owns its state and play bank exclusively. Every mutation goes through
/// [`GameEngine::resolve`], which either applies a whole play or changes
/// nothing.
#[derive(Debug, Clone)]
pub struct GameEngine {
    state: GameState,
    bank: PlayBank,
    policy: GamePolicy,
    /// Centralized logger for game events
    pub logger: GameLogger,
}

impl GameEngine {
    /// Start a game at the opening kickoff
    pub fn start(bank: PlayBank, matchup: Matchup, policy: GamePolicy) -> Result<Self> {
        let situation = Situation::kickoff(&policy);
        Self::start_at(bank, matchup, policy, situation)
    }

    /// Start a game from an arbitrary situation
    pub fn start_at(
        bank: PlayBank,
        matchup: Matchup,
        policy: GamePolicy,
        situation: Situation,
    ) -> Result<Self> {
        policy.validate()?;
        bank.validate(&matchup)?;
        let state = GameState::at_situation(matchup, &policy, situation);
        Ok(Self::from_parts(state, bank, policy))
    }

    /// Rebuild an engine from saved parts (snapshot resume)
    pub(crate) fn from_parts(state: GameState, bank: PlayBank, policy: GamePolicy) -> Self {
        let engine = GameEngine {
            state,
            bank,
            policy,
            logger: GameLogger::new(),
        };
        log::debug!(
            "engine ready: drive {}, phase {:?}",
            engine.state.current_drive_number(),
            engine.phase()
        );
        engine
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn bank(&self) -> &PlayBank {
        &self.bank
    }

    pub fn policy(&self) -> &GamePolicy {
        &self.policy
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_game_over()
    }

    pub fn phase(&self) -> SimPhase {
        if self.is_complete() {
            SimPhase::Complete
        } else if self.prompt().requires_decision() {
            SimPhase::AwaitingDecision
        } else {
            SimPhase::Resolving
        }
    }

    /// What the caller must decide before the next play
    pub fn prompt(&self) -> DecisionPrompt {
        if self.is_complete() {
            DecisionPrompt::None
        } else {
            DecisionPrompt::for_situation(self.state.is_controlled_team_on_offense(), self.state.down())
        }
    }

    /// Submit a decision and resolve the next play
    ///
    /// Returns `Ok(None)` without touching anything when the game is already
    /// complete. A decision the current prompt does not accept, or an empty
    /// bank bucket, is an error and leaves the state unchanged.
    pub fn resolve(&mut self, decision: Decision) -> Result<Option<Resolution>> {
        if self.is_complete() {
            log::debug!("ignoring {decision}: game already complete");
            return Ok(None);
        }

        let prompt = self.prompt();
        if !prompt.accepts(decision) {
            return Err(SimError::InvalidDecision { decision, prompt });
        }

        let play = resolver::resolve(&self.bank, &mut self.state, decision, &self.policy)?;
        let transition = transition::apply(&mut self.state, play.clone(), &self.policy);

        Ok(Some(Resolution {
            play,
            drive: transition.drive,
            prompt: self.prompt(),
            phase: self.phase(),
        }))
    }

    /// Build the persistence payload for a finished game
    ///
    /// Calling this again returns the same payload; nothing is appended.
    pub fn complete(&self) -> Result<CompletedGame> {
        if !self.is_complete() {
            return Err(SimError::GameInProgress);
        }
        Ok(CompletedGame {
            matchup: self.state.matchup().clone(),
            used_plays: self.state.used_plays().to_vec(),
            drives: self.state.drives().to_vec(),
            score_a: self.state.score_a(),
            score_b: self.state.score_b(),
        })
    }

    /// Abandon the game without producing a result
    ///
    /// Consumes the engine, so no play can be resolved afterwards.
    pub fn exit(self) -> ExitSignal {
        log::debug!("engine exited after {} plays", self.state.used_plays().len());
        ExitSignal {
            plays_played: self.state.used_plays().len(),
            was_complete: self.is_complete(),
        }
    }
}
