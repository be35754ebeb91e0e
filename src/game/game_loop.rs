//! Game loop implementation
//!
//! Drives a `GameEngine` to completion, asking a coach controller for a
//! decision whenever the engine prompts for one and submitting `Auto`
//! otherwise.

/// Macro for conditional logging that avoids allocation when feature is disabled
///
/// When verbose-logging feature is disabled, this becomes a no-op at compile time,
/// eliminating the per-play format! allocations.
macro_rules! log_if_verbose {
    ($self:expr, $($arg:tt)*) => {
        #[cfg(feature = "verbose-logging")]
        {
            $self.log_normal(&format!($($arg)*));
        }
        #[cfg(not(feature = "verbose-logging"))]
        {
            let _ = &$self; // Suppress unused variable warning
        }
    };
}

use crate::core::Side;
use crate::game::controller::{CoachController, GameOutcome, GameStateView};
use crate::game::narration::{describe_down, describe_drive, describe_spot};
use crate::game::{Decision, GameEngine, Resolution};
use crate::Result;

/// Verbosity level for game output
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum VerbosityLevel {
    /// Silent - no output during game
    Silent = 0,
    /// Minimal - only the final score
    Minimal = 1,
    /// Normal - plays and drive summaries (default)
    #[default]
    Normal = 2,
    /// Verbose - everything, including coach bookkeeping
    Verbose = 3,
}

/// Result of running a game to completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    /// Winning side (None for a tie or an unfinished game)
    pub winner: Option<Side>,
    pub score_a: u32,
    pub score_b: u32,
    /// Completed drives
    pub drives_played: usize,
    pub plays_played: usize,
    /// Reason the game ended
    pub end_reason: GameEndReason,
}

/// Reason the game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEndReason {
    /// All drives allowed by the drive cap were played
    DriveLimit,
    /// Scores differed once the game was past the decided-after drive
    ScoreDecided,
    /// The loop hit its play limit before the engine finished
    PlayLimit,
    /// The caller stopped the loop early (`run_plays`)
    Manual,
}

/// Game loop manager
pub struct GameLoop<'a> {
    /// The engine being driven
    pub engine: &'a mut GameEngine,
    /// Plays resolved before the loop gives up
    max_plays: usize,
    plays_elapsed: usize,
    /// Verbosity level for output (cached from engine.logger)
    pub verbosity: VerbosityLevel,
}

impl<'a> GameLoop<'a> {
    pub fn new(engine: &'a mut GameEngine) -> Self {
        let verbosity = engine.logger.verbosity();
        GameLoop {
            engine,
            max_plays: 10_000,
            plays_elapsed: 0,
            verbosity,
        }
    }

    /// Set the maximum plays resolved before the loop stops with `PlayLimit`
    pub fn with_max_plays(mut self, max_plays: usize) -> Self {
        self.max_plays = max_plays;
        self
    }

    pub fn with_verbosity(mut self, verbosity: VerbosityLevel) -> Self {
        self.verbosity = verbosity;
        self.engine.logger.set_verbosity(verbosity);
        self
    }

    /// Plays resolved by this loop so far
    pub fn plays_elapsed(&self) -> usize {
        self.plays_elapsed
    }

    #[inline]
    fn log_normal(&self, message: &str) {
        self.engine.logger.normal(message);
    }

    /// Run the game until the engine reports completion
    pub fn run_game(&mut self, controller: &mut dyn CoachController) -> Result<GameResult> {
        self.log_kickoff();
        loop {
            if let Some(result) = self.run_play_once(controller)? {
                self.notify_game_end(controller, &result);
                return Ok(result);
            }
        }
    }

    /// Run at most `plays_to_run` plays
    ///
    /// Returns the final result if the game ended, otherwise a result with
    /// `GameEndReason::Manual` describing the game so far.
    pub fn run_plays(
        &mut self,
        controller: &mut dyn CoachController,
        plays_to_run: usize,
    ) -> Result<GameResult> {
        for _ in 0..plays_to_run {
            if let Some(result) = self.run_play_once(controller)? {
                self.notify_game_end(controller, &result);
                return Ok(result);
            }
        }
        Ok(self.build_result(GameEndReason::Manual))
    }

    /// Resolve one play, returning the game result once the game is over
    pub fn run_play_once(
        &mut self,
        controller: &mut dyn CoachController,
    ) -> Result<Option<GameResult>> {
        if self.engine.is_complete() {
            return Ok(Some(self.build_result(self.completion_reason())));
        }
        if self.plays_elapsed >= self.max_plays {
            log::warn!("play limit {} reached before the game finished", self.max_plays);
            return Ok(Some(self.build_result(GameEndReason::PlayLimit)));
        }

        let prompt = self.engine.prompt();
        let decision = if prompt.requires_decision() {
            let view = GameStateView::new(self.engine);
            controller.choose_decision(&view, prompt)
        } else {
            Decision::Auto
        };

        let Some(resolution) = self.engine.resolve(decision)? else {
            return Ok(Some(self.build_result(self.completion_reason())));
        };
        self.plays_elapsed += 1;
        self.log_resolution(&resolution);

        if self.engine.is_complete() {
            let result = self.build_result(self.completion_reason());
            self.engine.logger.minimal(&self.final_line());
            return Ok(Some(result));
        }
        Ok(None)
    }

    fn log_kickoff(&self) {
        let state = self.engine.state();
        let matchup = state.matchup();
        log_if_verbose!(
            self,
            "{} vs {}: drive {} starts at {}",
            matchup.team_a.name,
            matchup.team_b.name,
            state.current_drive_number(),
            describe_spot(state.field_position())
        );
    }

    fn log_resolution(&self, resolution: &Resolution) {
        let play = &resolution.play;
        log_if_verbose!(
            self,
            "{} at {}: {}",
            describe_down(play.down, play.yards_to_go, play.starting_field_position),
            describe_spot(play.starting_field_position),
            play.narration
        );

        if let Some(drive) = &resolution.drive {
            let offense = self
                .engine
                .state()
                .matchup()
                .side_of(drive.offense_team)
                .map(|side| self.engine.state().matchup().team(side).name.as_str())
                .unwrap_or("Unknown");
            self.log_normal(&describe_drive(drive, offense));
        }
    }

    fn final_line(&self) -> String {
        let state = self.engine.state();
        let matchup = state.matchup();
        format!(
            "Final: {} {}, {} {}",
            matchup.team_a.name,
            state.score_a(),
            matchup.team_b.name,
            state.score_b()
        )
    }

    fn completion_reason(&self) -> GameEndReason {
        let state = self.engine.state();
        if state.current_drive_number() > self.engine.policy().max_drives {
            GameEndReason::DriveLimit
        } else {
            GameEndReason::ScoreDecided
        }
    }

    fn build_result(&self, end_reason: GameEndReason) -> GameResult {
        let state = self.engine.state();
        let winner = if end_reason == GameEndReason::Manual || !self.engine.is_complete() {
            None
        } else if state.score_a() > state.score_b() {
            Some(Side::A)
        } else if state.score_b() > state.score_a() {
            Some(Side::B)
        } else {
            None
        };
        GameResult {
            winner,
            score_a: state.score_a(),
            score_b: state.score_b(),
            drives_played: state.drives().len(),
            plays_played: state.used_plays().len(),
            end_reason,
        }
    }

    fn notify_game_end(&self, controller: &mut dyn CoachController, result: &GameResult) {
        if !self.engine.is_complete() {
            return;
        }
        let outcome = match result.winner {
            Some(Side::A) => GameOutcome::Win,
            Some(Side::B) => GameOutcome::Loss,
            None => GameOutcome::Tie,
        };
        let view = GameStateView::new(self.engine);
        controller.on_game_end(&view, outcome);
    }
}
