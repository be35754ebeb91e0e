//! Game engine: state, play resolution, transitions and the decision loop

pub mod controller;
pub mod decision;
pub mod engine;
pub mod game_loop;
pub mod interactive_controller;
pub mod logger;
pub mod narration;
pub mod random_controller;
pub mod recorder;
pub mod resolver;
pub mod scripted_controller;
pub mod snapshot;
pub mod state;
pub mod transition;
pub mod zero_controller;

pub use controller::{CoachController, GameOutcome, GameStateView};
pub use decision::{Decision, DecisionPrompt};
pub use engine::{CompletedGame, ExitSignal, GameEngine, Resolution, SimPhase};
pub use game_loop::{GameEndReason, GameLoop, GameResult, VerbosityLevel};
pub use interactive_controller::InteractiveController;
pub use logger::{GameLogger, LogEntry, OutputMode};
pub use random_controller::RandomController;
pub use recorder::DriveRecorder;
pub use scripted_controller::ScriptedController;
pub use snapshot::{GameSnapshot, SnapshotError};
pub use state::{GameState, Situation};
pub use zero_controller::ZeroController;
