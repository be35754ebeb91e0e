//! Zero controller for testing and automation
//!
//! This controller always chooses the first option a prompt offers: `run`
//! on early downs and `go_run` on fourth down. It never needs input, so it
//! is the default for automated runs and benchmarks.

use crate::game::controller::{CoachController, GameStateView};
use crate::game::{Decision, DecisionPrompt};

/// A controller that always chooses the first offered option
pub struct ZeroController;

impl ZeroController {
    pub fn new() -> Self {
        ZeroController
    }
}

impl Default for ZeroController {
    fn default() -> Self {
        Self::new()
    }
}

impl CoachController for ZeroController {
    fn name(&self) -> &str {
        "zero"
    }

    fn choose_decision(&mut self, view: &GameStateView, prompt: DecisionPrompt) -> Decision {
        let decision = prompt.options().first().copied().unwrap_or(Decision::Auto);
        view.logger()
            .coach_choice(self.name(), &format!("{} calls {decision}", view.team().name));
        decision
    }
}
