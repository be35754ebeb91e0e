//! Scripted coach controller for testing and examples
//!
//! Follows a predetermined list of decisions, then falls back to `Auto`
//! once the script runs out.

use crate::game::controller::{CoachController, GameStateView};
use crate::game::{Decision, DecisionPrompt};

/// A controller that follows a predetermined sequence of decisions
pub struct ScriptedController {
    decisions: Vec<Decision>,
    current_step: usize,
}

impl ScriptedController {
    pub fn new(decisions: Vec<Decision>) -> Self {
        ScriptedController {
            decisions,
            current_step: 0,
        }
    }

    /// Parse a script of space or comma separated decisions ("run pass go_run")
    pub fn parse(script: &str) -> Result<Self, String> {
        let decisions = script
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .map(str::parse)
            .collect::<Result<Vec<Decision>, String>>()?;
        Ok(Self::new(decisions))
    }

    /// Decisions not yet used
    pub fn remaining(&self) -> usize {
        self.decisions.len().saturating_sub(self.current_step)
    }
}

impl CoachController for ScriptedController {
    fn name(&self) -> &str {
        "scripted"
    }

    fn choose_decision(&mut self, view: &GameStateView, _prompt: DecisionPrompt) -> Decision {
        let decision = match self.decisions.get(self.current_step) {
            Some(&decision) => {
                self.current_step += 1;
                decision
            }
            None => Decision::Auto,
        };
        view.logger()
            .coach_choice(self.name(), &format!("{} calls {decision}", view.team().name));
        decision
    }
}
