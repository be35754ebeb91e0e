//! Random coach controller for testing and baseline play
//!
//! Picks uniformly among the options a prompt offers. Seed it for
//! reproducible games.

use crate::game::controller::{CoachController, GameOutcome, GameStateView};
use crate::game::{Decision, DecisionPrompt};
use rand::Rng;

/// A controller that makes random choices
pub struct RandomController {
    rng: Box<dyn rand::RngCore + Send>,
}

impl RandomController {
    /// Create a new random controller with an entropy-seeded RNG
    pub fn new() -> Self {
        use rand::SeedableRng;
        RandomController {
            rng: Box::new(rand::rngs::StdRng::from_entropy()),
        }
    }

    /// Create a random controller with a seeded RNG (for deterministic testing)
    pub fn with_seed(seed: u64) -> Self {
        use rand::SeedableRng;
        RandomController {
            rng: Box::new(rand::rngs::StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomController {
    fn default() -> Self {
        Self::new()
    }
}

impl CoachController for RandomController {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_decision(&mut self, view: &GameStateView, prompt: DecisionPrompt) -> Decision {
        let options = prompt.options();
        let decision = options[self.rng.gen_range(0..options.len())];
        view.logger()
            .coach_choice(self.name(), &format!("{} calls {decision}", view.team().name));
        decision
    }

    fn on_game_end(&mut self, view: &GameStateView, outcome: GameOutcome) {
        view.logger().verbose(&format!(
            "Random coach finished with a {:?} ({}-{})",
            outcome,
            view.own_score(),
            view.opponent_score()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::generate_bank;
    use crate::config::GamePolicy;
    use crate::core::{Matchup, Team};
    use crate::game::GameEngine;

    fn engine() -> GameEngine {
        let matchup = Matchup::new(Team::new(1, "Home"), Team::new(2, "Away"));
        let bank = generate_bank(&matchup, 1, 8);
        let mut engine = GameEngine::start(bank, matchup, GamePolicy::default()).unwrap();
        engine.logger.enable_capture();
        engine
    }

    #[test]
    fn test_choices_come_from_prompt_options() {
        let engine = engine();
        let view = GameStateView::new(&engine);
        let mut controller = RandomController::with_seed(42);

        for _ in 0..50 {
            let decision = controller.choose_decision(&view, DecisionPrompt::FourthDown);
            assert!(DecisionPrompt::FourthDown.options().contains(&decision));
        }
        assert_eq!(controller.choose_decision(&view, DecisionPrompt::None), Decision::Auto);
    }

    #[test]
    fn test_seeded_determinism() {
        let engine = engine();
        let view = GameStateView::new(&engine);
        let mut controller1 = RandomController::with_seed(7);
        let mut controller2 = RandomController::with_seed(7);

        let picks1: Vec<_> = (0..20)
            .map(|_| controller1.choose_decision(&view, DecisionPrompt::RunOrPass))
            .collect();
        let picks2: Vec<_> = (0..20)
            .map(|_| controller2.choose_decision(&view, DecisionPrompt::RunOrPass))
            .collect();
        assert_eq!(picks1, picks2);
    }
}
