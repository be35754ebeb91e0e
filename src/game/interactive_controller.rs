//! Interactive terminal controller for a human coach
//!
//! Reads play calls from stdin and displays the game through `GameStateView`.

use crate::game::controller::{CoachController, GameOutcome, GameStateView};
use crate::game::narration::{describe_down, describe_drive, describe_spot};
use crate::game::{Decision, DecisionPrompt};
use std::io::{self, BufRead, Write};

/// A controller that asks a human for each play call
pub struct InteractiveController {
    numeric_choices: bool,
}

impl InteractiveController {
    pub fn new() -> Self {
        InteractiveController {
            numeric_choices: false,
        }
    }

    /// Numeric mode: only option numbers are accepted and Enter picks option 0
    pub fn with_numeric_choices(numeric_choices: bool) -> Self {
        InteractiveController { numeric_choices }
    }

    fn display_situation(&self, view: &GameStateView) {
        println!(
            "\n{} {} - {} {} | Drive {} | {} at {}",
            view.team().name,
            view.own_score(),
            view.opponent().name,
            view.opponent_score(),
            view.drive_number(),
            describe_down(view.down(), view.yards_to_go(), view.field_position()),
            describe_spot(view.field_position()),
        );
        if view.current_drive_plays().is_empty() {
            if let Some(play) = view.last_play() {
                println!("    Last play: {}", play.narration);
            }
        }
        for play in view.current_drive_plays() {
            println!("    {}", play.narration);
        }
    }

    fn display_help(&self, prompt: DecisionPrompt) {
        println!("\n=== Help ===");
        println!("  ?  - Show this help menu");
        println!("  d  - Show completed drives");
        println!("  a  - Let the auto caller pick");
        if !self.numeric_choices {
            let names: Vec<_> = prompt.options().iter().map(|d| d.as_str()).collect();
            println!("  Or type a call: {}", names.join(", "));
        }
        println!();
    }

    fn display_drives(&self, view: &GameStateView) {
        println!("\n=== Drives ===");
        if view.drives().is_empty() {
            println!("  (none yet)");
        }
        for drive in view.drives() {
            let name = if drive.offense_team == view.team().id {
                &view.team().name
            } else {
                &view.opponent().name
            };
            println!("  {}", describe_drive(drive, name.as_str()));
        }
        println!();
    }

    /// Interpret one line of input, `None` meaning re-prompt
    fn parse_choice(&self, input: &str, options: &[Decision]) -> Option<Decision> {
        if input.is_empty() {
            return self.numeric_choices.then_some(options[0]);
        }
        if input == "a" {
            return Some(Decision::Auto);
        }
        if let Ok(index) = input.parse::<usize>() {
            return options.get(index).copied();
        }
        if self.numeric_choices {
            return None;
        }
        input
            .parse::<Decision>()
            .ok()
            .filter(|d| *d == Decision::Auto || options.contains(d))
    }
}

impl Default for InteractiveController {
    fn default() -> Self {
        Self::new()
    }
}

impl CoachController for InteractiveController {
    fn name(&self) -> &str {
        "interactive"
    }

    fn choose_decision(&mut self, view: &GameStateView, prompt: DecisionPrompt) -> Decision {
        let options = prompt.options();
        if !prompt.requires_decision() {
            return Decision::Auto;
        }

        self.display_situation(view);
        for (i, option) in options.iter().enumerate() {
            println!("  [{i}] {option}");
        }

        let stdin = io::stdin();
        loop {
            print!("Call the play (? for help): ");
            let _ = io::stdout().flush();

            let mut input = String::new();
            match stdin.lock().read_line(&mut input) {
                Ok(0) => {
                    // stdin closed, let the game finish on its own
                    return Decision::Auto;
                }
                Ok(_) => {}
                Err(e) => {
                    eprintln!("Error reading input: {e}");
                    continue;
                }
            }

            let trimmed = input.trim().to_lowercase();
            match trimmed.as_str() {
                "?" => self.display_help(prompt),
                "d" => self.display_drives(view),
                _ => match self.parse_choice(&trimmed, &options) {
                    Some(decision) => {
                        view.logger().coach_choice(
                            self.name(),
                            &format!("{} calls {decision}", view.team().name),
                        );
                        return decision;
                    }
                    None => eprintln!("Invalid choice. Enter 0-{}.", options.len() - 1),
                },
            }
        }
    }

    fn on_game_end(&mut self, view: &GameStateView, outcome: GameOutcome) {
        let verdict = match outcome {
            GameOutcome::Win => "You win!",
            GameOutcome::Loss => "You lose.",
            GameOutcome::Tie => "It's a tie.",
        };
        println!(
            "\n=== Final: {} {} - {} {} === {verdict}",
            view.team().name,
            view.own_score(),
            view.opponent().name,
            view.opponent_score()
        );
    }
}
