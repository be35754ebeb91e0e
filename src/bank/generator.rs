//! Seeded synthetic play banks
//!
//! Real banks come from the season-management service. This generator
//! produces plausible-looking banks for the CLI, benchmarks and tests.
//! Same seed, same bank.

use crate::bank::{PlayBank, TeamPlays};
use crate::core::{Matchup, PlayOutcome, PlayResult, PlayType, Side, TeamId};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;

/// Generate a bank with `per_bucket` outcomes in every bucket for both teams
pub fn generate_bank(matchup: &Matchup, seed: u64, per_bucket: usize) -> PlayBank {
    let mut rng = ChaCha12Rng::seed_from_u64(seed);
    let teams = [Side::A, Side::B]
        .into_iter()
        .map(|side| generate_team(&mut rng, matchup.team_id(side), per_bucket))
        .collect();
    PlayBank::new(teams)
}

fn generate_team(rng: &mut ChaCha12Rng, team: TeamId, per_bucket: usize) -> TeamPlays {
    let mut plays = TeamPlays::new(team);
    for _ in 0..per_bucket {
        for play_type in PlayType::ALL {
            let outcome = match play_type {
                PlayType::Run => run_outcome(rng),
                PlayType::Pass => pass_outcome(rng),
                PlayType::Punt => {
                    PlayOutcome::new(PlayType::Punt, rng.gen_range(32..=56), PlayResult::Punt)
                }
                PlayType::FieldGoal => field_goal_outcome(rng),
            };
            plays.bucket_mut(play_type).push(outcome);
        }
    }
    plays
}

fn field_goal_outcome(rng: &mut ChaCha12Rng) -> PlayOutcome {
    let result = if rng.gen_bool(0.78) {
        PlayResult::FieldGoalGood
    } else {
        PlayResult::FieldGoalNoGood
    };
    PlayOutcome::new(PlayType::FieldGoal, 0, result)
}

fn run_outcome(rng: &mut ChaCha12Rng) -> PlayOutcome {
    let roll: f64 = rng.gen();
    if roll < 0.03 {
        PlayOutcome::new(PlayType::Run, rng.gen_range(-2..=2), PlayResult::Fumble)
    } else if roll < 0.07 {
        PlayOutcome::new(PlayType::Run, rng.gen_range(5..=40), PlayResult::Touchdown)
    } else if roll < 0.15 {
        PlayOutcome::new(PlayType::Run, rng.gen_range(10..=25), PlayResult::Run)
    } else {
        PlayOutcome::new(PlayType::Run, rng.gen_range(-3..=7), PlayResult::Run)
    }
}

fn pass_outcome(rng: &mut ChaCha12Rng) -> PlayOutcome {
    let roll: f64 = rng.gen();
    if roll < 0.33 {
        PlayOutcome::new(PlayType::Pass, 0, PlayResult::IncompletePass)
    } else if roll < 0.37 {
        PlayOutcome::new(PlayType::Pass, 0, PlayResult::Interception)
    } else if roll < 0.44 {
        PlayOutcome::new(PlayType::Pass, rng.gen_range(8..=60), PlayResult::Touchdown)
    } else {
        PlayOutcome::new(PlayType::Pass, rng.gen_range(2..=28), PlayResult::Pass)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Team;

    fn matchup() -> Matchup {
        Matchup::new(Team::new(1, "Home"), Team::new(2, "Away"))
    }

    #[test]
    fn test_generated_bank_is_valid() {
        let bank = generate_bank(&matchup(), 7, 40);
        assert!(bank.validate(&matchup()).is_ok());
        for team in &bank.teams {
            for play_type in PlayType::ALL {
                assert_eq!(team.bucket(play_type).len(), 40);
            }
        }
    }

    #[test]
    fn test_same_seed_same_bank() {
        assert_eq!(generate_bank(&matchup(), 99, 16), generate_bank(&matchup(), 99, 16));
        assert_ne!(generate_bank(&matchup(), 99, 16), generate_bank(&matchup(), 100, 16));
    }
}
