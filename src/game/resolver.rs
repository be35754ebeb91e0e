//! Play resolver: turns a decision into a fully described play
//!
//! The only state the resolver touches is the play-bank cursor of the
//! bucket it draws from, and only when the draw succeeds.

use crate::bank::PlayBank;
use crate::config::GamePolicy;
use crate::core::{Play, PlayType};
use crate::game::{narration, Decision, GameState};
use crate::Result;

/// Pick the play type for a decision, calling the play automatically for `Auto`
pub fn play_type_for(decision: Decision, state: &GameState, policy: &GamePolicy) -> PlayType {
    decision
        .play_type()
        .unwrap_or_else(|| auto_call(state, policy))
}

/// Deterministic play-calling used for `Auto` decisions
pub fn auto_call(state: &GameState, policy: &GamePolicy) -> PlayType {
    if state.down < 4 {
        if state.yards_to_go >= policy.pass_threshold {
            PlayType::Pass
        } else {
            PlayType::Run
        }
    } else if state.field_position >= policy.field_goal_range {
        PlayType::FieldGoal
    } else if state.yards_to_go <= policy.go_for_it_distance && state.field_position >= 50 {
        PlayType::Run
    } else {
        PlayType::Punt
    }
}

/// Draw the next outcome for the team on offense and stamp it with the current situation
pub fn resolve(
    bank: &PlayBank,
    state: &mut GameState,
    decision: Decision,
    policy: &GamePolicy,
) -> Result<Play> {
    let play_type = play_type_for(decision, state, policy);
    let side = state.offense_side();
    let offense_team = state.offense_team();

    let outcome = bank.draw(offense_team, side, play_type, &mut state.cursors)?;

    Ok(Play {
        narration: narration::narrate(&outcome),
        outcome,
        drive_number: state.current_drive_number,
        starting_field_position: state.field_position,
        down: state.down,
        yards_to_go: state.yards_to_go,
        score_a: state.score_a,
        score_b: state.score_b,
        offense_team,
        defense_team: state.defense_team(),
    })
}
