//! State transition function
//!
//! Applies one resolved play to the game state: moves the ball, scores,
//! advances the down, closes the drive when it ends, hands the ball over,
//! and runs the terminal check. Every step here is infallible, so a play
//! that reaches this point is always applied in full.

use crate::config::GamePolicy;
use crate::core::{Drive, DriveResult, Play, PlayResult, PlayType};
use crate::game::state::controlled_on_offense_for;
use crate::game::GameState;

/// What applying a play produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// The drive closed by this play, if any
    pub drive: Option<Drive>,
    /// The terminal check fired
    pub game_over: bool,
}

/// Apply a resolved play to the state
pub fn apply(state: &mut GameState, play: Play, policy: &GamePolicy) -> Transition {
    let offense = state.offense_side();
    let snap_spot = state.field_position;
    let result = play.result();

    let drive_result = match play.play_type() {
        PlayType::Run | PlayType::Pass => {
            let gained = play.effective_yards();
            state.field_position = snap_spot + gained;
            state.yards_to_go -= gained;

            if result == PlayResult::Touchdown {
                state.add_points(offense, policy.touchdown_points);
            }

            if state.yards_to_go <= 0 {
                state.down = 1;
                state.yards_to_go = 10.min(100 - state.field_position);
            } else {
                state.down += 1;
            }

            match DriveResult::from_play_result(result) {
                Some(ended) => Some(ended),
                None if state.down > 4 => Some(DriveResult::TurnoverOnDowns),
                None => None,
            }
        }
        PlayType::Punt => Some(DriveResult::Punt),
        PlayType::FieldGoal => {
            if result == PlayResult::FieldGoalGood {
                state.add_points(offense, policy.field_goal_points);
                Some(DriveResult::FieldGoal)
            } else {
                Some(DriveResult::MissedFieldGoal)
            }
        }
    };

    let drive = drive_result.map(|ended| {
        let next_spot = next_drive_spot(ended, snap_spot, state.field_position, &play, policy);
        close_drive(state, ended, next_spot, policy)
    });

    state.used_plays.push(play);

    state.game_over = policy.is_game_over(state.current_drive_number, state.score_a, state.score_b);
    if state.game_over {
        log::debug!(
            "game over after drive {} ({}-{})",
            state.current_drive_number - 1,
            state.score_a,
            state.score_b
        );
    }

    Transition {
        drive,
        game_over: state.game_over,
    }
}

/// Where the receiving team starts, measured from its own goal line
fn next_drive_spot(
    ended: DriveResult,
    snap_spot: i32,
    dead_ball_spot: i32,
    play: &Play,
    policy: &GamePolicy,
) -> i32 {
    match ended {
        DriveResult::Touchdown | DriveResult::FieldGoal | DriveResult::Turnover => {
            policy.touchback_spot
        }
        DriveResult::TurnoverOnDowns => 100 - dead_ball_spot,
        DriveResult::Punt => {
            let landing = snap_spot.saturating_add(play.yards_gained().max(0));
            if landing >= 100 {
                policy.touchback_spot
            } else {
                (100 - landing).clamp(1, 99)
            }
        }
        DriveResult::MissedFieldGoal => (100 - snap_spot).max(policy.touchback_spot),
    }
}

/// Record the finished drive and set up the next one
fn close_drive(state: &mut GameState, ended: DriveResult, next_spot: i32, policy: &GamePolicy) -> Drive {
    let points = match ended {
        DriveResult::Touchdown => policy.touchdown_points,
        DriveResult::FieldGoal => policy.field_goal_points,
        _ => 0,
    };
    // The closing play has not been pushed yet
    let play_count = state.used_plays.len() + 1 - state.drives.plays_recorded();

    let drive = Drive {
        drive_number: state.current_drive_number,
        offense_team: state.offense_team(),
        defense_team: state.defense_team(),
        starting_field_position: state.drive_start_field_position,
        result: ended,
        points,
        play_count,
        score_a_after: state.score_a,
        score_b_after: state.score_b,
    };
    state.drives.record(drive.clone());

    log::debug!(
        "drive {} closed: {} ({} plays, {} points)",
        drive.drive_number,
        ended,
        play_count,
        points
    );

    state.current_drive_number += 1;
    state.field_position = next_spot;
    state.drive_start_field_position = next_spot;
    state.down = 1;
    state.yards_to_go = 10.min(100 - next_spot);
    state.is_controlled_team_on_offense =
        controlled_on_offense_for(state.current_drive_number, policy);

    drive
}
