//! Human-readable play narration

use crate::core::{Drive, DriveResult, PlayOutcome, PlayResult, PlayType};

/// Describe a play from its type, result and yardage
///
/// Scoring and turnover results use fixed phrases; ordinary plays report yardage.
pub fn narrate(outcome: &PlayOutcome) -> String {
    let yards = outcome.yards_gained;
    match (outcome.play_type, outcome.result) {
        (PlayType::Run, PlayResult::Touchdown) => {
            format!("Touchdown! {} run into the end zone.", yardage(yards))
        }
        (_, PlayResult::Touchdown) => {
            format!("Touchdown! {} pass into the end zone.", yardage(yards))
        }
        (_, PlayResult::Fumble) => "Fumble! The defense recovers.".to_string(),
        (_, PlayResult::Interception) => "Intercepted! The pass is picked off.".to_string(),
        (_, PlayResult::IncompletePass) => "Pass incomplete.".to_string(),
        (PlayType::Pass, _) => format!("Pass complete, {}.", gain(yards)),
        (_, PlayResult::Punt) => format!("Punt of {}.", plural_yards(yards)),
        (_, PlayResult::FieldGoalGood) => "The field goal is good!".to_string(),
        (_, PlayResult::FieldGoalNoGood) => "The field goal attempt is no good.".to_string(),
        _ => format!("Run, {}.", gain(yards)),
    }
}

fn yardage(yards: i32) -> String {
    if yards > 0 {
        format!("{yards}-yard")
    } else {
        "Short".to_string()
    }
}

fn plural_yards(yards: impl Into<i64>) -> String {
    let yards = yards.into();
    if yards.abs() == 1 {
        format!("{yards} yard")
    } else {
        format!("{yards} yards")
    }
}

fn gain(yards: i32) -> String {
    match yards {
        0 => "no gain".to_string(),
        y if y > 0 => format!("gain of {}", plural_yards(y)),
        y => format!("loss of {}", plural_yards(-i64::from(y))),
    }
}

/// "own 25", "midfield" or "opp 30"
pub fn describe_spot(field_position: i32) -> String {
    match field_position {
        50 => "midfield".to_string(),
        fp if fp < 50 => format!("own {fp}"),
        fp => format!("opp {}", 100 - fp),
    }
}

/// "1st & 10", "4th & Goal"
pub fn describe_down(down: u8, yards_to_go: i32, field_position: i32) -> String {
    let ordinal = match down {
        1 => "1st",
        2 => "2nd",
        3 => "3rd",
        _ => "4th",
    };
    if yards_to_go >= 100 - field_position {
        format!("{ordinal} & Goal")
    } else {
        format!("{ordinal} & {yards_to_go}")
    }
}

pub fn describe_drive(drive: &Drive, offense_name: &str) -> String {
    let outcome = match drive.result {
        DriveResult::Touchdown => "touchdown",
        DriveResult::Turnover => "turnover",
        DriveResult::TurnoverOnDowns => "turnover on downs",
        DriveResult::Punt => "punt",
        DriveResult::FieldGoal => "field goal",
        DriveResult::MissedFieldGoal => "missed field goal",
    };
    format!(
        "Drive {}: {} from {}, {} plays, {} ({}-{})",
        drive.drive_number,
        offense_name,
        describe_spot(drive.starting_field_position),
        drive.play_count,
        outcome,
        drive.score_a_after,
        drive.score_b_after
    )
}
