//! Core game types

pub mod drive;
pub mod play;
pub mod team;

pub use drive::{Drive, DriveResult};
pub use play::{Play, PlayOutcome, PlayResult, PlayType};
pub use team::{Matchup, Side, Team, TeamId, TeamName};
