//! Drive recorder: append-only history of finished drives

use crate::core::{Drive, Play, TeamId};
use serde::{Deserialize, Serialize};

/// Accumulates one `Drive` per drive-ending play
///
/// Existing entries are never modified. Each drive remembers how many plays
/// it contained, so the plays of any drive can be recovered from the game's
/// ordered play list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriveRecorder {
    drives: Vec<Drive>,
    /// Total plays covered by recorded drives
    plays_recorded: usize,
}

impl DriveRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, drive: Drive) {
        self.plays_recorded += drive.play_count;
        self.drives.push(drive);
    }

    pub fn drives(&self) -> &[Drive] {
        &self.drives
    }

    pub fn last(&self) -> Option<&Drive> {
        self.drives.last()
    }

    pub fn len(&self) -> usize {
        self.drives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drives.is_empty()
    }

    pub fn plays_recorded(&self) -> usize {
        self.plays_recorded
    }

    /// Plays belonging to a finished drive, sliced out of the game's play list
    pub fn plays_for_drive<'a>(&self, used_plays: &'a [Play], drive_number: u32) -> Option<&'a [Play]> {
        let mut start = 0;
        for drive in &self.drives {
            let end = start + drive.play_count;
            if drive.drive_number == drive_number {
                return used_plays.get(start..end);
            }
            start = end;
        }
        None
    }

    /// Total points scored by a team across recorded drives
    pub fn points_for(&self, team: TeamId) -> u32 {
        self.drives
            .iter()
            .filter(|d| d.offense_team == team)
            .map(|d| d.points)
            .sum()
    }
}
