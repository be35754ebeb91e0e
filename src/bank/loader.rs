//! Async play bank loading and saving
//!
//! Banks are stored as pretty-printed JSON, one file per game.

use crate::bank::PlayBank;
use crate::{Result, SimError};
use std::path::Path;

/// Load a play bank from a JSON file
pub async fn load_bank<P: AsRef<Path>>(path: P) -> Result<PlayBank> {
    let path = path.as_ref();
    let json = tokio::fs::read_to_string(path).await?;
    parse_bank(&json).map_err(|e| match e {
        SimError::SerializationError(msg) => {
            SimError::SerializationError(format!("{}: {msg}", path.display()))
        }
        other => other,
    })
}

/// Parse a play bank from JSON text
pub fn parse_bank(json: &str) -> Result<PlayBank> {
    Ok(serde_json::from_str(json)?)
}

/// Write a play bank as JSON
pub async fn save_bank<P: AsRef<Path>>(bank: &PlayBank, path: P) -> Result<()> {
    let json = serde_json::to_string_pretty(bank)?;
    tokio::fs::write(path.as_ref(), json).await?;
    Ok(())
}
