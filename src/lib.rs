//! Gridiron Sim - drive-based American football game simulation
//!
//! The engine consumes a bounded bank of pre-generated play outcomes and
//! advances score, field position, down and distance one play at a time,
//! grouping plays into drives until the game ends.

pub mod bank;
pub mod config;
pub mod core;
pub mod error;
pub mod game;
pub mod season;
pub mod service;
pub mod stats;

pub use error::{Result, SimError};
