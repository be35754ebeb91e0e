//! Play banks: the externally supplied outcomes a game draws from

pub mod generator;
pub mod loader;
pub mod play_bank;

pub use generator::generate_bank;
pub use loader::{load_bank, parse_bank, save_bank};
pub use play_bank::{BankCursors, PlayBank, TeamPlays, MAX_YARDS};
