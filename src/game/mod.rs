//! Playing a generated puzzle
//!
//! Shared by the TUI and the plain-text interactive mode.

mod session;

pub use session::{Game, GuessOutcome};
