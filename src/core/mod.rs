//! Core domain types for Spelling Bee
//!
//! The dictionary, the 7-letter set, and the error taxonomy shared by the
//! generator and the game. Everything here is pure and has no I/O.

mod dictionary;
mod error;
mod letters;

pub use dictionary::Dictionary;
pub use error::PuzzleError;
pub use letters::{LETTER_SET_SIZE, LetterSet};
pub(crate) use letters::uppercase;
