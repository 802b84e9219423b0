//! Word lookup command
//!
//! Lists every dictionary word spellable with a set of letters.

use crate::core::{Dictionary, PuzzleError};
use crate::generator::valid_words;
use serde::Serialize;

/// Words matching a letter set, shaped like the lookup response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordsResult {
    pub valid_words: Vec<String>,
    pub count: usize,
}

/// Find words spellable with `letters`
///
/// Non-alphabetic characters in `letters` are ignored, so `"a,e,s,t"` and
/// `"AEST"` are equivalent.
///
/// # Errors
///
/// Returns an error if `letters` has no letters or `min_length` is 0.
pub fn find_words(
    dictionary: &Dictionary,
    letters: &str,
    min_length: usize,
) -> Result<WordsResult, PuzzleError> {
    let letters = letters.chars().filter(|c| c.is_alphabetic());
    let valid_words: Vec<String> = valid_words(dictionary, letters, min_length)?
        .into_iter()
        .map(str::to_owned)
        .collect();

    Ok(WordsResult {
        count: valid_words.len(),
        valid_words,
    })
}
