//! Dictionary filtering by available letters
//!
//! A word qualifies when it is long enough and every one of its characters
//! belongs to the letter set. This is a per-character membership test, not
//! an anagram check: letters may be reused any number of times.

use crate::core::{Dictionary, LetterSet, PuzzleError, uppercase};
use rustc_hash::FxHashSet;

/// Set of letters a word may be spelled with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedLetters(FxHashSet<char>);

impl AllowedLetters {
    /// Build the set from any letter collection, uppercasing each letter
    ///
    /// # Errors
    /// Returns [`PuzzleError::EmptyLetterSet`] if no letters are given.
    pub fn new<I: IntoIterator<Item = char>>(letters: I) -> Result<Self, PuzzleError> {
        let set: FxHashSet<char> = letters.into_iter().map(uppercase).collect();
        if set.is_empty() {
            return Err(PuzzleError::EmptyLetterSet);
        }
        Ok(Self(set))
    }

    /// Whether every character of `word` is in the set
    #[inline]
    #[must_use]
    pub fn permits(&self, word: &str) -> bool {
        word.chars().all(|c| self.0.contains(&c))
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&LetterSet> for AllowedLetters {
    fn from(letters: &LetterSet) -> Self {
        Self(letters.iter().collect())
    }
}

/// Return every dictionary word spellable with `letters` and at least
/// `min_length` characters long, in dictionary order
///
/// # Errors
/// - [`PuzzleError::InvalidMinLength`] if `min_length` is 0
/// - [`PuzzleError::EmptyLetterSet`] if `letters` is empty
///
/// # Examples
/// ```
/// use spelling_bee::core::Dictionary;
/// use spelling_bee::generator::valid_words;
///
/// let dict = Dictionary::new(["AAAA", "TAT", "TEA", "AT"]);
/// let words = valid_words(&dict, ['a', 't'], 2).unwrap();
/// assert_eq!(words, vec!["AAAA", "TAT", "AT"]);
/// ```
pub fn valid_words<I>(
    dictionary: &Dictionary,
    letters: I,
    min_length: usize,
) -> Result<Vec<&str>, PuzzleError>
where
    I: IntoIterator<Item = char>,
{
    if min_length < 1 {
        return Err(PuzzleError::InvalidMinLength(min_length));
    }
    let allowed = AllowedLetters::new(letters)?;

    Ok(filter_words(dictionary.iter(), &allowed, min_length))
}

/// Unchecked filter used once arguments are known to be valid
pub(crate) fn filter_words<'a, I>(words: I, allowed: &AllowedLetters, min_length: usize) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    words
        .into_iter()
        .filter(|word| word.chars().count() >= min_length && allowed.permits(word))
        .collect()
}
