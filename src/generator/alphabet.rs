//! Weighted source alphabet for letter draws

use crate::core::{LETTER_SET_SIZE, PuzzleError, uppercase};
use rustc_hash::FxHashSet;

/// Default source alphabet: every letter once, most common first
pub const DEFAULT_ALPHABET: &str = "AEIOURSTNLCDHPMBGFYWKVXZJQ";

/// Multiset of letters that candidate sets are drawn from
///
/// A letter listed several times is proportionally more likely to be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    letters: Vec<char>,
}

impl Alphabet {
    /// Parse an alphabet such as `"AAEEIST..."`
    ///
    /// Non-alphabetic characters (spaces, commas) are ignored and letters
    /// are uppercased.
    ///
    /// # Errors
    /// Returns [`PuzzleError::AlphabetTooSmall`] unless the alphabet holds at
    /// least seven distinct letters.
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::generator::Alphabet;
    ///
    /// let weighted = Alphabet::new("eeee aaa ttt s r n l").unwrap();
    /// assert_eq!(weighted.len(), 14);
    /// assert_eq!(weighted.distinct_count(), 7);
    ///
    /// assert!(Alphabet::new("aabbcc").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, PuzzleError> {
        let letters: Vec<char> = text
            .chars()
            .filter(|c| c.is_alphabetic())
            .map(uppercase)
            .collect();

        let distinct = count_distinct(&letters);
        if distinct < LETTER_SET_SIZE {
            return Err(PuzzleError::AlphabetTooSmall {
                distinct,
                required: LETTER_SET_SIZE,
            });
        }

        Ok(Self { letters })
    }

    /// Letters in listed order, repeats included
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[must_use]
    pub fn distinct_count(&self) -> usize {
        count_distinct(&self.letters)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            letters: DEFAULT_ALPHABET.chars().collect(),
        }
    }
}

fn count_distinct(letters: &[char]) -> usize {
    letters.iter().collect::<FxHashSet<_>>().len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_all_letters_once() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.len(), 26);
        assert_eq!(alphabet.distinct_count(), 26);
    }

    #[test]
    fn default_matches_parsed_constant() {
        assert_eq!(Alphabet::new(DEFAULT_ALPHABET).unwrap(), Alphabet::default());
    }

    #[test]
    fn weighted_keeps_repeats() {
        let alphabet = Alphabet::new("EEEAASTRNL").unwrap();
        assert_eq!(alphabet.len(), 10);
        assert_eq!(alphabet.distinct_count(), 7);
    }

    #[test]
    fn ignores_separators_and_case() {
        let alphabet = Alphabet::new("a, b, c, d, e, f, g").unwrap();
        assert_eq!(alphabet.letters(), &['A', 'B', 'C', 'D', 'E', 'F', 'G']);
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(
            Alphabet::new(""),
            Err(PuzzleError::AlphabetTooSmall {
                distinct: 0,
                required: 7
            })
        );
    }

    #[test]
    fn rejects_too_few_distinct() {
        assert_eq!(
            Alphabet::new("AAAAAABBBBBBCCCCDDEEFF"),
            Err(PuzzleError::AlphabetTooSmall {
                distinct: 6,
                required: 7
            })
        );
    }
}
