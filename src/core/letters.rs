//! The seven-letter set a puzzle is built from

use serde::Serialize;
use std::fmt;

/// Number of letters in every puzzle
pub const LETTER_SET_SIZE: usize = 7;

/// Seven distinct uppercase letters in drawn order
///
/// Order carries no meaning for scoring but is kept for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LetterSet([char; LETTER_SET_SIZE]);

impl LetterSet {
    /// Take the first seven distinct letters (uppercased) from a sequence
    ///
    /// Returns `None` if the sequence runs out before seven distinct values
    /// have been seen.
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::core::LetterSet;
    ///
    /// let set = LetterSet::from_distinct("aaeiousstt".chars()).unwrap();
    /// assert_eq!(set.to_string(), "AEIOUST");
    ///
    /// assert!(LetterSet::from_distinct("abc".chars()).is_none());
    /// ```
    pub fn from_distinct<I: IntoIterator<Item = char>>(letters: I) -> Option<Self> {
        let mut slots = [' '; LETTER_SET_SIZE];
        let mut filled = 0;

        for letter in letters.into_iter().map(uppercase) {
            if slots[..filled].contains(&letter) {
                continue;
            }
            slots[filled] = letter;
            filled += 1;
            if filled == LETTER_SET_SIZE {
                return Some(Self(slots));
            }
        }

        None
    }

    /// Parse user input such as `"aeioust"`
    ///
    /// Requires exactly seven distinct alphabetic characters.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let letters: Vec<char> = text.trim().chars().map(uppercase).collect();
        if letters.len() != LETTER_SET_SIZE || !letters.iter().all(|c| c.is_alphabetic()) {
            return None;
        }
        Self::from_distinct(letters)
    }

    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[char; LETTER_SET_SIZE] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.0.contains(&uppercase(letter))
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied()
    }

    /// Letters other than `center`, in drawn order
    #[must_use]
    pub fn outer_letters(&self, center: char) -> Vec<char> {
        let center = uppercase(center);
        self.iter().filter(|&c| c != center).collect()
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.0 {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

/// Uppercase a single character, keeping it as-is when it has no
/// single-character uppercase form
#[inline]
pub(crate) fn uppercase(letter: char) -> char {
    let mut upper = letter.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => letter,
    }
}
