//! A player's progress through one puzzle

use crate::core::uppercase;
use crate::generator::{Puzzle, word_points};
use rand::Rng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashSet;
use std::fmt;

/// Result of submitting a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    Accepted { word: String, points: u32 },
    TooShort { min_length: usize },
    MissingCenter(char),
    InvalidLetter(char),
    NotInWordList,
    AlreadyFound,
}

impl GuessOutcome {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

impl fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted { word, points } => {
                let unit = if *points == 1 { "point" } else { "points" };
                write!(f, "{word} +{points} {unit}")
            }
            Self::TooShort { min_length } => {
                write!(f, "Too short: words need at least {min_length} letters")
            }
            Self::MissingCenter(center) => write!(f, "Missing center letter {center}"),
            Self::InvalidLetter(letter) => write!(f, "{letter} is not in the puzzle"),
            Self::NotInWordList => write!(f, "Not in word list"),
            Self::AlreadyFound => write!(f, "Already found"),
        }
    }
}

/// Game state for a single puzzle
#[derive(Debug, Clone)]
pub struct Game {
    puzzle: Puzzle,
    /// Distinct answers in dictionary order
    answers: Vec<String>,
    max_score: u32,
    found: Vec<String>,
    score: u32,
    outer: Vec<char>,
}

impl Game {
    #[must_use]
    pub fn new(puzzle: Puzzle) -> Self {
        let outer = puzzle.outer_letters();
        let answers: Vec<String> = {
            let mut seen = FxHashSet::default();
            puzzle
                .valid_words
                .iter()
                .filter(|word| seen.insert(word.as_str()))
                .cloned()
                .collect()
        };
        let max_score = answers
            .iter()
            .map(|word| word_points(word, puzzle.min_length))
            .sum();

        Self {
            puzzle,
            answers,
            max_score,
            found: Vec::new(),
            score: 0,
            outer,
        }
    }

    /// Check a word and record it when it is a new answer
    ///
    /// Checks run in order: length, letters, center, word list, repeats.
    pub fn submit(&mut self, input: &str) -> GuessOutcome {
        let word: String = input.trim().chars().map(uppercase).collect();
        let min_length = self.puzzle.min_length;

        if word.chars().count() < min_length {
            return GuessOutcome::TooShort { min_length };
        }
        if let Some(letter) = word.chars().find(|&c| !self.puzzle.letters.contains(c)) {
            return GuessOutcome::InvalidLetter(letter);
        }
        if !word.contains(self.puzzle.center_letter) {
            return GuessOutcome::MissingCenter(self.puzzle.center_letter);
        }
        if !self.answers.contains(&word) {
            return GuessOutcome::NotInWordList;
        }
        if self.found.contains(&word) {
            return GuessOutcome::AlreadyFound;
        }

        let points = word_points(&word, min_length);
        self.score += points;
        self.found.push(word.clone());
        GuessOutcome::Accepted { word, points }
    }

    /// Reorder the outer letters for display
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.outer.shuffle(rng);
    }

    #[must_use]
    pub const fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    #[must_use]
    pub const fn center(&self) -> char {
        self.puzzle.center_letter
    }

    /// Outer letters in current display order
    #[must_use]
    pub fn outer_letters(&self) -> &[char] {
        &self.outer
    }

    /// Found words in the order they were found
    #[must_use]
    pub fn found_words(&self) -> &[String] {
        &self.found
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Points for finding every distinct answer
    #[must_use]
    pub const fn max_score(&self) -> u32 {
        self.max_score
    }

    /// Distinct answers in dictionary order
    #[must_use]
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.len() - self.found.len()
    }

    /// Fraction of the total score earned, in `[0, 1]`
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.max_score() == 0 {
            return 1.0;
        }
        f64::from(self.score) / f64::from(self.max_score())
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.remaining() == 0
    }

    /// Answers not yet found, in dictionary order
    #[must_use]
    pub fn missed_words(&self) -> Vec<&str> {
        self.answers
            .iter()
            .filter(|w| !self.found.contains(w))
            .map(String::as_str)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Dictionary, LetterSet};
    use crate::generator::{GeneratorConfig, ScriptedDraw, generate_puzzle};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn game() -> Game {
        let dict = Dictionary::new(["TASTE", "TIE", "EAT", "SUITE", "SEAT", "QUIZ"]);
        let mut source = ScriptedDraw::new([LetterSet::parse("AEIOUST").unwrap()]);
        let puzzle = generate_puzzle(&dict, &GeneratorConfig::default(), &mut source).unwrap();
        Game::new(puzzle)
    }

    #[test]
    fn accepts_valid_word_and_scores_it() {
        let mut game = game();
        assert_eq!(
            game.submit("taste"),
            GuessOutcome::Accepted {
                word: "TASTE".to_string(),
                points: 5
            }
        );
        assert_eq!(game.score(), 5);
        assert_eq!(game.found_words(), &["TASTE".to_string()]);
    }

    #[test]
    fn min_length_word_scores_one_point() {
        let mut game = game();
        assert_eq!(
            game.submit("SEAT"),
            GuessOutcome::Accepted {
                word: "SEAT".to_string(),
                points: 1
            }
        );
    }

    #[test]
    fn rejects_too_short() {
        let mut game = game();
        assert_eq!(game.submit("TIE"), GuessOutcome::TooShort { min_length: 4 });
    }

    #[test]
    fn rejects_foreign_letter() {
        let mut game = game();
        assert_eq!(game.submit("QUIZ"), GuessOutcome::InvalidLetter('Q'));
    }

    #[test]
    fn rejects_missing_center() {
        let mut game = game();
        assert_eq!(game.center(), 'E');
        assert_eq!(game.submit("TOAST"), GuessOutcome::MissingCenter('E'));
    }

    #[test]
    fn rejects_unknown_word() {
        let mut game = game();
        assert_eq!(game.submit("SETA"), GuessOutcome::NotInWordList);
    }

    #[test]
    fn rejects_repeat() {
        let mut game = game();
        assert!(game.submit("SUITE").is_accepted());
        assert_eq!(game.submit("suite"), GuessOutcome::AlreadyFound);
        assert_eq!(game.score(), 5);
    }

    #[test]
    fn completes_after_all_words() {
        let mut game = game();
        assert_eq!(game.remaining(), 3);
        assert!(!game.is_complete());

        for word in ["TASTE", "SUITE", "SEAT"] {
            assert!(game.submit(word).is_accepted());
        }

        assert!(game.is_complete());
        assert_eq!(game.score(), game.max_score());
        assert!((game.progress() - 1.0).abs() < f64::EPSILON);
        assert!(game.missed_words().is_empty());
    }

    #[test]
    fn missed_words_in_dictionary_order() {
        let mut game = game();
        game.submit("SEAT");
        assert_eq!(game.missed_words(), vec!["TASTE", "SUITE"]);
    }

    #[test]
    fn shuffle_keeps_outer_letters() {
        let mut game = game();
        let mut before = game.outer_letters().to_vec();
        game.shuffle(&mut StdRng::seed_from_u64(3));
        let mut after = game.outer_letters().to_vec();

        before.sort_unstable();
        after.sort_unstable();
        assert_eq!(before, after);
        assert!(!after.contains(&game.center()));
    }

    #[test]
    fn duplicate_dictionary_words_count_once() {
        let dict = Dictionary::new(["TASTE", "SEAT", "SEAT"]);
        let mut source = ScriptedDraw::new([LetterSet::parse("AEIOUST").unwrap()]);
        let puzzle = generate_puzzle(&dict, &GeneratorConfig::default(), &mut source).unwrap();
        assert_eq!(puzzle.valid_words, vec!["TASTE", "SEAT", "SEAT"]);

        let mut game = Game::new(puzzle);
        assert_eq!(game.answers(), &["TASTE".to_string(), "SEAT".to_string()]);
        assert_eq!(game.max_score(), 6);

        assert!(game.submit("TASTE").is_accepted());
        assert!(game.submit("SEAT").is_accepted());
        assert_eq!(game.submit("SEAT"), GuessOutcome::AlreadyFound);

        assert_eq!(game.remaining(), 0);
        assert!(game.is_complete());
        assert_eq!(game.score(), game.max_score());
        assert!(game.missed_words().is_empty());
    }

    #[test]
    fn empty_answer_list_is_complete_on_load() {
        let dict = Dictionary::new(["QUIZ"]);
        let mut source = ScriptedDraw::new([LetterSet::parse("AEIOUST").unwrap()]);
        let puzzle = generate_puzzle(&dict, &GeneratorConfig::default(), &mut source).unwrap();

        let game = Game::new(puzzle);
        assert!(game.is_complete());
        assert_eq!(game.max_score(), 0);
    }

    #[test]
    fn outcome_messages() {
        assert_eq!(
            GuessOutcome::Accepted {
                word: "SEAT".to_string(),
                points: 1
            }
            .to_string(),
            "SEAT +1 point"
        );
        assert_eq!(GuessOutcome::NotInWordList.to_string(), "Not in word list");
        assert_eq!(
            GuessOutcome::MissingCenter('E').to_string(),
            "Missing center letter E"
        );
    }
}
