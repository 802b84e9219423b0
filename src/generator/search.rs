//! Random-restart search for a well-balanced puzzle
//!
//! Each attempt draws a letter set and evaluates it under every possible
//! center letter. The search is a fold over that (attempt × center)
//! sequence: the accumulator only ever swaps its incumbent for a strictly
//! better candidate, so extra attempts can never make the result worse.

use super::filter::{AllowedLetters, filter_words};
use super::scoring::CandidateStats;
use super::{GeneratorConfig, LetterSource};
use crate::core::{Dictionary, LetterSet, PuzzleError};
use serde::Serialize;

/// A generated puzzle, shaped for the JSON response contract
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Puzzle {
    pub letters: LetterSet,
    pub center_letter: char,
    /// Dictionary words spellable with `letters` that contain the center
    pub valid_words: Vec<String>,
    pub stats: CandidateStats,
    /// Minimum answer length the puzzle was generated for
    #[serde(skip)]
    pub min_length: usize,
}

impl Puzzle {
    /// Non-center letters in drawn order
    #[must_use]
    pub fn outer_letters(&self) -> Vec<char> {
        self.letters.outer_letters(self.center_letter)
    }
}

/// One (letter set, center) pairing evaluated against the dictionary
///
/// Words are borrowed from the dictionary; only the winning candidate is
/// copied out into a [`Puzzle`].
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<'a> {
    pub letters: LetterSet,
    pub center: char,
    pub valid_words: Vec<&'a str>,
    pub stats: CandidateStats,
}

impl Candidate<'_> {
    #[must_use]
    pub fn into_puzzle(self, min_length: usize) -> Puzzle {
        Puzzle {
            letters: self.letters,
            center_letter: self.center,
            valid_words: self.valid_words.into_iter().map(str::to_owned).collect(),
            stats: self.stats,
            min_length,
        }
    }
}

/// Best-so-far accumulator of the search fold
#[derive(Debug, Clone, Default)]
pub struct SearchState<'a> {
    best: Option<Candidate<'a>>,
}

impl<'a> SearchState<'a> {
    /// Fold step: keep the incumbent unless `candidate` scores strictly higher
    #[must_use]
    pub fn consider(self, candidate: Candidate<'a>) -> Self {
        match self.best {
            Some(ref best) if candidate.stats.heuristic_score <= best.stats.heuristic_score => {
                self
            }
            _ => Self {
                best: Some(candidate),
            },
        }
    }

    #[must_use]
    pub fn best_score(&self) -> Option<f64> {
        self.best.as_ref().map(|c| c.stats.heuristic_score)
    }

    #[must_use]
    pub const fn best(&self) -> Option<&Candidate<'a>> {
        self.best.as_ref()
    }

    #[must_use]
    pub fn into_best(self) -> Option<Candidate<'a>> {
        self.best
    }
}

/// Evaluate one center against words already filtered by the letter set
#[must_use]
pub fn evaluate_candidate<'a>(
    pool: &[&'a str],
    letters: LetterSet,
    center: char,
    min_length: usize,
) -> Candidate<'a> {
    let valid_words: Vec<&'a str> = pool
        .iter()
        .copied()
        .filter(|word| word.contains(center))
        .collect();
    let stats = CandidateStats::from_words(&valid_words, min_length);

    Candidate {
        letters,
        center,
        valid_words,
        stats,
    }
}

/// Evaluate a letter set under each of its letters as center, in drawn order
///
/// # Errors
/// Returns [`PuzzleError::InvalidMinLength`] if `min_length` is 0.
pub fn evaluate_letter_set(
    dictionary: &Dictionary,
    letters: LetterSet,
    min_length: usize,
) -> Result<Vec<Candidate<'_>>, PuzzleError> {
    if min_length < 1 {
        return Err(PuzzleError::InvalidMinLength(min_length));
    }
    Ok(evaluate_all_centers(dictionary, letters, min_length))
}

fn evaluate_all_centers(
    dictionary: &Dictionary,
    letters: LetterSet,
    min_length: usize,
) -> Vec<Candidate<'_>> {
    let allowed = AllowedLetters::from(&letters);
    let pool = filter_words(dictionary.iter(), &allowed, min_length);

    letters
        .iter()
        .map(|center| evaluate_candidate(&pool, letters, center, min_length))
        .collect()
}

/// Run the search and return the best candidate found
///
/// Argument checks run before any draw: minimum length, then dictionary
/// emptiness, then the attempt budget. A source that runs dry ends the
/// search early; if it yields nothing at all the result is
/// [`PuzzleError::NoResult`].
///
/// # Errors
/// - [`PuzzleError::InvalidMinLength`] if `config.min_length` is 0
/// - [`PuzzleError::NoResult`] if the dictionary is empty
/// - [`PuzzleError::ZeroAttempts`] if `config.max_attempts` is 0
pub fn search<'a, S>(
    dictionary: &'a Dictionary,
    config: &GeneratorConfig,
    source: &mut S,
) -> Result<Candidate<'a>, PuzzleError>
where
    S: LetterSource + ?Sized,
{
    let min_length = config.min_length;
    if min_length < 1 {
        return Err(PuzzleError::InvalidMinLength(min_length));
    }
    if dictionary.is_empty() {
        return Err(PuzzleError::NoResult);
    }
    if config.max_attempts == 0 {
        return Err(PuzzleError::ZeroAttempts);
    }

    (0..config.max_attempts)
        .map_while(|_| source.draw(&config.alphabet))
        .flat_map(|letters| evaluate_all_centers(dictionary, letters, min_length))
        .fold(SearchState::default(), SearchState::consider)
        .into_best()
        .ok_or(PuzzleError::NoResult)
}

/// Run the search and copy the winner out as a [`Puzzle`]
///
/// # Errors
/// Same as [`search`].
///
/// # Examples
/// ```
/// use spelling_bee::core::{Dictionary, LetterSet};
/// use spelling_bee::generator::{GeneratorConfig, ScriptedDraw, generate_puzzle};
///
/// let dict = Dictionary::new(["TASTE", "TIE", "EAT", "SUITE"]);
/// let mut source = ScriptedDraw::new([LetterSet::parse("AEIOUST").unwrap()]);
///
/// let puzzle = generate_puzzle(&dict, &GeneratorConfig::default(), &mut source).unwrap();
/// assert_eq!(puzzle.center_letter, 'E');
/// assert_eq!(puzzle.valid_words, vec!["TASTE", "SUITE"]);
/// ```
pub fn generate_puzzle<S>(
    dictionary: &Dictionary,
    config: &GeneratorConfig,
    source: &mut S,
) -> Result<Puzzle, PuzzleError>
where
    S: LetterSource + ?Sized,
{
    search(dictionary, config, source).map(|best| best.into_puzzle(config.min_length))
}

/// Puzzle generator bound to a dictionary, config, and draw source
pub struct Generator<'a, S: LetterSource> {
    source: S,
    dictionary: &'a Dictionary,
    config: GeneratorConfig,
}

impl<'a, S: LetterSource> Generator<'a, S> {
    pub const fn new(source: S, dictionary: &'a Dictionary, config: GeneratorConfig) -> Self {
        Self {
            source,
            dictionary,
            config,
        }
    }

    /// Generate the next puzzle, advancing the draw source
    ///
    /// # Errors
    /// Same as [`search`].
    pub fn generate(&mut self) -> Result<Puzzle, PuzzleError> {
        generate_puzzle(self.dictionary, &self.config, &mut self.source)
    }

    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }
}
