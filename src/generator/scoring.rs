//! Puzzle quality scoring
//!
//! A candidate puzzle is judged on two things: how many distinct letters its
//! answers actually exercise, and how close its total point value lands to a
//! target that is neither sparse nor overwhelming.

use rustc_hash::FxHashSet;
use serde::Serialize;

/// Points awarded per distinct letter used across the answers
pub const LETTER_DIVERSITY_WEIGHT: f64 = 20.0;

/// Total point value at which the balance bonus peaks
pub const TARGET_TOTAL_SCORE: f64 = 100.0;

/// Maximum balance bonus, awarded at exactly [`TARGET_TOTAL_SCORE`]
pub const MAX_BALANCE_BONUS: f64 = 100.0;

/// Points for a single answer
///
/// Minimum-length words are worth 1 point; longer words are worth their
/// full length.
///
/// # Examples
/// ```
/// use spelling_bee::generator::word_points;
///
/// assert_eq!(word_points("TEAS", 4), 1);
/// assert_eq!(word_points("TASTE", 4), 5);
/// ```
#[inline]
#[must_use]
pub fn word_points(word: &str, min_length: usize) -> u32 {
    let length = word.chars().count();
    if length == min_length {
        1
    } else {
        length as u32
    }
}

/// Heuristic quality score
///
/// `used_letters * 20 + max(0, 100 - |100 - total_score| / 2)`
#[must_use]
pub fn heuristic_score(used_letters: usize, total_score: u32) -> f64 {
    let diversity = used_letters as f64 * LETTER_DIVERSITY_WEIGHT;
    let distance = (TARGET_TOTAL_SCORE - f64::from(total_score)).abs();
    let balance = (MAX_BALANCE_BONUS - distance / 2.0).max(0.0);
    diversity + balance
}

/// Derived metrics for one (letter set, center) pairing
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateStats {
    /// Distinct characters appearing across all valid words
    pub used_letter_count: usize,
    /// Sum of [`word_points`] over all valid words
    pub total_possible_score: u32,
    pub heuristic_score: f64,
}

impl CandidateStats {
    /// Compute stats for a list of valid words
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::generator::CandidateStats;
    ///
    /// let stats = CandidateStats::from_words(&["TASTE", "SUITE"], 4);
    /// assert_eq!(stats.used_letter_count, 6);
    /// assert_eq!(stats.total_possible_score, 10);
    /// assert!((stats.heuristic_score - 175.0).abs() < f64::EPSILON);
    /// ```
    #[must_use]
    pub fn from_words<S: AsRef<str>>(words: &[S], min_length: usize) -> Self {
        let used_letters: FxHashSet<char> =
            words.iter().flat_map(|word| word.as_ref().chars()).collect();

        let total_possible_score = words
            .iter()
            .map(|word| word_points(word.as_ref(), min_length))
            .sum();

        Self {
            used_letter_count: used_letters.len(),
            total_possible_score,
            heuristic_score: heuristic_score(used_letters.len(), total_possible_score),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn min_length_word_scores_one() {
        assert_eq!(word_points("SEAT", 4), 1);
        assert_eq!(word_points("SEATS", 5), 1);
    }

    #[test]
    fn longer_word_scores_length() {
        assert_eq!(word_points("STATUE", 4), 6);
        assert_eq!(word_points("ESTATES", 4), 7);
    }

    #[test]
    fn heuristic_peaks_at_target() {
        assert!(approx_eq(heuristic_score(0, 100), 100.0));
        assert!(approx_eq(heuristic_score(7, 100), 240.0));
    }

    #[test]
    fn heuristic_decays_half_point_per_unit() {
        assert!(approx_eq(heuristic_score(0, 90), 95.0));
        assert!(approx_eq(heuristic_score(0, 110), 95.0));
        assert!(approx_eq(heuristic_score(0, 101), 99.5));
    }

    #[test]
    fn heuristic_balance_floors_at_zero() {
        assert!(approx_eq(heuristic_score(0, 300), 0.0));
        assert!(approx_eq(heuristic_score(3, 1000), 60.0));
    }

    #[test]
    fn empty_candidate_scores_fifty() {
        let words: [&str; 0] = [];
        let stats = CandidateStats::from_words(&words, 4);
        assert_eq!(stats.used_letter_count, 0);
        assert_eq!(stats.total_possible_score, 0);
        assert!(approx_eq(stats.heuristic_score, 50.0));
    }

    #[test]
    fn stats_for_known_words() {
        let stats = CandidateStats::from_words(&["TASTE", "SUITE"], 4);
        assert_eq!(stats.used_letter_count, 6);
        assert_eq!(stats.total_possible_score, 10);
        assert!(approx_eq(stats.heuristic_score, 175.0));
    }

    #[test]
    fn stats_mix_min_length_and_longer() {
        // SEAT = 1, EAST = 1, STATE = 5
        let stats = CandidateStats::from_words(&["SEAT", "EAST", "STATE"], 4);
        assert_eq!(stats.used_letter_count, 4);
        assert_eq!(stats.total_possible_score, 7);
    }

    #[test]
    fn stats_serialize_camel_case() {
        let stats = CandidateStats::from_words(&["TASTE"], 4);
        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json["usedLetterCount"], 4);
        assert_eq!(json["totalPossibleScore"], 5);
        assert!(json["heuristicScore"].is_number());
    }
}
