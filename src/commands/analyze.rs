//! Letter set analysis command
//!
//! Scores a specific letter set under each possible center letter.

use crate::core::{Dictionary, LetterSet};
use crate::generator::{CandidateStats, SearchState, evaluate_letter_set};

/// Score of one center letter
pub struct CenterAnalysis {
    pub center: char,
    pub word_count: usize,
    pub stats: CandidateStats,
}

/// Result of analyzing a letter set
pub struct AnalysisResult {
    pub letters: LetterSet,
    pub min_length: usize,
    pub centers: Vec<CenterAnalysis>,
    /// Center the generator would pick (earliest on ties)
    pub best_center: char,
    /// Answers for the best center
    pub best_words: Vec<String>,
}

/// Analyze a letter set such as `"aeioust"`
///
/// # Errors
///
/// Returns an error if:
/// - `letters` is not exactly seven distinct letters
/// - `min_length` is 0
pub fn analyze_letters(
    dictionary: &Dictionary,
    letters: &str,
    min_length: usize,
) -> Result<AnalysisResult, String> {
    let letter_set = LetterSet::parse(letters)
        .ok_or_else(|| format!("Invalid letter set '{letters}': need 7 distinct letters"))?;

    let candidates =
        evaluate_letter_set(dictionary, letter_set, min_length).map_err(|e| e.to_string())?;

    let centers = candidates
        .iter()
        .map(|c| CenterAnalysis {
            center: c.center,
            word_count: c.valid_words.len(),
            stats: c.stats,
        })
        .collect();

    let best = candidates
        .into_iter()
        .fold(SearchState::default(), SearchState::consider)
        .into_best()
        .ok_or("Letter set produced no candidates")?;

    Ok(AnalysisResult {
        letters: letter_set,
        min_length,
        centers,
        best_center: best.center,
        best_words: best.valid_words.into_iter().map(str::to_owned).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict() -> Dictionary {
        Dictionary::new(["TASTE", "TIE", "EAT", "SUITE"])
    }

    #[test]
    fn analyzes_every_center() {
        let result = analyze_letters(&dict(), "aeioust", 4).unwrap();

        assert_eq!(result.letters.to_string(), "AEIOUST");
        assert_eq!(result.centers.len(), 7);
        assert_eq!(result.best_center, 'E');
        assert_eq!(result.best_words, vec!["TASTE", "SUITE"]);

        let o = &result.centers[3];
        assert_eq!(o.center, 'O');
        assert_eq!(o.word_count, 0);
    }

    #[test]
    fn rejects_bad_letter_set() {
        let err = analyze_letters(&dict(), "aeiou", 4).err().unwrap();
        assert!(err.contains("need 7 distinct letters"));
    }

    #[test]
    fn rejects_zero_min_length() {
        assert!(analyze_letters(&dict(), "aeioust", 0).is_err());
    }
}
