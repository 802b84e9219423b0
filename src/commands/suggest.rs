//! Dictionary suggestions command
//!
//! Applies a `{ "add": [...], "remove": [...] }` suggestions file to a
//! dictionary file, keeping the dictionary uppercase and sorted. After a
//! real run the suggestions file is reset to empty lists.

use crate::wordlists::loader::load_from_file;
use anyhow::{Context, Result};
use log::info;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Contents of a suggestions file
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestions {
    #[serde(default)]
    pub add: Vec<String>,
    #[serde(default)]
    pub remove: Vec<String>,
}

impl Suggestions {
    /// Parse suggestions JSON; missing lists count as empty
    ///
    /// # Errors
    ///
    /// Returns an error if `content` is not valid suggestions JSON.
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }
}

/// What applying suggestions changed (or would change)
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SuggestionReport {
    pub original_count: usize,
    pub final_count: usize,
    pub added: Vec<String>,
    pub already_present: Vec<String>,
    pub removed: Vec<String>,
    pub not_found: Vec<String>,
    /// Dry run: neither file was written
    pub what_if: bool,
}

fn normalize(words: &[String]) -> Vec<String> {
    let mut words: Vec<String> = words
        .iter()
        .map(|w| w.trim().to_uppercase())
        .filter(|w| !w.is_empty())
        .collect();
    words.sort_unstable();
    words.dedup();
    words
}

/// Apply suggestions to a word set in place
///
/// Additions run first, so a word both added and removed ends up removed.
/// Every report list is sorted.
pub fn apply_to_words(words: &mut FxHashSet<String>, suggestions: &Suggestions) -> SuggestionReport {
    let original_count = words.len();
    let mut report = SuggestionReport {
        original_count,
        ..SuggestionReport::default()
    };

    for word in normalize(&suggestions.add) {
        if words.contains(&word) {
            report.already_present.push(word);
        } else {
            words.insert(word.clone());
            report.added.push(word);
        }
    }

    for word in normalize(&suggestions.remove) {
        if words.remove(&word) {
            report.removed.push(word);
        } else {
            report.not_found.push(word);
        }
    }

    report.final_count = words.len();
    report
}

/// Apply a suggestions file to a dictionary file
///
/// In what-if mode nothing is written. Otherwise the dictionary is
/// rewritten sorted and the suggestions file is cleared.
///
/// # Errors
///
/// Returns an error if either file cannot be read or written, or the
/// suggestions file is not valid JSON.
pub fn apply_suggestions(
    dictionary_path: &Path,
    suggestions_path: &Path,
    what_if: bool,
) -> Result<SuggestionReport> {
    let content = fs::read_to_string(suggestions_path).with_context(|| {
        format!("Failed to read suggestions {}", suggestions_path.display())
    })?;
    let suggestions = Suggestions::from_json(&content)
        .with_context(|| format!("Invalid JSON in {}", suggestions_path.display()))?;
    info!(
        "Suggestions: {} to add, {} to remove",
        suggestions.add.len(),
        suggestions.remove.len()
    );

    let mut words: FxHashSet<String> = load_from_file(dictionary_path)?
        .iter()
        .map(str::to_owned)
        .collect();
    let mut report = apply_to_words(&mut words, &suggestions);
    report.what_if = what_if;

    if what_if {
        info!("What-if mode: {} was not modified", dictionary_path.display());
        return Ok(report);
    }

    let mut sorted: Vec<String> = words.into_iter().collect();
    sorted.sort_unstable();
    let mut dictionary = sorted.join("\n");
    dictionary.push('\n');
    fs::write(dictionary_path, dictionary)
        .with_context(|| format!("Failed to write dictionary {}", dictionary_path.display()))?;
    info!(
        "Dictionary updated: {} words (was {})",
        report.final_count, report.original_count
    );

    let cleared = serde_json::to_string_pretty(&Suggestions::default())?;
    fs::write(suggestions_path, cleared).with_context(|| {
        format!("Failed to clear suggestions {}", suggestions_path.display())
    })?;

    Ok(report)
}
