//! Dictionary filter command
//!
//! Removes words on an exclusion list (profanity, proper names) from a
//! dictionary file, then writes the remainder back deduplicated and sorted.

use crate::wordlists::loader::{load_from_file, load_word_set};
use anyhow::{Context, Result};
use log::{info, warn};
use rustc_hash::FxHashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of filtering a dictionary
#[derive(Debug)]
pub struct FilterReport {
    pub original_count: usize,
    /// Remaining words, deduplicated and sorted
    pub kept: Vec<String>,
    /// Every removed occurrence, sorted
    pub removed: Vec<String>,
    pub output: PathBuf,
    /// Dry run: nothing was written
    pub what_if: bool,
}

/// Split `words` into (kept, removed) by the exclusion set
///
/// Kept words are deduplicated and sorted; removed words keep one entry per
/// occurrence.
#[must_use]
pub fn apply_exclusions(
    words: &[String],
    exclusions: &FxHashSet<String>,
) -> (Vec<String>, Vec<String>) {
    let (mut removed, mut kept): (Vec<String>, Vec<String>) = words
        .iter()
        .cloned()
        .partition(|word| exclusions.contains(word));

    kept.sort_unstable();
    kept.dedup();
    removed.sort_unstable();

    (kept, removed)
}

/// Filter a dictionary file by an exclusion list
///
/// Writes to `output`, or back over `dictionary_path` when `output` is
/// `None`. In what-if mode nothing is written.
///
/// # Errors
///
/// Returns an error if either input cannot be read or the output cannot be
/// written.
pub fn filter_dictionary(
    dictionary_path: &Path,
    exclusions_path: &Path,
    output: Option<&Path>,
    what_if: bool,
) -> Result<FilterReport> {
    let exclusions = load_word_set(exclusions_path)?;
    let dictionary = load_from_file(dictionary_path)?;

    let (kept, removed) = apply_exclusions(dictionary.words(), &exclusions);
    let output = output.unwrap_or(dictionary_path).to_path_buf();

    if what_if {
        info!("What-if mode: {} would not be modified", output.display());
    } else {
        let mut content = kept.join("\n");
        content.push('\n');
        fs::write(&output, content)
            .with_context(|| format!("Failed to write dictionary {}", output.display()))?;
        info!("Wrote {} words to {}", kept.len(), output.display());
    }

    if removed.is_empty() {
        warn!("No excluded words were found in {}", dictionary_path.display());
    }

    Ok(FilterReport {
        original_count: dictionary.len(),
        kept,
        removed,
        output,
        what_if,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    fn set(words: &[&str]) -> FxHashSet<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn apply_exclusions_splits_and_sorts() {
        let words: Vec<String> = ["ZEBRA", "APPLE", "DARN", "APPLE", "HECK", "DARN"]
            .iter()
            .map(|w| (*w).to_string())
            .collect();

        let (kept, removed) = apply_exclusions(&words, &set(&["DARN", "HECK"]));

        assert_eq!(kept, vec!["APPLE", "ZEBRA"]);
        assert_eq!(removed, vec!["DARN", "DARN", "HECK"]);
    }

    #[test]
    fn filter_overwrites_dictionary() {
        let dict = temp_file("zebra\napple\ndarn\n");
        let exclusions = temp_file("# bad words\nDarn\n");

        let report = filter_dictionary(dict.path(), exclusions.path(), None, false).unwrap();

        assert_eq!(report.original_count, 3);
        assert_eq!(report.removed, vec!["DARN"]);
        assert_eq!(report.output, dict.path());
        assert_eq!(fs::read_to_string(dict.path()).unwrap(), "APPLE\nZEBRA\n");
    }

    #[test]
    fn filter_to_separate_output() {
        let dict = temp_file("bee\nhive\n");
        let exclusions = temp_file("hive\n");
        let out_dir = tempfile::tempdir().unwrap();
        let out_path = out_dir.path().join("filtered.txt");

        let report =
            filter_dictionary(dict.path(), exclusions.path(), Some(&out_path), false).unwrap();

        assert_eq!(report.kept, vec!["BEE"]);
        assert_eq!(fs::read_to_string(&out_path).unwrap(), "BEE\n");
        assert_eq!(fs::read_to_string(dict.path()).unwrap(), "bee\nhive\n");
    }

    #[test]
    fn what_if_writes_nothing() {
        let dict = temp_file("bee\nhive\n");
        let exclusions = temp_file("hive\n");

        let report = filter_dictionary(dict.path(), exclusions.path(), None, true).unwrap();

        assert!(report.what_if);
        assert_eq!(report.removed, vec!["HIVE"]);
        assert_eq!(fs::read_to_string(dict.path()).unwrap(), "bee\nhive\n");
    }

    #[test]
    fn missing_exclusions_file_fails() {
        let dict = temp_file("bee\n");
        let result = filter_dictionary(dict.path(), Path::new("/nonexistent/list.txt"), None, true);
        assert!(result.is_err());
    }
}
